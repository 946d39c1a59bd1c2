//! Pure calculation functions for frame geometry.
//!
//! All functions here are pure and testable without any I/O or images.
//! Dimensions are `(width, height)` tuples.

use super::params::Padding;
use crate::config::{BorderPlacement, Centering};

/// Orientation of a source image, as far as scaling is concerned.
///
/// Square images count as landscape: ties favor width-driven scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn of(width: u32, height: u32) -> Self {
        if is_portrait(width, height) {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }
}

/// Returns true iff the image is taller than it is wide.
///
/// ```
/// # use nocrop::imaging::is_portrait;
/// assert!(is_portrait(1000, 2000));
/// assert!(!is_portrait(2000, 1000));
/// assert!(!is_portrait(500, 500));
/// ```
pub fn is_portrait(width: u32, height: u32) -> bool {
    height > width
}

/// The dimension whose target size determines the scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrivingAxis {
    Width,
    Height,
}

/// Space available for the picture inside the frame.
///
/// [`BorderPlacement::Outside`] takes the border off once (`frame - border`);
/// the border is then added on every edge, so the canvas grows past the frame.
/// [`BorderPlacement::Inside`] takes it off both edges (`frame - 2 * border`).
/// Saturates at zero; [`FrameConfig::validate`](crate::config::FrameConfig::validate)
/// rejects borders that would leave no interior.
pub fn interior_size(frame: (u32, u32), border: u32, placement: BorderPlacement) -> (u32, u32) {
    let (frame_w, frame_h) = frame;
    let reserved = match placement {
        BorderPlacement::Outside => border,
        BorderPlacement::Inside => border.saturating_mul(2),
    };
    (
        frame_w.saturating_sub(reserved),
        frame_h.saturating_sub(reserved),
    )
}

/// Scale `src` so that `driving` matches the interior exactly.
///
/// The other dimension keeps the aspect ratio, rounded to the nearest pixel
/// and never below 1.
fn scale_along(source: (u32, u32), interior: (u32, u32), driving: DrivingAxis) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (int_w, int_h) = interior;

    match driving {
        DrivingAxis::Height => {
            let w = (int_h as f64 / src_h as f64 * src_w as f64).round() as u32;
            (w.max(1), int_h)
        }
        DrivingAxis::Width => {
            let h = (int_w as f64 / src_w as f64 * src_h as f64).round() as u32;
            (int_w, h.max(1))
        }
    }
}

/// Pick the driving axis and compute the scaled size of the picture.
///
/// Orientation decides first: portrait sources are driven by height, landscape
/// and square sources by width. When that would push the other dimension past
/// the interior (a portrait source wider than the frame's own aspect, such as an
/// already-composed output), the other axis drives instead so the picture
/// always fits.
///
/// # Returns
/// * `(axis, (width, height))` - the axis used and the scaled dimensions
pub fn calculate_fit_dimensions(
    source: (u32, u32),
    interior: (u32, u32),
) -> (DrivingAxis, (u32, u32)) {
    let (src_w, src_h) = source;
    let (int_w, int_h) = interior;

    let preferred = match Orientation::of(src_w, src_h) {
        Orientation::Portrait => DrivingAxis::Height,
        Orientation::Landscape => DrivingAxis::Width,
    };

    let (w, h) = scale_along(source, interior, preferred);
    if w <= int_w && h <= int_h {
        return (preferred, (w, h));
    }

    let fallback = match preferred {
        DrivingAxis::Height => DrivingAxis::Width,
        DrivingAxis::Width => DrivingAxis::Height,
    };
    let (w, h) = scale_along(source, interior, fallback);
    (fallback, (w.min(int_w), h.min(int_h)))
}

/// Padding that centers a scaled picture inside the interior.
///
/// Only the non-driving axis is padded. With [`Centering::Truncate`] both sides
/// get `leftover / 2`, so an odd leftover leaves the canvas one pixel short.
/// [`Centering::Exact`] hands that pixel to the right or bottom edge.
pub fn calculate_centering_padding(
    scaled: (u32, u32),
    interior: (u32, u32),
    driving: DrivingAxis,
    centering: Centering,
) -> Padding {
    let split = |leftover: u32| -> (u32, u32) {
        let half = leftover / 2;
        match centering {
            Centering::Truncate => (half, half),
            Centering::Exact => (half, leftover - half),
        }
    };

    match driving {
        DrivingAxis::Height => {
            let (left, right) = split(interior.0.saturating_sub(scaled.0));
            Padding {
                left,
                top: 0,
                right,
                bottom: 0,
            }
        }
        DrivingAxis::Width => {
            let (top, bottom) = split(interior.1.saturating_sub(scaled.1));
            Padding {
                left: 0,
                top,
                right: 0,
                bottom,
            }
        }
    }
}
