//! High-level image operations.
//!
//! These functions combine calculations with backend execution.
//! They take configuration, compute a [`FramePlan`], and call the backend.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::{calculate_centering_padding, calculate_fit_dimensions};
use super::params::{ComposeParams, FramePlan, Padding};
use crate::config::FrameConfig;
use std::path::{Path, PathBuf};

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Get image dimensions using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<(u32, u32)> {
    let dims = backend.identify(path)?;
    Ok((dims.width, dims.height))
}

/// Plan the letterbox geometry for a source of the given size.
///
/// Pure: no I/O. The result's [`final_dimensions`](FramePlan::final_dimensions)
/// equal [`FrameConfig::canvas`] unless an odd leftover is truncated.
pub fn plan_frame(source: Dimensions, frame: &FrameConfig) -> FramePlan {
    let interior = frame.interior();
    let (driving, resized) = calculate_fit_dimensions(source.as_tuple(), interior);
    let centering = calculate_centering_padding(resized, interior, driving, frame.centering);

    FramePlan {
        source,
        driving,
        interior: interior.into(),
        resized: resized.into(),
        centering,
        border: Padding::uniform(frame.border_width),
    }
}

/// A successfully written frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedImage {
    pub output: PathBuf,
    pub plan: FramePlan,
    pub dimensions: Dimensions,
}

/// Letterbox `source` into `frame` and write it to `output`.
pub fn compose_image(
    backend: &impl ImageBackend,
    source: &Path,
    output: &Path,
    frame: &FrameConfig,
) -> Result<ComposedImage> {
    let source_dims = backend.identify(source)?;
    let plan = plan_frame(source_dims, frame);

    tracing::debug!(
        source = %source.display(),
        src_w = source_dims.width,
        src_h = source_dims.height,
        resized_w = plan.resized.width,
        resized_h = plan.resized.height,
        driving = ?plan.driving,
        "planned frame"
    );

    let dimensions = backend.compose(&ComposeParams {
        source: source.to_path_buf(),
        output: output.to_path_buf(),
        plan,
        fill: frame.fill,
    })?;

    Ok(ComposedImage {
        output: output.to_path_buf(),
        plan,
        dimensions,
    })
}
