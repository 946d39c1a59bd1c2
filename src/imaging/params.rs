//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! (which plans each frame) and the [`backend`](super::backend) (which does the
//! actual pixel work). This separation allows swapping backends (e.g. for
//! testing with a mock) without changing planning logic.
//!
//! ## Types
//!
//! - [`Padding`]: Pixels of fill to add on each edge.
//! - [`FramePlan`]: The complete geometry for one image: scaled size, centering pad, border pad.
//! - [`ComposeParams`]: Everything one compose needs.

use super::backend::Dimensions;
use super::calculations::DrivingAxis;
use crate::config::FillColor;
use std::path::PathBuf;

/// Pixels of fill to add on each edge of an image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Padding {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Padding {
    /// The same amount on all four edges.
    pub fn uniform(width: u32) -> Self {
        Self {
            left: width,
            top: width,
            right: width,
            bottom: width,
        }
    }

    pub fn horizontal(&self) -> u32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> u32 {
        self.top + self.bottom
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Geometry for letterboxing one image into a frame.
///
/// The picture is resized to `resized`, expanded by `centering` to fill the
/// interior, then expanded by `border` to the final canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePlan {
    pub source: Dimensions,
    pub driving: DrivingAxis,
    pub interior: Dimensions,
    pub resized: Dimensions,
    pub centering: Padding,
    pub border: Padding,
}

impl FramePlan {
    /// Size of the canvas after both padding stages.
    pub fn final_dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.resized.width + self.centering.horizontal() + self.border.horizontal(),
            height: self.resized.height + self.centering.vertical() + self.border.vertical(),
        }
    }
}

/// Parameters for composing one file into its frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub plan: FramePlan,
    pub fill: FillColor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_uniform_sums() {
        let p = Padding::uniform(20);
        assert_eq!(p.horizontal(), 40);
        assert_eq!(p.vertical(), 40);
        assert!(!p.is_zero());
        assert!(Padding::default().is_zero());
    }

    #[test]
    fn final_dimensions_adds_both_stages() {
        let plan = FramePlan {
            source: Dimensions {
                width: 2000,
                height: 1000,
            },
            driving: DrivingAxis::Width,
            interior: Dimensions {
                width: 1060,
                height: 1330,
            },
            resized: Dimensions {
                width: 1060,
                height: 530,
            },
            centering: Padding {
                left: 0,
                top: 400,
                right: 0,
                bottom: 400,
            },
            border: Padding::uniform(20),
        };
        assert_eq!(
            plan.final_dimensions(),
            Dimensions {
                width: 1100,
                height: 1370
            }
        );
    }
}
