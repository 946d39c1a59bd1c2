//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations every backend must
//! support: identify and compose.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests use a recording mock so planning and batch logic can be
//! checked without decoding anything.

use super::params::ComposeParams;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Per-image failure. None of these abort a batch.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Failed to decode {}: {message}", .path.display())]
    Decode { path: PathBuf, message: String },
    #[error("Failed to write {}: {message}", .path.display())]
    Encode { path: PathBuf, message: String },
}

impl BackendError {
    pub fn decode(path: &Path, message: impl ToString) -> Self {
        Self::Decode {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }

    pub fn encode(path: &Path, message: impl ToString) -> Self {
        Self::Encode {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn as_tuple(self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// Trait for image processing backends.
pub trait ImageBackend {
    /// Read image dimensions without a full decode where the format allows.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Decode `params.source`, apply `params.plan`, and write `params.output`.
    ///
    /// Returns the dimensions of the written image.
    fn compose(&self, params: &ComposeParams) -> Result<Dimensions, BackendError>;
}
