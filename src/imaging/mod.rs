//! Image processing in pure Rust, no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `ImageReader::into_dimensions` |
//! | **Plan** | pure geometry in [`calculations`] |
//! | **Resize** | `resize_exact` with Lanczos3 |
//! | **Pad** | fill canvas + `imageops::replace` |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for orientation and frame geometry (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
pub mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{DrivingAxis, Orientation, interior_size, is_portrait};
pub use operations::{ComposedImage, compose_image, get_dimensions, plan_frame};
pub use params::{ComposeParams, FramePlan, Padding};
pub use rust_backend::{RustBackend, compose_frame, is_decodable_extension};
