//! # NoCrop
//!
//! Letterbox a folder of photos into a fixed portrait frame without cropping.
//! Every image is scaled to fit inside the frame, centered on a fill color,
//! and surrounded by a uniform border, so a mixed batch of landscape and
//! portrait shots comes out the same size (a 1080x1350 frame, the 4:5
//! portrait post format, with a 20px border around it).
//!
//! # Pipeline
//!
//! ```text
//! image/          scan        process (one image at a time)          exports/
//! ├── a.jpg   →  candidates  →  identify → plan → resize → pad   →  ├── nocrop_a.jpg
//! └── b.png                                                          └── nocrop_b.png
//! ```
//!
//! Planning is pure geometry ([`imaging::plan_frame`]) and is tested without
//! touching pixels. The pixel work lives behind [`imaging::ImageBackend`], so
//! batch logic is tested against a recording mock.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Lists candidate images in the input directory |
//! | [`process`] | Drives the batch, isolates per-image failures, reports results |
//! | [`imaging`] | Orientation, frame geometry, and the `image`-crate backend |
//! | [`config`] | Frame and batch settings, fill colors, validation |
//! | [`naming`] | Extension filter and `nocrop_` output names |
//! | [`output`] | CLI output formatting for progress, summary, and `check` |
//!
//! # Design Decisions
//!
//! ## Where the Border Goes
//!
//! By default the picture fits `frame - border` on each axis and the border is
//! added around it, so outputs are 1100x1370. With
//! [`config::BorderPlacement::Inside`] the border is carved out of the frame
//! instead and outputs match the frame exactly. Either way the canvas is
//! [`config::FrameConfig::canvas`], up to one pixel of truncated centering
//! (see [`config::Centering`]).
//!
//! ## Orientation Picks the Axis, the Frame Has the Last Word
//!
//! Portrait sources are scaled to the interior height, landscape and square
//! ones to the interior width. A portrait that is wider than the frame's own
//! aspect would overflow that way, so the other axis drives instead. This
//! keeps every picture whole and makes reprocessing an output a no-op on size.
//!
//! ## Sequential, Failure-Isolated Batches
//!
//! Images are processed one after another. A file that fails to decode or
//! encode is reported and counted; the batch moves on.

pub mod config;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod process;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
