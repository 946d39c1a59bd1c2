//! Pure Rust image processing backend.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP, BMP) | `image::ImageReader` with content sniffing |
//! | Identify | `ImageReader::into_dimensions` (header only) |
//! | Resize | `DynamicImage::resize_exact` with `Lanczos3` |
//! | Expand (centering + border) | fill canvas + `image::imageops::replace` |
//! | Encode | `DynamicImage::write_to`, format from the output extension |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::operations::plan_frame;
use super::params::{ComposeParams, FramePlan, Padding};
use crate::config::{FillColor, FrameConfig};
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, ImageReader, RgbImage, RgbaImage};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Whether a compiled-in decoder exists for files with this extension.
///
/// `ImageFormat::from_extension` knows every format the crate can name;
/// `reading_enabled` narrows that to the features this binary was built with.
pub fn is_decodable_extension(ext: &str) -> bool {
    ImageFormat::from_extension(ext).is_some_and(|fmt| fmt.reading_enabled())
}

/// Pure Rust backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Open a reader that trusts file content over the extension.
fn open_reader(path: &Path) -> Result<ImageReader<BufReader<File>>, BackendError> {
    ImageReader::open(path)
        .map_err(|e| BackendError::decode(path, e))?
        .with_guessed_format()
        .map_err(|e| BackendError::decode(path, e))
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    open_reader(path)?
        .decode()
        .map_err(|e| BackendError::decode(path, e))
}

/// Add `padding` around `img`, filling the new pixels with `fill`.
///
/// Images with an alpha channel stay RGBA (with an opaque fill); everything
/// else is composed in RGB.
pub fn expand(img: &DynamicImage, padding: Padding, fill: FillColor) -> DynamicImage {
    let width = img.width() + padding.horizontal();
    let height = img.height() + padding.vertical();
    let (x, y) = (i64::from(padding.left), i64::from(padding.top));

    if img.color().has_alpha() {
        let mut canvas = RgbaImage::from_pixel(width, height, fill.to_rgba());
        imageops::replace(&mut canvas, &img.to_rgba8(), x, y);
        DynamicImage::ImageRgba8(canvas)
    } else {
        let mut canvas = RgbImage::from_pixel(width, height, fill.to_rgb());
        imageops::replace(&mut canvas, &img.to_rgb8(), x, y);
        DynamicImage::ImageRgb8(canvas)
    }
}

/// Resize, center, and border an in-memory image according to `plan`.
pub fn apply_plan(img: &DynamicImage, plan: &FramePlan, fill: FillColor) -> DynamicImage {
    let resized = img.resize_exact(plan.resized.width, plan.resized.height, FilterType::Lanczos3);
    let centered = expand(&resized, plan.centering, fill);
    expand(&centered, plan.border, fill)
}

/// Letterbox an in-memory image into `frame`.
pub fn compose_frame(img: &DynamicImage, frame: &FrameConfig) -> DynamicImage {
    let plan = plan_frame(
        Dimensions {
            width: img.width(),
            height: img.height(),
        },
        frame,
    );
    apply_plan(img, &plan, frame.fill)
}

/// Convert to a pixel layout the target encoder accepts.
///
/// JPEG has no alpha channel; the other encoders take 8-bit RGB or RGBA.
fn prepare_for_format(img: DynamicImage, format: ImageFormat) -> DynamicImage {
    match (format, img) {
        (ImageFormat::Jpeg, img @ DynamicImage::ImageRgb8(_)) => img,
        (ImageFormat::Jpeg, img) => DynamicImage::ImageRgb8(img.to_rgb8()),
        (_, img @ (DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_))) => img,
        (_, img) if img.color().has_alpha() => DynamicImage::ImageRgba8(img.to_rgba8()),
        (_, img) => DynamicImage::ImageRgb8(img.to_rgb8()),
    }
}

/// Save a DynamicImage to the given path, inferring format from extension.
fn save_image(img: DynamicImage, path: &Path) -> Result<(), BackendError> {
    let format = ImageFormat::from_path(path).map_err(|e| BackendError::encode(path, e))?;
    if !format.writing_enabled() {
        return Err(BackendError::encode(
            path,
            format!("no encoder available for {format:?}"),
        ));
    }

    let img = prepare_for_format(img, format);
    let file = File::create(path).map_err(|e| BackendError::encode(path, e))?;
    if let Err(e) = encode_into(&img, file, format) {
        // No truncated output left behind
        if let Err(rm) = std::fs::remove_file(path) {
            tracing::warn!(path = %path.display(), error = %rm, "could not remove partial output");
        }
        return Err(BackendError::encode(path, e));
    }
    Ok(())
}

fn encode_into(img: &DynamicImage, file: File, format: ImageFormat) -> image::ImageResult<()> {
    let mut writer = BufWriter::new(file);
    img.write_to(&mut writer, format)?;
    writer.flush()?;
    Ok(())
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = open_reader(path)?
            .into_dimensions()
            .map_err(|e| BackendError::decode(path, e))?;
        Ok(Dimensions { width, height })
    }

    fn compose(&self, params: &ComposeParams) -> Result<Dimensions, BackendError> {
        let img = load_image(&params.source)?;
        if img.width() != params.plan.source.width || img.height() != params.plan.source.height {
            tracing::warn!(
                source = %params.source.display(),
                planned_w = params.plan.source.width,
                planned_h = params.plan.source.height,
                decoded_w = img.width(),
                decoded_h = img.height(),
                "decoded size differs from identified size"
            );
        }

        let framed = apply_plan(&img, &params.plan, params.fill);
        let dims = Dimensions {
            width: framed.width(),
            height: framed.height(),
        };
        save_image(framed, &params.output)?;
        Ok(dims)
    }
}
