//! Run configuration.
//!
//! Every knob the tool has lives in two plain structs that are built once (by
//! the CLI, or by tests) and passed down explicitly. There is no config file
//! and no process-wide state.
//!
//! ## Defaults
//!
//! ```text
//! frame          1080 x 1350   (Instagram 4:5 portrait)
//! border         20 px on every edge, outside the frame interior
//! canvas         1100 x 1370   (frame - border, then the border on all sides)
//! fill           white
//! centering      truncate (odd leftovers lose one pixel)
//! input          image/
//! output         exports/
//! extensions     jpg jpeg png webp bmp tiff
//! prefix         nocrop_
//! ```
//!
//! ## Validation
//!
//! [`BatchConfig::validate`] rejects anything that would make every image
//! fail: a border that leaves no interior, an empty extension list, or an
//! extension no compiled-in decoder can read.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error("Invalid color '{0}': expected #rrggbb, #rgb, white or black")]
    InvalidColor(String),
}

/// How an odd centering leftover is split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Centering {
    /// `leftover / 2` on both sides; the canvas ends up one pixel short.
    #[default]
    Truncate,
    /// The extra pixel goes to the right or bottom edge.
    Exact,
}

/// Where the border sits relative to the frame dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BorderPlacement {
    /// The picture fits `frame - border` and the border goes around it, so the
    /// canvas is `frame + border` on each axis.
    #[default]
    Outside,
    /// The picture fits `frame - 2 * border`; the canvas is exactly the frame.
    Inside,
}

/// Opaque RGB color used for both padding stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl FillColor {
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    pub fn to_rgb(self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }

    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, 255])
    }
}

impl Default for FillColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for FillColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for FillColor {
    type Err = ConfigError;

    /// Parse `white`, `black`, `#rrggbb`, `rrggbb`, `#rgb` or `rgb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "white" => return Ok(Self::WHITE),
            "black" => return Ok(Self::BLACK),
            _ => {}
        }

        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || ConfigError::InvalidColor(s.to_string());
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Self {
                r: channel(&hex[0..2])?,
                g: channel(&hex[2..4])?,
                b: channel(&hex[4..6])?,
            }),
            3 => {
                // #abc is shorthand for #aabbcc
                let expand = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                Ok(Self {
                    r: expand(0)?,
                    g: expand(1)?,
                    b: expand(2)?,
                })
            }
            _ => Err(invalid()),
        }
    }
}

/// Target canvas for the frame compositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameConfig {
    pub frame_width: u32,
    pub frame_height: u32,
    /// Border width on every edge. [`BorderPlacement`] decides whether it widens the canvas.
    pub border_width: u32,
    pub border_placement: BorderPlacement,
    pub fill: FillColor,
    pub centering: Centering,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            frame_width: 1080,
            frame_height: 1350,
            border_width: 20,
            border_placement: BorderPlacement::Outside,
            fill: FillColor::WHITE,
            centering: Centering::Truncate,
        }
    }
}

impl FrameConfig {
    pub fn frame(&self) -> (u32, u32) {
        (self.frame_width, self.frame_height)
    }

    /// Space left for the picture.
    pub fn interior(&self) -> (u32, u32) {
        crate::imaging::interior_size(self.frame(), self.border_width, self.border_placement)
    }

    /// Output size when the centering leftover splits evenly.
    pub fn canvas(&self) -> (u32, u32) {
        let (w, h) = self.interior();
        let border = self.border_width.saturating_mul(2);
        (w.saturating_add(border), h.saturating_add(border))
    }

    /// The border must leave a positive interior on both axes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_width == 0 || self.frame_height == 0 {
            return Err(ConfigError::Validation(
                "frame width and height must be non-zero".into(),
            ));
        }
        let shorter = self.frame_width.min(self.frame_height);
        if u64::from(self.border_width) * 2 >= u64::from(shorter) {
            return Err(ConfigError::Validation(format!(
                "border {} leaves no interior in a {}x{} frame (must be below {})",
                self.border_width,
                self.frame_width,
                self.frame_height,
                shorter.div_ceil(2)
            )));
        }
        Ok(())
    }
}

/// Everything a batch run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Lowercase extensions without the leading dot.
    pub extensions: Vec<String>,
    /// Prepended to each source filename to name its output.
    pub prefix: String,
    pub frame: FrameConfig,
}

/// Extensions picked up when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "bmp", "tiff"];

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("image"),
            output_dir: PathBuf::from("exports"),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            prefix: "nocrop_".to_string(),
            frame: FrameConfig::default(),
        }
    }
}

impl BatchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.frame.validate()?;
        if self.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "at least one extension is required".into(),
            ));
        }
        if let Some(ext) = self
            .extensions
            .iter()
            .find(|ext| !crate::imaging::is_decodable_extension(ext))
        {
            return Err(ConfigError::Validation(format!(
                "no decoder available for .{ext}"
            )));
        }
        if self.prefix.contains(std::path::is_separator) {
            return Err(ConfigError::Validation(
                "prefix must not contain a path separator".into(),
            ));
        }
        Ok(())
    }
}

/// Normalize a user-supplied extension: trim, drop a leading dot, lowercase.
pub fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_ascii_lowercase()
}
