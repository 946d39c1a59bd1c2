//! Shared test utilities.
//!
//! Small on-disk fixtures for tests that go through the real `image` crate:
//! a gradient image in whatever format the filename asks for, and a file that
//! claims to be an image but is not.

use image::{ImageBuffer, Rgb};
use std::path::Path;

// =========================================================================
// Fixture files
// =========================================================================

/// Write a `width` x `height` RGB gradient. The format follows the extension.
pub fn create_test_image(path: &Path, width: u32, height: u32) {
    let img = ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    img.save(path).unwrap();
}

/// Write bytes no decoder accepts.
pub fn write_garbage(path: &Path) {
    std::fs::write(path, b"definitely not an image, just some text").unwrap();
}

// =========================================================================
// Config shortcuts
// =========================================================================

pub fn default_extensions() -> Vec<String> {
    crate::config::DEFAULT_EXTENSIONS
        .iter()
        .map(|e| e.to_string())
        .collect()
}
