//! Input filtering and output naming.
//!
//! A file is a candidate when its lowercased name ends in `.<ext>` for one of
//! the configured extensions. Its output keeps the original filename, extension
//! included, behind a fixed prefix:
//!
//! - `IMG_0042.JPG` → `nocrop_IMG_0042.JPG`
//! - `sunset.webp` → `nocrop_sunset.webp`

use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Whether `filename` ends with `.ext` for any of `extensions`, ignoring case.
///
/// `extensions` are expected lowercase and without the leading dot.
pub fn has_supported_extension(filename: &str, extensions: &[String]) -> bool {
    let lower = filename.to_lowercase();
    extensions.iter().any(|ext| {
        lower
            .strip_suffix(ext.as_str())
            .is_some_and(|stem| stem.ends_with('.'))
    })
}

/// Same check for a path.
///
/// Names that are not valid UTF-8 are matched lossily, so only the extension
/// needs to be readable.
pub fn is_candidate(path: &Path, extensions: &[String]) -> bool {
    path.file_name()
        .is_some_and(|name| has_supported_extension(&name.to_string_lossy(), extensions))
}

/// Output filename for a source filename. The source bytes are kept as is.
pub fn output_filename(prefix: &str, filename: &OsStr) -> OsString {
    let mut name = OsString::from(prefix);
    name.push(filename);
    name
}
