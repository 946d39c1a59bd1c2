//! Input directory enumeration.
//!
//! Lists the regular files directly inside the input directory whose names
//! carry a configured extension. Nothing recurses: subdirectories are skipped
//! along with every other non-matching entry, and none of them count toward
//! the batch totals.
//!
//! Candidates come back sorted by path so runs are reproducible regardless of
//! the order the filesystem lists entries in.
//!
//! A missing or unreadable input directory is fatal: there is nothing to
//! process, so the batch never starts.

use crate::naming::is_candidate;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input directory not found: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error("Input path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Candidate images found in the input directory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanResult {
    pub candidates: Vec<PathBuf>,
    /// Directories and files without a configured extension.
    pub skipped: Vec<PathBuf>,
}

/// Collect candidate images from `input_dir`.
pub fn scan(input_dir: &Path, extensions: &[String]) -> Result<ScanResult, ScanError> {
    if !input_dir.exists() {
        return Err(ScanError::InputNotFound(input_dir.to_path_buf()));
    }
    if !input_dir.is_dir() {
        return Err(ScanError::NotADirectory(input_dir.to_path_buf()));
    }

    let mut result = ScanResult::default();
    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        // is_file follows symlinks, so a link to an image is processed
        if path.is_file() && is_candidate(&path, extensions) {
            result.candidates.push(path);
        } else {
            tracing::debug!(path = %path.display(), "skipping entry");
            result.skipped.push(path);
        }
    }

    result.candidates.sort();
    result.skipped.sort();
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{create_test_image, default_extensions, write_garbage};
    use tempfile::TempDir;

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn finds_supported_images_sorted() {
        let tmp = TempDir::new().unwrap();
        create_test_image(&tmp.path().join("b.png"), 4, 4);
        create_test_image(&tmp.path().join("a.jpg"), 4, 4);
        create_test_image(&tmp.path().join("C.BMP"), 4, 4);

        let result = scan(tmp.path(), &default_extensions()).unwrap();
        assert_eq!(names(&result.candidates), vec!["C.BMP", "a.jpg", "b.png"]);
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn skips_other_extensions_and_directories() {
        let tmp = TempDir::new().unwrap();
        create_test_image(&tmp.path().join("keep.png"), 4, 4);
        fs::write(tmp.path().join("notes.txt"), "hello").unwrap();
        fs::create_dir(tmp.path().join("nested.jpg")).unwrap();
        create_test_image(&tmp.path().join("nested.jpg").join("inner.png"), 4, 4);

        let result = scan(tmp.path(), &default_extensions()).unwrap();
        assert_eq!(names(&result.candidates), vec!["keep.png"]);
        assert_eq!(names(&result.skipped), vec!["nested.jpg", "notes.txt"]);
    }

    #[test]
    fn corrupt_files_are_still_candidates() {
        // Decoding is the compositor's job; scanning only looks at names
        let tmp = TempDir::new().unwrap();
        write_garbage(&tmp.path().join("broken.jpg"));

        let result = scan(tmp.path(), &default_extensions()).unwrap();
        assert_eq!(names(&result.candidates), vec!["broken.jpg"]);
    }

    #[test]
    fn respects_custom_extension_list() {
        let tmp = TempDir::new().unwrap();
        create_test_image(&tmp.path().join("a.png"), 4, 4);
        create_test_image(&tmp.path().join("b.jpg"), 4, 4);

        let result = scan(tmp.path(), &["png".to_string()]).unwrap();
        assert_eq!(names(&result.candidates), vec!["a.png"]);
    }

    #[test]
    fn empty_directory_has_no_candidates() {
        let tmp = TempDir::new().unwrap();
        let result = scan(tmp.path(), &default_extensions()).unwrap();
        assert_eq!(result, ScanResult::default());
    }

    #[test]
    fn missing_directory_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("image");
        let err = scan(&missing, &default_extensions()).unwrap_err();
        assert!(matches!(err, ScanError::InputNotFound(p) if p == missing));
    }

    #[test]
    fn file_as_input_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("a.png");
        create_test_image(&file, 4, 4);
        assert!(matches!(
            scan(&file, &default_extensions()),
            Err(ScanError::NotADirectory(_))
        ));
    }
}
