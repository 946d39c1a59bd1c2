//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Process
//!
//! ```text
//! ==> Letterboxing image → exports (3 images)
//! 001 beach.jpg
//!     Saved: exports/nocrop_beach.jpg (1100x1370)
//! 002 broken.webp
//!     Error: Failed to decode image/broken.webp: ...
//! 003 tall.png
//!     Saved: exports/nocrop_tall.png (1099x1370)
//!
//! Processed 2 images, 1 error
//! ```
//!
//! ## Check
//!
//! ```text
//! 001 beach.jpg
//!     Source: 2000x1000 (landscape)
//!     Resize: 1060x530 (width-driven)
//!     Padding: 0 left, 400 top, 0 right, 400 bottom
//!     Output: exports/nocrop_beach.jpg (1100x1370)
//! ```
//!
//! # Architecture
//!
//! Each view has a `format_*` function (returns `Vec<String>` or `String`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::imaging::{DrivingAxis, FramePlan, Orientation};
use crate::process::{BatchReport, CheckEntry, ProcessEvent};
use std::path::Path;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

// ============================================================================
// Process output
// ============================================================================

/// Format a single process progress event as display lines.
pub fn format_process_event(event: &ProcessEvent) -> Vec<String> {
    match event {
        ProcessEvent::BatchStarted {
            input_dir,
            output_dir,
            candidates,
        } => vec![format!(
            "==> Letterboxing {} → {} ({})",
            input_dir.display(),
            output_dir.display(),
            plural(*candidates, "image", "images")
        )],
        ProcessEvent::ImageStarted { index, source, .. } => {
            vec![format!("{} {}", format_index(*index), file_name(source))]
        }
        ProcessEvent::ImageSaved {
            output, dimensions, ..
        } => vec![format!(
            "    Saved: {} ({}x{})",
            output.display(),
            dimensions.width,
            dimensions.height
        )],
        ProcessEvent::ImageFailed { error, .. } => vec![format!("    Error: {error}")],
    }
}

/// Final tally line.
pub fn format_summary(report: &BatchReport) -> String {
    format!(
        "Processed {}, {}",
        plural(report.processed(), "image", "images"),
        plural(report.errors(), "error", "errors")
    )
}

pub fn print_summary(report: &BatchReport) {
    println!();
    println!("{}", format_summary(report));
}

// ============================================================================
// Check output
// ============================================================================

fn orientation_label(plan: &FramePlan) -> &'static str {
    match Orientation::of(plan.source.width, plan.source.height) {
        Orientation::Portrait => "portrait",
        Orientation::Landscape => "landscape",
    }
}

fn driving_label(axis: DrivingAxis) -> &'static str {
    match axis {
        DrivingAxis::Width => "width-driven",
        DrivingAxis::Height => "height-driven",
    }
}

/// Format the planned geometry for every candidate.
pub fn format_check_output(entries: &[CheckEntry]) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, entry) in entries.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), file_name(&entry.source)));

        match &entry.plan {
            Ok(plan) => {
                let fin = plan.final_dimensions();
                let pad = plan.centering;
                lines.push(format!(
                    "    Source: {}x{} ({})",
                    plan.source.width,
                    plan.source.height,
                    orientation_label(plan)
                ));
                lines.push(format!(
                    "    Resize: {}x{} ({})",
                    plan.resized.width,
                    plan.resized.height,
                    driving_label(plan.driving)
                ));
                lines.push(format!(
                    "    Padding: {} left, {} top, {} right, {} bottom",
                    pad.left, pad.top, pad.right, pad.bottom
                ));
                lines.push(format!(
                    "    Output: {} ({}x{})",
                    entry.output.display(),
                    fin.width,
                    fin.height
                ));
            }
            Err(e) => lines.push(format!("    Error: {e}")),
        }
    }

    let errors = entries.iter().filter(|e| e.plan.is_err()).count();
    lines.push(String::new());
    lines.push(format!(
        "Checked {}, {}",
        plural(entries.len(), "image", "images"),
        plural(errors, "error", "errors")
    ));
    lines
}

pub fn print_check_output(entries: &[CheckEntry]) {
    for line in format_check_output(entries) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FrameConfig;
    use crate::imaging::{BackendError, ComposedImage, Dimensions, plan_frame};
    use crate::process::ImageOutcome;
    use std::path::PathBuf;

    fn dims(width: u32, height: u32) -> Dimensions {
        Dimensions { width, height }
    }

    // =========================================================================
    // Helper tests
    // =========================================================================

    #[test]
    fn index_is_zero_padded() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(1234), "1234");
    }

    #[test]
    fn plural_picks_form() {
        assert_eq!(plural(0, "error", "errors"), "0 errors");
        assert_eq!(plural(1, "error", "errors"), "1 error");
        assert_eq!(plural(2, "error", "errors"), "2 errors");
    }

    // =========================================================================
    // Process event tests
    // =========================================================================

    #[test]
    fn batch_started_banner() {
        let lines = format_process_event(&ProcessEvent::BatchStarted {
            input_dir: PathBuf::from("image"),
            output_dir: PathBuf::from("exports"),
            candidates: 3,
        });
        assert_eq!(lines, vec!["==> Letterboxing image → exports (3 images)"]);
    }

    #[test]
    fn image_started_shows_filename_only() {
        let lines = format_process_event(&ProcessEvent::ImageStarted {
            index: 2,
            total: 5,
            source: PathBuf::from("image/beach.jpg"),
        });
        assert_eq!(lines, vec!["002 beach.jpg"]);
    }

    #[test]
    fn image_saved_shows_output_and_size() {
        let lines = format_process_event(&ProcessEvent::ImageSaved {
            index: 1,
            output: PathBuf::from("exports/nocrop_beach.jpg"),
            dimensions: dims(1100, 1370),
        });
        assert_eq!(lines, vec!["    Saved: exports/nocrop_beach.jpg (1100x1370)"]);
    }

    #[test]
    fn image_failed_shows_error() {
        let lines = format_process_event(&ProcessEvent::ImageFailed {
            index: 1,
            filename: "broken.webp".to_string(),
            error: "Failed to decode image/broken.webp: bad header".to_string(),
        });
        assert_eq!(
            lines,
            vec!["    Error: Failed to decode image/broken.webp: bad header"]
        );
    }

    #[test]
    fn summary_counts_processed_and_errors() {
        let plan = plan_frame(dims(2000, 1000), &FrameConfig::default());
        let report = BatchReport {
            outcomes: vec![
                ImageOutcome {
                    source: PathBuf::from("image/a.jpg"),
                    result: Ok(ComposedImage {
                        output: PathBuf::from("exports/nocrop_a.jpg"),
                        plan,
                        dimensions: dims(1100, 1370),
                    }),
                },
                ImageOutcome {
                    source: PathBuf::from("image/b.jpg"),
                    result: Err(BackendError::decode(Path::new("image/b.jpg"), "bad")),
                },
            ],
        };
        assert_eq!(format_summary(&report), "Processed 1 image, 1 error");
    }

    #[test]
    fn summary_for_empty_batch() {
        assert_eq!(
            format_summary(&BatchReport::default()),
            "Processed 0 images, 0 errors"
        );
    }

    // =========================================================================
    // Check output tests
    // =========================================================================

    #[test]
    fn check_output_shows_plan() {
        let entries = vec![CheckEntry {
            source: PathBuf::from("image/beach.jpg"),
            output: PathBuf::from("exports/nocrop_beach.jpg"),
            plan: Ok(plan_frame(dims(2000, 1000), &FrameConfig::default())),
        }];

        let lines = format_check_output(&entries);
        assert_eq!(
            lines,
            vec![
                "001 beach.jpg",
                "    Source: 2000x1000 (landscape)",
                "    Resize: 1060x530 (width-driven)",
                "    Padding: 0 left, 400 top, 0 right, 400 bottom",
                "    Output: exports/nocrop_beach.jpg (1100x1370)",
                "",
                "Checked 1 image, 0 errors",
            ]
        );
    }

    #[test]
    fn check_output_portrait_truncation_visible() {
        let entries = vec![CheckEntry {
            source: PathBuf::from("image/tall.png"),
            output: PathBuf::from("exports/nocrop_tall.png"),
            plan: Ok(plan_frame(dims(1000, 2000), &FrameConfig::default())),
        }];

        let lines = format_check_output(&entries);
        assert_eq!(lines[1], "    Source: 1000x2000 (portrait)");
        assert_eq!(lines[2], "    Resize: 665x1330 (height-driven)");
        assert_eq!(lines[3], "    Padding: 197 left, 0 top, 197 right, 0 bottom");
        assert_eq!(lines[4], "    Output: exports/nocrop_tall.png (1099x1370)");
    }

    #[test]
    fn check_output_reports_errors() {
        let entries = vec![CheckEntry {
            source: PathBuf::from("image/bad.png"),
            output: PathBuf::from("exports/nocrop_bad.png"),
            plan: Err(BackendError::decode(Path::new("image/bad.png"), "bad header")),
        }];

        let lines = format_check_output(&entries);
        assert_eq!(lines[0], "001 bad.png");
        assert_eq!(lines[1], "    Error: Failed to decode image/bad.png: bad header");
        assert_eq!(lines.last().unwrap(), "Checked 1 image, 1 error");
    }
}
