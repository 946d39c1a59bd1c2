//! Batch processing.
//!
//! Drives the frame compositor over every candidate in the input directory:
//!
//! ```text
//! image/                       exports/
//! ├── beach.jpg        →       ├── nocrop_beach.jpg     (1100 x 1370)
//! ├── IMG_0042.PNG     →       ├── nocrop_IMG_0042.PNG
//! ├── notes.txt                │   (skipped, not counted)
//! └── broken.webp              │   (error, counted, batch continues)
//! ```
//!
//! ## Failure Isolation
//!
//! Each image yields its own `Result`, collected into a [`BatchReport`]. A
//! decode or encode failure is reported and counted, then the next image
//! starts. Only batch-level problems abort the run before any image is
//! touched: invalid configuration, a missing input directory, or an output
//! directory that cannot be created. Nothing is retried.
//!
//! ## Ordering
//!
//! Images are processed one at a time, in sorted path order. Progress is
//! reported through an optional channel of [`ProcessEvent`]s so the caller
//! decides how (and whether) to display it.

use crate::config::{BatchConfig, ConfigError};
use crate::imaging::{
    BackendError, ComposedImage, Dimensions, FramePlan, ImageBackend, RustBackend, compose_image,
    plan_frame,
};
use crate::naming::output_filename;
use crate::scan::{self, ScanError};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("Cannot create output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Progress notifications emitted while a batch runs.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessEvent {
    BatchStarted {
        input_dir: PathBuf,
        output_dir: PathBuf,
        candidates: usize,
    },
    ImageStarted {
        index: usize,
        total: usize,
        source: PathBuf,
    },
    ImageSaved {
        index: usize,
        output: PathBuf,
        dimensions: Dimensions,
    },
    ImageFailed {
        index: usize,
        filename: String,
        error: String,
    },
}

/// What happened to one candidate image.
#[derive(Debug)]
pub struct ImageOutcome {
    pub source: PathBuf,
    pub result: Result<ComposedImage, BackendError>,
}

impl ImageOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-image results for a finished batch, in processing order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<ImageOutcome>,
}

impl BatchReport {
    /// Images written successfully.
    pub fn processed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    /// Images that failed to decode or encode.
    pub fn errors(&self) -> usize {
        self.outcomes.len() - self.processed()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Path, &BackendError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.source.as_path(), e)))
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn file_name(path: &Path) -> &OsStr {
    path.file_name().unwrap_or_default()
}

fn emit(events: &Option<Sender<ProcessEvent>>, event: ProcessEvent) {
    if let Some(tx) = events {
        // The receiver going away only means nobody is watching
        tx.send(event).ok();
    }
}

/// Run a batch with the production backend.
pub fn process(
    config: &BatchConfig,
    events: Option<Sender<ProcessEvent>>,
) -> Result<BatchReport, ProcessError> {
    process_with_backend(&RustBackend::new(), config, events)
}

/// Run a batch using a specific backend (allows testing with mock).
pub fn process_with_backend(
    backend: &impl ImageBackend,
    config: &BatchConfig,
    events: Option<Sender<ProcessEvent>>,
) -> Result<BatchReport, ProcessError> {
    config.validate()?;
    let candidates = scan::scan(&config.input_dir, &config.extensions)?.candidates;

    std::fs::create_dir_all(&config.output_dir).map_err(|source| ProcessError::OutputDir {
        path: config.output_dir.clone(),
        source,
    })?;

    emit(
        &events,
        ProcessEvent::BatchStarted {
            input_dir: config.input_dir.clone(),
            output_dir: config.output_dir.clone(),
            candidates: candidates.len(),
        },
    );

    let total = candidates.len();
    let mut report = BatchReport::default();

    for (i, source) in candidates.into_iter().enumerate() {
        let index = i + 1;
        let filename = display_name(&source);
        let output = config
            .output_dir
            .join(output_filename(&config.prefix, file_name(&source)));

        emit(
            &events,
            ProcessEvent::ImageStarted {
                index,
                total,
                source: source.clone(),
            },
        );

        let result = compose_image(backend, &source, &output, &config.frame);
        match &result {
            Ok(composed) => emit(
                &events,
                ProcessEvent::ImageSaved {
                    index,
                    output: composed.output.clone(),
                    dimensions: composed.dimensions,
                },
            ),
            Err(e) => {
                tracing::debug!(source = %source.display(), error = %e, "image failed");
                emit(
                    &events,
                    ProcessEvent::ImageFailed {
                        index,
                        filename,
                        error: e.to_string(),
                    },
                );
            }
        }

        report.outcomes.push(ImageOutcome { source, result });
    }

    Ok(report)
}

/// Planned geometry for one candidate, without writing anything.
#[derive(Debug)]
pub struct CheckEntry {
    pub source: PathBuf,
    pub output: PathBuf,
    pub plan: Result<FramePlan, BackendError>,
}

/// Identify every candidate and plan its frame. Nothing is written.
pub fn check(config: &BatchConfig) -> Result<Vec<CheckEntry>, ProcessError> {
    check_with_backend(&RustBackend::new(), config)
}

pub fn check_with_backend(
    backend: &impl ImageBackend,
    config: &BatchConfig,
) -> Result<Vec<CheckEntry>, ProcessError> {
    config.validate()?;
    let candidates = scan::scan(&config.input_dir, &config.extensions)?.candidates;

    Ok(candidates
        .into_iter()
        .map(|source| {
            let output = config
                .output_dir
                .join(output_filename(&config.prefix, file_name(&source)));
            let plan = backend
                .identify(&source)
                .map(|dims| plan_frame(dims, &config.frame));
            CheckEntry {
                source,
                output,
                plan,
            }
        })
        .collect())
}
