//! Batch orchestration: discover the source images, fan out conversions,
//! and collect every result.
//!
//! ## Discovery
//!
//! Only files directly inside the source directory are considered (no
//! recursion). Candidates are grouped by extension in the order `jpg`,
//! `png`, `jpeg` (matched case-insensitively) and sorted by path within each
//! group, so repeated runs see the same sequence.
//!
//! ## Fan-out / fan-in
//!
//! ```text
//! files ──par──▶ file ──par──▶ target density ──▶ convert
//!                  │                                 │
//!                  └──── Vec<UnitResult> (3) ◀───────┘
//!   │
//!   └── BatchReport (files × 3 results)
//! ```
//!
//! Both levels run on the [rayon](https://docs.rs/rayon) pool. Each unit
//! returns its own `Result`, so a failed conversion is reported rather than
//! dropped, and the collect at each level only completes once every unit
//! launched beneath it has finished. There is no cancellation: one failure
//! never stops its siblings.

use crate::config::ConvertConfig;
use crate::convert::{Conversion, ConversionJob, ConvertError, convert};
use crate::density::Density;
use crate::imaging::{ImageBackend, ImageFormat, RustBackend};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Cannot read source directory {path}: {source}")]
    Discovery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Everything fixed before the concurrent phase starts.
#[derive(Debug, Clone)]
pub struct BatchContext {
    pub directory: PathBuf,
    pub source_density: Density,
    pub output_root: PathBuf,
    pub files: Vec<PathBuf>,
}

impl BatchContext {
    /// Discover source files for `config`.
    pub fn discover(config: &ConvertConfig) -> Result<Self, BatchError> {
        Ok(Self {
            directory: config.directory.clone(),
            source_density: config.density,
            output_root: config.output_root(),
            files: discover(&config.directory)?,
        })
    }

    /// One job per target density for `file`.
    pub fn jobs_for<'a>(&'a self, file: &'a Path) -> impl Iterator<Item = ConversionJob> + 'a {
        self.source_density.targets().map(move |target| ConversionJob {
            source: file.to_path_buf(),
            source_density: self.source_density,
            target,
            output_root: self.output_root.clone(),
        })
    }
}

/// Outcome of one launched conversion.
#[derive(Debug)]
pub struct UnitResult {
    pub job: ConversionJob,
    pub result: Result<Conversion, ConvertError>,
}

/// Aggregated results of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub files: Vec<PathBuf>,
    pub results: Vec<UnitResult>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|u| u.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.succeeded()
    }

    /// Failed units in launch order.
    pub fn failures(&self) -> impl Iterator<Item = (&ConversionJob, &ConvertError)> {
        self.results
            .iter()
            .filter_map(|u| u.result.as_ref().err().map(|e| (&u.job, e)))
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// List candidate images directly inside `dir`.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
    let entries = std::fs::read_dir(dir)
        .map_err(|source| discovery_error(dir, source))?
        .map(|entry| entry.map(|e| e.path()));
    select_images(dir, entries)
}

/// Keep the regular files with a whitelisted extension, grouped and sorted.
/// An unreadable entry fails discovery instead of being skipped.
fn select_images(
    dir: &Path,
    entries: impl Iterator<Item = std::io::Result<PathBuf>>,
) -> Result<Vec<PathBuf>, BatchError> {
    let mut candidates = Vec::new();
    for entry in entries {
        let path = entry.map_err(|source| discovery_error(dir, source))?;
        if path.is_file() {
            candidates.push(path);
        }
    }

    let mut files = Vec::new();
    for ext in ImageFormat::EXTENSIONS {
        let mut group: Vec<PathBuf> = candidates
            .iter()
            .filter(|p| has_extension(p, ext))
            .cloned()
            .collect();
        group.sort();
        files.extend(group);
    }
    Ok(files)
}

fn discovery_error(dir: &Path, source: std::io::Error) -> BatchError {
    BatchError::Discovery {
        path: dir.to_path_buf(),
        source,
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

/// Run a batch with the production backend.
pub fn run_batch(config: &ConvertConfig) -> Result<BatchReport, BatchError> {
    run_batch_with_backend(&RustBackend::new(), config)
}

/// Run a batch using a specific backend (allows testing with mock).
pub fn run_batch_with_backend(
    backend: &impl ImageBackend,
    config: &ConvertConfig,
) -> Result<BatchReport, BatchError> {
    let context = BatchContext::discover(config)?;
    debug!(
        directory = %context.directory.display(),
        files = context.files.len(),
        "discovered source images"
    );

    let per_file: Vec<Vec<UnitResult>> = context
        .files
        .par_iter()
        .map(|file| convert_file(backend, &context, file))
        .collect();

    Ok(BatchReport {
        files: context.files,
        results: per_file.into_iter().flatten().collect(),
    })
}

/// Fan out one file to every target density and wait for all of them.
fn convert_file(
    backend: &impl ImageBackend,
    context: &BatchContext,
    file: &Path,
) -> Vec<UnitResult> {
    let jobs: Vec<ConversionJob> = context.jobs_for(file).collect();
    jobs.into_par_iter()
        .map(|job| {
            let result = convert(backend, &job);
            if let Err(e) = &result {
                warn!(source = %job.source.display(), target = %job.target, "{e}");
            }
            UnitResult { job, result }
        })
        .collect()
}
