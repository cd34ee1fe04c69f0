//! Single-image conversion: one source file to one target density.
//!
//! A [`ConversionJob`] names the source file, the density it is already at,
//! the density to produce, and the root under which density directories
//! live. [`convert`] runs it end to end:
//!
//! ```text
//! identify  →  width = max(1, trunc(ratio × w))  →  height keeps aspect
//!           →  mkdir -p <root>/<target>  →  nearest-neighbour resize
//!           →  encode in the source format  →  <root>/<target>/<file name>
//! ```
//!
//! Existing files at the destination are overwritten. A failure part-way
//! through leaves whatever was already written in place.

use crate::density::{Density, ratio};
use crate::imaging::{
    BackendError, ImageBackend, ImageFormat, Quality, ResizeParams, target_dimensions,
};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("Failed to create {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Source and target density are both {0}")]
    SameDensity(Density),
    #[error("Source path has no file name: {0}")]
    MissingFileName(PathBuf),
}

/// Resize one source file to one target density.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub source: PathBuf,
    pub source_density: Density,
    pub target: Density,
    pub output_root: PathBuf,
}

impl ConversionJob {
    /// `<output_root>/<target>`
    pub fn output_dir(&self) -> PathBuf {
        self.output_root.join(self.target.as_str())
    }

    /// `<output_root>/<target>/<source file name>`
    pub fn output_path(&self) -> Result<PathBuf, ConvertError> {
        let name = self
            .source
            .file_name()
            .ok_or_else(|| ConvertError::MissingFileName(self.source.clone()))?;
        Ok(self.output_dir().join(name))
    }
}

/// A written density variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
}

/// Plan the resize for `job` without executing it.
pub fn plan(
    backend: &impl ImageBackend,
    job: &ConversionJob,
) -> Result<ResizeParams, ConvertError> {
    let r = ratio(job.source_density, job.target).ok_or(ConvertError::SameDensity(job.target))?;
    let output = job.output_path()?;
    let info = backend.identify(&job.source)?;
    let (width, height) = target_dimensions((info.width, info.height), r);

    Ok(ResizeParams {
        source: job.source.clone(),
        output,
        width,
        height,
        format: info.format,
        quality: Quality::default(),
    })
}

/// Run a conversion job, returning what was written.
pub fn convert(
    backend: &impl ImageBackend,
    job: &ConversionJob,
) -> Result<Conversion, ConvertError> {
    let params = plan(backend, job)?;

    let dir = job.output_dir();
    ensure_dir(&dir)?;

    debug!(
        source = %job.source.display(),
        target = %job.target,
        width = params.width,
        height = params.height,
        "resizing"
    );
    backend.resize(&params)?;

    Ok(Conversion {
        output: params.output,
        width: params.width,
        height: params.height,
        format: params.format,
    })
}

/// Create `dir` and its parents; an existing directory is fine.
fn ensure_dir(dir: &Path) -> Result<(), ConvertError> {
    std::fs::create_dir_all(dir).map_err(|source| ConvertError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}
