//! Run configuration.
//!
//! Everything the converter needs is captured once at startup in a
//! [`ConvertConfig`] and passed down explicitly. There is no config file and
//! no environment lookup; the command line is the only source.
//!
//! ## Output root
//!
//! Density directories are siblings of the source directory:
//!
//! ```text
//! res/
//! ├── mdpi/      ← --directory res/mdpi --type mdpi
//! ├── ldpi/      ← written
//! ├── hdpi/      ← written
//! └── xhdpi/     ← written
//! ```
//!
//! The root is `<directory>/..` rather than `Path::parent`, so the default
//! `.` directory still resolves to a real parent. A source directory that
//! is itself one of the target directories (`res/ldpi` with `--type mdpi`)
//! is rejected, since the run would overwrite its own inputs.

use crate::density::Density;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Source directory does not exist: {0}")]
    MissingDirectory(PathBuf),
    #[error("Source path is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("--jobs must be at least 1")]
    ZeroJobs,
    #[error("Cannot resolve source directory {path}: {source}")]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Source directory {directory} is also the {target} output directory")]
    SourceIsTarget { directory: PathBuf, target: Density },
}

/// Settings for one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Directory holding images already at `density`.
    pub directory: PathBuf,
    /// Density of every image in `directory`.
    pub density: Density,
    /// Maximum number of parallel workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

impl ConvertConfig {
    pub fn new(directory: impl Into<PathBuf>, density: Density) -> Self {
        Self {
            directory: directory.into(),
            density,
            max_processes: None,
        }
    }

    /// Parent under which each target density gets its own directory.
    pub fn output_root(&self) -> PathBuf {
        self.directory.join("..")
    }

    /// Check the source directory exists, is not one of the directories a
    /// run writes into, and the worker cap is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_processes == Some(0) {
            return Err(ConfigError::ZeroJobs);
        }
        if !self.directory.exists() {
            return Err(ConfigError::MissingDirectory(self.directory.clone()));
        }
        if !self.directory.is_dir() {
            return Err(ConfigError::NotADirectory(self.directory.clone()));
        }
        if let Some(target) = self.target_overlapping_source()? {
            return Err(ConfigError::SourceIsTarget {
                directory: self.directory.clone(),
                target,
            });
        }
        Ok(())
    }

    /// The target density whose output directory resolves to the source
    /// directory itself, e.g. `res/ldpi` given as the source with `--type mdpi`.
    fn target_overlapping_source(&self) -> Result<Option<Density>, ConfigError> {
        let source =
            std::fs::canonicalize(&self.directory).map_err(|source| ConfigError::Resolve {
                path: self.directory.clone(),
                source,
            })?;
        let root = self.output_root();
        Ok(self.density.targets().find(|target| {
            std::fs::canonicalize(root.join(target.as_str())).is_ok_and(|p| p == source)
        }))
    }

    /// Resolve the effective worker count.
    ///
    /// - `None` → use all available cores
    /// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
    pub fn effective_threads(&self) -> usize {
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        self.max_processes
            .map(|n| n.clamp(1, cores))
            .unwrap_or(cores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn output_root_is_parent_of_source() {
        let config = ConvertConfig::new("res/mdpi", Density::Mdpi);
        assert_eq!(config.output_root(), PathBuf::from("res/mdpi/.."));
    }

    #[test]
    fn output_root_of_current_dir() {
        let config = ConvertConfig::new(".", Density::Hdpi);
        assert_eq!(config.output_root(), Path::new(".").join(".."));
    }

    #[test]
    fn validate_accepts_existing_directory() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = ConvertConfig::new(tmp.path(), Density::Ldpi);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_directory() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = ConvertConfig::new(tmp.path().join("nope"), Density::Ldpi);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingDirectory(_))
        ));
    }

    #[test]
    fn validate_rejects_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let file = tmp.path().join("icon.png");
        std::fs::write(&file, b"x").unwrap();
        let config = ConvertConfig::new(&file, Density::Ldpi);
        assert!(matches!(config.validate(), Err(ConfigError::NotADirectory(_))));
    }

    #[test]
    fn validate_rejects_source_named_after_a_target() {
        let tmp = tempfile::TempDir::new().unwrap();
        let dir = tmp.path().join("ldpi");
        std::fs::create_dir_all(&dir).unwrap();

        let config = ConvertConfig::new(&dir, Density::Mdpi);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SourceIsTarget { target: Density::Ldpi, .. })
        ));
    }

    #[test]
    fn validate_accepts_source_named_after_its_own_density() {
        let tmp = tempfile::TempDir::new().unwrap();
        let dir = tmp.path().join("mdpi");
        std::fs::create_dir_all(&dir).unwrap();
        // Sibling target directories left over from an earlier run
        std::fs::create_dir_all(tmp.path().join("ldpi")).unwrap();

        assert!(ConvertConfig::new(&dir, Density::Mdpi).validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_jobs() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = ConvertConfig {
            max_processes: Some(0),
            ..ConvertConfig::new(tmp.path(), Density::Mdpi)
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroJobs)));
    }

    #[test]
    fn effective_threads_auto() {
        let config = ConvertConfig::new(".", Density::Mdpi);
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        assert_eq!(config.effective_threads(), cores);
    }

    #[test]
    fn effective_threads_clamped_to_cores() {
        let config = ConvertConfig {
            max_processes: Some(99999),
            ..ConvertConfig::new(".", Density::Mdpi)
        };
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        assert_eq!(config.effective_threads(), cores);
    }

    #[test]
    fn effective_threads_user_constrains_down() {
        let config = ConvertConfig {
            max_processes: Some(1),
            ..ConvertConfig::new(".", Density::Mdpi)
        };
        assert_eq!(config.effective_threads(), 1);
    }
}
