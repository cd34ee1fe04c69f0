//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations the converter needs:
//! identify (dimensions + format) and resize (decode, resample, encode).
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests substitute a recording mock.

use super::params::{ImageFormat, ResizeParams};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
    #[error("Unsupported image format in {path}: {format}")]
    UnsupportedFormat { path: PathBuf, format: String },
    #[error("Failed to encode {path}: {reason}")]
    Encode { path: PathBuf, reason: String },
}

impl BackendError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        BackendError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
}

/// Trait for image processing backends.
///
/// `Sync` because a single backend is shared by every conversion running on
/// the worker pool.
pub trait ImageBackend: Sync {
    /// Read dimensions and the encoded format, detected from file content.
    fn identify(&self, path: &Path) -> Result<ImageInfo, BackendError>;

    /// Decode `params.source`, resample to exactly `width`×`height` with
    /// nearest-neighbour sampling, and write `params.output` in `params.format`.
    /// An existing file at the output path is overwritten.
    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Mock backend that records operations without touching pixels.
    /// Uses Mutex (not RefCell) so it is Sync and works with rayon.
    #[derive(Default)]
    pub struct MockBackend {
        /// Keyed by file name; unknown files fail to identify.
        pub images: HashMap<String, ImageInfo>,
        /// File names whose resize fails.
        pub failing: Vec<String>,
        pub operations: Mutex<Vec<RecordedOp>>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Identify(String),
        Resize {
            source: String,
            output: String,
            width: u32,
            height: u32,
            format: ImageFormat,
        },
    }

    fn file_name(path: &Path) -> String {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_image(
            mut self,
            name: &str,
            width: u32,
            height: u32,
            format: ImageFormat,
        ) -> Self {
            self.images.insert(
                name.to_string(),
                ImageInfo {
                    width,
                    height,
                    format,
                },
            );
            self
        }

        pub fn failing_resize(mut self, name: &str) -> Self {
            self.failing.push(name.to_string());
            self
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.lock().unwrap().clone()
        }

        pub fn resize_ops(&self) -> Vec<RecordedOp> {
            self.get_operations()
                .into_iter()
                .filter(|op| matches!(op, RecordedOp::Resize { .. }))
                .collect()
        }
    }

    impl ImageBackend for MockBackend {
        fn identify(&self, path: &Path) -> Result<ImageInfo, BackendError> {
            self.operations
                .lock()
                .unwrap()
                .push(RecordedOp::Identify(path.to_string_lossy().to_string()));

            self.images
                .get(&file_name(path))
                .copied()
                .ok_or_else(|| BackendError::Decode {
                    path: path.to_path_buf(),
                    reason: "no mock image".to_string(),
                })
        }

        fn resize(&self, params: &ResizeParams) -> Result<(), BackendError> {
            self.operations.lock().unwrap().push(RecordedOp::Resize {
                source: params.source.to_string_lossy().to_string(),
                output: params.output.to_string_lossy().to_string(),
                width: params.width,
                height: params.height,
                format: params.format,
            });
            if self.failing.contains(&file_name(&params.source)) {
                return Err(BackendError::Encode {
                    path: params.output.clone(),
                    reason: "mock failure".to_string(),
                });
            }
            Ok(())
        }
    }

    #[test]
    fn mock_records_identify() {
        let backend = MockBackend::new().with_image("icon.png", 800, 600, ImageFormat::Png);

        let result = backend.identify(Path::new("/test/icon.png")).unwrap();
        assert_eq!(result.width, 800);
        assert_eq!(result.height, 600);
        assert_eq!(result.format, ImageFormat::Png);

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(&ops[0], RecordedOp::Identify(p) if p == "/test/icon.png"));
    }

    #[test]
    fn mock_identify_unknown_file_errors() {
        let backend = MockBackend::new();
        assert!(matches!(
            backend.identify(Path::new("/test/missing.png")),
            Err(BackendError::Decode { .. })
        ));
    }

    #[test]
    fn mock_records_resize_and_fails_on_request() {
        let backend = MockBackend::new().failing_resize("bad.jpg");
        let params = |name: &str| ResizeParams {
            source: format!("/src/{name}").into(),
            output: format!("/out/{name}").into(),
            width: 75,
            height: 50,
            format: ImageFormat::Jpeg,
            quality: Default::default(),
        };

        assert!(backend.resize(&params("good.jpg")).is_ok());
        assert!(backend.resize(&params("bad.jpg")).is_err());
        assert_eq!(backend.resize_ops().len(), 2);
    }

    #[test]
    fn io_error_message_names_path() {
        let err = BackendError::io(
            Path::new("/tmp/x.png"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("/tmp/x.png"));
    }
}
