//! Shared test utilities for the android-sizes test suite.
//!
//! Provides synthetic image writers and a source-directory fixture laid out
//! the way the converter expects:
//!
//! ```text
//! <tmp>/
//! └── mdpi/          ← source directory
//!     ├── icon.png
//!     └── photo.jpg
//! ```
//!
//! Outputs land next to the source directory (`<tmp>/ldpi`, `<tmp>/hdpi`, ...).

use image::{ExtendedColorType, ImageEncoder, RgbImage, RgbaImage};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::density::Density;
use crate::imaging::{ImageBackend, ImageInfo, RustBackend};

// =========================================================================
// Synthetic images (explicit encoders, never inferred from the extension)
// =========================================================================

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    })
}

/// Write a small valid JPEG with the given dimensions.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = gradient(width, height);
    let writer = BufWriter::new(std::fs::File::create(path).unwrap());
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
        .unwrap();
}

/// Write a small valid RGB PNG with the given dimensions.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    let img = gradient(width, height);
    let writer = BufWriter::new(std::fs::File::create(path).unwrap());
    image::codecs::png::PngEncoder::new(writer)
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
        .unwrap();
}

/// Write a PNG with a half-transparent alpha channel.
pub fn create_test_rgba_png(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([(x % 256) as u8, (y % 256) as u8, 64, 128])
    });
    let writer = BufWriter::new(std::fs::File::create(path).unwrap());
    image::codecs::png::PngEncoder::new(writer)
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgba8)
        .unwrap();
}

// =========================================================================
// Fixture setup
// =========================================================================

/// Create `<tmp>/<density>/` and return the temp root plus the source dir.
pub fn setup_source_dir(density: Density) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join(density.as_str());
    std::fs::create_dir_all(&source).unwrap();
    (tmp, source)
}

/// Sorted file names directly inside `dir`; empty when it does not exist.
pub fn file_names(dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Identify a written artifact with the production backend. Panics on failure.
pub fn identify(path: &Path) -> ImageInfo {
    RustBackend::new()
        .identify(path)
        .unwrap_or_else(|e| panic!("{} is not a valid image: {e}", path.display()))
}
