//! Pure Rust image processing backend.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::ImageReader` with content-sniffed format |
//! | Decode (JPEG, PNG) | `image` crate (pure Rust decoders) |
//! | Resize | `DynamicImage::resize_exact` with `Nearest` filter |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` (quality 75) |
//! | Encode → PNG | `image::codecs::png::PngEncoder` |

use super::backend::{BackendError, ImageBackend, ImageInfo};
use super::params::{ImageFormat, Quality, ResizeParams};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::imageops::FilterType;
use image::{ColorType, DynamicImage, ImageReader};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Open a file and detect its format from the leading bytes, falling back
/// to the extension when the content is unrecognised.
fn open_reader(path: &Path) -> Result<(ImageReader<BufReader<File>>, ImageFormat), BackendError> {
    let reader = ImageReader::open(path)
        .map_err(|e| BackendError::io(path, e))?
        .with_guessed_format()
        .map_err(|e| BackendError::io(path, e))?;

    let detected = reader.format().ok_or_else(|| BackendError::UnsupportedFormat {
        path: path.to_path_buf(),
        format: "unknown".to_string(),
    })?;
    let format =
        ImageFormat::from_detected(detected).ok_or_else(|| BackendError::UnsupportedFormat {
            path: path.to_path_buf(),
            format: format!("{detected:?}").to_lowercase(),
        })?;

    Ok((reader, format))
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    let (reader, _) = open_reader(path)?;
    reader.decode().map_err(|e| BackendError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// JPEG has no alpha channel and only 8-bit gray/RGB; flatten anything else.
fn jpeg_compatible(img: DynamicImage) -> DynamicImage {
    match img.color() {
        ColorType::L8 | ColorType::Rgb8 => img,
        _ => DynamicImage::ImageRgb8(img.to_rgb8()),
    }
}

/// Encode `img` as `format` and write it to `path`, replacing any existing file.
fn save_image(
    img: DynamicImage,
    path: &Path,
    format: ImageFormat,
    quality: Quality,
) -> Result<(), BackendError> {
    let file = File::create(path).map_err(|e| BackendError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    let encoded = match format {
        ImageFormat::Jpeg => jpeg_compatible(img)
            .write_with_encoder(JpegEncoder::new_with_quality(&mut writer, quality.value())),
        ImageFormat::Png => img.write_with_encoder(PngEncoder::new(&mut writer)),
    };
    encoded.map_err(|e| BackendError::Encode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    writer.flush().map_err(|e| BackendError::io(path, e))
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<ImageInfo, BackendError> {
        let (reader, format) = open_reader(path)?;
        let (width, height) = reader.into_dimensions().map_err(|e| BackendError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(ImageInfo {
            width,
            height,
            format,
        })
    }

    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        let resized = img.resize_exact(params.width, params.height, FilterType::Nearest);
        save_image(resized, &params.output, params.format, params.quality)
    }
}
