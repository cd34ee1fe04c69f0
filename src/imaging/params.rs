//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the [`convert`](crate::convert) stage (which decides the
//! target size and path) and the [`backend`](super::backend) (which does the
//! pixel work), so a mock backend can stand in during tests.
//!
//! ## Types
//!
//! - [`ImageFormat`] — The encoded formats we read and write (JPEG, PNG).
//! - [`Quality`] — Lossy encoding quality (1–100, default 75). Clamped on construction.
//! - [`ResizeParams`] — Full specification for a resize: source, output, exact size, format.

use std::fmt;
use std::path::PathBuf;

/// Encoded image formats the converter accepts. Output always uses the
/// source's format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    /// File extensions eligible for discovery, in discovery order.
    pub const EXTENSIONS: [&'static str; 3] = ["jpg", "png", "jpeg"];

    /// Map a format detected by the `image` crate onto the whitelist.
    pub fn from_detected(format: image::ImageFormat) -> Option<Self> {
        match format {
            image::ImageFormat::Jpeg => Some(ImageFormat::Jpeg),
            image::ImageFormat::Png => Some(ImageFormat::Png),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Png => "png",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u8);

impl Quality {
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    /// The common JPEG encoder default.
    fn default() -> Self {
        Self::new(75)
    }
}

/// Parameters for an exact-size nearest-neighbour resize.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
    /// Only consulted for JPEG output.
    pub quality: Quality,
}
