//! Android screen-density buckets and the width ratio table between them.
//!
//! Only the four classic buckets are representable. Anything else is rejected
//! when parsing, so every lookup in the table is for a known pair.
//!
//! ## Ratio table
//!
//! | from \ to | ldpi  | mdpi  | hdpi  | xhdpi |
//! |-----------|-------|-------|-------|-------|
//! | ldpi      |   —   | 1.333 | 2.0   | 2.666 |
//! | mdpi      | 0.75  |   —   | 1.5   | 2.0   |
//! | hdpi      | 0.5   | 0.75  |   —   | 1.333 |
//! | xhdpi     | 0.375 | 0.5   | 0.666 |   —   |
//!
//! The constants are kept as published, so `ratio(a, b)` is not exactly
//! `1.0 / ratio(b, a)` for every pair.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DensityError {
    #[error("unknown density '{0}' (expected one of: ldpi, mdpi, hdpi, xhdpi)")]
    Unknown(String),
}

/// An Android density bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, clap::ValueEnum)]
pub enum Density {
    Ldpi,
    Mdpi,
    Hdpi,
    Xhdpi,
}

impl Density {
    /// All buckets in canonical order.
    pub const ALL: [Density; 4] = [Density::Ldpi, Density::Mdpi, Density::Hdpi, Density::Xhdpi];

    /// Lowercase bucket name, also used as the output directory name.
    pub fn as_str(self) -> &'static str {
        match self {
            Density::Ldpi => "ldpi",
            Density::Mdpi => "mdpi",
            Density::Hdpi => "hdpi",
            Density::Xhdpi => "xhdpi",
        }
    }

    /// Every other bucket, in canonical order. Always three entries.
    pub fn targets(self) -> impl Iterator<Item = Density> {
        Density::ALL.into_iter().filter(move |d| *d != self)
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Density {
    type Err = DensityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ldpi" => Ok(Density::Ldpi),
            "mdpi" => Ok(Density::Mdpi),
            "hdpi" => Ok(Density::Hdpi),
            "xhdpi" => Ok(Density::Xhdpi),
            _ => Err(DensityError::Unknown(s.to_string())),
        }
    }
}

/// Width scale factor for converting an image at `source` density to `target`.
///
/// Returns `None` for the self-pair, which is never a conversion.
pub fn ratio(source: Density, target: Density) -> Option<f32> {
    use Density::*;
    let r = match (source, target) {
        (Ldpi, Mdpi) => 1.333,
        (Ldpi, Hdpi) => 2.0,
        (Ldpi, Xhdpi) => 2.666,
        (Mdpi, Ldpi) => 0.75,
        (Mdpi, Hdpi) => 1.5,
        (Mdpi, Xhdpi) => 2.0,
        (Hdpi, Ldpi) => 0.5,
        (Hdpi, Mdpi) => 0.75,
        (Hdpi, Xhdpi) => 1.333,
        (Xhdpi, Ldpi) => 0.375,
        (Xhdpi, Mdpi) => 0.5,
        (Xhdpi, Hdpi) => 0.666,
        (Ldpi, Ldpi) | (Mdpi, Mdpi) | (Hdpi, Hdpi) | (Xhdpi, Xhdpi) => return None,
    };
    Some(r)
}
