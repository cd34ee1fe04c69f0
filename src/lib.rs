//! # Android Sizes
//!
//! Batch-convert a directory of images into the other Android density
//! buckets. Point it at a directory of assets already drawn for one density
//! and it writes resized copies for the remaining three next to it:
//!
//! ```text
//! res/mdpi/icon.png  (100×100)   --type mdpi
//!   → res/ldpi/icon.png   (75×75)
//!   → res/hdpi/icon.png   (150×150)
//!   → res/xhdpi/icon.png  (200×200)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`density`] | The four density buckets and the width ratio table between them |
//! | [`imaging`] | Backend trait, the `image`-crate backend, dimension math |
//! | [`convert`] | One source file → one target density |
//! | [`batch`] | Discovery, nested parallel fan-out, result aggregation |
//! | [`config`] | Run configuration built once from the command line |
//! | [`output`] | CLI output formatting for the end-of-run summary |
//!
//! # Design Decisions
//!
//! ## Width-Driven Scaling
//!
//! Only the width is scaled by the ratio table; the height follows from the
//! source aspect ratio. Results are truncated toward zero and never drop
//! below one pixel.
//!
//! ## Nearest-Neighbour Resampling
//!
//! Density variants are resampled with nearest-neighbour rather than a
//! smoothing filter. Icons and other small assets keep hard pixel edges, and
//! resampling stays cheap enough to run every variant in parallel.
//!
//! ## Same Format In, Same Format Out
//!
//! JPEG sources produce JPEG variants and PNG sources produce PNG variants,
//! detected from file content. No format conversion ever happens.
//!
//! ## Errors Are Collected, Not Swallowed
//!
//! Every (file, density) conversion returns its own `Result`. The batch keeps
//! going past failures and hands back a [`batch::BatchReport`] listing what
//! succeeded and what did not, so a corrupt file never hides behind a
//! silent, empty output.

pub mod batch;
pub mod config;
pub mod convert;
pub mod density;
pub mod imaging;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
