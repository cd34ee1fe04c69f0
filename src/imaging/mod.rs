//! Image processing — pure Rust, no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::ImageReader::into_dimensions` |
//! | **Resize** | nearest-neighbour `resize_exact` |
//! | **Encode** | JPEG / PNG encoders, same format as the source |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod calculations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend, ImageInfo};
pub use calculations::{proportional_height, target_dimensions, target_width};
pub use params::{ImageFormat, Quality, ResizeParams};
pub use rust_backend::RustBackend;
