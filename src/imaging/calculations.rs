//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Calculate the width of a density variant.
///
/// The product is computed in `f32` and truncated toward zero, then clamped
/// to at least one pixel.
///
/// # Examples
/// ```
/// # use android_sizes::imaging::target_width;
/// assert_eq!(target_width(0.75, 100), 75);
/// assert_eq!(target_width(1.333, 3), 3);    // 3.999 truncates
/// assert_eq!(target_width(0.375, 2), 1);    // 0.75 clamps up to 1
/// ```
pub fn target_width(ratio: f32, width: u32) -> u32 {
    let scaled = (ratio * width as f32) as u32;
    scaled.max(1)
}

/// Calculate the height that keeps the source aspect ratio at `new_width`.
///
/// Adds 0.7 before truncating, so a fractional height of .3 or more rounds up.
///
/// # Arguments
/// * `original` - Original image dimensions (width, height)
/// * `new_width` - Width of the resized image
pub fn proportional_height(original: (u32, u32), new_width: u32) -> u32 {
    let (orig_w, orig_h) = original;
    if orig_w == 0 {
        return 1;
    }
    let scale = orig_w as f64 / new_width as f64;
    let height = (0.7 + orig_h as f64 / scale) as u32;
    height.max(1)
}

/// Output dimensions for a density variant: the scaled width plus the
/// aspect-preserving height.
pub fn target_dimensions(original: (u32, u32), ratio: f32) -> (u32, u32) {
    let width = target_width(ratio, original.0);
    (width, proportional_height(original, width))
}
