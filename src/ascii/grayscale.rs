//! RGB to grayscale conversion using ITU-R BT.601 luminance weighting.

use image::RgbImage;

/// Convert an RGB image to one luminance sample per pixel.
///
/// The luminance formula is: Y = 0.299*R + 0.587*G + 0.114*B
///
/// Integer math keeps the hot path free of floating point; the
/// coefficients are scaled by 1000 (299 + 587 + 114 = 1000), so the
/// result is always in [0, 255] and monotonic in channel brightness.
///
/// # Arguments
/// * `image` - A decoded RGB image
///
/// # Returns
/// A vector of luminance values (0-255), one per pixel, row-major.
pub fn to_grayscale(image: &RgbImage) -> Vec<u8> {
    let pixel_count = image.width() as usize * image.height() as usize;
    let mut gray = Vec::with_capacity(pixel_count);

    for rgb in image.as_raw().chunks_exact(3) {
        let r = rgb[0] as u32;
        let g = rgb[1] as u32;
        let b = rgb[2] as u32;
        let luminance = (299 * r + 587 * g + 114 * b) / 1000;
        gray.push(luminance as u8);
    }

    gray
}
