//! Aspect-corrected resizing to the glyph grid width.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

use super::errors::RenderError;

/// Compute the glyph-row count for a source image rescaled to `columns`.
///
/// The proportional height `columns * (h / w)` is divided by `char_aspect`
/// because a text cell is taller than it is wide; without the correction
/// the mosaic would come out vertically stretched. The result is rounded
/// and clamped to at least 1 so a very wide source still produces a row.
pub fn target_rows(width: u32, height: u32, columns: u32, char_aspect: f32) -> u32 {
    let ratio = height as f32 / width as f32 / char_aspect;
    let rows = (columns as f32 * ratio).round() as u32;
    rows.max(1)
}

/// Resize a decoded image to `columns` pixels wide, one pixel per glyph
/// cell, using bilinear interpolation.
///
/// Output dimensions are exact: width is `columns` and height is
/// [`target_rows`]. The source is never mutated.
pub fn resize_to_columns(
    image: &DynamicImage,
    columns: u32,
    char_aspect: f32,
) -> Result<DynamicImage, RenderError> {
    if columns == 0 {
        return Err(RenderError::InvalidParameter(
            "width must be at least 1 glyph column".to_string(),
        ));
    }
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidImage(format!(
            "source image has a zero dimension ({}x{})",
            width, height
        )));
    }

    let rows = target_rows(width, height, columns, char_aspect);
    log::debug!(
        "resizing {}x{} source to {}x{} glyph cells",
        width,
        height,
        columns,
        rows
    );
    Ok(image.resize_exact(columns, rows, FilterType::Triangle))
}
