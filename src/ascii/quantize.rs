//! Luminance quantization onto a glyph palette.

use super::grid::GlyphGrid;
use super::palette::GlyphPalette;

/// Map a luminance sample to a palette index.
///
/// The palette divides [0, 255] into `levels` equal intervals and the
/// index is the interval the sample falls in: `floor(v / (255 / levels))`,
/// clamped so a full-brightness sample stays at the last level. For any
/// fixed `levels` the index is monotonically non-decreasing in `v` and
/// always in bounds; a single-glyph palette maps every sample to 0.
///
/// # Example
/// ```ignore
/// // 10-level ramp: 0 -> 0, 128 -> 5, 255 -> 9
/// assert_eq!(glyph_index(128, 10), 5);
/// ```
#[inline]
pub fn glyph_index(v: u8, levels: usize) -> usize {
    if levels <= 1 {
        return 0;
    }
    (v as usize * levels / 255).min(levels - 1)
}

/// Quantize a luminance buffer into a glyph grid.
///
/// Samples are read in row-major order and mapped one glyph each, so the
/// grid's flat stream lines up with the flattened luminance input.
///
/// # Arguments
/// * `luma` - Luminance values (0-255), one per glyph cell
/// * `columns` - Glyphs per output row; must be nonzero (validated at
///   pipeline entry)
/// * `palette` - Non-empty glyph ramp, densest glyph first
/// * `invert` - Flip sample brightness before mapping (dark backgrounds)
pub fn map_to_grid(
    luma: &[u8],
    columns: usize,
    palette: &GlyphPalette,
    invert: bool,
) -> GlyphGrid {
    let levels = palette.len();
    let glyphs = luma
        .iter()
        .map(|&v| {
            let v = if invert { 255 - v } else { v };
            palette.glyph(glyph_index(v, levels))
        })
        .collect();
    GlyphGrid::new(glyphs, columns)
}
