//! Image-to-glyph transcoding pipeline.
//!
//! Converts a decoded raster image into a monochrome glyph mosaic in four
//! ordered stages:
//!
//! 1. **Resize** - rescale to the target column count, compensating for
//!    text cells being taller than wide
//! 2. **Reduce** - BT.601 grayscale, with an optional sharpening pass
//! 3. **Quantize** - map each luminance sample to a palette glyph
//! 4. **Encode** - reflow into fixed-width text or a neon-styled SVG
//!    document
//!
//! The pipeline is a pure function from (image, target) to a string: it is
//! single-threaded, never blocks on I/O, holds no state across
//! invocations, and either returns a complete render or an error with no
//! partial output. Concurrent renders need no coordination beyond giving
//! each invocation its own [`RenderTarget`].
//!
//! # Palettes
//!
//! Multiple glyph ramps are available via [`Charset`], or any custom ramp
//! through [`GlyphPalette::new`]. Index 0 is always the glyph for the
//! darkest sample.

mod encode;
mod errors;
mod grayscale;
mod grid;
mod palette;
mod quantize;
mod resize;
mod sharpen;
mod target;

pub use encode::{to_svg, to_text};
pub use errors::RenderError;
pub use grayscale::to_grayscale;
pub use grid::GlyphGrid;
pub use palette::{
    Charset, GlyphPalette, BLOCKS_PALETTE, CLASSIC_PALETTE, MINIMAL_PALETTE, STANDARD_PALETTE,
};
pub use quantize::{glyph_index, map_to_grid};
pub use resize::{resize_to_columns, target_rows};
pub use sharpen::sharpen;
pub use target::{
    OutputMode, RenderTarget, SvgStyle, DEFAULT_CHAR_ASPECT, DEFAULT_COLUMNS, DEFAULT_FONT_SIZE,
    DEFAULT_GLOW_RADIUS, DEFAULT_STROKE_COLOR,
};

use image::DynamicImage;

/// Render a decoded image with the given configuration.
///
/// Runs the full pipeline and returns the encoded output: plain text or
/// SVG markup depending on `mode`. The source image is not mutated.
pub fn transcode(
    image: &DynamicImage,
    target: &RenderTarget,
    mode: OutputMode,
) -> Result<String, RenderError> {
    target.validate()?;

    let resized = resize::resize_to_columns(image, target.columns, target.char_aspect)?;
    let rgb = resized.to_rgb8();
    let mut luma = grayscale::to_grayscale(&rgb);
    if target.sharpen {
        luma = sharpen::sharpen(&luma, rgb.width(), rgb.height());
    }
    let grid = quantize::map_to_grid(&luma, target.columns as usize, &target.palette, target.invert);
    log::debug!(
        "quantized {} samples into {}x{} grid",
        grid.len(),
        grid.columns(),
        grid.rows()
    );

    Ok(match mode {
        OutputMode::Text => encode::to_text(&grid),
        OutputMode::Svg => encode::to_svg(&grid, &target.style),
    })
}

/// Decode source bytes and render them.
///
/// Decoder failures surface verbatim as [`RenderError::Decode`]; the
/// format is whatever the decoder recognizes from the byte signature.
pub fn transcode_bytes(
    bytes: &[u8],
    target: &RenderTarget,
    mode: OutputMode,
) -> Result<String, RenderError> {
    let image = image::load_from_memory(bytes)?;
    transcode(&image, target, mode)
}
