//! Render configuration passed into the pipeline.

use super::errors::RenderError;
use super::palette::GlyphPalette;

/// Default output width in glyph columns.
pub const DEFAULT_COLUMNS: u32 = 100;

/// Default vertical aspect compensation.
///
/// A text cell is roughly 1.6-1.8x taller than it is wide; the resizer
/// divides the proportional row count by this factor so the mosaic keeps
/// the source's apparent aspect ratio.
pub const DEFAULT_CHAR_ASPECT: f32 = 1.65;

/// Default neon stroke color for SVG output.
pub const DEFAULT_STROKE_COLOR: &str = "#00ffff";

/// Default SVG font size in pixels.
pub const DEFAULT_FONT_SIZE: f32 = 10.0;

/// Default glow blur radius for SVG output.
pub const DEFAULT_GLOW_RADIUS: f32 = 2.0;

/// Output encoding selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Newline-separated plain text
    #[default]
    Text,
    /// Self-contained neon-styled SVG document
    Svg,
}

/// Visual styling for SVG output.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgStyle {
    /// Glyph fill color (any CSS color)
    pub color: String,
    /// Gaussian blur radius of the glow halo; 0 disables the filter
    pub glow_radius: f32,
    /// Font size in pixels
    pub font_size: f32,
    /// Extra letter spacing in pixels
    pub letter_spacing: f32,
}

impl Default for SvgStyle {
    fn default() -> Self {
        SvgStyle {
            color: DEFAULT_STROKE_COLOR.to_string(),
            glow_radius: DEFAULT_GLOW_RADIUS,
            font_size: DEFAULT_FONT_SIZE,
            letter_spacing: 0.0,
        }
    }
}

/// Complete render configuration.
///
/// Pure data: validated once at pipeline entry and never mutated during
/// rendering. There is no process-wide render state; every invocation
/// carries its own target.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderTarget {
    /// Output width in glyph columns
    pub columns: u32,
    /// Glyph ramp, densest glyph first
    pub palette: GlyphPalette,
    /// Apply the sharpening convolution before quantization
    pub sharpen: bool,
    /// Flip sample brightness before quantization (dark backgrounds)
    pub invert: bool,
    /// Vertical aspect compensation factor
    pub char_aspect: f32,
    /// Styling for SVG output; ignored in text mode
    pub style: SvgStyle,
}

impl Default for RenderTarget {
    fn default() -> Self {
        RenderTarget {
            columns: DEFAULT_COLUMNS,
            palette: GlyphPalette::default(),
            sharpen: false,
            invert: false,
            char_aspect: DEFAULT_CHAR_ASPECT,
            style: SvgStyle::default(),
        }
    }
}

impl RenderTarget {
    /// Check the target before the pipeline runs.
    ///
    /// Only structurally invalid configuration errors here; numeric edge
    /// cases downstream are handled by saturation.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.columns == 0 {
            return Err(RenderError::InvalidParameter(
                "width must be at least 1 glyph column".to_string(),
            ));
        }
        if self.palette.is_empty() {
            return Err(RenderError::InvalidParameter(
                "palette must contain at least one glyph".to_string(),
            ));
        }
        if !(self.char_aspect.is_finite() && self.char_aspect > 0.0) {
            return Err(RenderError::InvalidParameter(format!(
                "aspect compensation must be a positive number, got {}",
                self.char_aspect
            )));
        }
        if !(self.style.font_size.is_finite() && self.style.font_size > 0.0) {
            return Err(RenderError::InvalidParameter(format!(
                "font size must be a positive number, got {}",
                self.style.font_size
            )));
        }
        if !(self.style.glow_radius.is_finite() && self.style.glow_radius >= 0.0) {
            return Err(RenderError::InvalidParameter(format!(
                "glow radius must not be negative, got {}",
                self.style.glow_radius
            )));
        }
        Ok(())
    }
}
