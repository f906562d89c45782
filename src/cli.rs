//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and option
//! resolution against the config file.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use neonscii::ascii;
use neonscii::config::Config;

// ==================== CLI Enums ====================

/// Built-in glyph palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PaletteChoice {
    #[default]
    Classic,
    Standard,
    Blocks,
    Minimal,
}

impl From<PaletteChoice> for ascii::Charset {
    fn from(p: PaletteChoice) -> Self {
        match p {
            PaletteChoice::Classic => ascii::Charset::Classic,
            PaletteChoice::Standard => ascii::Charset::Standard,
            PaletteChoice::Blocks => ascii::Charset::Blocks,
            PaletteChoice::Minimal => ascii::Charset::Minimal,
        }
    }
}

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    #[default]
    Text,
    Svg,
}

impl From<Mode> for ascii::OutputMode {
    fn from(m: Mode) -> Self {
        match m {
            Mode::Text => ascii::OutputMode::Text,
            Mode::Svg => ascii::OutputMode::Svg,
        }
    }
}

// ==================== Value Parsers ====================

/// Parse and validate glyph column width (>= 1)
fn parse_width(s: &str) -> Result<u32, String> {
    let width: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if width == 0 {
        return Err("Width must be at least 1 glyph column".to_string());
    }
    Ok(width)
}

/// Parse and validate aspect compensation (0.1-10.0)
fn parse_aspect(s: &str) -> Result<f32, String> {
    let aspect: f32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !(0.1..=10.0).contains(&aspect) {
        return Err(format!(
            "Aspect compensation must be between 0.1 and 10.0, got {}",
            aspect
        ));
    }
    Ok(aspect)
}

/// Parse and validate glow radius (>= 0)
fn parse_glow(s: &str) -> Result<f32, String> {
    let radius: f32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !radius.is_finite() || radius < 0.0 {
        return Err(format!("Glow radius must not be negative, got {}", radius));
    }
    Ok(radius)
}

/// Parse and validate font size (> 0)
fn parse_font_size(s: &str) -> Result<f32, String> {
    let size: f32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !size.is_finite() || size <= 0.0 {
        return Err(format!("Font size must be greater than 0, got {}", size));
    }
    Ok(size)
}

// ==================== CLI Arguments ====================

/// Transcode an image into a neon ASCII mosaic
#[derive(Parser, Debug)]
#[command(name = "neonscii")]
#[command(version, about = "Render images as neon ASCII art", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Source image (PNG, JPEG, ...)
    pub image: Option<PathBuf>,

    /// Output width in glyph columns
    #[arg(short, long, value_parser = parse_width)]
    pub width: Option<u32>,

    /// Built-in glyph palette
    #[arg(long)]
    pub charset: Option<PaletteChoice>,

    /// Custom glyph ramp, densest glyph first (overrides --charset)
    #[arg(long)]
    pub palette: Option<String>,

    /// Sharpen edges before quantization
    #[arg(long)]
    pub sharpen: bool,

    /// Invert brightness (for dark backgrounds)
    #[arg(long)]
    pub invert: bool,

    /// Vertical aspect compensation (text cells are taller than wide)
    #[arg(long, value_parser = parse_aspect)]
    pub aspect: Option<f32>,

    /// Output encoding
    #[arg(short, long, default_value = "text")]
    pub mode: Mode,

    /// Neon stroke color (SVG mode)
    #[arg(long)]
    pub color: Option<String>,

    /// Glow blur radius (SVG mode)
    #[arg(long, value_parser = parse_glow)]
    pub glow_radius: Option<f32>,

    /// Font size in pixels (SVG mode)
    #[arg(long, value_parser = parse_font_size)]
    pub font_size: Option<f32>,

    /// Extra letter spacing in pixels (SVG mode)
    #[arg(long)]
    pub letter_spacing: Option<f32>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to config file (default: ~/.config/neonscii/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List built-in glyph palettes
    Palettes,
}

impl Args {
    /// Merge CLI flags over config-file values into a render target.
    ///
    /// Precedence: CLI flag, then config file, then built-in default.
    pub fn resolve(&self, config: &Config) -> Result<ascii::RenderTarget, String> {
        let palette = self.resolve_palette(config)?;

        let style = ascii::SvgStyle {
            color: self
                .color
                .clone()
                .or_else(|| config.svg.color.clone())
                .unwrap_or_else(|| ascii::DEFAULT_STROKE_COLOR.to_string()),
            glow_radius: self
                .glow_radius
                .or(config.svg.glow_radius)
                .unwrap_or(ascii::DEFAULT_GLOW_RADIUS),
            font_size: self
                .font_size
                .or(config.svg.font_size)
                .unwrap_or(ascii::DEFAULT_FONT_SIZE),
            letter_spacing: self
                .letter_spacing
                .or(config.svg.letter_spacing)
                .unwrap_or(0.0),
        };

        Ok(ascii::RenderTarget {
            columns: self
                .width
                .or(config.render.width)
                .unwrap_or(ascii::DEFAULT_COLUMNS),
            palette,
            sharpen: self.sharpen || config.render.sharpen,
            invert: self.invert || config.render.invert,
            char_aspect: self
                .aspect
                .or(config.render.aspect)
                .unwrap_or(ascii::DEFAULT_CHAR_ASPECT),
            style,
        })
    }

    fn resolve_palette(&self, config: &Config) -> Result<ascii::GlyphPalette, String> {
        if let Some(ramp) = self.palette.as_deref().or(config.render.palette.as_deref()) {
            return Ok(ascii::GlyphPalette::new(ramp));
        }
        if let Some(choice) = self.charset {
            return Ok(ascii::Charset::from(choice).palette());
        }
        match config.render.charset.as_deref() {
            Some(name) => ascii::Charset::from_name(name)
                .map(|c| c.palette())
                .ok_or_else(|| {
                    format!(
                        "Unknown charset '{}' in config. Available charsets: classic, standard, blocks, minimal",
                        name
                    )
                }),
            None => Ok(ascii::GlyphPalette::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_width_rejects_zero() {
        assert!(parse_width("0").is_err());
        assert_eq!(parse_width("100"), Ok(100));
    }

    #[test]
    fn test_parse_aspect_range() {
        assert!(parse_aspect("1.65").is_ok());
        assert!(parse_aspect("0").is_err());
        assert!(parse_aspect("nope").is_err());
    }

    #[test]
    fn test_resolve_defaults() {
        let args = Args::parse_from(["neonscii", "photo.png"]);
        let target = args.resolve(&Config::default()).unwrap();
        assert_eq!(target.columns, ascii::DEFAULT_COLUMNS);
        assert_eq!(target.palette.len(), 70);
        assert!(!target.sharpen);
        assert_eq!(target.style.color, ascii::DEFAULT_STROKE_COLOR);
    }

    #[test]
    fn test_resolve_cli_overrides_config() {
        let args = Args::parse_from(["neonscii", "photo.png", "-w", "48", "--charset", "blocks"]);
        let mut config = Config::default();
        config.render.width = Some(120);
        config.render.charset = Some("standard".to_string());
        let target = args.resolve(&config).unwrap();
        assert_eq!(target.columns, 48);
        assert_eq!(target.palette.len(), 5);
    }

    #[test]
    fn test_resolve_unknown_config_charset() {
        let args = Args::parse_from(["neonscii", "photo.png"]);
        let mut config = Config::default();
        config.render.charset = Some("neon".to_string());
        assert!(args.resolve(&config).is_err());
    }
}
