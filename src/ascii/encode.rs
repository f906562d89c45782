//! Text and SVG encoding of the glyph grid.

use super::grid::GlyphGrid;
use super::target::SvgStyle;

/// Line height as a multiple of the font size.
const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Horizontal advance of one monospace glyph as a multiple of the font
/// size, used to size the SVG document.
const GLYPH_ADVANCE_FACTOR: f32 = 0.6;

/// Reflow the glyph grid into newline-separated text.
///
/// Every line carries exactly `columns` glyphs except possibly the last,
/// which holds the remainder. Lines are joined by single newlines with no
/// trailing newline; an empty grid encodes to the empty string.
pub fn to_text(grid: &GlyphGrid) -> String {
    let mut out = String::with_capacity(grid.len() + grid.rows());
    for (i, row) in grid.rows_iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.extend(row.iter());
    }
    out
}

/// Encode the glyph grid as a self-contained neon-styled SVG document.
///
/// One `<text>` element per row at `y = line_height * (row + 1)`, with
/// `line_height = font_size * 1.2` and the document sized to fit every
/// row. Styling lives at document level (a `<style>` rule plus one glow
/// filter on the enclosing group), keeping the encoding O(rows). All
/// XML-significant characters in glyph rows are escaped, so the document
/// stays well-formed for any palette content. An empty grid produces a
/// minimal document with zero text elements and zero height.
pub fn to_svg(grid: &GlyphGrid, style: &SvgStyle) -> String {
    let line_height = style.font_size * LINE_HEIGHT_FACTOR;
    let height = line_height * grid.rows() as f32;
    let advance = style.font_size * GLYPH_ADVANCE_FACTOR + style.letter_spacing;
    let width = advance * grid.columns() as f32;
    let glow = style.glow_radius > 0.0;

    let mut svg = String::with_capacity(grid.len() + 512);
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" \
         viewBox=\"0 0 {} {}\" xml:space=\"preserve\">\n",
        width, height, width, height
    ));

    if glow {
        // Two blur taps at decreasing radii merged under the crisp source
        // approximate a neon bloom without touching individual glyphs.
        svg.push_str(&format!(
            "<defs><filter id=\"glow\" x=\"-50%\" y=\"-50%\" width=\"200%\" height=\"200%\">\
             <feGaussianBlur in=\"SourceGraphic\" stdDeviation=\"{}\" result=\"halo\"/>\
             <feGaussianBlur in=\"SourceGraphic\" stdDeviation=\"{}\" result=\"core\"/>\
             <feMerge><feMergeNode in=\"halo\"/><feMergeNode in=\"core\"/>\
             <feMergeNode in=\"SourceGraphic\"/></feMerge></filter></defs>\n",
            style.glow_radius,
            style.glow_radius * 0.5
        ));
    }

    svg.push_str(&format!(
        "<style>text {{ font-family: \"Courier New\", monospace; font-size: {}px; \
         letter-spacing: {}px; fill: {}; }}</style>\n",
        style.font_size,
        style.letter_spacing,
        escape_xml(&style.color)
    ));
    svg.push_str(&format!(
        "<rect width=\"{}\" height=\"{}\" fill=\"#000\"/>\n",
        width, height
    ));

    if glow {
        svg.push_str("<g filter=\"url(#glow)\">\n");
    } else {
        svg.push_str("<g>\n");
    }
    for (i, row) in grid.rows_iter().enumerate() {
        let y = line_height * (i + 1) as f32;
        svg.push_str(&format!("<text x=\"0\" y=\"{}\">", y));
        for &glyph in row {
            escape_into(&mut svg, glyph);
        }
        svg.push_str("</text>\n");
    }
    svg.push_str("</g>\n</svg>\n");

    svg
}

/// Append one glyph, escaping the XML-significant characters.
fn escape_into(out: &mut String, glyph: char) {
    match glyph {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&apos;"),
        _ => out.push(glyph),
    }
}

/// Escape a whole string for use in SVG content.
fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        escape_into(&mut out, ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_empty_grid() {
        let grid = GlyphGrid::new(Vec::new(), 80);
        assert_eq!(to_text(&grid), "");
    }

    #[test]
    fn test_text_no_trailing_newline() {
        let grid = GlyphGrid::new(vec!['#'; 6], 3);
        assert_eq!(to_text(&grid), "###\n###");
    }

    #[test]
    fn test_text_partial_last_line() {
        let grid = GlyphGrid::new(vec!['x'; 7], 3);
        assert_eq!(to_text(&grid), "xxx\nxxx\nx");
    }

    #[test]
    fn test_escape_covers_markup_characters() {
        let mut out = String::new();
        for ch in ['&', '<', '>', '"', '\'', 'a'] {
            escape_into(&mut out, ch);
        }
        assert_eq!(out, "&amp;&lt;&gt;&quot;&apos;a");
    }

    #[test]
    fn test_svg_empty_grid_has_zero_height() {
        let grid = GlyphGrid::new(Vec::new(), 80);
        let svg = to_svg(&grid, &SvgStyle::default());
        assert!(svg.contains("height=\"0\""));
        assert!(!svg.contains("<text"));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_svg_rows_positioned_by_line_height() {
        let grid = GlyphGrid::new(vec!['#'; 4], 2);
        let style = SvgStyle {
            font_size: 10.0,
            ..SvgStyle::default()
        };
        let svg = to_svg(&grid, &style);
        assert!(svg.contains("y=\"12\""));
        assert!(svg.contains("y=\"24\""));
    }

    #[test]
    fn test_svg_glow_disabled_without_radius() {
        let grid = GlyphGrid::new(vec!['#'; 2], 2);
        let style = SvgStyle {
            glow_radius: 0.0,
            ..SvgStyle::default()
        };
        let svg = to_svg(&grid, &style);
        assert!(!svg.contains("<filter"));
        assert!(!svg.contains("url(#glow)"));
    }
}
