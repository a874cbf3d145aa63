//! Font metrics and glyph generation for raster rendering.
//!
//! Uses the Spleen bitmap font family. Font1 (the mono receipt face)
//! maps to Spleen 8x16; Font2 (the condensed face) maps to Spleen 6x12.

use crate::ir::StyleState;
use crate::record::FontStyle;
use spleen_font::{FONT_6X12, FONT_8X16, PSF2Font};

/// Physical pixels per logical pixel. The exported card is 300 logical
/// px wide at 2x density.
pub const PIXEL_DENSITY: usize = 2;

/// Glyph cell dimensions for each font, in logical pixels.
#[derive(Debug, Clone, Copy)]
pub struct FontMetrics {
    pub char_width: usize,
    pub char_height: usize,
}

impl FontMetrics {
    pub const FONT_1: FontMetrics = FontMetrics {
        char_width: 8,
        char_height: 16,
    };

    pub const FONT_2: FontMetrics = FontMetrics {
        char_width: 6,
        char_height: 12,
    };

    pub fn for_font(font: FontStyle) -> FontMetrics {
        match font {
            FontStyle::Font1 => Self::FONT_1,
            FontStyle::Font2 => Self::FONT_2,
        }
    }
}

/// Render state tracking current style and position.
#[derive(Debug, Clone)]
pub struct RenderState {
    pub style: StyleState,
    pub x: usize,
    pub y: usize,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            style: StyleState::default(),
            x: 0,
            y: 0,
        }
    }
}

impl RenderState {
    pub fn reset(&mut self) {
        self.style = StyleState::default();
        self.x = 0;
        // Note: y position is not reset by Init
    }

    pub fn font_metrics(&self) -> FontMetrics {
        FontMetrics::for_font(self.style.font)
    }

    /// Total width multiplier including pixel density.
    pub fn total_width_mult(&self) -> usize {
        ((self.style.width_mult as usize) + 1) * PIXEL_DENSITY
    }

    /// Total height multiplier including pixel density.
    pub fn total_height_mult(&self) -> usize {
        ((self.style.height_mult as usize) + 1) * PIXEL_DENSITY
    }

    /// Effective character cell width in physical pixels.
    pub fn effective_char_width(&self) -> usize {
        self.font_metrics().char_width * self.total_width_mult()
    }

    /// Effective character cell height in physical pixels.
    pub fn effective_char_height(&self) -> usize {
        self.font_metrics().char_height * self.total_height_mult()
    }

    /// Line height (character cell height).
    pub fn line_height(&self) -> usize {
        self.effective_char_height()
    }
}

/// Generate a glyph bitmap for a character.
/// Returns a Vec<u8> where each byte is 0 (white) or 1 (black), sized
/// `char_width * char_height` for the font.
pub fn generate_glyph(font: FontStyle, ch: char) -> Vec<u8> {
    let metrics = FontMetrics::for_font(font);
    let mut glyph = vec![0u8; metrics.char_width * metrics.char_height];

    let source = match font {
        FontStyle::Font1 => FONT_8X16,
        FontStyle::Font2 => FONT_6X12,
    };

    let mut spleen = match PSF2Font::new(source) {
        Ok(f) => f,
        Err(_) => {
            draw_box(&mut glyph, metrics.char_width, metrics.char_height);
            return glyph;
        }
    };

    let utf8 = ch.to_string();
    if let Some(spleen_glyph) = spleen.glyph_for_utf8(utf8.as_bytes()) {
        for (row_y, row) in spleen_glyph.enumerate() {
            for (col_x, on) in row.enumerate() {
                let idx = row_y * metrics.char_width + col_x;
                if idx < glyph.len() {
                    glyph[idx] = if on { 1 } else { 0 };
                }
            }
        }
    } else {
        // Unknown character: draw a box
        draw_box(&mut glyph, metrics.char_width, metrics.char_height);
    }

    glyph
}

/// Draw a box outline in the glyph buffer.
fn draw_box(glyph: &mut [u8], width: usize, height: usize) {
    for x in 0..width {
        glyph[x] = 1;
        glyph[(height - 1) * width + x] = 1;
    }
    for y in 0..height {
        glyph[y * width] = 1;
        glyph[y * width + width - 1] = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_metrics() {
        assert_eq!(FontMetrics::FONT_1.char_width, 8);
        assert_eq!(FontMetrics::FONT_1.char_height, 16);
        assert_eq!(FontMetrics::FONT_2.char_width, 6);
        assert_eq!(FontMetrics::FONT_2.char_height, 12);
    }

    #[test]
    fn test_generate_glyph() {
        let glyph = generate_glyph(FontStyle::Font1, 'A');
        assert_eq!(glyph.len(), 8 * 16);
        // Should have some black pixels
        assert!(glyph.iter().any(|&p| p != 0));
    }

    #[test]
    fn test_space_glyph_is_blank() {
        let glyph = generate_glyph(FontStyle::Font1, ' ');
        assert!(glyph.iter().all(|&p| p == 0));
    }

    #[test]
    fn test_effective_sizes_include_density() {
        let state = RenderState::default();
        assert_eq!(state.effective_char_width(), 8 * PIXEL_DENSITY);
        assert_eq!(state.effective_char_height(), 16 * PIXEL_DENSITY);

        let mut scaled = RenderState::default();
        scaled.style.width_mult = 1;
        scaled.style.height_mult = 1;
        assert_eq!(scaled.effective_char_width(), 8 * 2 * PIXEL_DENSITY);
        assert_eq!(scaled.effective_char_height(), 16 * 2 * PIXEL_DENSITY);
    }
}
