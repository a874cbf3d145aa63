//! # IR to PNG Raster Backend
//!
//! Renders IR programs to pixel buffers and PNG images of the receipt
//! card.
//!
//! ## Architecture
//!
//! ```text
//! Program (IR) → RasterRenderer → PNG bytes
//!                     ↓
//!               Process each Op:
//!               - Track style state (font, bold, align, scale...)
//!               - Render text with Spleen bitmap fonts
//!               - Draw rules, bar patterns, logo placeholders
//!               - Output final composited image
//! ```
//!
//! ## Example
//!
//! ```
//! use recibo::ir::{Op, Program};
//! use recibo::render::render_png;
//!
//! let mut program = Program::with_init();
//! program.push(Op::Text("Hello".into()));
//! program.push(Op::Newline);
//! let png_bytes = render_png(&program).unwrap();
//! assert_eq!(&png_bytes[1..4], b"PNG");
//! ```

mod font;
mod text;

pub use font::{FontMetrics, PIXEL_DENSITY, RenderState, generate_glyph};

use std::collections::HashMap;

use image::{GrayImage, Luma, Rgba, RgbaImage};
use thiserror::Error;

use crate::ir::{Op, Program, RuleStyle};
use crate::record::FontStyle;

/// Exported card width in physical pixels (300 logical px at 2x).
pub const CARD_WIDTH_PX: usize = 600;

/// Exported card height in physical pixels (600 logical px at 2x).
pub const CARD_HEIGHT_PX: usize = 1200;

/// Card padding in physical pixels.
const CARD_MARGIN_PX: usize = 4;

/// Bar widths of the decorative pattern, indexed by digit % 5.
/// Physical pixels; 2x the reference's 1/2/1/3/2 logical px.
const BAR_WIDTHS: [usize; 5] = [2, 4, 2, 6, 4];

/// Bar heights of the decorative pattern, indexed by digit % 5.
const BAR_HEIGHTS: [usize; 5] = [24, 32, 28, 36, 26];

/// Errors that can occur during raster rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Image encoding error: {0}")]
    ImageEncode(String),

    #[error("Invalid operation: {0}")]
    InvalidOp(String),
}

/// Raster renderer for IR programs.
pub struct RasterRenderer {
    /// Total card width in pixels (including margins)
    paper_width: usize,
    /// Printable area width in pixels
    print_width: usize,
    /// Left margin in pixels
    left_margin: usize,
    buffer: Vec<u8>,
    height: usize,
    state: RenderState,
    font_cache: HashMap<(FontStyle, char), Vec<u8>>,
}

impl RasterRenderer {
    /// Create a new renderer with the given dimensions.
    pub fn new(paper_width: usize, print_width: usize, left_margin: usize, top_margin: usize) -> Self {
        // Start with a reasonable initial height
        let initial_height = 100;
        let buffer = vec![0u8; paper_width * initial_height];

        let state = RenderState {
            y: top_margin,
            ..Default::default()
        };

        Self {
            paper_width,
            print_width,
            left_margin,
            buffer,
            height: initial_height,
            state,
            font_cache: HashMap::new(),
        }
    }

    /// Create a renderer for the exported receipt card.
    ///
    /// ## Dimensions
    ///
    /// ```text
    /// ├ 4px ┼────── 592 px printable ──────┼ 4px ┤
    /// └─────┴────────────────────────────--┴─────┘
    ///              600 px total (2x density)
    /// ```
    pub fn receipt_card() -> Self {
        Self::new(
            CARD_WIDTH_PX,
            CARD_WIDTH_PX - 2 * CARD_MARGIN_PX,
            CARD_MARGIN_PX,
            CARD_MARGIN_PX,
        )
    }

    /// Ensure buffer has room for the given y position.
    fn ensure_height(&mut self, y: usize) {
        let needed_height = y + 1;
        if needed_height > self.height {
            // Grow by at least 100 rows or to needed height
            let new_height = needed_height.max(self.height + 100);
            self.buffer.resize(self.paper_width * new_height, 0);
            self.height = new_height;
        }
    }

    /// Set a pixel (1 = black, 0 = white).
    /// x is in card coordinates (0 = left edge of card).
    fn set_pixel(&mut self, x: usize, y: usize, black: bool) {
        if x >= self.paper_width {
            return;
        }
        self.ensure_height(y);
        let idx = y * self.paper_width + x;
        self.buffer[idx] = if black { 1 } else { 0 };
    }

    /// Set a pixel in print coordinates (0 = left edge of printable area).
    /// Automatically adds the left margin offset.
    fn set_print_pixel(&mut self, x: usize, y: usize, black: bool) {
        self.set_pixel(x + self.left_margin, y, black);
    }

    /// Render the program and return the natural-height grayscale image.
    pub fn render(&mut self, program: &Program) -> Result<GrayImage, RenderError> {
        for op in &program.ops {
            self.process_op(op)?;
        }
        Ok(self.to_gray())
    }

    /// Process a single IR operation.
    fn process_op(&mut self, op: &Op) -> Result<(), RenderError> {
        match op {
            Op::Init => {
                self.state.reset();
            }

            Op::Feed { px } => {
                self.state.y += *px as usize;
                self.ensure_height(self.state.y);
            }

            Op::SetAlign(align) => {
                self.state.style.alignment = *align;
            }

            Op::SetFont(font) => {
                self.state.style.font = *font;
            }

            Op::SetBold(enabled) => {
                self.state.style.bold = *enabled;
            }

            Op::SetInvert(enabled) => {
                self.state.style.invert = *enabled;
            }

            Op::SetDim(enabled) => {
                self.state.style.dim = *enabled;
            }

            Op::SetScale { height, width } => {
                self.state.style.height_mult = *height;
                self.state.style.width_mult = *width;
            }

            Op::Text(text) => {
                self.render_text(text);
            }

            Op::Newline => {
                self.newline();
            }

            Op::Rule { style } => {
                self.render_rule(*style);
            }

            Op::BarPattern { digits } => {
                self.render_bar_pattern(digits);
            }

            Op::LogoBox { width, height, .. } => {
                self.render_logo_box(*width as usize, *height as usize);
            }
        }

        Ok(())
    }

    /// Draw a horizontal rule across the printable width.
    fn render_rule(&mut self, style: RuleStyle) {
        self.state.y += 8;
        let y = self.state.y;
        self.ensure_height(y + 2);
        for x in 0..self.print_width {
            let on = match style {
                RuleStyle::Solid => true,
                // Dashed pattern: 8 on, 8 off
                RuleStyle::Dashed => (x / 8) % 2 == 0,
            };
            if on {
                self.set_print_pixel(x, y, true);
                self.set_print_pixel(x, y + 1, true);
            }
        }
        self.state.y += 10;
        self.state.x = 0;
    }

    /// Draw the decorative bar pattern for a digit string.
    ///
    /// Bars are bottom-aligned and centered, widths/heights cycling with
    /// the digit value; non-digits fall back to the first table entry.
    fn render_bar_pattern(&mut self, digits: &str) {
        if digits.is_empty() {
            return;
        }

        let gap = 2;
        let max_height = *BAR_HEIGHTS.iter().max().unwrap_or(&0);
        let total_width: usize = digits
            .chars()
            .map(|ch| bar_index(ch))
            .map(|i| BAR_WIDTHS[i] + gap)
            .sum::<usize>()
            .saturating_sub(gap);

        let start_x = if total_width < self.print_width {
            (self.print_width - total_width) / 2
        } else {
            0
        };

        self.ensure_height(self.state.y + max_height);

        let mut x = start_x;
        for ch in digits.chars() {
            let idx = bar_index(ch);
            let width = BAR_WIDTHS[idx];
            let height = BAR_HEIGHTS[idx];
            // Bottom-aligned within the pattern band
            let top = self.state.y + (max_height - height);
            for bx in 0..width {
                for by in 0..height {
                    self.set_print_pixel(x + bx, top + by, true);
                }
            }
            x += width + gap;
        }

        self.state.y += max_height + 4;
        self.state.x = 0;
    }

    /// Draw a crossed placeholder box standing in for a logo image.
    fn render_logo_box(&mut self, width: usize, height: usize) {
        if width == 0 || height == 0 {
            return;
        }
        let width = width.min(self.print_width);

        let start_x = (self.print_width - width) / 2;

        self.ensure_height(self.state.y + height);

        // Border
        for x in 0..width {
            self.set_print_pixel(start_x + x, self.state.y, true);
            self.set_print_pixel(start_x + x, self.state.y + height - 1, true);
        }
        for y in 0..height {
            self.set_print_pixel(start_x, self.state.y + y, true);
            self.set_print_pixel(start_x + width - 1, self.state.y + y, true);
        }

        // Diagonals (X pattern)
        for i in 0..height {
            let x1 = start_x + i * (width - 1) / height.max(1);
            let x2 = start_x + (width - 1) - i * (width - 1) / height.max(1);
            self.set_print_pixel(x1, self.state.y + i, true);
            self.set_print_pixel(x2, self.state.y + i, true);
        }

        self.state.y += height;
        self.state.x = 0;
    }

    /// Get or generate a glyph for the given font and character.
    fn get_glyph(&mut self, font: FontStyle, ch: char) -> Vec<u8> {
        let key = (font, ch);
        if let Some(glyph) = self.font_cache.get(&key) {
            return glyph.to_vec();
        }

        let glyph = generate_glyph(font, ch);
        self.font_cache.insert(key, glyph.clone());
        glyph
    }

    /// Compute the height after trimming trailing empty rows.
    fn trimmed_height(&self, min: usize) -> usize {
        let mut h = self.height;
        while h > 0 {
            let row_start = (h - 1) * self.paper_width;
            let row_empty = self.buffer[row_start..row_start + self.paper_width]
                .iter()
                .all(|&p| p == 0);
            if row_empty {
                h -= 1;
            } else {
                break;
            }
        }
        h.max(min)
    }

    /// Convert the buffer to a natural-height grayscale image.
    fn to_gray(&self) -> GrayImage {
        let actual_height = self.trimmed_height(10) + CARD_MARGIN_PX;

        let mut img = GrayImage::new(self.paper_width as u32, actual_height as u32);

        for y in 0..actual_height {
            for x in 0..self.paper_width {
                let idx = y * self.paper_width + x;
                let is_black = self.buffer.get(idx).copied().unwrap_or(0) != 0;
                let color = if is_black { 0u8 } else { 255u8 };
                img.put_pixel(x as u32, y as u32, Luma([color]));
            }
        }

        img
    }
}

fn bar_index(ch: char) -> usize {
    ch.to_digit(10).map(|d| (d as usize) % 5).unwrap_or(0)
}

/// Render a program to a natural-height grayscale PNG.
pub fn render_png(program: &Program) -> Result<Vec<u8>, RenderError> {
    let mut renderer = RasterRenderer::receipt_card();
    let img = renderer.render(program)?;
    encode_png(img.as_raw(), img.width(), img.height(), image::ExtendedColorType::L8)
}

/// Render a program onto the fixed-size export canvas.
///
/// The canvas is [`CARD_WIDTH_PX`] × [`CARD_HEIGHT_PX`] RGBA with a
/// white background; content taller than the canvas is cropped, shorter
/// content leaves white space below, matching the reference export.
pub fn render_card_rgba(program: &Program) -> Result<RgbaImage, RenderError> {
    let mut renderer = RasterRenderer::receipt_card();
    let gray = renderer.render(program)?;

    let mut canvas = RgbaImage::from_pixel(
        CARD_WIDTH_PX as u32,
        CARD_HEIGHT_PX as u32,
        Rgba([255, 255, 255, 255]),
    );

    for y in 0..gray.height().min(CARD_HEIGHT_PX as u32) {
        for x in 0..gray.width().min(CARD_WIDTH_PX as u32) {
            let v = gray.get_pixel(x, y)[0];
            canvas.put_pixel(x, y, Rgba([v, v, v, 255]));
        }
    }

    Ok(canvas)
}

/// Render a program to the fixed-size export PNG.
pub fn render_card_png(program: &Program) -> Result<Vec<u8>, RenderError> {
    let canvas = render_card_rgba(program)?;
    encode_png(
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        image::ExtendedColorType::Rgba8,
    )
}

fn encode_png(
    raw: &[u8],
    width: u32,
    height: u32,
    color: image::ExtendedColorType,
) -> Result<Vec<u8>, RenderError> {
    use image::ImageEncoder;

    let mut png_bytes = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
    encoder
        .write_image(raw, width, height, color)
        .map_err(|e: image::ImageError| RenderError::ImageEncode(e.to_string()))?;

    Ok(png_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Alignment;

    #[test]
    fn test_renderer_creation() {
        let renderer = RasterRenderer::receipt_card();
        assert_eq!(renderer.paper_width, 600);
        assert_eq!(renderer.print_width, 592);
        assert_eq!(renderer.left_margin, 4);
    }

    #[test]
    fn test_empty_program() {
        let program = Program::new();
        let result = render_png(&program);
        assert!(result.is_ok());
    }

    #[test]
    fn test_simple_text() {
        let mut program = Program::new();
        program.push(Op::Init);
        program.push(Op::Text("Hello".to_string()));
        program.push(Op::Newline);

        let result = render_png(&program);
        assert!(result.is_ok());
    }

    #[test]
    fn test_styled_text() {
        let mut program = Program::new();
        program.push(Op::Init);
        program.push(Op::SetBold(true));
        program.push(Op::SetAlign(Alignment::Center));
        program.push(Op::Text("BOLD CENTER".to_string()));
        program.push(Op::Newline);

        let result = render_png(&program);
        assert!(result.is_ok());
    }

    #[test]
    fn test_feed_advances_cursor() {
        let mut renderer = RasterRenderer::receipt_card();
        let y0 = renderer.state.y;
        renderer.process_op(&Op::Feed { px: 40 }).unwrap();
        assert_eq!(renderer.state.y, y0 + 40);
    }

    #[test]
    fn test_rule_draws_pixels() {
        let mut renderer = RasterRenderer::receipt_card();
        renderer
            .process_op(&Op::Rule {
                style: RuleStyle::Solid,
            })
            .unwrap();
        assert!(renderer.buffer.iter().any(|&p| p != 0));
    }

    #[test]
    fn test_bar_pattern_empty_digits_draws_nothing() {
        let mut renderer = RasterRenderer::receipt_card();
        let y0 = renderer.state.y;
        renderer
            .process_op(&Op::BarPattern { digits: "".into() })
            .unwrap();
        assert_eq!(renderer.state.y, y0);
        assert!(renderer.buffer.iter().all(|&p| p == 0));
    }

    #[test]
    fn test_bar_pattern_digit_widths() {
        // Digit 3 picks the widest bar; digit 0 the narrowest.
        assert_eq!(BAR_WIDTHS[bar_index('3')], 6);
        assert_eq!(BAR_WIDTHS[bar_index('0')], 2);
        // Non-digits fall back to the first entry.
        assert_eq!(bar_index('x'), 0);
    }

    #[test]
    fn test_card_canvas_dimensions() {
        let mut program = Program::with_init();
        program.push(Op::Text("Hi".into()));
        program.push(Op::Newline);

        let canvas = render_card_rgba(&program).unwrap();
        assert_eq!(canvas.width(), 600);
        assert_eq!(canvas.height(), 1200);
        // Background is opaque white
        assert_eq!(canvas.get_pixel(599, 1199), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_png_signature() {
        let program = Program::with_init();
        let png = render_png(&program).unwrap();
        assert_eq!(&png[0..4], &[0x89, b'P', b'N', b'G']);
    }
}
