//! Text rendering for the raster backend.
//!
//! Implements character and text rendering with support for the style
//! state: alignment, bold double-strike, inverted banners, and halftone
//! dimming.

use super::RasterRenderer;
use super::font::FontMetrics;
use crate::ir::Alignment;

impl RasterRenderer {
    /// Render text with current style.
    pub(super) fn render_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }

        let char_width = self.state.effective_char_width();
        let char_height = self.state.effective_char_height();
        let line_height = char_height;

        let chars: Vec<char> = text.chars().collect();

        // Only apply alignment if we're at the start of a line (x == 0)
        // Otherwise, continue from current position
        if self.state.x == 0 {
            let text_width = chars.len() * char_width;

            let start_x = match self.state.style.alignment {
                Alignment::Left => 0,
                Alignment::Center => {
                    if text_width < self.print_width {
                        (self.print_width - text_width) / 2
                    } else {
                        0
                    }
                }
                Alignment::Right => {
                    if text_width < self.print_width {
                        self.print_width - text_width
                    } else {
                        0
                    }
                }
            };

            self.state.x = start_x;
        }
        // else: continue from current x position

        self.ensure_height(self.state.y + line_height);

        for ch in chars {
            if ch == '\n' {
                self.state.x = 0;
                self.state.y += line_height;
                self.ensure_height(self.state.y + line_height);
                continue;
            }

            if self.state.x + char_width > self.print_width {
                // Wrap to next line
                self.state.x = 0;
                self.state.y += line_height;
                self.ensure_height(self.state.y + line_height);
            }

            self.render_char(ch);
            self.state.x += char_width;
        }
    }

    /// Render a single character at current position.
    /// state.x is in print coordinates (0 = left edge of printable area).
    fn render_char(&mut self, ch: char) {
        let font = self.state.style.font;
        let metrics = FontMetrics::for_font(font);
        let width_mult = self.state.total_width_mult();
        let height_mult = self.state.total_height_mult();

        let glyph = self.get_glyph(font, ch);

        let base_x = self.state.x;
        let base_y = self.state.y;
        let char_pixel_width = metrics.char_width * width_mult;
        let char_pixel_height = metrics.char_height * height_mult;

        // Fill background first if inverted (black background)
        if self.state.style.invert {
            for py in base_y..(base_y + char_pixel_height) {
                for px in base_x..(base_x + char_pixel_width) {
                    self.set_print_pixel(px, py, true);
                }
            }
        }

        let invert = self.state.style.invert;
        let dim = self.state.style.dim;

        // Draw the glyph with scaling
        for gy in 0..metrics.char_height {
            for gx in 0..metrics.char_width {
                let idx = gy * metrics.char_width + gx;
                let pixel_on = glyph.get(idx).copied().unwrap_or(0) != 0;

                if !pixel_on {
                    continue;
                }

                // For inverted text the background is already black and
                // the glyph shape is "erased" to white.
                let draw_pixel = !invert;

                for sy in 0..height_mult {
                    for sx in 0..width_mult {
                        let px = base_x + gx * width_mult + sx;
                        let py = base_y + gy * height_mult + sy;
                        // Dimmed text keeps every other pixel, a
                        // halftone stand-in for grey.
                        if dim && (px + py) % 2 == 1 {
                            continue;
                        }
                        self.set_print_pixel(px, py, draw_pixel);
                    }
                }
            }
        }

        // Draw bold (double-strike effect)
        if self.state.style.bold {
            for gy in 0..metrics.char_height {
                for gx in 0..metrics.char_width {
                    let idx = gy * metrics.char_width + gx;
                    let pixel_on = glyph.get(idx).copied().unwrap_or(0) != 0;

                    if pixel_on {
                        let draw_pixel = !invert;

                        for sy in 0..height_mult {
                            for sx in 0..width_mult {
                                // Offset by 1 pixel for bold effect
                                let px = base_x + gx * width_mult + sx + 1;
                                let py = base_y + gy * height_mult + sy;
                                if dim && (px + py) % 2 == 1 {
                                    continue;
                                }
                                if px < self.print_width {
                                    self.set_print_pixel(px, py, draw_pixel);
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    /// Move to next line.
    pub(super) fn newline(&mut self) {
        self.state.x = 0;
        self.state.y += self.state.line_height();
        self.ensure_height(self.state.y);
    }
}
