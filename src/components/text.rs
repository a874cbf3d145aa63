//! # Text Components
//!
//! Components for displaying text with various styles.

use super::{CARD_COLS, Component};
use crate::ir::{Alignment, Op};
use crate::record::FontStyle;

/// A text component with optional styling.
///
/// ## Example
///
/// ```
/// use recibo::components::*;
///
/// // Simple text
/// let text = Text::new("Hello, World!");
///
/// // Styled text
/// let styled = Text::new("IMPORTANT")
///     .bold()
///     .center()
///     .scale(1, 1);
/// ```
pub struct Text {
    content: String,
    newline: bool,
    bold: bool,
    invert: bool,
    dim: bool,
    font: Option<FontStyle>,
    alignment: Option<Alignment>,
    height_mult: u8,
    width_mult: u8,
}

impl Text {
    /// Create a new text component.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            newline: true,
            bold: false,
            invert: false,
            dim: false,
            font: None,
            alignment: None,
            height_mult: 0,
            width_mult: 0,
        }
    }

    /// Make text bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Invert the text (white on black).
    pub fn invert(mut self) -> Self {
        self.invert = true;
        self
    }

    /// Render the text dimmed (halftoned), the raster stand-in for the
    /// reference markup's grey secondary lines.
    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    /// Set the font.
    pub fn font(mut self, font: FontStyle) -> Self {
        self.font = Some(font);
        self
    }

    /// Center the text.
    pub fn center(mut self) -> Self {
        self.alignment = Some(Alignment::Center);
        self
    }

    /// Right-align the text.
    pub fn right(mut self) -> Self {
        self.alignment = Some(Alignment::Right);
        self
    }

    /// Left-align the text (explicit).
    pub fn left(mut self) -> Self {
        self.alignment = Some(Alignment::Left);
        self
    }

    /// Set character size multiplier.
    /// height/width: 0 = 1x, 1 = 2x, etc. Max 7 = 8x.
    pub fn scale(mut self, height: u8, width: u8) -> Self {
        self.height_mult = height.min(7);
        self.width_mult = width.min(7);
        self
    }
}

impl Component for Text {
    fn emit(&self, ops: &mut Vec<Op>) {
        // Emit style changes (order matters for readability of the IR)
        if let Some(align) = self.alignment {
            ops.push(Op::SetAlign(align));
        }
        if let Some(font) = self.font {
            ops.push(Op::SetFont(font));
        }
        if self.bold {
            ops.push(Op::SetBold(true));
        }
        if self.invert {
            ops.push(Op::SetInvert(true));
        }
        if self.dim {
            ops.push(Op::SetDim(true));
        }
        if self.height_mult > 0 || self.width_mult > 0 {
            ops.push(Op::SetScale {
                height: self.height_mult,
                width: self.width_mult,
            });
        }

        // Emit text
        ops.push(Op::Text(self.content.clone()));
        if self.newline {
            ops.push(Op::Newline);
        }

        // Reset styles that were changed (reverse order)
        if self.height_mult > 0 || self.width_mult > 0 {
            ops.push(Op::SetScale {
                height: 0,
                width: 0,
            });
        }
        if self.dim {
            ops.push(Op::SetDim(false));
        }
        if self.invert {
            ops.push(Op::SetInvert(false));
        }
        if self.bold {
            ops.push(Op::SetBold(false));
        }
        // Note: alignment and font are NOT reset - they persist
    }
}

/// A header component (centered, bold, large text).
///
/// ## Example
///
/// ```
/// use recibo::components::Header;
///
/// let header = Header::new("CORNER CAFE");
/// ```
pub struct Header {
    text: Text,
}

impl Header {
    /// Create a new header.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            text: Text::new(content).center().bold().scale(1, 1),
        }
    }

    /// Create a smaller header (normal size, still bold and centered).
    pub fn small(content: impl Into<String>) -> Self {
        Self {
            text: Text::new(content).center().bold(),
        }
    }
}

impl Component for Header {
    fn emit(&self, ops: &mut Vec<Op>) {
        self.text.emit(ops);
    }
}

/// A line item row: label on the left, amount on the right, padded to
/// the card width.
///
/// The same row shape covers both item lines and totals lines in the
/// reference markup (both are justified label/value pairs), so totals
/// reuse this component with `.bold()` where the markup bolds them.
///
/// ## Example
///
/// ```
/// use recibo::components::LineItem;
///
/// let item = LineItem::new("Espresso", 4.50);          // "Espresso   4.50"
/// let cash = LineItem::new("Total", 4.50).currency();  // "Total     $4.50"
/// ```
pub struct LineItem {
    label: String,
    amount: f64,
    currency: bool,
    bold: bool,
    width: usize,
}

impl LineItem {
    /// Create a new line item. The amount renders with exactly two
    /// decimals and no currency sign.
    pub fn new(label: impl Into<String>, amount: f64) -> Self {
        Self {
            label: label.into(),
            amount,
            currency: false,
            bold: false,
            width: CARD_COLS,
        }
    }

    /// Prefix the amount with a dollar sign.
    pub fn currency(mut self) -> Self {
        self.currency = true;
        self
    }

    /// Make the row bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set the character width for formatting.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

impl Component for LineItem {
    fn emit(&self, ops: &mut Vec<Op>) {
        let amount_str = if self.currency {
            format!("${:.2}", self.amount)
        } else {
            format!("{:.2}", self.amount)
        };
        let label_max_width = self.width.saturating_sub(amount_str.len() + 1);
        let label: String = if self.label.chars().count() > label_max_width {
            self.label.chars().take(label_max_width).collect()
        } else {
            self.label.clone()
        };
        let padding = self
            .width
            .saturating_sub(label.chars().count() + amount_str.len());
        let line = format!(
            "{}{:>pad$}",
            label,
            amount_str,
            pad = padding + amount_str.len()
        );

        ops.push(Op::SetAlign(Alignment::Left));
        if self.bold {
            ops.push(Op::SetBold(true));
        }
        ops.push(Op::Text(line));
        ops.push(Op::Newline);
        if self.bold {
            ops.push(Op::SetBold(false));
        }
    }
}
