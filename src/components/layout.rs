//! # Layout Components
//!
//! Components for controlling layout and spacing.

use super::{CARD_COLS, Component};
use crate::ir::{Alignment, Op, RuleStyle};

/// A horizontal divider line across the card.
///
/// ## Example
///
/// ```
/// use recibo::components::Divider;
///
/// let dashed = Divider::dashed();
/// let solid = Divider::solid();
/// ```
pub struct Divider {
    style: RuleStyle,
}

impl Divider {
    /// Create a divider with a specific style.
    pub fn new(style: RuleStyle) -> Self {
        Self { style }
    }

    /// Create a dashed divider.
    pub fn dashed() -> Self {
        Self::new(RuleStyle::Dashed)
    }

    /// Create a solid divider.
    pub fn solid() -> Self {
        Self::new(RuleStyle::Solid)
    }
}

impl Default for Divider {
    fn default() -> Self {
        Self::dashed()
    }
}

impl Component for Divider {
    fn emit(&self, ops: &mut Vec<Op>) {
        ops.push(Op::Rule { style: self.style });
    }
}

/// A vertical spacer.
///
/// ## Example
///
/// ```
/// use recibo::components::Spacer;
///
/// let small = Spacer::px(8);
/// let lines = Spacer::lines(2);
/// ```
pub struct Spacer {
    px: u16,
}

impl Spacer {
    /// Create a spacer with a specific height in physical pixels.
    pub fn px(px: u16) -> Self {
        Self { px }
    }

    /// Create a spacer that's approximately N text lines tall.
    pub fn lines(n: u16) -> Self {
        Self { px: n * 32 }
    }
}

impl Component for Spacer {
    fn emit(&self, ops: &mut Vec<Op>) {
        if self.px > 0 {
            ops.push(Op::Feed { px: self.px });
        }
    }
}

/// A two-column layout (left and right aligned text on same line).
///
/// Unlike [`super::LineItem`], both sides are free text; used for the
/// item-table headers ("Qty   Size  Item" / "Price").
///
/// ## Example
///
/// ```
/// use recibo::components::Columns;
///
/// let row = Columns::new("Qty   Size  Item", "Price");
/// ```
pub struct Columns {
    left: String,
    right: String,
    width: usize,
    bold: bool,
    dim: bool,
}

impl Columns {
    /// Create a two-column row.
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            width: CARD_COLS,
            bold: false,
            dim: false,
        }
    }

    /// Set the character width.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Make the row bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Dim the row.
    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

impl Component for Columns {
    fn emit(&self, ops: &mut Vec<Op>) {
        let padding = self
            .width
            .saturating_sub(self.left.chars().count() + self.right.chars().count());
        let line = format!(
            "{}{}{}",
            self.left,
            " ".repeat(padding),
            self.right
        );

        ops.push(Op::SetAlign(Alignment::Left));
        if self.bold {
            ops.push(Op::SetBold(true));
        }
        if self.dim {
            ops.push(Op::SetDim(true));
        }

        ops.push(Op::Text(line));
        ops.push(Op::Newline);

        if self.dim {
            ops.push(Op::SetDim(false));
        }
        if self.bold {
            ops.push(Op::SetBold(false));
        }
    }
}

/// An empty line (just a newline).
pub struct BlankLine;

impl BlankLine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BlankLine {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for BlankLine {
    fn emit(&self, ops: &mut Vec<Op>) {
        ops.push(Op::Newline);
    }
}
