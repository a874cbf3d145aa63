//! # Graphics Components
//!
//! Decorative bar pattern and logo placeholder components.

use super::Component;
use crate::ir::{Alignment, Op};

/// A decorative bar pattern derived from barcode digits, with the
/// digits printed underneath.
///
/// This is not a real barcode symbology: each digit picks a bar width
/// and height from small fixed tables, mirroring the reference markup.
///
/// ## Example
///
/// ```
/// use recibo::components::BarPattern;
///
/// let code = BarPattern::new("1234567890");
/// ```
pub struct BarPattern {
    digits: String,
    show_digits: bool,
}

impl BarPattern {
    /// Create a new bar pattern from a digit string.
    pub fn new(digits: impl Into<String>) -> Self {
        Self {
            digits: digits.into(),
            show_digits: true,
        }
    }

    /// Hide the human-readable digit line.
    pub fn bars_only(mut self) -> Self {
        self.show_digits = false;
        self
    }
}

impl Component for BarPattern {
    fn emit(&self, ops: &mut Vec<Op>) {
        ops.push(Op::BarPattern {
            digits: self.digits.clone(),
        });
        if self.show_digits {
            ops.push(Op::SetAlign(Alignment::Center));
            ops.push(Op::Text(self.digits.clone()));
            ops.push(Op::Newline);
        }
    }
}

/// A placeholder box standing in for a logo image reference.
///
/// The raster backend draws a crossed box; the label is carried for
/// IR inspection only.
pub struct LogoBox {
    label: String,
    width: u16,
    height: u16,
}

impl LogoBox {
    /// Create a logo placeholder with the given pixel size.
    pub fn new(label: impl Into<String>, width: u16, height: u16) -> Self {
        Self {
            label: label.into(),
            width,
            height,
        }
    }
}

impl Component for LogoBox {
    fn emit(&self, ops: &mut Vec<Op>) {
        ops.push(Op::LogoBox {
            label: self.label.clone(),
            width: self.width,
            height: self.height,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ComponentExt;

    #[test]
    fn test_bar_pattern_emits_digits() {
        let code = BarPattern::new("12345");
        let ir = code.compile();
        assert!(ir.ops.contains(&Op::BarPattern {
            digits: "12345".into()
        }));
        assert!(ir.ops.contains(&Op::Text("12345".into())));
    }

    #[test]
    fn test_bar_pattern_bars_only() {
        let code = BarPattern::new("12345").bars_only();
        let ir = code.compile();
        assert!(!ir.ops.iter().any(|op| matches!(op, Op::Text(_))));
    }

    #[test]
    fn test_logo_box() {
        let logo = LogoBox::new("Subway", 240, 60);
        let ir = logo.compile();
        assert!(ir.ops.contains(&Op::LogoBox {
            label: "Subway".into(),
            width: 240,
            height: 60,
        }));
    }
}
