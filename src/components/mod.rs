//! # Declarative Components
//!
//! React-like components for building receipt cards declaratively.
//!
//! ## Design Philosophy
//!
//! Instead of imperative drawing, you describe *what* you want:
//!
//! ```
//! use recibo::components::*;
//!
//! let card = Receipt::new()
//!     .child(Header::new("CORNER CAFE"))
//!     .child(Divider::dashed())
//!     .child(LineItem::new("Espresso", 4.50))
//!     .child(LineItem::new("Total:", 4.50).bold());
//!
//! // Compile to IR (inspectable)
//! let ir = card.compile();
//! println!("{:#?}", ir);
//! ```
//!
//! ## Component Trait
//!
//! All components implement the `Component` trait, which emits IR ops.
//! Containers hold boxed children.

mod graphics;
mod layout;
mod receipt;
mod text;

pub use graphics::*;
pub use layout::*;
pub use receipt::*;
pub use text::*;

use crate::ir::{Op, Program};

/// Character columns of the card at the base font. The exported card is
/// 300 logical px wide with 8 px glyph cells.
pub const CARD_COLS: usize = 37;

/// Trait for declarative components.
///
/// Components emit IR ops when compiled. This is the core abstraction
/// that enables the declarative receipt building pattern.
pub trait Component {
    /// Emit IR ops for this component into the ops vector.
    fn emit(&self, ops: &mut Vec<Op>);
}

/// Extension trait for compiling components.
pub trait ComponentExt: Component {
    /// Compile this component to an IR program.
    ///
    /// The program starts with an Init op, followed by the component's ops.
    fn compile(&self) -> Program {
        let mut ops = vec![Op::Init];
        self.emit(&mut ops);
        Program { ops }
    }
}

// Blanket implementation for all components
impl<T: Component> ComponentExt for T {}

// Allow boxed components
impl Component for Box<dyn Component> {
    fn emit(&self, ops: &mut Vec<Op>) {
        self.as_ref().emit(ops);
    }
}

// Allow references to components
impl<T: Component + ?Sized> Component for &T {
    fn emit(&self, ops: &mut Vec<Op>) {
        (*self).emit(ops);
    }
}
