//! # Receipt Component
//!
//! The root container for building receipt cards.

use super::Component;
use crate::ir::Op;

/// Receipt is the root container component.
///
/// It holds child components in document order.
///
/// ## Example
///
/// ```
/// use recibo::components::*;
///
/// let card = Receipt::new()
///     .child(Header::new("STORE NAME"))
///     .child(Divider::dashed())
///     .child(LineItem::new("Item", 9.99));
///
/// let ir = card.compile();
/// ```
pub struct Receipt {
    children: Vec<Box<dyn Component>>,
}

impl Default for Receipt {
    fn default() -> Self {
        Self::new()
    }
}

impl Receipt {
    /// Create a new empty receipt.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    /// Add a child component.
    pub fn child<C: Component + 'static>(mut self, component: C) -> Self {
        self.children.push(Box::new(component));
        self
    }

    /// Add multiple child components.
    pub fn children<I, C>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Component + 'static,
    {
        for c in components {
            self.children.push(Box::new(c));
        }
        self
    }
}

impl Component for Receipt {
    fn emit(&self, ops: &mut Vec<Op>) {
        for child in &self.children {
            child.emit(ops);
        }
    }
}
