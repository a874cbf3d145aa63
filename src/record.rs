//! # Receipt Record
//!
//! The structured data bound into a rendered receipt layout.
//!
//! A [`ReceiptRecord`] is constructed from a built-in template fixture or
//! from editor state, lives in memory for the duration of an editing
//! session, and is never persisted. Every field is display data: dates
//! and times are plain strings and are not parsed or validated, and the
//! totals are caller-computed. The renderer is total over any well-typed
//! record, including partially populated ones.
//!
//! Field names serialize in the camelCase shape the product's JSON uses
//! (`storeName`, `customMessages`, ...), so records travel unchanged
//! between the HTTP API, the CLI, and fixture files.

use serde::{Deserialize, Serialize};

use crate::template::TemplateKind;

/// Display font choice for the rendered card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// Monospaced receipt face (default).
    #[default]
    Font1,
    /// Condensed face.
    Font2,
}

/// One ordered line item.
///
/// `id` is caller-assigned and should be unique within the sequence for
/// stable list handling; nothing enforces uniqueness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl LineItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, quantity: u32, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            price,
            notes: None,
            size: None,
        }
    }

    /// Attach an option/notes line.
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Attach a size label (Subway's `12"` column).
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Extended price: unit price × quantity.
    pub fn extended_price(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Named free-text slot within [`CustomMessages`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSlot {
    Top,
    Middle,
    Bottom,
}

/// Fixed message slots a layout may bind. A missing slot omits that
/// region of the card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomMessages {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<String>,
}

impl CustomMessages {
    pub fn get(&self, slot: MessageSlot) -> Option<&str> {
        match slot {
            MessageSlot::Top => self.top.as_deref(),
            MessageSlot::Middle => self.middle.as_deref(),
            MessageSlot::Bottom => self.bottom.as_deref(),
        }
    }

    pub fn set(&mut self, slot: MessageSlot, text: Option<String>) {
        match slot {
            MessageSlot::Top => self.top = text,
            MessageSlot::Middle => self.middle = text,
            MessageSlot::Bottom => self.bottom = text,
        }
    }
}

/// The structured record a receipt layout binds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReceiptRecord {
    pub store_name: String,
    pub store_address: String,
    pub phone: String,

    /// Calendar value as entered; never parsed.
    pub date: String,
    /// Time-of-day value as entered; never parsed.
    pub time: String,

    pub cashier: String,
    pub register_number: String,
    pub order_number: String,

    pub items: Vec<LineItem>,

    /// Caller-computed; the renderer never recomputes these. See
    /// [`ReceiptRecord::reconciles`] for the advisory check.
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,

    pub payment_method: String,
    pub card_number: String,

    pub custom_messages: CustomMessages,

    /// Digit string driving the decorative bar pattern.
    pub barcode: String,

    pub font_style: FontStyle,

    /// Optional logo image reference. The raster backend draws a
    /// placeholder box for it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    /// Explicit template identity. When present it wins over substring
    /// detection of `store_name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<TemplateKind>,
}

impl ReceiptRecord {
    /// Resolve the template identity: the explicit tag when present,
    /// otherwise substring detection over the store name.
    pub fn resolve_template(&self) -> TemplateKind {
        self.template
            .unwrap_or_else(|| TemplateKind::detect(&self.store_name))
    }

    /// Sum of extended item prices, rounded to cents.
    pub fn computed_subtotal(&self) -> f64 {
        let sum: f64 = self.items.iter().map(LineItem::extended_price).sum();
        (sum * 100.0).round() / 100.0
    }

    /// Advisory arithmetic check: the stated subtotal matches the item
    /// sum and `total == subtotal + tax`, within half a cent.
    ///
    /// The renderer never enforces this; records are displayed as
    /// given. Fixtures are expected to pass it.
    pub fn reconciles(&self) -> bool {
        let half_cent = 0.005;
        (self.subtotal - self.computed_subtotal()).abs() < half_cent
            && (self.total - (self.subtotal + self.tax)).abs() < half_cent
    }
}
