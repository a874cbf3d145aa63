//! # Editing Session
//!
//! Component-local state ownership for one receipt editing session: the
//! record being edited, the set of generic-layout sections the caller
//! has enabled, and a pure reducer over both.
//!
//! Each session owns its record exclusively; there is no shared mutable
//! state across sessions. Resetting a session restores the template's
//! fixture default, and re-applying the same edit sequence afterwards
//! reproduces an identical record.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::record::{FontStyle, LineItem, MessageSlot, ReceiptRecord};
use crate::template::{self, TemplateKind};

/// One toggle-able block of the generic layout.
///
/// Keys serialize to the reference section identifiers
/// (`"settings"`, `"itemslist"`, ...). Brand-specific layouts ignore
/// the section set entirely.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Store header (name, register, cashier) plus the phone footer.
    Settings,
    /// Date/time line inside the header.
    DateTime,
    /// Itemized list and totals.
    ItemsList,
    /// Payment method block.
    Payment,
    CustomMessage1,
    CustomMessage2,
    /// Store address footer.
    Info,
    /// Decorative barcode block.
    Barcode,
}

impl Section {
    /// All sections, in layout order.
    pub const ALL: [Section; 8] = [
        Section::Settings,
        Section::DateTime,
        Section::ItemsList,
        Section::Payment,
        Section::CustomMessage1,
        Section::CustomMessage2,
        Section::Info,
        Section::Barcode,
    ];
}

/// The subset of generic-layout blocks a caller has chosen to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnabledSections(BTreeSet<Section>);

impl Default for EnabledSections {
    /// All sections enabled.
    fn default() -> Self {
        Self(Section::ALL.into_iter().collect())
    }
}

impl EnabledSections {
    /// Empty set (nothing rendered by the generic layout).
    pub fn none() -> Self {
        Self(BTreeSet::new())
    }

    pub fn contains(&self, section: Section) -> bool {
        self.0.contains(&section)
    }

    pub fn enable(&mut self, section: Section) {
        self.0.insert(section);
    }

    pub fn disable(&mut self, section: Section) {
        self.0.remove(&section);
    }

    /// Flip a section's membership.
    pub fn toggle(&mut self, section: Section) {
        if !self.0.remove(&section) {
            self.0.insert(section);
        }
    }
}

impl FromIterator<Section> for EnabledSections {
    fn from_iter<T: IntoIterator<Item = Section>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One form mutation. Applied through [`EditorSession::apply`], which is
/// a pure reducer over the session state.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    SetStoreName(String),
    SetStoreAddress(String),
    SetPhone(String),
    SetDate(String),
    SetTime(String),
    SetCashier(String),
    SetRegisterNumber(String),
    SetOrderNumber(String),
    AddItem(LineItem),
    /// Remove every item with this id.
    RemoveItem(String),
    SetItemName { id: String, name: String },
    SetItemQuantity { id: String, quantity: u32 },
    SetItemPrice { id: String, price: f64 },
    SetSubtotal(f64),
    SetTax(f64),
    SetTotal(f64),
    SetPaymentMethod(String),
    SetCardNumber(String),
    SetMessage { slot: MessageSlot, text: Option<String> },
    SetBarcode(String),
    SetFontStyle(FontStyle),
    SetLogo(Option<String>),
    SetTemplate(Option<TemplateKind>),
    ToggleSection(Section),
}

/// One editing session: a record, its enabled sections, and the template
/// id its defaults came from.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSession {
    template_id: u32,
    pub record: ReceiptRecord,
    pub sections: EnabledSections,
}

impl EditorSession {
    /// Start a session from a built-in template fixture.
    ///
    /// Returns `None` for unknown template ids.
    pub fn from_template(template_id: u32) -> Option<Self> {
        let record = template::record_for(template_id)?;
        Some(Self {
            template_id,
            record,
            sections: EnabledSections::default(),
        })
    }

    /// Start a session from an already-built record.
    pub fn from_record(record: ReceiptRecord) -> Self {
        Self {
            template_id: template::GENERIC_TEMPLATE_ID,
            record,
            sections: EnabledSections::default(),
        }
    }

    /// Restore the fixture defaults for this session's template.
    pub fn reset(&mut self) {
        if let Some(record) = template::record_for(self.template_id) {
            self.record = record;
        }
        self.sections = EnabledSections::default();
    }

    /// Apply one edit.
    pub fn apply(&mut self, edit: Edit) {
        match edit {
            Edit::SetStoreName(v) => self.record.store_name = v,
            Edit::SetStoreAddress(v) => self.record.store_address = v,
            Edit::SetPhone(v) => self.record.phone = v,
            Edit::SetDate(v) => self.record.date = v,
            Edit::SetTime(v) => self.record.time = v,
            Edit::SetCashier(v) => self.record.cashier = v,
            Edit::SetRegisterNumber(v) => self.record.register_number = v,
            Edit::SetOrderNumber(v) => self.record.order_number = v,
            Edit::AddItem(item) => self.record.items.push(item),
            Edit::RemoveItem(id) => self.record.items.retain(|item| item.id != id),
            Edit::SetItemName { id, name } => {
                for item in self.record.items.iter_mut().filter(|i| i.id == id) {
                    item.name = name.clone();
                }
            }
            Edit::SetItemQuantity { id, quantity } => {
                for item in self.record.items.iter_mut().filter(|i| i.id == id) {
                    item.quantity = quantity;
                }
            }
            Edit::SetItemPrice { id, price } => {
                for item in self.record.items.iter_mut().filter(|i| i.id == id) {
                    item.price = price;
                }
            }
            Edit::SetSubtotal(v) => self.record.subtotal = v,
            Edit::SetTax(v) => self.record.tax = v,
            Edit::SetTotal(v) => self.record.total = v,
            Edit::SetPaymentMethod(v) => self.record.payment_method = v,
            Edit::SetCardNumber(v) => self.record.card_number = v,
            Edit::SetMessage { slot, text } => self.record.custom_messages.set(slot, text),
            Edit::SetBarcode(v) => self.record.barcode = v,
            Edit::SetFontStyle(v) => self.record.font_style = v,
            Edit::SetLogo(v) => self.record.logo = v,
            Edit::SetTemplate(v) => self.record.template = v,
            Edit::ToggleSection(section) => self.sections.toggle(section),
        }
    }

    /// Apply a sequence of edits in order.
    pub fn apply_all(&mut self, edits: impl IntoIterator<Item = Edit>) {
        for edit in edits {
            self.apply(edit);
        }
    }
}
