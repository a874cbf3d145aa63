//! Generic/default receipt layout.
//!
//! The only layout that consults [`EnabledSections`]: every block is
//! independently toggle-able. Item rows show the extended price
//! (`price × quantity`), unlike the brand layouts' unit prices.

use crate::components::{BarPattern, Divider, Header, LineItem, Receipt, Spacer, Text};
use crate::form::{EnabledSections, Section};
use crate::record::ReceiptRecord;

pub fn layout(record: &ReceiptRecord, sections: &EnabledSections) -> Receipt {
    let mut card = Receipt::new();

    // Header block: store identity and transaction metadata.
    if sections.contains(Section::Settings) {
        card = card.child(Header::small(&record.store_name));
        if sections.contains(Section::DateTime) {
            card = card.child(Text::new(format!("{}, {}", record.date, record.time)).center());
        }
        card = card
            .child(Text::new(&record.register_number).center())
            .child(Text::new(&record.cashier).center())
            .child(Spacer::px(12));
    }

    // Itemized block: renders nothing at all for an empty item list.
    if sections.contains(Section::ItemsList) && !record.items.is_empty() {
        for item in &record.items {
            card = card.child(
                LineItem::new(
                    format!("{} {}", item.quantity, item.name),
                    item.extended_price(),
                )
                .currency(),
            );
        }
        card = card
            .child(Divider::dashed())
            .child(LineItem::new("Subtotal:", record.subtotal).currency())
            .child(LineItem::new("Tax:", record.tax).currency())
            .child(Divider::dashed())
            .child(LineItem::new("Total:", record.total).currency().bold())
            .child(Spacer::px(12));
    }

    if sections.contains(Section::Payment) {
        card = card
            .child(Divider::dashed())
            .child(Text::new("Payment Method:").left().bold())
            .child(Text::new(format!("Card number: {}", record.card_number)))
            .child(Text::new(format!("Card type: {}", record.payment_method)))
            .child(Text::new("Status: APPROVED"))
            .child(Spacer::px(12));
    }

    if sections.contains(Section::CustomMessage1) || sections.contains(Section::CustomMessage2) {
        let message = record
            .custom_messages
            .bottom
            .as_deref()
            .unwrap_or("Please Come Again!");
        card = card.child(Text::new(message).center()).child(Spacer::px(12));
    }

    if sections.contains(Section::Info) && !record.store_address.is_empty() {
        card = card
            .child(Text::new(&record.store_address).center())
            .child(Spacer::px(12));
    }

    if sections.contains(Section::Settings) && !record.phone.is_empty() {
        card = card
            .child(Text::new(&record.phone).center())
            .child(Spacer::px(12));
    }

    if sections.contains(Section::Barcode) {
        card = card.child(BarPattern::new(&record.barcode));
    }

    card
}
