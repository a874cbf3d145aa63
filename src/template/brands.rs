//! Brand-specific receipt layouts.
//!
//! Each layout reproduces the field order, fixed strings, and per-brand
//! price formatting of the reference receipts. All brand layouts ignore
//! the caller's section set and always render their full block list.
//!
//! Item rows here show the *unit* price; only the generic layout shows
//! the extended price. That inconsistency comes from the reference
//! receipts and is preserved per brand rather than unified.

use crate::components::{Columns, Divider, Header, LineItem, LogoBox, Receipt, Spacer, Text};
use crate::form::EnabledSections;
use crate::record::{LineItem as Item, ReceiptRecord};

/// Centered store-identity lines shared by several brands.
fn store_info(mut card: Receipt, lines: &[&str]) -> Receipt {
    for line in lines {
        card = card.child(Text::new(*line).center());
    }
    card.child(Spacer::px(12))
}

/// Unit-price item rows with `{qty} {name}` labels (Uber Eats, Popeyes).
fn qty_item_rows(mut card: Receipt, items: &[Item]) -> Receipt {
    for item in items {
        card = card.child(
            LineItem::new(format!("{} {}", item.quantity, item.name), item.price).currency(),
        );
    }
    card
}

/// Subtotal/Tax/Total rows with a bold total (most brands).
fn totals_block(card: Receipt, record: &ReceiptRecord) -> Receipt {
    card.child(LineItem::new("Subtotal", record.subtotal).currency())
        .child(LineItem::new("Tax", record.tax).currency())
        .child(LineItem::new("Total", record.total).currency().bold())
}

/// Card payment detail block (generic layout and Starbucks).
pub(super) fn payment_block(card: Receipt, record: &ReceiptRecord) -> Receipt {
    card.child(Text::new("Payment Method:").left().bold())
        .child(Text::new(format!("Card number: {}", record.card_number)))
        .child(Text::new(format!("Card type: {}", record.payment_method)))
        .child(Text::new("Status: APPROVED"))
}

pub fn subway(record: &ReceiptRecord, _sections: &EnabledSections) -> Receipt {
    let mut card = Receipt::new();

    if let Some(logo) = &record.logo {
        card = card.child(LogoBox::new(logo.clone(), 240, 60)).child(Spacer::px(12));
    }
    card = card.child(Divider::solid()).child(Spacer::px(12));

    let served_by = format!(
        "Served by : {} {} {}",
        record.cashier.replace("Cashier: ", ""),
        record.date.replace('-', "/"),
        record.time
    );
    card = store_info(
        card,
        &[
            format!("{} Phone {}", record.store_name, record.phone).as_str(),
            record.store_address.as_str(),
            served_by.as_str(),
            record.register_number.as_str(),
        ],
    );

    card = card
        .child(Columns::new("Qty   Size  Item", "Price"))
        .child(Columns::new("----  ----  ----", "-----"));
    for item in &record.items {
        let size = item.size.as_deref().unwrap_or("1''");
        card = card.child(LineItem::new(
            format!("{}     {}    {}", item.quantity, size, item.name),
            item.price,
        ));
    }
    card = card.child(Spacer::px(12));

    card = card
        .child(LineItem::new("Sub Total", record.subtotal))
        .child(LineItem::new("General Sales Tax GST (10%)", record.tax))
        .child(LineItem::new("Total (Eat In)", record.total))
        .child(LineItem::new(record.payment_method.clone(), record.total))
        .child(LineItem::new("Change", 0.0))
        .child(Spacer::px(12));

    if let Some(middle) = &record.custom_messages.middle {
        card = card.child(Text::new(middle).center()).child(Spacer::px(12));
    }
    if record.custom_messages.bottom.is_some() {
        card = card
            .child(Text::new("Take one min survey @ tellsubway.in and get").left())
            .child(Text::new("a free cookie on next purchase."));
    }

    card
}

pub fn starbucks(record: &ReceiptRecord, _sections: &EnabledSections) -> Receipt {
    let mut card = Receipt::new()
        .child(LogoBox::new("starbucks", 160, 50))
        .child(Text::new("Coffee Company").center().bold())
        .child(Spacer::px(12))
        .child(Text::new(&record.store_name).center().bold())
        .child(Text::new(&record.store_address).center())
        .child(Spacer::px(12));

    card = store_info(
        card,
        &[
            "CHK 742896",
            format!("{} {}", record.date, record.time).as_str(),
            format!("Cashier: {}", record.cashier).as_str(),
        ],
    );

    card = card
        .child(Divider::dashed())
        .child(Text::new("ORDER #47089-240").left().bold())
        .child(Text::new("Mobile Order & Pay"))
        .child(Spacer::px(12));

    for item in &record.items {
        card = card.child(LineItem::new(item.name.clone(), item.price).currency().bold());
    }

    card = totals_block(card.child(Divider::dashed()), record).child(Divider::dashed());
    card = payment_block(card, record);

    if let Some(bottom) = &record.custom_messages.bottom {
        card = card
            .child(Spacer::px(12))
            .child(Text::new(bottom).center())
            .child(Text::new(&record.phone).center());
    }

    card
}

/// Uber Eats delivery layout (the reference routes "McDonald" store
/// names here).
pub fn uber_eats(record: &ReceiptRecord, _sections: &EnabledSections) -> Receipt {
    let mut card = Receipt::new();

    if let Some(logo) = &record.logo {
        card = card.child(LogoBox::new(logo.clone(), 180, 50)).child(Spacer::px(8));
    }
    card = card
        .child(
            Text::new(format!(
                "Order #{}",
                record.register_number.replace("Order #", "")
            ))
            .center()
            .bold(),
        )
        .child(Text::new(&record.store_name).center().dim())
        .child(Spacer::px(12));

    card = store_info(
        card,
        &[
            record.store_address.as_str(),
            format!("{} at {}", record.date, record.time).as_str(),
        ],
    );

    card = qty_item_rows(card.child(Divider::solid()), &record.items);
    card = totals_block(card.child(Divider::dashed()), record);

    card = card.child(Spacer::px(8)).child(Text::new("Delivery Details:").left().bold());
    if let Some(middle) = &record.custom_messages.middle {
        card = card.child(Text::new(middle));
    }
    if let Some(bottom) = &record.custom_messages.bottom {
        card = card.child(Text::new(bottom));
    }

    card.child(Spacer::px(8))
        .child(Text::new(format!("Payment: {}", record.payment_method)).center())
}

pub fn popeyes(record: &ReceiptRecord, _sections: &EnabledSections) -> Receipt {
    let mut card = Receipt::new();

    if let Some(logo) = &record.logo {
        card = card.child(LogoBox::new(logo.clone(), 180, 70)).child(Spacer::px(8));
    }
    card = card.child(Text::new(&record.store_name).center().bold());
    card = store_info(
        card,
        &[record.store_address.as_str(), record.phone.as_str()],
    );
    card = store_info(
        card,
        &[
            record.register_number.as_str(),
            format!("{} {}", record.date, record.time).as_str(),
            format!("Cashier: {}", record.cashier).as_str(),
        ],
    );

    card = card.child(Divider::dashed());
    if let Some(middle) = &record.custom_messages.middle {
        card = card.child(Text::new(middle).left()).child(Spacer::px(8));
    }

    card = qty_item_rows(card, &record.items);
    card = totals_block(card.child(Divider::dashed()), record);

    card = card
        .child(Spacer::px(8))
        .child(Text::new(format!("Payment: {}", record.payment_method)).center());
    if let Some(bottom) = &record.custom_messages.bottom {
        card = card.child(Spacer::px(8)).child(Text::new(bottom).center());
    }

    card
}

pub fn walmart(record: &ReceiptRecord, _sections: &EnabledSections) -> Receipt {
    let mut card = Receipt::new();

    if let Some(logo) = &record.logo {
        card = card.child(LogoBox::new(logo.clone(), 200, 60));
    } else {
        card = card.child(Header::new("Walmart *"));
    }
    card = card
        .child(Text::new("Save money. Live better.").center())
        .child(Spacer::px(8));

    if let Some(top) = &record.custom_messages.top {
        card = card.child(Text::new(top).center()).child(Spacer::px(8));
    }
    card = store_info(
        card,
        &[record.store_address.as_str(), record.phone.as_str()],
    );
    card = store_info(
        card,
        &[
            record.register_number.as_str(),
            format!("{} {}", record.date, record.time).as_str(),
            record.cashier.as_str(),
        ],
    );

    for item in &record.items {
        card = card.child(LineItem::new(item.name.clone(), item.price).currency());
        if let Some(middle) = &record.custom_messages.middle {
            card = card.child(Text::new(middle).dim());
        }
    }

    card = card
        .child(Divider::solid())
        .child(LineItem::new("SUBTOTAL", record.subtotal).currency())
        .child(LineItem::new("TAX", record.tax).currency())
        .child(LineItem::new("TOTAL", record.total).currency().bold())
        .child(LineItem::new(record.payment_method.clone(), record.total).currency())
        .child(LineItem::new("CHANGE", 0.29).currency());

    if let Some(bottom) = &record.custom_messages.bottom {
        card = card.child(Spacer::px(12)).child(Text::new(bottom).center());
    }

    card
}

pub fn stockx(record: &ReceiptRecord, _sections: &EnabledSections) -> Receipt {
    let mut card = Receipt::new();

    if let Some(logo) = &record.logo {
        card = card.child(LogoBox::new(logo.clone(), 100, 30));
    }
    card = card
        .child(Text::new(" RECEIPT ").center().invert())
        .child(Spacer::px(12))
        .child(Text::new(&record.register_number).left().bold());
    if let Some(top) = &record.custom_messages.top {
        card = card.child(Text::new(top));
    }
    card = card.child(Spacer::px(12));

    for item in &record.items {
        card = card.child(LineItem::new(item.name.clone(), item.price).currency().bold());
        // The reference shows the product-detail line under the first
        // item only.
        if item.id == "1"
            && let Some(middle) = &record.custom_messages.middle
        {
            card = card.child(Text::new(middle).dim());
        }
    }

    card = totals_block(card.child(Divider::solid()), record);

    card = card
        .child(Spacer::px(8))
        .child(Text::new(format!("Payment: {}", record.payment_method)).left())
        .child(Text::new(&record.card_number));

    if let Some(bottom) = &record.custom_messages.bottom {
        card = card
            .child(Spacer::px(12))
            .child(Divider::solid())
            .child(Text::new(bottom).center())
            .child(Divider::solid());
    }

    card
}

pub fn louis_vuitton(record: &ReceiptRecord, _sections: &EnabledSections) -> Receipt {
    let mut card = Receipt::new()
        .child(Header::new("LOUIS VUITTON"))
        .child(Text::new("MAISON FONDEE EN 1854").center().dim())
        .child(Spacer::px(16))
        .child(Text::new(&record.store_name).center().bold());
    card = store_info(
        card,
        &[record.store_address.as_str(), record.phone.as_str()],
    );

    card = card.child(Divider::solid());
    card = card
        .child(Text::new(&record.register_number).left())
        .child(Text::new(format!("{} {}", record.date, record.time)))
        .child(Text::new(format!("Sales Associate: {}", record.cashier)))
        .child(Spacer::px(12));

    if let Some(top) = &record.custom_messages.top {
        card = card.child(Text::new(top).left()).child(Spacer::px(12));
    }

    for item in &record.items {
        card = card
            .child(LineItem::new(item.name.clone(), item.price).currency().bold())
            .child(Text::new(format!("Qty: {}", item.quantity)).dim())
            .child(Divider::dashed());
    }

    card = card
        .child(Spacer::px(8))
        .child(LineItem::new("Subtotal", record.subtotal).currency())
        .child(LineItem::new("Tax", record.tax).currency())
        .child(Divider::solid())
        .child(LineItem::new("Total", record.total).currency().bold());

    card = card
        .child(Spacer::px(8))
        .child(Text::new(format!("Payment: {}", record.payment_method)).left());

    if let Some(middle) = &record.custom_messages.middle {
        card = card.child(Spacer::px(8)).child(Text::new(middle).center());
    }
    if let Some(bottom) = &record.custom_messages.bottom {
        card = card.child(Text::new(bottom).center());
    }

    card
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ComponentExt;
    use crate::ir::Op;
    use crate::template::record_for;

    #[test]
    fn test_subway_fixed_strings() {
        let record = record_for(4).unwrap();
        let program = subway(&record, &EnabledSections::default()).compile();
        let lines = program.text_lines().join("\n");
        assert!(lines.contains("Sub Total"));
        assert!(lines.contains("General Sales Tax GST (10%)"));
        assert!(lines.contains("Total (Eat In)"));
        assert!(lines.contains("Change"));
        assert!(lines.contains("Take one min survey @ tellsubway.in and get"));
        // Served-by line rewrites the date separators.
        assert!(lines.contains("Served by : Mariana 2025/04/27 16:04:52"));
    }

    #[test]
    fn test_subway_unit_prices_without_currency_sign() {
        let record = record_for(4).unwrap();
        let program = subway(&record, &EnabledSections::default()).compile();
        let lines = program.text_lines().join("\n");
        // Qty 2 at unit 12.38 renders the unit price, not 24.76.
        assert!(lines.contains("12.38"));
        assert!(!lines.contains("$12.38"));
    }

    #[test]
    fn test_subway_default_size_column() {
        let mut record = record_for(4).unwrap();
        record.items[0].size = None;
        let program = subway(&record, &EnabledSections::default()).compile();
        let lines = program.text_lines().join("\n");
        assert!(lines.contains("1''"));
    }

    #[test]
    fn test_starbucks_check_header_and_payment() {
        let record = record_for(5).unwrap();
        let program = starbucks(&record, &EnabledSections::default()).compile();
        let lines = program.text_lines().join("\n");
        assert!(lines.contains("Coffee Company"));
        assert!(lines.contains("CHK 742896"));
        assert!(lines.contains("ORDER #47089-240"));
        assert!(lines.contains("Mobile Order & Pay"));
        assert!(lines.contains("Status: APPROVED"));
    }

    #[test]
    fn test_uber_eats_order_header() {
        let record = record_for(6).unwrap();
        let program = uber_eats(&record, &EnabledSections::default()).compile();
        let lines = program.text_lines().join("\n");
        // "Order #" prefix is stripped before re-prefixing.
        assert!(lines.contains("Order #1842-6534"));
        assert!(!lines.contains("Order #Order #"));
        assert!(lines.contains("Delivery Details:"));
    }

    #[test]
    fn test_walmart_fixed_lines() {
        let record = record_for(8).unwrap();
        let program = walmart(&record, &EnabledSections::default()).compile();
        let lines = program.text_lines().join("\n");
        assert!(lines.contains("Save money. Live better."));
        assert!(lines.contains("SUBTOTAL"));
        assert!(lines.contains("$0.29"));
    }

    #[test]
    fn test_walmart_text_fallback_without_logo() {
        let mut record = record_for(8).unwrap();
        record.logo = None;
        let program = walmart(&record, &EnabledSections::default()).compile();
        assert!(program.text_lines().contains(&"Walmart *"));
        assert!(!program.iter().any(|op| matches!(op, Op::LogoBox { .. })));
    }

    #[test]
    fn test_stockx_banner_and_detail_line() {
        let record = record_for(9).unwrap();
        let program = stockx(&record, &EnabledSections::default()).compile();
        assert!(program.iter().any(|op| *op == Op::SetInvert(true)));
        let lines = program.text_lines().join("\n");
        assert!(lines.contains(" RECEIPT "));
        // Middle message appears once, under item id "1".
        let middle = record.custom_messages.middle.as_deref().unwrap();
        assert_eq!(lines.matches(middle).count(), 1);
    }

    #[test]
    fn test_louis_vuitton_maison_line_and_qty_rows() {
        let record = record_for(11).unwrap();
        let program = louis_vuitton(&record, &EnabledSections::default()).compile();
        let lines = program.text_lines().join("\n");
        assert!(lines.contains("LOUIS VUITTON"));
        assert!(lines.contains("MAISON FONDEE EN 1854"));
        assert!(lines.contains("Qty: 1"));
        assert!(lines.contains("Sales Associate: Marie Dubois"));
    }

    #[test]
    fn test_brand_layouts_ignore_sections() {
        let record = record_for(5).unwrap();
        let all = starbucks(&record, &EnabledSections::default()).compile();
        let none = starbucks(&record, &EnabledSections::none()).compile();
        assert_eq!(all.ops, none.ops);
    }

    #[test]
    fn test_empty_items_renders_no_rows() {
        for id in [4, 5, 6, 7, 8, 9, 11] {
            let mut record = record_for(id).unwrap();
            record.items.clear();
            let program =
                crate::template::compile(&record, &EnabledSections::default());
            // Totals survive, but no item row text mentions a quantity
            // prefix from the fixture items.
            assert!(!program.is_empty(), "template {id}");
        }
    }
}
