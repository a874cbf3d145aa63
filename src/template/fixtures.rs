//! Built-in template fixtures.
//!
//! The templates page selects a receipt via `template=<integer id>`;
//! the ids here match the reference catalogue. Each fixture is a fully
//! populated [`ReceiptRecord`] carrying its explicit [`TemplateKind`]
//! tag, and all fixtures pass [`ReceiptRecord::reconciles`].

use chrono::Local;

use super::TemplateKind;
use crate::record::{CustomMessages, FontStyle, LineItem, ReceiptRecord};

/// Catalogue entry for listing and search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct TemplateEntry {
    pub id: u32,
    pub title: &'static str,
    pub kind: TemplateKind,
    pub category: &'static str,
}

/// All built-in templates, in catalogue order.
pub fn catalogue() -> &'static [TemplateEntry] {
    &[
        TemplateEntry {
            id: 1,
            title: "Fast Food Receipt",
            kind: TemplateKind::Generic,
            category: "fast-food",
        },
        TemplateEntry {
            id: 4,
            title: "Subway Receipt",
            kind: TemplateKind::Subway,
            category: "fast-food",
        },
        TemplateEntry {
            id: 5,
            title: "Starbucks Receipt",
            kind: TemplateKind::Starbucks,
            category: "coffee",
        },
        TemplateEntry {
            id: 6,
            title: "Uber Eats Receipt",
            kind: TemplateKind::UberEats,
            category: "delivery",
        },
        TemplateEntry {
            id: 7,
            title: "Popeyes Receipt",
            kind: TemplateKind::Popeyes,
            category: "fast-food",
        },
        TemplateEntry {
            id: 8,
            title: "Walmart Receipt",
            kind: TemplateKind::Walmart,
            category: "retail",
        },
        TemplateEntry {
            id: 9,
            title: "StockX Receipt",
            kind: TemplateKind::StockX,
            category: "ecommerce",
        },
        TemplateEntry {
            id: 11,
            title: "Louis Vuitton Receipt",
            kind: TemplateKind::LouisVuitton,
            category: "luxury",
        },
    ]
}

/// Default record for a template id, or `None` for unknown ids.
pub fn record_for(id: u32) -> Option<ReceiptRecord> {
    match id {
        1 => Some(generic_cafe()),
        4 => Some(subway()),
        5 => Some(starbucks()),
        6 => Some(uber_eats()),
        7 => Some(popeyes()),
        8 => Some(walmart()),
        9 => Some(stockx()),
        11 => Some(louis_vuitton()),
        _ => None,
    }
}

/// Current local date and time as the fixture strings ("2026-08-07",
/// "15:24:15").
pub fn current_datetime() -> (String, String) {
    let now = Local::now();
    (
        now.format("%Y-%m-%d").to_string(),
        now.format("%H:%M:%S").to_string(),
    )
}

fn generic_cafe() -> ReceiptRecord {
    let (date, time) = current_datetime();
    ReceiptRecord {
        store_name: "Harbor Lane Cafe".into(),
        store_address: "3911 Green Oaks Blvd, Chicago IL".into(),
        phone: "(312) 555-0175".into(),
        date,
        time,
        cashier: "Cashier: #3".into(),
        register_number: "BATCH #507327".into(),
        order_number: "TRANS #3".into(),
        items: vec![
            LineItem::new("1", "Sandwiches", 2, 5.00),
            LineItem::new("2", "Fried Chicken", 1, 20.00),
            LineItem::new("3", "Cheeseburgers", 1, 15.00),
            LineItem::new("4", "Tacos", 1, 30.00),
        ],
        subtotal: 75.00,
        tax: 6.00,
        total: 81.00,
        payment_method: "VISA".into(),
        card_number: "**** **** **** 4408".into(),
        custom_messages: CustomMessages::default(),
        barcode: "4891443570705".into(),
        font_style: FontStyle::Font1,
        logo: None,
        template: Some(TemplateKind::Generic),
    }
}

fn subway() -> ReceiptRecord {
    ReceiptRecord {
        store_name: "Subway #44352-7".into(),
        store_address: "3680 Avenue of the Cities, Moline, IL 61265, United States".into(),
        phone: "3136253957".into(),
        date: "2025-04-27".into(),
        time: "16:04:52".into(),
        cashier: "Mariana".into(),
        register_number: "Term ID-Trans# 5/A - 300236".into(),
        order_number: "300236".into(),
        items: vec![
            LineItem::new("1", "Steak & Cheese Sub", 1, 5.00).size("12\""),
            LineItem::new("2", "#6 The Boss Sub", 2, 12.38).size("12\""),
        ],
        // The reference fixture states a 54.56 subtotal that its own
        // items cannot produce; a data-entry defect, corrected here.
        subtotal: 29.76,
        tax: 2.98,
        total: 32.74,
        payment_method: "Visa".into(),
        card_number: "**** **** **** 8841".into(),
        custom_messages: CustomMessages {
            bottom: Some(
                "Take one min survey @ tellsubway.in and get a free cookie on next purchase."
                    .into(),
            ),
            ..Default::default()
        },
        barcode: String::new(),
        font_style: FontStyle::Font1,
        logo: Some("assets/subway.png".into()),
        template: Some(TemplateKind::Subway),
    }
}

fn starbucks() -> ReceiptRecord {
    ReceiptRecord {
        store_name: "Starbucks Store # 47089".into(),
        store_address: "123 Main Street, Seattle, WA 98101".into(),
        phone: "(206) 555-0123".into(),
        date: "2025-11-19".into(),
        time: "12:34:56".into(),
        cashier: "Sarah M".into(),
        register_number: "Register: 1".into(),
        order_number: "ORDER #47089-240".into(),
        items: vec![
            LineItem::new("1", "Grande Pike Place Roast", 1, 2.45).notes("No Room, Hot"),
            LineItem::new("2", "Blueberry Muffin", 1, 3.25).notes("Warmed"),
            LineItem::new("3", "Venti Iced Caramel Macchiato", 1, 5.75)
                .notes("2% Milk, Extra Hot, 2 Pumps Vanilla"),
        ],
        subtotal: 11.45,
        tax: 1.03,
        total: 12.48,
        payment_method: "Visa Credit **** 4567".into(),
        card_number: "**** **** **** 4567".into(),
        custom_messages: CustomMessages {
            bottom: Some("Thank you for visiting! Rate your experience at mystarbucksvisit.com".into()),
            ..Default::default()
        },
        barcode: String::new(),
        font_style: FontStyle::Font1,
        logo: None,
        template: Some(TemplateKind::Starbucks),
    }
}

fn uber_eats() -> ReceiptRecord {
    ReceiptRecord {
        store_name: "McDonald's".into(),
        store_address: "123 Main Street, Seattle, WA 98101".into(),
        phone: "(206) 555-0188".into(),
        date: "2025-11-19".into(),
        time: "15:45".into(),
        cashier: String::new(),
        register_number: "Order #1842-6534".into(),
        order_number: "1842-6534".into(),
        items: vec![
            LineItem::new("1", "Big Mac", 1, 6.49).notes("No pickles, Extra sauce"),
            LineItem::new("2", "Large Fries", 1, 3.29),
            LineItem::new("3", "Coca-Cola (Large)", 1, 2.19),
        ],
        subtotal: 11.97,
        tax: 1.32,
        total: 13.29,
        payment_method: "Visa ****4567".into(),
        card_number: "**** **** **** 4567".into(),
        custom_messages: CustomMessages {
            middle: Some("Delivered to: Sarah Johnson, 456 Pine Avenue, Apt 2B".into()),
            bottom: Some("Delivery partner: Michael R. (4.9)".into()),
            ..Default::default()
        },
        barcode: String::new(),
        font_style: FontStyle::Font1,
        logo: Some("assets/uber-eats.png".into()),
        template: Some(TemplateKind::UberEats),
    }
}

fn popeyes() -> ReceiptRecord {
    ReceiptRecord {
        store_name: "Popeyes Store #2347".into(),
        store_address: "892 Canal Street, New Orleans, LA 70112".into(),
        phone: "(504) 593-2847".into(),
        date: "2025-11-19".into(),
        time: "14:18:42".into(),
        cashier: "Marcus T.".into(),
        register_number: "Receipt #4729815".into(),
        order_number: "ORDER #238".into(),
        items: vec![
            LineItem::new("1", "2PC Chicken Combo", 1, 8.99)
                .notes("Spicy, Mashed Potatoes & Gravy, Large Coke"),
            LineItem::new("2", "Chicken Sandwich Deluxe", 1, 6.49).notes("Spicy Mayo, Pickles"),
            LineItem::new("3", "Red Beans & Rice", 1, 3.79).notes("Large"),
            LineItem::new("4", "Biscuit", 2, 1.19).notes("Honey Butter"),
        ],
        subtotal: 21.65,
        tax: 2.17,
        total: 23.82,
        payment_method: "Mastercard ****2847".into(),
        card_number: "**** **** **** 2847".into(),
        custom_messages: CustomMessages {
            middle: Some("DINE IN - Table #12".into()),
            bottom: Some(
                "Tell us about your visit at tellpopeyes.com | Survey code: 2347-238-4729815"
                    .into(),
            ),
            ..Default::default()
        },
        barcode: String::new(),
        font_style: FontStyle::Font1,
        logo: Some("assets/popeyes.png".into()),
        template: Some(TemplateKind::Popeyes),
    }
}

fn walmart() -> ReceiptRecord {
    ReceiptRecord {
        store_name: "Walmart".into(),
        store_address: "3451 TRUXEL RD, SACRAMENTO CA 23456".into(),
        phone: "(915) 968-2258".into(),
        date: "2025-11-19".into(),
        time: "15:24:15".into(),
        cashier: "JENNIFER L.".into(),
        register_number: "ST# 01234 OP# 567890 TE# 23".into(),
        order_number: "TC# 4891 4435 7070 5637 2915".into(),
        items: vec![LineItem::new("1", "ALIBEISS CLEANING WIPES", 1, 8.99)],
        subtotal: 8.99,
        tax: 0.72,
        total: 9.71,
        payment_method: "Cash".into(),
        card_number: String::new(),
        custom_messages: CustomMessages {
            top: Some("See back of receipt for your chance to win $1000".into()),
            middle: Some("PRODUCT SERIAL # TH66B3C1ZZ".into()),
            bottom: Some("Thank you for shopping at Walmart! Save time and money with Walmart+".into()),
        },
        barcode: String::new(),
        font_style: FontStyle::Font1,
        logo: Some("assets/walmart.png".into()),
        template: Some(TemplateKind::Walmart),
    }
}

fn stockx() -> ReceiptRecord {
    ReceiptRecord {
        store_name: "StockX".into(),
        store_address: "1046 Woodward Ave, Detroit, MI 48226".into(),
        phone: String::new(),
        date: "2025-11-19".into(),
        time: "10:12:00".into(),
        cashier: String::new(),
        register_number: "Order Number: 76425439-73784585".into(),
        order_number: "76425439-73784585".into(),
        items: vec![
            LineItem::new("1", "Jordan 1 Retro Low OG SP", 1, 219.00)
                .notes("U.S Men's Size 11, Dark Mocha/Black/Velvet Brown, DM7866-202"),
            LineItem::new("2", "Processing Fee", 1, 29.95),
            LineItem::new("3", "Shipping", 1, 17.45),
        ],
        subtotal: 266.40,
        tax: 15.25,
        total: 281.65,
        payment_method: "Visa ****1006".into(),
        card_number: "**** **** **** 1006".into(),
        custom_messages: CustomMessages {
            top: Some("Peter Vincent, 1205 Ocean Breeze Ave, Santa Monica, CA 91092".into()),
            middle: Some("Size 11 | Dark Mocha/Black/Velvet Brown | DM7866-202 | New, 100% authentic".into()),
            bottom: Some(
                "VERIFIED AUTHENTIC - All claims null and void if the verified authentic tag is removed."
                    .into(),
            ),
        },
        barcode: String::new(),
        font_style: FontStyle::Font1,
        logo: Some("assets/stockx.png".into()),
        template: Some(TemplateKind::StockX),
    }
}

fn louis_vuitton() -> ReceiptRecord {
    ReceiptRecord {
        store_name: "Louis Vuitton Beverly Hills".into(),
        store_address: "295 N Rodeo Dr, Beverly Hills, CA 90210".into(),
        phone: "(310) 859-0457".into(),
        date: "2025-11-19".into(),
        time: "14:30:00".into(),
        cashier: "Marie Dubois".into(),
        register_number: "Receipt No: LV240119001".into(),
        order_number: "LV240119001".into(),
        items: vec![
            LineItem::new("1", "Neverfull MM Monogram Canvas", 1, 1960.00)
                .notes("Style: M41175 | Color: Monogram"),
            LineItem::new("2", "Twist PM Epi Leather", 1, 4400.00)
                .notes("Style: M50282 | Color: Noir (Black)"),
        ],
        subtotal: 6360.00,
        tax: 636.00,
        total: 6996.00,
        payment_method: "American Express ****1006".into(),
        card_number: "**** ****** *1006".into(),
        custom_messages: CustomMessages {
            top: Some("Customer: Ms. Johnson".into()),
            middle: Some(
                "CERTIFICATE OF AUTHENTICITY - This Louis Vuitton product is guaranteed authentic."
                    .into(),
            ),
            bottom: Some("Merci - Thank You - We appreciate your visit to Louis Vuitton".into()),
        },
        barcode: "240119001".into(),
        font_style: FontStyle::Font1,
        logo: None,
        template: Some(TemplateKind::LouisVuitton),
    }
}
