//! # Receipt Rendering Tests
//!
//! End-to-end tests over the template registry, the raster backend, the
//! exporter, and the contact link builders.
//!
//! ## Test Coverage
//!
//! - **Dispatch tests**: brand selection is deterministic and total.
//! - **Render tests**: every fixture renders, output is deterministic,
//!   and the export canvas has the contract dimensions.
//! - **Export tests**: PNG on the primary path, text fallback with the
//!   contract content when rasterization fails.
//! - **Editing tests**: reset-and-replay reproduces identical state.

use recibo::export::{ArtifactKind, Exporter, Rasterizer, receipt_text};
use recibo::form::{Edit, EditorSession, EnabledSections, Section};
use recibo::ir::{Op, Program};
use recibo::record::{LineItem, MessageSlot, ReceiptRecord};
use recibo::render::{self, RenderError};
use recibo::template::{self, TemplateKind};

/// A rasterizer that always fails, for fallback-path tests.
struct BrokenRasterizer;

impl Rasterizer for BrokenRasterizer {
    fn rasterize(&self, _program: &Program) -> Result<Vec<u8>, RenderError> {
        Err(RenderError::ImageEncode("always broken".into()))
    }
}

/// A fixed record with no fixture timestamps, for deterministic
/// comparisons.
fn fixed_record() -> ReceiptRecord {
    ReceiptRecord {
        store_name: "Corner Cafe".into(),
        store_address: "1 Main St".into(),
        phone: "(555) 010-0000".into(),
        date: "2026-01-20".into(),
        time: "12:00:00".into(),
        cashier: "Cashier: Sam".into(),
        register_number: "REG 4".into(),
        items: vec![
            LineItem::new("1", "Espresso", 2, 2.50),
            LineItem::new("2", "Croissant", 1, 4.25),
        ],
        subtotal: 9.25,
        tax: 0.74,
        total: 9.99,
        payment_method: "Visa".into(),
        card_number: "**** 1111".into(),
        barcode: "0123456789".into(),
        ..Default::default()
    }
}

// ============================================================================
// DISPATCH TESTS
// ============================================================================

/// Every store name selects exactly one layout; the default layout is
/// selected iff no brand substring matches.
#[test]
fn test_dispatch_total_and_deterministic() {
    let names = [
        ("Subway #1", TemplateKind::Subway),
        ("Starbucks Reserve", TemplateKind::Starbucks),
        ("McDonald's Downtown", TemplateKind::UberEats),
        ("Popeyes #9", TemplateKind::Popeyes),
        ("walmart supercenter", TemplateKind::Walmart),
        ("StockX LLC", TemplateKind::StockX),
        ("Louis Vuitton Paris", TemplateKind::LouisVuitton),
        ("Corner Cafe", TemplateKind::Generic),
        ("", TemplateKind::Generic),
        ("STARBUCKS", TemplateKind::Generic), // case-sensitive except walmart
    ];
    for (name, expected) in names {
        assert_eq!(TemplateKind::detect(name), expected, "store name {name:?}");
        // Deterministic: repeated calls agree.
        assert_eq!(TemplateKind::detect(name), TemplateKind::detect(name));
    }
}

#[test]
fn test_priority_order_first_match_wins() {
    // A name containing several brand substrings resolves by priority.
    assert_eq!(
        TemplateKind::detect("Starbucks inside Walmart"),
        TemplateKind::Starbucks
    );
    assert_eq!(
        TemplateKind::detect("Subway next to Starbucks"),
        TemplateKind::Subway
    );
}

// ============================================================================
// RENDER TESTS
// ============================================================================

/// All catalogue fixtures compile and rasterize without error.
#[test]
fn test_all_fixtures_render() {
    for entry in template::catalogue() {
        let record = template::record_for(entry.id).unwrap();
        let program = template::compile(&record, &EnabledSections::default());
        assert!(!program.is_empty(), "template {}", entry.id);

        let png = render::render_card_png(&program).expect("render failed");
        assert_eq!(&png[0..4], &[0x89, b'P', b'N', b'G'], "template {}", entry.id);
    }
}

/// Rendering is deterministic: same record, same bytes.
#[test]
fn test_render_determinism() {
    let record = fixed_record();
    let sections = EnabledSections::default();

    let png1 =
        render::render_card_png(&template::compile(&record, &sections)).unwrap();
    let png2 =
        render::render_card_png(&template::compile(&record, &sections)).unwrap();

    assert_eq!(png1, png2, "render output should be deterministic");
}

/// The export canvas is exactly 300×600 logical px at 2x density.
#[test]
fn test_export_canvas_contract_dimensions() {
    let program = template::compile(&fixed_record(), &EnabledSections::default());
    let png = render::render_card_png(&program).unwrap();

    let img = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(img.width(), 600);
    assert_eq!(img.height(), 1200);
}

/// Currency fields always render with exactly two decimals.
#[test]
fn test_currency_two_decimal_contract() {
    let mut record = fixed_record();
    record.items = vec![LineItem::new("1", "Oddly Priced", 1, 8.9)];
    record.subtotal = 8.9;
    record.tax = 0.0;
    record.total = 8.9;

    let program = template::compile(&record, &EnabledSections::default());
    let lines = program.text_lines().join("\n");
    assert!(lines.contains("$8.90"));
    assert!(!lines.contains("$8.9\n"));

    let text = receipt_text(&record);
    assert!(text.contains("Total: $8.90"));
}

/// An empty items sequence renders no itemized block anywhere.
#[test]
fn test_empty_items_render_empty_block() {
    for entry in template::catalogue() {
        let mut record = template::record_for(entry.id).unwrap();
        record.items.clear();

        let program = template::compile(&record, &EnabledSections::default());
        let item_name_leak = program
            .text_lines()
            .iter()
            .any(|line| line.contains("Sandwiches") || line.contains("Big Mac"));
        assert!(!item_name_leak, "template {}", entry.id);

        // Still renders without error.
        render::render_card_png(&program).unwrap();
    }
}

/// The renderer is total over partially populated records.
#[test]
fn test_renderer_total_over_partial_records() {
    let empty = ReceiptRecord::default();
    for entry in template::catalogue() {
        let mut record = empty.clone();
        record.template = Some(entry.kind);
        let program = template::compile(&record, &EnabledSections::default());
        render::render_card_png(&program).unwrap();
    }
}

/// Section toggles reach the generic layout only.
#[test]
fn test_sections_only_affect_generic_layout() {
    let mut generic = fixed_record();
    generic.template = Some(TemplateKind::Generic);

    let all = template::compile(&generic, &EnabledSections::default());
    let none = template::compile(&generic, &EnabledSections::none());
    assert_ne!(all.ops, none.ops);

    let mut branded = fixed_record();
    branded.template = Some(TemplateKind::Popeyes);
    let all = template::compile(&branded, &EnabledSections::default());
    let none = template::compile(&branded, &EnabledSections::none());
    assert_eq!(all.ops, none.ops);
}

/// The barcode block is driven by the record digits.
#[test]
fn test_barcode_block_binds_record_digits() {
    let record = fixed_record();
    let program = template::compile(&record, &EnabledSections::default());
    assert!(program.iter().any(|op| matches!(
        op,
        Op::BarPattern { digits } if digits == "0123456789"
    )));

    let mut sections = EnabledSections::default();
    sections.disable(Section::Barcode);
    let program = template::compile(&record, &sections);
    assert!(!program.iter().any(|op| matches!(op, Op::BarPattern { .. })));
}

// ============================================================================
// EXPORT TESTS
// ============================================================================

#[test]
fn test_export_primary_path_is_png() {
    let artifact = Exporter::new().export(&fixed_record(), &EnabledSections::default());
    assert_eq!(artifact.kind, ArtifactKind::Png);
    assert_eq!(artifact.file_name, "Corner Cafe-receipt.png");
    assert_eq!(&artifact.bytes[0..4], &[0x89, b'P', b'N', b'G']);
}

#[test]
fn test_export_fallback_path_is_text() {
    let record = fixed_record();
    let artifact =
        Exporter::with_rasterizer(BrokenRasterizer).export(&record, &EnabledSections::default());

    assert_eq!(artifact.kind, ArtifactKind::Text);
    assert_eq!(artifact.file_name, "Corner Cafe-receipt.txt");

    let text = String::from_utf8(artifact.bytes).unwrap();
    // Store name on the first line, formatted total present.
    assert_eq!(text.lines().next().unwrap(), "Corner Cafe");
    assert!(text.contains("$9.99"));
    // Extended item prices in the text rendition.
    assert!(text.contains("2 Espresso - $5.00"));
}

// ============================================================================
// EDITING TESTS
// ============================================================================

/// Resetting to defaults and re-applying the same edits reproduces an
/// identical record.
#[test]
fn test_reset_and_replay_roundtrip() {
    let edits = vec![
        Edit::SetStoreName("Replayed".into()),
        Edit::AddItem(LineItem::new("9", "Muffin", 3, 2.10)),
        Edit::SetSubtotal(6.30),
        Edit::SetTotal(6.30),
        Edit::SetMessage {
            slot: MessageSlot::Top,
            text: Some("hello".into()),
        },
        Edit::ToggleSection(Section::Info),
        Edit::SetTemplate(Some(TemplateKind::Walmart)),
    ];

    let mut session = EditorSession::from_template(5).unwrap();
    session.apply_all(edits.clone());
    let first = session.clone();

    session.reset();
    session.apply_all(edits);

    assert_eq!(session, first);
}
