//! # Template Registry
//!
//! Maps a template identity to a layout renderer.
//!
//! ## Dispatch
//!
//! The template identity is a closed enum ([`TemplateKind`]) carried on
//! the record itself. Dispatch goes through [`layout_for`], a registry
//! from kind to layout function: adding a template means adding an
//! enum variant and one registry arm, not editing a shared branch chain.
//!
//! [`TemplateKind::detect`] reproduces the product's original substring
//! dispatch over the store name, in its exact priority order, as a
//! compatibility shim for records without an explicit tag.
//!
//! ## Example
//!
//! ```
//! use recibo::form::EnabledSections;
//! use recibo::template;
//!
//! let record = template::record_for(5).unwrap(); // Starbucks fixture
//! let program = template::compile(&record, &EnabledSections::default());
//! assert!(!program.is_empty());
//! ```

mod brands;
mod fixtures;
mod generic;

pub use fixtures::{TemplateEntry, catalogue, current_datetime, record_for};

use serde::{Deserialize, Serialize};

use crate::components::{ComponentExt, Receipt};
use crate::form::EnabledSections;
use crate::ir::Program;
use crate::record::ReceiptRecord;

/// Template id of the generic/default layout in the catalogue.
pub const GENERIC_TEMPLATE_ID: u32 = 1;

/// A recognized merchant layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    #[default]
    Generic,
    Subway,
    Starbucks,
    /// The reference dispatches "McDonald" store names to its Uber Eats
    /// delivery layout; the tag keeps that name.
    UberEats,
    Popeyes,
    Walmart,
    #[serde(rename = "stockx")]
    StockX,
    LouisVuitton,
}

impl TemplateKind {
    /// Substring dispatch over the display store name, matching the
    /// original priority order. First match wins; no match is Generic.
    ///
    /// Deterministic and total: every store name selects exactly one
    /// kind. Prefer tagging records with an explicit `template` instead
    /// of relying on this.
    pub fn detect(store_name: &str) -> Self {
        if store_name.contains("Subway") {
            TemplateKind::Subway
        } else if store_name.contains("Starbucks") {
            TemplateKind::Starbucks
        } else if store_name.contains("McDonald") {
            TemplateKind::UberEats
        } else if store_name.contains("Popeyes") {
            TemplateKind::Popeyes
        } else if store_name.to_lowercase().contains("walmart") {
            TemplateKind::Walmart
        } else if store_name.contains("StockX") {
            TemplateKind::StockX
        } else if store_name.contains("Louis Vuitton") {
            TemplateKind::LouisVuitton
        } else {
            TemplateKind::Generic
        }
    }
}

/// A layout renderer: record + enabled sections → component tree.
///
/// Brand layouts ignore the section set entirely; only the generic
/// layout consults it.
pub type LayoutFn = fn(&ReceiptRecord, &EnabledSections) -> Receipt;

/// Registry from template kind to layout renderer.
pub fn layout_for(kind: TemplateKind) -> LayoutFn {
    match kind {
        TemplateKind::Generic => generic::layout,
        TemplateKind::Subway => brands::subway,
        TemplateKind::Starbucks => brands::starbucks,
        TemplateKind::UberEats => brands::uber_eats,
        TemplateKind::Popeyes => brands::popeyes,
        TemplateKind::Walmart => brands::walmart,
        TemplateKind::StockX => brands::stockx,
        TemplateKind::LouisVuitton => brands::louis_vuitton,
    }
}

/// Resolve the record's template and compile its layout to IR.
///
/// The record's font choice applies to the whole card, so it is bound
/// right after the initial reset.
pub fn compile(record: &ReceiptRecord, sections: &EnabledSections) -> Program {
    let layout = layout_for(record.resolve_template());
    let mut program = layout(record, sections).compile();
    program.ops.insert(1, crate::ir::Op::SetFont(record.font_style));
    program
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_priority_order() {
        // "Subway" outranks everything else in the chain.
        assert_eq!(
            TemplateKind::detect("Subway at the Starbucks mall"),
            TemplateKind::Subway
        );
        assert_eq!(
            TemplateKind::detect("Starbucks Store # 47089"),
            TemplateKind::Starbucks
        );
        assert_eq!(TemplateKind::detect("McDonald's"), TemplateKind::UberEats);
        assert_eq!(
            TemplateKind::detect("Popeyes Store #2347"),
            TemplateKind::Popeyes
        );
        assert_eq!(TemplateKind::detect("WALMART #1234"), TemplateKind::Walmart);
        assert_eq!(TemplateKind::detect("StockX"), TemplateKind::StockX);
        assert_eq!(
            TemplateKind::detect("Louis Vuitton Beverly Hills"),
            TemplateKind::LouisVuitton
        );
    }

    #[test]
    fn test_detect_default_iff_no_brand_substring() {
        assert_eq!(TemplateKind::detect(""), TemplateKind::Generic);
        assert_eq!(
            TemplateKind::detect("Harbor Lane Cafe"),
            TemplateKind::Generic
        );
        // Case matters except for walmart.
        assert_eq!(TemplateKind::detect("subway"), TemplateKind::Generic);
        assert_eq!(TemplateKind::detect("walmart"), TemplateKind::Walmart);
    }

    #[test]
    fn test_explicit_tag_wins_over_store_name() {
        let record = ReceiptRecord {
            store_name: "Subway #1".into(),
            template: Some(TemplateKind::Generic),
            ..Default::default()
        };
        assert_eq!(record.resolve_template(), TemplateKind::Generic);
    }

    #[test]
    fn test_every_kind_has_a_layout() {
        // The registry is total over the enum; a compile of an empty
        // record through each arm must not panic.
        let record = ReceiptRecord::default();
        let sections = EnabledSections::default();
        for kind in [
            TemplateKind::Generic,
            TemplateKind::Subway,
            TemplateKind::Starbucks,
            TemplateKind::UberEats,
            TemplateKind::Popeyes,
            TemplateKind::Walmart,
            TemplateKind::StockX,
            TemplateKind::LouisVuitton,
        ] {
            let program = layout_for(kind)(&record, &sections).compile();
            assert!(!program.is_empty());
        }
    }

    #[test]
    fn test_kind_serde_keys() {
        assert_eq!(
            serde_json::to_string(&TemplateKind::UberEats).unwrap(),
            "\"uber-eats\""
        );
        assert_eq!(
            serde_json::to_string(&TemplateKind::StockX).unwrap(),
            "\"stockx\""
        );
        assert_eq!(
            serde_json::to_string(&TemplateKind::LouisVuitton).unwrap(),
            "\"louis-vuitton\""
        );
    }
}
