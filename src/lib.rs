//! # Recibo - Receipt Mockup Renderer
//!
//! Recibo is a Rust library for rendering branded retail receipt
//! mockups from structured records. It provides:
//!
//! - **Data model**: a `ReceiptRecord` of display fields and line items
//! - **Template registry**: brand layouts dispatched by an explicit tag
//! - **Raster backend**: Spleen bitmap-font rendering to PNG
//! - **Export**: fixed-canvas PNG download with a plain-text fallback
//! - **Outbound links**: `wa.me` and `mailto:` contact hand-offs
//!
//! ## Quick Start
//!
//! ```
//! use recibo::export::Exporter;
//! use recibo::form::EnabledSections;
//! use recibo::template;
//!
//! // Load a built-in template fixture
//! let record = template::record_for(5).expect("known template id");
//!
//! // Render and export it
//! let artifact = Exporter::new().export(&record, &EnabledSections::default());
//! assert!(artifact.file_name.ends_with("-receipt.png"));
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`record`] | The `ReceiptRecord` data model |
//! | [`template`] | Template registry, brand layouts, fixtures |
//! | [`components`] | Declarative layout primitives |
//! | [`ir`] | Intermediate representation |
//! | [`render`] | Raster backend |
//! | [`export`] | PNG/text export artifacts |
//! | [`outbound`] | Contact link construction |
//! | [`form`] | Editing sessions and section toggles |
//! | [`server`] | HTTP API |
//! | [`error`] | Error types |

pub mod components;
pub mod error;
pub mod export;
pub mod form;
pub mod ir;
pub mod outbound;
pub mod record;
pub mod render;
pub mod server;
pub mod template;

// Re-exports for convenience
pub use error::ReciboError;
pub use export::Exporter;
pub use record::ReceiptRecord;
pub use template::TemplateKind;
