//! # Export
//!
//! Turns a rendered receipt into a downloadable artifact.
//!
//! The primary path rasterizes the compiled layout onto the fixed
//! 300×600 logical px card canvas (2x density) and encodes a PNG named
//! `<storeName>-receipt.png`. Rasterization failure is a recoverable
//! condition, not an error: it is logged for diagnostics and the export
//! falls through exactly once, with no retry, to a plain-text rendition
//! of the same fields named `<storeName>-receipt.txt`.
//!
//! Saving an artifact goes through a temporary sibling file that is
//! removed on every path, success or failure.

use std::fs;
use std::path::{Path, PathBuf};

use crate::form::EnabledSections;
use crate::ir::Program;
use crate::record::ReceiptRecord;
use crate::render::{self, RenderError};
use crate::template;

/// Pluggable rasterization backend.
///
/// The default backend draws the fixed export canvas; tests inject
/// failing backends to exercise the fallback path.
pub trait Rasterizer {
    fn rasterize(&self, program: &Program) -> Result<Vec<u8>, RenderError>;
}

/// Default backend: the 600×1200 px card canvas as PNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct CardRasterizer;

impl Rasterizer for CardRasterizer {
    fn rasterize(&self, program: &Program) -> Result<Vec<u8>, RenderError> {
        render::render_card_png(program)
    }
}

/// Kind of a produced download artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Png,
    Text,
}

/// A downloadable artifact: file name, kind, and payload bytes.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub file_name: String,
    pub kind: ArtifactKind,
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// MIME type for download responses.
    pub fn content_type(&self) -> &'static str {
        match self.kind {
            ArtifactKind::Png => "image/png",
            ArtifactKind::Text => "text/plain; charset=utf-8",
        }
    }
}

/// Receipt exporter over a rasterization backend.
pub struct Exporter<R = CardRasterizer> {
    rasterizer: R,
}

impl Exporter<CardRasterizer> {
    /// Exporter with the default card rasterizer.
    pub fn new() -> Self {
        Self {
            rasterizer: CardRasterizer,
        }
    }
}

impl Default for Exporter<CardRasterizer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rasterizer> Exporter<R> {
    /// Exporter with a custom rasterization backend.
    pub fn with_rasterizer(rasterizer: R) -> Self {
        Self { rasterizer }
    }

    /// Export a record. Infallible by contract: a rasterization failure
    /// silently satisfies the download intent via the text fallback.
    pub fn export(&self, record: &ReceiptRecord, sections: &EnabledSections) -> Artifact {
        let program = template::compile(record, sections);

        match self.rasterizer.rasterize(&program) {
            Ok(bytes) => Artifact {
                file_name: format!("{}-receipt.png", record.store_name),
                kind: ArtifactKind::Png,
                bytes,
            },
            Err(e) => {
                tracing::warn!(error = %e, "rasterization failed, falling back to text export");
                Artifact {
                    file_name: format!("{}-receipt.txt", record.store_name),
                    kind: ArtifactKind::Text,
                    bytes: receipt_text(record).into_bytes(),
                }
            }
        }
    }
}

/// Plain-text rendition of a record, in the reference field order.
pub fn receipt_text(record: &ReceiptRecord) -> String {
    let mut text = format!("{}\n", record.store_name);
    text += &format!("{}, {}\n", record.date, record.time);
    text += &format!("{}\n", record.register_number);
    text += &format!("{}\n\n", record.cashier);

    for item in &record.items {
        text += &format!(
            "{} {} - ${:.2}\n",
            item.quantity,
            item.name,
            item.extended_price()
        );
    }

    text += &format!("\nSubtotal: ${:.2}\n", record.subtotal);
    text += &format!("Tax: ${:.2}\n", record.tax);
    text += &format!("Total: ${:.2}\n\n", record.total);
    text += &format!("Payment: {}\n", record.payment_method);
    text += &format!("Card: {}\n\n", record.card_number);
    text += &format!(
        "{}\n",
        record.custom_messages.bottom.as_deref().unwrap_or_default()
    );
    text += &record.phone;

    text
}

/// Removes the temporary file on drop unless defused by a successful
/// rename.
struct TempGuard {
    path: PathBuf,
    armed: bool,
}

impl Drop for TempGuard {
    fn drop(&mut self) {
        if self.armed {
            let _ = fs::remove_file(&self.path);
        }
    }
}

/// Write an artifact into `dir`, returning the final path.
///
/// The payload lands in a temporary sibling first and is renamed into
/// place; the temporary is cleaned up whether or not the write
/// succeeds.
pub fn save_artifact(artifact: &Artifact, dir: &Path) -> std::io::Result<PathBuf> {
    let final_path = dir.join(&artifact.file_name);
    let tmp_path = dir.join(format!(".{}.tmp", artifact.file_name));

    let mut guard = TempGuard {
        path: tmp_path.clone(),
        armed: true,
    };

    fs::write(&tmp_path, &artifact.bytes)?;
    fs::rename(&tmp_path, &final_path)?;
    guard.armed = false;

    Ok(final_path)
}
