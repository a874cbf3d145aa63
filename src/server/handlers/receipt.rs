//! Receipt preview and export handlers.

use axum::{
    Json,
    extract::Query,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::export::Exporter;
use crate::form::EnabledSections;
use crate::record::ReceiptRecord;
use crate::render;
use crate::template::{self, GENERIC_TEMPLATE_ID};

/// Body of the POST preview/export endpoints.
#[derive(Debug, Deserialize)]
pub struct ReceiptRequest {
    pub record: ReceiptRecord,
    /// Generic-layout section toggles; all enabled when omitted.
    #[serde(default)]
    pub sections: Option<EnabledSections>,
}

/// Query of the GET preview endpoint. The `template=<integer id>`
/// parameter is resolved here, at the router layer; the renderer only
/// ever sees a record.
#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    pub template: Option<u32>,
}

/// Handle GET /api/receipt/preview?template=<id> - PNG preview of a
/// built-in template fixture.
pub async fn preview_template(
    Query(query): Query<PreviewQuery>,
) -> Result<Response, (StatusCode, String)> {
    let id = query.template.unwrap_or(GENERIC_TEMPLATE_ID);
    let record = template::record_for(id)
        .ok_or((StatusCode::NOT_FOUND, format!("Unknown template id: {id}")))?;
    png_response(&record, &EnabledSections::default())
}

/// Handle POST /api/receipt/preview - PNG preview of a posted record.
pub async fn preview(
    Json(request): Json<ReceiptRequest>,
) -> Result<Response, (StatusCode, String)> {
    let sections = request.sections.unwrap_or_default();
    png_response(&request.record, &sections)
}

/// Handle POST /api/receipt/export - download artifact.
///
/// PNG on the primary path; the text fallback ships with the same
/// success status, so a failed rasterization is never surfaced.
pub async fn export(Json(request): Json<ReceiptRequest>) -> Response {
    let sections = request.sections.unwrap_or_default();
    let artifact = Exporter::new().export(&request.record, &sections);

    (
        [
            (header::CONTENT_TYPE, artifact.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", artifact.file_name),
            ),
        ],
        artifact.bytes,
    )
        .into_response()
}

/// Render a record to the fixed card canvas and wrap it as a PNG
/// response.
fn png_response(
    record: &ReceiptRecord,
    sections: &EnabledSections,
) -> Result<Response, (StatusCode, String)> {
    let program = template::compile(record, sections);
    let png_bytes = render::render_card_png(&program).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to render preview: {e}"),
        )
    })?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png_bytes).into_response())
}
