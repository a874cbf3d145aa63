//! Template catalogue handlers.

use axum::{Json, extract::Path, http::StatusCode};

use crate::record::ReceiptRecord;
use crate::template::{self, TemplateEntry};

/// Handle GET /api/templates - list the built-in template catalogue.
pub async fn list() -> Json<&'static [TemplateEntry]> {
    Json(template::catalogue())
}

/// Handle GET /api/templates/:id - resolved default record for a
/// template id.
pub async fn get(Path(id): Path<u32>) -> Result<Json<ReceiptRecord>, (StatusCode, String)> {
    template::record_for(id)
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, format!("Unknown template id: {id}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_is_catalogue() {
        let Json(entries) = list().await;
        assert_eq!(entries.len(), template::catalogue().len());
    }

    #[tokio::test]
    async fn test_get_known_and_unknown() {
        assert!(get(Path(5)).await.is_ok());
        let err = get(Path(2)).await.unwrap_err();
        assert_eq!(err.0, StatusCode::NOT_FOUND);
    }
}
