//! Contact link handlers.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use super::super::state::AppState;
use crate::outbound::ContactForm;

/// Constructed outbound link.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub url: String,
}

/// Handle POST /api/contact/whatsapp - build the wa.me deep link.
pub async fn whatsapp(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ContactForm>,
) -> Result<Json<LinkResponse>, (StatusCode, String)> {
    form.whatsapp_url(&state.contact)
        .map(|url| Json(LinkResponse { url }))
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))
}

/// Handle POST /api/contact/mailto - build the mailto URI.
pub async fn mailto(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ContactForm>,
) -> Result<Json<LinkResponse>, (StatusCode, String)> {
    form.mailto_url(&state.contact)
        .map(|url| Json(LinkResponse { url }))
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::ServerConfig;

    fn state() -> State<Arc<AppState>> {
        State(Arc::new(AppState::new(ServerConfig {
            listen_addr: "127.0.0.1:0".into(),
        })))
    }

    #[tokio::test]
    async fn test_whatsapp_rejects_missing_fields() {
        let result = whatsapp(state(), Json(ContactForm::default())).await;
        let (status, message) = result.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(message.contains("Please fill in all required fields"));
    }

    #[tokio::test]
    async fn test_mailto_builds_link() {
        let form = ContactForm {
            name: "Jo".into(),
            email: "jo@example.com".into(),
            message: "hi".into(),
            ..Default::default()
        };
        let Json(link) = mailto(state(), Json(form)).await.unwrap();
        assert!(link.url.starts_with("mailto:"));
    }
}
