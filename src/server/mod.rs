//! # HTTP Server for Receipt Previews and Exports
//!
//! Provides a JSON/PNG API over the template catalogue, the renderer,
//! the exporter, and the contact link builders.
//!
//! ## Usage
//!
//! ```bash
//! recibo serve --listen 0.0.0.0:8080
//! ```

mod handlers;
mod state;

pub use state::ServerConfig;

use axum::{
    Router,
    extract::State,
    response::Html,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::error::ReciboError;
use state::AppState;

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use recibo::server::{ServerConfig, serve};
///
/// # async fn example() -> Result<(), recibo::error::ReciboError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), ReciboError> {
    let app_state = Arc::new(AppState::new(config.clone()));

    let app = Router::new()
        // Frontend
        .route("/", get(index_handler))
        // Template API
        .route("/api/templates", get(handlers::templates::list))
        .route("/api/templates/:id", get(handlers::templates::get))
        // Receipt API
        .route(
            "/api/receipt/preview",
            get(handlers::receipt::preview_template).post(handlers::receipt::preview),
        )
        .route("/api/receipt/export", post(handlers::receipt::export))
        // Contact API
        .route("/api/contact/whatsapp", post(handlers::contact::whatsapp))
        .route("/api/contact/mailto", post(handlers::contact::mailto))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    tracing::info!(listen_addr = %config.listen_addr, "recibo HTTP server starting");

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            ReciboError::Server(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    axum::serve(listener, app)
        .await
        .map_err(|e| ReciboError::Server(format!("Server error: {e}")))?;

    Ok(())
}

/// Handle GET / - minimal index describing the API surface.
///
/// Preview links carry the boot time as a cache-busting parameter.
async fn index_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    let mut template_links = String::new();
    for entry in crate::template::catalogue() {
        template_links.push_str(&format!(
            "<li><a href=\"/api/receipt/preview?template={}&v={}\">{}</a></li>\n",
            entry.id, state.boot_time, entry.title
        ));
    }

    Html(format!(
        r#"<!doctype html>
<html>
<head><title>recibo</title></head>
<body>
<h1>recibo</h1>
<p>Receipt mockup renderer listening on {}. Endpoints:</p>
<ul>
<li>GET  /api/templates</li>
<li>GET  /api/templates/:id</li>
<li>GET  /api/receipt/preview?template=&lt;id&gt;</li>
<li>POST /api/receipt/preview</li>
<li>POST /api/receipt/export</li>
<li>POST /api/contact/whatsapp</li>
<li>POST /api/contact/mailto</li>
</ul>
<p>Template previews:</p>
<ul>
{}</ul>
</body>
</html>
"#,
        state.config.listen_addr, template_links
    ))
}
