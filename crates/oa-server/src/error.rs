//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// No page at the requested path. Carries the rendered not-found page.
    #[error("Page not found: {path}")]
    PageNotFound { path: String, html: String },

    /// Unknown guide slug on the JSON API.
    #[error("Guide not found: {0}")]
    GuideNotFound(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Request failed");
        match self {
            Self::PageNotFound { html, .. } => (StatusCode::NOT_FOUND, Html(html)).into_response(),
            Self::GuideNotFound(slug) => (
                StatusCode::NOT_FOUND,
                axum::Json(json!({"error": "Guide not found", "slug": slug})),
            )
                .into_response(),
        }
    }
}
