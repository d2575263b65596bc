//! Embedded stylesheet serving.

use std::sync::Arc;

use axum::Router;
use axum::extract::Path;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use crate::state::AppState;

pub(crate) fn static_router() -> Router<Arc<AppState>> {
    Router::new().route("/assets/{*path}", get(serve_asset))
}

async fn serve_asset(Path(path): Path<String>) -> Response {
    let path = format!("assets/{path}");
    match oa_site::assets::get(&path) {
        Some(content) => (
            [
                (header::CONTENT_TYPE, oa_site::assets::mime_for(&path)),
                (header::CACHE_CONTROL, "public, max-age=3600"),
            ],
            content,
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
