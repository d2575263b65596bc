//! HTML page handlers.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::Uri;
use axum::response::Html;
use oa_site::{ListingQuery, Route};

use crate::error::ServerError;
use crate::state::AppState;

fn render(state: &AppState, route: &Route) -> Result<Html<String>, ServerError> {
    state.site.render(route).map(Html).ok_or_else(|| ServerError::PageNotFound {
        path: route.path(),
        html: state.site.render_not_found(&route.path()),
    })
}

/// Handle GET /.
pub(crate) async fn home(State(state): State<Arc<AppState>>) -> Result<Html<String>, ServerError> {
    render(&state, &Route::Home)
}

/// Handle GET /about.
pub(crate) async fn about(State(state): State<Arc<AppState>>) -> Result<Html<String>, ServerError> {
    render(&state, &Route::About)
}

/// Handle GET /resources.
pub(crate) async fn resources(State(state): State<Arc<AppState>>) -> Result<Html<String>, ServerError> {
    render(&state, &Route::Resources)
}

/// Handle GET /community.
pub(crate) async fn community(State(state): State<Arc<AppState>>) -> Result<Html<String>, ServerError> {
    render(&state, &Route::Community)
}

/// Handle GET /guides.
pub(crate) async fn listing(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListingQuery>,
) -> Html<String> {
    Html(state.site.render_listing(&query))
}

/// Fallback for unknown paths.
pub(crate) async fn not_found(State(state): State<Arc<AppState>>, uri: Uri) -> ServerError {
    let path = uri.path().to_owned();
    ServerError::PageNotFound {
        html: state.site.render_not_found(&path),
        path,
    }
}
