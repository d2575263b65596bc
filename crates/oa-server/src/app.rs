//! Router construction.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;
use crate::static_files;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/guides", get(handlers::api::list_guides))
        .route("/api/guides/{slug}", get(handlers::api::get_guide));

    let page_routes = Router::new()
        .route("/", get(handlers::pages::home))
        .route("/guides", get(handlers::pages::listing))
        .route("/guides/{slug}", get(handlers::guides::get_guide))
        .route("/about", get(handlers::pages::about))
        .route("/resources", get(handlers::pages::resources))
        .route("/community", get(handlers::pages::community));

    Router::new()
        .merge(api_routes)
        .merge(page_routes)
        .merge(static_files::static_router())
        .fallback(handlers::pages::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}
