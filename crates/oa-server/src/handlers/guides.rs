//! Guide detail page.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use chrono::{NaiveDate, NaiveTime};

use crate::error::ServerError;
use crate::handlers::{compute_etag, is_not_modified};
use crate::state::AppState;

/// Handle GET /guides/{slug}.
pub(crate) async fn get_guide(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let Some(page) = state.site.guide_page(&slug) else {
        let path = format!("/guides/{slug}");
        return Err(ServerError::PageNotFound {
            html: state.site.render_not_found(&path),
            path,
        });
    };
    let html = state.site.render_guide_page(&page);

    let etag = compute_etag(&state.version, &html);
    if is_not_modified(&headers, &etag) {
        return Ok((StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response());
    }

    Ok((
        [
            (header::ETAG, etag),
            (header::LAST_MODIFIED, http_date(page.guide.updated)),
            (header::CACHE_CONTROL, "public, max-age=60".to_owned()),
        ],
        Html(html),
    )
        .into_response())
}

/// Format a date as an HTTP date at midnight UTC.
pub(crate) fn http_date(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}
