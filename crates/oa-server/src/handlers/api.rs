//! Guides JSON API.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use chrono::NaiveDate;
use oa_catalog::{Guide, GuideCategory, SortOrder};
use oa_renderer::TocItem;
use oa_site::ListingQuery;
use serde::Serialize;

use crate::error::ServerError;
use crate::handlers::{compute_etag, is_not_modified};
use crate::state::AppState;

/// Guide without its markdown body.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GuideSummary<'a> {
    slug: &'a str,
    title: &'a str,
    description: &'a str,
    category: GuideCategory,
    tags: &'a [String],
    /// Displayed reading time.
    minutes: u32,
    updated: NaiveDate,
    featured: bool,
    path: String,
}

impl<'a> GuideSummary<'a> {
    fn new(guide: &'a Guide, minutes: u32) -> Self {
        Self {
            slug: &guide.slug,
            title: &guide.title,
            description: &guide.description,
            category: guide.category,
            tags: &guide.tags,
            minutes,
            updated: guide.updated,
            featured: guide.featured,
            path: format!("/guides/{}", guide.slug),
        }
    }
}

/// Response for GET /api/guides.
#[derive(Serialize)]
struct GuideListResponse<'a> {
    query: &'a str,
    category: &'static str,
    sort: SortOrder,
    total: usize,
    guides: Vec<GuideSummary<'a>>,
}

/// Response for GET /api/guides/{slug}.
#[derive(Serialize)]
struct GuideDetailResponse<'a> {
    guide: &'a Guide,
    html: String,
    toc: Vec<TocItem>,
    related: Vec<GuideSummary<'a>>,
    minutes: u32,
}

/// Handle GET /api/guides.
///
/// Same filters as the listing page; featured guides come first.
pub(crate) async fn list_guides(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListingQuery>,
) -> Response {
    let site = &state.site;
    let listing = site.listing(&query);
    let guides = listing
        .featured
        .iter()
        .chain(&listing.guides)
        .copied()
        .map(|g| GuideSummary::new(g, site.display_minutes(g)))
        .collect();

    Json(GuideListResponse {
        query: &listing.query,
        category: listing.category.label(),
        sort: listing.order,
        total: listing.total(),
        guides,
    })
    .into_response()
}

/// Handle GET /api/guides/{slug}.
pub(crate) async fn get_guide(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let site = &state.site;
    let page = site
        .guide_page(&slug)
        .ok_or_else(|| ServerError::GuideNotFound(slug.clone()))?;

    let etag = compute_etag(&state.version, &page.html);
    if is_not_modified(&headers, &etag) {
        return Ok((StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response());
    }

    let response = GuideDetailResponse {
        guide: page.guide,
        related: page
            .related
            .iter()
            .copied()
            .map(|g| GuideSummary::new(g, site.display_minutes(g)))
            .collect(),
        html: page.html,
        toc: page.toc,
        minutes: page.minutes,
    };

    Ok(([(header::ETAG, etag)], Json(response)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use oa_catalog::builtin;

    #[test]
    fn test_guide_summary_serialization() {
        let catalog = builtin().unwrap();
        let guide = catalog.find_by_slug("css-profile").unwrap();

        let json = serde_json::to_value(GuideSummary::new(guide, 7)).unwrap();

        assert_eq!(json["slug"], "css-profile");
        assert_eq!(json["category"], "Finance");
        assert_eq!(json["minutes"], 7);
        assert_eq!(json["updated"], "2025-12-21");
        assert_eq!(json["featured"], false);
        assert_eq!(json["path"], "/guides/css-profile");
        assert!(json.get("content").is_none());
    }
}
