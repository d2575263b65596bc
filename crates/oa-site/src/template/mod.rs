//! HTML templates.
//!
//! Pages are assembled with `String` and `write!`. Every piece of catalog
//! text goes through [`escape_html`]; only renderer output is inserted raw.

pub(crate) mod guides;
pub(crate) mod pages;

use std::fmt::Write;

use oa_catalog::{CategoryFilter, Guide, SortOrder};
use oa_renderer::escape_html;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::assets::STYLESHEET_PATH;
use crate::route::Route;

pub(crate) const SITE_NAME: &str = "OpenApply";

const SITE_DESCRIPTION: &str = "A free, global platform helping international students apply to U.S. universities and scholarships.";

/// Unreserved characters stay as-is in query values.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const NAVIGATION: [(&str, Route); 4] = [
    ("Guides", Route::Guides),
    ("Resources", Route::Resources),
    ("Community", Route::Community),
    ("About", Route::About),
];

/// Whether nav entry `entry` is the current section for `active`.
fn is_current(entry: &Route, active: Option<&Route>) -> bool {
    match (entry, active) {
        (Route::Guides, Some(Route::Guides | Route::Guide(_))) => true,
        (entry, Some(active)) => entry == active,
        (_, None) => false,
    }
}

/// Wrap page content in the shared layout.
pub(crate) fn layout(title: Option<&str>, active: Option<&Route>, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + 2048);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    match title {
        Some(title) => {
            let _ = writeln!(html, "<title>{} · {SITE_NAME}</title>", escape_html(title));
        }
        None => {
            let _ = writeln!(html, "<title>{SITE_NAME}</title>");
        }
    }
    let _ = writeln!(html, "<meta name=\"description\" content=\"{SITE_DESCRIPTION}\">");
    let _ = writeln!(html, "<link rel=\"stylesheet\" href=\"{STYLESHEET_PATH}\">");
    html.push_str("</head>\n<body>\n");

    html.push_str("<header class=\"site-header\">\n<div class=\"container header-row\">\n");
    let _ = writeln!(html, "<a href=\"/\" class=\"brand\">{SITE_NAME}</a>");
    html.push_str("<nav class=\"site-nav\">\n");
    for (label, route) in &NAVIGATION {
        let current = if is_current(route, active) {
            " aria-current=\"page\""
        } else {
            ""
        };
        let _ = writeln!(html, "<a href=\"{}\"{current}>{label}</a>", route.path());
    }
    html.push_str("</nav>\n");
    html.push_str("<a href=\"/community\" class=\"button button-outline\">Sign in</a>\n");
    html.push_str("</div>\n</header>\n");

    html.push_str("<main>\n");
    html.push_str(body);
    html.push_str("</main>\n");

    html.push_str("<footer class=\"site-footer\">\n<div class=\"container footer-row\">\n");
    html.push_str("<p>OpenApply is a free, community-first platform for global access.</p>\n");
    html.push_str("<div class=\"footer-links\">\n");
    for (label, route) in &NAVIGATION {
        let _ = writeln!(html, "<a href=\"{}\">{label}</a>", route.path());
    }
    html.push_str("</div>\n</div>\n</footer>\n");
    html.push_str("</body>\n</html>\n");
    html
}

/// Link to the listing page with the given filters. Empty or default values
/// are left out of the query string.
pub(crate) fn listing_href(query: &str, category: CategoryFilter, sort: Option<SortOrder>) -> String {
    let mut params = Vec::new();
    if !query.is_empty() {
        params.push(format!("q={}", utf8_percent_encode(query, QUERY_ENCODE_SET)));
    }
    if let CategoryFilter::Only(category) = category {
        params.push(format!(
            "category={}",
            utf8_percent_encode(category.label(), QUERY_ENCODE_SET)
        ));
    }
    if let Some(sort) = sort {
        params.push(format!("sort={}", sort.as_str()));
    }

    if params.is_empty() {
        Route::Guides.path()
    } else {
        format!("{}?{}", Route::Guides.path(), params.join("&amp;"))
    }
}

/// Tag pills.
pub(crate) fn tag_list(html: &mut String, tags: &[String]) {
    if tags.is_empty() {
        return;
    }
    html.push_str("<ul class=\"tags\">\n");
    for tag in tags {
        let _ = writeln!(html, "<li class=\"tag\">{}</li>", escape_html(tag));
    }
    html.push_str("</ul>\n");
}

/// Card linking to a guide.
pub(crate) fn guide_card(html: &mut String, guide: &Guide, minutes: u32) {
    let _ = writeln!(
        html,
        "<a class=\"card guide-card\" href=\"{}\">",
        Route::Guide(guide.slug.clone()).path()
    );
    let _ = writeln!(html, "<div class=\"eyebrow\">{}</div>", guide.category.label());
    let _ = writeln!(html, "<h3>{}</h3>", escape_html(&guide.title));
    let _ = writeln!(html, "<p class=\"muted\">{}</p>", escape_html(&guide.description));
    tag_list(html, &guide.tags);
    let _ = writeln!(
        html,
        "<div class=\"meta\">~{minutes} min • Updated {}</div>",
        guide.updated_display()
    );
    html.push_str("</a>\n");
}

/// Title/description card without a link.
pub(crate) fn info_card(html: &mut String, title: &str, description: &str) {
    html.push_str("<div class=\"card\">\n");
    let _ = writeln!(html, "<h3>{title}</h3>");
    let _ = writeln!(html, "<p class=\"muted\">{description}</p>");
    html.push_str("</div>\n");
}
