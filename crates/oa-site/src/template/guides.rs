//! Listing, detail and not-found pages.

use std::fmt::Write;

use oa_catalog::CategoryFilter;
use oa_renderer::escape_html;

use super::{guide_card, layout, listing_href, tag_list};
use crate::listing::Listing;
use crate::route::Route;
use crate::site::{GuidePage, Site};

const EMPTY_MESSAGE: &str = "No guides match your search. Try a different keyword or category.";

pub(crate) fn listing(site: &Site, listing: &Listing<'_>) -> String {
    let mut html = String::with_capacity(16384);
    // Carry a non-default order through category and search links.
    let sort = (listing.order != site.options().order).then_some(listing.order);

    html.push_str("<div class=\"container page\">\n");
    html.push_str("<span class=\"pill\">Guides <span class=\"muted\">categories + search</span></span>\n");
    html.push_str("<h1>Guides for admissions, scholarships, and life in the U.S.</h1>\n");
    html.push_str(
        "<p class=\"lead\">Search by keyword, filter by category, and build your plan step-by-step.</p>\n",
    );

    // Search form
    html.push_str("<form class=\"search\" method=\"get\" action=\"/guides\">\n");
    let _ = writeln!(
        html,
        "<input type=\"search\" name=\"q\" value=\"{}\" \
         placeholder=\"Search guides (e.g., essays, visa, checklist, funding)...\">",
        escape_html(&listing.query)
    );
    if let CategoryFilter::Only(category) = listing.category {
        let _ = writeln!(
            html,
            "<input type=\"hidden\" name=\"category\" value=\"{}\">",
            category.label()
        );
    }
    if let Some(sort) = sort {
        let _ = writeln!(html, "<input type=\"hidden\" name=\"sort\" value=\"{}\">", sort.as_str());
    }
    html.push_str("<button type=\"submit\" class=\"button\">Search</button>\n</form>\n");

    // Category bar
    html.push_str("<nav class=\"categories\">\n");
    for option in CategoryFilter::OPTIONS {
        let current = if option == listing.category {
            " aria-current=\"true\""
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "<a class=\"chip\" href=\"{}\"{current}>{}</a>",
            listing_href(&listing.query, option, sort),
            option.label()
        );
    }
    html.push_str("</nav>\n");

    let _ = writeln!(html, "<p class=\"meta\">{}</p>", listing.summary());

    if !listing.featured.is_empty() {
        html.push_str("<section class=\"section\">\n<h2>Featured</h2>\n<div class=\"grid grid-2\">\n");
        for guide in &listing.featured {
            guide_card(&mut html, guide, site.display_minutes(guide));
        }
        html.push_str("</div>\n</section>\n");
    }

    html.push_str("<section class=\"section\">\n<h2>All guides</h2>\n");
    if listing.guides.is_empty() {
        let _ = writeln!(html, "<div class=\"card empty\">{EMPTY_MESSAGE}</div>");
    } else {
        html.push_str("<div class=\"grid grid-3\">\n");
        for guide in &listing.guides {
            guide_card(&mut html, guide, site.display_minutes(guide));
        }
        html.push_str("</div>\n");
    }
    html.push_str("</section>\n</div>\n");

    layout(Some("Guides"), Some(&Route::Guides), &html)
}

pub(crate) fn detail(site: &Site, page: &GuidePage<'_>) -> String {
    let guide = page.guide;
    let mut html = String::with_capacity(page.html.len() + 4096);

    html.push_str("<div class=\"container page detail\">\n");
    html.push_str("<a class=\"back\" href=\"/guides\">← Back to guides</a>\n");
    html.push_str("<div class=\"detail-layout\">\n");

    // Article
    html.push_str("<article class=\"card article\">\n<div class=\"meta-row\">\n");
    let _ = writeln!(html, "<span class=\"badge\">{}</span>", guide.category.label());
    let _ = writeln!(html, "<span>~{} min</span>", page.minutes);
    let _ = writeln!(html, "<span>Updated {}</span>", guide.updated_display());
    html.push_str("</div>\n");
    let _ = writeln!(html, "<h1>{}</h1>", escape_html(&guide.title));
    let _ = writeln!(html, "<p class=\"lead\">{}</p>", escape_html(&guide.description));
    tag_list(&mut html, &guide.tags);
    html.push_str("<div class=\"prose\">\n");
    html.push_str(&page.html);
    html.push_str("\n</div>\n</article>\n");

    // Sidebar
    html.push_str("<aside class=\"sidebar\">\n");
    html.push_str("<div class=\"card toc\">\n<h2>On this page</h2>\n");
    if page.toc.is_empty() {
        html.push_str("<p class=\"muted\">No sections</p>\n");
    } else {
        html.push_str("<ul>\n");
        for item in &page.toc {
            let _ = writeln!(
                html,
                "<li class=\"toc-h{}\"><a href=\"#{}\">{}</a></li>",
                item.level.as_u8(),
                item.id,
                escape_html(&item.text)
            );
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</div>\n");

    if !page.related.is_empty() {
        html.push_str("<div class=\"card related\">\n<h2>Related guides</h2>\n<ul>\n");
        for related in &page.related {
            let _ = writeln!(
                html,
                "<li><a href=\"{}\">{}</a><span class=\"meta\">{} • ~{} min</span></li>",
                Route::Guide(related.slug.clone()).path(),
                escape_html(&related.title),
                related.category.label(),
                site.display_minutes(related)
            );
        }
        html.push_str("</ul>\n</div>\n");
    }
    html.push_str("</aside>\n</div>\n</div>\n");

    layout(
        Some(guide.title.as_str()),
        Some(&Route::Guide(guide.slug.clone())),
        &html,
    )
}

pub(crate) fn not_found(path: &str) -> String {
    let mut html = String::with_capacity(1024);

    html.push_str("<div class=\"container page not-found\">\n");
    html.push_str("<h1>Page not found</h1>\n");
    let _ = writeln!(
        html,
        "<p class=\"lead\">Nothing lives at <code>{}</code>.</p>",
        escape_html(path)
    );
    html.push_str("<a class=\"button\" href=\"/guides\">Browse all guides</a>\n</div>\n");

    layout(Some("Not found"), None, &html)
}

#[cfg(test)]
mod tests {
    use oa_catalog::builtin;

    use crate::listing::ListingQuery;
    use crate::site::{Site, SiteOptions};

    fn site() -> Site {
        Site::new(builtin().unwrap(), SiteOptions::default())
    }

    fn query(q: &str, category: &str) -> ListingQuery {
        ListingQuery {
            q: Some(q.to_owned()),
            category: Some(category.to_owned()),
            sort: None,
        }
    }

    #[test]
    fn test_listing_page_sections() {
        let html = site().render_listing(&ListingQuery::default());

        assert!(html.contains("<h2>Featured</h2>"));
        assert!(html.contains("<h2>All guides</h2>"));
        assert!(html.contains("Showing 7 guides."));
        assert_eq!(html.matches(r#"href="/guides/scholarship-strategy""#).count(), 1);
        assert!(html.contains(r#"<a class="chip" href="/guides" aria-current="true">All</a>"#));
    }

    #[test]
    fn test_listing_page_empty_state() {
        let html = site().render_listing(&query("zzz", "All"));

        assert!(html.contains("Showing 0 guides."));
        assert!(html.contains("No guides match your search. Try a different keyword or category."));
        assert!(!html.contains("<h2>Featured</h2>"));
    }

    #[test]
    fn test_listing_page_only_featured_matches() {
        let html = site().render_listing(&query("funding", "All"));

        assert!(html.contains("Showing 1 guide."));
        assert!(html.contains("<h2>Featured</h2>"));
        assert!(html.contains("No guides match your search."));
    }

    #[test]
    fn test_listing_page_keeps_query_in_links_and_form() {
        let html = site().render_listing(&query("<visa>", "Visa"));

        assert!(html.contains(r#"value="&lt;visa&gt;""#));
        assert!(html.contains(r#"<input type="hidden" name="category" value="Visa">"#));
        assert!(html.contains(r#"href="/guides?q=%3Cvisa%3E&amp;category=Visa" aria-current="true""#));
    }

    #[test]
    fn test_detail_page() {
        let html = site().render_guide("interview-prep").unwrap();

        assert!(html.contains("← Back to guides"));
        assert!(html.contains(r#"<span class="badge">Interviews</span>"#));
        assert!(html.contains("<span>~12 min</span>"));
        assert!(html.contains("<span>Updated Dec 23, 2025</span>"));
        assert!(html.contains("How to answer &quot;Tell me about yourself&quot;"));
        assert!(html.contains(r##"<a href="#tell-me-about-yourself-3060s">"##));
        assert!(html.contains(r#"<h2 id="tell-me-about-yourself-3060s">"#));
        assert!(html.contains("Related guides"));
        assert!(html.contains(r#"<a href="/guides" aria-current="page">Guides</a>"#));
    }

    #[test]
    fn test_detail_page_without_headings() {
        let catalog = oa_catalog::Catalog::from_entries(&[oa_catalog::GuideEntry {
            slug: "flat",
            title: "Flat",
            description: "",
            category: oa_catalog::GuideCategory::Visa,
            tags: &[],
            minutes: 1,
            updated: "2025-01-01",
            featured: false,
            content: "Just a paragraph.",
        }])
        .unwrap();
        let site = Site::new(catalog, SiteOptions::default());
        let html = site.render_guide("flat").unwrap();

        assert!(html.contains("No sections"));
        assert!(!html.contains("Related guides"));
        assert!(html.contains("<p>Just a paragraph.</p>"));
    }

    #[test]
    fn test_not_found_page_escapes_path() {
        let html = site().render_not_found("/guides/<script>");

        assert!(html.contains("Page not found"));
        assert!(html.contains("/guides/&lt;script&gt;"));
        assert!(html.contains(r#"href="/guides""#));
    }
}
