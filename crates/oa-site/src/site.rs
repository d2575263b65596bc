//! Site: catalog plus presentation options.
//!
//! [`Site`] is immutable after construction and holds no request state, so
//! one instance serves every request (or the whole static build).

use oa_catalog::{Catalog, DEFAULT_RELATED_LIMIT, Guide, ReadingTime, SortOrder};
use oa_renderer::{TocItem, reading_time, render_document};

use crate::listing::{Listing, ListingQuery};
use crate::route::Route;
use crate::template;

/// Presentation options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteOptions {
    /// Maximum related guides on a detail page.
    pub related_limit: usize,
    /// Listing order when the request does not ask for one.
    pub order: SortOrder,
    /// Reading time source.
    pub reading_time: ReadingTime,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            related_limit: DEFAULT_RELATED_LIMIT,
            order: SortOrder::Catalog,
            reading_time: ReadingTime::Authored,
        }
    }
}

/// Everything shown on a guide detail page.
#[derive(Debug)]
pub struct GuidePage<'a> {
    pub guide: &'a Guide,
    /// Rendered body.
    pub html: String,
    /// Body headings; may be empty.
    pub toc: Vec<TocItem>,
    /// Related guides, best first.
    pub related: Vec<&'a Guide>,
    /// Reading time to display.
    pub minutes: u32,
}

/// The guides site.
#[derive(Debug)]
pub struct Site {
    catalog: Catalog,
    options: SiteOptions,
}

impl Site {
    /// Create a site over a catalog.
    #[must_use]
    pub fn new(catalog: Catalog, options: SiteOptions) -> Self {
        Self { catalog, options }
    }

    /// The underlying catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Presentation options.
    #[must_use]
    pub fn options(&self) -> &SiteOptions {
        &self.options
    }

    /// Reading time to display for a guide.
    #[must_use]
    pub fn display_minutes(&self, guide: &Guide) -> u32 {
        match self.options.reading_time {
            ReadingTime::Authored => guide.minutes,
            ReadingTime::Derived => reading_time(&guide.content),
        }
    }

    /// Filter the catalog for the listing page.
    #[must_use]
    pub fn listing(&self, query: &ListingQuery) -> Listing<'_> {
        let text = query.text();
        let category = query.category_filter();
        let order = query.sort_order(self.options.order);

        let (featured, guides) = self
            .catalog
            .filter_sorted(text, category, order)
            .into_iter()
            .partition(|g| g.featured);

        Listing {
            query: text.to_owned(),
            category,
            order,
            featured,
            guides,
        }
    }

    /// Assemble the detail page for `slug`, or `None` if no such guide.
    #[must_use]
    pub fn guide_page(&self, slug: &str) -> Option<GuidePage<'_>> {
        let guide = self.catalog.find_by_slug(slug)?;
        let document = render_document(&guide.content);
        let minutes = match self.options.reading_time {
            ReadingTime::Authored => guide.minutes,
            ReadingTime::Derived => document.minutes,
        };

        tracing::debug!(slug, headings = document.toc.len(), "Rendered guide");

        Some(GuidePage {
            guide,
            html: document.html,
            toc: document.toc,
            related: self.catalog.related(slug, self.options.related_limit),
            minutes,
        })
    }

    /// Every navigable route, guides in catalog order.
    #[must_use]
    pub fn routes(&self) -> Vec<Route> {
        let mut routes = vec![Route::Home, Route::Guides];
        routes.extend(
            self.catalog
                .guides()
                .iter()
                .map(|g| Route::Guide(g.slug.clone())),
        );
        routes.extend([Route::About, Route::Resources, Route::Community]);
        routes
    }

    /// Render a full HTML page for a route.
    ///
    /// Returns `None` for a guide route whose slug is not in the catalog.
    /// The guides listing is rendered unfiltered.
    #[must_use]
    pub fn render(&self, route: &Route) -> Option<String> {
        let html = match route {
            Route::Home => template::pages::home(self),
            Route::Guides => self.render_listing(&ListingQuery::default()),
            Route::Guide(slug) => return self.render_guide(slug),
            Route::About => template::pages::about(),
            Route::Resources => template::pages::resources(),
            Route::Community => template::pages::community(),
        };
        Some(html)
    }

    /// Render the listing page for a query.
    #[must_use]
    pub fn render_listing(&self, query: &ListingQuery) -> String {
        template::guides::listing(self, &self.listing(query))
    }

    /// Render a guide detail page, or `None` if the slug is unknown.
    #[must_use]
    pub fn render_guide(&self, slug: &str) -> Option<String> {
        self.guide_page(slug).map(|page| self.render_guide_page(&page))
    }

    /// Render the detail page for an already assembled [`GuidePage`].
    #[must_use]
    pub fn render_guide_page(&self, page: &GuidePage<'_>) -> String {
        template::guides::detail(self, page)
    }

    /// Render the not-found page for a requested path.
    #[must_use]
    pub fn render_not_found(&self, path: &str) -> String {
        template::guides::not_found(path)
    }
}
