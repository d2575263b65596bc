//! Guide listing view.
//!
//! Search text, active category and sort order are request state: they come
//! in with each [`ListingQuery`] and are never stored on the site.

use oa_catalog::{CategoryFilter, Guide, SortOrder};
use serde::Deserialize;

/// Listing parameters as received from a query string (`?q=&category=&sort=`).
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ListingQuery {
    /// Free-text search.
    pub q: Option<String>,
    /// Category label or `All`.
    pub category: Option<String>,
    /// `catalog` or `recent`.
    pub sort: Option<String>,
}

impl ListingQuery {
    /// Trimmed search text (empty when absent).
    #[must_use]
    pub fn text(&self) -> &str {
        self.q.as_deref().map_or("", str::trim)
    }

    /// Category filter; unknown labels fall back to `All`.
    #[must_use]
    pub fn category_filter(&self) -> CategoryFilter {
        match self.category.as_deref().filter(|c| !c.trim().is_empty()) {
            None => CategoryFilter::All,
            Some(raw) => raw.parse::<CategoryFilter>().unwrap_or_else(|err| {
                tracing::warn!(category = %raw, error = %err, "Ignoring unknown category filter");
                CategoryFilter::All
            }),
        }
    }

    /// Sort order, or `default` when absent or unknown.
    #[must_use]
    pub fn sort_order(&self, default: SortOrder) -> SortOrder {
        match self.sort.as_deref().filter(|s| !s.trim().is_empty()) {
            None => default,
            Some(raw) => raw.parse::<SortOrder>().unwrap_or_else(|err| {
                tracing::warn!(sort = %raw, error = %err, "Ignoring unknown sort order");
                default
            }),
        }
    }
}

/// Filtered guides, split into featured and the rest.
#[derive(Debug)]
pub struct Listing<'a> {
    /// Search text the listing was built for.
    pub query: String,
    /// Active category.
    pub category: CategoryFilter,
    /// Applied order.
    pub order: SortOrder,
    /// Featured matches.
    pub featured: Vec<&'a Guide>,
    /// Non-featured matches; never repeats a featured guide.
    pub guides: Vec<&'a Guide>,
}

impl Listing<'_> {
    /// Total number of matches.
    #[must_use]
    pub fn total(&self) -> usize {
        self.featured.len() + self.guides.len()
    }

    /// "Showing N guide(s)." line.
    #[must_use]
    pub fn summary(&self) -> String {
        let total = self.total();
        let plural = if total == 1 { "" } else { "s" };
        format!("Showing {total} guide{plural}.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oa_catalog::GuideCategory;
    use pretty_assertions::assert_eq;

    fn query(q: Option<&str>, category: Option<&str>, sort: Option<&str>) -> ListingQuery {
        ListingQuery {
            q: q.map(str::to_owned),
            category: category.map(str::to_owned),
            sort: sort.map(str::to_owned),
        }
    }

    #[test]
    fn test_text_trims() {
        assert_eq!(query(Some("  visa "), None, None).text(), "visa");
        assert_eq!(query(None, None, None).text(), "");
    }

    #[test]
    fn test_category_filter() {
        assert_eq!(query(None, None, None).category_filter(), CategoryFilter::All);
        assert_eq!(query(None, Some(""), None).category_filter(), CategoryFilter::All);
        assert_eq!(query(None, Some("All"), None).category_filter(), CategoryFilter::All);
        assert_eq!(
            query(None, Some("essays"), None).category_filter(),
            CategoryFilter::Only(GuideCategory::Essays)
        );
        assert_eq!(query(None, Some("Housing"), None).category_filter(), CategoryFilter::All);
    }

    #[test]
    fn test_sort_order() {
        assert_eq!(query(None, None, None).sort_order(SortOrder::Recent), SortOrder::Recent);
        assert_eq!(
            query(None, None, Some("recent")).sort_order(SortOrder::Catalog),
            SortOrder::Recent
        );
        assert_eq!(
            query(None, None, Some("bogus")).sort_order(SortOrder::Catalog),
            SortOrder::Catalog
        );
    }

    #[test]
    fn test_summary_pluralization() {
        let catalog = oa_catalog::builtin().unwrap();
        let guides = catalog.guides();
        let empty = Listing {
            query: String::new(),
            category: CategoryFilter::All,
            order: SortOrder::Catalog,
            featured: Vec::new(),
            guides: Vec::new(),
        };

        assert_eq!(empty.summary(), "Showing 0 guides.");

        let one = Listing {
            guides: vec![&guides[0]],
            ..empty
        };
        assert_eq!(one.summary(), "Showing 1 guide.");

        let two = Listing {
            featured: vec![&guides[1]],
            ..one
        };
        assert_eq!(two.summary(), "Showing 2 guides.");
    }
}
