//! Read-only guide catalog and its queries.
//!
//! The catalog is built once and never mutated. All queries borrow from it
//! and are pure, so a single instance can be shared freely across threads.

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::guide::{CategoryFilter, Guide, GuideEntry};

/// Default number of related guides shown on a detail page.
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Score for sharing a category.
const CATEGORY_SCORE: u32 = 2;

/// Score per distinct shared tag.
const TAG_SCORE: u32 = 1;

/// Listing order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Order as authored.
    #[default]
    Catalog,
    /// Most recently updated first; ties keep catalog order.
    Recent,
}

/// Where displayed reading times come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingTime {
    /// Use the authored `minutes`.
    #[default]
    Authored,
    /// Estimate from the guide content.
    Derived,
}

impl SortOrder {
    /// Query-string value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Catalog => "catalog",
            Self::Recent => "recent",
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "catalog" => Ok(Self::Catalog),
            "recent" => Ok(Self::Recent),
            other => Err(format!("unknown sort order: {other}")),
        }
    }
}

/// Validated, ordered collection of guides.
#[derive(Clone, Debug)]
pub struct Catalog {
    guides: Vec<Guide>,
}

impl Catalog {
    /// Build a catalog, validating every guide.
    ///
    /// # Errors
    ///
    /// Returns the first authoring defect found: invalid or duplicate slug,
    /// empty title, or zero minutes.
    pub fn new(guides: Vec<Guide>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(guides.len());
        for guide in &guides {
            validate(guide)?;
            if !seen.insert(guide.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(guide.slug.clone()));
            }
        }
        Ok(Self { guides })
    }

    /// Build a catalog from source literals.
    ///
    /// # Errors
    ///
    /// Returns an error if a date fails to parse or validation fails.
    pub fn from_entries(entries: &[GuideEntry]) -> Result<Self, CatalogError> {
        let guides = entries
            .iter()
            .map(Guide::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(guides)
    }

    /// All guides in catalog order.
    #[must_use]
    pub fn guides(&self) -> &[Guide] {
        &self.guides
    }

    /// Number of guides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.guides.len()
    }

    /// Whether the catalog has no guides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guides.is_empty()
    }

    /// Look up a guide by slug.
    #[must_use]
    pub fn find_by_slug(&self, slug: &str) -> Option<&Guide> {
        self.guides.iter().find(|g| g.slug == slug)
    }

    /// Guides matching a free-text query and category, in catalog order.
    ///
    /// The query is trimmed and matched case-insensitively as a substring of
    /// title, description, category label and tags. An empty query matches
    /// every guide.
    #[must_use]
    pub fn filter(&self, query: &str, category: CategoryFilter) -> Vec<&Guide> {
        let needle = query.trim().to_lowercase();
        self.guides
            .iter()
            .filter(|g| category.matches(g.category) && g.matches_query(&needle))
            .collect()
    }

    /// Like [`filter`](Self::filter), then ordered by `order`.
    #[must_use]
    pub fn filter_sorted(
        &self,
        query: &str,
        category: CategoryFilter,
        order: SortOrder,
    ) -> Vec<&Guide> {
        let mut guides = self.filter(query, category);
        if order == SortOrder::Recent {
            guides.sort_by(|a, b| b.updated.cmp(&a.updated));
        }
        guides
    }

    /// Guides related to `slug`, best first, at most `limit` of them.
    ///
    /// Scored by [`relevance`]; equal scores keep catalog order. The guide
    /// itself is never included. Unknown slugs yield an empty list.
    #[must_use]
    pub fn related(&self, slug: &str, limit: usize) -> Vec<&Guide> {
        let Some(source) = self.find_by_slug(slug) else {
            return Vec::new();
        };

        let mut scored: Vec<(u32, &Guide)> = self
            .guides
            .iter()
            .filter(|g| g.slug != source.slug)
            .map(|g| (relevance(source, g), g))
            .collect();

        // Stable: ties stay in catalog order.
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        scored.into_iter().take(limit).map(|(_, g)| g).collect()
    }
}

/// Relatedness of `candidate` to `source`.
///
/// Two points for the same category plus one per distinct shared tag.
#[must_use]
pub fn relevance(source: &Guide, candidate: &Guide) -> u32 {
    let source_tags: HashSet<&str> = source.tags.iter().map(String::as_str).collect();
    let candidate_tags: HashSet<&str> = candidate.tags.iter().map(String::as_str).collect();
    let shared = u32::try_from(source_tags.intersection(&candidate_tags).count()).unwrap_or(u32::MAX);

    let category = if source.category == candidate.category {
        CATEGORY_SCORE
    } else {
        0
    };
    category + shared * TAG_SCORE
}

fn validate(guide: &Guide) -> Result<(), CatalogError> {
    if !is_url_safe_slug(&guide.slug) {
        return Err(CatalogError::InvalidSlug(guide.slug.clone()));
    }
    if guide.title.trim().is_empty() {
        return Err(CatalogError::EmptyTitle {
            slug: guide.slug.clone(),
        });
    }
    if guide.minutes == 0 {
        return Err(CatalogError::ZeroMinutes {
            slug: guide.slug.clone(),
        });
    }
    Ok(())
}

fn is_url_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
