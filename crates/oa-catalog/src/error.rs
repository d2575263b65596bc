//! Catalog error types.

/// Authoring defect found while building a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Two guides share a slug.
    #[error("Duplicate guide slug: {0}")]
    DuplicateSlug(String),

    /// Slug is empty or not URL-safe (`a-z`, `0-9`, inner `-`).
    #[error("Invalid guide slug: {0:?}")]
    InvalidSlug(String),

    /// Title is empty.
    #[error("Guide {slug} has an empty title")]
    EmptyTitle {
        /// Offending guide.
        slug: String,
    },

    /// Reading time below one minute.
    #[error("Guide {slug} must have a reading time of at least one minute")]
    ZeroMinutes {
        /// Offending guide.
        slug: String,
    },

    /// `updated` is not an ISO calendar date.
    #[error("Guide {slug} has invalid updated date {value:?}: {source}")]
    InvalidDate {
        /// Offending guide.
        slug: String,
        /// Date string as authored.
        value: String,
        /// Parse failure.
        source: chrono::ParseError,
    },
}

/// Unknown category label.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown guide category: {0}")]
pub struct ParseCategoryError(pub String);
