//! Guide catalog for the OpenApply site.
//!
//! Provides the [`Guide`] record, the closed [`GuideCategory`] set and a
//! read-only [`Catalog`] with the queries the pages need:
//!
//! - [`Catalog::find_by_slug`] for detail pages (absence is a normal outcome)
//! - [`Catalog::filter`] / [`Catalog::filter_sorted`] for the listing
//! - [`Catalog::related`] for "related guides", scored by [`relevance`]
//!
//! The catalog is validated once at construction and never changes
//! afterwards.
//!
//! # Example
//!
//! ```
//! use oa_catalog::{CategoryFilter, builtin};
//!
//! let catalog = builtin().unwrap();
//! let visa = catalog.filter("visa", CategoryFilter::All);
//! assert_eq!(visa[0].slug, "visa-arrival-checklist");
//!
//! let related = catalog.related("visa-arrival-checklist", 3);
//! assert!(related.len() <= 3);
//! ```

mod builtin;
mod catalog;
mod error;
mod guide;

pub use builtin::{GUIDES, builtin};
pub use catalog::{Catalog, DEFAULT_RELATED_LIMIT, ReadingTime, SortOrder, relevance};
pub use error::{CatalogError, ParseCategoryError};
pub use guide::{CategoryFilter, Guide, GuideCategory, GuideEntry};
