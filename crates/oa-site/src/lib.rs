//! OpenApply site assembly.
//!
//! Ties the catalog and the markdown renderer together into pages:
//!
//! - [`Site`]: catalog plus [`SiteOptions`], renders every [`Route`]
//! - [`ListingQuery`] / [`Listing`]: the filtered guides view
//! - [`GuidePage`]: rendered body, TOC and related guides for one guide
//! - [`StaticSiteBuilder`]: writes all pages to a directory
//!
//! # Example
//!
//! ```
//! use oa_catalog::builtin;
//! use oa_site::{Route, Site, SiteOptions};
//!
//! let site = Site::new(builtin().unwrap(), SiteOptions::default());
//! let html = site.render(&Route::Guide("css-profile".to_owned())).unwrap();
//! assert!(html.contains("Gather documents"));
//! ```

pub mod assets;
mod builder;
mod listing;
mod route;
mod site;
mod template;

pub use builder::{BuildError, BuildReport, StaticSiteBuilder};
pub use listing::{Listing, ListingQuery};
pub use route::Route;
pub use site::{GuidePage, Site, SiteOptions};
