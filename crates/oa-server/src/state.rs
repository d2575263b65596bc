//! Application state.

use oa_site::Site;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Catalog and page rendering.
    pub(crate) site: Site,
    /// Application version, mixed into `ETag`s.
    pub(crate) version: String,
}
