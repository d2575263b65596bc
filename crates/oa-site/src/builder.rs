//! Static site export.
//!
//! Writes every navigable route as `<path>/index.html` under the output
//! directory, plus `404.html` and the stylesheet. Listing filters need a
//! server; the exported `/guides` page is the unfiltered listing.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::assets::{STYLESHEET, STYLESHEET_PATH};
use crate::site::Site;

/// Error returned by the static site builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Files written by a build.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Written files, relative to `output_dir`, in write order.
    pub files: Vec<PathBuf>,
    /// Total bytes written.
    pub bytes: usize,
}

impl BuildReport {
    /// Number of HTML pages written.
    #[must_use]
    pub fn pages(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.extension().is_some_and(|ext| ext == "html"))
            .count()
    }
}

/// Builds the static site into a directory.
pub struct StaticSiteBuilder<'a> {
    site: &'a Site,
    output_dir: PathBuf,
}

impl<'a> StaticSiteBuilder<'a> {
    /// Create a builder writing to `output_dir`.
    #[must_use]
    pub fn new(site: &'a Site, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            site,
            output_dir: output_dir.into(),
        }
    }

    /// Render and write every page.
    ///
    /// Existing files are overwritten; other files in the output directory
    /// are left alone.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] naming the path on the first failed write.
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        let mut report = BuildReport {
            output_dir: self.output_dir.clone(),
            ..BuildReport::default()
        };

        for route in self.site.routes() {
            // Routes come from the catalog, so guide pages always render.
            let Some(html) = self.site.render(&route) else {
                tracing::warn!(%route, "Skipping route without a page");
                continue;
            };
            self.write(&mut report, route.output_file(), html.as_bytes())?;
        }

        let not_found = self.site.render_not_found("/404.html");
        self.write(&mut report, PathBuf::from("404.html"), not_found.as_bytes())?;

        let stylesheet = PathBuf::from(STYLESHEET_PATH.trim_start_matches('/'));
        self.write(&mut report, stylesheet, STYLESHEET.as_bytes())?;

        tracing::info!(
            output_dir = %self.output_dir.display(),
            files = report.files.len(),
            bytes = report.bytes,
            "Static site built"
        );
        Ok(report)
    }

    fn write(&self, report: &mut BuildReport, relative: PathBuf, content: &[u8]) -> Result<(), BuildError> {
        let path = self.output_dir.join(&relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| BuildError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, content).map_err(|source| BuildError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote file");
        report.bytes += content.len();
        report.files.push(relative);
        Ok(())
    }
}
