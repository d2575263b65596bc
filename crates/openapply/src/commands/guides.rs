//! `openapply guides` command implementation.

use std::path::PathBuf;

use clap::Args;
use oa_catalog::{CategoryFilter, Guide};
use oa_config::Config;
use oa_server::site_options_from_config;
use oa_site::{ListingQuery, Site};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the guides command.
#[derive(Args)]
pub(crate) struct GuidesArgs {
    /// Search text matched against title, description, category and tags.
    #[arg(short, long)]
    query: Option<String>,

    /// Category to filter by (e.g. Visa, Finance, All).
    #[arg(long)]
    category: Option<String>,

    /// Show guides related to this slug instead of searching.
    #[arg(long, conflicts_with_all = ["query", "category"])]
    related: Option<String>,

    /// Path to configuration file (default: auto-discover openapply.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl GuidesArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;
        let site = Site::new(oa_catalog::builtin()?, site_options_from_config(&config.guides));

        let guides = match &self.related {
            Some(slug) => related(&site, slug)?,
            None => self.search(&site)?,
        };

        if guides.is_empty() {
            output.warning("No guides match your search. Try a different keyword or category.");
            return Ok(());
        }
        for guide in &guides {
            output.row(&guide.slug, &guide.title, &details(&site, guide));
        }
        Ok(())
    }

    /// Featured matches first, like the listing page.
    fn search<'a>(&self, site: &'a Site) -> Result<Vec<&'a Guide>, CliError> {
        // Reject unknown categories here; the web listing falls back to All.
        if let Some(category) = &self.category {
            category
                .parse::<CategoryFilter>()
                .map_err(|e| CliError::Validation(e.to_string()))?;
        }

        let query = ListingQuery {
            q: self.query.clone(),
            category: self.category.clone(),
            sort: None,
        };
        let listing = site.listing(&query);
        Ok(listing.featured.into_iter().chain(listing.guides).collect())
    }
}

fn related<'a>(site: &'a Site, slug: &str) -> Result<Vec<&'a Guide>, CliError> {
    if site.catalog().find_by_slug(slug).is_none() {
        return Err(CliError::Validation(format!("Unknown guide: {slug}")));
    }
    Ok(site.catalog().related(slug, site.options().related_limit))
}

fn details(site: &Site, guide: &Guide) -> String {
    format!(
        "[{}] ~{} min • Updated {}",
        guide.category.label(),
        site.display_minutes(guide),
        guide.updated_display()
    )
}
