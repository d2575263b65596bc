//! `openapply build` command implementation.

use std::path::PathBuf;

use clap::Args;
use oa_config::{CliSettings, Config};
use oa_server::site_options_from_config;
use oa_site::{Site, StaticSiteBuilder};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Output directory for the generated site (overrides config, default: dist/).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover openapply.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output (log every written file).
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            output_dir: self.output_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let output_dir = &config.build_resolved.output_dir;

        output.info(&format!("Output: {}", output_dir.display()));

        let site = Site::new(oa_catalog::builtin()?, site_options_from_config(&config.guides));
        let report = StaticSiteBuilder::new(&site, output_dir).build()?;

        output.success(&format!(
            "Site built successfully to {} ({} pages, {} files)",
            report.output_dir.display(),
            report.pages(),
            report.files.len()
        ));
        Ok(())
    }
}
