//! udaan-seo - SEO metadata renderer for the Udaan Tech Academy site.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use udaan_seo::{
    config::{SiteConfig, init_config},
    logger,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    init_config(SiteConfig::load(&cli.config)?);

    match &cli.command {
        Commands::Head { page } => cli::run_head(page),
        Commands::Schema { page, compact } => cli::run_schema(page, *compact),
        Commands::Breadcrumbs { path } => cli::run_breadcrumbs(path),
        Commands::Sitemap { args } => cli::run_sitemap(args),
    }
}
