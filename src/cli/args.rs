//! Command-line interface definitions.

use chrono::{DateTime, NaiveDate};
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// SEO metadata renderer for the Udaan Tech Academy site
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "seo.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the <head> fragment (tags and JSON-LD) for a route
    #[command(visible_alias = "h")]
    Head {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Print the JSON-LD documents for a route as a JSON array
    #[command(visible_alias = "j")]
    Schema {
        #[command(flatten)]
        page: PageArgs,

        /// Print compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Print the breadcrumb trail for a route as JSON
    #[command(visible_alias = "b")]
    Breadcrumbs {
        /// Route path, e.g. /courses/data-science-advanced
        #[arg(default_value = "/")]
        path: String,
    },

    /// Generate the sitemap
    #[command(visible_alias = "s")]
    Sitemap {
        #[command(flatten)]
        args: SitemapArgs,
    },
}

/// Route and field overrides shared by `head` and `schema`.
///
/// Fields start from the registered defaults for the route; any flag given
/// here replaces the corresponding default.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Route path, e.g. /courses/data-science-advanced
    #[arg(default_value = "/")]
    pub path: String,

    /// Page title (the site name is appended)
    #[arg(long)]
    pub title: Option<String>,

    /// Meta description
    #[arg(long)]
    pub description: Option<String>,

    /// Comma-separated keywords
    #[arg(long)]
    pub keywords: Option<String>,

    /// Absolute share image URL
    #[arg(long, value_hint = clap::ValueHint::Url)]
    pub image: Option<String>,

    /// Open Graph type (default: website)
    #[arg(long = "type")]
    pub page_type: Option<String>,

    /// Render as an article (article tags and Article schema)
    #[arg(short, long)]
    pub article: bool,

    /// Article author (default: site name)
    #[arg(long)]
    pub author: Option<String>,

    /// Publish date: YYYY-MM-DD or RFC 3339
    #[arg(long, value_parser = parse_date)]
    pub published: Option<String>,

    /// Last modified date: YYYY-MM-DD or RFC 3339
    #[arg(long, value_parser = parse_date)]
    pub modified: Option<String>,

    /// Leave out the BreadcrumbList schema
    #[arg(long)]
    pub no_breadcrumbs: bool,
}

/// Sitemap command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct SitemapArgs {
    /// Output file (default: `[sitemap] path` from the config)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Print entries as JSON to stdout instead of writing XML
    #[arg(long, conflicts_with = "output")]
    pub json: bool,

    /// Print XML to stdout instead of writing a file
    #[arg(long, conflicts_with_all = ["output", "json"])]
    pub stdout: bool,

    /// Minify the XML
    #[arg(short, long)]
    pub minify: bool,
}

/// Accept a calendar date or an RFC 3339 timestamp, passed through as given.
fn parse_date(s: &str) -> Result<String, String> {
    let valid = NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
        || DateTime::parse_from_rfc3339(s).is_ok();
    if valid {
        Ok(s.to_string())
    } else {
        Err(format!("invalid date '{s}', expected YYYY-MM-DD or an RFC 3339 timestamp"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn head_with_overrides() {
        let cli = Cli::try_parse_from([
            "udaan-seo",
            "head",
            "/blog/ai-trends",
            "--title",
            "AI Trends",
            "--article",
            "--published",
            "2024-06-15",
        ])
        .unwrap();

        let Commands::Head { page } = cli.command else {
            panic!("expected head command");
        };
        assert_eq!(page.path, "/blog/ai-trends");
        assert_eq!(page.title.as_deref(), Some("AI Trends"));
        assert!(page.article);
        assert_eq!(page.published.as_deref(), Some("2024-06-15"));
    }

    #[test]
    fn rejects_bad_date() {
        let result = Cli::try_parse_from(["udaan-seo", "head", "/", "--published", "15/06/2024"]);
        assert!(result.is_err());
    }

    #[test]
    fn date_formats() {
        assert_eq!(parse_date("2024-06-15").as_deref(), Ok("2024-06-15"));
        assert!(parse_date("2024-06-15T14:30:45Z").is_ok());
        assert!(parse_date("2024-06-15T14:30:45+05:30").is_ok());
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("2024-06-15T14:30:45").is_err());
        assert!(parse_date("yesterday").is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["udaan-seo", "sitemap", "--json", "-v", "-C", "site.toml"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert!(matches!(cli.command, Commands::Sitemap { args } if args.json));
    }

    #[test]
    fn sitemap_output_conflicts_with_stdout() {
        let result =
            Cli::try_parse_from(["udaan-seo", "sitemap", "--stdout", "-o", "out/sitemap.xml"]);
        assert!(result.is_err());
    }
}
