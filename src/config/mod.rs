//! Site configuration management for `seo.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section            | Purpose                                         |
//! |--------------------|-------------------------------------------------|
//! | `[site]`           | Name, default title/description/image, base URL |
//! | `[social]`         | Twitter handle and profile URLs                 |
//! | `[organization]`   | Address, contact point, founding facts          |
//! | `[geo]`            | Region and coordinates                          |
//! | `[verification]`   | Search-console ownership codes                  |
//! | `[sitemap]`        | Sitemap output path                             |
//!
//! Every field has a default, so an empty or missing file yields the
//! Udaan Tech Academy site.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    AddressConfig, ContactConfig, GeoConfig, OrganizationConfig, SiteInfoConfig, SitemapConfig,
    SocialConfig, VerificationConfig,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config};

use crate::{debug, log};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

/// Default config file name.
pub const CONFIG_FILE: &str = "seo.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing seo.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site-wide metadata defaults
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Social profiles
    #[serde(default)]
    pub social: SocialConfig,

    /// Organization schema facts
    #[serde(default)]
    pub organization: OrganizationConfig,

    /// Geographic meta tags
    #[serde(default)]
    pub geo: GeoConfig,

    /// Webmaster verification codes
    #[serde(default)]
    pub verification: VerificationConfig,

    /// Sitemap output
    #[serde(default)]
    pub sitemap: SitemapConfig,
}

impl SiteConfig {
    /// Load configuration by searching upward from cwd for `config_name`.
    ///
    /// A missing file is not an error: the built-in defaults describe the
    /// production site.
    pub fn load(config_name: &Path) -> Result<Self> {
        let Some(config_path) = find_config_file(config_name) else {
            debug!("config"; "{} not found, using defaults", config_name.display());
            return Ok(Self::default());
        };

        let mut config = Self::from_path(&config_path)?;
        config.root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.config_path = config_path;
        config.validate()?;

        debug!("config"; "loaded {}", config.config_path.display());
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate every section, collecting all errors before failing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        self.geo.validate(&mut diag);
        self.sitemap.validate(&mut diag);
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Site base URL without trailing slash.
    #[inline]
    pub fn base_url(&self) -> &str {
        self.site.base_url()
    }

    /// Absolute URL for a site path (`{base}{path}`).
    #[inline]
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Sitemap output path, resolved against the project root.
    pub fn sitemap_path(&self) -> PathBuf {
        self.root.join(&self.sitemap.path)
    }
}

impl FromStr for SiteConfig {
    type Err = ConfigError;

    /// Parse configuration from TOML string
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(content)?)
    }
}

// ============================================================================
// tests
// ============================================================================
