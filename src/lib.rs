//! SEO metadata for the Udaan Tech Academy site.
//!
//! - [`seo`]: meta tags and JSON-LD for a page
//! - [`page`]: per-route defaults, breadcrumbs and sitemap entries
//! - [`generator`]: `sitemap.xml` output
//! - [`config`]: `seo.toml` loading and validation

pub mod config;
pub mod generator;
pub mod logger;
pub mod page;
pub mod seo;
pub mod utils;

pub use config::SiteConfig;
pub use seo::{MetaFields, Metadata, MetadataBuilder};
