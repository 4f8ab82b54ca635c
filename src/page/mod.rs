//! Page registry: static per-page defaults, breadcrumbs, sitemap entries.

mod breadcrumbs;
mod registry;
mod sitemap;

pub use breadcrumbs::breadcrumbs_from_path;
pub use registry::{PageConfig, course, for_path, lookup};
pub use sitemap::{ChangeFreq, SitemapEntry, sitemap_entries, sitemap_entries_at};
