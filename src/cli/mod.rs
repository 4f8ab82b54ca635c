//! Command-line front end.

mod args;
mod render;
mod sitemap;

pub use args::{Cli, Commands};
pub use render::{run_breadcrumbs, run_head, run_schema};
pub use sitemap::run_sitemap;
