//! Configuration section definitions.
//!
//! Each module corresponds to a section in `seo.toml`:
//!
//! | Module         | TOML Section     | Purpose                            |
//! |----------------|------------------|------------------------------------|
//! | `info`         | `[site]`         | Site-wide metadata defaults        |
//! | `social`       | `[social]`       | Twitter handle, profile URLs       |
//! | `organization` | `[organization]` | Organization schema facts          |
//! | `geo`          | `[geo]`          | Geographic meta tags               |
//! | `verification` | `[verification]` | Webmaster-tool verification codes  |
//! | `sitemap`      | `[sitemap]`      | Sitemap output path                |

mod geo;
mod info;
mod organization;
mod sitemap;
mod social;
mod verification;

pub use geo::GeoConfig;
pub use info::SiteInfoConfig;
pub use organization::{AddressConfig, ContactConfig, OrganizationConfig};
pub use sitemap::SitemapConfig;
pub use social::SocialConfig;
pub use verification::VerificationConfig;
