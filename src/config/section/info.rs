//! `[site]` configuration.
//!
//! Basic site information used as the fallback for every page: title,
//! description, keywords, share image, and the base URL that canonical and
//! breadcrumb URLs are built from.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Site-wide metadata defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site name, appended to page titles (`"{title} | {name}"`).
    pub name: String,

    /// Short alternate name for the organization schema.
    pub alternate_name: String,

    /// Title used when a page does not set one.
    pub title: String,

    /// Default meta description.
    pub description: String,

    /// Default comma-separated keywords.
    pub keywords: String,

    /// Base URL without trailing slash (e.g., "https://example.com").
    pub url: String,

    /// Default Open Graph / Twitter share image.
    pub image: String,

    /// Share image width in pixels.
    pub image_width: u32,

    /// Share image height in pixels.
    pub image_height: u32,

    /// Organization logo URL.
    pub logo: String,

    /// Value of the `author` meta tag.
    pub author: String,

    /// Open Graph locale (e.g., "en_US").
    pub locale: String,

    /// Human-readable language for the `language` meta tag.
    pub language: String,

    /// Browser UI color (`theme-color`, `msapplication-TileColor`).
    pub theme_color: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            name: "Udaan Tech Academy".into(),
            alternate_name: "Udaan Tech".into(),
            title: "Udaan Tech Academy - Launch Your Tech Career in 6 Months".into(),
            description: "Transform your career with job-oriented tech courses. Expert mentorship, \
                          real-world projects, and 95% placement rate. Courses in Data Science, \
                          Full Stack Development, Cloud Infrastructure & more."
                .into(),
            keywords: "tech courses, data science course, full stack development, cloud computing, \
                       machine learning, coding bootcamp, career change, tech training, \
                       programming courses, online tech education"
                .into(),
            url: "https://udaantechacademy.com".into(),
            image: "https://udaantechacademy.com/og-image.jpg".into(),
            image_width: 1200,
            image_height: 630,
            logo: "https://udaantechacademy.com/logo.png".into(),
            author: "Udaan Tech Academy".into(),
            locale: "en_US".into(),
            language: "English".into(),
            theme_color: "#1e40af".into(),
        }
    }
}

impl SiteInfoConfig {
    pub const URL: FieldPath = FieldPath::new("site.url");
    pub const NAME: FieldPath = FieldPath::new("site.name");
    pub const IMAGE_WIDTH: FieldPath = FieldPath::new("site.image_width");
    pub const IMAGE_HEIGHT: FieldPath = FieldPath::new("site.image_height");

    /// Base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `name` must not be empty
    /// - `url` must be a valid http(s) URL with a host
    /// - share image dimensions must be non-zero
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error(Self::NAME, "site name must not be empty");
        }

        // URL format check using url crate for strict validation
        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::URL,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::URL,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::URL,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }

        if self.image_width == 0 {
            diag.error(Self::IMAGE_WIDTH, "image width must be greater than 0");
        }
        if self.image_height == 0 {
            diag.error(Self::IMAGE_HEIGHT, "image height must be greater than 0");
        }
    }
}
