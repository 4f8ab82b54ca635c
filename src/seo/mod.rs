//! Page metadata: head tags and JSON-LD.
//!
//! | Module    | Purpose                                            |
//! |-----------|----------------------------------------------------|
//! | `fields`  | Caller-supplied `MetaFields`, `Course`, `Breadcrumb` |
//! | `resolve` | Degrade-to-default policy                          |
//! | `meta`    | Ordered head tags and their HTML                   |
//! | `schema`  | schema.org structured data                         |
//!
//! # Example
//!
//! ```ignore
//! let config = SiteConfig::default();
//! let fields = MetaFields::default().with_title("Courses");
//! let metadata = MetadataBuilder::new(&config).build(&fields, "/courses");
//! assert_eq!(metadata.tags.title_text(), Some("Courses | Udaan Tech Academy"));
//! println!("{}", metadata.render_head());
//! ```

pub mod fields;
pub mod meta;
pub mod resolve;
pub mod schema;

pub use fields::{Breadcrumb, Course, DEFAULT_PAGE_TYPE, MetaFields};
pub use meta::{MetaTag, MetaTags};
pub use resolve::{non_empty, resolve_or_default};
pub use schema::{Article, BreadcrumbList, CourseSchema, Organization, StructuredData};

use crate::config::SiteConfig;
use crate::debug;
use crate::utils::html::escape_json_script;

const ROBOTS: &str = "index, follow, max-image-preview:large, max-snippet:-1, max-video-preview:-1";
const GOOGLEBOT: &str = "index, follow";
const TWITTER_CARD: &str = "summary_large_image";
const ARTICLE_SECTION: &str = "Technology Education";

/// Origins the site loads fonts and analytics from.
const PRECONNECT: [(&str, Option<&str>); 4] = [
    ("https://fonts.googleapis.com", None),
    ("https://fonts.gstatic.com", Some("anonymous")),
    ("https://www.google-analytics.com", None),
    ("https://www.googletagmanager.com", None),
];
const DNS_PREFETCH: [&str; 3] = [
    "//fonts.googleapis.com",
    "//fonts.gstatic.com",
    "//www.google-analytics.com",
];

/// Rendered metadata for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    pub tags: MetaTags,
    /// Organization first, then course, breadcrumbs and article when present.
    pub schemas: Vec<StructuredData>,
}

impl Metadata {
    /// JSON-LD documents as one JSON array.
    pub fn json_ld(&self) -> serde_json::Value {
        serde_json::Value::Array(self.schemas.iter().map(StructuredData::to_value).collect())
    }

    /// HTML fragment for the document `<head>`.
    pub fn render_head(&self) -> String {
        let mut out = String::with_capacity(4096);

        for tag in &self.tags {
            tag.write_html(&mut out);
            out.push('\n');
        }

        for schema in &self.schemas {
            match serde_json::to_string(schema) {
                Ok(json) => {
                    out.push_str(r#"<script type="application/ld+json">"#);
                    out.push_str(&escape_json_script(&json));
                    out.push_str("</script>\n");
                }
                Err(e) => debug!("seo"; "skipping {} schema: {}", schema.type_name(), e),
            }
        }

        out
    }
}

/// Builds [`Metadata`] from page fields against one site config.
///
/// Never fails: missing or malformed fields fall back to site defaults or
/// are left out.
#[derive(Debug, Clone, Copy)]
pub struct MetadataBuilder<'a> {
    config: &'a SiteConfig,
}

impl<'a> MetadataBuilder<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// `current_path` is the route path the page is served at, e.g. `/courses`.
    pub fn build(&self, fields: &MetaFields, current_path: &str) -> Metadata {
        let resolved = Resolved::new(fields, current_path, self.config);
        Metadata {
            tags: self.tags(fields, &resolved),
            schemas: self.schemas(fields, &resolved),
        }
    }

    fn tags(&self, fields: &MetaFields, r: &Resolved<'_>) -> MetaTags {
        let site = &self.config.site;
        let social = &self.config.social;
        let geo = &self.config.geo;
        let mut tags = MetaTags::new();

        // Basic
        tags.title(&r.title)
            .name("description", r.description)
            .name("keywords", r.keywords)
            .name("author", &site.author)
            .name("robots", ROBOTS)
            .name("googlebot", GOOGLEBOT)
            .link("canonical", &r.canonical_url);

        // Open Graph
        tags.property("og:title", &r.title)
            .property("og:description", r.description)
            .property("og:image", r.image)
            .property("og:image:width", site.image_width.to_string())
            .property("og:image:height", site.image_height.to_string())
            .property("og:url", &r.canonical_url)
            .property("og:type", r.page_type)
            .property("og:site_name", &site.name)
            .property("og:locale", &site.locale);

        // Twitter card
        tags.name("twitter:card", TWITTER_CARD)
            .name("twitter:title", &r.title)
            .name("twitter:description", r.description)
            .name("twitter:image", r.image)
            .name("twitter:site", &social.twitter)
            .name("twitter:creator", &social.twitter);

        // Browser / app
        tags.name("theme-color", &site.theme_color)
            .name("msapplication-TileColor", &site.theme_color)
            .name("application-name", &site.name)
            .name("apple-mobile-web-app-title", &site.name)
            .name("apple-mobile-web-app-capable", "yes")
            .name("apple-mobile-web-app-status-bar-style", "default")
            .name("mobile-web-app-capable", "yes");

        // Language and geography
        tags.name("language", &site.language)
            .name("geo.region", &geo.region)
            .name("geo.placename", &geo.placename)
            .name("geo.position", geo.position())
            .name("ICBM", geo.icbm());

        if fields.is_article {
            tags.property("article:author", r.author);
            if let Some(published) = non_empty(fields.published_time.as_deref()) {
                tags.property("article:published_time", published);
            }
            if let Some(modified) = non_empty(fields.modified_time.as_deref()) {
                tags.property("article:modified_time", modified);
            }
            tags.property("article:section", ARTICLE_SECTION)
                .property("article:tag", r.keywords);
        }

        for (name, code) in self.config.verification.tags() {
            tags.name(name, code);
        }

        for (href, crossorigin) in PRECONNECT {
            match crossorigin {
                Some(value) => tags.link_crossorigin("preconnect", href, value),
                None => tags.link("preconnect", href),
            };
        }
        for href in DNS_PREFETCH {
            tags.link("dns-prefetch", href);
        }

        tags
    }

    fn schemas(&self, fields: &MetaFields, r: &Resolved<'_>) -> Vec<StructuredData> {
        let mut schemas = vec![StructuredData::Organization(Organization::from_config(
            self.config,
        ))];

        if let Some(course) = &fields.course {
            schemas.push(StructuredData::Course(CourseSchema::new(course, self.config)));
        }
        if let Some(list) = BreadcrumbList::new(&fields.breadcrumbs, self.config) {
            schemas.push(StructuredData::Breadcrumbs(list));
        }
        if fields.is_article {
            schemas.push(StructuredData::Article(Article::new(
                fields,
                r.image,
                &r.canonical_url,
                self.config,
            )));
        }

        schemas
    }
}

/// Page values after fallback resolution.
struct Resolved<'a> {
    title: String,
    description: &'a str,
    keywords: &'a str,
    image: &'a str,
    page_type: &'a str,
    author: &'a str,
    canonical_url: String,
}

impl<'a> Resolved<'a> {
    fn new(fields: &'a MetaFields, current_path: &str, config: &'a SiteConfig) -> Self {
        let site = &config.site;
        let title = match non_empty(fields.title.as_deref()) {
            Some(title) => format!("{title} | {}", site.name),
            None => site.title.clone(),
        };

        Self {
            title,
            description: resolve_or_default(fields.description.as_deref(), &site.description),
            keywords: resolve_or_default(fields.keywords.as_deref(), &site.keywords),
            image: resolve_or_default(fields.image.as_deref(), &site.image),
            page_type: resolve_or_default(fields.page_type.as_deref(), DEFAULT_PAGE_TYPE),
            author: resolve_or_default(fields.author.as_deref(), &site.name),
            canonical_url: config.absolute_url(current_path),
        }
    }
}
