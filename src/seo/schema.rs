//! schema.org JSON-LD objects.
//!
//! Key names and nesting are what crawlers parse, so every field is renamed
//! to the exact schema.org spelling. Field order follows declaration order
//! (`serde_json` is built with `preserve_order`).

use super::fields::{Breadcrumb, Course, MetaFields};
use super::resolve::{non_empty, resolve_or_default};
use crate::config::SiteConfig;
use serde::Serialize;

const SCHEMA_CONTEXT: &str = "https://schema.org";
const PRICE_CURRENCY: &str = "INR";
const IN_STOCK: &str = "https://schema.org/InStock";
const DEFAULT_COURSE_MODE: &str = "online";
const DEFAULT_COURSE_LEVEL: &str = "intermediate";
/// Review count published when a rated course has no student count.
const DEFAULT_REVIEW_COUNT: u32 = 100;

/// One top-level JSON-LD document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StructuredData {
    Organization(Organization),
    Course(CourseSchema),
    Breadcrumbs(BreadcrumbList),
    Article(Article),
}

impl StructuredData {
    /// schema.org type name of this document.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Organization(o) => o.kind,
            Self::Course(c) => c.kind,
            Self::Breadcrumbs(b) => b.kind,
            Self::Article(a) => a.kind,
        }
    }

    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

// ============================================================================
// Organization
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub alternate_name: String,
    pub url: String,
    pub logo: String,
    pub description: String,
    pub address: PostalAddress,
    pub contact_point: ContactPoint,
    pub same_as: Vec<String>,
    pub founding_date: String,
    pub number_of_employees: String,
    pub slogan: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub street_address: String,
    pub address_locality: String,
    pub address_region: String,
    pub postal_code: String,
    pub address_country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub telephone: String,
    pub contact_type: String,
    pub email: String,
}

impl Organization {
    pub fn from_config(config: &SiteConfig) -> Self {
        let org = &config.organization;
        Self {
            context: SCHEMA_CONTEXT,
            kind: "EducationalOrganization",
            name: config.site.name.clone(),
            alternate_name: config.site.alternate_name.clone(),
            url: config.base_url().to_owned(),
            logo: config.site.logo.clone(),
            description: org.description.clone(),
            address: PostalAddress {
                kind: "PostalAddress",
                street_address: org.address.street.clone(),
                address_locality: org.address.locality.clone(),
                address_region: org.address.region.clone(),
                postal_code: org.address.postal_code.clone(),
                address_country: org.address.country.clone(),
            },
            contact_point: ContactPoint {
                kind: "ContactPoint",
                telephone: org.contact.telephone.clone(),
                contact_type: org.contact.contact_type.clone(),
                email: org.contact.email.clone(),
            },
            same_as: config
                .social
                .profiles()
                .into_iter()
                .map(str::to_owned)
                .collect(),
            founding_date: org.founding_date.clone(),
            number_of_employees: org.employees.clone(),
            slogan: org.slogan.clone(),
        }
    }
}

// ============================================================================
// Course
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub description: String,
    pub provider: Provider,
    pub course_mode: String,
    pub educational_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_required: Option<String>,
    pub offers: Offer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate_rating: Option<AggregateRating>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Provider {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    pub price_currency: &'static str,
    pub availability: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateRating {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub rating_value: f64,
    pub review_count: u32,
    pub best_rating: &'static str,
    pub worst_rating: &'static str,
}

impl CourseSchema {
    pub fn new(course: &Course, config: &SiteConfig) -> Self {
        let aggregate_rating = course.usable_rating().map(|rating| AggregateRating {
            kind: "AggregateRating",
            rating_value: rating,
            review_count: course
                .students
                .filter(|&n| n > 0)
                .unwrap_or(DEFAULT_REVIEW_COUNT),
            best_rating: "5",
            worst_rating: "1",
        });

        Self {
            context: SCHEMA_CONTEXT,
            kind: "Course",
            name: course.title.clone(),
            description: course.description.clone(),
            provider: Provider {
                kind: "EducationalOrganization",
                name: config.site.name.clone(),
                url: config.base_url().to_owned(),
            },
            course_mode: resolve_or_default(course.mode.as_deref(), DEFAULT_COURSE_MODE).to_owned(),
            educational_level: resolve_or_default(course.level.as_deref(), DEFAULT_COURSE_LEVEL)
                .to_owned(),
            time_required: non_empty(course.duration.as_deref()).map(str::to_owned),
            offers: Offer {
                kind: "Offer",
                price: course.price_amount(),
                price_currency: PRICE_CURRENCY,
                availability: IN_STOCK,
            },
            aggregate_rating,
        }
    }
}

// ============================================================================
// BreadcrumbList
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbList {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub item_list_element: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    /// 1-based position in the trail.
    pub position: usize,
    pub name: String,
    pub item: String,
}

impl BreadcrumbList {
    /// `None` for an empty trail.
    pub fn new(breadcrumbs: &[Breadcrumb], config: &SiteConfig) -> Option<Self> {
        if breadcrumbs.is_empty() {
            return None;
        }

        let item_list_element = breadcrumbs
            .iter()
            .enumerate()
            .map(|(index, crumb)| ListItem {
                kind: "ListItem",
                position: index + 1,
                name: crumb.name.clone(),
                item: config.absolute_url(&crumb.url),
            })
            .collect();

        Some(Self {
            context: SCHEMA_CONTEXT,
            kind: "BreadcrumbList",
            item_list_element,
        })
    }
}

// ============================================================================
// Article
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image: String,
    pub author: Person,
    pub publisher: Publisher,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    pub main_entity_of_page: WebPage,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Publisher {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub logo: ImageObject,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebPage {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
}

impl Article {
    /// `image` and `canonical_url` are the already-resolved page values.
    pub fn new(fields: &MetaFields, image: &str, canonical_url: &str, config: &SiteConfig) -> Self {
        let published = non_empty(fields.published_time.as_deref());
        let modified = non_empty(fields.modified_time.as_deref()).or(published);

        Self {
            context: SCHEMA_CONTEXT,
            kind: "Article",
            headline: non_empty(fields.title.as_deref()).map(str::to_owned),
            description: non_empty(fields.description.as_deref()).map(str::to_owned),
            image: image.to_owned(),
            author: Person {
                kind: "Person",
                name: resolve_or_default(fields.author.as_deref(), &config.site.name).to_owned(),
            },
            publisher: Publisher {
                kind: "Organization",
                name: config.site.name.clone(),
                logo: ImageObject {
                    kind: "ImageObject",
                    url: config.site.logo.clone(),
                },
            },
            date_published: published.map(str::to_owned),
            date_modified: modified.map(str::to_owned),
            main_entity_of_page: WebPage {
                kind: "WebPage",
                id: canonical_url.to_owned(),
            },
        }
    }
}
