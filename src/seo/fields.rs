//! Caller-supplied page fields.
//!
//! Every field is optional; whatever is missing falls back to the site
//! defaults in [`SiteConfig`](crate::config::SiteConfig) when the builder
//! resolves it.

use serde::{Deserialize, Serialize};

/// Open Graph type used when a page does not set one.
pub const DEFAULT_PAGE_TYPE: &str = "website";

/// Fields a page hands to the metadata builder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MetaFields {
    /// Page title without the site suffix.
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    /// Absolute share image URL.
    pub image: Option<String>,
    /// Open Graph type (`og:type`), `"website"` when absent.
    #[serde(rename = "type")]
    pub page_type: Option<String>,
    pub author: Option<String>,
    /// ISO 8601 publish date, used by article pages.
    pub published_time: Option<String>,
    pub modified_time: Option<String>,
    /// Emit article tags and the `Article` schema.
    pub is_article: bool,
    pub course: Option<Course>,
    pub breadcrumbs: Vec<Breadcrumb>,
}

impl MetaFields {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_course(mut self, course: Course) -> Self {
        self.course = Some(course);
        self
    }

    pub fn with_breadcrumbs(mut self, breadcrumbs: Vec<Breadcrumb>) -> Self {
        self.breadcrumbs = breadcrumbs;
        self
    }
}

/// Course facts for the `Course` schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Course {
    pub title: String,
    pub description: String,
    /// Human duration, e.g. "12 weeks".
    pub duration: Option<String>,
    pub level: Option<String>,
    pub mode: Option<String>,
    /// Display price with currency symbol, e.g. "₹85,000".
    pub price: Option<String>,
    /// Average rating on a 0-5 scale.
    pub rating: Option<f64>,
    pub students: Option<u32>,
}

impl Course {
    /// Numeric price string with currency symbol and separators removed.
    pub fn price_amount(&self) -> Option<String> {
        self.price.as_deref().and_then(parse_price)
    }

    /// Rating, if it is a usable value in (0, 5].
    ///
    /// Narrower than "any non-zero rating": negative, NaN and above-5 values
    /// are also dropped, so `aggregateRating` never falls outside the
    /// published 1-5 scale.
    pub fn usable_rating(&self) -> Option<f64> {
        self.rating.filter(|r| r.is_finite() && *r > 0.0 && *r <= 5.0)
    }
}

/// Strip the currency prefix and thousands separators from a display price.
///
/// `"₹85,000"` becomes `"85000"`. Anything that is not a plain decimal
/// number afterwards yields `None`.
pub fn parse_price(raw: &str) -> Option<String> {
    let amount: String = raw
        .trim()
        .trim_start_matches(|c: char| !c.is_ascii_digit())
        .chars()
        .filter(|c| !matches!(c, ',' | ' ' | '\u{a0}'))
        .collect();

    if amount.is_empty() || !amount.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    amount.parse::<f64>().ok()?;
    Some(amount)
}

/// One step of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub name: String,
    /// Site-relative path, e.g. "/courses".
    pub url: String,
}

impl Breadcrumb {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod price {
        use super::*;

        #[test]
        fn rupee_with_separator() {
            assert_eq!(parse_price("₹85,000"), Some("85000".into()));
        }

        #[test]
        fn indian_grouping() {
            assert_eq!(parse_price("₹1,25,000"), Some("125000".into()));
        }

        #[test]
        fn prefix_text_and_decimals() {
            assert_eq!(parse_price("Rs. 4,999.50"), Some("4999.50".into()));
        }

        #[test]
        fn plain_number() {
            assert_eq!(parse_price("55000"), Some("55000".into()));
        }

        #[test]
        fn unparsable() {
            assert_eq!(parse_price("Free"), None);
            assert_eq!(parse_price(""), None);
            assert_eq!(parse_price("₹85,000/month"), None);
            assert_eq!(parse_price("1.2.3"), None);
        }

        #[test]
        fn course_without_price() {
            assert_eq!(Course::default().price_amount(), None);
        }
    }

    mod rating {
        use super::*;

        fn course(rating: Option<f64>) -> Course {
            Course {
                rating,
                ..Default::default()
            }
        }

        #[test]
        fn in_range() {
            assert_eq!(course(Some(4.8)).usable_rating(), Some(4.8));
            assert_eq!(course(Some(5.0)).usable_rating(), Some(5.0));
        }

        #[test]
        fn zero_or_missing() {
            assert_eq!(course(Some(0.0)).usable_rating(), None);
            assert_eq!(course(None).usable_rating(), None);
        }

        #[test]
        fn out_of_range() {
            assert_eq!(course(Some(7.5)).usable_rating(), None);
            assert_eq!(course(Some(f64::NAN)).usable_rating(), None);
        }
    }

    #[test]
    fn fields_deserialize_from_camel_case() {
        let fields: MetaFields = serde_json::from_value(serde_json::json!({
            "title": "Blog",
            "type": "article",
            "isArticle": true,
            "publishedTime": "2024-06-15",
            "breadcrumbs": [{"name": "Home", "url": "/"}]
        }))
        .unwrap();

        assert_eq!(fields.title.as_deref(), Some("Blog"));
        assert_eq!(fields.page_type.as_deref(), Some("article"));
        assert!(fields.is_article);
        assert_eq!(fields.published_time.as_deref(), Some("2024-06-15"));
        assert_eq!(fields.breadcrumbs, vec![Breadcrumb::new("Home", "/")]);
        assert_eq!(fields.course, None);
    }
}
