//! Sitemap entries for the fixed page list.

use crate::config::SiteConfig;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// How often a page is expected to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Weekly,
    Monthly,
}

impl ChangeFreq {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

/// One `<url>` of the sitemap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    /// Absolute page URL.
    pub url: String,
    /// Relative importance in [0, 1].
    pub priority: f64,
    pub changefreq: ChangeFreq,
    /// ISO 8601 timestamp of generation.
    pub lastmod: String,
}

/// `(path, priority, changefreq)` for every page the site publishes.
const SITEMAP_PAGES: [(&str, f64, ChangeFreq); 9] = [
    ("/", 1.0, ChangeFreq::Weekly),
    ("/courses", 0.9, ChangeFreq::Weekly),
    ("/career-tracks", 0.9, ChangeFreq::Monthly),
    ("/mentorship", 0.8, ChangeFreq::Monthly),
    ("/blog", 0.8, ChangeFreq::Weekly),
    ("/enroll-now", 0.9, ChangeFreq::Monthly),
    ("/courses/data-science-advanced", 0.8, ChangeFreq::Monthly),
    ("/courses/full-stack-development", 0.8, ChangeFreq::Monthly),
    ("/courses/cloud-infrastructure", 0.8, ChangeFreq::Monthly),
];

/// Entries stamped with the current time.
pub fn sitemap_entries(config: &SiteConfig) -> Vec<SitemapEntry> {
    sitemap_entries_at(config, Utc::now())
}

/// Entries stamped with `lastmod`.
pub fn sitemap_entries_at(config: &SiteConfig, lastmod: DateTime<Utc>) -> Vec<SitemapEntry> {
    let lastmod = lastmod.to_rfc3339_opts(SecondsFormat::Secs, true);
    SITEMAP_PAGES
        .iter()
        .map(|&(path, priority, changefreq)| SitemapEntry {
            url: config.absolute_url(path),
            priority,
            changefreq,
            lastmod: lastmod.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn nine_entries_within_bounds() {
        let entries = sitemap_entries(&SiteConfig::default());
        assert_eq!(entries.len(), 9);
        for entry in &entries {
            assert!((0.0..=1.0).contains(&entry.priority), "{}", entry.url);
            assert!(matches!(
                entry.changefreq,
                ChangeFreq::Weekly | ChangeFreq::Monthly
            ));
            assert!(DateTime::parse_from_rfc3339(&entry.lastmod).is_ok());
        }
    }

    #[test]
    fn urls_are_absolute() {
        let entries = sitemap_entries(&SiteConfig::default());
        assert_eq!(entries[0].url, "https://udaantechacademy.com/");
        assert_eq!(
            entries[8].url,
            "https://udaantechacademy.com/courses/cloud-infrastructure"
        );
    }

    #[test]
    fn fixed_stamp() {
        let stamp = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let entries = sitemap_entries_at(&SiteConfig::default(), stamp);
        assert!(entries.iter().all(|e| e.lastmod == "2025-01-02T03:04:05Z"));
    }

    #[test]
    fn serializes_lowercase_changefreq() {
        let stamp = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let entries = sitemap_entries_at(&SiteConfig::default(), stamp);
        let value = serde_json::to_value(&entries[2]).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "url": "https://udaantechacademy.com/career-tracks",
                "priority": 0.9,
                "changefreq": "monthly",
                "lastmod": "2025-01-02T03:04:05Z"
            })
        );
    }

    #[test]
    fn every_sitemap_page_has_a_config() {
        for (path, _, _) in SITEMAP_PAGES {
            assert!(crate::page::for_path(path).is_some(), "{path}");
        }
    }
}
