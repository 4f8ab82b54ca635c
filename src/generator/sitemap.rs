//! Sitemap generation.
//!
//! Renders the page registry's sitemap entries as `sitemap.xml`.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01T00:00:00Z</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```

use crate::{
    config::SiteConfig,
    generator::minify_xml,
    log,
    page::{SitemapEntry, sitemap_entries},
};
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

pub struct Sitemap {
    urls: Vec<SitemapEntry>,
}

impl Sitemap {
    /// Sitemap of the fixed page list, stamped now.
    pub fn build(config: &SiteConfig) -> Self {
        Self::from_entries(sitemap_entries(config))
    }

    pub fn from_entries(urls: Vec<SitemapEntry>) -> Self {
        Self { urls }
    }

    pub fn entries(&self) -> &[SitemapEntry] {
        &self.urls
    }

    pub fn into_xml(self) -> String {
        let mut xml = String::with_capacity(2048);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.url));
            xml.push_str("</loc>\n    <lastmod>");
            xml.push_str(&escape_xml(&entry.lastmod));
            xml.push_str("</lastmod>\n    <changefreq>");
            xml.push_str(entry.changefreq.as_str());
            xml.push_str("</changefreq>\n    <priority>");
            xml.push_str(&format!("{:.1}", entry.priority.clamp(0.0, 1.0)));
            xml.push_str("</priority>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write the sitemap to `path`, creating parent directories.
    pub fn write(self, path: &Path, minify: bool) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let count = self.urls.len();
        let xml = self.into_xml();
        let xml = minify_xml(xml.as_bytes(), minify);

        fs::write(path, &*xml)
            .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;

        log!("sitemap"; "{} ({} urls)", path.display(), count);
        Ok(())
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{ChangeFreq, sitemap_entries_at};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn entry(url: &str, priority: f64, changefreq: ChangeFreq) -> SitemapEntry {
        SitemapEntry {
            url: url.to_string(),
            priority,
            changefreq,
            lastmod: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_sitemap_empty() {
        let xml = Sitemap::from_entries(vec![]).into_xml();

        assert!(xml.contains(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(xml.contains("</urlset>"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_sitemap_single_entry() {
        let xml = Sitemap::from_entries(vec![entry(
            "https://example.com/",
            1.0,
            ChangeFreq::Weekly,
        )])
        .into_xml();

        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(xml.contains("<lastmod>2025-01-01T00:00:00Z</lastmod>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>1.0</priority>"));
    }

    #[test]
    fn test_sitemap_priority_format() {
        let xml = Sitemap::from_entries(vec![entry("https://e.com/a", 0.8, ChangeFreq::Monthly)])
            .into_xml();
        assert!(xml.contains("<priority>0.8</priority>"));
        assert!(xml.contains("<changefreq>monthly</changefreq>"));
    }

    #[test]
    fn test_sitemap_escapes_special_chars() {
        let xml = Sitemap::from_entries(vec![entry(
            "https://example.com/search?q=a&b=c",
            0.5,
            ChangeFreq::Weekly,
        )])
        .into_xml();

        assert!(xml.contains("<loc>https://example.com/search?q=a&amp;b=c</loc>"));
    }

    #[test]
    fn test_full_site_sitemap() {
        let stamp = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        let sitemap =
            Sitemap::from_entries(sitemap_entries_at(&SiteConfig::default(), stamp));
        assert_eq!(sitemap.entries().len(), 9);

        let xml = sitemap.into_xml();
        assert_eq!(xml.matches("<url>").count(), 9);
        assert!(xml.contains("<loc>https://udaantechacademy.com/career-tracks</loc>"));

        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert!(lines[1].starts_with("<urlset"));
        assert_eq!(lines.last().map(|l| l.trim()), Some("</urlset>"));
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("public").join("sitemap.xml");

        Sitemap::build(&SiteConfig::default())
            .write(&path, false)
            .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written.matches("<url>").count(), 9);
    }

    #[test]
    fn test_write_minified() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sitemap.xml");

        Sitemap::from_entries(vec![entry("https://e.com/", 1.0, ChangeFreq::Weekly)])
            .write(&path, true)
            .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(!written.contains('\n'));
        assert!(written.contains("<url><loc>https://e.com/</loc>"));
    }
}
