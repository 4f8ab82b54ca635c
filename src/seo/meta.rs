//! Head tags: `<title>`, `<meta name>`, `<meta property>`, `<link>`.
//!
//! Tags keep insertion order so the rendered head is stable, and can be
//! looked up by name or property for callers that want a flat mapping.

use crate::utils::html::{escape, escape_attr};
use std::fmt::Write;

/// A single head element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaTag {
    Title(String),
    /// `<meta name=".." content="..">`
    Name { name: String, content: String },
    /// `<meta property=".." content="..">` (Open Graph, article)
    Property { property: String, content: String },
    /// `<link rel=".." href="..">`
    Link {
        rel: String,
        href: String,
        crossorigin: Option<String>,
    },
}

impl MetaTag {
    /// Write the tag as HTML.
    pub fn write_html(&self, out: &mut String) {
        // Writing to a String cannot fail
        let _ = match self {
            Self::Title(text) => write!(out, "<title>{}</title>", escape(text)),
            Self::Name { name, content } => write!(
                out,
                r#"<meta name="{}" content="{}">"#,
                escape_attr(name),
                escape_attr(content)
            ),
            Self::Property { property, content } => write!(
                out,
                r#"<meta property="{}" content="{}">"#,
                escape_attr(property),
                escape_attr(content)
            ),
            Self::Link {
                rel,
                href,
                crossorigin,
            } => {
                let _ = write!(
                    out,
                    r#"<link rel="{}" href="{}""#,
                    escape_attr(rel),
                    escape_attr(href)
                );
                if let Some(value) = crossorigin {
                    let _ = write!(out, r#" crossorigin="{}""#, escape_attr(value));
                }
                write!(out, ">")
            }
        };
    }
}

/// Ordered collection of head tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaTags {
    tags: Vec<MetaTag>,
}

impl MetaTags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, text: impl Into<String>) -> &mut Self {
        self.tags.push(MetaTag::Title(text.into()));
        self
    }

    pub fn name(&mut self, name: impl Into<String>, content: impl Into<String>) -> &mut Self {
        self.tags.push(MetaTag::Name {
            name: name.into(),
            content: content.into(),
        });
        self
    }

    pub fn property(
        &mut self,
        property: impl Into<String>,
        content: impl Into<String>,
    ) -> &mut Self {
        self.tags.push(MetaTag::Property {
            property: property.into(),
            content: content.into(),
        });
        self
    }

    pub fn link(&mut self, rel: impl Into<String>, href: impl Into<String>) -> &mut Self {
        self.tags.push(MetaTag::Link {
            rel: rel.into(),
            href: href.into(),
            crossorigin: None,
        });
        self
    }

    pub fn link_crossorigin(
        &mut self,
        rel: impl Into<String>,
        href: impl Into<String>,
        crossorigin: impl Into<String>,
    ) -> &mut Self {
        self.tags.push(MetaTag::Link {
            rel: rel.into(),
            href: href.into(),
            crossorigin: Some(crossorigin.into()),
        });
        self
    }

    /// Content of the first tag with this name or property.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.tags.iter().find_map(|tag| match tag {
            MetaTag::Name { name, content } if name == key => Some(content.as_str()),
            MetaTag::Property { property, content } if property == key => Some(content.as_str()),
            _ => None,
        })
    }

    /// Text of the `<title>` tag.
    pub fn title_text(&self) -> Option<&str> {
        self.tags.iter().find_map(|tag| match tag {
            MetaTag::Title(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// `href` of every link with this `rel`, in order.
    pub fn links(&self, rel: &str) -> Vec<&str> {
        self.tags
            .iter()
            .filter_map(|tag| match tag {
                MetaTag::Link { rel: r, href, .. } if r == rel => Some(href.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetaTag> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl<'a> IntoIterator for &'a MetaTags {
    type Item = &'a MetaTag;
    type IntoIter = std::slice::Iter<'a, MetaTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn html(tag: &MetaTag) -> String {
        let mut out = String::new();
        tag.write_html(&mut out);
        out
    }

    mod render {
        use super::*;

        #[test]
        fn title_is_escaped() {
            assert_eq!(
                html(&MetaTag::Title("Q&A <live>".into())),
                "<title>Q&amp;A &lt;live&gt;</title>"
            );
        }

        #[test]
        fn name_and_property() {
            let name = MetaTag::Name {
                name: "description".into(),
                content: r#"say "hi""#.into(),
            };
            assert_eq!(
                html(&name),
                r#"<meta name="description" content="say &quot;hi&quot;">"#
            );

            let prop = MetaTag::Property {
                property: "og:type".into(),
                content: "website".into(),
            };
            assert_eq!(html(&prop), r#"<meta property="og:type" content="website">"#);
        }

        #[test]
        fn link_with_crossorigin() {
            let link = MetaTag::Link {
                rel: "preconnect".into(),
                href: "https://fonts.gstatic.com".into(),
                crossorigin: Some("anonymous".into()),
            };
            assert_eq!(
                html(&link),
                r#"<link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous">"#
            );
        }
    }

    mod lookup {
        use super::*;

        fn sample() -> MetaTags {
            let mut tags = MetaTags::new();
            tags.title("Home")
                .name("description", "desc")
                .property("og:title", "Home")
                .link("canonical", "https://example.com/")
                .link("preconnect", "https://a.example")
                .link("preconnect", "https://b.example");
            tags
        }

        #[test]
        fn get_by_name_or_property() {
            let tags = sample();
            assert_eq!(tags.get("description"), Some("desc"));
            assert_eq!(tags.get("og:title"), Some("Home"));
            assert_eq!(tags.get("og:image"), None);
        }

        #[test]
        fn title_and_links() {
            let tags = sample();
            assert_eq!(tags.title_text(), Some("Home"));
            assert_eq!(tags.links("canonical"), vec!["https://example.com/"]);
            assert_eq!(
                tags.links("preconnect"),
                vec!["https://a.example", "https://b.example"]
            );
            assert_eq!(tags.len(), 6);
        }
    }
}
