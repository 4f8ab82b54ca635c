//! Type-safe config field path.

use crate::logger::paint;
use owo_colors::Style;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Sections declare their paths as associated constants:
///
/// ```ignore
/// impl SiteInfoConfig {
///     pub const URL: FieldPath = FieldPath::new("site.url");
/// }
///
/// diag.error(SiteInfoConfig::URL, "required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&paint(format_args!("`{}`", self.0), Style::new().bright_blue()))
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_quotes_path_without_color() {
        owo_colors::set_override(false);
        let path = FieldPath::new("site.url");
        assert_eq!(path.to_string(), "`site.url`");
        assert_eq!(path.as_ref(), "site.url");
    }
}
