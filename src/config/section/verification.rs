//! `[verification]` configuration.
//!
//! Webmaster-tool ownership codes. Each tag is emitted only when its code is
//! set, so an unconfigured site never publishes placeholder values.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VerificationConfig {
    /// `google-site-verification`
    pub google: Option<String>,
    /// `msvalidate.01`
    pub bing: Option<String>,
    /// `yandex-verification`
    pub yandex: Option<String>,
}

impl VerificationConfig {
    /// Configured `(meta name, code)` pairs, skipping blank codes.
    pub fn tags(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("google-site-verification", self.google.as_deref()),
            ("msvalidate.01", self.bing.as_deref()),
            ("yandex-verification", self.yandex.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, code)| {
            code.map(str::trim)
                .filter(|c| !c.is_empty())
                .map(|c| (name, c))
        })
    }
}
