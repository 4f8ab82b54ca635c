//! `[social]` configuration.

use serde::{Deserialize, Serialize};

/// Social profiles: the Twitter handle feeds `twitter:site`/`twitter:creator`,
/// the profile URLs feed the organization `sameAs` list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SocialConfig {
    pub twitter: String,
    pub twitter_url: String,
    pub facebook: String,
    pub linkedin: String,
    pub instagram: String,
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            twitter: "@udaantechacademy".into(),
            twitter_url: "https://www.twitter.com/udaantechacademy".into(),
            facebook: "https://www.facebook.com/udaantechacademy".into(),
            linkedin: "https://www.linkedin.com/company/udaantechacademy".into(),
            instagram: "https://www.instagram.com/udaantechacademy".into(),
        }
    }
}

impl SocialConfig {
    /// Non-empty profile URLs, in `sameAs` order.
    pub fn profiles(&self) -> Vec<&str> {
        [
            &self.facebook,
            &self.twitter_url,
            &self.linkedin,
            &self.instagram,
        ]
        .into_iter()
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_keep_order() {
        let social = SocialConfig::default();
        let profiles = social.profiles();
        assert_eq!(profiles.len(), 4);
        assert!(profiles[0].contains("facebook"));
        assert!(profiles[3].contains("instagram"));
    }

    #[test]
    fn profiles_skip_empty() {
        let social = SocialConfig {
            linkedin: String::new(),
            ..Default::default()
        };
        assert!(!social.profiles().iter().any(|p| p.contains("linkedin")));
    }
}
