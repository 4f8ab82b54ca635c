//! Global read-only config handle.
//!
//! Uses `arc-swap` so the record loaded at startup can be read from
//! anywhere without locking. CLI commands read it through `cfg()`. Until `init_config` runs, readers see the
//! built-in defaults.

use crate::config::SiteConfig;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage.
pub static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

/// Publish the loaded config.
#[inline]
pub fn init_config(config: SiteConfig) -> Arc<SiteConfig> {
    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_publishes_config() {
        let mut config = SiteConfig::default();
        config.site.name = "Handle Test".into();
        let published = init_config(config);
        assert_eq!(published.site.name, "Handle Test");
        assert_eq!(cfg().site.name, "Handle Test");
    }
}
