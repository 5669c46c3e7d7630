// ABOUTME: Pre-compiled CSS selector cache for O(1) selector lookup.
// ABOUTME: Eliminates repeated parsing of CSS selectors across scrape calls.

//! Selector caching for efficient repeated DOM queries.
//!
//! Every scrape runs the same fixed selector lists, so each selector string is
//! compiled once and reused for all subsequent queries.

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use scraper::Selector;

/// Thread-safe cache of compiled CSS selectors. Invalid selectors are cached as `None`.
static SELECTOR_CACHE: Lazy<RwLock<HashMap<String, Option<Selector>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Gets or compiles a CSS selector, caching the result.
///
/// Returns `Some(Selector)` if the selector is valid, `None` if invalid.
pub fn get_or_compile(css: &str) -> Option<Selector> {
    // A poisoned lock only means another thread panicked mid-insert; the map is still usable.
    {
        let cache = SELECTOR_CACHE.read().unwrap_or_else(|e| e.into_inner());
        if let Some(cached) = cache.get(css) {
            return cached.clone();
        }
    }

    let compiled = Selector::parse(css).ok();
    let mut cache = SELECTOR_CACHE.write().unwrap_or_else(|e| e.into_inner());
    if let Some(cached) = cache.get(css) {
        return cached.clone();
    }
    cache.insert(css.to_string(), compiled.clone());
    compiled
}

/// Precompiles a batch of selectors into the cache.
pub fn precompile_selectors<I, S>(selectors: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for sel in selectors {
        let _ = get_or_compile(sel.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_selector_is_cached() {
        let first = get_or_compile("[class*=\"article-body\"]");
        assert!(first.is_some());
        let cache = SELECTOR_CACHE.read().unwrap();
        assert!(cache.contains_key("[class*=\"article-body\"]"));
    }

    #[test]
    fn invalid_selector_returns_none_and_is_remembered() {
        assert!(get_or_compile("[[[invalid").is_none());
        assert!(get_or_compile("[[[invalid").is_none());
        let cache = SELECTOR_CACHE.read().unwrap();
        assert!(matches!(cache.get("[[[invalid"), Some(None)));
    }

    #[test]
    fn precompile_warms_cache() {
        precompile_selectors(["meta[name=\"section\"]", "main"]);
        let cache = SELECTOR_CACHE.read().unwrap();
        assert!(cache.contains_key("meta[name=\"section\"]"));
        assert!(cache.contains_key("main"));
    }
}
