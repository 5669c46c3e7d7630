// ABOUTME: Byline extraction: finds the author element, strips prefixes, and splits multiple names.
// ABOUTME: Stops at the first selector that matches any element, even if its text is unusable.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::dom::{attr_trimmed, text_trimmed, Document};

/// Author selectors in priority order.
pub const AUTHOR_SELECTORS: &[&str] = &[
    r#"meta[name="author"]"#,
    r#"meta[property="article:author"]"#,
    r#"[rel="author"]"#,
    ".author-name",
    ".byline",
    r#"[class*="author"]"#,
    r#"[itemprop="author"]"#,
];

/// Candidates this long or longer are treated as noise (a paragraph, a bio box).
pub const MAX_AUTHOR_CHARS: usize = 100;

static BYLINE_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:escrito por|written by|por|by)\b:?\s*").expect("static byline regex")
});

static AUTHOR_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",| y | and ").expect("static separator regex"));

/// Extracts the ordered author list.
///
/// Only the first selector that matches at least one element is consulted.
/// Its first element's `content` attribute is used when present, otherwise
/// its text. A later selector is never tried, so a rejected or empty
/// candidate yields no authors.
pub fn extract_authors(doc: &Document) -> Vec<String> {
    let el = match AUTHOR_SELECTORS.iter().find_map(|sel| doc.select_first(sel)) {
        Some(el) => el,
        None => return Vec::new(),
    };

    let candidate = attr_trimmed(&el, "content").unwrap_or_else(|| text_trimmed(&el));
    if candidate.chars().count() >= MAX_AUTHOR_CHARS {
        return Vec::new();
    }
    split_authors(&candidate)
}

/// Strips a byline prefix and splits `raw` into individual names.
pub fn split_authors(raw: &str) -> Vec<String> {
    let cleaned = BYLINE_PREFIX_RE.replace(raw.trim(), "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Vec::new();
    }

    if AUTHOR_SEPARATOR_RE.is_match(cleaned) {
        AUTHOR_SEPARATOR_RE
            .split(cleaned)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        vec![cleaned.to_string()]
    }
}
