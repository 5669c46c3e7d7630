// ABOUTME: Thin query layer over a permissively parsed HTML document.
// ABOUTME: Exposes first/all selector matches, attribute reads, and trimmed text helpers.

//! Document querying.
//!
//! `Document` wraps `scraper::Html`, which follows the HTML5 parsing algorithm
//! and therefore never fails: malformed markup yields a best-effort tree.
//! Extractors only need a handful of operations, so the wrapper keeps them
//! independent of the parsing backend.

use scraper::{ElementRef, Html};

use crate::extractors::compiled::get_or_compile;

/// A parsed HTML document.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse raw markup. Never fails.
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// All elements matching `css`, in document order. Invalid selectors match nothing.
    pub fn select_all(&self, css: &str) -> Vec<ElementRef<'_>> {
        let Some(sel) = get_or_compile(css) else {
            return Vec::new();
        };
        let matches = self.html.select(&sel).collect();
        matches
    }

    /// The first element matching `css`.
    pub fn select_first(&self, css: &str) -> Option<ElementRef<'_>> {
        let sel = get_or_compile(css)?;
        let first = self.html.select(&sel).next();
        first
    }

    /// Trimmed `content` attribute of the first element matching `css`, if non-empty.
    pub fn meta_content(&self, css: &str) -> Option<String> {
        self.select_first(css)
            .and_then(|el| attr_trimmed(&el, "content"))
    }

    /// Trimmed text of the first element matching `css`, if non-empty.
    pub fn first_text(&self, css: &str) -> Option<String> {
        self.select_first(css)
            .map(|el| text_trimmed(&el))
            .filter(|t| !t.is_empty())
    }

    /// Text of every element matching `css`, joined with spaces. Empty when nothing matches.
    ///
    /// Text nodes inside one element run together, so inline markup never splits a word.
    pub fn joined_text(&self, css: &str) -> String {
        self.select_all(css)
            .iter()
            .map(|el| el.text().collect::<String>())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Trimmed attribute value, `None` when absent or blank.
pub fn attr_trimmed(el: &ElementRef<'_>, name: &str) -> Option<String> {
    el.value()
        .attr(name)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Concatenated descendant text with surrounding whitespace trimmed.
pub fn text_trimmed(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
