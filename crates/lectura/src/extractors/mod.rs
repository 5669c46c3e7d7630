// ABOUTME: Field extraction pipeline turning a parsed page into ArticleMetadata.
// ABOUTME: Each field has its own independent fallback chain over the same read-only document.

//! Metadata extraction module.
//!
//! Submodules:
//! - `authors`: byline discovery, prefix stripping and name splitting.
//! - `category`: closed-set section normalization and URL inference.
//! - `compiled`: process-wide compiled selector cache.
//! - `domain`: publisher name derived from the URL host.
//! - `fields`: title, publisher, section, word count and article type chains.

pub mod authors;
pub mod category;
pub mod compiled;
pub mod domain;
pub mod fields;

use crate::dom::Document;
use crate::result::ArticleMetadata;

/// Runs every field extractor over `doc`. Pure: identical input gives identical output.
pub fn extract_metadata(doc: &Document, url: &str) -> ArticleMetadata {
    ArticleMetadata {
        title: fields::extract_title(doc),
        authors: authors::extract_authors(doc),
        publisher: fields::extract_publisher(doc, url),
        section: fields::extract_section(doc, url),
        word_count: fields::extract_word_count(doc),
        article_type: fields::extract_article_type(doc, url),
        url: url.to_string(),
    }
}

/// Parses `html` and extracts its metadata.
pub fn extract_from_html(html: &str, url: &str) -> ArticleMetadata {
    let doc = Document::parse(html);
    extract_metadata(&doc, url)
}
