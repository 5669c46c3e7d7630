// ABOUTME: Fallback-chain extractors for title, publisher, section, word count, and article type.
// ABOUTME: Each chain tries its strategies in order and keeps the first non-empty value.

//! Field extraction.
//!
//! Key behaviors:
//! - Strategies are tried in order; first non-empty value wins.
//! - Meta strategies read the trimmed `content` attribute.
//! - Element strategies read trimmed text of the first match only.

use url::Url;

use crate::dom::Document;
use crate::extractors::category::{infer_category_from_url, normalize_category};
use crate::extractors::domain::domain_name;
use crate::result::{word_count, ArticleType, Category};

/// Title sources in priority order.
const TITLE_META_SELECTORS: &[&str] = &[
    r#"meta[property="og:title"]"#,
    r#"meta[name="twitter:title"]"#,
];

const PUBLISHER_META_SELECTORS: &[&str] = &[
    r#"meta[property="og:site_name"]"#,
    r#"meta[name="publisher"]"#,
    r#"meta[property="article:publisher"]"#,
];

const SECTION_META_SELECTORS: &[&str] = &[
    r#"meta[property="article:section"]"#,
    r#"meta[name="section"]"#,
];

/// Containers whose text is counted as the article body, in priority order.
pub const BODY_SELECTORS: &[&str] = &[
    "article",
    r#"[class*="article-body"]"#,
    r#"[class*="post-content"]"#,
    r#"[class*="entry-content"]"#,
    "main",
];

const OPINION_PATH_MARKERS: &[&str] = &["/opinion", "/columna"];
const FEATURE_PATH_MARKERS: &[&str] = &["/reportaje", "/feature", "/longread"];
const ANALYSIS_PATH_MARKERS: &[&str] = &["/analisis", "/analysis"];

fn first_meta(doc: &Document, selectors: &[&str]) -> Option<String> {
    selectors.iter().find_map(|sel| doc.meta_content(sel))
}

/// og:title, then twitter:title, then the first `<h1>`, then `<title>`.
pub fn extract_title(doc: &Document) -> String {
    first_meta(doc, TITLE_META_SELECTORS)
        .or_else(|| doc.first_text("h1"))
        .or_else(|| doc.first_text("title"))
        .unwrap_or_default()
}

/// Publisher metadata, falling back to the capitalized domain label.
pub fn extract_publisher(doc: &Document, url: &str) -> String {
    first_meta(doc, PUBLISHER_META_SELECTORS).unwrap_or_else(|| domain_name(url))
}

/// Raw section label from page metadata or a `[class*=section]` element.
pub fn extract_raw_section(doc: &Document) -> Option<String> {
    first_meta(doc, SECTION_META_SELECTORS).or_else(|| doc.first_text(r#"[class*="section"]"#))
}

/// Normalized section. Page labels are normalized as text; without one the
/// URL path decides.
pub fn extract_section(doc: &Document, url: &str) -> Category {
    match extract_raw_section(doc) {
        Some(raw) => normalize_category(&raw),
        None => infer_category_from_url(url),
    }
}

/// Words in the first body container that has any text; 0 when none does.
pub fn extract_word_count(doc: &Document) -> u32 {
    BODY_SELECTORS
        .iter()
        .map(|sel| doc.joined_text(sel))
        .find(|text| !text.is_empty())
        .map(|text| word_count(&text))
        .unwrap_or(0)
}

/// Infers the article type from URL path markers, then from the first `<h1>`.
pub fn extract_article_type(doc: &Document, url: &str) -> ArticleType {
    let path = url_path_lower(url);
    let has_any = |markers: &[&str]| markers.iter().any(|m| path.contains(m));

    if has_any(OPINION_PATH_MARKERS) {
        return ArticleType::Opinion;
    }
    if has_any(FEATURE_PATH_MARKERS) {
        return ArticleType::Reportaje;
    }
    if has_any(ANALYSIS_PATH_MARKERS) {
        return ArticleType::Analisis;
    }

    let heading = doc.first_text("h1").unwrap_or_default().to_lowercase();
    if heading.contains("análisis") || heading.contains("analysis") {
        return ArticleType::Analisis;
    }
    if heading.contains("opinión") || heading.contains("opinion") {
        return ArticleType::Opinion;
    }

    ArticleType::Noticia
}

fn url_path_lower(url: &str) -> String {
    match Url::parse(url) {
        Ok(u) => u.path().to_lowercase(),
        Err(_) => url.to_lowercase(),
    }
}
