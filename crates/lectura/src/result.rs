// ABOUTME: ArticleMetadata and ExtractionResult, the values returned by every scrape.
// ABOUTME: Also defines the closed Category and ArticleType vocabularies and their Spanish labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::extractors::domain::domain_name;

/// Topical section of an article, from a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "política")]
    Politica,
    #[serde(rename = "economía")]
    Economia,
    #[serde(rename = "tecnología")]
    Tecnologia,
    #[serde(rename = "cambio climático")]
    CambioClimatico,
    #[serde(rename = "global")]
    Global,
    #[serde(rename = "ciencia")]
    Ciencia,
    #[serde(rename = "urbanismo")]
    Urbanismo,
    #[default]
    #[serde(rename = "otro")]
    Otro,
}

impl Category {
    /// All categories in matching priority order, `Otro` last.
    pub const ALL: [Category; 8] = [
        Category::Politica,
        Category::Economia,
        Category::Tecnologia,
        Category::CambioClimatico,
        Category::Global,
        Category::Ciencia,
        Category::Urbanismo,
        Category::Otro,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Politica => "política",
            Category::Economia => "economía",
            Category::Tecnologia => "tecnología",
            Category::CambioClimatico => "cambio climático",
            Category::Global => "global",
            Category::Ciencia => "ciencia",
            Category::Urbanismo => "urbanismo",
            Category::Otro => "otro",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

/// Content form of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ArticleType {
    #[default]
    #[serde(rename = "noticia")]
    Noticia,
    #[serde(rename = "opinión")]
    Opinion,
    #[serde(rename = "reportaje")]
    Reportaje,
    #[serde(rename = "análisis")]
    Analisis,
}

impl ArticleType {
    pub const ALL: [ArticleType; 4] = [
        ArticleType::Noticia,
        ArticleType::Opinion,
        ArticleType::Reportaje,
        ArticleType::Analisis,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleType::Noticia => "noticia",
            ArticleType::Opinion => "opinión",
            ArticleType::Reportaje => "reportaje",
            ArticleType::Analisis => "análisis",
        }
    }
}

impl fmt::Display for ArticleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleType {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ArticleType::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

/// A label outside the closed Category / ArticleType vocabularies.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown label: {0:?}")]
pub struct UnknownLabel(pub String);

/// Metadata extracted from an article page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ArticleMetadata {
    pub title: String,
    pub authors: Vec<String>,
    pub publisher: String,
    pub section: Category,
    pub word_count: u32,
    pub article_type: ArticleType,
    pub url: String,
}

impl ArticleMetadata {
    /// Degraded metadata used when a scrape fails: only the URL and the
    /// domain-derived publisher are filled in.
    pub fn degraded(url: &str) -> Self {
        Self {
            publisher: domain_name(url),
            url: url.to_string(),
            ..Default::default()
        }
    }
}

/// The envelope returned by every scrape, successful or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub data: ArticleMetadata,
}

impl ExtractionResult {
    pub fn ok(data: ArticleMetadata) -> Self {
        Self {
            success: true,
            error: None,
            data,
        }
    }

    /// A failure envelope carrying `message` and degraded data for `url`.
    pub fn failure(url: &str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            data: ArticleMetadata::degraded(url),
        }
    }
}

/// Count whitespace-separated words in a text string.
pub fn word_count(text: &str) -> u32 {
    text.split_whitespace().count() as u32
}
