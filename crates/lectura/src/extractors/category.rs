// ABOUTME: Maps free-text sections and URL paths onto the closed Category set.
// ABOUTME: Keyword tables are static and compiled once into Aho-Corasick automatons.

//! Category normalization.
//!
//! Rules are checked in `Category::ALL` order and the first rule with any
//! matching keyword wins. Section text is matched by substring after
//! lowercasing and folding Spanish accents, so "Política" and "politica"
//! agree. URL paths are matched per segment against a narrower prefix list.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use url::Url;

use crate::result::Category;

struct CategoryRule {
    category: Category,
    /// Substrings searched for in free-text section labels.
    keywords: &'static [&'static str],
    /// Prefixes a URL path segment may start with.
    path_prefixes: &'static [&'static str],
}

const RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::Politica,
        keywords: &["politica", "politics", "political", "gobierno", "government"],
        path_prefixes: &["politica", "politics"],
    },
    CategoryRule {
        category: Category::Economia,
        keywords: &[
            "economia", "economy", "business", "negocios", "finance", "finanzas", "markets",
        ],
        path_prefixes: &["economia", "economy", "business"],
    },
    CategoryRule {
        category: Category::Tecnologia,
        keywords: &["tecnologia", "technology", "tech", "digital", "ai", "software"],
        path_prefixes: &["tech", "tecnologia"],
    },
    CategoryRule {
        category: Category::CambioClimatico,
        keywords: &["clima", "climate", "environment", "medio ambiente", "sustainability"],
        path_prefixes: &["climate", "clima", "environment"],
    },
    CategoryRule {
        category: Category::Global,
        keywords: &["world", "internacional", "international", "global", "mundo"],
        path_prefixes: &["world", "internacional"],
    },
    CategoryRule {
        category: Category::Ciencia,
        keywords: &["ciencia", "science", "research", "investigacion"],
        path_prefixes: &["science", "ciencia"],
    },
    CategoryRule {
        category: Category::Urbanismo,
        keywords: &["urbanismo", "urban", "ciudad", "cities", "city"],
        path_prefixes: &["urban", "ciudad"],
    },
];

static KEYWORD_MATCHERS: Lazy<Vec<(Category, AhoCorasick)>> = Lazy::new(|| {
    RULES
        .iter()
        .map(|rule| {
            let ac = AhoCorasick::new(rule.keywords).expect("static category keywords compile");
            (rule.category, ac)
        })
        .collect()
});

/// Lowercases and strips Spanish diacritics (except ñ).
fn fold(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            other => other,
        })
        .collect()
}

/// Normalizes a raw section label to a `Category`. Empty input gives `Otro`.
///
/// Labels are accent-folded before the substring match, so "Política" and
/// "ECONOMÍA" resolve to their categories instead of `Otro`. A plain
/// case-insensitive substring match would miss them.
pub fn normalize_category(section: &str) -> Category {
    let folded = fold(section.trim());
    if folded.is_empty() {
        return Category::Otro;
    }

    KEYWORD_MATCHERS
        .iter()
        .find(|(_, ac)| ac.is_match(&folded))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Otro)
}

/// Infers a `Category` from the path segments of `url`.
///
/// Unparseable URLs are split on `/` as plain text.
pub fn infer_category_from_url(url: &str) -> Category {
    let path = match Url::parse(url) {
        Ok(u) => u.path().to_string(),
        Err(_) => url.to_string(),
    };
    let path = fold(&path);
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    RULES
        .iter()
        .find(|rule| {
            segments
                .iter()
                .any(|seg| rule.path_prefixes.iter().any(|p| seg.starts_with(p)))
        })
        .map(|rule| rule.category)
        .unwrap_or(Category::Otro)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn english_labels_map_to_spanish_categories() {
        assert_eq!(normalize_category("Politics"), Category::Politica);
        assert_eq!(normalize_category("Business & Markets"), Category::Economia);
        assert_eq!(normalize_category("Technology"), Category::Tecnologia);
        assert_eq!(normalize_category("Environment"), Category::CambioClimatico);
        assert_eq!(normalize_category("World News"), Category::Global);
        assert_eq!(normalize_category("Science"), Category::Ciencia);
        assert_eq!(normalize_category("Cities"), Category::Urbanismo);
    }

    #[test]
    fn accented_spanish_labels_match() {
        assert_eq!(normalize_category("Política"), Category::Politica);
        assert_eq!(normalize_category("ECONOMÍA"), Category::Economia);
        assert_eq!(normalize_category("Tecnología"), Category::Tecnologia);
        assert_eq!(normalize_category("Investigación"), Category::Ciencia);
    }

    #[test]
    fn unknown_and_empty_labels_are_otro() {
        assert_eq!(normalize_category("Lifestyle"), Category::Otro);
        assert_eq!(normalize_category(""), Category::Otro);
        assert_eq!(normalize_category("   "), Category::Otro);
    }

    #[test]
    fn first_category_in_table_order_wins() {
        // "government" (política) outranks "finance" (economía).
        assert_eq!(normalize_category("Government finance"), Category::Politica);
    }

    #[test]
    fn url_segments_drive_inference() {
        assert_eq!(
            infer_category_from_url("https://elpais.com/politica/2024/01/01/x.html"),
            Category::Politica
        );
        assert_eq!(
            infer_category_from_url("https://example.com/business/markets/story"),
            Category::Economia
        );
        assert_eq!(
            infer_category_from_url("https://example.com/technology/ai"),
            Category::Tecnologia
        );
        assert_eq!(
            infer_category_from_url("https://example.com/News/World/x"),
            Category::Global
        );
    }

    #[test]
    fn url_inference_ignores_host_and_non_prefix_matches() {
        assert_eq!(
            infer_category_from_url("https://techcrunch.com/2024/story"),
            Category::Otro
        );
        assert_eq!(
            infer_category_from_url("https://example.com/geopolitics/x"),
            Category::Otro
        );
    }

    #[test]
    fn url_inference_without_keywords_is_otro() {
        assert_eq!(infer_category_from_url("https://example.com/foo"), Category::Otro);
        assert_eq!(infer_category_from_url("not a url"), Category::Otro);
    }
}
