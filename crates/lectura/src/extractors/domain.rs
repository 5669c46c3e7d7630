// ABOUTME: Derives a display publisher name from a URL's host.
// ABOUTME: Used as the publisher fallback and as the publisher of failure results.

use url::Url;

/// Returns the capitalized first host label of `url`, ignoring a leading `www.`.
///
/// `https://www.example.com/foo` gives `"Example"`. Malformed URLs and URLs
/// without a host give an empty string.
pub fn domain_name(url: &str) -> String {
    let host = match Url::parse(url).ok().and_then(|u| u.host_str().map(str::to_string)) {
        Some(h) => h,
        None => return String::new(),
    };

    let host = host.strip_prefix("www.").unwrap_or(&host);
    let label = host.split('.').next().unwrap_or_default();
    capitalize(label)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
