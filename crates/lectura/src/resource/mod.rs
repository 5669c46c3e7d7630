// ABOUTME: Resource handling module for fetching article pages over HTTP.
// ABOUTME: Issues a single GET, enforces content-length limits, and decodes the body charset.

use std::collections::HashMap;

use bytes::Bytes;
use tracing::debug;

use crate::error::ScrapeError;

/// Maximum allowed content length (10 MB).
pub const MAX_CONTENT_LENGTH: usize = 10 * 1024 * 1024;

/// Options for fetching a resource.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub headers: HashMap<String, String>,
}

/// Result of a successful fetch operation.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl FetchResult {
    /// Decode the body as UTF-8 text, using charset hints from the content-type header.
    pub fn text(&self) -> String {
        decode_body(&self.body, self.content_type.as_deref())
    }
}

/// Decode body bytes to a String using charset from content-type header or detection.
fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    if let Some(ct) = content_type {
        if let Some(charset) = extract_charset(ct) {
            if let Some(encoding) = encoding_rs::Encoding::for_label(charset.as_bytes()) {
                let (decoded, _, _) = encoding.decode(body);
                return decoded.into_owned();
            }
        }
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

/// Extract charset value from Content-Type header.
fn extract_charset(content_type: &str) -> Option<String> {
    let lower = content_type.to_lowercase();
    for part in lower.split(';') {
        let trimmed = part.trim();
        if let Some(charset) = trimmed.strip_prefix("charset=") {
            let charset = charset.trim_matches('"').trim_matches('\'');
            return Some(charset.to_string());
        }
    }
    None
}

/// Fetch a resource from the given URL.
///
/// Any 2xx status is a success. Other statuses become `Fetch` errors carrying
/// the status code; connection and body-read failures become `Transport` errors.
pub async fn fetch(
    client: &reqwest::Client,
    url: &str,
    opts: &FetchOptions,
) -> Result<FetchResult, ScrapeError> {
    if url.is_empty() {
        return Err(ScrapeError::invalid_url(url, "Fetch", None));
    }

    let parsed_url = url::Url::parse(url).map_err(|e| {
        ScrapeError::invalid_url(url, "Fetch", Some(anyhow::anyhow!("invalid URL: {}", e)))
    })?;

    let scheme = parsed_url.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ScrapeError::invalid_url(
            url,
            "Fetch",
            Some(anyhow::anyhow!("scheme must be http or https")),
        ));
    }

    let mut request = client.get(parsed_url);
    for (key, value) in &opts.headers {
        request = request.header(key, value);
    }

    debug!(url, "fetching page");
    let response = request.send().await.map_err(|e| {
        ScrapeError::transport(url, "Fetch", Some(anyhow::anyhow!("request failed: {}", e)))
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::http_status(url, "Fetch", status.as_u16()));
    }

    let content_length = response.content_length().or_else(|| {
        response
            .headers()
            .get("content-length")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok())
    });

    if let Some(len) = content_length {
        if len as usize > MAX_CONTENT_LENGTH {
            return Err(ScrapeError::fetch(
                url,
                "Fetch",
                Some(anyhow::anyhow!("content too large")),
            ));
        }
    }

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_lowercase());

    let body = response.bytes().await.map_err(|e| {
        ScrapeError::transport(
            url,
            "Fetch",
            Some(anyhow::anyhow!("failed to read body: {}", e)),
        )
    })?;

    if body.len() > MAX_CONTENT_LENGTH {
        return Err(ScrapeError::fetch(
            url,
            "Fetch",
            Some(anyhow::anyhow!("content too large")),
        ));
    }

    debug!(url, status = status.as_u16(), bytes = body.len(), "fetched page");

    Ok(FetchResult {
        status: status.as_u16(),
        content_type,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use pretty_assertions::assert_eq;

    fn create_test_client() -> reqwest::Client {
        reqwest::Client::builder()
            .user_agent("test-agent")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_ok_utf8() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/test");
            then.status(200)
                .header("content-type", "text/plain; charset=utf-8")
                .body("hello");
        });

        let client = create_test_client();
        let result = fetch(&client, &server.url("/test"), &FetchOptions::default()).await;
        mock.assert();

        let result = result.expect("fetch should succeed");
        assert_eq!(result.status, 200);
        assert_eq!(result.text(), "hello");
    }

    #[tokio::test]
    async fn test_fetch_accepts_any_2xx() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/created");
            then.status(203).body("<p>ok</p>");
        });

        let client = create_test_client();
        let result = fetch(&client, &server.url("/created"), &FetchOptions::default()).await;
        mock.assert();

        assert_eq!(result.expect("2xx should succeed").status, 203);
    }

    #[tokio::test]
    async fn test_fetch_non_success_carries_status() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/notfound");
            then.status(404).body("not found");
        });

        let client = create_test_client();
        let result = fetch(&client, &server.url("/notfound"), &FetchOptions::default()).await;
        mock.assert();

        let err = result.expect_err("should fail on 404");
        assert!(err.is_fetch());
        assert_eq!(err.status, Some(404));
        assert!(err.to_string().contains("HTTP 404"));
    }

    #[tokio::test]
    async fn test_fetch_sends_custom_headers() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/h")
                .header("accept-language", "es-ES");
            then.status(200).body("ok");
        });

        let client = create_test_client();
        let mut opts = FetchOptions::default();
        opts.headers
            .insert("Accept-Language".to_string(), "es-ES".to_string());

        let result = fetch(&client, &server.url("/h"), &opts).await;
        mock.assert();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_transport() {
        let client = create_test_client();
        // Port 9 (discard) on localhost is expected to be closed.
        let result = fetch(&client, "http://127.0.0.1:9/", &FetchOptions::default()).await;

        let err = result.expect_err("closed port should fail");
        assert!(err.is_transport());
        assert_eq!(err.status, None);
    }

    #[tokio::test]
    async fn test_fetch_rejects_non_http_scheme() {
        let client = create_test_client();
        let result = fetch(&client, "ftp://example.com/file", &FetchOptions::default()).await;
        assert!(result.expect_err("ftp should be rejected").is_invalid_url());
    }

    #[tokio::test]
    async fn test_fetch_rejects_malformed_url() {
        let client = create_test_client();
        let result = fetch(&client, "not a url", &FetchOptions::default()).await;
        assert!(result.expect_err("malformed").is_invalid_url());
    }

    #[test]
    fn test_max_content_length_constant() {
        assert_eq!(MAX_CONTENT_LENGTH, 10 * 1024 * 1024);
    }

    #[test]
    fn test_decode_iso_8859_1_with_charset_header() {
        let iso_bytes: &[u8] = &[0x70, 0x6f, 0x6c, 0xed, 0x74, 0x69, 0x63, 0x61];
        let decoded = decode_body(iso_bytes, Some("text/html; charset=iso-8859-1"));
        assert_eq!(decoded, "política");
    }

    #[test]
    fn test_extract_charset() {
        assert_eq!(
            extract_charset("text/html; charset=utf-8"),
            Some("utf-8".to_string())
        );
        assert_eq!(
            extract_charset("text/html; charset=ISO-8859-1"),
            Some("iso-8859-1".to_string())
        );
        assert_eq!(
            extract_charset("text/html; charset=\"utf-8\""),
            Some("utf-8".to_string())
        );
        assert_eq!(extract_charset("text/html"), None);
    }

    #[test]
    fn test_decode_body_with_charset() {
        let body = "hello world".as_bytes();
        let decoded = decode_body(body, Some("text/plain; charset=utf-8"));
        assert_eq!(decoded, "hello world");
    }
}
