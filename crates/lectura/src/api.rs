// ABOUTME: Framework-agnostic handler for the `{ "url": ... }` scrape endpoint.
// ABOUTME: Maps request-shape errors to 400, unexpected failures to 500, and scrapes to 200.

//! HTTP boundary for the scraper.
//!
//! A web layer passes the raw request body to [`handle_scrape_request`] and
//! writes back the returned status and JSON. A scrape that fails is still a
//! 200: uncooperative pages are an expected outcome, not a server error.

use serde::Serialize;
use serde_json::{json, Value};
use tracing::error;

use crate::client::Client;

pub const URL_REQUIRED: &str = "URL requerida";
pub const URL_INVALID: &str = "URL inválida";
pub const PROCESSING_FAILED: &str = "Error al procesar la URL";

/// Status code and JSON body to send back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({ "success": false, "error": message }),
        }
    }
}

/// Outcome of checking the `url` member of a request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlCheck {
    Valid(String),
    Missing,
    Invalid,
}

/// Validates the `url` member: absent, null, `false` or `""` are missing;
/// anything else must be a string holding an absolute URL.
pub fn check_url(value: Option<&Value>) -> UrlCheck {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => UrlCheck::Missing,
        Some(Value::String(s)) if s.is_empty() => UrlCheck::Missing,
        Some(Value::String(s)) => match url::Url::parse(s) {
            Ok(_) => UrlCheck::Valid(s.clone()),
            Err(_) => UrlCheck::Invalid,
        },
        Some(_) => UrlCheck::Invalid,
    }
}

/// Handles a raw JSON request body of the form `{ "url": "..." }`.
pub async fn handle_scrape_request(client: &Client, body: &[u8]) -> ApiResponse {
    let request: Value = match serde_json::from_slice(body) {
        Ok(Value::Null) => {
            error!("scrape request body is null");
            return ApiResponse::error(500, PROCESSING_FAILED);
        }
        Ok(value) => value,
        Err(e) => {
            error!(error = %e, "scrape request body is not JSON");
            return ApiResponse::error(500, PROCESSING_FAILED);
        }
    };

    // Arrays, strings, numbers and booleans carry no `url` member.
    let url = match check_url(request.as_object().and_then(|obj| obj.get("url"))) {
        UrlCheck::Valid(url) => url,
        UrlCheck::Missing => return ApiResponse::error(400, URL_REQUIRED),
        UrlCheck::Invalid => return ApiResponse::error(400, URL_INVALID),
    };

    let result = client.scrape(&url).await;
    match serde_json::to_value(&result) {
        Ok(body) => ApiResponse { status: 200, body },
        Err(e) => {
            error!(url = %url, error = %e, "failed to serialize scrape result");
            ApiResponse::error(500, PROCESSING_FAILED)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn check_url_classifies_values() {
        assert_eq!(check_url(None), UrlCheck::Missing);
        assert_eq!(check_url(Some(&json!(null))), UrlCheck::Missing);
        assert_eq!(check_url(Some(&json!(""))), UrlCheck::Missing);
        assert_eq!(check_url(Some(&json!("nope"))), UrlCheck::Invalid);
        assert_eq!(check_url(Some(&json!(42))), UrlCheck::Invalid);
        assert_eq!(
            check_url(Some(&json!("https://example.com/a"))),
            UrlCheck::Valid("https://example.com/a".to_string())
        );
    }

    #[tokio::test]
    async fn missing_url_is_400() {
        let client = Client::builder().build();
        let resp = handle_scrape_request(&client, br#"{}"#).await;
        assert_eq!(resp, ApiResponse::error(400, URL_REQUIRED));
    }

    #[tokio::test]
    async fn malformed_url_is_400() {
        let client = Client::builder().build();
        let resp = handle_scrape_request(&client, br#"{"url":"example.com/no-scheme"}"#).await;
        assert_eq!(resp.status, 400);
        assert_eq!(resp.body["error"], json!(URL_INVALID));
    }

    #[tokio::test]
    async fn non_json_body_is_500() {
        let client = Client::builder().build();
        let resp = handle_scrape_request(&client, b"url=https://example.com").await;
        assert_eq!(resp, ApiResponse::error(500, PROCESSING_FAILED));
    }

    #[tokio::test]
    async fn null_body_is_500() {
        let client = Client::builder().build();
        let resp = handle_scrape_request(&client, b"null").await;
        assert_eq!(resp, ApiResponse::error(500, PROCESSING_FAILED));
    }

    #[tokio::test]
    async fn non_object_json_body_is_400() {
        let client = Client::builder().build();
        let bodies: [&[u8]; 4] = [b"[]", b"\"x\"", b"7", b"true"];
        for body in bodies {
            let resp = handle_scrape_request(&client, body).await;
            assert_eq!(resp, ApiResponse::error(400, URL_REQUIRED));
        }
    }

    #[tokio::test]
    async fn scrape_failure_is_200_with_envelope() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/missing");
            then.status(404);
        });

        let client = Client::builder().build();
        let body = json!({ "url": server.url("/missing") }).to_string();
        let resp = handle_scrape_request(&client, body.as_bytes()).await;

        assert_eq!(resp.status, 200);
        assert_eq!(resp.body["success"], json!(false));
        assert_eq!(resp.body["data"]["section"], json!("otro"));
        assert_eq!(resp.body["data"]["authors"], json!([]));
    }

    #[tokio::test]
    async fn successful_scrape_is_200() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/ok");
            then.status(200)
                .header("content-type", "text/html")
                .body(r#"<html><head><title>Hola</title></head><body></body></html>"#);
        });

        let client = Client::builder().build();
        let body = json!({ "url": server.url("/ok") }).to_string();
        let resp = handle_scrape_request(&client, body.as_bytes()).await;

        assert_eq!(resp.status, 200);
        assert_eq!(resp.body["success"], json!(true));
        assert_eq!(resp.body["data"]["title"], json!("Hola"));
    }
}
