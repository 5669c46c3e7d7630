// ABOUTME: Configuration options for the lectura scraper and the ClientBuilder used to apply them.
// ABOUTME: ClientBuilder provides a fluent API for constructing Client instances with custom settings.

use std::collections::HashMap;
use std::time::Duration;

use crate::client::Client;

/// Browser-like User-Agent sent with every fetch to reduce anti-bot rejections.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

/// Configuration options for the lectura client.
#[derive(Debug, Clone)]
pub struct Options {
    pub user_agent: String,
    /// Request timeout. `None` keeps the HTTP client's default (no timeout).
    pub timeout: Option<Duration>,
    pub http_client: Option<reqwest::Client>,
    pub headers: HashMap<String, String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            http_client: None,
            headers: HashMap::new(),
        }
    }
}

/// Builder for constructing Client instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Use a custom HTTP client. The user agent and timeout options are not applied to it.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Add a custom header to all requests.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    /// Build the Client with the configured options.
    pub fn build(self) -> Client {
        Client::new(self.opts)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
