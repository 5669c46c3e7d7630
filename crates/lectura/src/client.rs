// ABOUTME: The main Client struct for lectura that fetches article pages and extracts their metadata.
// ABOUTME: scrape() never fails: fetch and extraction errors become failure envelopes with degraded data.

use tracing::{debug, warn};

use crate::error::ScrapeError;
use crate::extractors::authors::AUTHOR_SELECTORS;
use crate::extractors::compiled::precompile_selectors;
use crate::extractors::extract_from_html;
use crate::extractors::fields::BODY_SELECTORS;
use crate::options::{ClientBuilder, Options};
use crate::resource::{fetch, FetchOptions};
use crate::result::{ArticleMetadata, ExtractionResult};

/// The lectura client. Cheap to share: one HTTP connection pool, no per-call state.
pub struct Client {
    opts: Options,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    ///
    /// If the configured HTTP client cannot be built (for example when the TLS
    /// backend fails to initialise), reqwest's default client is used instead.
    pub fn new(opts: Options) -> Self {
        let http_client = opts.http_client.clone().unwrap_or_else(|| {
            let mut builder = reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .gzip(true)
                .brotli(true)
                .deflate(true);
            if let Some(timeout) = opts.timeout {
                builder = builder.timeout(timeout);
            }
            builder.build().unwrap_or_else(|e| {
                warn!(error = %e, "falling back to default HTTP client");
                reqwest::Client::new()
            })
        });

        precompile_selectors(AUTHOR_SELECTORS.iter().chain(BODY_SELECTORS));

        Self { opts, http_client }
    }

    /// Fetch `url` and extract its metadata.
    ///
    /// Always returns an envelope. On failure, `data` carries only the URL and
    /// the domain-derived publisher.
    pub async fn scrape(&self, url: &str) -> ExtractionResult {
        match self.try_scrape(url).await {
            Ok(data) => ExtractionResult::ok(data),
            Err(err) => {
                warn!(url, error = %err, "scrape failed");
                ExtractionResult::failure(url, err.to_string())
            }
        }
    }

    /// Fetch `url` and extract its metadata, surfacing the error on failure.
    pub async fn try_scrape(&self, url: &str) -> Result<ArticleMetadata, ScrapeError> {
        if url.is_empty() {
            return Err(ScrapeError::invalid_url(url, "Scrape", None));
        }

        if url::Url::parse(url).is_err() {
            return Err(ScrapeError::invalid_url(
                url,
                "Scrape",
                Some(anyhow::anyhow!("malformed URL")),
            ));
        }

        let fetch_opts = FetchOptions {
            headers: self.opts.headers.clone(),
        };
        let fetched = fetch(&self.http_client, url, &fetch_opts).await?;
        let html = fetched.text();

        Ok(self.extract_html(&html, url))
    }

    /// Extract metadata from markup already in hand. No network access.
    pub fn extract_html(&self, html: &str, url: &str) -> ArticleMetadata {
        let data = extract_from_html(html, url);
        debug!(
            url,
            authors = data.authors.len(),
            words = data.word_count,
            section = %data.section,
            article_type = %data.article_type,
            "extracted metadata"
        );
        data
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

/// Scrape `url` with a default client.
pub async fn scrape_article(url: &str) -> ExtractionResult {
    Client::default().scrape(url).await
}
