// ABOUTME: Main library entry point for the lectura article metadata scraper.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, ExtractionResult, ArticleMetadata, ScrapeError.

//! Lectura - best-effort metadata scraper for news articles.
//!
//! Given an article URL, lectura fetches the page and pre-fills the fields a
//! reading tracker needs: title, authors, publisher, section, word count and
//! article type. Extraction is heuristic and tuned for Spanish and English
//! news sites.
//!
//! # Example
//!
//! ```no_run
//! use lectura::Client;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Client::builder().build();
//!     let result = client.scrape("https://example.com/politica/article").await;
//!     println!("{}", serde_json::to_string_pretty(&result).unwrap());
//! }
//! ```

pub mod api;
pub mod client;
pub mod dom;
pub mod error;
pub mod extractors;
pub mod options;
pub mod resource;
pub mod result;

pub use crate::api::{handle_scrape_request, ApiResponse};
pub use crate::client::{scrape_article, Client};
pub use crate::error::{ErrorCode, ScrapeError};
pub use crate::extractors::{extract_from_html, extract_metadata};
pub use crate::options::{ClientBuilder, Options};
pub use crate::result::{ArticleMetadata, ArticleType, Category, ExtractionResult};
