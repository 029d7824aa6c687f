// src/fetch/page.rs
// =============================================================================
// This module fetches HTML pages for the crawl.
//
// Key behavior:
// - Plain GET with the shared client (fixed 10 second timeout)
// - Any non-success status code is a failure; we never hand partial or
//   error-page content to the extractor
// - Network-level failures and HTTP-status failures are reported as
//   distinct error kinds so the crawl loop can describe them properly
//
// The fetching behavior lives behind the PageFetcher trait so that the
// crawl loop can be exercised in tests with an in-memory fake instead of
// a live network.
//
// Rust concepts:
// - async-trait: async fn in a trait (not yet native in edition 2021)
// - Traits as seams: The loop depends on the contract, not on reqwest
// =============================================================================

use async_trait::async_trait;
use reqwest::Client;

use crate::error::SpiderError;

// Something that can retrieve the body of a page URL.
#[async_trait]
pub trait PageFetcher {
    // Fetches the page and returns its body as text.
    //
    // Implementations must treat non-success HTTP statuses as errors
    // rather than returning their bodies.
    async fn fetch(&self, url: &str) -> Result<String, SpiderError>;
}

// The real fetcher, backed by a reqwest Client.
//
// The client is shared with the image downloader (connection pooling),
// and already carries the request timeout.
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, SpiderError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| SpiderError::Request {
                url: url.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(SpiderError::HttpStatus {
                url: url.to_string(),
                status: response.status(),
            });
        }

        response
            .text()
            .await
            .map_err(|source| SpiderError::Request {
                url: url.to_string(),
                source,
            })
    }
}
