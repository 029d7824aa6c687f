// src/fetch/mod.rs
// =============================================================================
// This module owns all HTTP traffic.
//
// Submodules:
// - page: Fetches HTML pages (PageFetcher trait + reqwest implementation)
// - image: Streams images to disk (ImageDownloader trait + implementation)
//
// Both implementations share one reqwest Client built here, so page
// fetches and image downloads reuse pooled connections and carry the
// same fixed timeout.
// =============================================================================

mod image;
mod page;

// Re-export public items from submodules
pub use image::{image_filename, HttpImageDownloader, ImageDownloader, ImageResult, ImageStatus};
pub use page::{HttpPageFetcher, PageFetcher};

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;

// Every request (page or image) gets this long to complete
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// Builds the HTTP client shared by the fetcher and the downloader.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("Failed to create HTTP client")
}
