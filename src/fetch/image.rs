// src/fetch/image.rs
// =============================================================================
// This module downloads images to the output directory.
//
// Key behavior:
// - Streamed GET: the body is consumed chunk by chunk, never buffered
//   whole, so a 200 MB photo costs kilobytes of memory
// - Chunks pass through an 8192-byte write buffer on their way to disk
// - The filename is the basename of the URL path; an existing file with
//   the same name is silently overwritten
// - Failures are returned as values; the crawl loop reports them and
//   keeps going
//
// This module also defines the per-image result records that end up in
// the crawl report (and in the --json output).
//
// Rust concepts:
// - Streams: An async iterator over body chunks (futures::StreamExt)
// - BufWriter: Batches small writes into fewer syscalls
// =============================================================================

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use futures::StreamExt; // gives us .next() on the byte stream
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use url::Url;

use crate::error::SpiderError;

// Size of the write buffer between the network stream and the file
const WRITE_BUFFER_SIZE: usize = 8192;

// What happened to one image
//
// #[derive(Serialize, Deserialize)] lets us convert to/from JSON
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ImageStatus {
    /// Downloaded and written to the output directory
    Saved,
    /// The GET failed (network error or non-success status)
    FetchFailed,
    /// The GET worked but writing the file did not
    WriteFailed,
}

// The result of one download attempt, as recorded in the crawl report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageResult {
    /// The image URL that was attempted
    pub url: String,
    /// What happened
    #[serde(flatten)] // merges the status tag into this record
    pub status: ImageStatus,
    /// Saved path or failure description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ImageResult {
    pub fn saved(url: String, file: &Path) -> Self {
        Self {
            url,
            status: ImageStatus::Saved,
            message: Some(format!("saved to {}", file.display())),
        }
    }

    pub fn failed(url: String, error: &SpiderError) -> Self {
        let status = if error.is_write_error() {
            ImageStatus::WriteFailed
        } else {
            ImageStatus::FetchFailed
        };
        Self {
            url,
            status,
            message: Some(error.to_string()),
        }
    }

    /// True when the image actually made it to disk
    pub fn is_saved(&self) -> bool {
        matches!(self.status, ImageStatus::Saved)
    }
}

// Something that can save an image URL into a directory.
#[async_trait]
pub trait ImageDownloader {
    // Downloads the image and returns the path it was written to.
    async fn download(&self, image_url: &str, save_path: &Path) -> Result<PathBuf, SpiderError>;
}

// The real downloader, backed by the shared reqwest Client.
pub struct HttpImageDownloader {
    client: Client,
}

impl HttpImageDownloader {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageDownloader for HttpImageDownloader {
    async fn download(&self, image_url: &str, save_path: &Path) -> Result<PathBuf, SpiderError> {
        // Work out the destination filename before any I/O
        let parsed = Url::parse(image_url).map_err(|source| SpiderError::InvalidUrl {
            url: image_url.to_string(),
            source,
        })?;
        let filename = image_filename(&parsed).ok_or_else(|| SpiderError::NoFilename {
            url: image_url.to_string(),
        })?;
        let destination = save_path.join(filename);

        let response = self
            .client
            .get(image_url)
            .send()
            .await
            .map_err(|source| SpiderError::Request {
                url: image_url.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(SpiderError::HttpStatus {
                url: image_url.to_string(),
                status: response.status(),
            });
        }

        // File::create truncates, so a colliding basename overwrites the
        // previous download
        let file = File::create(&destination)
            .await
            .map_err(|source| SpiderError::Write {
                path: destination.clone(),
                source,
            })?;
        let mut writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, file);

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|source| SpiderError::Request {
                url: image_url.to_string(),
                source,
            })?;
            writer
                .write_all(&chunk)
                .await
                .map_err(|source| SpiderError::Write {
                    path: destination.clone(),
                    source,
                })?;
        }

        writer.flush().await.map_err(|source| SpiderError::Write {
            path: destination.clone(),
            source,
        })?;

        Ok(destination)
    }
}

// The filename an image URL saves under: the basename of its path.
//
// Examples:
//   http://example.com/pics/a.jpg -> Some("a.jpg")
//   http://example.com/a.jpg?v=2  -> Some("a.jpg")  (query not part of the name)
//   http://example.com/           -> None
pub fn image_filename(url: &Url) -> Option<String> {
    let name = url.path_segments()?.last()?;
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is bytes_stream()?
//    - reqwest's way of exposing the response body incrementally
//    - Each .next().await yields one chunk (a Bytes value) as it arrives
//    - Without it, .bytes() would load the whole image into memory first
//
// 2. Why BufWriter::with_capacity?
//    - Network chunks can be small; writing each directly means many
//      syscalls
//    - The buffer coalesces them into 8192-byte writes
//    - flush() at the end pushes out whatever is left in the buffer
//
// 3. Why does download() return PathBuf?
//    - The caller prints and records where the file landed
//    - The path is derived from the URL, so it is only known here
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_filename_is_path_basename() {
        assert_eq!(
            image_filename(&url("http://example.com/pics/a.jpg")),
            Some("a.jpg".to_string())
        );
    }

    #[test]
    fn test_filename_ignores_query() {
        assert_eq!(
            image_filename(&url("http://example.com/a.jpg?version=2")),
            Some("a.jpg".to_string())
        );
    }

    #[test]
    fn test_no_filename_for_bare_host_or_directory() {
        assert_eq!(image_filename(&url("http://example.com/")), None);
        assert_eq!(image_filename(&url("http://example.com/pics/")), None);
    }

    #[test]
    fn test_result_classification() {
        let saved = ImageResult::saved(
            "http://example.com/a.jpg".to_string(),
            Path::new("./data/a.jpg"),
        );
        assert!(saved.is_saved());
        assert_eq!(saved.status, ImageStatus::Saved);

        let write_err = SpiderError::Write {
            path: PathBuf::from("./data/a.jpg"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        let failed = ImageResult::failed("http://example.com/a.jpg".to_string(), &write_err);
        assert!(!failed.is_saved());
        assert_eq!(failed.status, ImageStatus::WriteFailed);

        let status_err = SpiderError::HttpStatus {
            url: "http://example.com/a.jpg".to_string(),
            status: reqwest::StatusCode::FORBIDDEN,
        };
        let failed = ImageResult::failed("http://example.com/a.jpg".to_string(), &status_err);
        assert_eq!(failed.status, ImageStatus::FetchFailed);
    }
}
