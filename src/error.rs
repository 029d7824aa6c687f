// src/error.rs
// =============================================================================
// This module defines the error kinds produced while crawling.
//
// Why a typed enum instead of plain anyhow errors?
// - The crawl loop never stops on a failed operation; it matches on the
//   kind to decide how to report it and then moves on
// - A failed page fetch, a bad HTTP status and a failed file write are
//   different situations and get different console messages
//
// We use the `thiserror` crate which:
// - Derives std::error::Error for our enum
// - Generates Display from the #[error(...)] attributes
// - Wires up error sources with #[source]
//
// Rust concepts:
// - Enums with struct variants: Each kind carries its own context
// - Error trait: Integrates with ? and anyhow at the boundaries
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

// Everything that can go wrong for a single page or image.
//
// Each variant keeps the URL (or file path) it relates to, so a console
// message alone is enough to diagnose which operation failed.
#[derive(Debug, Error)]
pub enum SpiderError {
    /// The GET request itself failed: DNS, connection refused, timeout, TLS
    #[error("request for {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered, but with a non-success status code
    ///
    /// We never keep partial content from such responses.
    #[error("{url} answered HTTP {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Writing the downloaded bytes to disk failed
    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The image URL could not be parsed at all
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The image URL has no usable basename in its path (e.g. ends in '/')
    #[error("{url} has no filename in its path")]
    NoFilename { url: String },
}

impl SpiderError {
    /// True for failures that happened while talking to the network,
    /// false for local filesystem failures.
    ///
    /// Used to pick the right status for a download result record.
    pub fn is_write_error(&self) -> bool {
        matches!(self, SpiderError::Write { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_url() {
        let err = SpiderError::HttpStatus {
            url: "http://example.com/a.jpg".to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        };
        let message = err.to_string();
        assert!(message.contains("http://example.com/a.jpg"));
        assert!(message.contains("404"));
    }

    #[test]
    fn test_write_error_classification() {
        let write = SpiderError::Write {
            path: PathBuf::from("./data/a.jpg"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(write.is_write_error());

        let no_name = SpiderError::NoFilename {
            url: "http://example.com/".to_string(),
        };
        assert!(!no_name.is_write_error());
    }
}
