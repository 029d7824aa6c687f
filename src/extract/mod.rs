// src/extract/mod.rs
// =============================================================================
// This module turns fetched HTML into work for the crawl:
//
// Submodules:
// - html: Parses pages and yields absolute image/link URLs
// - filter: The image-extension allow-list
//
// This file (mod.rs) is the module root - it re-exports the public API so
// callers can write `extract::extract_image_urls()` without knowing the
// internal file layout.
// =============================================================================

mod filter;
mod html;

// Re-export public items from submodules
pub use filter::has_image_extension;
pub use html::{extract_image_urls, extract_page_links};
