// src/extract/html.rs
// =============================================================================
// This module pulls image and link references out of HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// html5ever is permissive the way browsers are: broken or truncated markup
// never makes parsing fail, it just produces whatever tree can be
// recovered. A malformed page therefore yields fewer references, not an
// error.
//
// We also use the `url` crate to:
// - Resolve relative references ("/a.jpg", "../pics/b.png") against the
//   page URL, the same way a browser would
//
// Rust concepts:
// - Iterators: For walking selected elements
// - Option<T>: Elements without the attribute are skipped, not errors
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

use crate::extract::filter::has_image_extension;

// Extracts the downloadable image URLs from a page.
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//   base_url: the URL of the page (for resolving relative src values)
//
// Returns: absolute URLs of every <img> whose src resolves and whose path
// carries an allowed image extension. An <img> without a src contributes
// nothing, silently.
//
// Example:
//   html = "<img src='/logo.png'><img src='/icon.svg'><img>"
//   base_url = "https://example.com"
//   result = ["https://example.com/logo.png"]
pub fn extract_image_urls(html: &str, base_url: &str) -> Vec<String> {
    let mut images = Vec::new();

    let document = Html::parse_document(html);

    // "img" is a constant selector, known valid, so unwrap is safe here
    let selector = Selector::parse("img").unwrap();

    let base = match Url::parse(base_url) {
        Ok(url) => url,
        Err(_) => {
            // Without a valid base we cannot resolve relative references
            eprintln!("Warning: Invalid base URL: {}", base_url);
            return images;
        }
    };

    for element in document.select(&selector) {
        // Missing src attribute: skip the element, no error
        if let Some(src) = element.value().attr("src") {
            if let Some(resolved) = resolve_url(&base, src) {
                if !is_http_url(&resolved) {
                    continue;
                }
                // resolve_url only returns strings that parsed already
                if let Ok(parsed) = Url::parse(&resolved) {
                    if has_image_extension(&parsed) {
                        images.push(resolved);
                    }
                }
            }
        }
    }

    images
}

// Extracts the hyperlink URLs from a page.
//
// Parameters:
//   html: the HTML content to parse
//   base_url: the URL of the page (for resolving relative hrefs)
//
// Returns: absolute http/https URLs of every <a href> on the page.
// Fragment-only anchors and mailto:/tel:/javascript: links are dropped.
// Domain scoping is the caller's policy, not applied here.
pub fn extract_page_links(html: &str, base_url: &str) -> Vec<String> {
    let mut links = Vec::new();

    let document = Html::parse_document(html);
    let selector = Selector::parse("a[href]").unwrap();

    let base = match Url::parse(base_url) {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Warning: Invalid base URL: {}", base_url);
            return links;
        }
    };

    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            // A bare fragment is the same page; following it would only
            // re-enqueue the page under a new string
            if href.starts_with('#') {
                continue;
            }
            if let Some(resolved) = resolve_url(&base, href) {
                if is_http_url(&resolved) {
                    links.push(resolved);
                }
            }
        }
    }

    links
}

// Resolves a possibly-relative reference to an absolute URL.
//
// Parameters:
//   base: the URL of the current page
//   reference: the raw attribute value (might be relative or absolute)
//
// Returns: Some(absolute_url) or None if it cannot be made absolute
//
// Examples:
//   base = "https://example.com/page"
//   "/pics/a.jpg"   -> Some("https://example.com/pics/a.jpg")
//   "../b.png"      -> Some("https://example.com/b.png")
//   "https://other.com/c.gif" -> Some("https://other.com/c.gif")
fn resolve_url(base: &Url, reference: &str) -> Option<String> {
    // If the reference is already absolute this parse succeeds directly;
    // otherwise join it onto the base like a browser would
    match Url::parse(reference) {
        Ok(url) => Some(url.to_string()),
        Err(_) => match base.join(reference) {
            Ok(url) => Some(url.to_string()),
            Err(_) => None, // Unresolvable, skip it
        },
    }
}

// Only http/https targets are fetchable by this tool.
// Skips mailto:, tel:, javascript:, data:, file: and friends.
fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
