// src/crawl/queue.rs
// =============================================================================
// This module implements the crawl itself: a breadth-first traversal that
// downloads every qualifying image it encounters.
//
// How it works:
// 1. Start with the seed URL in the frontier at depth 0
// 2. Pop the oldest entry, fetch the page HTML
// 3. Download every image on the page that passes the extension filter
// 4. If recursion is on, push unseen same-host links at depth + 1
// 5. Repeat until the frontier is empty
//
// The frontier is a FIFO queue, which is what makes the traversal
// breadth-first: every page at depth d is processed before any page at
// depth d + 1. Depth is attached to a link when it is discovered and never
// recomputed, so a page reachable by several routes is processed at the
// depth of whichever route found it first - under FIFO order, the
// shallowest one.
//
// Every URL (seed, link or image) passes the VisitedSet exactly once,
// at the moment it is accepted for work. Accepting at discovery time,
// rather than when a queue entry is popped, is what makes "two anchors to
// the same URL enqueue it once" hold.
//
// Rust concepts:
// - VecDeque: push_back/pop_front give us the FIFO frontier
// - Generics + traits: The loop works against PageFetcher/ImageDownloader
//   contracts, so tests can swap in fakes
// =============================================================================

use std::collections::VecDeque;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use serde::Serialize;
use url::Url;

use crate::crawl::visited::VisitedSet;
use crate::error::SpiderError;
use crate::extract::{extract_image_urls, extract_page_links};
use crate::fetch::{ImageDownloader, ImageResult, PageFetcher};

// Everything a single crawl run needs to know. Immutable once built.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Where the crawl starts
    pub seed_url: String,
    /// Deepest link level that will still be fetched (seed is depth 0)
    pub max_depth: usize,
    /// Whether to follow links at all
    pub recursive: bool,
    /// Directory images are saved into
    pub save_path: PathBuf,
}

// One pending page: where to fetch and how far from the seed it is.
// Created at discovery, consumed exactly once when popped.
#[derive(Debug, Clone)]
struct CrawlTask {
    url: String,
    depth: usize,
}

// What a finished crawl hands back to main for printing.
#[derive(Debug, Default, Serialize)]
pub struct CrawlReport {
    /// Pages fetched and scanned successfully
    pub pages_crawled: usize,
    /// Pages that could not be fetched
    pub pages_failed: usize,
    /// One record per attempted image download
    pub images: Vec<ImageResult>,
}

impl CrawlReport {
    pub fn saved_count(&self) -> usize {
        self.images.iter().filter(|i| i.is_saved()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.images.len() - self.saved_count()
    }
}

// Crawls a website and downloads its images.
//
// Parameters:
//   config: seed URL, depth bound, recursion flag, output directory
//   fetcher: retrieves page bodies
//   downloader: saves image URLs to disk
//
// Returns: a CrawlReport. Only a seed URL that cannot be parsed (or has
// no host to scope the crawl to) is an error; failures on individual
// pages and images are recorded in the report and never abort the run.
pub async fn crawl<F, D>(config: &CrawlConfig, fetcher: &F, downloader: &D) -> Result<CrawlReport>
where
    F: PageFetcher,
    D: ImageDownloader,
{
    // The host of the seed defines the crawl scope
    let seed = Url::parse(&config.seed_url)
        .map_err(|e| anyhow!("Invalid URL '{}': {}", config.seed_url, e))?;
    let base_host = seed
        .host_str()
        .ok_or_else(|| anyhow!("URL has no host: {}", config.seed_url))?
        .to_string();

    // Frontier and visited registry live exactly as long as this run
    let mut frontier: VecDeque<CrawlTask> = VecDeque::new();
    let mut visited = VisitedSet::new();
    let mut report = CrawlReport::default();

    visited.accept(&config.seed_url);
    frontier.push_back(CrawlTask {
        url: config.seed_url.clone(),
        depth: 0,
    });

    // Process the frontier until it drains
    while let Some(task) = frontier.pop_front() {
        // Discovery already bounds depth; this guard re-checks it so a
        // too-deep entry can never trigger a fetch
        if task.depth > config.max_depth {
            continue;
        }

        println!("\n🔎 Crawling [depth {}]: {}", task.depth, task.url);

        let html = match fetcher.fetch(&task.url).await {
            Ok(body) => body,
            Err(e) => {
                // Report and move on; one dead page must not end the crawl
                eprintln!("  ⚠️  Failed to fetch {}: {}", task.url, e);
                report.pages_failed += 1;
                continue;
            }
        };
        report.pages_crawled += 1;

        // Download every qualifying image we have not seen in this run
        for image_url in extract_image_urls(&html, &task.url) {
            if !visited.accept(&image_url) {
                continue; // already downloaded (or attempted) this run
            }
            let result = attempt_download(downloader, &image_url, config).await;
            report.images.push(result);
        }

        // Link expansion only happens in recursive mode, and never past
        // the depth bound
        if config.recursive && task.depth < config.max_depth {
            for link in extract_page_links(&html, &task.url) {
                if !is_same_host(&link, &base_host) {
                    continue; // stay on the seed's host
                }
                if !visited.accept(&link) {
                    continue; // someone already queued or processed it
                }
                frontier.push_back(CrawlTask {
                    url: link,
                    depth: task.depth + 1,
                });
            }
        }
    }

    Ok(report)
}

// Runs one download and folds the outcome into a result record,
// printing it as it happens.
async fn attempt_download<D: ImageDownloader>(
    downloader: &D,
    image_url: &str,
    config: &CrawlConfig,
) -> ImageResult {
    match downloader.download(image_url, &config.save_path).await {
        Ok(path) => {
            println!("  ✅ Downloaded: {}", image_url);
            ImageResult::saved(image_url.to_string(), &path)
        }
        Err(e @ SpiderError::Write { .. }) => {
            eprintln!("  ❌ Error (file write): {}", e);
            ImageResult::failed(image_url.to_string(), &e)
        }
        Err(e) => {
            eprintln!("  ❌ Error (download): {}", e);
            ImageResult::failed(image_url.to_string(), &e)
        }
    }
}

// Scheme-agnostic host comparison: http://example.com and
// https://example.com are the same scope, www.example.com is not.
fn is_same_host(url: &str, base_host: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => parsed.host_str() == Some(base_host),
        Err(_) => false,
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is depth stored in the task instead of recomputed?
//    - Depth means "how many hops from the seed along the discovering
//      path", which only the discoverer knows
//    - FIFO order then guarantees the recorded depth is the minimal one
//
// 2. Why accept() links before pushing them?
//    - Two anchors on one page can resolve to the same URL; checking a
//      separate "contains" and inserting later would let both through
//    - accept() is test-and-record in a single call, so the first
//      discoverer wins and the queue never holds duplicates
//
// 3. Why are the fetcher and downloader type parameters?
//    - The traversal logic is where the interesting bugs live (cycles,
//      depth, scope), and it should be testable without sockets
//    - Tests below drive the loop with an in-memory site
// -----------------------------------------------------------------------------
