// src/crawl/mod.rs
// =============================================================================
// This module is the crawl engine.
//
// Submodules:
// - queue: The frontier and the breadth-first traversal loop
// - visited: The URL deduplication registry
//
// Policy summary:
// - FIFO frontier, so the crawl is breadth-first
// - Same-host restriction (followed links never leave the seed's host)
// - Configurable depth limit; recursion off means depth 0
// - Every fetch/download failure is reported and skipped, never fatal
// =============================================================================

mod queue;
mod visited;

// Re-export the crawl entry point and its types
pub use queue::{crawl, CrawlConfig, CrawlReport};
pub use visited::VisitedSet;
