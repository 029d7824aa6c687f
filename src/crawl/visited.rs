// src/crawl/visited.rs
// =============================================================================
// This module tracks which URLs the crawl has already seen.
//
// The VisitedSet is the single deduplication authority for a crawl run:
// the seed URL, every discovered link and every discovered image target
// go through accept() before any work is queued for them. That is what
// guarantees each page is fetched at most once and each image is
// downloaded at most once, no matter how many pages reference it.
//
// It is a plain value owned by the crawl loop, not process-global state,
// so two independent crawls in one process cannot interfere and the set
// is trivial to test in isolation.
//
// Rust concepts:
// - HashSet: O(1) membership checks and inserts
// - Ownership: The set lives and dies with one crawl invocation
// =============================================================================

use std::collections::HashSet;

// Records every URL presented to it and answers "is this new?"
#[derive(Debug, Default)]
pub struct VisitedSet {
    seen: HashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    // Presents a URL to the registry.
    //
    // Returns true exactly once per distinct URL string: the first time it
    // is presented. Every later presentation of the same string returns
    // false. Matching is by exact string; any normalization has already
    // happened during URL resolution upstream.
    pub fn accept(&mut self, url: &str) -> bool {
        // HashSet::insert returns true when the value was not present yet
        self.seen.insert(url.to_string())
    }

    // How many distinct URLs have been seen so far
    pub fn len(&self) -> usize {
        self.seen.len()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does accept() take &str but store String?
//    - Callers usually hold borrowed URL strings
//    - The set must own its entries (they outlive the caller's borrow)
//    - to_string() makes the one copy we need
//
// 2. Why not normalize URLs here (lowercase, trailing slash, ...)?
//    - Upstream resolution (Url::join) already produced canonical absolute
//      URLs; applying more normalization here would change which pages
//      count as "the same" and silently alter crawl behavior
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_presentation_is_accepted() {
        let mut visited = VisitedSet::new();
        assert!(visited.accept("http://example.com/"));
    }

    #[test]
    fn test_second_presentation_is_rejected() {
        let mut visited = VisitedSet::new();
        assert!(visited.accept("http://example.com/"));
        assert!(!visited.accept("http://example.com/"));
        assert!(!visited.accept("http://example.com/"));
    }

    #[test]
    fn test_distinct_urls_are_independent() {
        let mut visited = VisitedSet::new();
        assert!(visited.accept("http://example.com/a"));
        assert!(visited.accept("http://example.com/b"));
        assert!(!visited.accept("http://example.com/a"));
        assert_eq!(visited.len(), 2);
    }

    #[test]
    fn test_exact_string_match_no_normalization() {
        let mut visited = VisitedSet::new();
        // Same page to a human, different strings to the registry
        assert!(visited.accept("http://example.com/page"));
        assert!(visited.accept("http://example.com/page/"));
        assert!(visited.accept("HTTP://example.com/page"));
    }
}
