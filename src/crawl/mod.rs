// src/crawl/mod.rs
// =============================================================================
// This module contains the traversal engine.
//
// Submodules:
// - fetch: The PageFetcher trait and its reqwest implementation
// - engine: The recursive depth-first crawl
//
// Features:
// - Depth-limited recursive crawling starting from a seed URL
// - Visited-set deduplication (a URL is fetched at most once per run)
// - Polite crawling with a real pause between requests
// - Per-page failures are logged and skipped, never fatal
// =============================================================================

mod engine;
mod fetch;

// Re-export the crawl entry point and its tunables
pub use engine::{crawl_site, CrawlOptions, DEFAULT_DELAY_SECS};
