// src/crawl/engine.rs
// =============================================================================
// This module implements the depth-first crawl itself.
//
// Per page, in order:
// 1. Mark the URL visited (BEFORE any network access, so cycles terminate)
// 2. Split protocol/domain - an unparseable URL is skipped with a warning
// 3. Fetch - any transport error or non-200 becomes an empty body, logged
// 4. Extract text, tokenize, stem, build this page's index fragment
//    (these run fine on an empty body and just produce nothing)
// 5. Extract links, then filter-invalid -> normalize -> filter-visited,
//    in exactly that order (the visited comparison needs absolute URLs)
// 6. If the depth budget is exhausted, return without recursing - a hard
//    cutoff for the whole branch, even if unvisited links remain
// 7. Otherwise recurse into each surviving link one at a time, sleeping
//    the politeness delay before every child fetch, adopting the returned
//    visited set and merging the child fragment upward
//
// The crawl is strictly sequential and single-threaded. The visited set is
// moved down into each recursive call and handed back, so there is exactly
// one authoritative copy at any moment and no locking anywhere.
//
// Rust concepts:
// - LocalBoxFuture: async fns cannot recurse directly (the future type
//   would be infinitely sized), so the recursive step returns a boxed one
// - Ownership transfer: the visited set is moved, not shared
// =============================================================================

use std::collections::HashSet;
use std::time::Duration;

use anyhow::{Context, Result};
use futures::future::{FutureExt, LocalBoxFuture};

use crate::crawl::fetch::{HttpFetcher, PageFetcher};
use crate::extract::{extract_links, extract_text, tokenize};
use crate::index::{build_page_index, merge_index, WordIndex, WordStemmer};
use crate::links::{filter_invalid_links, filter_visited_links, full_url, normalize_links, split_url};

/// Default recursion depth budget (1 = just the seed page)
pub const DEFAULT_MAX_DEPTH: usize = 5;
/// Default pause between successive page fetches, in seconds
pub const DEFAULT_DELAY_SECS: u64 = 3;
/// Default per-request timeout, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

// Tunables for one crawl run
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    /// Depth budget, decremented once per recursion level
    pub max_depth: usize,
    /// Politeness delay applied before every child fetch
    pub delay: Duration,
    /// Per-request HTTP timeout
    pub timeout: Duration,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        CrawlOptions {
            max_depth: DEFAULT_MAX_DEPTH,
            delay: Duration::from_secs(DEFAULT_DELAY_SECS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

// Crawls a site starting from a seed URL and builds its word index
//
// Returns the seed page's merged index fragment plus the full set of URLs
// visited during the run. Only the seed itself is validated up front; every
// URL discovered later fails softly (skip + warning) instead.
pub async fn crawl_site(seed: &str, options: &CrawlOptions) -> Result<(WordIndex, HashSet<String>)> {
    split_url(seed).with_context(|| format!("Invalid seed URL: {}", seed))?;

    let fetcher = HttpFetcher::new(options.timeout)?;
    let stemmer = WordStemmer::new();

    let (index, visited) = crawl_page(
        &fetcher,
        &stemmer,
        options,
        seed.to_string(),
        HashSet::new(),
        options.max_depth,
    )
    .await;

    Ok((index, visited))
}

// One page of the crawl: fetch -> extract -> index -> filter -> recurse
//
// Takes the visited set by value and returns the grown one; the caller's
// copy is dead the moment it recurses, which is what makes "added exactly
// once, before the fetch" easy to guarantee.
//
// Returns a boxed future because the function calls itself; generic over
// the fetcher so tests can drive it with an in-memory fake.
pub(crate) fn crawl_page<'a, F: PageFetcher>(
    fetcher: &'a F,
    stemmer: &'a WordStemmer,
    options: &'a CrawlOptions,
    url: String,
    mut visited: HashSet<String>,
    depth: usize,
) -> LocalBoxFuture<'a, (WordIndex, HashSet<String>)> {
    async move {
        // Visited BEFORE fetched - this is the cycle-termination invariant
        visited.insert(url.clone());

        let (protocol, domain) = match split_url(&url) {
            Ok(parts) => parts,
            Err(e) => {
                // A link that normalized into garbage; skip it and move on
                eprintln!("  Warning: skipping unparseable URL {}: {}", url, e);
                return (WordIndex::new(), visited);
            }
        };

        let html = match fetcher.fetch(&url).await {
            Ok(html) => {
                println!("  OK [depth {}] {}", depth, url);
                html
            }
            Err(e) => {
                // Dead page: log it, index nothing, keep the crawl alive
                eprintln!("  ERROR [depth {}] {}: {}", depth, url, e);
                String::new()
            }
        };

        let text = extract_text(&html);
        let tokens = tokenize(&text);
        let stemmed = stemmer.stem_all(&tokens);
        let mut page_index = build_page_index(&stemmed, &url);

        let base = full_url(&protocol, &domain);
        let links = extract_links(&html);
        let links = filter_invalid_links(links, &domain);
        let links = normalize_links(links, &base, &url);
        let links = filter_visited_links(links, &visited);

        // Hard depth cutoff: terminates this whole branch, unvisited links
        // included
        if depth <= 1 {
            println!("  Max depth reached at {}", url);
            return (page_index, visited);
        }

        println!(
            "  {} [depth {}]: {} link(s) to follow, {} visited",
            url,
            depth,
            links.len(),
            visited.len()
        );

        for link in links {
            // Polite crawling: a real wall-clock pause before every child
            // fetch, one link at a time, never in parallel
            tokio::time::sleep(options.delay).await;

            let (child_index, child_visited) =
                crawl_page(fetcher, stemmer, options, link, visited, depth - 1).await;

            // The child's returned set is now the authoritative one
            visited = child_visited;
            merge_index(&mut page_index, child_index);
        }

        (page_index, visited)
    }
    .boxed_local()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why can't an async fn just call itself?
//    - An async fn's future embeds the futures of everything it awaits
//    - A self-call would embed itself, giving a type of infinite size
//    - Boxing (LocalBoxFuture) breaks the cycle with one heap allocation
//      per recursion level
//
// 2. Why LocalBoxFuture instead of BoxFuture?
//    - BoxFuture requires Send (the future may hop between threads)
//    - This crawl is strictly sequential on one task, so the cheaper
//      non-Send box is enough
//
// 3. Why move the visited set instead of using &mut?
//    - Moving it in and returning it makes the ownership story explicit:
//      whoever holds the set is the only one who can touch it
//    - A &mut reference through a boxed recursive future also runs into
//      awkward lifetime plumbing; the move sidesteps all of it
// -----------------------------------------------------------------------------
