// src/links/filter.rs
// =============================================================================
// This module decides which extracted links are worth following.
//
// Two independent filters, applied in sequence by the traversal engine:
//
// 1. filter_invalid_links: keeps only links that look like same-site
//    relative links. A link survives when it does NOT start with "http"
//    AND does not contain "//<domain>/". Note the side effect: absolute
//    links pointing back at the SAME site also start with "http", so they
//    are dropped too. Only relative links ever reach the normalizer. This
//    is a designed quirk of the pipeline, kept on purpose.
//
// 2. filter_visited_links: plain set difference against the visited set,
//    so we never queue a page twice in one run.
//
// Rust concepts:
// - HashSet: O(1) membership checks and built-in set difference
// - Closures: The filter predicates are small anonymous functions
// =============================================================================

use std::collections::HashSet;

// Keeps only links that look like same-site relative links
//
// Parameters:
//   links: raw href values as extracted from the page
//   domain: the domain of the page currently being crawled
//
// Returns: HashSet of surviving links (deduplicated by construction)
//
// Examples (domain = "a.com"):
//   "page2"              -> kept
//   "/docs"              -> kept
//   "http://other.com/x" -> dropped (absolute)
//   "http://a.com/x"     -> dropped (absolute, even though same site)
//   "//a.com/x"          -> dropped (protocol-relative same site)
pub fn filter_invalid_links(links: Vec<String>, domain: &str) -> HashSet<String> {
    let same_site_marker = format!("//{}/", domain);

    links
        .into_iter()
        .filter(|link| !link.starts_with("http") && !link.contains(&same_site_marker))
        .collect()
}

// Removes links we have already crawled in this run
//
// This is a set difference: links minus visited. The result order is
// unspecified because it goes through a HashSet, which also deduplicates
// links that normalized to the same absolute URL.
pub fn filter_visited_links(links: Vec<String>, visited: &HashSet<String>) -> Vec<String> {
    let links: HashSet<String> = links.into_iter().collect();

    links
        .into_iter()
        .filter(|link| !visited.contains(link))
        .collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does filter_invalid_links drop absolute same-site links?
//    - The check is a cheap heuristic: "starts with http" means "points
//      somewhere else", which is wrong for absolute same-site links
//    - The crawl still terminates and still stays on-site, it just reaches
//      fewer pages; changing it would change the observable output
//
// 2. Why collect into a HashSet first in filter_visited_links?
//    - Two different hrefs ("/a" and "a" on the root page) can normalize
//      to the same absolute URL; the set collapses them before we recurse
//
// 3. What does .contains() cost?
//    - O(1) on a HashSet, so the visited check stays fast even on large
//      crawls
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn links(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_keeps_relative_links() {
        let out = filter_invalid_links(links(&["page2", "/docs", "a/b.html"]), "a.com");
        assert_eq!(out.len(), 3);
        assert!(out.contains("page2"));
        assert!(out.contains("/docs"));
        assert!(out.contains("a/b.html"));
    }

    #[test]
    fn test_drops_absolute_links() {
        let out = filter_invalid_links(
            links(&["http://other.com/x", "https://other.com/y"]),
            "a.com",
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_drops_absolute_same_site_links() {
        // Starts with "http", so the heuristic drops it even though it
        // points at our own domain
        let out = filter_invalid_links(links(&["http://a.com/x"]), "a.com");
        assert!(out.is_empty());
    }

    #[test]
    fn test_drops_protocol_relative_same_site_links() {
        let out = filter_invalid_links(links(&["//a.com/x", "page2"]), "a.com");
        assert_eq!(out.len(), 1);
        assert!(out.contains("page2"));
    }

    #[test]
    fn test_deduplicates() {
        let out = filter_invalid_links(links(&["page2", "page2"]), "a.com");
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_visited_filter_is_set_difference() {
        let visited: HashSet<String> = ["http://a.com/seen".to_string()].into_iter().collect();
        let out = filter_visited_links(
            links(&["http://a.com/seen", "http://a.com/new"]),
            &visited,
        );
        assert_eq!(out, vec!["http://a.com/new".to_string()]);
    }

    #[test]
    fn test_visited_filter_deduplicates() {
        let visited = HashSet::new();
        let out = filter_visited_links(links(&["http://a.com/x", "http://a.com/x"]), &visited);
        assert_eq!(out.len(), 1);
    }
}
