// src/links/normalize.rs
// =============================================================================
// This module rewrites raw href values into absolute URLs.
//
// After filtering, the surviving links are all relative (either root-relative
// like "/docs" or page-relative like "page2"). Before we can fetch them or
// compare them against the visited set, they have to become absolute.
//
// The rules are deliberately simple string prefixing:
// - "http..."  -> already absolute, pass through unchanged
// - "/path"    -> protocol://domain + "/path"
// - "path"     -> current page URL (with trailing slash ensured) + "path"
//
// No well-formedness validation happens here. A bad result surfaces later
// when the traversal engine tries to split it into protocol and domain.
//
// Rust concepts:
// - The url crate: Parses URLs into structured components
// - Result<T, E>: For the protocol/domain split, which can fail
// - Iterators: map/collect to transform the whole link set at once
// =============================================================================

use anyhow::{anyhow, Result};
use std::collections::HashSet;
use url::Url;

// Builds the "protocol://domain" prefix used for root-relative links
//
// Example: full_url("https", "example.com") -> "https://example.com"
pub fn full_url(protocol: &str, domain: &str) -> String {
    format!("{}://{}", protocol, domain)
}

// Splits a URL into its (protocol, domain) pair
//
// Every URL the crawler fetches must have both parts. If either is missing
// the URL is unusable, so we return an error instead of guessing - the
// caller decides whether that is fatal (seed URL) or just a skipped link.
//
// Examples:
//   "https://example.com/page" -> Ok(("https", "example.com"))
//   "not-a-url"                -> Err(...)
//   "data:text/plain,hi"       -> Err(...) (no domain)
pub fn split_url(url: &str) -> Result<(String, String)> {
    let parsed = Url::parse(url).map_err(|e| anyhow!("Invalid URL '{}': {}", url, e))?;

    let domain = parsed
        .domain()
        .ok_or_else(|| anyhow!("URL has no domain: {}", url))?;

    Ok((parsed.scheme().to_string(), domain.to_string()))
}

// Rewrites every link in the set into an absolute URL
//
// Parameters:
//   links: the filtered link set (relative links plus any absolute survivors)
//   base: "protocol://domain" of the site being crawled (see full_url)
//   page_url: the URL of the page the links were found on
//
// Returns: Vec of absolute URL strings (order unspecified, input is a set)
//
// Examples:
//   normalize_links({"/foo"}, "http://a.com", "http://a.com/page")
//     -> ["http://a.com/foo"]
//   normalize_links({"bar"}, "http://a.com", "http://a.com/page")
//     -> ["http://a.com/page/bar"]
pub fn normalize_links(links: HashSet<String>, base: &str, page_url: &str) -> Vec<String> {
    // Page-relative links are appended after a slash, so make sure the
    // page URL ends with one
    let page_url = if page_url.ends_with('/') {
        page_url.to_string()
    } else {
        format!("{}/", page_url)
    };

    links
        .into_iter()
        .map(|link| {
            if link.starts_with("http") {
                // Already absolute - leave it alone
                link
            } else if link.starts_with('/') {
                // Root-relative: attach to the site root
                format!("{}{}", base, link)
            } else {
                // Page-relative: attach to the current page
                format!("{}{}", page_url, link)
            }
        })
        .collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why HashSet<String> as input?
//    - The invalid-link filter runs before normalization and returns a set
//    - Sets have no duplicates, so we never normalize the same href twice
//
// 2. What does into_iter() do?
//    - Consumes the set and yields owned Strings
//    - We can then move each String into the output without cloning
//
// 3. Why no validation of the result?
//    - "http://a.com/page/" + "javascript:void(0)" is clearly not a URL
//    - The traversal engine calls split_url on every candidate and skips
//      the ones that fail, so bad results are handled in exactly one place
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn set(links: &[&str]) -> HashSet<String> {
        links.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_absolute_link_passes_through() {
        let out = normalize_links(set(&["http://other.com/x"]), "http://a.com", "http://a.com/p");
        assert_eq!(out, vec!["http://other.com/x"]);

        let out = normalize_links(set(&["https://a.com/x"]), "http://a.com", "http://a.com/p");
        assert_eq!(out, vec!["https://a.com/x"]);
    }

    #[test]
    fn test_root_relative_link() {
        let out = normalize_links(set(&["/foo"]), "http://a.com", "http://a.com/page");
        assert_eq!(out, vec!["http://a.com/foo"]);
    }

    #[test]
    fn test_page_relative_link() {
        let out = normalize_links(set(&["bar"]), "http://a.com", "http://a.com/page");
        assert_eq!(out, vec!["http://a.com/page/bar"]);
    }

    #[test]
    fn test_trailing_slash_not_doubled() {
        let out = normalize_links(set(&["bar"]), "http://a.com", "http://a.com/page/");
        assert_eq!(out, vec!["http://a.com/page/bar"]);
    }

    #[test]
    fn test_full_url() {
        assert_eq!(full_url("https", "example.com"), "https://example.com");
    }

    #[test]
    fn test_split_url() {
        let (protocol, domain) = split_url("https://example.com/docs/page").unwrap();
        assert_eq!(protocol, "https");
        assert_eq!(domain, "example.com");
    }

    #[test]
    fn test_split_url_rejects_relative() {
        assert!(split_url("docs/page").is_err());
    }

    #[test]
    fn test_split_url_rejects_missing_domain() {
        assert!(split_url("data:text/plain,hello").is_err());
    }
}
