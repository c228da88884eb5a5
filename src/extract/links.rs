// src/extract/links.rs
// =============================================================================
// This module pulls raw href values out of a page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Unlike a link checker, we do NOT resolve or validate anything here.
// The raw href strings go through the filter/normalize pipeline in the
// links module, which is where same-site and visited decisions live.
// =============================================================================

use scraper::{Html, Selector};

// Extracts every href value from every <a> tag in the page
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//
// Returns: Vec<String> of raw href values, in document order, duplicates
// included (the filters downstream deduplicate)
//
// Example:
//   html = "<a href='/docs'>Docs</a><a href='page2'>Next</a>"
//   result = ["/docs", "page2"]
pub fn extract_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // Selector::parse returns Result, so we use .unwrap() which panics on
    // error. This is OK here because our selector is a constant and known
    // to be valid.
    let selector = Selector::parse("a[href]").unwrap();

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}
