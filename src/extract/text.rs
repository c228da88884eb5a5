// src/extract/text.rs
// =============================================================================
// This module turns a page's HTML into a flat word sequence.
//
// Three steps, matching the indexing pipeline:
// 1. Isolate the <body> subtree (a page without body markup yields nothing)
// 2. Collect its text while skipping <script> and <style> subtrees entirely
// 3. Split the text into words on single spaces
//
// We walk a real DOM (scraper / html5ever) instead of stripping tags with
// patterns - pattern-based tag removal is notoriously fragile on nested or
// malformed markup. The observable contract stays the same: body isolation,
// script/style removal, tag text only, &nbsp; treated as a plain space.
//
// The tokenizer is deliberately naive: split on single spaces, trim each
// piece, drop the empty ones. No punctuation handling, no Unicode
// segmentation. That leniency is part of the indexing contract, so keep it.
//
// Rust concepts:
// - Recursion: collect_text walks the DOM tree depth-first
// - Pattern matching: as_text() / ElementRef::wrap to classify nodes
// =============================================================================

use scraper::{ElementRef, Html, Selector};

// Extracts the visible text of a page's body
//
// Returns an empty String when the source HTML carries no <body> tag.
// Note the check runs against the source text: html5ever synthesizes a
// <body> element for fragments that have none, so asking the DOM would
// always say yes.
pub fn extract_text(html: &str) -> String {
    if !html.to_ascii_lowercase().contains("<body") {
        return String::new();
    }

    let document = Html::parse_document(html);
    let selector = Selector::parse("body").unwrap();

    let body = match document.select(&selector).next() {
        Some(body) => body,
        None => return String::new(),
    };

    let mut text = String::new();
    collect_text(body, &mut text);

    // html5ever decodes &nbsp; into U+00A0; the tokenizer only splits on
    // plain spaces, so turn them into plain spaces here
    text.replace('\u{a0}', " ")
}

// Walks the element's subtree depth-first, appending the content of every
// text node, and skipping <script> and <style> subtrees entirely (their
// text is code, not page content)
fn collect_text(element: ElementRef, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(&text.text);
        } else if let Some(child_element) = ElementRef::wrap(child) {
            let name = child_element.value().name();
            if name == "script" || name == "style" {
                continue;
            }
            collect_text(child_element, out);
        }
    }
}

// Splits extracted text into words
//
// Splits on single spaces only, trims surrounding whitespace from each
// piece and drops the pieces that end up empty. A piece like "a\nb" stays
// one token - this tokenizer makes no attempt at real word segmentation.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(' ')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is ElementRef?
//    - A reference to an element node inside the parsed DOM tree
//    - ElementRef::wrap(node) returns Some only when the node is an
//      element, which is how we tell elements apart from text/comments
//
// 2. Why recursion for collect_text?
//    - The DOM is a tree; visiting every text node under <body> while
//      skipping whole subtrees is most naturally written recursively
//    - HTML nesting depth is small, so stack depth is not a concern here
//
// 3. Why does tokenize use split(' ') instead of split_whitespace()?
//    - split_whitespace() would also split on newlines and tabs and
//      collapse runs of spaces, producing a different (nicer) token stream
//    - The index format is defined against the naive version, so the
//      naive version is the correct one
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_body_yields_empty_text() {
        assert_eq!(extract_text("<div>hello</div>"), "");
        assert_eq!(extract_text(""), "");
    }

    #[test]
    fn test_script_content_removed() {
        let html = "<body><script>ignored</script>Hello world</body>";
        let tokens = tokenize(&extract_text(html));
        assert_eq!(tokens, vec!["Hello", "world"]);
    }

    #[test]
    fn test_style_content_removed() {
        let html = "<body><style>p { color: red }</style>one two</body>";
        let tokens = tokenize(&extract_text(html));
        assert_eq!(tokens, vec!["one", "two"]);
    }

    #[test]
    fn test_nested_script_inside_div() {
        let html = "<body><div>kept <script>var x = 1;</script></div></body>";
        let tokens = tokenize(&extract_text(html));
        assert_eq!(tokens, vec!["kept"]);
    }

    #[test]
    fn test_tags_stripped_text_kept() {
        let html = "<body><p>alpha <b>beta</b></p> gamma</body>";
        let tokens = tokenize(&extract_text(html));
        assert_eq!(tokens, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_nbsp_becomes_space() {
        let html = "<body>one&nbsp;two</body>";
        let tokens = tokenize(&extract_text(html));
        assert_eq!(tokens, vec!["one", "two"]);
    }

    #[test]
    fn test_tokenize_drops_empty_pieces() {
        assert_eq!(tokenize("  a   b  "), vec!["a", "b"]);
        assert!(tokenize("    ").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_trims_but_does_not_split_newlines() {
        // "a\nb" has no space inside, so it stays a single token
        assert_eq!(tokenize("a\nb c"), vec!["a\nb", "c"]);
        // a piece that is only a newline gets trimmed away
        assert_eq!(tokenize("a \n b"), vec!["a", "b"]);
    }
}
