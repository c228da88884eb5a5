// src/index/build.rs
// =============================================================================
// This module builds and merges the word index.
//
// The index shape is: stemmed word -> (page URL -> occurrence count).
// Each crawled page contributes a fragment {word: {this_url: count}}, and
// fragments from child pages are merged upward into their parent's.
//
// The merge is ASYMMETRIC on purpose: a child's entry for a word is only
// folded in when the parent already has that word. Words that appear only
// in a subtree are dropped from the ancestor's index. This is a known
// limitation of the index semantics, kept because changing it changes the
// observable output. See DESIGN.md.
//
// Rust concepts:
// - BTreeMap: A sorted map, so the serialized index is deterministic
// - Type aliases: WordIndex names the nested map shape once
// - entry() API: Insert-or-update in a single map lookup
// =============================================================================

use std::collections::BTreeMap;

// word -> (page URL -> occurrence count)
//
// BTreeMap instead of HashMap so iteration and JSON output come out in
// sorted order, which makes runs comparable and tests stable
pub type WordIndex = BTreeMap<String, BTreeMap<String, u64>>;

// Builds one page's index fragment from its stemmed token sequence
//
// Parameters:
//   tokens: the page's stemmed words, duplicates included
//   page_url: the URL the tokens came from
//
// Returns: {word: {page_url: count}} for every distinct word
//
// Example:
//   tokens = ["test", "test", "page"], url = "http://a.com/"
//   result = {"page": {"http://a.com/": 1}, "test": {"http://a.com/": 2}}
pub fn build_page_index(tokens: &[String], page_url: &str) -> WordIndex {
    let mut index = WordIndex::new();

    for word in tokens {
        let postings = index.entry(word.clone()).or_insert_with(BTreeMap::new);
        *postings.entry(page_url.to_string()).or_insert(0) += 1;
    }

    index
}

// Merges a child page's fragment into its parent's
//
// For every word in the child fragment:
// - if the parent already has the word, the child's URL->count entries are
//   inserted into the parent's map for that word (overwriting on URL clash)
// - if the parent does NOT have the word, the child's contribution for it
//   is silently dropped
//
// The drop branch means a subtree's unique vocabulary never reaches the
// root index. Keep it that way - see the module header.
pub fn merge_index(parent: &mut WordIndex, child: WordIndex) {
    for (word, postings) in child {
        if let Some(existing) = parent.get_mut(&word) {
            existing.extend(postings);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_build_counts_occurrences() {
        let index = build_page_index(&tokens(&["test", "test", "page"]), "http://a.com/");
        assert_eq!(index["test"]["http://a.com/"], 2);
        assert_eq!(index["page"]["http://a.com/"], 1);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_build_empty_tokens() {
        let index = build_page_index(&[], "http://a.com/");
        assert!(index.is_empty());
    }

    #[test]
    fn test_merge_overlapping_word() {
        // parent {"x": {"u1": 2}} + child {"x": {"u2": 1}}
        // -> {"x": {"u1": 2, "u2": 1}}
        let mut parent = build_page_index(&tokens(&["x", "x"]), "u1");
        let child = build_page_index(&tokens(&["x"]), "u2");

        merge_index(&mut parent, child);

        assert_eq!(parent["x"]["u1"], 2);
        assert_eq!(parent["x"]["u2"], 1);
    }

    #[test]
    fn test_merge_drops_words_unknown_to_parent() {
        // parent {"x": {"u1": 2}} + child {"y": {"u2": 1}} -> parent unchanged
        let mut parent = build_page_index(&tokens(&["x", "x"]), "u1");
        let child = build_page_index(&tokens(&["y"]), "u2");

        merge_index(&mut parent, child);

        assert_eq!(parent.len(), 1);
        assert_eq!(parent["x"]["u1"], 2);
        assert!(!parent.contains_key("y"));
    }

    #[test]
    fn test_merge_overwrites_on_url_clash() {
        let mut parent = build_page_index(&tokens(&["x"]), "u1");
        let mut child = WordIndex::new();
        child.insert(
            "x".to_string(),
            [("u1".to_string(), 7)].into_iter().collect(),
        );

        merge_index(&mut parent, child);

        assert_eq!(parent["x"]["u1"], 7);
    }
}
