// src/index/mod.rs
// =============================================================================
// This module contains all indexing logic.
//
// Submodules:
// - stem: Russian-then-English Snowball stemming
// - build: Per-page index fragments and the upward merge
//
// The traversal engine feeds each page's tokens through stem_all, builds a
// fragment with build_page_index, and folds child fragments in with
// merge_index as the recursion unwinds.
// =============================================================================

mod build;
mod stem;

// Re-export public items from submodules
pub use build::{build_page_index, merge_index, WordIndex};
pub use stem::WordStemmer;
