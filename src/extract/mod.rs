// src/extract/mod.rs
// =============================================================================
// This module contains all content extraction logic.
//
// Submodules:
// - links: Pulls raw href values out of a page
// - text: Isolates body text and tokenizes it into words
//
// Both run on every fetched page, including pages whose fetch failed and
// came back as an empty string - they simply produce nothing, which keeps
// failure handling out of the extraction code.
// =============================================================================

mod links;
mod text;

// Re-export public items from submodules
pub use links::extract_links;
pub use text::{extract_text, tokenize};
