// src/links/mod.rs
// =============================================================================
// This module contains all link handling logic.
//
// Submodules:
// - filter: Decides which extracted links are worth following
// - normalize: Rewrites relative links into absolute URLs
//
// The traversal engine composes them in a fixed order:
// extract -> filter_invalid -> normalize -> filter_visited.
// Normalization has to happen before the visited filter so that the
// comparison is between absolute URLs on both sides.
// =============================================================================

mod filter;
mod normalize;

// Re-export public items from submodules
// This lets users write `links::normalize_links()` instead of
// `links::normalize::normalize_links()`
pub use filter::{filter_invalid_links, filter_visited_links};
pub use normalize::{full_url, normalize_links, split_url};
