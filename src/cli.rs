// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// The interface is three required positional arguments:
//
//   site-indexer <seed-url> <max-depth> <output-path>
//
// Wrong argument count makes clap print a usage message and exit non-zero,
// which is exactly the behavior we want from the outer layer.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

use crate::crawl::DEFAULT_DELAY_SECS;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "site-indexer",
    version = "0.1.0",
    about = "Crawls a website and builds a stemmed word-frequency index",
    long_about = "site-indexer starts from a seed URL, follows same-site links up to a \
                  configured depth, and writes a JSON index mapping stemmed words to \
                  per-page occurrence counts."
)]
pub struct Cli {
    /// Seed URL to start crawling from (e.g., http://example.com)
    ///
    /// Must include a protocol and a domain; anything else is rejected
    /// before the crawl starts
    pub seed_url: String,

    /// Maximum crawl depth
    ///
    /// Depth 1 = just the seed page
    /// Depth 2 = seed page + the pages it links to
    /// etc.
    pub max_depth: usize,

    /// Path the JSON word index is written to
    pub output: PathBuf,

    /// Seconds to pause between successive page fetches
    ///
    /// This is the politeness delay; it is a real wall-clock pause applied
    /// before every child fetch
    #[arg(long, default_value_t = DEFAULT_DELAY_SECS)]
    pub delay: u64,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Positional vs flag arguments:
//    - Fields without #[arg(long)] become positional arguments, required
//      in order
//    - #[arg(long)] turns a field into a --flag, optional when it has a
//      default
//
// 2. Why PathBuf instead of String for output?
//    - PathBuf is the owned path type; clap parses into it directly
//    - It signals "this is a filesystem path" to every reader
//
// 3. Where does the usage message come from?
//    - clap generates it from this struct and the doc comments above each
//      field; missing or extra arguments exit with code 2 automatically
// -----------------------------------------------------------------------------
