// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Run the crawl from the seed URL
// 3. Write the word index to the output file as indented JSON
// 4. Print the visited-URL list and the total run time
// 5. Exit with proper code (0 = success, 2 = error)
//
// Rust concepts used:
// - async/await: The crawl blocks on network I/O page by page
// - Result<T, E>: For error handling (T = success type, E = error type)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod crawl;         // src/crawl/ - traversal engine
mod extract;       // src/extract/ - body text and href extraction
mod index;         // src/index/ - stemming and the word index
mod links;         // src/links/ - link filtering and normalization

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::{Context, Result};
use clap::Parser;  // Parser trait enables the parse() method
use serde::Serialize;

use cli::Cli;
use crawl::{crawl_site, CrawlOptions};
use index::WordIndex;

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = crawl finished and the index was written
//   Err   = bad seed URL, unwritable output, or other unexpected error
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, wrong arg counts
    let cli = Cli::parse();
    let started = Instant::now();

    println!("🔍 Crawling site: {}", cli.seed_url);
    println!("📊 Max crawl depth: {}", cli.max_depth);

    let options = CrawlOptions {
        max_depth: cli.max_depth,
        delay: Duration::from_secs(cli.delay),
        ..CrawlOptions::default()
    };

    // The engine returns the merged word index plus every URL it visited
    let (word_index, visited) = crawl_site(&cli.seed_url, &options).await?;

    write_index(&word_index, &cli.output)?;
    println!(
        "\n💾 Wrote {} word(s) to {}",
        word_index.len(),
        cli.output.display()
    );

    print_visited(&visited)?;

    println!("⏱️  Finished in {:.2}s", started.elapsed().as_secs_f64());

    Ok(0)
}

// Writes the word index to disk as JSON with 4-space indentation
//
// serde_json's default pretty printer indents with 2 spaces, so we plug in
// a PrettyFormatter configured for 4 - the index file format is 4-space
// indented
fn write_index(word_index: &WordIndex, path: &Path) -> Result<()> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);

    word_index.serialize(&mut serializer)?;

    fs::write(path, buf).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

// Prints the visited-URL list to stdout as pretty JSON
//
// Sorted first, so two runs over the same site print the same list
fn print_visited(visited: &HashSet<String>) -> Result<()> {
    let mut urls: Vec<&String> = visited.iter().collect();
    urls.sort();

    println!("\n📄 Visited {} page(s):", urls.len());
    println!("{}", serde_json::to_string_pretty(&urls)?);
    Ok(())
}
