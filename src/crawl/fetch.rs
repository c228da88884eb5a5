// src/crawl/fetch.rs
// =============================================================================
// This module fetches pages over HTTP.
//
// The traversal engine only needs one capability: "GET this URL, give me
// the body as text, within a timeout". That capability is a trait so the
// engine can be driven by an in-memory fake in tests - no network, no
// sleeping, fully deterministic.
//
// The real implementation wraps a reqwest Client. A non-200 status is an
// error at this layer; the engine downgrades every fetch error to an empty
// body and keeps crawling, so one dead page never kills a run.
//
// Rust concepts:
// - Traits: The seam between the engine and the network
// - async fn in traits: Stable for static dispatch since Rust 1.75
// =============================================================================

use anyhow::{anyhow, Result};
use reqwest::{Client, StatusCode};
use std::time::Duration;

// The one capability the traversal engine needs from the outside world
//
// The crawl is single-threaded and strictly sequential, so the futures
// never cross threads and no Send bound is needed.
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    async fn fetch(&self, url: &str) -> Result<String>;
}

// Fetches pages with a shared reqwest Client
//
// The client is built once per crawl; reqwest pools connections behind it,
// so sequential requests to the same host reuse the socket.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(HttpFetcher { client })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        // Anything other than a plain 200 counts as a miss, redirects that
        // reqwest already followed excepted (we see their final status)
        if response.status() != StatusCode::OK {
            return Err(anyhow!("HTTP {}", response.status()));
        }

        Ok(response.text().await?)
    }
}
