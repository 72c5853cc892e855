//! Outbound HTTP for scraping.
//!
//! Callers depend on [`HttpClient`] so tests can swap in [`MockClient`].

mod client;

pub use client::{HttpClient, MockClient, MockResponse, ReqwestClient};

/// A desktop browser User-Agent. Search engines serve stripped or empty pages
/// to obvious bots.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
