//! Pulling candidate names out of a search results page.
//!
//! The markup of a results page is undocumented and changes without notice,
//! so the strategy lives behind [`ResultExtractor`].

use scraper::{Html, Selector};

use crate::error::DiscoveryError;

/// CSS selector for result title links on the DuckDuckGo HTML page.
pub const RESULT_LINK_SELECTOR: &str = "a.result__a";

/// Maximum number of candidates taken from one page.
pub const MAX_RESULTS: usize = 5;

/// Strategy for turning a results page into candidate names.
pub trait ResultExtractor: Send + Sync {
    fn extract(&self, html: &str) -> Result<Vec<String>, DiscoveryError>;
}

/// Takes the text of the first `limit` elements matching a CSS selector.
#[derive(Debug, Clone)]
pub struct SelectorExtractor {
    selector: String,
    limit: usize,
}

impl SelectorExtractor {
    pub fn new(selector: impl Into<String>, limit: usize) -> Self {
        Self {
            selector: selector.into(),
            limit,
        }
    }
}

impl Default for SelectorExtractor {
    fn default() -> Self {
        Self::new(RESULT_LINK_SELECTOR, MAX_RESULTS)
    }
}

impl ResultExtractor for SelectorExtractor {
    fn extract(&self, html: &str) -> Result<Vec<String>, DiscoveryError> {
        let selector = Selector::parse(&self.selector)
            .map_err(|e| DiscoveryError::Selector(format!("{}: {}", self.selector, e)))?;
        let document = Html::parse_document(html);

        let names = document
            .select(&selector)
            .map(|element| {
                element
                    .text()
                    .collect::<String>()
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .filter(|name| !name.is_empty())
            .take(self.limit)
            .collect();

        Ok(names)
    }
}
