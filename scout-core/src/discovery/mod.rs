//! Candidate discovery via web search.
//!
//! A search is built from the flat profile, the results page is fetched
//! through [`HttpClient`], and a [`ResultExtractor`] picks out product names.
//! Callers go through [`discover_candidates`], which never yields an empty list.

mod extract;
mod query;

pub use extract::{ResultExtractor, SelectorExtractor, MAX_RESULTS, RESULT_LINK_SELECTOR};
pub use query::{build_query, search_url, DEFAULT_SEARCH_URL};

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::DiscoveryError;
use crate::http::HttpClient;
use crate::normalize::{NormalizedList, NO_RESULTS};
use crate::profile::FlatPreferencePayload;

/// Source of candidate product names for a profile.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Candidate names in rank order. May be empty.
    async fn candidates(
        &self,
        profile: &FlatPreferencePayload,
    ) -> Result<Vec<String>, DiscoveryError>;

    /// Short name for logs.
    fn source_name(&self) -> &'static str;
}

/// Scrapes an HTML search results page.
pub struct SearchDiscovery {
    client: Arc<dyn HttpClient>,
    extractor: Box<dyn ResultExtractor>,
    base_url: String,
}

impl SearchDiscovery {
    pub fn new(client: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            extractor: Box::new(SelectorExtractor::default()),
            base_url: base_url.into(),
        }
    }

    /// Replace the extraction strategy.
    pub fn with_extractor(mut self, extractor: Box<dyn ResultExtractor>) -> Self {
        self.extractor = extractor;
        self
    }
}

#[async_trait]
impl CandidateSource for SearchDiscovery {
    async fn candidates(
        &self,
        profile: &FlatPreferencePayload,
    ) -> Result<Vec<String>, DiscoveryError> {
        let query = build_query(profile);
        let url = search_url(&self.base_url, &query)?;
        tracing::debug!(query = %query, "Searching for candidates");

        let html = self.client.fetch_html(&url).await?;
        self.extractor.extract(&html)
    }

    fn source_name(&self) -> &'static str {
        "search"
    }
}

/// A fixed list of candidates, for local development and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCandidates {
    names: Vec<String>,
}

impl StaticCandidates {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }
}

#[async_trait]
impl CandidateSource for StaticCandidates {
    async fn candidates(
        &self,
        _profile: &FlatPreferencePayload,
    ) -> Result<Vec<String>, DiscoveryError> {
        Ok(self.names.clone())
    }

    fn source_name(&self) -> &'static str {
        "static"
    }
}

/// Run discovery and fold every outcome into a non-empty list.
///
/// Search failures degrade to the "No results found" sentinel: the report can
/// still be written from the profile alone. The failure is logged.
pub async fn discover_candidates(
    source: &dyn CandidateSource,
    profile: &FlatPreferencePayload,
) -> NormalizedList {
    match source.candidates(profile).await {
        Ok(names) => {
            let names: Vec<String> = names
                .into_iter()
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty())
                .take(MAX_RESULTS)
                .collect();
            tracing::debug!(
                source = source.source_name(),
                count = names.len(),
                "Candidate discovery finished"
            );
            NormalizedList::or_sentinel(names, NO_RESULTS)
        }
        Err(e) => {
            tracing::warn!(
                source = source.source_name(),
                error = %e,
                "Candidate discovery failed, continuing without candidates"
            );
            NormalizedList::sentinel(NO_RESULTS)
        }
    }
}
