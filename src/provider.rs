//! Search and fetch provider abstractions
//!
//! The web tools depend only on these traits; a real backend (search API,
//! HTTP fetcher with content extraction) is injected at integration time.
//! Mock implementations for tests and the default binary wiring live in
//! [`crate::testing::mocks`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single web search hit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// Content extraction mode for fetched pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractMode {
    #[default]
    Markdown,
    Text,
}

impl fmt::Display for ExtractMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractMode::Markdown => write!(f, "markdown"),
            ExtractMode::Text => write!(f, "text"),
        }
    }
}

/// Opaque failures bubbled up from a provider backend.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("search backend error: {0}")]
    Search(String),
    #[error("fetch backend error: {0}")]
    Fetch(String),
}

/// External web search backend.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run a search and return up to `count` results. `country` is an
    /// optional 2-letter region code hint.
    async fn search(
        &self,
        query: &str,
        count: usize,
        country: Option<&str>,
    ) -> Result<Vec<SearchResult>, ProviderError>;
}

/// External page fetch + content extraction backend.
#[async_trait]
pub trait FetchProvider: Send + Sync {
    /// Fetch a URL and return its extracted readable content.
    async fn fetch(&self, url: &str, mode: ExtractMode) -> Result<String, ProviderError>;
}
