//! Mock provider implementations
//!
//! Each mock records the calls it receives and returns either canned data or
//! a forced failure, mirroring the strings the real backends are expected to
//! produce.

use crate::provider::{ExtractMode, FetchProvider, ProviderError, SearchProvider, SearchResult};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Recorded `search` call: (query, count, country)
pub type SearchCall = (String, usize, Option<String>);

/// Recorded `fetch` call: (url, mode)
pub type FetchCall = (String, ExtractMode);

/// Mock search provider for testing
#[derive(Default)]
pub struct MockSearchProvider {
    results: Vec<SearchResult>,
    should_fail: bool,
    calls: Arc<Mutex<Vec<SearchCall>>>,
}

impl MockSearchProvider {
    /// A provider that succeeds with no hits.
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider that returns the given hits (capped at the requested count).
    pub fn with_results(results: Vec<SearchResult>) -> Self {
        Self {
            results,
            ..Default::default()
        }
    }

    /// A provider whose every call fails.
    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Default::default()
        }
    }

    pub async fn calls(&self) -> Vec<SearchCall> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl SearchProvider for MockSearchProvider {
    async fn search(
        &self,
        query: &str,
        count: usize,
        country: Option<&str>,
    ) -> Result<Vec<SearchResult>, ProviderError> {
        self.calls
            .lock()
            .await
            .push((query.to_string(), count, country.map(str::to_string)));

        if self.should_fail {
            return Err(ProviderError::Search("mock search failure".to_string()));
        }
        Ok(self.results.iter().take(count).cloned().collect())
    }
}

/// Mock fetch provider for testing
pub struct MockFetchProvider {
    body: Option<String>,
    should_fail: bool,
    calls: Arc<Mutex<Vec<FetchCall>>>,
}

impl Default for MockFetchProvider {
    fn default() -> Self {
        Self {
            body: None,
            should_fail: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl MockFetchProvider {
    /// A provider that echoes `Fetched content from: {url}`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider that returns a fixed body regardless of URL.
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            ..Default::default()
        }
    }

    /// A provider whose every call fails.
    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Default::default()
        }
    }

    pub async fn calls(&self) -> Vec<FetchCall> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl FetchProvider for MockFetchProvider {
    async fn fetch(&self, url: &str, mode: ExtractMode) -> Result<String, ProviderError> {
        self.calls.lock().await.push((url.to_string(), mode));

        if self.should_fail {
            return Err(ProviderError::Fetch("mock fetch failure".to_string()));
        }
        Ok(match &self.body {
            Some(body) => body.clone(),
            None => format!("Fetched content from: {url}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_search_records_calls() {
        let provider = MockSearchProvider::new();

        let results = provider.search("rust", 5, None).await.unwrap();

        assert!(results.is_empty());
        assert_eq!(provider.calls().await, vec![("rust".to_string(), 5, None)]);
    }

    #[tokio::test]
    async fn test_mock_search_caps_results_at_count() {
        let hit = SearchResult {
            title: "t".to_string(),
            url: "u".to_string(),
            snippet: "s".to_string(),
        };
        let provider = MockSearchProvider::with_results(vec![hit.clone(), hit.clone(), hit]);

        let results = provider.search("rust", 2, None).await.unwrap();

        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn test_mock_fetch_echoes_url() {
        let provider = MockFetchProvider::new();

        let content = provider
            .fetch("https://example.com", ExtractMode::Text)
            .await
            .unwrap();

        assert_eq!(content, "Fetched content from: https://example.com");
        assert_eq!(
            provider.calls().await,
            vec![("https://example.com".to_string(), ExtractMode::Text)]
        );
    }
}
