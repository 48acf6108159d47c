//! Web search tool
//!
//! Delegates to an injected [`SearchProvider`] backend and renders its
//! results as plain text. Retry and ranking are backend concerns, not ours.

use crate::catalog::ToolDefinition;
use crate::provider::{SearchProvider, SearchResult};
use crate::tools::{Tool, ToolError};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Validated `web_search` arguments
#[derive(Debug, Deserialize)]
struct WebSearchArgs {
    query: String,
    #[serde(default = "default_count")]
    count: usize,
    country: Option<String>,
}

fn default_count() -> usize {
    5
}

pub struct WebSearchTool {
    provider: Arc<dyn SearchProvider>,
}

impl WebSearchTool {
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self { provider }
    }

    /// Render provider results as text, one hit per line (pure function).
    fn format_results(query: &str, results: &[SearchResult]) -> String {
        let mut output = format!("Web search results for: {query}");
        for result in results {
            output.push('\n');
            output.push_str(&format!(
                "{} - {} - {}",
                result.title, result.url, result.snippet
            ));
        }
        output
    }
}

#[async_trait]
impl Tool for WebSearchTool {
    fn describe(&self) -> ToolDefinition {
        ToolDefinition {
            name: "web_search".to_string(),
            description: "Search the web for current information".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query string"
                    },
                    "count": {
                        "type": "number",
                        "description": "Number of results to return",
                        "default": 5,
                        "minimum": 1,
                        "maximum": 10
                    },
                    "country": {
                        "type": "string",
                        "description": "2-letter country code for regional results (e.g., \"US\", \"GB\")"
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn execute(&self, arguments: &Value) -> Result<String, ToolError> {
        let args: WebSearchArgs = serde_json::from_value(arguments.clone())
            .map_err(|e| ToolError::InvalidArguments(e.to_string()))?;

        let results = self
            .provider
            .search(&args.query, args.count, args.country.as_deref())
            .await?;

        Ok(Self::format_results(&args.query, &results))
    }
}
