//! Web fetch tool
//!
//! Fetches a URL through an injected [`FetchProvider`] and optionally
//! truncates the extracted content. The extraction algorithm itself lives in
//! the provider.

use crate::catalog::ToolDefinition;
use crate::provider::{ExtractMode, FetchProvider};
use crate::tools::{Tool, ToolError};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Validated `web_fetch` arguments
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WebFetchArgs {
    url: String,
    #[serde(default)]
    extract_mode: ExtractMode,
    max_chars: Option<usize>,
}

pub struct WebFetchTool {
    provider: Arc<dyn FetchProvider>,
}

impl WebFetchTool {
    pub fn new(provider: Arc<dyn FetchProvider>) -> Self {
        Self { provider }
    }

    /// Truncate to at most `max_chars` characters, never splitting a
    /// character (pure function).
    fn truncate_chars(content: String, max_chars: usize) -> String {
        match content.char_indices().nth(max_chars) {
            Some((byte_index, _)) => content[..byte_index].to_string(),
            None => content,
        }
    }
}

#[async_trait]
impl Tool for WebFetchTool {
    fn describe(&self) -> ToolDefinition {
        ToolDefinition {
            name: "web_fetch".to_string(),
            description: "Fetch and extract readable content from a URL".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "url": {
                        "type": "string",
                        "description": "HTTP or HTTPS URL to fetch"
                    },
                    "extractMode": {
                        "type": "string",
                        "enum": ["markdown", "text"],
                        "description": "Extraction mode",
                        "default": "markdown"
                    },
                    "maxChars": {
                        "type": "number",
                        "description": "Maximum characters to return",
                        "minimum": 1
                    }
                },
                "required": ["url"]
            }),
        }
    }

    async fn execute(&self, arguments: &Value) -> Result<String, ToolError> {
        let args: WebFetchArgs = serde_json::from_value(arguments.clone())
            .map_err(|e| ToolError::InvalidArguments(e.to_string()))?;

        let content = self.provider.fetch(&args.url, args.extract_mode).await?;

        Ok(match args.max_chars {
            Some(max_chars) => Self::truncate_chars(content, max_chars),
            None => content,
        })
    }
}
