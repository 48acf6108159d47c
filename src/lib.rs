//! Jernau - workspace-scoped tool-invocation server
//!
//! A protocol-facing tool server core: it advertises a fixed catalog of
//! schema-described tools and resources, validates invocation arguments,
//! dispatches to handlers, and returns a normalized success/error envelope.
//!
//! # Overview
//!
//! This crate provides:
//! - A tool/resource catalog with stable, registration-ordered listing
//! - JSON-Schema-subset argument validation with default filling
//! - Workspace-rooted, traversal-safe path resolution
//! - An invocation dispatcher that no handler failure escapes
//! - Builtin tools: `web_search`, `web_fetch`, `file_read`, `file_write`
//!
//! Search and fetch backends are injected behind the [`provider`] traits;
//! the transport layer is external and only calls [`Dispatcher::invoke`].
//!
//! # Quick Start
//!
//! ```rust
//! use jernau::testing::mocks::MockSearchProvider;
//! use jernau::tools::builtin::WebSearchTool;
//! use jernau::Dispatcher;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! # tokio_test::block_on(async {
//! let mut dispatcher = Dispatcher::new();
//! dispatcher
//!     .register(Box::new(WebSearchTool::new(Arc::new(
//!         MockSearchProvider::new(),
//!     ))))
//!     .unwrap();
//!
//! let result = dispatcher.invoke("web_search", &json!({"query": "rust"})).await;
//! assert!(!result.is_error);
//! assert_eq!(result.content.as_deref(), Some("Web search results for: rust"));
//! # });
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod provider;
pub mod schema;
pub mod testing;
pub mod tools;
pub mod workspace;

pub use catalog::{Catalog, CatalogError, ResourceDefinition, ToolDefinition};
pub use config::{ConfigError, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use provider::{ExtractMode, FetchProvider, ProviderError, SearchProvider, SearchResult};
pub use schema::ValidationError;
pub use tools::{Dispatcher, InvocationResult, Tool, ToolError};
pub use workspace::{Workspace, WorkspaceError};
