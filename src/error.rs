//! Top-level error type
//!
//! Aggregates the per-module error enums for callers that wire the server
//! together. Inside the invocation path nothing propagates this far: the
//! dispatcher converts every failure into an `InvocationResult` envelope.

use thiserror::Error;

/// Main error type for server startup and the transport boundary
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("tool error: {0}")]
    Tool(#[from] crate::tools::ToolError),

    #[error("catalog error: {0}")]
    Catalog(#[from] crate::catalog::CatalogError),

    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("workspace error: {0}")]
    Workspace(#[from] crate::workspace::WorkspaceError),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;
