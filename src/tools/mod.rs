//! Tool interface and invocation dispatcher
//!
//! The dispatcher is the single entry point a transport calls into: it looks
//! up the tool, validates the arguments against the advertised schema, runs
//! the handler, and normalizes whatever happens into an [`InvocationResult`]
//! envelope. No handler or validator failure escapes it.

use crate::catalog::{Catalog, CatalogError, ResourceDefinition, ToolDefinition};
use crate::schema;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{error, info};

pub mod builtin;

/// A tool handler: describes itself for the catalog and executes invocations.
///
/// Handlers are stateless across invocations and receive arguments that have
/// already been validated and default-filled against their declared schema.
#[async_trait]
pub trait Tool: Send + Sync {
    fn describe(&self) -> ToolDefinition;

    async fn execute(&self, arguments: &Value) -> Result<String, ToolError>;
}

/// Errors raised inside handlers and the dispatch pipeline
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    #[error(transparent)]
    Validation(#[from] crate::schema::ValidationError),
    #[error(transparent)]
    Workspace(#[from] crate::workspace::WorkspaceError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Provider(#[from] crate::provider::ProviderError),
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
}

/// The normalized envelope every invocation returns.
///
/// Exactly one of `content` (success) or `error_message` (failure) is
/// populated, and `is_error` always agrees with which one it is. Use the
/// constructors to keep that invariant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResult {
    pub is_error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl InvocationResult {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            is_error: false,
            content: Some(content.into()),
            error_message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            is_error: true,
            content: None,
            error_message: Some(message.into()),
        }
    }
}

/// Invocation dispatcher: catalog plus the handlers bound to it.
#[derive(Default)]
pub struct Dispatcher {
    catalog: Catalog,
    handlers: HashMap<String, Box<dyn Tool>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a handler and enter its definition in the catalog. A duplicate
    /// name is rejected and the handler is not bound.
    pub fn register(&mut self, handler: Box<dyn Tool>) -> Result<(), CatalogError> {
        let definition = handler.describe();
        let name = definition.name.clone();
        self.catalog.register_tool(definition)?;
        self.handlers.insert(name, handler);
        Ok(())
    }

    /// Advertise a resource alongside the tools.
    pub fn register_resource(&mut self, definition: ResourceDefinition) -> Result<(), CatalogError> {
        self.catalog.register_resource(definition)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Invoke a tool by name. Always returns a well-formed envelope; every
    /// failure inside lookup, validation or the handler is converted into a
    /// failure result rather than propagated.
    pub async fn invoke(&self, name: &str, arguments: &Value) -> InvocationResult {
        info!(tool = name, arguments = %arguments, "dispatching tool invocation");

        let Some(definition) = self.catalog.tool(name) else {
            let err = ToolError::UnknownTool(name.to_string());
            error!(tool = name, error = %err, "invocation failed");
            return InvocationResult::failure(err.to_string());
        };

        let validated = match schema::validate(&definition.input_schema, arguments) {
            Ok(validated) => validated,
            Err(err) => {
                error!(tool = name, error = %err, "argument validation failed");
                return InvocationResult::failure(err.to_string());
            }
        };

        let outcome = match self.handlers.get(name) {
            Some(handler) => handler.execute(&validated).await,
            None => Err(ToolError::UnknownTool(name.to_string())),
        };

        match outcome {
            Ok(content) => InvocationResult::success(content),
            Err(err) => {
                error!(tool = name, error = %err, "tool invocation failed");
                InvocationResult::failure(err.to_string())
            }
        }
    }
}
