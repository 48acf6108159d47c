//! Tool and resource catalog
//!
//! Append-only registry of the tool and resource definitions the server
//! advertises to its transport. Definitions are registered once at startup
//! and never mutated or removed; listing order is registration order.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// A named, schema-described operation a client can invoke.
///
/// `input_schema` is a JSON-Schema-style object description:
/// `{"type": "object", "properties": {...}, "required": [...]}` with
/// per-property `type`, `description` and optional `default`, `enum`,
/// `minimum`, `maximum`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// A read-only addressable item advertised in the catalog but not invoked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResourceDefinition {
    pub uri: String,
    pub name: String,
    pub description: String,
}

/// Catalog registration errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate tool name: {0}")]
    DuplicateName(String),
    #[error("duplicate resource uri: {0}")]
    DuplicateUri(String),
}

/// Registry of everything the server advertises.
#[derive(Debug, Default)]
pub struct Catalog {
    tools: Vec<ToolDefinition>,
    tool_index: HashMap<String, usize>,
    resources: Vec<ResourceDefinition>,
    resource_index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool definition. The catalog is unchanged on failure.
    pub fn register_tool(&mut self, definition: ToolDefinition) -> Result<(), CatalogError> {
        if self.tool_index.contains_key(&definition.name) {
            return Err(CatalogError::DuplicateName(definition.name));
        }
        self.tool_index
            .insert(definition.name.clone(), self.tools.len());
        self.tools.push(definition);
        Ok(())
    }

    /// Register a resource definition, keyed by uri.
    pub fn register_resource(&mut self, definition: ResourceDefinition) -> Result<(), CatalogError> {
        if self.resource_index.contains_key(&definition.uri) {
            return Err(CatalogError::DuplicateUri(definition.uri));
        }
        self.resource_index
            .insert(definition.uri.clone(), self.resources.len());
        self.resources.push(definition);
        Ok(())
    }

    /// Look up a tool definition by name.
    pub fn tool(&self, name: &str) -> Option<&ToolDefinition> {
        self.tool_index.get(name).map(|&i| &self.tools[i])
    }

    /// All tool definitions in registration order.
    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }

    /// All resource definitions in registration order.
    pub fn resources(&self) -> &[ResourceDefinition] {
        &self.resources
    }
}
