//! Server configuration
//!
//! Loaded once at startup from a TOML file (`jernau.toml`) or straight from
//! the environment. The only runtime knob the core cares about is the
//! workspace root; `WORKSPACE_PATH` overrides whatever the file says.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main server configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSection,
    pub workspace: WorkspaceSection,
}

/// Identity the server advertises to its transport
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerSection {
    #[serde(default = "default_server_name")]
    pub name: String,
    #[serde(default = "default_server_version")]
    pub version: String,
    #[serde(default = "default_server_description")]
    pub description: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            version: default_server_version(),
            description: default_server_description(),
        }
    }
}

fn default_server_name() -> String {
    "Jernau".to_string()
}

fn default_server_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_server_description() -> String {
    "Technical research assistant specializing in ZK proofs, Solidity/Go development, \
     Web3 protocols, and security."
        .to_string()
}

/// Workspace section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkspaceSection {
    /// Absolute base directory for relative file paths
    pub root: PathBuf,
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("workspace root must be an absolute path: {0}")]
    RelativeWorkspaceRoot(String),
}

impl ServerConfig {
    /// Load configuration from a TOML file, then apply environment overrides.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: ServerConfig = toml::from_str(&content)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Build a configuration from the environment alone, with the workspace
    /// root taken from `WORKSPACE_PATH` or falling back to
    /// `$HOME/.jernau/workspace`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let root = std::env::var("WORKSPACE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_workspace_root());

        let config = Self {
            server: ServerSection::default(),
            workspace: WorkspaceSection { root },
        };
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(root) = std::env::var("WORKSPACE_PATH") {
            self.workspace.root = PathBuf::from(root);
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.workspace.root.is_absolute() {
            return Err(ConfigError::RelativeWorkspaceRoot(
                self.workspace.root.display().to_string(),
            ));
        }
        Ok(())
    }

    /// Create a test configuration for unit testing
    #[cfg(test)]
    pub fn test_config() -> Self {
        let toml_content = r#"
[server]
name = "Jernau"
version = "1.0.0"
description = "Test server"

[workspace]
root = "/tmp/jernau-test-workspace"
"#;
        toml::from_str(toml_content).expect("test config must parse")
    }
}

fn default_workspace_root() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".jernau/workspace")
}
