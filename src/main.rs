//! Jernau tool server - main entry point
//!
//! Wires the catalog, dispatcher and builtin tools together and serves a
//! minimal newline-delimited JSON loop over stdin/stdout. The loop is a
//! placeholder transport: one request per line, one response per line.

use clap::{Parser, Subcommand};
use jernau::config::ServerConfig;
use jernau::error::ServerResult;
use jernau::logging::init_default_logging;
use jernau::testing::mocks::{MockFetchProvider, MockSearchProvider};
use jernau::tools::builtin::{FileReadTool, FileWriteTool, WebFetchTool, WebSearchTool};
use jernau::tools::{Dispatcher, InvocationResult};
use jernau::{ResourceDefinition, Workspace};
use serde::Deserialize;
use serde_json::Value;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};

/// Jernau workspace-scoped tool server
#[derive(Parser)]
#[command(name = "jernau")]
#[command(about = "Workspace-scoped tool-invocation server")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Workspace root override
    #[arg(short, long, value_name = "DIR", env = "WORKSPACE_PATH")]
    workspace: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the tool server on stdin/stdout
    Run,
    /// Validate configuration
    Config {
        /// Show the resolved configuration
        #[arg(long)]
        show: bool,
    },
}

/// One request per input line.
#[derive(Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum Request {
    ListTools,
    ListResources,
    Call {
        name: String,
        #[serde(default)]
        arguments: Value,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_default_logging();

    info!("Starting jernau tool server v{}", env!("CARGO_PKG_VERSION"));

    let config = match load_configuration(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Run => run_server(config).await,
        Commands::Config { show } => handle_config_command(config, show),
    };

    if let Err(e) = result {
        error!("Command failed: {}", e);
        process::exit(1);
    }

    info!("Server shutdown complete");
}

fn load_configuration(cli: &Cli) -> ServerResult<ServerConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            ServerConfig::load_from_file(path)?
        }
        None => {
            let default_paths = ["jernau.toml", "config/jernau.toml"];
            match default_paths.iter().map(PathBuf::from).find(|p| p.exists()) {
                Some(path) => {
                    info!("Loading configuration from: {}", path.display());
                    ServerConfig::load_from_file(&path)?
                }
                None => ServerConfig::from_env()?,
            }
        }
    };

    if let Some(workspace) = &cli.workspace {
        config.workspace.root = workspace.clone();
    }

    Ok(config)
}

fn build_dispatcher(config: &ServerConfig) -> ServerResult<Dispatcher> {
    let workspace = Workspace::new(config.workspace.root.clone())?;

    // Mock providers until a real search/fetch backend is integrated
    let search = Arc::new(MockSearchProvider::new());
    let fetch = Arc::new(MockFetchProvider::new());

    let mut dispatcher = Dispatcher::new();
    dispatcher.register(Box::new(WebSearchTool::new(search)))?;
    dispatcher.register(Box::new(WebFetchTool::new(fetch)))?;
    dispatcher.register(Box::new(FileReadTool::new(workspace.clone())))?;
    dispatcher.register(Box::new(FileWriteTool::new(workspace.clone())))?;

    dispatcher.register_resource(ResourceDefinition {
        uri: format!("file://{}", workspace.root().join("MEMORY.md").display()),
        name: format!("{} Memory", config.server.name),
        description: format!("{} long-term memory and daily notes", config.server.name),
    })?;

    Ok(dispatcher)
}

async fn run_server(config: ServerConfig) -> ServerResult<()> {
    info!(
        server = %config.server.name,
        workspace = %config.workspace.root.display(),
        "server starting"
    );

    let dispatcher = build_dispatcher(&config)?;
    serve_stdio(&dispatcher).await
}

async fn serve_stdio(dispatcher: &Dispatcher) -> ServerResult<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Request>(&line) {
            Ok(Request::ListTools) => {
                serde_json::to_value(dispatcher.catalog().tools())?
            }
            Ok(Request::ListResources) => {
                serde_json::to_value(dispatcher.catalog().resources())?
            }
            Ok(Request::Call { name, arguments }) => {
                serde_json::to_value(dispatcher.invoke(&name, &arguments).await)?
            }
            Err(e) => {
                serde_json::to_value(InvocationResult::failure(format!("malformed request: {e}")))?
            }
        };

        let mut encoded = serde_json::to_vec(&response)?;
        encoded.push(b'\n');
        stdout.write_all(&encoded).await?;
        stdout.flush().await?;
    }

    Ok(())
}

fn handle_config_command(config: ServerConfig, show: bool) -> ServerResult<()> {
    if show {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        println!("Configuration is valid");
    }
    Ok(())
}
