use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::{debug, error, info};

use fsmcp::config::ServerConfig;
use fsmcp::handler::FileSystemServerHandler;
use fsmcp::logging::init_server_logging;
use rust_mcp_sdk::schema::{
    Implementation, InitializeResult, LATEST_PROTOCOL_VERSION, ServerCapabilities,
    ServerCapabilitiesTools,
};
use rust_mcp_sdk::{
    McpServer, StdioTransport, TransportOptions,
    mcp_server::{ServerRuntime, server_runtime},
};

#[derive(Parser)]
#[command(name = "fsmcp-server")]
#[command(about = "Filesystem access tools served over MCP stdio", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML configuration file (falls back to $FSMCP_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for rolling log files (overrides the config file)
    #[arg(short, long)]
    log_dir: Option<PathBuf>,
}

const INSTRUCTIONS: &str = r#"# fsmcp - Filesystem Tools

Every tool returns one JSON object. Successful calls include "success": true;
failed calls include an "error" field instead. Check for "error" first.

- Read and write: read_file, write_file, append_to_file
- Manage: copy_file, move_file, delete_file, create_directory, delete_directory
- Inspect: list_directory, get_file_info, path_exists, get_directory_size
- Search: search_files (names), search_in_files (text), search_in_files_regex (regex)
- Working directory: get_current_directory, set_current_directory

Searches cap their results (maxResults). "truncated": true means more
matches exist than were returned; narrow filePattern or raise maxResults.
"#;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ServerConfig::load(cli.config.as_deref())?;
    if let Some(dir) = cli.log_dir {
        config.log_directory = Some(dir);
    }

    let _log_guard = init_server_logging(&config)?;

    info!("🚀 Starting fsmcp v{}", env!("CARGO_PKG_VERSION"));
    config.apply_working_directory()?;

    let server_details = InitializeResult {
        server_info: Implementation {
            name: "fsmcp".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            title: Some("fsmcp - Filesystem Access Tools".to_string()),
        },
        capabilities: ServerCapabilities {
            tools: Some(ServerCapabilitiesTools { list_changed: None }),
            ..Default::default()
        },
        meta: None,
        instructions: Some(INSTRUCTIONS.to_string()),
        protocol_version: LATEST_PROTOCOL_VERSION.to_string(),
    };

    debug!(
        "Server {} v{} (protocol {})",
        server_details.server_info.name,
        server_details.server_info.version,
        server_details.protocol_version
    );

    let transport = StdioTransport::new(TransportOptions::default())
        .map_err(|e| anyhow!("Failed to open stdio transport: {}", e))?;
    debug!("✓ STDIO transport initialized");

    let handler = FileSystemServerHandler::new();

    let server: Arc<ServerRuntime> =
        server_runtime::create_server(server_details, transport, handler);

    info!("🎯 fsmcp server ready");
    if let Err(start_error) = server.start().await {
        let message = start_error
            .rpc_error_message()
            .map(|m| m.to_string())
            .unwrap_or_else(|| start_error.to_string());
        error!("❌ Server stopped with error: {}", message);
        return Err(anyhow!(message)).context("fsmcp server failed");
    }

    info!("🏁 fsmcp server stopped");
    Ok(())
}
