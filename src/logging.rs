//! Tracing setup for the binaries.
//!
//! stdout carries MCP frames, so console output always goes to stderr.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

pub const LOG_FILE_NAME: &str = "fsmcp.log";

/// Build the filter: `RUST_LOG` wins, then the configured directive.
pub fn env_filter(default_directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .with_context(|| format!("Invalid log filter '{}'", default_directive))
}

/// Install the server subscriber: stderr, plus a daily-rolling file when a
/// log directory is configured. Keep the returned guard alive for the
/// lifetime of the process or buffered file output is lost.
pub fn init_server_logging(config: &ServerConfig) -> Result<Option<WorkerGuard>> {
    let filter = env_filter(&config.log_filter)?;

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false);

    match &config.log_directory {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

            let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::registry()
                .with(filter)
                .with(console_layer)
                .with(
                    fmt::layer()
                        .with_writer(non_blocking_file)
                        .with_target(true)
                        .with_ansi(false)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
                .context("Failed to install tracing subscriber")?;

            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console_layer)
                .try_init()
                .context("Failed to install tracing subscriber")?;

            Ok(None)
        }
    }
}

/// Quiet stderr-only logging for the command line tool.
pub fn init_cli_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn")?)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}
