//! fsmcp-search: run fsmcp searches from the command line
//!
//! Prints the same JSON envelope the MCP tools return.
//!
//! Commands:
//! - files: find files whose names match a glob
//! - content: find lines matching literal text or a regex
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use fsmcp::logging::init_cli_logging;
use fsmcp::search::types::{DEFAULT_CONTENT_MAX_RESULTS, DEFAULT_NAME_MAX_RESULTS};
use fsmcp::search::{ContentSearchRequest, NameSearchRequest, SearchMode, WalkOptions};
use fsmcp::tools::search::formatting::{content_search_envelope, name_search_envelope};
use serde_json::Value;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "fsmcp-search")]
#[command(about = "Search file names and contents the way the fsmcp tools do", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct WalkArgs {
    /// Directory to search
    dir: PathBuf,

    /// Only search the top-level directory
    #[arg(long)]
    top_level_only: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find files by name
    Files {
        #[command(flatten)]
        walk: WalkArgs,

        /// Glob matched against file names
        #[arg(short, long, default_value = "*")]
        pattern: String,

        /// Maximum files reported
        #[arg(short, long, default_value_t = DEFAULT_NAME_MAX_RESULTS)]
        max_results: usize,
    },

    /// Find matching lines inside files
    Content {
        #[command(flatten)]
        walk: WalkArgs,

        /// Text to find (a regular expression with --regex)
        query: String,

        /// Treat the query as a regular expression
        #[arg(short, long)]
        regex: bool,

        /// Glob matched against file names
        #[arg(short, long, default_value = "*")]
        file_pattern: String,

        /// Match case exactly
        #[arg(short, long)]
        case_sensitive: bool,

        /// Maximum matches reported
        #[arg(short, long, default_value_t = DEFAULT_CONTENT_MAX_RESULTS)]
        max_results: usize,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_cli_logging()?;

    let envelope = match cli.command {
        Commands::Files {
            walk,
            pattern,
            max_results,
        } => {
            let request = NameSearchRequest::new(walk_options(walk, pattern))
                .with_max_results(max_results);
            name_search_envelope(&request)
        }
        Commands::Content {
            walk,
            query,
            regex,
            file_pattern,
            case_sensitive,
            max_results,
        } => {
            let mode = if regex {
                SearchMode::RegexPattern(query)
            } else {
                SearchMode::SearchText(query)
            };
            let request = ContentSearchRequest::new(walk_options(walk, file_pattern), mode)
                .case_sensitive(case_sensitive)
                .with_max_results(max_results);
            content_search_envelope(&request)
        }
    };

    let rendered =
        serde_json::to_string_pretty(&envelope).context("Failed to render search result")?;
    println!("{}", rendered);

    Ok(if is_error(&envelope) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn walk_options(walk: WalkArgs, pattern: String) -> WalkOptions {
    WalkOptions::new(walk.dir)
        .with_file_pattern(pattern)
        .recursive(!walk.top_level_only)
}

fn is_error(envelope: &Value) -> bool {
    envelope.get("error").is_some()
}
