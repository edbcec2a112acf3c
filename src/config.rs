//! Server configuration
//!
//! Loaded from a TOML file named on the command line or by `FSMCP_CONFIG`.
//! Every field has a default, so an empty file (or no file) is valid.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

pub const CONFIG_ENV: &str = "FSMCP_CONFIG";
pub const LOG_DIR_ENV: &str = "FSMCP_LOG_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Working directory {0} does not exist")]
    MissingWorkingDirectory(PathBuf),

    #[error("Failed to enter working directory {path}: {source}")]
    WorkingDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: String,

    /// Directory for daily-rolling log files; stderr only when unset
    pub log_directory: Option<PathBuf>,

    /// Directory the server changes into at startup
    pub working_directory: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_filter: "fsmcp=info".to_string(),
            log_directory: None,
            working_directory: None,
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Resolve configuration: explicit path, then `FSMCP_CONFIG`, then defaults.
    /// `FSMCP_LOG_DIR` overrides the log directory either way.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);

        let mut config = match explicit.map(Path::to_path_buf).or(from_env) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        if let Some(dir) = std::env::var_os(LOG_DIR_ENV) {
            config.log_directory = Some(PathBuf::from(dir));
        }

        Ok(config)
    }

    /// Change into the configured working directory, if any.
    pub fn apply_working_directory(&self) -> Result<(), ConfigError> {
        let Some(dir) = &self.working_directory else {
            return Ok(());
        };

        if !dir.is_dir() {
            return Err(ConfigError::MissingWorkingDirectory(dir.clone()));
        }

        std::env::set_current_dir(dir).map_err(|source| ConfigError::WorkingDirectory {
            path: dir.clone(),
            source,
        })?;
        info!("Working directory set to {}", dir.display());
        Ok(())
    }
}
