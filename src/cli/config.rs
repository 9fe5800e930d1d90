//! Configuration file handling
//!
//! The configuration file is optional JSON; every field has a default:
//!
//! ```json
//! {
//!   "neo_file": "data/neos.csv",
//!   "cad_file": "data/cad.json",
//!   "stdout_limit": 10,
//!   "log_level": "info"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::observability::Severity;

use super::errors::{CliError, CliResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// NEO catalog CSV
    #[serde(default = "default_neo_file")]
    pub neo_file: PathBuf,

    /// Close approach JSON
    #[serde(default = "default_cad_file")]
    pub cad_file: PathBuf,

    /// Result cap when printing to stdout without `--limit` (0 = unlimited)
    #[serde(default = "default_stdout_limit")]
    pub stdout_limit: usize,

    /// Minimum log severity: trace, info, warn, error or fatal
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_neo_file() -> PathBuf {
    PathBuf::from("data/neos.csv")
}
fn default_cad_file() -> PathBuf {
    PathBuf::from("data/cad.json")
}
fn default_stdout_limit() -> usize {
    10
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            neo_file: default_neo_file(),
            cad_file: default_cad_file(),
            stdout_limit: default_stdout_limit(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration JSON
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> CliResult<()> {
        self.log_severity()?;
        Ok(())
    }

    /// Parsed `log_level`
    pub fn log_severity(&self) -> CliResult<Severity> {
        self.log_level
            .parse()
            .map_err(|e: String| CliError::config_error(format!("Invalid log_level: {}", e)))
    }
}
