//! CLI module for neodb
//!
//! Provides command-line interface for:
//! - inspect: Look up one NEO by designation or name
//! - query: Filter close approaches and print or save the results

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command, InspectTarget, QueryArgs};
pub use commands::{inspect, load_database, query, run, run_command, DataPaths};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
