//! CLI module for Gradebook
//!
//! Provides command-line interface for:
//! - serve: Load the dataset and serve GraphQL over HTTP
//! - query: One-shot GraphQL execution from stdin
//! - check: Integrity report over the seed data
//! - schema: Print the GraphQL SDL

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, SourceArgs};
pub use commands::{check, load_store, query, run, run_command, schema, serve};
pub use config::{Config, DEFAULT_CONFIG_PATH};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request, write_json, write_text};
