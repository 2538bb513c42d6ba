//! CLI argument definitions using clap
//!
//! Commands:
//! - gradebook serve [--config <path>] [--data-dir <dir>] [--port <port>]
//! - gradebook query [--config <path>] [--data-dir <dir>]
//! - gradebook check [--config <path>] [--data-dir <dir>]
//! - gradebook schema

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Gradebook - GraphQL over students, courses and grades
#[derive(Parser, Debug)]
#[command(name = "gradebook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the dataset and serve the GraphQL API over HTTP
    Serve {
        #[command(flatten)]
        source: SourceArgs,

        /// Port to listen on (overrides the config file)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Execute one GraphQL request read from stdin and exit
    Query {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Report references in the dataset that do not resolve
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the GraphQL schema in SDL form
    Schema,
}

/// Where configuration and seed files come from
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Path to configuration file (default: ./gradebook.json if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding students.json, courses.json and grades.json
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
