//! CLI command implementations
//!
//! Every command that touches data follows the same boot sequence:
//! 1. Resolve configuration
//! 2. Load the seed files
//! 3. Seed the dataset store
//!
//! Nothing is ever written back to the data directory.

use std::path::Path;
use std::sync::Arc;

use serde_json::json;

use crate::dataset::{DatasetLoader, DatasetStore};
use crate::graphql::{build_schema, export_sdl, GraphQLContext};
use crate::http_server::HttpServer;
use crate::observability::{log_event, log_event_with_fields, Event, MetricsRegistry};
use crate::validator::{audit, IntegrityViolation};

use super::args::{Command, SourceArgs};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{read_request, write_json, write_text};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { source, port } => serve(&source, port),
        Command::Query { source } => query(&source),
        Command::Check { source } => check(&source),
        Command::Schema => schema(),
    }
}

fn resolve_config(source: &SourceArgs) -> CliResult<Config> {
    Config::resolve(source.config.as_deref(), source.data_dir.as_deref())
}

/// Load the seed files and build the store
pub fn load_store(data_dir: &Path) -> CliResult<DatasetStore> {
    let dataset = DatasetLoader::new(data_dir).load()?;

    log_event_with_fields(
        Event::DatasetLoaded,
        &[
            ("data_dir", data_dir.display().to_string().as_str()),
            ("students", dataset.students.len().to_string().as_str()),
            ("courses", dataset.courses.len().to_string().as_str()),
            ("grades", dataset.grades.len().to_string().as_str()),
        ],
    );

    Ok(DatasetStore::new(dataset))
}

fn log_violations(violations: &[IntegrityViolation]) {
    for violation in violations {
        log_event_with_fields(
            Event::IntegrityViolation,
            &[("detail", violation.to_string().as_str())],
        );
    }
}

/// Load the dataset and serve the GraphQL API until Ctrl-C
///
/// Broken references in the seed data are logged, not fatal.
pub fn serve(source: &SourceArgs, port: Option<u16>) -> CliResult<()> {
    log_event(Event::BootStart);

    let mut config = resolve_config(source)?;
    if let Some(port) = port {
        config.server.port = port;
        config.validate()?;
    }

    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("data_dir", config.data_dir.as_str()),
            ("port", config.server.port.to_string().as_str()),
        ],
    );

    let store = load_store(config.data_path())?;
    log_violations(&audit(&store));

    let server = HttpServer::new(config.server, store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Execute a single GraphQL request from stdin and exit
///
/// Mutations apply to the in-memory copy only and are lost on exit.
pub fn query(source: &SourceArgs) -> CliResult<()> {
    let config = resolve_config(source)?;
    let store = load_store(config.data_path())?;

    let request = read_request()?;

    let schema = build_schema(GraphQLContext::new(
        store,
        Arc::new(MetricsRegistry::new()),
    ));

    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    let response = rt.block_on(schema.execute(request));
    write_json(&response)
}

/// Print the integrity report; fails when any reference is broken
pub fn check(source: &SourceArgs) -> CliResult<()> {
    let config = resolve_config(source)?;
    let store = load_store(config.data_path())?;

    let violations = audit(&store);
    log_violations(&violations);

    write_json(&json!({
        "students": store.students().len(),
        "courses": store.courses().len(),
        "grades": store.grades().len(),
        "violations": violations,
    }))?;

    if violations.is_empty() {
        Ok(())
    } else {
        Err(CliError::integrity_violations(violations.len()))
    }
}

/// Print the GraphQL schema
pub fn schema() -> CliResult<()> {
    write_text(&export_sdl())
}
