//! JSON I/O handling for CLI
//!
//! - Input: one GraphQL request object via stdin
//! - Output: one JSON document via stdout
//! - UTF-8 only

use std::io::{self, Read, Write};

use serde::Serialize;

use super::errors::{CliError, CliResult};

/// Read a GraphQL request (`{"query": ..., "variables": ...}`) from stdin
pub fn read_request() -> CliResult<async_graphql::Request> {
    let mut input = String::new();
    io::stdin().lock().read_to_string(&mut input)?;
    parse_request(&input)
}

fn parse_request(input: &str) -> CliResult<async_graphql::Request> {
    if input.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }

    let request = serde_json::from_str(input)?;
    Ok(request)
}

/// Write a JSON value to stdout on a single line
pub fn write_json<T: Serialize>(value: &T) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}

/// Write plain text to stdout
pub fn write_text(text: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    stdout.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        writeln!(stdout)?;
    }
    stdout.flush()?;
    Ok(())
}
