//! Command handlers for the qbind CLI.
//!
//! Each handler takes JSON text and returns JSON text, so the binary only
//! deals with files and exit codes. Shared option parsing and file reading
//! live here too.

use qbind_interp::{Dialect, InterpError, Interpolator, ParamValues};
use qbind_ir::{InterpolatedQuery, QueryAst};
use thiserror::Error;

/// Errors surfaced by the CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("invalid parsed query JSON: {0}")]
    Query(#[source] serde_json::Error),

    #[error("invalid parameter values JSON: {0}")]
    Values(#[source] serde_json::Error),

    #[error(transparent)]
    Interp(#[from] InterpError),

    #[error("failed to encode result: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("unknown dialect `{0}` (expected colon, dollar, question or at)")]
    UnknownDialect(String),

    #[error("unknown option `{0}`")]
    UnknownOption(String),
}

/// Options shared by `shape` and `bind`, plus positional arguments.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CommandOptions {
    pub dialect: Dialect,
    pub positional: Vec<String>,
}

/// Parse `--dialect=<name>` and `--prefix=<p>`; everything else not starting
/// with `-` is positional.
pub fn parse_options(args: &[String]) -> Result<CommandOptions, CommandError> {
    let mut dialect_name: Option<&str> = None;
    let mut prefix: Option<&str> = None;
    let mut positional = Vec::new();

    for arg in args {
        if let Some(name) = arg.strip_prefix("--dialect=") {
            dialect_name = Some(name);
        } else if let Some(p) = arg.strip_prefix("--prefix=") {
            prefix = Some(p);
        } else if arg.starts_with('-') {
            return Err(CommandError::UnknownOption(arg.clone()));
        } else {
            positional.push(arg.clone());
        }
    }

    let name = dialect_name.unwrap_or("colon");
    let dialect = Dialect::from_name(name, prefix)
        .ok_or_else(|| CommandError::UnknownDialect(name.to_owned()))?;

    Ok(CommandOptions {
        dialect,
        positional,
    })
}

/// Shape-only pass: rewrite the query and print its shape map.
pub fn shape_json(query_json: &str, dialect: Dialect) -> Result<String, CommandError> {
    let query = parse_query(query_json)?;
    let result = Interpolator::new(dialect).compute_shape(&query)?;
    encode(&result)
}

/// Value-bearing pass: rewrite the query and print its bindings.
pub fn bind_json(
    query_json: &str,
    values_json: &str,
    dialect: Dialect,
) -> Result<String, CommandError> {
    let query = parse_query(query_json)?;
    let values = serde_json::from_str(values_json).map_err(CommandError::Values)?;
    let values = ParamValues::from_json(values)?;
    let result = Interpolator::new(dialect).bind(&query, &values)?;
    encode(&result)
}

fn parse_query(query_json: &str) -> Result<QueryAst, CommandError> {
    let query: QueryAst = serde_json::from_str(query_json).map_err(CommandError::Query)?;
    tracing::debug!(
        name = query.name.as_deref().unwrap_or("<anonymous>"),
        occurrences = query.params.len(),
        "parsed query loaded"
    );
    Ok(query)
}

fn encode(result: &InterpolatedQuery) -> Result<String, CommandError> {
    serde_json::to_string_pretty(result).map_err(CommandError::Encode)
}

/// Read a file to a string, exiting with a message on failure.
pub fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests;
