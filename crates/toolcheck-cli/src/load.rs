//! Loading tool definitions from disk.
//!
//! Load failures are distinct from validation errors: a file that can't be
//! read or parsed never reaches the validator.

use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;
use toolcheck_lint::json_type_name;

/// Why a tool definition could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} must contain a JSON object, found {found}", .path.display())]
    NotAnObject { path: PathBuf, found: &'static str },
}

/// Read and parse a tool definition file.
pub fn load_tool_definition(path: &Path) -> Result<Map<String, Value>, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read tool definition");
    parse_tool_definition(&text, path)
}

/// Parse tool definition text. `path` is only used for error messages.
pub fn parse_tool_definition(text: &str, path: &Path) -> Result<Map<String, Value>, LoadError> {
    let value: Value = serde_json::from_str(text).map_err(|source| LoadError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(LoadError::NotAnObject {
            path: path.to_path_buf(),
            found: json_type_name(&other),
        }),
    }
}
