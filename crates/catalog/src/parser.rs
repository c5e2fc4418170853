// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! YAML parsing for widget configs (syntactic layer).
//!
//! Produces an untyped `serde_yaml::Value`. No validation is performed at
//! this layer - that's the job of the validator.

use serde_yaml::Value;
use std::path::Path;
use thiserror::Error;

/// File name of a widget config inside its entry directory
pub const CONFIG_FILE: &str = "config.yaml";

/// Errors that can occur during parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// YAML syntax error
    #[error("YAML syntax error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO error reading file
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Parse a widget config from YAML string content.
///
/// An empty document parses to `Value::Null`, which the validator rejects.
pub fn parse_config(yaml_content: &str) -> Result<Value, ParseError> {
    if yaml_content.trim().is_empty() {
        return Ok(Value::Null);
    }
    let value: Value = serde_yaml::from_str(yaml_content)?;
    Ok(value)
}

/// Parse a widget config from a YAML file.
pub fn parse_config_file(path: &Path) -> Result<Value, ParseError> {
    let content = std::fs::read_to_string(path).map_err(|e| ParseError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_config(&content)
}

/// Get the entry name of a config file: the directory holding it.
///
/// ```ignore
/// assert_eq!(entry_name(Path::new("data/quak/config.yaml")), Some("quak"));
/// ```
pub fn entry_name(path: &Path) -> Option<&str> {
    path.parent()
        .and_then(|dir| dir.file_name())
        .and_then(|s| s.to_str())
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
