// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Semantic validation for widget configs.
//!
//! Checks a parsed YAML value against the widget schema and produces a
//! normalized [`WidgetRecord`]:
//! - Required fields present with the right type
//! - Environments drawn from the known set
//! - URL fields parse as absolute URLs
//! - Tags lower-cased, `additionalLinks` defaulted to empty
//!
//! Every violation is collected; validation does not stop at the first one.

use gallery_core::{Environment, Link, WidgetRecord};
use serde_yaml::{Mapping, Value};
use url::Url;

/// Result of validation
pub type ValidationResult = Result<WidgetRecord, ValidationErrors>;

/// Keys the schema knows about; anything else is ignored
const KNOWN_KEYS: &[&str] = &[
    "name",
    "description",
    "environments",
    "tags",
    "demoUrl",
    "homePageUrl",
    "notebookUrl",
    "notebookCode",
    "packageName",
    "githubRepo",
    "additionalLinks",
    "image",
    "wasmCompatible",
];

/// Collection of validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Field paths that failed, in the order they were checked
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field()).collect()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Widget config validation failed with {} error(s):",
            self.errors.len()
        )?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}: {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// A single validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The document root is not a mapping
    NotAMapping { found: &'static str },
    /// Missing required field
    MissingRequired { field: String },
    /// Required text is empty
    Empty { field: String },
    /// Field has the wrong YAML type
    WrongType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
    /// Field is not an absolute URL
    InvalidUrl {
        field: String,
        value: String,
        reason: String,
    },
    /// Environment outside the known set
    UnknownEnvironment { field: String, value: String },
}

impl ValidationError {
    /// Path of the offending field, e.g. `additionalLinks[1].url`
    pub fn field(&self) -> &str {
        match self {
            ValidationError::NotAMapping { .. } => "<root>",
            ValidationError::MissingRequired { field }
            | ValidationError::Empty { field }
            | ValidationError::WrongType { field, .. }
            | ValidationError::InvalidUrl { field, .. }
            | ValidationError::UnknownEnvironment { field, .. } => field,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NotAMapping { found } => {
                write!(f, "Config must be a mapping, found {}", found)
            }
            ValidationError::MissingRequired { field } => {
                write!(f, "Missing required field '{}'", field)
            }
            ValidationError::Empty { field } => write!(f, "Field '{}' must not be empty", field),
            ValidationError::WrongType {
                field,
                expected,
                found,
            } => write!(
                f,
                "Field '{}' must be a {}, found {}",
                field, expected, found
            ),
            ValidationError::InvalidUrl {
                field,
                value,
                reason,
            } => write!(
                f,
                "Field '{}' is not a valid URL '{}': {}",
                field, value, reason
            ),
            ValidationError::UnknownEnvironment { field, value } => write!(
                f,
                "Unknown environment '{}' in {} (expected one of: {})",
                value,
                field,
                Environment::ALL.map(|e| e.as_str()).join(", ")
            ),
        }
    }
}

/// Validate a parsed widget config.
pub fn validate_widget(value: &Value) -> ValidationResult {
    let Some(map) = value.as_mapping() else {
        return Err(ValidationErrors {
            errors: vec![ValidationError::NotAMapping {
                found: kind_of(value),
            }],
        });
    };

    log_unknown_keys(map);

    let mut errors = Vec::new();

    // Required fields
    let name = required_string(map, "name", &mut errors);
    if matches!(&name, Some(n) if n.trim().is_empty()) {
        errors.push(ValidationError::Empty {
            field: "name".to_string(),
        });
    }
    let description = required_string(map, "description", &mut errors);
    let environments = validate_environments(map, &mut errors);
    let tags = validate_tags(map, &mut errors);

    // Optional fields
    let widget = WidgetRecord {
        name: name.unwrap_or_default(),
        description: description.unwrap_or_default(),
        environments,
        tags,
        demo_url: optional_url(map, "demoUrl", &mut errors),
        home_page_url: optional_url(map, "homePageUrl", &mut errors),
        notebook_url: optional_url(map, "notebookUrl", &mut errors),
        notebook_code: optional_string(map, "notebookCode", &mut errors),
        package_name: optional_string(map, "packageName", &mut errors),
        github_repo: optional_string(map, "githubRepo", &mut errors),
        additional_links: validate_links(map, &mut errors),
        image: optional_string(map, "image", &mut errors),
        wasm_compatible: lenient_bool(map, "wasmCompatible"),
    };

    if errors.is_empty() {
        Ok(widget)
    } else {
        Err(ValidationErrors { errors })
    }
}

fn log_unknown_keys(map: &Mapping) {
    for key in map.keys() {
        match key.as_str() {
            Some(k) if KNOWN_KEYS.contains(&k) => {}
            Some(k) => tracing::debug!(key = k, "ignoring unknown widget config key"),
            None => tracing::debug!(?key, "ignoring non-string widget config key"),
        }
    }
}

/// Look up a field. An explicit `null` is present and fails type checks.
fn field<'a>(map: &'a Mapping, key: &str) -> Option<&'a Value> {
    map.get(key)
}

fn required_string(
    map: &Mapping,
    key: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<String> {
    match field(map, key) {
        None => {
            errors.push(ValidationError::MissingRequired {
                field: key.to_string(),
            });
            None
        }
        Some(value) => expect_string(value, key, errors),
    }
}

fn optional_string(
    map: &Mapping,
    key: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<String> {
    field(map, key).and_then(|value| expect_string(value, key, errors))
}

fn optional_url(map: &Mapping, key: &str, errors: &mut Vec<ValidationError>) -> Option<String> {
    let value = optional_string(map, key, errors)?;
    check_url(&value, key, errors).then_some(value)
}

/// Informational flag: kept when boolean, otherwise dropped without failing the entry
fn lenient_bool(map: &Mapping, key: &str) -> Option<bool> {
    let value = field(map, key)?;
    let flag = value.as_bool();
    if flag.is_none() {
        tracing::debug!(key, found = kind_of(value), "ignoring non-boolean widget config flag");
    }
    flag
}

fn expect_string(value: &Value, path: &str, errors: &mut Vec<ValidationError>) -> Option<String> {
    match value.as_str() {
        Some(s) => Some(s.to_string()),
        None => {
            errors.push(wrong_type(path, "string", value));
            None
        }
    }
}

fn check_url(value: &str, path: &str, errors: &mut Vec<ValidationError>) -> bool {
    match Url::parse(value) {
        Ok(_) => true,
        Err(e) => {
            errors.push(ValidationError::InvalidUrl {
                field: path.to_string(),
                value: value.to_string(),
                reason: e.to_string(),
            });
            false
        }
    }
}

/// Fetch a required list, reporting missing or non-list values
fn required_sequence<'a>(
    map: &'a Mapping,
    key: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<&'a Vec<Value>> {
    let Some(value) = field(map, key) else {
        errors.push(ValidationError::MissingRequired {
            field: key.to_string(),
        });
        return None;
    };
    let seq = value.as_sequence();
    if seq.is_none() {
        errors.push(wrong_type(key, "list", value));
    }
    seq
}

fn validate_environments(map: &Mapping, errors: &mut Vec<ValidationError>) -> Vec<Environment> {
    let Some(items) = required_sequence(map, "environments", errors) else {
        return Vec::new();
    };

    let mut environments = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let path = format!("environments[{}]", i);
        let Some(name) = expect_string(item, &path, errors) else {
            continue;
        };
        match name.parse::<Environment>() {
            Ok(env) => environments.push(env),
            Err(_) => errors.push(ValidationError::UnknownEnvironment {
                field: path,
                value: name,
            }),
        }
    }
    environments
}

fn validate_tags(map: &Mapping, errors: &mut Vec<ValidationError>) -> Vec<String> {
    let Some(items) = required_sequence(map, "tags", errors) else {
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| expect_string(item, &format!("tags[{}]", i), errors))
        .map(|tag| tag.to_lowercase())
        .collect()
}

fn validate_links(map: &Mapping, errors: &mut Vec<ValidationError>) -> Vec<Link> {
    let Some(value) = field(map, "additionalLinks") else {
        return Vec::new();
    };
    let Some(items) = value.as_sequence() else {
        errors.push(wrong_type("additionalLinks", "list", value));
        return Vec::new();
    };

    let mut links = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let path = format!("additionalLinks[{}]", i);
        let Some(link) = item.as_mapping() else {
            errors.push(wrong_type(&path, "mapping", item));
            continue;
        };

        let name_path = format!("{}.name", path);
        let url_path = format!("{}.url", path);
        let name = match field(link, "name") {
            Some(v) => expect_string(v, &name_path, errors),
            None => {
                errors.push(ValidationError::MissingRequired { field: name_path });
                None
            }
        };
        let url = match field(link, "url") {
            Some(v) => expect_string(v, &url_path, errors)
                .filter(|url| check_url(url, &url_path, errors)),
            None => {
                errors.push(ValidationError::MissingRequired { field: url_path });
                None
            }
        };

        if let (Some(name), Some(url)) = (name, url) {
            links.push(Link { name, url });
        }
    }
    links
}

fn wrong_type(path: &str, expected: &'static str, found: &Value) -> ValidationError {
    ValidationError::WrongType {
        field: path.to_string(),
        expected,
        found: kind_of(found),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
