// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Catalog loader: turns config entries into the widget catalog.
//!
//! Each entry is parsed, validated and normalized on its own. A broken
//! entry is recorded in [`Catalog::errors`] and left out; it never stops
//! the rest of the catalog from loading.
//!
//! # Example
//!
//! ```ignore
//! use gallery_catalog::{load_catalog_dir, LoadOptions};
//!
//! let catalog = load_catalog_dir(Path::new("data"), &LoadOptions::default())?;
//! for failure in &catalog.errors {
//!     eprintln!("{}", failure);
//! }
//! ```

use crate::parser::{parse_config, ParseError, CONFIG_FILE};
use crate::validator::{validate_widget, ValidationErrors};
use gallery_core::{Environment, WidgetRecord};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Where relative widget images are served from
pub const DEFAULT_IMAGE_BASE: &str =
    "https://raw.githubusercontent.com/marimo-team/anywidget-gallery/refs/heads/main";

/// Prefix for bare `owner/repo` references
pub const DEFAULT_GITHUB_BASE: &str = "https://github.com";

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    /// IO error reading the data directory
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Validation error
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Another entry already uses this widget name
    #[error("Duplicate widget name '{name}' (already defined by entry '{first_entry}')")]
    DuplicateName { name: String, first_entry: String },
}

/// A config entry that was left out of the catalog.
#[derive(Debug)]
pub struct EntryError {
    /// Entry (directory) name
    pub entry: String,
    pub error: LoadError,
}

impl std::fmt::Display for EntryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.entry, self.error)
    }
}

// ============================================================================
// Inputs
// ============================================================================

/// Raw text of one widget config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    /// Entry (directory) name, used to locate relative images
    pub name: String,
    /// YAML source
    pub content: String,
}

impl ConfigEntry {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// How loaded widgets are normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Base URL for relative images; `/data/<entry>/<image>` is appended
    pub image_base: String,
    /// Base URL for bare `owner/repo` references
    pub github_base: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            image_base: DEFAULT_IMAGE_BASE.to_string(),
            github_base: DEFAULT_GITHUB_BASE.to_string(),
        }
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// The loaded gallery.
#[derive(Debug, Default)]
pub struct Catalog {
    /// Valid widgets, in entry order
    pub widgets: Vec<WidgetRecord>,
    /// Entries that were left out
    pub errors: Vec<EntryError>,
}

impl Catalog {
    /// Find a widget by exact name, falling back to a case-insensitive match.
    pub fn get(&self, name: &str) -> Option<&WidgetRecord> {
        self.widgets
            .iter()
            .find(|w| w.name == name)
            .or_else(|| {
                let lower = name.to_lowercase();
                self.widgets.iter().find(|w| w.name.to_lowercase() == lower)
            })
    }

    /// Number of widgets supporting each environment (zeros included)
    pub fn environment_counts(&self) -> BTreeMap<Environment, usize> {
        let mut counts: BTreeMap<Environment, usize> =
            Environment::ALL.into_iter().map(|env| (env, 0)).collect();
        for widget in &self.widgets {
            for env in &widget.environments {
                *counts.entry(*env).or_default() += 1;
            }
        }
        counts
    }

    /// Every tag in use, deduplicated and sorted
    pub fn all_tags(&self) -> Vec<String> {
        self.widgets
            .iter()
            .flat_map(|w| w.tags.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

/// Load one entry into a normalized widget.
pub fn load_widget(entry: &ConfigEntry, options: &LoadOptions) -> Result<WidgetRecord, LoadError> {
    let value = parse_config(&entry.content)?;
    let widget = validate_widget(&value)?;
    Ok(normalize(widget, &entry.name, options))
}

/// Build a catalog from config entries.
///
/// Broken entries and later duplicates of a widget name are reported in
/// [`Catalog::errors`] and skipped.
pub fn load_catalog<I>(entries: I, options: &LoadOptions) -> Catalog
where
    I: IntoIterator<Item = ConfigEntry>,
{
    let mut catalog = Catalog::default();
    // Widget name -> entry that defined it first
    let mut owners: HashMap<String, String> = HashMap::new();

    for entry in entries {
        let result = load_widget(&entry, options).and_then(|widget| {
            if let Some(first_entry) = owners.get(&widget.name) {
                return Err(LoadError::DuplicateName {
                    name: widget.name,
                    first_entry: first_entry.clone(),
                });
            }
            owners.insert(widget.name.clone(), entry.name.clone());
            Ok(widget)
        });

        match result {
            Ok(widget) => {
                tracing::debug!(entry = %entry.name, widget = %widget.name, "loaded widget");
                catalog.widgets.push(widget);
            }
            Err(error) => {
                tracing::warn!(entry = %entry.name, %error, "skipping widget config");
                catalog.errors.push(EntryError {
                    entry: entry.name,
                    error,
                });
            }
        }
    }

    catalog
}

/// Load every `<dir>/<entry>/config.yaml`, in entry name order.
///
/// Only failing to list `dir` itself is an error. Unreadable configs are
/// recorded per entry like any other broken entry.
pub fn load_catalog_dir(dir: &Path, options: &LoadOptions) -> Result<Catalog, LoadError> {
    let read_dir = std::fs::read_dir(dir).map_err(|e| LoadError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut entry_dirs: Vec<PathBuf> = read_dir
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.join(CONFIG_FILE).is_file())
        .collect();
    entry_dirs.sort();

    let mut entries = Vec::with_capacity(entry_dirs.len());
    let mut unreadable = Vec::new();
    for entry_dir in entry_dirs {
        let config_path = entry_dir.join(CONFIG_FILE);
        let name = crate::parser::entry_name(&config_path)
            .unwrap_or_default()
            .to_string();
        match std::fs::read_to_string(&config_path) {
            Ok(content) => entries.push(ConfigEntry { name, content }),
            Err(e) => unreadable.push(EntryError {
                entry: name,
                error: LoadError::Parse(ParseError::Io {
                    path: config_path.display().to_string(),
                    source: e,
                }),
            }),
        }
    }

    tracing::debug!(dir = %dir.display(), count = entries.len(), "loading widget configs");
    let mut catalog = load_catalog(entries, options);
    catalog.errors.extend(unreadable);
    Ok(catalog)
}

/// Resolve presentation paths against the configured bases
fn normalize(mut widget: WidgetRecord, entry: &str, options: &LoadOptions) -> WidgetRecord {
    widget.image = widget
        .image
        .filter(|image| !image.is_empty())
        .map(|image| {
            if is_absolute_url(&image) {
                image
            } else {
                format!(
                    "{}/data/{}/{}",
                    options.image_base.trim_end_matches('/'),
                    entry,
                    image.trim_start_matches("./")
                )
            }
        });

    widget.github_repo = widget
        .github_repo
        .filter(|repo| !repo.is_empty())
        .map(|repo| {
            if is_absolute_url(&repo) {
                repo
            } else {
                format!(
                    "{}/{}",
                    options.github_base.trim_end_matches('/'),
                    repo.trim_start_matches('/')
                )
            }
        });

    widget
}

fn is_absolute_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
