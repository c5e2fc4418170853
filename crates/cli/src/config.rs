// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Project root discovery and `gallery.toml` settings

use gallery_catalog::{LoadOptions, DEFAULT_GITHUB_BASE, DEFAULT_IMAGE_BASE};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Settings file looked up in the project root
pub const CONFIG_FILE_NAME: &str = "gallery.toml";

/// Environment variable overriding project root discovery
pub const ROOT_ENV: &str = "GALLERY_ROOT";

/// Data directory used when `gallery.toml` does not name one
const DEFAULT_DATA_DIR: &str = "data";

/// Errors reading project settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine project root")]
    NoProjectRoot,
}

/// Contents of `gallery.toml`; every key is optional
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Directory holding `<entry>/config.yaml`, relative to the project root
    pub data_dir: PathBuf,
    /// Base URL for relative widget images
    pub image_base: String,
    /// Base URL for bare `owner/repo` references
    pub github_base: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            image_base: DEFAULT_IMAGE_BASE.to_string(),
            github_base: DEFAULT_GITHUB_BASE.to_string(),
        }
    }
}

impl GalleryConfig {
    /// Parse settings from TOML text
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load `gallery.toml` from the project root, or defaults if absent
    pub fn load(project_root: &Path) -> Result<Self, ConfigError> {
        let path = project_root.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;
        Self::parse(&content, &path)
    }

    /// Absolute data directory for a project
    pub fn data_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.data_dir)
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            image_base: self.image_base.clone(),
            github_base: self.github_base.clone(),
        }
    }
}

/// Find the project root.
///
/// An explicit path wins, then `GALLERY_ROOT`, then the nearest ancestor of
/// the current directory holding `gallery.toml` or a `data/` directory.
/// Falls back to the current directory.
pub fn find_project_root(explicit: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    if let Some(root) = explicit {
        return Ok(root);
    }
    if let Ok(root) = std::env::var(ROOT_ENV) {
        if !root.is_empty() {
            return Ok(PathBuf::from(root));
        }
    }

    let cwd = std::env::current_dir().map_err(|_| ConfigError::NoProjectRoot)?;
    Ok(find_root_from(&cwd).unwrap_or(cwd))
}

fn find_root_from(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(CONFIG_FILE_NAME).is_file() || dir.join(DEFAULT_DATA_DIR).is_dir())
        .map(Path::to_path_buf)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
