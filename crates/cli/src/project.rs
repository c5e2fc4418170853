// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The gallery project the CLI operates on

use crate::config::{find_project_root, GalleryConfig};
use crate::error::GalleryError;
use anyhow::Result;
use gallery_catalog::{load_catalog_dir, Catalog};
use gallery_core::WidgetRecord;
use std::path::PathBuf;

/// Project root plus its settings
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub config: GalleryConfig,
}

impl Project {
    /// Locate the project and read `gallery.toml`
    pub fn open(root: Option<PathBuf>) -> Result<Self> {
        let root = find_project_root(root)?;
        let config = GalleryConfig::load(&root)?;
        tracing::debug!(root = %root.display(), "opened gallery project");
        Ok(Self { root, config })
    }

    pub fn data_path(&self) -> PathBuf {
        self.config.data_path(&self.root)
    }

    /// Load every widget config.
    ///
    /// Entries that fail are logged by the loader and left out; only an
    /// unreadable data directory is an error.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let catalog = load_catalog_dir(&self.data_path(), &self.config.load_options())?;
        tracing::debug!(
            widgets = catalog.widgets.len(),
            skipped = catalog.errors.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}

/// Look a widget up, with a helpful error when it is missing
pub fn find_widget<'a>(catalog: &'a Catalog, name: &str) -> Result<&'a WidgetRecord> {
    catalog
        .get(name)
        .ok_or_else(|| GalleryError::widget_not_found(name, catalog.errors.len()).into())
}
