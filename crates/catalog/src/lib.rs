// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Widget config parsing, validation, and loading.
//!
//! Each widget lives in `data/<entry>/config.yaml`. This crate provides:
//!
//! - **parser**: YAML parsing (syntactic layer)
//! - **validator**: schema checks and normalization into `WidgetRecord`
//! - **loader**: catalog assembly with per-entry failure reporting
//!
//! # Architecture
//!
//! ```text
//! YAML file → parser → serde_yaml::Value → validator → WidgetRecord → loader → Catalog
//! ```

pub mod loader;
pub mod parser;
pub mod validator;

pub use loader::{
    load_catalog, load_catalog_dir, load_widget, Catalog, ConfigEntry, EntryError, LoadError,
    LoadOptions, DEFAULT_GITHUB_BASE, DEFAULT_IMAGE_BASE,
};
pub use parser::{entry_name, parse_config, parse_config_file, ParseError, CONFIG_FILE};
pub use validator::{validate_widget, ValidationError, ValidationErrors, ValidationResult};
