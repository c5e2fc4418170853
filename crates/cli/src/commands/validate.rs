// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gallery validate` - Check every widget config

use crate::error::GalleryError;
use crate::output::{print_json, OutputFormat};
use crate::project::Project;
use anyhow::Result;
use clap::Args;
use gallery_catalog::{EntryError, LoadError};
use serde_json::json;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Fails when any entry is invalid, after reporting all of them.
pub fn run(args: ValidateArgs, project: &Project) -> Result<()> {
    let catalog = project.load_catalog()?;
    let valid = catalog.widgets.len();
    let invalid = catalog.errors.len();

    if args.format == OutputFormat::Json {
        let failures: Vec<_> = catalog
            .errors
            .iter()
            .map(|e| json!({ "entry": e.entry, "errors": messages(e) }))
            .collect();
        print_json(&json!({
            "valid": catalog.widgets.iter().map(|w| &w.name).collect::<Vec<_>>(),
            "invalid": failures,
        }))?;
    } else {
        for failure in &catalog.errors {
            println!("✗ {}", failure.entry);
            for message in messages(failure) {
                println!("    {}", message);
            }
        }
        println!(
            "Validated {} widget config{}: {} ok, {} invalid",
            valid + invalid,
            if valid + invalid == 1 { "" } else { "s" },
            valid,
            invalid
        );
    }

    if invalid > 0 {
        return Err(GalleryError::invalid_entries(invalid, valid + invalid).into());
    }
    Ok(())
}

/// One line per problem in an entry
fn messages(failure: &EntryError) -> Vec<String> {
    match &failure.error {
        LoadError::Validation(errors) => errors.errors.iter().map(|e| e.to_string()).collect(),
        other => vec![other.to_string()],
    }
}
