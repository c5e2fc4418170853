// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gallery export` - Write a widget's notebook program to disk

use crate::error::GalleryError;
use crate::project::{find_widget, Project};
use anyhow::{Context, Result};
use clap::Args;
use gallery_core::DemoSource;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Widget name
    pub name: String,

    /// Write here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

pub fn run(args: ExportArgs, project: &Project) -> Result<()> {
    let catalog = project.load_catalog()?;
    let widget = find_widget(&catalog, &args.name)?;

    let source = DemoSource::of(widget);
    let program = match source {
        DemoSource::NotebookUrl(url) => fetch_notebook(url)?,
        DemoSource::GithubRepo { repo, .. } => source
            .program()
            .ok_or_else(|| GalleryError::no_package_name(&widget.name, repo))?,
        DemoSource::NotebookCode(_) | DemoSource::None => source
            .program()
            .ok_or_else(|| GalleryError::nothing_to_export(&widget.name))?,
    };

    match args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            std::fs::write(&path, &program)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Exported {} to {}", widget.name, path.display());
        }
        None => print!("{}", program),
    }
    Ok(())
}

/// Download a hosted notebook's source
fn fetch_notebook(url: &str) -> Result<String> {
    tracing::info!(url, "fetching notebook");
    let mut response = ureq::get(url)
        .call()
        .with_context(|| format!("fetching {}", url))?;
    let text = response
        .body_mut()
        .read_to_string()
        .with_context(|| format!("reading {}", url))?;
    Ok(text)
}
