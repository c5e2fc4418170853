// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gallery resolve` - Print a widget's notebook URL

use crate::output::{print_json, OutputFormat};
use crate::project::{find_widget, Project};
use anyhow::Result;
use clap::Args;
use gallery_core::resolve_notebook;

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Widget name
    pub name: String,

    /// Print the chrome-less URL meant for iframes
    #[arg(long)]
    pub embed: bool,

    /// Output format (json prints both URLs)
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Prints nothing for widgets without a demo source.
pub fn run(args: ResolveArgs, project: &Project) -> Result<()> {
    let catalog = project.load_catalog()?;
    let widget = find_widget(&catalog, &args.name)?;
    let links = resolve_notebook(widget);

    if args.format == OutputFormat::Json {
        return print_json(&links);
    }

    if links.is_empty() {
        tracing::info!(widget = %widget.name, "no demo notebook");
        return Ok(());
    }

    if args.embed {
        println!("{}", links.embed_url);
    } else {
        println!("{}", links.notebook_url);
    }
    Ok(())
}
