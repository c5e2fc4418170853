// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gallery show` - Widget details and demo links

use crate::output::{join_or_dash, print_json, OutputFormat};
use crate::project::{find_widget, Project};
use anyhow::Result;
use clap::Args;
use gallery_core::{resolve_notebook, DemoSource};
use serde_json::json;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Widget name
    pub name: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn run(args: ShowArgs, project: &Project) -> Result<()> {
    let catalog = project.load_catalog()?;
    let widget = find_widget(&catalog, &args.name)?;
    let source = DemoSource::of(widget);
    let links = resolve_notebook(widget);

    if args.format == OutputFormat::Json {
        return print_json(&json!({
            "widget": widget,
            "demoSource": source.kind(),
            "notebook": links,
        }));
    }

    println!("Widget: {}", widget.name);
    println!("  Description: {}", widget.description);
    println!(
        "  Environments: {}",
        join_or_dash(widget.environments.iter().map(|e| e.as_str()))
    );
    println!("  Tags: {}", join_or_dash(&widget.tags));
    if let Some(url) = &widget.demo_url {
        println!("  Demo: {}", url);
    }
    if let Some(url) = &widget.home_page_url {
        println!("  Home page: {}", url);
    }
    if let Some(repo) = &widget.github_repo {
        println!("  Repository: {}", repo);
    }
    if let Some(package) = &widget.package_name {
        println!("  Package: {}", package);
    }
    if let Some(image) = &widget.image {
        println!("  Image: {}", image);
    }
    if let Some(wasm) = widget.wasm_compatible {
        println!("  WASM compatible: {}", if wasm { "yes" } else { "no" });
    }
    if !widget.additional_links.is_empty() {
        println!("  Links:");
        for link in &widget.additional_links {
            println!("    {}: {}", link.name, link.url);
        }
    }

    println!("  Demo source: {}", source.kind());
    if links.is_empty() {
        println!("  Notebook: -");
    } else {
        println!("  Notebook: {}", links.notebook_url);
        println!("  Embed: {}", links.embed_url);
    }
    Ok(())
}
