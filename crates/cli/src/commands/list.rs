// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gallery list` - Filtered widget listing

use crate::output::{join_or_dash, print_json, truncate, OutputFormat};
use crate::project::Project;
use anyhow::Result;
use clap::Args;
use gallery_core::{Environment, WidgetQuery};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only widgets whose name or description contains this text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only widgets running in this environment (repeatable)
    #[arg(short = 'e', long = "env", value_name = "ENV")]
    pub environments: Vec<Environment>,

    /// Only widgets carrying this tag (repeatable)
    #[arg(short = 't', long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Filter from a gallery query string (q=...&env=...&tag=...)
    #[arg(long, value_name = "QUERY", conflicts_with_all = ["search", "environments", "tags"])]
    pub query: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl ListArgs {
    fn widget_query(&self) -> WidgetQuery {
        if let Some(query) = &self.query {
            return WidgetQuery::from_query_string(query);
        }
        let mut query = WidgetQuery::new().with_search(self.search.clone().unwrap_or_default());
        for env in &self.environments {
            query = query.with_environment(*env);
        }
        for tag in &self.tags {
            query = query.with_tag(tag.as_str());
        }
        query
    }
}

pub fn run(args: ListArgs, project: &Project) -> Result<()> {
    let catalog = project.load_catalog()?;
    let query = args.widget_query();
    tracing::debug!(query = %query.to_query_string(), "filtering widgets");
    let shown = query.apply(&catalog.widgets);

    if args.format == OutputFormat::Json {
        return print_json(&shown);
    }

    if shown.is_empty() {
        println!("No widgets");
        return Ok(());
    }

    println!("{:<24} {:<22} {:<28} DEMO", "NAME", "ENVIRONMENTS", "TAGS");
    for widget in &shown {
        println!(
            "{:<24} {:<22} {:<28} {}",
            truncate(&widget.name, 24),
            truncate(&join_or_dash(widget.environments.iter().map(|e| e.as_str())), 22),
            truncate(&join_or_dash(&widget.tags), 28),
            if widget.has_notebook() { "notebook" } else { "-" }
        );
    }
    println!();
    println!(
        "{} {}",
        shown.len(),
        if shown.len() == 1 { "widget" } else { "widgets" }
    );
    Ok(())
}
