// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gallery stats` - Environment counts and tags

use crate::output::{print_json, OutputFormat};
use crate::project::Project;
use anyhow::Result;
use clap::Args;
use serde_json::json;

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn run(args: StatsArgs, project: &Project) -> Result<()> {
    let catalog = project.load_catalog()?;
    let counts = catalog.environment_counts();
    let tags = catalog.all_tags();

    if args.format == OutputFormat::Json {
        return print_json(&json!({
            "widgets": catalog.widgets.len(),
            "environments": counts,
            "tags": tags,
        }));
    }

    println!("{:<12} WIDGETS", "ENVIRONMENT");
    for (env, count) in &counts {
        println!("{:<12} {}", env.as_str(), count);
    }
    println!();
    if tags.is_empty() {
        println!("No tags");
    } else {
        println!("TAGS");
        println!("{}", tags.join(", "));
    }
    Ok(())
}
