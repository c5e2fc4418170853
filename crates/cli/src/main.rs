// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gallery - Widget gallery CLI

mod commands;
mod completions;
mod config;
mod error;
mod output;
mod project;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{export, list, resolve, show, stats, validate};
use completions::CompletionsArgs;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::error::GalleryError;
use crate::project::Project;

#[derive(Parser)]
#[command(
    name = "gallery",
    version,
    about = "Widget gallery - browse widgets and their demo notebooks"
)]
struct Cli {
    /// Gallery root directory (default: $GALLERY_ROOT, else the nearest
    /// directory holding gallery.toml or data/)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List widgets, optionally filtered
    List(list::ListArgs),
    /// Show a widget's details and demo links
    Show(show::ShowArgs),
    /// Print the notebook URL for a widget
    Resolve(resolve::ResolveArgs),
    /// Validate every widget config
    Validate(validate::ValidateArgs),
    /// Environment counts and tags
    Stats(stats::StatsArgs),
    /// Write a widget's notebook program
    Export(export::ExportArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

fn main() -> ExitCode {
    setup_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<GalleryError>() {
                Some(friendly) => eprint!("{}", friendly),
                None => eprintln!("error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Completions don't need a project
    if let Commands::Completions(args) = cli.command {
        completions::generate_completions::<Cli>(args.shell);
        return Ok(());
    }

    let project = Project::open(cli.root)?;

    match cli.command {
        Commands::List(args) => list::run(args, &project),
        Commands::Show(args) => show::run(args, &project),
        Commands::Resolve(args) => resolve::run(args, &project),
        Commands::Validate(args) => validate::run(args, &project),
        Commands::Stats(args) => stats::run(args, &project),
        Commands::Export(args) => export::run(args, &project),
        Commands::Completions(_) => Ok(()),
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default: warnings only)
fn setup_logging() {
    use std::io::IsTerminal;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .try_init();
}
