// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gallery completions <shell>`
//!
//! Prints a completion script covering every subcommand and the
//! `--env`/`--format` value lists. Redirect it wherever the shell loads
//! completions from, e.g. `gallery completions zsh > ~/.zfunc/_gallery`.

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::{self, Write};

/// Print the completion script for `shell` to stdout.
pub fn generate_completions<C: CommandFactory>(shell: Shell) {
    write_completions::<C>(shell, &mut io::stdout());
}

/// Completion script named after the CLI's own binary name
fn write_completions<C: CommandFactory>(shell: Shell, out: &mut dyn Write) {
    let mut cmd = C::command();
    let bin = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin, out);
}

#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// bash, zsh, fish, elvish or powershell
    #[arg(value_enum)]
    pub shell: Shell,
}
