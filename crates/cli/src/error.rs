// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Errors carry what went wrong, why it might have happened, and how to
//! fix it.

use std::fmt;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct GalleryError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
}

impl GalleryError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// A widget name matched nothing in the catalog.
    pub fn widget_not_found(name: &str, skipped_entries: usize) -> Self {
        let mut err = GalleryError::new(format!("Widget '{}' not found", name))
            .with_suggestion("List available widgets: gallery list")
            .with_suggestion(format!("Search by name: gallery list --search {}", name));
        if skipped_entries > 0 {
            err = err
                .with_context(format!(
                    "{} config entr{} failed to load and may define it",
                    skipped_entries,
                    if skipped_entries == 1 { "y" } else { "ies" }
                ))
                .with_suggestion("Check the configs: gallery validate");
        }
        err
    }

    /// Some config entries failed validation.
    pub fn invalid_entries(failed: usize, total: usize) -> Self {
        GalleryError::new(format!("{} of {} widget configs are invalid", failed, total))
            .with_suggestion("Fix the fields listed above and run: gallery validate")
    }

    /// No widget has a notebook to export.
    pub fn nothing_to_export(name: &str) -> Self {
        GalleryError::new(format!("Widget '{}' has no demo notebook", name))
            .with_context("It defines none of notebookUrl, notebookCode or githubRepo")
            .with_suggestion("Add notebookCode or githubRepo to its config.yaml")
    }

    /// The repository path yields no package to install.
    pub fn no_package_name(name: &str, repo: &str) -> Self {
        GalleryError::new(format!("Widget '{}' has no demo notebook", name))
            .with_context(format!(
                "Its githubRepo '{}' does not end in a package name",
                repo
            ))
            .with_suggestion("Set packageName in its config.yaml")
    }
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for GalleryError {}
