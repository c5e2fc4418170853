// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Demo source selection

use super::synth::{synthesize, wrap_in_cell};
use super::template::package_cell_body;
use crate::widget::{non_empty, WidgetRecord};

/// Where a widget's demo notebook comes from.
///
/// Exactly one source is picked per widget, in priority order:
/// hosted notebook, inline code, then a package guessed from the repo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoSource<'a> {
    /// An already hosted notebook
    NotebookUrl(&'a str),
    /// Code to run inside a notebook
    NotebookCode(&'a str),
    /// Only a repository is known; a package is installed and introspected
    GithubRepo {
        repo: &'a str,
        package_name: Option<&'a str>,
    },
    /// Nothing to demo
    None,
}

impl<'a> DemoSource<'a> {
    /// Pick the demo source for a widget.
    pub fn of(widget: &'a WidgetRecord) -> Self {
        if let Some(url) = non_empty(&widget.notebook_url) {
            DemoSource::NotebookUrl(url)
        } else if let Some(code) = non_empty(&widget.notebook_code) {
            DemoSource::NotebookCode(code)
        } else if let Some(repo) = non_empty(&widget.github_repo) {
            DemoSource::GithubRepo {
                repo,
                package_name: non_empty(&widget.package_name),
            }
        } else {
            DemoSource::None
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DemoSource::NotebookUrl(_) => "notebook-url",
            DemoSource::NotebookCode(_) => "notebook-code",
            DemoSource::GithubRepo { .. } => "github-repo",
            DemoSource::None => "none",
        }
    }

    /// The notebook program this source runs, when it is known locally.
    ///
    /// Hosted notebooks return `None`: their text lives at the URL.
    pub fn program(&self) -> Option<String> {
        match self {
            DemoSource::NotebookCode(code) => Some(synthesize(code)),
            DemoSource::GithubRepo { repo, package_name } => {
                let package_id = package_identifier(repo, *package_name)?;
                Some(wrap_in_cell(&package_cell_body(&package_id)))
            }
            DemoSource::NotebookUrl(_) | DemoSource::None => None,
        }
    }
}

/// Derive an importable identifier for a widget's package.
///
/// An explicit package name wins; otherwise the last path segment of the
/// repository is used. Hyphens become underscores. Returns `None` when no
/// name can be derived (e.g. a repository ending in `/`).
pub fn package_identifier(repo: &str, package_name: Option<&str>) -> Option<String> {
    let name = match package_name.filter(|name| !name.is_empty()) {
        Some(name) => name,
        None => repo.rsplit('/').next().unwrap_or_default(),
    };
    if name.is_empty() {
        return None;
    }
    Some(name.replace('-', "_"))
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
