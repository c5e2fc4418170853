// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Widget records as they appear in the gallery

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A runtime or platform in which a widget can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Marimo,
    Jupyter,
    Colab,
    Myst,
    Numerous,
}

impl Environment {
    /// Every environment, in declaration order
    pub const ALL: [Environment; 5] = [
        Environment::Marimo,
        Environment::Jupyter,
        Environment::Colab,
        Environment::Myst,
        Environment::Numerous,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Marimo => "marimo",
            Environment::Jupyter => "jupyter",
            Environment::Colab => "colab",
            Environment::Myst => "myst",
            Environment::Numerous => "numerous",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEnvironment(pub String);

impl fmt::Display for UnknownEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown environment '{}' (expected one of: marimo, jupyter, colab, myst, numerous)",
            self.0
        )
    }
}

impl std::error::Error for UnknownEnvironment {}

impl FromStr for Environment {
    type Err = UnknownEnvironment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Environment::ALL
            .into_iter()
            .find(|env| env.as_str() == s)
            .ok_or_else(|| UnknownEnvironment(s.to_string()))
    }
}

/// A named link shown next to a widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub name: String,
    pub url: String,
}

/// A validated gallery entry.
///
/// Built once per config entry by the catalog loader and never mutated
/// afterwards. Tags are already lower-cased. Empty strings in the optional
/// demo fields are treated as absent by the notebook resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetRecord {
    pub name: String,
    pub description: String,
    pub environments: Vec<Environment>,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_page_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notebook_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notebook_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_repo: Option<String>,
    #[serde(default)]
    pub additional_links: Vec<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wasm_compatible: Option<bool>,
}

impl WidgetRecord {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// True if the widget ships its own notebook (hosted or inline)
    pub fn has_notebook(&self) -> bool {
        non_empty(&self.notebook_url).is_some() || non_empty(&self.notebook_code).is_some()
    }

    pub fn supports(&self, env: Environment) -> bool {
        self.environments.contains(&env)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Treat `Some("")` the same as `None`
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "widget_tests.rs"]
mod tests;
