// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Search and facet filtering over widget lists

use crate::widget::{Environment, WidgetRecord};
use std::cmp::Ordering;
use url::form_urlencoded;

/// Query parameter for the search text
const SEARCH_KEY: &str = "q";
/// Repeated query parameter for selected environments
const ENV_KEY: &str = "env";
/// Repeated query parameter for selected tags
const TAG_KEY: &str = "tag";

/// The user's current search and facet selection.
///
/// Facets are OR-ed within a group and AND-ed across groups: a widget is
/// shown if its name or description contains the search text, it supports
/// any selected environment, and it carries any selected tag. Empty
/// selections match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetQuery {
    pub search: String,
    pub environments: Vec<Environment>,
    pub tags: Vec<String>,
}

impl WidgetQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_environment(mut self, env: Environment) -> Self {
        if !self.environments.contains(&env) {
            self.environments.push(env);
        }
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into().to_lowercase();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.environments.is_empty() && self.tags.is_empty()
    }

    /// Select an environment, or deselect it if already selected
    pub fn toggle_environment(&mut self, env: Environment) {
        if let Some(pos) = self.environments.iter().position(|e| *e == env) {
            self.environments.remove(pos);
        } else {
            self.environments.push(env);
        }
    }

    /// Select a tag, or deselect it if already selected
    pub fn toggle_tag(&mut self, tag: &str) {
        let tag = tag.to_lowercase();
        if let Some(pos) = self.tags.iter().position(|t| *t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag);
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, widget: &WidgetRecord) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            if !widget.name.to_lowercase().contains(&needle)
                && !widget.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        if !self.environments.is_empty()
            && !self.environments.iter().any(|env| widget.supports(*env))
        {
            return false;
        }

        if !self.tags.is_empty() && !self.tags.iter().any(|tag| widget.has_tag(tag)) {
            return false;
        }

        true
    }

    /// Sort widgets for display and keep the ones matching this query.
    ///
    /// Widgets with a notebook come first, then everything by name.
    pub fn apply<'a>(&self, widgets: &'a [WidgetRecord]) -> Vec<&'a WidgetRecord> {
        let mut sorted: Vec<&WidgetRecord> = widgets.iter().collect();
        sorted.sort_by(|a, b| display_order(a, b));
        sorted.retain(|w| self.matches(w));
        sorted
    }

    /// Encode as `q=...&env=...&tag=...`, skipping empty parts.
    pub fn to_query_string(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        if !self.search.is_empty() {
            query.append_pair(SEARCH_KEY, &self.search);
        }
        for env in &self.environments {
            query.append_pair(ENV_KEY, env.as_str());
        }
        for tag in &self.tags {
            query.append_pair(TAG_KEY, tag);
        }
        query.finish()
    }

    /// Decode a query string written by [`WidgetQuery::to_query_string`].
    ///
    /// A leading `?` is allowed. Unknown environments and keys are ignored.
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut parsed = Self::default();
        let mut has_search = false;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                // First `q` wins
                SEARCH_KEY if !has_search => {
                    parsed.search = value.into_owned();
                    has_search = true;
                }
                ENV_KEY => {
                    if let Ok(env) = value.parse::<Environment>() {
                        parsed = parsed.with_environment(env);
                    }
                }
                TAG_KEY => parsed = parsed.with_tag(value.into_owned()),
                _ => {}
            }
        }
        parsed
    }
}

/// Widgets with a notebook first, then by name ignoring case
pub fn display_order(a: &WidgetRecord, b: &WidgetRecord) -> Ordering {
    b.has_notebook()
        .cmp(&a.has_notebook())
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
