// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notebook URL resolution

use super::source::DemoSource;
use super::template::{CODE_PARAM, EMBED_PARAMS, NOTEBOOK_HOST, SRC_PARAM};
use crate::widget::WidgetRecord;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use url::form_urlencoded;

/// Characters left alone by `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Links to a widget's demo notebook.
///
/// Both fields are empty when the widget has nothing to demo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookLinks {
    /// Standalone page
    pub notebook_url: String,
    /// Same notebook without chrome, for iframes
    pub embed_url: String,
}

impl NotebookLinks {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.notebook_url.is_empty() && self.embed_url.is_empty()
    }
}

/// Resolve a widget to links on the public notebook host.
pub fn resolve_notebook(widget: &WidgetRecord) -> NotebookLinks {
    resolve_notebook_with_host(widget, NOTEBOOK_HOST)
}

/// Resolve a widget to links on `host` (no trailing `?`).
///
/// Never fails: widgets without a usable demo source resolve to
/// [`NotebookLinks::empty`].
pub fn resolve_notebook_with_host(widget: &WidgetRecord, host: &str) -> NotebookLinks {
    let Some((key, value)) = query_param(&DemoSource::of(widget)) else {
        return NotebookLinks::empty();
    };

    let base = [(key, value.as_str())];
    let embed = [base[0], EMBED_PARAMS[0], EMBED_PARAMS[1]];

    NotebookLinks {
        notebook_url: format!("{}?{}", host, encode_query(&base)),
        embed_url: format!("{}?{}", host, encode_query(&embed)),
    }
}

/// The single query parameter identifying the demo, if any.
fn query_param(source: &DemoSource<'_>) -> Option<(&'static str, String)> {
    match source {
        DemoSource::NotebookUrl(url) => Some((SRC_PARAM, (*url).to_string())),
        DemoSource::NotebookCode(_) | DemoSource::GithubRepo { .. } => {
            let program = source.program()?;
            Some((CODE_PARAM, encode_uri_component(&program)))
        }
        DemoSource::None => None,
    }
}

/// Percent-encode the way `encodeURIComponent` does.
pub fn encode_uri_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Serialize pairs as `application/x-www-form-urlencoded`.
fn encode_query(pairs: &[(&str, &str)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
