// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Demo notebook links.
//!
//! Turns a widget's declared demo sources into links on the hosted notebook
//! runtime. This module provides:
//!
//! - **source**: picks one demo source per widget, in priority order
//! - **synth**: de-indents code and wraps fragments in a one-cell program
//! - **template**: the fixed host and program text shared with the runtime
//! - **resolve**: encodes the chosen source into standalone and embed URLs
//!
//! # Architecture
//!
//! ```text
//! WidgetRecord → DemoSource → (program text) → query string → NotebookLinks
//! ```
//!
//! Nothing here fails. A widget with no usable source resolves to empty
//! links.

pub mod resolve;
pub mod source;
pub mod synth;
pub mod template;

pub use resolve::{
    encode_uri_component, resolve_notebook, resolve_notebook_with_host, NotebookLinks,
};
pub use source::{package_identifier, DemoSource};
pub use synth::{dedent, indent, synthesize};
