// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gallery-core: widget model and notebook links for the widget gallery
//!
//! This crate provides:
//! - The validated widget record and its environments
//! - Demo notebook resolution (program synthesis and URL encoding)
//! - Search, environment and tag filtering over widget lists

pub mod filter;
pub mod notebook;
pub mod widget;

pub use filter::WidgetQuery;
pub use notebook::{resolve_notebook, synthesize, DemoSource, NotebookLinks};
pub use widget::{Environment, Link, UnknownEnvironment, WidgetRecord};
