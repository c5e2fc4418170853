// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod export;
pub mod list;
pub mod resolve;
pub mod show;
pub mod stats;
pub mod validate;
