// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed text shared with the hosted notebook runtime.
//!
//! Everything the runtime depends on bit-for-bit lives here so the wire
//! format has one definition. `template_tests.rs` pins the exact output.

/// Host serving notebooks; query parameters are appended after `?`
pub const NOTEBOOK_HOST: &str = "https://marimo.app";

/// Substring marking code that already declares its own notebook app
pub const APP_MARKER: &str = "marimo.App(";

/// Everything before the body of the single setup cell
pub const CELL_HEADER: &str = "import marimo\n\napp = marimo.App()\n\n@app.cell\nasync def _():\n";

/// Closes the setup cell
pub const CELL_RETURN: &str = "    return\n";

/// Indentation unit for cell bodies
pub const CELL_INDENT: &str = "    ";

/// Query parameter carrying a hosted notebook URL
pub const SRC_PARAM: &str = "src";

/// Query parameter carrying encoded program text
pub const CODE_PARAM: &str = "code";

/// Extra parameters for the chrome-less embed variant
pub const EMBED_PARAMS: [(&str, &str); 2] = [("show-chrome", "false"), ("embed", "true")];

/// Cell body that installs a package in the browser, imports it and
/// prints its documentation.
pub fn package_cell_body(package_id: &str) -> String {
    format!(
        "import micropip\n\
         await micropip.install('{package_id}')\n\
         import {package_id}\n\
         help({package_id})\n"
    )
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
