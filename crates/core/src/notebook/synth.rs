// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notebook program synthesis.
//!
//! Pure text transformations: the code is never parsed or executed, only
//! de-indented, re-indented and wrapped in the single-cell template.

use super::template::{APP_MARKER, CELL_HEADER, CELL_INDENT, CELL_RETURN};

/// Turn user supplied code into a runnable notebook program.
///
/// Code that already declares a notebook app (contains [`APP_MARKER`]) is
/// only de-indented. Anything else is treated as the body of one async
/// setup cell and wrapped in the fixed template.
pub fn synthesize(code: &str) -> String {
    let dedented = dedent(code);
    if code.contains(APP_MARKER) {
        return dedented;
    }
    wrap_in_cell(&dedented)
}

/// Wrap an unindented fragment into the single-cell program template.
pub(crate) fn wrap_in_cell(fragment: &str) -> String {
    let body = indent(fragment, CELL_INDENT);

    let mut program = String::with_capacity(CELL_HEADER.len() + body.len() + CELL_RETURN.len());
    program.push_str(CELL_HEADER);
    program.push_str(&body);
    if !body.is_empty() && !body.ends_with('\n') {
        program.push('\n');
    }
    program.push_str(CELL_RETURN);
    program
}

/// Remove the leading whitespace shared by every non-blank line.
///
/// Lines holding only spaces and tabs are emptied and do not take part in
/// computing the shared prefix. Tabs and spaces are not interchangeable: a
/// line indented with a tab shares no prefix with one indented with spaces.
/// Line terminators are kept as they are.
pub fn dedent(text: &str) -> String {
    let margin = common_margin(text);

    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        let (content, ending) = split_line_ending(line);
        if !is_blank(content) {
            // Every non-blank line starts with the margin
            out.push_str(&content[margin.len()..]);
        }
        out.push_str(ending);
    }
    out
}

/// Prefix every non-blank line with `unit`.
///
/// Blank lines stay empty so the output carries no trailing whitespace.
pub fn indent(text: &str, unit: &str) -> String {
    let mut out = String::with_capacity(text.len() + unit.len() * 8);
    for line in text.split_inclusive('\n') {
        let (content, ending) = split_line_ending(line);
        if !is_blank(content) {
            out.push_str(unit);
            out.push_str(content);
        }
        out.push_str(ending);
    }
    out
}

fn common_margin(text: &str) -> &str {
    let mut margin: Option<&str> = None;

    for line in text.lines() {
        if is_blank(line) {
            continue;
        }
        let leading = leading_whitespace(line);
        margin = Some(match margin {
            None => leading,
            Some(current) => shared_prefix(current, leading),
        });
        if margin == Some("") {
            break;
        }
    }

    margin.unwrap_or("")
}

fn leading_whitespace(line: &str) -> &str {
    let end = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    &line[..end]
}

fn shared_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}

fn is_blank(line: &str) -> bool {
    line.chars().all(|c| c == ' ' || c == '\t')
}

fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(content) = line.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = line.strip_suffix('\n') {
        (content, "\n")
    } else {
        (line, "")
    }
}

#[cfg(test)]
#[path = "synth_tests.rs"]
mod tests;
