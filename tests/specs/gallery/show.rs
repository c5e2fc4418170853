//! `gallery show` specs

use crate::prelude::*;

#[test]
fn shows_fields_and_links() {
    let temp = Project::sample();
    temp.gallery()
        .args(&["show", "quak"])
        .passes()
        .stdout_has("Widget: quak\n")
        .stdout_has("  Description: Scalable data profiler\n")
        .stdout_has("  Environments: marimo,jupyter\n")
        .stdout_has("  Tags: table,data\n")
        .stdout_has("  Demo source: notebook-url\n")
        .stdout_has("  Notebook: https://marimo.app?src=")
        .stdout_has("&show-chrome=false&embed=true\n");
}

#[test]
fn bare_repository_is_expanded() {
    let temp = Project::sample();
    temp.gallery()
        .args(&["show", "some-pkg"])
        .passes()
        .stdout_has("  Repository: https://github.com/owner/some-pkg\n")
        .stdout_has("  Demo source: github-repo\n");
}

#[test]
fn widget_without_source_has_no_notebook() {
    let temp = Project::sample();
    temp.gallery()
        .args(&["show", "plain"])
        .passes()
        .stdout_has("  Environments: -\n")
        .stdout_has("  Demo source: none\n")
        .stdout_has("  Notebook: -\n")
        .stdout_lacks("Embed:");
}

#[test]
fn json_output() {
    let temp = Project::sample();
    let run = temp
        .gallery()
        .args(&["show", "drawdata", "--format", "json"])
        .passes();
    let json = run.json();
    assert_eq!(json["widget"]["name"], "drawdata");
    assert_eq!(json["demoSource"], "notebook-code");
    assert!(json["notebook"]["notebookUrl"]
        .as_str()
        .unwrap()
        .starts_with("https://marimo.app?code="));
}
