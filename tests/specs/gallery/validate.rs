//! `gallery validate` specs

use crate::prelude::*;

#[test]
fn valid_gallery_passes() {
    let temp = Project::sample();
    temp.gallery()
        .args(&["validate"])
        .passes()
        .stdout_eq("Validated 4 widget configs: 4 ok, 0 invalid\n");
}

#[test]
fn reports_every_problem_and_fails() {
    let temp = Project::empty();
    temp.widget("quak", QUAK);
    temp.widget(
        "broken",
        "name: broken\ndescription: 3\nenvironments: [vscode]\nnotebookUrl: not a url\n",
    );
    temp.gallery()
        .args(&["validate"])
        .fails()
        .stdout_has("✗ broken\n")
        .stdout_has("Missing required field 'tags'")
        .stdout_has("Unknown environment 'vscode'")
        .stdout_has("notebookUrl")
        .stdout_has("Validated 2 widget configs: 1 ok, 1 invalid\n")
        .stderr_has("1 of 2 widget configs are invalid");
}

#[test]
fn yaml_syntax_errors_are_reported() {
    let temp = Project::empty();
    temp.widget("bad", "name: [unclosed\n");
    temp.gallery()
        .args(&["validate"])
        .fails()
        .stdout_has("✗ bad\n")
        .stdout_has("YAML syntax error");
}

#[test]
fn duplicate_names_are_reported() {
    let temp = Project::empty();
    temp.widget("a-quak", QUAK);
    temp.widget("b-quak", QUAK);
    temp.gallery()
        .args(&["validate"])
        .fails()
        .stdout_has("✗ b-quak\n")
        .stdout_has("already defined by entry 'a-quak'");
}

#[test]
fn json_output_lists_failures() {
    let temp = Project::sample();
    temp.widget("broken", "name: broken\n");
    let run = temp
        .gallery()
        .args(&["validate", "--format", "json"])
        .fails();
    let json = run.json();
    assert_eq!(json["valid"].as_array().unwrap().len(), 4);
    assert_eq!(json["invalid"][0]["entry"], "broken");
}
