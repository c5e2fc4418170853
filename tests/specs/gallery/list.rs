//! `gallery list` specs

use crate::prelude::*;

#[test]
fn empty_data_directory_lists_nothing() {
    let temp = Project::empty();
    temp.file("data/.keep", "");
    temp.gallery()
        .args(&["list"])
        .passes()
        .stdout_eq("No widgets\n");
}

#[test]
fn notebooks_are_listed_first() {
    let temp = Project::sample();
    let run = temp.gallery().args(&["list"]).passes();
    let stdout = run.stdout();
    let names: Vec<&str> = stdout
        .lines()
        .skip(1)
        .take_while(|line| !line.is_empty())
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(names, ["drawdata", "quak", "plain", "some-pkg"]);
    assert!(stdout.ends_with("\n4 widgets\n"));
}

#[test]
fn tags_are_lowercased() {
    let temp = Project::sample();
    temp.gallery()
        .args(&["list", "--search", "quak"])
        .passes()
        .stdout_has("table,data")
        .stdout_has("1 widget\n");
}

#[test]
fn filters_combine() {
    let temp = Project::sample();
    temp.gallery()
        .args(&["list", "--env", "jupyter", "--tag", "data"])
        .passes()
        .stdout_has("quak")
        .stdout_lacks("drawdata")
        .stdout_lacks("some-pkg");
}

#[test]
fn search_matches_description_case_insensitively() {
    let temp = Project::sample();
    temp.gallery()
        .args(&["list", "-s", "PROFILER"])
        .passes()
        .stdout_has("quak")
        .stdout_has("1 widget\n");
}

#[test]
fn query_string_filters() {
    let temp = Project::sample();
    temp.gallery()
        .args(&["list", "--query", "?env=colab"])
        .passes()
        .stdout_has("some-pkg")
        .stdout_lacks("quak");
}

#[test]
fn query_conflicts_with_flags() {
    let temp = Project::sample();
    temp.gallery()
        .args(&["list", "--query", "env=colab", "--tag", "data"])
        .fails();
}

#[test]
fn no_match_prints_no_widgets() {
    let temp = Project::sample();
    temp.gallery()
        .args(&["list", "--env", "numerous"])
        .passes()
        .stdout_eq("No widgets\n");
}

#[test]
fn json_output_is_an_array_of_records() {
    let temp = Project::sample();
    let run = temp.gallery().args(&["list", "--format", "json"]).passes();
    let json = run.json();
    let widgets = json.as_array().unwrap();
    assert_eq!(widgets.len(), 4);
    assert_eq!(widgets[0]["name"], "drawdata");
    assert_eq!(widgets[1]["notebookUrl"], "https://example.com/quak.py");
}

#[test]
fn invalid_entries_are_skipped_with_a_warning() {
    let temp = Project::sample();
    temp.widget("broken", "name: broken\nenvironments: [vscode]\n");
    temp.gallery()
        .args(&["list"])
        .passes()
        .stdout_has("4 widgets")
        .stdout_lacks("broken")
        .stderr_has("broken");
}
