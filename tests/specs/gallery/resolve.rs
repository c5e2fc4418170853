//! `gallery resolve` specs

use crate::prelude::*;

#[test]
fn hosted_notebook_is_passed_as_src() {
    let temp = Project::sample();
    temp.gallery()
        .args(&["resolve", "quak"])
        .passes()
        .stdout_eq("https://marimo.app?src=https%3A%2F%2Fexample.com%2Fquak.py\n");
}

#[test]
fn embed_url_drops_chrome() {
    let temp = Project::sample();
    temp.gallery()
        .args(&["resolve", "quak", "--embed"])
        .passes()
        .stdout_eq(
            "https://marimo.app?src=https%3A%2F%2Fexample.com%2Fquak.py&show-chrome=false&embed=true\n",
        );
}

#[test]
fn inline_code_is_encoded_twice() {
    let temp = Project::sample();
    temp.gallery()
        .args(&["resolve", "drawdata"])
        .passes()
        .stdout_has("https://marimo.app?code=import%2520marimo%250A%250Aapp");
}

#[test]
fn repository_widgets_get_an_install_program() {
    let temp = Project::sample();
    temp.gallery()
        .args(&["resolve", "some-pkg"])
        .passes()
        .stdout_has("micropip.install%28%27some_pkg%27%29")
        .stdout_lacks("src=");
}

#[test]
fn widgets_without_a_source_print_nothing() {
    let temp = Project::sample();
    temp.gallery()
        .args(&["resolve", "plain"])
        .passes()
        .stdout_eq("");
}

#[test]
fn json_prints_both_urls() {
    let temp = Project::sample();
    let run = temp
        .gallery()
        .args(&["resolve", "plain", "--format", "json"])
        .passes();
    let json = run.json();
    assert_eq!(json["notebookUrl"], "");
    assert_eq!(json["embedUrl"], "");
}

#[test]
fn lookup_ignores_case() {
    let temp = Project::sample();
    temp.gallery()
        .args(&["resolve", "QUAK"])
        .passes()
        .stdout_has("src=");
}
