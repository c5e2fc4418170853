//! `gallery stats` specs

use crate::prelude::*;

#[test]
fn counts_every_environment() {
    let temp = Project::sample();
    temp.gallery().args(&["stats"]).passes().stdout_eq(
        "\
ENVIRONMENT  WIDGETS
marimo       1
jupyter      2
colab        1
myst         0
numerous     0

TAGS
data, drawing, table
",
    );
}

#[test]
fn empty_gallery_has_no_tags() {
    let temp = Project::empty();
    temp.widget("plain", PLAIN);
    temp.gallery()
        .args(&["stats"])
        .passes()
        .stdout_has("numerous     0\n")
        .stdout_has("No tags\n");
}

#[test]
fn json_output() {
    let temp = Project::sample();
    let run = temp.gallery().args(&["stats", "--format", "json"]).passes();
    let json = run.json();
    assert_eq!(json["widgets"], 4);
    assert_eq!(json["environments"]["jupyter"], 2);
    assert_eq!(json["environments"]["myst"], 0);
}
