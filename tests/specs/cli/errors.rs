//! Error reporting specs

use crate::prelude::*;

#[test]
fn unknown_widget_fails_with_suggestions() {
    let temp = Project::sample();
    temp.gallery()
        .args(&["show", "nope"])
        .fails()
        .stderr_has("error: Widget 'nope' not found")
        .stderr_has("suggestions:")
        .stderr_has("gallery list --search nope");
}

#[test]
fn unknown_widget_points_at_broken_entries() {
    let temp = Project::sample();
    temp.widget("broken", "name: broken\n");
    temp.gallery()
        .args(&["resolve", "broken"])
        .fails()
        .stderr_has("1 config entry failed to load")
        .stderr_has("gallery validate");
}

#[test]
fn unknown_environment_is_a_usage_error() {
    let temp = Project::sample();
    temp.gallery()
        .args(&["list", "--env", "vscode"])
        .fails()
        .stderr_has("unknown environment 'vscode'");
}

#[test]
fn missing_data_directory_fails() {
    let temp = Project::empty();
    temp.file("gallery.toml", "");
    temp.gallery()
        .args(&["list"])
        .fails()
        .stderr_has("IO error reading");
}

#[test]
fn invalid_config_file_fails() {
    let temp = Project::sample();
    temp.file("gallery.toml", "data_dir = 3\n");
    temp.gallery()
        .args(&["list"])
        .fails()
        .stderr_has("gallery.toml");
}
