//! Project discovery and gallery.toml specs

use crate::prelude::*;

#[test]
fn data_dir_comes_from_gallery_toml() {
    let temp = Project::empty();
    temp.file("gallery.toml", "data_dir = \"widgets\"\n");
    temp.file("widgets/quak/config.yaml", QUAK);

    temp.gallery()
        .args(&["list"])
        .passes()
        .stdout_has("quak")
        .stdout_has("1 widget\n");
}

#[test]
fn root_flag_overrides_environment() {
    let temp = Project::sample();
    let other = Project::empty();
    other.widget("drawdata", DRAWDATA);

    temp.gallery()
        .args(&["--root", &other.path().display().to_string(), "list"])
        .passes()
        .stdout_has("drawdata")
        .stdout_lacks("quak");
}

#[test]
fn relative_images_use_configured_base() {
    let temp = Project::empty();
    temp.file("gallery.toml", "image_base = \"https://img.example\"\n");
    temp.widget(
        "quak",
        &format!("{}image: ./screenshot.png\n", QUAK),
    );

    temp.gallery()
        .args(&["show", "quak"])
        .passes()
        .stdout_has("  Image: https://img.example/data/quak/screenshot.png");
}
