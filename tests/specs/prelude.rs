//! Shared helpers for CLI tests.
//!
//! Each test builds a throwaway gallery project, runs the `gallery` binary
//! against it, and asserts on stdout, stderr and the exit status.

use assert_cmd::Command;
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;

/// Widget with a hosted notebook
pub const QUAK: &str = r#"name: quak
description: Scalable data profiler
environments: [marimo, jupyter]
tags: [Table, Data]
notebookUrl: https://example.com/quak.py
"#;

/// Widget with inline notebook code
pub const DRAWDATA: &str = r#"name: drawdata
description: Draw a dataset
environments: [jupyter]
tags: [drawing]
notebookCode: |
  import drawdata
  drawdata.ScatterWidget()
"#;

/// Widget known only by its repository
pub const SOME_PKG: &str = r#"name: some-pkg
description: A widget without a notebook
environments: [colab]
tags: [data]
githubRepo: owner/some-pkg
"#;

/// Widget with nothing to demo
pub const PLAIN: &str = r#"name: plain
description: Nothing to demo
environments: []
tags: []
"#;

/// Expected program for DRAWDATA
pub const DRAWDATA_PROGRAM: &str = "\
import marimo

app = marimo.App()

@app.cell
async def _():
    import drawdata
    drawdata.ScatterWidget()
    return
";

/// Expected program for SOME_PKG
pub const SOME_PKG_PROGRAM: &str = "\
import marimo

app = marimo.App()

@app.cell
async def _():
    import micropip
    await micropip.install('some_pkg')
    import some_pkg
    help(some_pkg)
    return
";

/// A temporary gallery project
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// A project with no files at all
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// A project holding the four sample widgets
    pub fn sample() -> Self {
        let project = Self::empty();
        project.widget("quak", QUAK);
        project.widget("drawdata", DRAWDATA);
        project.widget("some-pkg", SOME_PKG);
        project.widget("plain", PLAIN);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root
    pub fn file(&self, rel: &str, content: &str) {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    /// Write `data/<entry>/config.yaml`
    pub fn widget(&self, entry: &str, yaml: &str) {
        self.file(&format!("data/{}/config.yaml", entry), yaml);
    }

    /// The gallery binary, rooted at this project
    pub fn gallery(&self) -> CliBuilder {
        let mut cmd = Command::cargo_bin("gallery").unwrap();
        cmd.current_dir(self.path())
            .env("GALLERY_ROOT", self.path())
            .env_remove("RUST_LOG");
        CliBuilder { cmd }
    }
}

pub struct CliBuilder {
    cmd: Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Run and require a zero exit status
    pub fn passes(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert { output };
        assert!(
            run.output.status.success(),
            "expected success, got {:?}\nstdout:\n{}\nstderr:\n{}",
            run.output.status,
            run.stdout(),
            run.stderr()
        );
        run
    }

    /// Run and require a non-zero exit status
    pub fn fails(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert { output };
        assert!(
            !run.output.status.success(),
            "expected failure\nstdout:\n{}\nstderr:\n{}",
            run.stdout(),
            run.stderr()
        );
        run
    }
}

pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(needle),
            "stdout missing {:?}\nstdout:\n{}",
            needle,
            stdout
        );
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            !stdout.contains(needle),
            "stdout unexpectedly has {:?}\nstdout:\n{}",
            needle,
            stdout
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(needle),
            "stderr missing {:?}\nstderr:\n{}",
            needle,
            stderr
        );
        self
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout()).unwrap()
    }
}
