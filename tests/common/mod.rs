//! Shared fixtures for odin-build integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Name of the project directory inside every fixture
pub const PROJECT_NAME: &str = "demo";

/// File the fake compiler writes its arguments to
pub const COMPILER_ARGS_FILE: &str = "compiler-args.txt";

/// A throwaway project directory named [`PROJECT_NAME`]
pub struct TestProject {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestProject {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().join(PROJECT_NAME);
        fs::create_dir_all(root.join("src")).expect("Failed to create project dir");
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn create_dir(&self, relative: &str) {
        fs::create_dir_all(self.root.join(relative)).expect("Failed to create dir");
    }

    pub fn create_file(&self, relative: &str, content: &str) {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(path, content).expect("Failed to write file");
    }

    /// Write a `/bin/sh` script, optionally marked executable
    #[cfg(unix)]
    pub fn create_script(&self, relative: &str, body: &str, executable: bool) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        self.create_file(relative, &format!("#!/bin/sh\n{}\n", body));
        let path = self.root.join(relative);
        let mode = if executable { 0o755 } else { 0o644 };
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).expect("Failed to set permissions");
        path
    }

    /// Install a fake compiler that records its arguments and exits with `exit_code`
    #[cfg(unix)]
    pub fn fake_compiler(&self, exit_code: i32) -> PathBuf {
        self.create_script(
            "tools/fake-odin",
            &format!("echo \"$@\" > {}\nexit {}", COMPILER_ARGS_FILE, exit_code),
            true,
        )
    }

    /// Arguments the fake compiler received, if it ran
    pub fn compiler_args(&self) -> Option<Vec<String>> {
        fs::read_to_string(self.root.join(COMPILER_ARGS_FILE))
            .ok()
            .map(|line| line.split_whitespace().map(str::to_string).collect())
    }

    /// odin-build command rooted in the project
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("odin-build").expect("Failed to find odin-build binary");
        cmd.current_dir(&self.root);
        cmd.env_remove("ODIN_BUILD_COMPILER");
        cmd.arg("--no-color");
        cmd
    }

    /// Run with --dry-run and return the compiler arguments it printed
    pub fn dry_run_args(&self, args: &[&str]) -> Vec<String> {
        let output = self
            .cmd()
            .arg("--dry-run")
            .args(args)
            .output()
            .expect("Failed to execute odin-build");
        assert!(
            output.status.success(),
            "dry run failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let stdout = String::from_utf8_lossy(&output.stdout);
        let line = stdout
            .lines()
            .find_map(|line| line.strip_prefix("Would run compiler: "))
            .expect("dry run printed no compiler command");

        line.split_whitespace().skip(1).map(str::to_string).collect()
    }
}
