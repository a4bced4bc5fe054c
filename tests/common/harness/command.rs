//! Fluent wrapper around assert_cmd::Command.

// Not every test binary uses every helper
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `folio` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct FolioCommand {
    args: Vec<String>,
    current_dir: Option<PathBuf>,
    envs: Vec<(String, String)>,
}

impl FolioCommand {
    /// Creates a new command for the `folio` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            current_dir: None,
            envs: Vec::new(),
        }
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Adds a path argument.
    pub fn arg_path(mut self, path: &Path) -> Self {
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Runs the command from `dir`.
    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.current_dir = Some(dir.to_path_buf());
        self
    }

    /// Sets an environment variable for the command.
    pub fn env(mut self, key: &str, value: impl AsRef<str>) -> Self {
        self.envs.push((key.to_string(), value.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("folio").expect("Failed to find folio binary");
        cmd.env_remove("RUST_LOG");
        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `export` command with an input file.
    pub fn export(self, input: &Path) -> Self {
        self.args(["export"]).arg_path(input)
    }

    /// Configures for the `export --sample` command.
    pub fn export_sample(self) -> Self {
        self.args(["export", "--sample"])
    }

    /// Configures for the `templates` command.
    pub fn templates(self) -> Self {
        self.args(["templates"])
    }

    /// Configures for the `sample` command.
    pub fn sample(self) -> Self {
        self.args(["sample"])
    }

    /// Configures for the `check` command with an input file.
    pub fn check(self, input: &Path) -> Self {
        self.args(["check"]).arg_path(input)
    }

    // ===========================================
    // Options
    // ===========================================

    /// Adds `--template <id>` to the command.
    pub fn template(self, id: &str) -> Self {
        self.args(["--template", id])
    }

    /// Adds `--output <path>` to the command.
    pub fn output(self, path: &Path) -> Self {
        self.args(["--output"]).arg_path(path)
    }

    /// Adds `--stdout` to the command.
    pub fn stdout(self) -> Self {
        self.args(["--stdout"])
    }

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for FolioCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_args_in_order() {
        let cmd = FolioCommand::new()
            .export(Path::new("data.json"))
            .template("mono-grid")
            .stdout();
        assert_eq!(
            cmd.get_args(),
            ["export", "data.json", "--template", "mono-grid", "--stdout"]
        );
    }
}
