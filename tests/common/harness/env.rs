//! Isolated test environment with temp directory.

// Not every test binary uses every helper
#![allow(dead_code)]

use super::FolioCommand;
use folio::domain::PortfolioData;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary working directory.
///
/// Commands run from the temp directory with `XDG_CONFIG_HOME` and `HOME`
/// pointed inside it, so a developer's own `folio/config.toml` never leaks
/// into a test.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Working directory for commands
    dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let dir = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            dir,
        }
    }

    /// Returns the working directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns a path inside the working directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Returns the directory used as `XDG_CONFIG_HOME`.
    pub fn config_home(&self) -> PathBuf {
        self.dir.join(".config")
    }

    /// Writes `folio/config.toml` under the isolated config home.
    pub fn write_config(&self, toml: &str) -> PathBuf {
        let dir = self.config_home().join("folio");
        std::fs::create_dir_all(&dir).expect("Failed to create config directory");
        let path = dir.join("config.toml");
        std::fs::write(&path, toml).expect("Failed to write config");
        path
    }

    /// Writes portfolio data as JSON and returns its path.
    pub fn write_portfolio(&self, name: &str, data: &PortfolioData) -> PathBuf {
        self.write_file(name, &data.to_json_pretty())
    }

    /// Writes a file to the test environment and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Reads a file from the test environment.
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.join(name)).expect("Failed to read file")
    }

    /// Lists the file names in the working directory, sorted.
    pub fn file_names(&self) -> Vec<String> {
        let mut names: Vec<_> = std::fs::read_dir(&self.dir)
            .expect("Failed to read directory")
            .filter_map(Result::ok)
            .filter(|e| e.path().is_file())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    /// Creates a FolioCommand configured for this test environment.
    pub fn cmd(&self) -> FolioCommand {
        FolioCommand::new()
            .current_dir(&self.dir)
            .env("XDG_CONFIG_HOME", self.config_home().to_string_lossy())
            .env("HOME", self.dir.to_string_lossy())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_temp_directory() {
        let env = TestEnv::new();
        assert!(env.dir().is_dir());
    }

    #[test]
    fn test_env_cleans_up_on_drop() {
        let dir = {
            let env = TestEnv::new();
            env.dir().to_path_buf()
        };
        assert!(!dir.exists());
    }

    #[test]
    fn write_config_lands_under_config_home() {
        let env = TestEnv::new();
        let path = env.write_config("template = \"mono-grid\"\n");
        assert!(path.starts_with(env.config_home()));
        assert!(path.ends_with("folio/config.toml"));
    }

    #[test]
    fn write_portfolio_round_trips() {
        let env = TestEnv::new();
        let data = PortfolioData::sample();
        let path = env.write_portfolio("data.json", &data);
        assert_eq!(folio::infra::read_portfolio(&path).unwrap(), data);
    }
}
