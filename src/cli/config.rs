//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Template that replaces the one named in the data, unless `--template` is given
    pub template: Option<String>,

    /// Directory exported documents are written to
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/folio/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folio")
            .join("config.toml")
    }

    /// Resolve the template override.
    ///
    /// Precedence order:
    /// 1. CLI `--template` argument
    /// 2. Config file `template` setting
    /// 3. `None`: the data's own `template` field is used
    pub fn template<'a>(&'a self, cli_template: Option<&'a str>) -> Option<&'a str> {
        cli_template.or(self.template.as_deref())
    }

    /// Resolve the output directory for exports without an explicit `--output`.
    ///
    /// Precedence order:
    /// 1. Config file `output_dir` setting
    /// 2. Current working directory
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_empty() {
        let config = Config::default();
        assert!(config.template.is_none());
        assert!(config.output_dir.is_none());
    }

    #[test]
    fn template_prefers_cli_arg() {
        let config = Config {
            template: Some("mono-grid".into()),
            output_dir: None,
        };
        assert_eq!(config.template(Some("tech-aura")), Some("tech-aura"));
    }

    #[test]
    fn template_falls_back_to_config() {
        let config = Config {
            template: Some("mono-grid".into()),
            output_dir: None,
        };
        assert_eq!(config.template(None), Some("mono-grid"));
        assert_eq!(Config::default().template(None), None);
    }

    #[test]
    fn output_dir_falls_back_to_cwd() {
        assert_eq!(Config::default().output_dir(), PathBuf::from("."));

        let config = Config {
            template: None,
            output_dir: Some(PathBuf::from("/srv/portfolios")),
        };
        assert_eq!(config.output_dir(), PathBuf::from("/srv/portfolios"));
    }

    #[test]
    fn load_from_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(config.template.is_none());
    }

    #[test]
    fn load_from_parses_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "template = \"bloom-craft\"\noutput_dir = \"site\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.template.as_deref(), Some("bloom-craft"));
        assert_eq!(config.output_dir, Some(PathBuf::from("site")));
    }

    #[test]
    fn load_from_reports_bad_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "template = [").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse config file"));
    }

    #[test]
    fn config_path_is_in_config_dir() {
        let path = Config::config_path();
        assert!(path.ends_with("folio/config.toml"));
    }
}
