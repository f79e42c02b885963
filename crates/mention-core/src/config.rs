//! Configuration management for mention-helper

use crate::comment::{is_word_char, DEFAULT_SIGIL};
use crate::error::{MentionError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Project-local configuration directory
pub const CONFIG_DIR_NAME: &str = ".mention-helper";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Extraction settings
    pub extract: ExtractConfig,
    /// Output settings
    pub output: OutputConfig,
}

/// Extraction-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Character that introduces a mention
    pub sigil: char,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            sigil: DEFAULT_SIGIL,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,
    /// Colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Plain,
            color: true,
        }
    }
}

/// Output format for CLI results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One item per line
    #[default]
    Plain,
    /// JSON document
    Json,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Render configuration as TOML text
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MentionError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| e.with_context(format!("Invalid config {}", path.display())))?;
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Load the first configuration file found, or the defaults
    pub fn discover() -> Result<Self> {
        match Self::discover_path() {
            Some(path) => Self::load(&path),
            None => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// First existing configuration file: project-local, then per-user
    pub fn discover_path() -> Option<PathBuf> {
        std::iter::once(Self::project_path())
            .chain(Self::user_path())
            .find(|p| p.exists())
    }

    /// Project-local configuration path
    pub fn project_path() -> PathBuf {
        PathBuf::from(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
    }

    /// Per-user configuration path
    pub fn user_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("mention-helper").join(CONFIG_FILE_NAME))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let sigil = self.extract.sigil;
        if sigil.is_whitespace() {
            return Err(MentionError::Config(
                "extract.sigil cannot be whitespace".to_string(),
            ));
        }
        if is_word_char(sigil) {
            return Err(MentionError::Config(format!(
                "extract.sigil '{}' cannot be a word character",
                sigil
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.extract.sigil, '@');
        assert_eq!(config.output.format, OutputFormat::Plain);
        assert!(config.output.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = config.to_toml_string().unwrap();
        assert!(toml.contains("[extract]"));
        assert!(toml.contains("[output]"));

        let config2 = Config::from_toml_str(&toml).unwrap();
        assert_eq!(config, config2);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_toml_str("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.extract.sigil, '@');
        assert!(config.output.color);
    }

    #[test]
    fn test_invalid_sigil_rejected() {
        let err = Config::from_toml_str("[extract]\nsigil = \"a\"\n").unwrap_err();
        assert!(matches!(err, MentionError::Config(_)));

        let err = Config::from_toml_str("[extract]\nsigil = \" \"\n").unwrap_err();
        assert!(matches!(err, MentionError::Config(_)));

        let err = Config::from_toml_str("[extract]\nsigil = \"ab\"\n").unwrap_err();
        assert!(matches!(err, MentionError::Toml(_)));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = Config::from_toml_str("[output]\nformat = \"yaml\"\n").unwrap_err();
        assert!(matches!(err, MentionError::Toml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[extract]\nsigil = \"+\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.extract.sigil, '+');
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, MentionError::FileNotFound(_)));
    }

    #[test]
    fn test_project_path() {
        let path = Config::project_path();
        assert!(path.ends_with("config.toml"));
        assert!(path.starts_with(CONFIG_DIR_NAME));
    }
}
