//! Configuration loading.
//!
//! Loads the optional `tfsum.yaml` file, searching upward from the working
//! directory. A missing file is not an error; it just means defaults.

use crate::error::{ConfigError, Result, TfsumError};
use std::path::Path;
use tracing::{debug, info};

use super::spec::TfsumConfig;

/// Configuration file names searched for, in order.
pub const DEFAULT_CONFIG_FILES: &[&str] = &["tfsum.yaml", "tfsum.yml", ".tfsum.yaml"];

/// Loader for tfsum configuration files.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigParser;

impl ConfigParser {
    /// Creates a new configuration parser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<TfsumConfig> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());

        if !path.exists() {
            return Err(TfsumError::Config(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            }));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            TfsumError::Config(ConfigError::ParseError {
                message: format!("Failed to read file: {e}"),
                location: Some(path.display().to_string()),
            })
        })?;

        self.parse_yaml(&content, Some(path))
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn parse_yaml(&self, content: &str, source: Option<&Path>) -> Result<TfsumConfig> {
        debug!("Parsing YAML configuration");

        let config: TfsumConfig = serde_yaml::from_str(content).map_err(|e| {
            let location = source.map(|p| p.display().to_string());
            TfsumError::Config(ConfigError::ParseError {
                message: format!("YAML parse error: {e}"),
                location,
            })
        })?;

        Ok(config)
    }

    /// Loads configuration from an explicit path, or searches for one.
    ///
    /// With no explicit path and no discoverable file, returns defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit path is missing or any found file
    /// fails to parse.
    pub fn load_or_default(&self, explicit: Option<&Path>) -> Result<TfsumConfig> {
        if let Some(path) = explicit {
            return self.load_file(path);
        }

        let start = std::env::current_dir().unwrap_or_else(|_| Path::new(".").to_path_buf());
        match find_config_file(start) {
            Some(path) => self.load_file(path),
            None => {
                debug!("No configuration file found, using defaults");
                Ok(TfsumConfig::default())
            }
        }
    }
}

/// Finds a configuration file in `start_dir` or any of its ancestors.
#[must_use]
pub fn find_config_file(start_dir: impl AsRef<Path>) -> Option<std::path::PathBuf> {
    let mut current = start_dir.as_ref().to_path_buf();

    loop {
        for filename in DEFAULT_CONFIG_FILES {
            let config_path = current.join(filename);
            if config_path.exists() {
                info!("Found configuration file: {}", config_path.display());
                return Some(config_path);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let yaml = r"
default_format: narrative
min_impact_level: medium
";
        let parser = ConfigParser::new();
        let config = parser.parse_yaml(yaml, None).unwrap();
        assert_eq!(config.default_format.as_deref(), Some("narrative"));
        assert_eq!(config.min_impact_level.as_deref(), Some("medium"));
        assert!(config.display.use_emojis);
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r"
default_format: table
exclude_resource_types:
  - aws_cloudwatch_log_group
include_resource_types:
  - aws_instance
  - aws_subnet
min_impact_level: low
include_actions:
  - create
  - delete
display:
  use_emojis: false
  show_addresses: true
  sort_by_action: true
";
        let parser = ConfigParser::new();
        let config = parser.parse_yaml(yaml, None).unwrap();
        assert_eq!(config.exclude_resource_types.len(), 1);
        assert_eq!(config.include_resource_types.len(), 2);
        assert_eq!(config.include_actions, vec!["create", "delete"]);
        assert!(!config.display.use_emojis);
        assert!(config.display.sort_by_action);
        // Unset toggles keep their defaults.
        assert!(config.display.group_by_type);
    }

    #[test]
    fn test_invalid_yaml_rejected() {
        let parser = ConfigParser::new();
        assert!(parser.parse_yaml("default_format: [unclosed", None).is_err());
    }

    #[test]
    fn test_load_file_not_found() {
        let parser = ConfigParser::new();
        let result = parser.load_file("/nonexistent/tfsum.yaml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tfsum.yaml");
        std::fs::write(&path, "default_format: json\n").unwrap();

        let parser = ConfigParser::new();
        let config = parser.load_file(&path).unwrap();
        assert_eq!(config.default_format.as_deref(), Some("json"));
    }

    #[test]
    fn test_find_config_file_walks_upward() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("tfsum.yml"), "{}\n").unwrap();

        let found = find_config_file(&nested).unwrap();
        assert!(found.ends_with("tfsum.yml"));
    }
}
