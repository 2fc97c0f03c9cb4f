//! Repository configuration file support.
//!
//! This module provides utilities for reading repository configuration from
//! TOML configuration files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::factory::RepositoryType;
use super::repository::RepositoryError;

/// Repository configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    pub repository: RepositorySettings,
    #[serde(default)]
    pub seed: SeedSettings,
}

/// Repository type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type")]
    pub repo_type: String,
}

/// Seed data settings for the local repository.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedSettings {
    /// Optional path to a company JSON export to pre-populate the store with.
    #[serde(default)]
    pub company_file: Option<PathBuf>,
}

impl RepositoryConfig {
    /// Load repository configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(RepositoryConfig)` if successful
    /// * `Err(RepositoryError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: RepositoryConfig = toml::from_str(&content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load repository configuration from the default location.
    ///
    /// Searches for `repository.toml` in:
    /// 1. Current directory
    /// 2. Parent directory
    ///
    /// # Returns
    /// * `Ok(RepositoryConfig)` if found and parsed successfully
    /// * `Err(RepositoryError)` if no config file found or parse error
    pub fn from_default_location() -> Result<Self, RepositoryError> {
        let search_paths = vec![
            PathBuf::from("repository.toml"),
            PathBuf::from("../repository.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(RepositoryError::configuration(
            "No repository.toml found in standard locations",
        ))
    }

    /// Get the repository type from configuration.
    pub fn repository_type(&self) -> Result<RepositoryType, String> {
        RepositoryType::from_str(&self.repository.repo_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_local_config() {
        let toml = r#"
[repository]
type = "local"
"#;

        let config: RepositoryConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.repository.repo_type, "local");
        assert_eq!(config.repository_type().unwrap(), RepositoryType::Local);
        assert!(config.seed.company_file.is_none());
    }

    #[test]
    fn test_parse_config_with_seed_file() {
        let toml = r#"
[repository]
type = "local"

[seed]
company_file = "data/company.json"
"#;

        let config: RepositoryConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            config.seed.company_file.as_deref(),
            Some(Path::new("data/company.json"))
        );
    }

    #[test]
    fn test_unknown_repository_type() {
        let toml = r#"
[repository]
type = "mongodb"
"#;

        let config: RepositoryConfig = toml::from_str(toml).unwrap();
        assert!(config.repository_type().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[repository]\ntype = \"local\"").unwrap();

        let config = RepositoryConfig::from_file(file.path()).unwrap();
        assert_eq!(config.repository_type().unwrap(), RepositoryType::Local);
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let err = RepositoryConfig::from_file("/nonexistent/repository.toml").unwrap_err();
        assert!(matches!(err, RepositoryError::ConfigurationError { .. }));
    }
}
