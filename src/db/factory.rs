//! Repository factory for dependency injection.
//!
//! This module provides utilities for creating and configuring repository
//! instances based on runtime configuration.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use super::repo_config::RepositoryConfig;
use super::repositories::LocalRepository;
use super::repository::{CompanyRepository, RepositoryError, RepositoryResult};
use crate::models::company::parse_company_json_file;

/// Repository type configuration.
///
/// Only the in-memory backend ships today; the enum keeps the seam where a
/// database-backed type would be added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" | "memory" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from environment.
    ///
    /// Reads the `REPOSITORY_TYPE` environment variable; defaults to Local.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("REPOSITORY_TYPE") {
            return val.parse().unwrap_or(Self::Local);
        }
        Self::Local
    }
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```
/// use callboard::db::RepositoryFactory;
///
/// let repo = RepositoryFactory::create_local();
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    pub fn create(repo_type: RepositoryType) -> RepositoryResult<Arc<dyn CompanyRepository>> {
        match repo_type {
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }

    /// Create an empty in-memory local repository.
    pub fn create_local() -> Arc<dyn CompanyRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create repository from environment configuration.
    ///
    /// Reads `REPOSITORY_TYPE` to determine which repository to create.
    pub fn from_env() -> RepositoryResult<Arc<dyn CompanyRepository>> {
        Self::create(RepositoryType::from_env())
    }

    /// Create repository from a TOML configuration file.
    ///
    /// For the local backend this also seeds the store when the config names
    /// a company file.
    pub fn from_config_file<P: AsRef<Path>>(
        config_path: P,
    ) -> RepositoryResult<Arc<dyn CompanyRepository>> {
        let config = RepositoryConfig::from_file(config_path)?;
        Self::from_repository_config(&config)
    }

    /// Create repository from the default configuration file location.
    pub fn from_default_config() -> RepositoryResult<Arc<dyn CompanyRepository>> {
        let config = RepositoryConfig::from_default_location()?;
        Self::from_repository_config(&config)
    }

    /// Create repository from a RepositoryConfig instance.
    fn from_repository_config(
        config: &RepositoryConfig,
    ) -> RepositoryResult<Arc<dyn CompanyRepository>> {
        let repo_type = config.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;

        match repo_type {
            RepositoryType::Local => {
                if let Some(company_file) = &config.seed.company_file {
                    let company = parse_company_json_file(company_file).map_err(|e| {
                        RepositoryError::configuration(format!(
                            "Failed to load seed company file: {:#}",
                            e
                        ))
                    })?;
                    tracing::info!(
                        file = %company_file.display(),
                        company = %company.name,
                        "seeding local repository from config"
                    );
                    Ok(Arc::new(LocalRepository::from_company(company)))
                } else {
                    Ok(Self::create_local())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_repository_type_from_str() {
        assert_eq!(
            RepositoryType::from_str("local").unwrap(),
            RepositoryType::Local
        );
        assert_eq!(
            RepositoryType::from_str("Memory").unwrap(),
            RepositoryType::Local
        );
        assert!(RepositoryType::from_str("mongodb").is_err());
    }

    #[tokio::test]
    async fn test_create_local_repository() {
        let repo = RepositoryFactory::create_local();
        assert!(repo.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_from_config_file_with_seed() {
        let mut company_file = tempfile::NamedTempFile::new().unwrap();
        write!(
            company_file,
            r#"{{
                "name": "Midsummer Players",
                "actors": [{{"id": "a1", "name": "Alice"}}],
                "scenes": [],
                "timeslots": []
            }}"#
        )
        .unwrap();

        let mut config_file = tempfile::NamedTempFile::new().unwrap();
        write!(
            config_file,
            "[repository]\ntype = \"local\"\n\n[seed]\ncompany_file = {:?}\n",
            company_file.path()
        )
        .unwrap();

        let repo = RepositoryFactory::from_config_file(config_file.path()).unwrap();
        assert_eq!(repo.list_actors().await.unwrap().len(), 1);
    }

    #[test]
    fn test_from_config_file_with_missing_seed_file() {
        let mut config_file = tempfile::NamedTempFile::new().unwrap();
        write!(
            config_file,
            "[repository]\ntype = \"local\"\n\n[seed]\ncompany_file = \"/nonexistent/company.json\"\n"
        )
        .unwrap();

        let result = RepositoryFactory::from_config_file(config_file.path());
        assert!(result.is_err());
    }
}
