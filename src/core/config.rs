use crate::core::catalog::HOME_SECTION_LIMIT;
use crate::core::dirs::get_config_directory;
use crate::core::error::Result;
use crate::core::filter::SortKey;
use crate::core::state::{read_json_file, write_json_file};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings read from `config.json` in the config directory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Signed-in users with one of these emails get the admin role.
    #[serde(default)]
    pub admin_emails: Vec<String>,
    #[serde(default)]
    pub default_sort: SortKey,
    #[serde(default = "default_home_section_limit")]
    pub home_section_limit: usize,
    pub created_at: DateTime<Utc>,
}

fn default_home_section_limit() -> usize {
    HOME_SECTION_LIMIT
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            admin_emails: Vec::new(),
            default_sort: SortKey::Newest,
            home_section_limit: HOME_SECTION_LIMIT,
            created_at: Utc::now(),
        }
    }
}

impl StoreConfig {
    pub const FILE_NAME: &'static str = "config.json";

    pub fn config_path() -> Result<PathBuf> {
        Ok(get_config_directory()?.join(Self::FILE_NAME))
    }

    pub fn load_or_create() -> Result<Self> {
        Self::load_or_create_at(&Self::config_path()?)
    }

    pub fn load_or_create_at(path: &Path) -> Result<Self> {
        if let Some(config) = read_json_file(path)? {
            return Ok(config);
        }

        log::debug!("Creating default config at {}", path.display());
        let config = Self::default();
        write_json_file(path, &config)?;
        Ok(config)
    }

    pub fn is_admin_email(&self, email: &str) -> bool {
        self.admin_emails
            .iter()
            .any(|admin| admin.trim().eq_ignore_ascii_case(email.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_or_create_writes_defaults() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("config.json");

        let created = StoreConfig::load_or_create_at(&path)?;
        assert!(path.exists());
        assert_eq!(created.home_section_limit, 4);

        let loaded = StoreConfig::load_or_create_at(&path)?;
        assert_eq!(loaded, created);
        Ok(())
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() -> anyhow::Result<()> {
        let json = r#"{"admin_emails":["Owner@Silk.in"],"created_at":"2024-12-01T00:00:00Z"}"#;
        let config: StoreConfig = serde_json::from_str(json)?;
        assert_eq!(config.default_sort, SortKey::Newest);
        assert_eq!(config.home_section_limit, 4);
        assert!(config.is_admin_email("owner@silk.in"));
        assert!(!config.is_admin_email("guest@silk.in"));
        Ok(())
    }
}
