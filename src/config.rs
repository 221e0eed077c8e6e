use crate::error::{BookshelfError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".bookshelf.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookshelfConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub server: ServerSettings,
}

/// Which store backend holds the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// Process-lifetime arrays; reset on restart.
    Memory,
    /// Durable sled database; survives restart.
    #[default]
    Sled,
}

/// How the store mints record identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdMode {
    /// Monotonically increasing counter, zero-padded to `id_length`.
    #[default]
    Sequential,
    /// Content-independent random id of `id_length` chars.
    Random,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSettings {
    #[serde(default)]
    pub storage: StorageKind,

    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default)]
    pub id_mode: IdMode,

    #[serde(default = "default_id_length")]
    pub id_length: usize,
}

fn default_path() -> String {
    ".bookshelf".to_string()
}

fn default_id_length() -> usize {
    4
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            storage: StorageKind::default(),
            path: default_path(),
            id_mode: IdMode::default(),
            id_length: default_id_length(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    4000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl BookshelfConfig {
    /// Load the nearest config, searching upward from `start_path`.
    /// Returns the config together with the project root (the directory
    /// holding the config file).
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        let content = std::fs::read_to_string(&config_path)?;
        let config: BookshelfConfig = toml::from_str(&content)?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| {
                BookshelfError::Config("Config file has no parent directory".to_string())
            })?
            .to_path_buf();
        Ok((config, project_root))
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE);
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(BookshelfError::NotInitialized);
            }
        }
    }

    /// Absolute data directory for the durable backend.
    pub fn data_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.catalog.path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = BookshelfConfig::default();
        assert_eq!(config.catalog.storage, StorageKind::Sled);
        assert_eq!(config.catalog.path, ".bookshelf");
        assert_eq!(config.catalog.id_mode, IdMode::Sequential);
        assert_eq!(config.catalog.id_length, 4);
        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE);

        let mut config = BookshelfConfig::default();
        config.catalog.storage = StorageKind::Memory;
        config.catalog.id_mode = IdMode::Random;
        config.server.port = 8080;
        config.save(&config_path).unwrap();

        let (loaded, root) = BookshelfConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.catalog.storage, StorageKind::Memory);
        assert_eq!(loaded.catalog.id_mode, IdMode::Random);
        assert_eq!(loaded.server.port, 8080);
        assert_eq!(root, temp_dir.path());
    }

    #[test]
    fn test_find_config_searches_upward() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE);
        BookshelfConfig::default().save(&config_path).unwrap();

        let nested = temp_dir.path().join("a/b/c");
        std::fs::create_dir_all(&nested).unwrap();

        let found = BookshelfConfig::find_config_file(&nested).unwrap();
        assert_eq!(found, config_path);
    }

    #[test]
    fn test_missing_config_is_not_initialized() {
        let temp_dir = TempDir::new().unwrap();
        let result = BookshelfConfig::load(temp_dir.path());
        assert!(matches!(result, Err(BookshelfError::NotInitialized)));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&config_path, "[server]\nport = 5000\n").unwrap();

        let (config, _root) = BookshelfConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.catalog.storage, StorageKind::Sled);
        assert_eq!(config.catalog.id_length, 4);
    }
}
