use crate::error::{Result, StockError};
use crate::model::DEFAULT_CATEGORIES;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "stockman.json";
const DEFAULT_DATA_FILE: &str = "stocks.txt";

/// Configuration for stockman, stored as `stockman.json` in the scope directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockConfig {
    /// Data file, relative to the scope directory unless absolute
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Category suggestions for the item form
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Show the low-stock alert when the inventory is opened
    #[serde(default = "default_startup_alert")]
    pub startup_alert: bool,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

fn default_startup_alert() -> bool {
    true
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            categories: default_categories(),
            startup_alert: default_startup_alert(),
        }
    }
}

impl StockConfig {
    pub const KEYS: [&'static str; 3] = ["data-file", "categories", "startup-alert"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StockError::Io)?;
        let config: StockConfig =
            serde_json::from_str(&content).map_err(StockError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StockError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StockError::Serialization)?;
        fs::write(config_path, content).map_err(StockError::Io)?;
        Ok(())
    }

    /// Resolves the data file against the scope directory.
    pub fn data_path(&self, scope_dir: &Path) -> PathBuf {
        let file = Path::new(&self.data_file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            scope_dir.join(file)
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "categories" => Some(self.categories.join(",")),
            "startup-alert" => Some(self.startup_alert.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(StockError::Api("data-file cannot be empty".into()));
                }
                self.data_file = value.to_string();
            }
            "categories" => {
                self.categories = value
                    .split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(String::from)
                    .collect();
            }
            "startup-alert" => {
                self.startup_alert = value.trim().parse().map_err(|_| {
                    StockError::Api(format!(
                        "startup-alert must be true or false, got: {}",
                        value
                    ))
                })?;
            }
            other => return Err(StockError::Api(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(String, String)> {
        Self::KEYS
            .iter()
            .filter_map(|k| self.get(k).map(|v| (k.to_string(), v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = StockConfig::default();
        assert_eq!(config.data_file, "stocks.txt");
        assert_eq!(config.categories, vec!["Drinks", "Snacks", "Dairy", "Others"]);
        assert!(config.startup_alert);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = StockConfig::load(temp.path()).unwrap();
        assert_eq!(config, StockConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();

        let mut config = StockConfig::default();
        config.set("data-file", "shop.txt").unwrap();
        config.set("startup-alert", "false").unwrap();
        config.save(temp.path()).unwrap();

        let loaded = StockConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.data_file, "shop.txt");
        assert!(!loaded.startup_alert);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{ "data_file": "x.txt" }"#,
        )
        .unwrap();

        let loaded = StockConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.data_file, "x.txt");
        assert!(loaded.startup_alert);
        assert_eq!(loaded.categories.len(), 4);
    }

    #[test]
    fn test_set_categories_splits_on_commas() {
        let mut config = StockConfig::default();
        config.set("categories", "Fruit, Bread,,Frozen ").unwrap();
        assert_eq!(config.categories, vec!["Fruit", "Bread", "Frozen"]);
        assert_eq!(config.get("categories").unwrap(), "Fruit,Bread,Frozen");
    }

    #[test]
    fn test_rejects_unknown_key_and_bad_bool() {
        let mut config = StockConfig::default();
        assert!(config.set("colour", "red").is_err());
        assert!(config.set("startup-alert", "maybe").is_err());
        assert_eq!(config, StockConfig::default());
    }

    #[test]
    fn test_data_path_relative_and_absolute() {
        let temp = TempDir::new().unwrap();
        let config = StockConfig::default();
        assert_eq!(config.data_path(temp.path()), temp.path().join("stocks.txt"));

        let mut abs = StockConfig::default();
        let absolute = temp.path().join("elsewhere.txt");
        abs.data_file = absolute.display().to_string();
        assert_eq!(abs.data_path(Path::new("/ignored")), absolute);
    }

    #[test]
    fn test_list_all_in_key_order() {
        let keys: Vec<String> = StockConfig::default()
            .list_all()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["data-file", "categories", "startup-alert"]);
    }
}
