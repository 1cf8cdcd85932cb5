use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::models::{Target, TargetList};

pub const DEFAULT_CONFIG_PATH: &str = "scraper/cameras.json";
pub const DEFAULT_OUTPUT_PATH: &str = "data/prices.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Settings for a single scrape run.
#[derive(Debug, Clone)]
pub struct Config {
    pub config_path: PathBuf,
    pub output_path: PathBuf,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

pub fn load_targets(path: &Path) -> Result<Vec<Target>, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let list: TargetList = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(list.cameras)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn fills_in_target_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cameras.json");
        fs::write(
            &path,
            r#"{"cameras": [{
                "id": "reolink-810a",
                "name": "Reolink RLC-810A",
                "model": "RLC-810A",
                "category": "bullet",
                "url": "https://shop.example/810a"
            }]}"#,
        )
        .unwrap();

        let targets = load_targets(&path).unwrap();
        assert_eq!(targets.len(), 1);
        let t = &targets[0];
        assert_eq!(t.category, Category::Bullet);
        assert_eq!(t.retailer, "Unknown");
        assert_eq!(t.price_selector, ".price");
        assert!(t.enabled);
        assert_eq!(t.description, "");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_targets(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn unknown_category_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cameras.json");
        fs::write(
            &path,
            r#"{"cameras": [{"id": "x", "name": "X", "model": "X", "category": "doorbell", "url": "u"}]}"#,
        )
        .unwrap();
        assert!(matches!(load_targets(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn empty_document_has_no_targets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cameras.json");
        fs::write(&path, "{}").unwrap();
        assert!(load_targets(&path).unwrap().is_empty());
    }
}
