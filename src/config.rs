use crate::error::{ReportError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_RECENT_COUNT: usize = 5;
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the report collection lives in; defaults to the app's
    /// config directory.
    pub data_dir: Option<PathBuf>,
    pub recent_count: usize,
    pub submit_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            recent_count: DEFAULT_RECENT_COUNT,
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ReportError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("event-report").join("config.json"))
    }

    /// Directory the report collection is stored in.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let home = dirs::home_dir()
            .ok_or_else(|| ReportError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("event-report"))
    }

    /// Path of the persisted report collection.
    pub fn reports_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(crate::store::STORE_FILE_NAME))
    }

    pub fn set_data_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.data_dir = Some(dir);
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.data_dir, None);
        assert_eq!(config.recent_count, 5);
        assert_eq!(config.submit_delay_ms, 1000);
    }

    #[test]
    fn test_config_deserialize_missing_fields() {
        let config: Config = serde_json::from_str("{}").expect("deserialize failed");
        assert_eq!(config.recent_count, DEFAULT_RECENT_COUNT);
        assert_eq!(config.submit_delay_ms, DEFAULT_SUBMIT_DELAY_MS);
    }

    #[test]
    fn test_reports_path_uses_data_dir() {
        let config = Config {
            data_dir: Some(PathBuf::from("/tmp/event-report-test")),
            ..Default::default()
        };
        assert_eq!(
            config.reports_path().unwrap(),
            PathBuf::from("/tmp/event-report-test").join("reports.json")
        );
    }
}
