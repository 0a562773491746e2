use std::path::{Path, PathBuf};

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::WeightUnit;

pub const CONFIG_ENV: &str = "GYM_TRACKER_CONFIG";
pub const DATA_DIR_ENV: &str = "GYM_TRACKER_DATA_DIR";
pub const LOG_ENV: &str = "GYM_TRACKER_LOG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub seed_file: Option<PathBuf>,
    pub rest_seconds: u32,
    pub default_unit: WeightUnit,
    pub week_starts_on: Weekday,
    pub log_filter: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_dir: default_data_dir(),
            seed_file: None,
            rest_seconds: 60,
            default_unit: WeightUnit::Kg,
            week_starts_on: Weekday::Sun,
            log_filter: "info".to_string(),
            window_width: 1280.0,
            window_height: 800.0,
        }
    }
}

fn default_data_dir() -> PathBuf {
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map(|home| PathBuf::from(home).join(".gym_tracker"))
        .unwrap_or_else(|_| PathBuf::from(".gym_tracker"))
}

impl AppConfig {
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let s = std::fs::read_to_string(path)?;
        Self::from_toml(&s)
    }

    fn apply_env(&mut self) {
        if let Ok(v) = std::env::var(DATA_DIR_ENV) {
            if !v.trim().is_empty() {
                self.data_dir = PathBuf::from(v);
            }
        }
        if let Ok(v) = std::env::var(LOG_ENV) {
            if !v.trim().is_empty() {
                self.log_filter = v;
            }
        }
    }
}

/// `$GYM_TRACKER_CONFIG`, then `./gym_tracker.toml`, then defaults.
/// Environment overrides apply last.
pub fn load_default() -> Result<AppConfig, ConfigError> {
    let local = Path::new("gym_tracker.toml");

    let mut cfg = match std::env::var(CONFIG_ENV) {
        Ok(path) if !path.trim().is_empty() => AppConfig::load_from(Path::new(&path))?,
        _ if local.exists() => AppConfig::load_from(local)?,
        _ => AppConfig::default(),
    };

    cfg.apply_env();
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let cfg = AppConfig::from_toml(
            r#"
            rest_seconds = 90
            default_unit = "lbs"
            week_starts_on = "Mon"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.rest_seconds, 90);
        assert_eq!(cfg.default_unit, WeightUnit::Lbs);
        assert_eq!(cfg.week_starts_on, Weekday::Mon);
        assert_eq!(cfg.log_filter, "info");
        assert!(cfg.seed_file.is_none());
    }

    #[test]
    fn test_bad_toml_is_error() {
        assert!(matches!(
            AppConfig::from_toml("rest_seconds = \"soon\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "data_dir = \"/tmp/gym\"\nseed_file = \"seed.json\"").unwrap();
        let cfg = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(cfg.data_dir, PathBuf::from("/tmp/gym"));
        assert_eq!(cfg.seed_file, Some(PathBuf::from("seed.json")));
    }
}
