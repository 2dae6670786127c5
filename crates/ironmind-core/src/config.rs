//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - Log table location override
//! - Analytics view defaults (ranking size, minimum-history gates)
//!
//! Configuration is stored at `~/.config/ironmind/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::store::data_dir;

/// Log table configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// Path of the CSV log table. Defaults to `daily_logs.csv` under
    /// the data directory when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Analytics view configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// How many days the best-days ranking shows by default.
    #[serde(default = "default_top_days")]
    pub top_days: usize,
    /// Minimum days logged before correlation views unlock.
    #[serde(default = "default_min_days_analytics")]
    pub min_days_analytics: usize,
    /// Minimum days logged before the prediction view unlocks.
    #[serde(default = "default_min_days_prediction")]
    pub min_days_prediction: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            top_days: default_top_days(),
            min_days_analytics: default_min_days_analytics(),
            min_days_prediction: default_min_days_prediction(),
        }
    }
}

fn default_top_days() -> usize {
    10
}

fn default_min_days_analytics() -> usize {
    7
}

fn default_min_days_prediction() -> usize {
    10
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/ironmind/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

impl Config {
    /// Path of the configuration file.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created.
    pub fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::DirUnavailable(e.to_string()))?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk, writing defaults on first run.
    ///
    /// # Errors
    /// Returns an error if an existing file cannot be parsed or the
    /// default cannot be written.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Load from disk, falling back to defaults on any failure.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let value = lookup(&json, key)?;
        match value {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key. Returns an error if the
    /// key is unknown or the value cannot be parsed as the existing
    /// value's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        store_value(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}

fn lookup<'a>(root: &'a serde_json::Value, key: &str) -> Option<&'a serde_json::Value> {
    if key.is_empty() {
        return None;
    }
    let mut current = root;
    for part in key.split('.') {
        current = current.get(part)?;
    }
    Some(current)
}

fn store_value(
    root: &mut serde_json::Value,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    let mut parts = key.split('.').peekable();
    if parts.peek().is_none() {
        return Err(ConfigError::UnknownKey(key.to_string()));
    }

    let mut current = root;
    while let Some(part) = parts.next() {
        let is_leaf = parts.peek().is_none();
        let object = current
            .as_object_mut()
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

        if is_leaf {
            let existing = object
                .get(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
            let new_value = match existing {
                serde_json::Value::Bool(_) => serde_json::Value::Bool(
                    value.parse::<bool>().map_err(|e| ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: e.to_string(),
                    })?,
                ),
                serde_json::Value::Number(_) => parse_number_value(key, value)?,
                // Optional fields serialize as null until set.
                serde_json::Value::Null | serde_json::Value::String(_) => {
                    serde_json::Value::String(value.to_string())
                }
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: "cannot set a structured value".to_string(),
                    })
                }
            };
            object.insert(part.to_string(), new_value);
            return Ok(());
        }

        current = object
            .get_mut(part)
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
    }
    Err(ConfigError::UnknownKey(key.to_string()))
}

fn parse_number_value(key: &str, value: &str) -> Result<serde_json::Value, ConfigError> {
    if let Ok(n) = value.parse::<u64>() {
        return Ok(serde_json::Value::Number(n.into()));
    }
    if let Ok(n) = value.parse::<f64>() {
        if let Some(n) = serde_json::Number::from_f64(n) {
            return Ok(serde_json::Value::Number(n));
        }
    }
    Err(ConfigError::InvalidValue {
        key: key.to_string(),
        message: format!("cannot parse '{value}' as number"),
    })
}
