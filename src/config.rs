use chrono::{DateTime, Datelike};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::content::{load_json, ContentError};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("couldn't parse site config: {0}")]
    Parse(String),
}

impl From<ContentError> for ConfigError {
    fn from(value: ContentError) -> Self {
        Self::Parse(value.to_string())
    }
}

/// Animation and form lifecycle timings, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub type_interval_ms: u64,
    pub delete_interval_ms: u64,
    pub pause_ms: u64,
    pub submit_delay_ms: u64,
    pub status_display_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            type_interval_ms: 100,
            delete_interval_ms: 50,
            pause_ms: 2000,
            submit_delay_ms: 2000,
            status_display_ms: 5000,
        }
    }
}

impl Timings {
    pub fn type_interval(&self) -> Duration {
        Duration::from_millis(self.type_interval_ms)
    }

    pub fn delete_interval(&self) -> Duration {
        Duration::from_millis(self.delete_interval_ms)
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn status_display(&self) -> Duration {
        Duration::from_millis(self.status_display_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub timings: Timings,
    /// A section is active once its top edge is within this many px of the viewport top.
    pub scroll_threshold_px: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            timings: Timings::default(),
            scroll_threshold_px: 100.0,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Reads the embedded `config.json`.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(load_json("config.json")?)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            log::warn!("{e}, falling back to defaults");
            Self::default()
        })
    }
}

/// Year the site was built, for the footer copyright line.
pub fn build_year() -> Option<i32> {
    year_of(env!("BUILD_TIME"))
}

fn year_of(stamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(stamp).ok().map(|t| t.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_matches_defaults() {
        let config = SiteConfig::load().expect("embedded config should parse");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = SiteConfig::from_json(r#"{"timings": {"pause_ms": 500}}"#).unwrap();
        assert_eq!(config.timings.pause(), Duration::from_millis(500));
        assert_eq!(config.timings.type_interval(), Duration::from_millis(100));
        assert_eq!(config.scroll_threshold_px, 100.0);
    }

    #[test]
    fn test_bad_json() {
        let err = SiteConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_build_year() {
        assert_eq!(year_of("2025-03-01T12:00:00+00:00"), Some(2025));
        assert_eq!(year_of("yesterday"), None);
        assert!(build_year().is_some_and(|y| y >= 2025));
    }
}
