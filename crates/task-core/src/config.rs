//! Client Configuration
//!
//! Backend location and listing defaults. Values come from build-time
//! environment variables or a JSON document; anything missing falls back
//! to the defaults below.

use serde::Deserialize;

use crate::error::{ApiError, Result};
use crate::query::DEFAULT_PAGE_SIZE;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    pub base_url: String,
    pub page_size: u32,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Read the build-time environment: `TASK_CONFIG_JSON` as the starting
    /// document, then `TASK_API_BASE_URL`, `TASK_PAGE_SIZE` and
    /// `TASK_LOG_LEVEL` on top of it.
    pub fn from_build_env() -> Result<Self> {
        Self::from_vars(
            option_env!("TASK_CONFIG_JSON"),
            option_env!("TASK_API_BASE_URL"),
            option_env!("TASK_PAGE_SIZE"),
            option_env!("TASK_LOG_LEVEL"),
        )
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn from_vars(
        json: Option<&str>,
        base_url: Option<&str>,
        page_size: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self> {
        let mut config = match json.filter(|s| !s.trim().is_empty()) {
            Some(json) => Self::from_json(json)?,
            None => Self::default(),
        };
        if let Some(url) = base_url.filter(|s| !s.is_empty()) {
            config.base_url = url.to_string();
        }
        if let Some(size) = page_size.filter(|s| !s.is_empty()) {
            config.page_size = size
                .parse()
                .map_err(|_| ApiError::Config(format!("invalid page size `{size}`")))?;
        }
        if let Some(level) = log_level.filter(|s| !s.is_empty()) {
            config.log_level = level.to_string();
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(ApiError::Config("page size must be at least 1".to_string()));
        }
        url::Url::parse(&self.base_url)?;
        Ok(())
    }

    /// Parsed log level; unknown names fall back to `Info`
    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_vars(None, None, None, None).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.page_size, 4);
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let config =
            ClientConfig::from_vars(None, Some("https://tasks.example.com"), Some("12"), Some("debug")).unwrap();
        assert_eq!(config.base_url, "https://tasks.example.com");
        assert_eq!(config.page_size, 12);
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            ClientConfig::from_vars(None, None, Some("0"), None),
            Err(ApiError::Config(_))
        ));
        assert!(matches!(
            ClientConfig::from_vars(None, None, Some("many"), None),
            Err(ApiError::Config(_))
        ));
        assert!(matches!(
            ClientConfig::from_vars(None, Some("not a url"), None, None),
            Err(ApiError::Url(_))
        ));
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = ClientConfig::from_json(r#"{"pageSize": 8}"#).unwrap();
        assert_eq!(config.page_size, 8);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_build_json_with_var_overrides() {
        let json = r#"{"baseUrl": "https://json.example.com", "pageSize": 6, "logLevel": "warn"}"#;
        let config = ClientConfig::from_vars(Some(json), None, Some("10"), None).unwrap();
        assert_eq!(config.base_url, "https://json.example.com");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.log_level(), log::LevelFilter::Warn);

        assert!(matches!(
            ClientConfig::from_vars(Some("{not json"), None, None, None),
            Err(ApiError::Decode(_))
        ));
    }
}
