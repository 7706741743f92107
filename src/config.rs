use std::{env, time::Duration};

use reqwest::Url;
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://restapi.amap.com";
const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Clone)]
pub struct AmapConfig {
    pub api_key: String,
    pub base_url: Url,
    pub timeout: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Error: config: {0}")]
    Missing(&'static str),
    #[error("Error: config: {0}")]
    Invalid(String),
}

impl AmapConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key =
            env::var("AMAP_API_KEY").map_err(|_| ConfigError::Missing("AMAP_API_KEY not set"))?;

        let raw_base =
            env::var("AMAP_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw_base).map_err(|e| {
            ConfigError::Invalid(format!("invalid AMAP_BASE_URL '{}': {}", raw_base, e))
        })?;

        let timeout_secs = env::var("HTTP_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        Ok(Self {
            api_key,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env mutations cannot race across test threads.
    #[test]
    fn from_env_reads_key_and_applies_defaults() {
        unsafe {
            env::remove_var("AMAP_API_KEY");
            env::remove_var("AMAP_BASE_URL");
            env::remove_var("HTTP_TIMEOUT_SECONDS");
        }
        assert!(matches!(
            AmapConfig::from_env(),
            Err(ConfigError::Missing(_))
        ));

        unsafe {
            env::set_var("AMAP_API_KEY", "test-key");
        }
        let config = AmapConfig::from_env().expect("config");
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url.as_str(), "https://restapi.amap.com/");
        assert_eq!(config.timeout, Duration::from_secs(10));

        unsafe {
            env::set_var("AMAP_BASE_URL", "http://127.0.0.1:3000");
            env::set_var("HTTP_TIMEOUT_SECONDS", "not-a-number");
        }
        let config = AmapConfig::from_env().expect("config");
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:3000/");
        assert_eq!(config.timeout, Duration::from_secs(10));

        unsafe {
            env::set_var("HTTP_TIMEOUT_SECONDS", "5");
        }
        let config = AmapConfig::from_env().expect("config");
        assert_eq!(config.timeout, Duration::from_secs(5));

        unsafe {
            env::set_var("AMAP_BASE_URL", "not a url");
        }
        assert!(matches!(
            AmapConfig::from_env(),
            Err(ConfigError::Invalid(_))
        ));

        unsafe {
            env::remove_var("AMAP_API_KEY");
            env::remove_var("AMAP_BASE_URL");
            env::remove_var("HTTP_TIMEOUT_SECONDS");
        }
    }
}
