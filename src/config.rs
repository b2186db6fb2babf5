use std::env::{self, VarError};

use dotenv::dotenv;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let base_url = match env::var("COINGECKO_BASE_URL") {
            Ok(url) => Some(url),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => return Err(ConfigError::InvalidBaseUrl),
        };

        Self::with_base_url(base_url.as_deref())
    }

    pub fn with_base_url(base_url: Option<&str>) -> Result<Self, ConfigError> {
        let base_url = match base_url {
            None => DEFAULT_BASE_URL,
            Some(url) => url.trim(),
        };

        if base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }

        Ok(Self {
            base_url: base_url.to_string(),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
