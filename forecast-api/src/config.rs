//! API base address configuration.

use reqwest::Url;
use std::fmt;

/// Base address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Environment variable holding the API base address.
pub const BASE_URL_ENV: &str = "FORECAST_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidUrl { url: String, reason: String },
    UnsupportedScheme(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidUrl { url, reason } => {
                write!(f, "Invalid API base URL {url:?}: {reason}")
            }
            ConfigError::UnsupportedScheme(scheme) => {
                write!(f, "Unsupported API URL scheme {scheme:?} (expected http or https)")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Where the forecast API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let mut url = Url::parse(base_url.trim()).map_err(|e| ConfigError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
        }
        // Endpoint paths are joined relative to the base, so it must end in '/'
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url.set_query(None);
        url.set_fragment(None);
        Ok(Self { base_url: url })
    }

    /// Build from an optional configured value. Missing or blank values mean the default.
    pub fn from_value(value: Option<&str>) -> Result<Self, ConfigError> {
        match value {
            Some(value) if !value.trim().is_empty() => Self::new(value),
            _ => Ok(Self::default()),
        }
    }

    /// Read the base address from `FORECAST_API_URL`, falling back to the default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_value(std::env::var(BASE_URL_ENV).ok().as_deref())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL of an endpoint below the base address.
    pub fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!("{}{}", url.path(), path.trim_start_matches('/'));
        url.set_path(&joined);
        url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL).expect("default base URL is valid")
    }
}
