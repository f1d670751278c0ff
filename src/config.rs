use derivative::Derivative;
use reqwest::Url;
use thiserror::Error;

pub const API_BASE_URL_VAR: &str = "FEEDBACK_API_BASE_URL";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const ANALYZE_PATH: &str = "/analyze";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {value}")]
    InvalidUrl { var: &'static str, value: String },
    #[error("{var} must use http or https, got {scheme}")]
    UnsupportedScheme { var: &'static str, scheme: String },
}

#[derive(Derivative, Clone, PartialEq, Eq)]
#[derivative(Debug, Default)]
pub struct Config {
    #[derivative(Default(value = "DEFAULT_API_BASE_URL.to_string()"))]
    pub api_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let Some(value) = lookup(API_BASE_URL_VAR).filter(|v| !v.trim().is_empty()) else {
            return Ok(Self::default());
        };
        let value = value.trim().to_string();

        let url = Url::parse(&value).map_err(|_| ConfigError::InvalidUrl {
            var: API_BASE_URL_VAR,
            value: value.clone(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                var: API_BASE_URL_VAR,
                scheme: url.scheme().to_string(),
            });
        }

        Ok(Self {
            api_base_url: value,
        })
    }

    pub fn analyze_endpoint(&self) -> String {
        format!("{}{}", self.api_base_url.trim_end_matches('/'), ANALYZE_PATH)
    }
}
