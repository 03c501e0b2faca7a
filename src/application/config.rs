use crate::constants::{
    API_HOSTNAME_ENV, API_KEY_ENV, DEFAULT_API_HOSTNAME, HTTPS_ENV, PORT_ENV, TIMEOUT_SECS_ENV,
    USER_AGENT,
};
use crate::error::AppError;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

fn default_hostname() -> String {
    DEFAULT_API_HOSTNAME.to_string()
}

fn default_https() -> bool {
    true
}

fn default_user_agent() -> String {
    USER_AGENT.to_string()
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the WorkOS API client
///
/// The API key is never serialized, so printing a configuration does not leak it.
pub struct Config {
    /// API key used as bearer credential on every request
    #[serde(skip_serializing, default)]
    pub api_key: String,
    /// Host requests are sent to
    #[serde(default = "default_hostname")]
    pub api_hostname: String,
    /// Whether to use HTTPS
    #[serde(default = "default_https")]
    pub https: bool,
    /// Explicit port, scheme default when `None`
    #[serde(default)]
    pub port: Option<u16>,
    /// Value of the `User-Agent` header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Timeout in seconds for a whole request, transport default when `None`
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl Config {
    /// Creates a configuration with default host settings
    ///
    /// # Arguments
    /// * `api_key` - WorkOS API key, must not be blank
    ///
    /// # Returns
    /// * `Err(AppError::InvalidConfiguration)` - If the API key is blank
    pub fn new(api_key: impl Into<String>) -> Result<Self, AppError> {
        let config = Config {
            api_key: api_key.into(),
            api_hostname: default_hostname(),
            https: default_https(),
            port: None,
            user_agent: default_user_agent(),
            timeout: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Creates a configuration from environment variables
    ///
    /// A `.env` file is loaded first when present. `WORKOS_API_KEY` is required,
    /// `WORKOS_API_HOSTNAME`, `WORKOS_HTTPS`, `WORKOS_PORT` and
    /// `WORKOS_TIMEOUT_SECS` are optional.
    pub fn from_env() -> Result<Self, AppError> {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let api_key: String = get_env_or_default(API_KEY_ENV, String::new());
        let mut config = Config::new(api_key).map_err(|_| {
            AppError::InvalidConfiguration(format!(
                "{API_KEY_ENV} not found in environment variables or .env file"
            ))
        })?;
        config.api_hostname = get_env_or_default(API_HOSTNAME_ENV, default_hostname());
        config.https = get_env_or_default(HTTPS_ENV, default_https());
        config.port = get_env_or_none(PORT_ENV);
        config.timeout = get_env_or_none(TIMEOUT_SECS_ENV);
        config.validate()?;
        Ok(config)
    }

    /// Sets the API hostname
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.api_hostname = hostname.into();
        self
    }

    /// Switches between HTTPS and plain HTTP
    pub fn with_https(mut self, https: bool) -> Self {
        self.https = https;
        self
    }

    /// Sets an explicit port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Overrides the `User-Agent` header value
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets a request timeout in seconds
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Checks the invariants of the configuration
    pub fn validate(&self) -> Result<(), AppError> {
        if self.api_key.trim().is_empty() {
            return Err(AppError::InvalidConfiguration(
                "Missing API key".to_string(),
            ));
        }
        if self.api_hostname.trim().is_empty() {
            return Err(AppError::InvalidConfiguration(
                "Missing API hostname".to_string(),
            ));
        }
        Ok(())
    }

    /// URL scheme derived from the `https` flag
    pub fn scheme(&self) -> &'static str {
        if self.https { "https" } else { "http" }
    }

    /// Base URL every request path is resolved against
    pub fn base_url(&self) -> Result<Url, AppError> {
        let raw = match self.port {
            Some(port) => format!("{}://{}:{}", self.scheme(), self.api_hostname, port),
            None => format!("{}://{}", self.scheme(), self.api_hostname),
        };
        let url = Url::parse(&raw).map_err(|e| {
            AppError::InvalidConfiguration(format!("invalid base url {raw}: {e}"))
        })?;
        if url.cannot_be_a_base() || url.path() != "/" {
            return Err(AppError::InvalidConfiguration(format!(
                "invalid API hostname: {}",
                self.api_hostname
            )));
        }
        Ok(url)
    }

    /// Request timeout as a duration
    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}
