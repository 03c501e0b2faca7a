/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::error::AppError;
use crate::model::http::HttpClient;
use std::sync::Arc;
use tracing::debug;

/// Entry point of the library
///
/// Every resource service (`OrganizationsService`, `SsoService`, ...) is implemented
/// for this type. Cloning is cheap: clones share the same transport.
#[derive(Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client from a configuration
    ///
    /// # Returns
    /// * `Err(AppError::InvalidConfiguration)` - If the API key is blank or the host is invalid
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config)?);
        debug!("WorkOS client created");
        Ok(Self { http_client })
    }

    /// Creates a client for the default host with the given API key
    pub fn from_api_key(api_key: impl Into<String>) -> Result<Self, AppError> {
        Self::new(Config::new(api_key)?)
    }

    /// Creates a client from `WORKOS_*` environment variables (and a `.env` file)
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::from_env()?)
    }

    /// Shared transport, for calls not covered by a service
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Configuration of the client
    pub fn config(&self) -> &Config {
        self.http_client.config()
    }
}
