/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! Request pipeline shared by every resource of the client
//!
//! A call goes through four steps:
//! - [`build_url`] resolves the path against the base URL and appends query parameters
//! - [`build_headers`] merges the fixed headers with the per call ones
//! - [`make_http_request`] performs the single network attempt
//! - [`classify_response`] and [`decode_body`] turn the raw answer into a value or an [`AppError`]

use crate::application::config::Config;
use crate::constants::{CONTENT_TYPE_JSON, REQUEST_ID_HEADER};
use crate::error::AppError;
use crate::model::requests::{ExtraHeaders, QueryParams, RequestConfig};
use crate::model::responses::ErrorResponse;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error};

/// Undecoded answer of the API
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// Status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Body text, empty when the API sent none
    pub body: String,
}

impl RawResponse {
    /// Correlation identifier sent in the `X-Request-ID` header
    pub fn request_id(&self) -> Option<String> {
        self.headers
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    }
}

/// Low level client for the WorkOS API
///
/// Holds the immutable configuration, the base URL computed once at construction
/// and a single `reqwest` client reused by every call. It is cheap to share behind
/// an `Arc` and safe to use from many tasks at once.
pub struct HttpClient {
    config: Arc<Config>,
    base_url: Url,
    http_client: Client,
}

impl HttpClient {
    /// Creates a new client
    ///
    /// # Arguments
    /// * `config` - Configuration containing the API key and host settings
    ///
    /// # Returns
    /// * `Err(AppError::InvalidConfiguration)` - If the API key is blank or the host is invalid
    /// * `Err(AppError::Network)` - If the transport cannot be initialised
    pub fn new(config: Config) -> Result<Self, AppError> {
        config.validate()?;
        let base_url = config.base_url()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout_duration() {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        debug!("WorkOS client targeting {}", base_url);
        Ok(Self {
            config: Arc::new(config),
            base_url,
            http_client,
        })
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Base URL every path is resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Makes a GET request and decodes the JSON answer
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        config: Option<&RequestConfig>,
    ) -> Result<T, AppError> {
        self.request(Method::GET, path, config).await
    }

    /// Makes a GET request and returns the raw body
    pub async fn get_text(
        &self,
        path: &str,
        config: Option<&RequestConfig>,
    ) -> Result<String, AppError> {
        self.request_text(Method::GET, path, config).await
    }

    /// Makes a POST request and decodes the JSON answer
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        config: Option<&RequestConfig>,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, config).await
    }

    /// Makes a POST request and returns the raw body
    pub async fn post_text(
        &self,
        path: &str,
        config: Option<&RequestConfig>,
    ) -> Result<String, AppError> {
        self.request_text(Method::POST, path, config).await
    }

    /// Makes a PUT request and decodes the JSON answer
    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        config: Option<&RequestConfig>,
    ) -> Result<T, AppError> {
        self.request(Method::PUT, path, config).await
    }

    /// Makes a PUT request and returns the raw body
    pub async fn put_text(
        &self,
        path: &str,
        config: Option<&RequestConfig>,
    ) -> Result<String, AppError> {
        self.request_text(Method::PUT, path, config).await
    }

    /// Makes a DELETE request and returns the raw body
    pub async fn delete(
        &self,
        path: &str,
        config: Option<&RequestConfig>,
    ) -> Result<String, AppError> {
        self.request_text(Method::DELETE, path, config).await
    }

    /// Makes a request and decodes the JSON answer into `T`
    ///
    /// # Returns
    /// * `Err(AppError::EmptyResponse)` - If the API answered successfully without a body
    /// * `Err(AppError::Json)` - If the body does not match `T`
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        config: Option<&RequestConfig>,
    ) -> Result<T, AppError> {
        let (request_path, body) = self.send(method, path, config).await?;
        decode_body(&request_path, &body)
    }

    /// Makes a request and returns the raw body of a successful answer
    pub async fn request_text(
        &self,
        method: Method,
        path: &str,
        config: Option<&RequestConfig>,
    ) -> Result<String, AppError> {
        let (_, body) = self.send(method, path, config).await?;
        Ok(body)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        config: Option<&RequestConfig>,
    ) -> Result<(String, String), AppError> {
        let params = if method == Method::GET {
            config.and_then(|c| c.params.as_ref())
        } else {
            None
        };
        let url = build_url(&self.base_url, path, params);
        let request_path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        let headers = build_headers(
            &self.config.api_key,
            &self.config.user_agent,
            config.and_then(|c| c.headers.as_ref()),
        )?;

        let body = if method == Method::POST || method == Method::PUT {
            match config.and_then(|c| c.data.as_ref()) {
                Some(data) => Some(serde_json::to_string(data)?),
                None => Some(String::new()),
            }
        } else {
            None
        };

        let response = make_http_request(&self.http_client, method, url, headers, body).await?;
        let body = classify_response(&request_path, response)?;
        Ok((request_path, body))
    }
}

/// Resolves `path` against `base` and appends `params` as a form encoded query string
///
/// The path replaces the one of the base URL and a missing leading `/` is added.
/// `path` is taken literally: a `?` inside it is percent encoded, never read as the
/// start of a query. `params` are appended in insertion order and no `?` is emitted
/// when there is nothing to append.
pub fn build_url(base: &Url, path: &str, params: Option<&QueryParams>) -> Url {
    let mut url = base.clone();
    url.set_path(path);
    url.set_query(None);

    if let Some(params) = params.filter(|p| !p.is_empty()) {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params.iter() {
            pairs.append_pair(key, value);
        }
    }
    url
}

/// Builds the header map of a request
///
/// `Authorization`, `User-Agent` and `Content-Type` are always present; `extra`
/// headers are applied afterwards and replace them on name clashes.
pub fn build_headers(
    api_key: &str,
    user_agent: &str,
    extra: Option<&ExtraHeaders>,
) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();

    let mut authorization = HeaderValue::from_str(&format!("Bearer {api_key}"))?;
    authorization.set_sensitive(true);
    headers.insert(AUTHORIZATION, authorization);
    headers.insert(USER_AGENT, HeaderValue::from_str(user_agent)?);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));

    if let Some(extra) = extra {
        for (name, value) in extra.iter() {
            let name = HeaderName::from_bytes(name.as_bytes())?;
            let mut value = HeaderValue::from_str(value)?;
            if name == AUTHORIZATION {
                value.set_sensitive(true);
            }
            headers.insert(name, value);
        }
    }
    Ok(headers)
}

/// Sends a single request and collects status, headers and body
///
/// Transport failures are returned as [`AppError::Network`] without retry.
pub async fn make_http_request(
    client: &Client,
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<String>,
) -> Result<RawResponse, AppError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url).headers(headers);
    if let Some(body) = body {
        request = request.body(body);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    let headers = response.headers().clone();
    let body = response.text().await?;
    Ok(RawResponse {
        status,
        headers,
        body,
    })
}

/// Maps a raw answer to its body or to the matching error
///
/// Statuses below 400 are successes. 401, 404 and 422 have dedicated errors and
/// every other status >= 400 becomes [`AppError::GenericServer`].
pub fn classify_response(path: &str, response: RawResponse) -> Result<String, AppError> {
    let status = response.status;
    if status.as_u16() < 400 {
        return Ok(response.body);
    }

    let request_id = response.request_id();
    error!(
        "Request to {} failed with status {}: {}",
        path, status, response.body
    );
    let error_body = ErrorResponse::from_body(&response.body);

    Err(match status {
        StatusCode::UNAUTHORIZED => AppError::Unauthorized {
            message: error_body.message,
            request_id,
        },
        StatusCode::NOT_FOUND => AppError::NotFound {
            path: path.to_string(),
            request_id,
        },
        StatusCode::UNPROCESSABLE_ENTITY => AppError::UnprocessableEntity {
            message: error_body.message,
            errors: error_body.errors,
            request_id,
        },
        _ => AppError::GenericServer {
            message: error_body.message,
            status,
            request_id,
        },
    })
}

/// Decodes a successful body into `T`, ignoring unknown fields
pub fn decode_body<T: DeserializeOwned>(path: &str, body: &str) -> Result<T, AppError> {
    if body.trim().is_empty() {
        return Err(AppError::EmptyResponse {
            path: path.to_string(),
        });
    }
    serde_json::from_str(body).map_err(|e| {
        error!("Failed to decode response from {}: {}", path, e);
        AppError::Json(e)
    })
}
