/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! Error type shared by every operation of the client

use crate::model::responses::EntityError;
use reqwest::StatusCode;
use reqwest::header::{InvalidHeaderName, InvalidHeaderValue};
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// The client configuration is unusable (blank API key, bad hostname, ...)
    InvalidConfiguration(String),
    /// A request option or header failed validation before anything was sent
    InvalidInput(String),
    /// The API answered 401
    Unauthorized {
        /// Message returned by the API
        message: Option<String>,
        /// Value of the `X-Request-ID` response header
        request_id: Option<String>,
    },
    /// The API answered 404
    NotFound {
        /// Path that was requested
        path: String,
        /// Value of the `X-Request-ID` response header
        request_id: Option<String>,
    },
    /// The API answered 422 with field level validation errors
    UnprocessableEntity {
        /// Message returned by the API
        message: Option<String>,
        /// Field level errors, possibly empty
        errors: Vec<EntityError>,
        /// Value of the `X-Request-ID` response header
        request_id: Option<String>,
    },
    /// Any other status code >= 400
    GenericServer {
        /// Message returned by the API
        message: Option<String>,
        /// Status code of the response
        status: StatusCode,
        /// Value of the `X-Request-ID` response header
        request_id: Option<String>,
    },
    /// A successful response had no body although one was required
    EmptyResponse {
        /// Path that was requested
        path: String,
    },
    /// JSON (de)serialization failure
    Json(serde_json::Error),
    /// Transport failure reported by reqwest
    Network(reqwest::Error),
}

impl AppError {
    /// Correlation identifier of the failed request, when the API sent one
    pub fn request_id(&self) -> Option<&str> {
        match self {
            AppError::Unauthorized { request_id, .. }
            | AppError::NotFound { request_id, .. }
            | AppError::UnprocessableEntity { request_id, .. }
            | AppError::GenericServer { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }

    /// HTTP status the error was classified from, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Unauthorized { .. } => Some(StatusCode::UNAUTHORIZED),
            AppError::NotFound { .. } => Some(StatusCode::NOT_FOUND),
            AppError::UnprocessableEntity { .. } => Some(StatusCode::UNPROCESSABLE_ENTITY),
            AppError::GenericServer { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }
}

fn write_context(
    f: &mut fmt::Formatter<'_>,
    message: &Option<String>,
    request_id: &Option<String>,
) -> fmt::Result {
    if let Some(message) = message {
        write!(f, ": {message}")?;
    }
    if let Some(request_id) = request_id {
        write!(f, " (request id: {request_id})")?;
    }
    Ok(())
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidConfiguration(msg) => write!(f, "invalid configuration: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Unauthorized {
                message,
                request_id,
            } => {
                write!(f, "unauthorized")?;
                write_context(f, message, request_id)
            }
            AppError::NotFound { path, request_id } => {
                write!(f, "not found: {path}")?;
                write_context(f, &None, request_id)
            }
            AppError::UnprocessableEntity {
                message,
                errors,
                request_id,
            } => {
                write!(f, "unprocessable entity")?;
                write_context(f, message, request_id)?;
                for error in errors {
                    write!(f, "; {error}")?;
                }
                Ok(())
            }
            AppError::GenericServer {
                message,
                status,
                request_id,
            } => {
                write!(f, "server error {}", status.as_u16())?;
                write_context(f, message, request_id)
            }
            AppError::EmptyResponse { path } => {
                write!(f, "empty response: path {path} returned no body")
            }
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Json(e) => Some(e),
            AppError::Network(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<InvalidHeaderName> for AppError {
    fn from(e: InvalidHeaderName) -> Self {
        AppError::InvalidInput(format!("invalid header name: {e}"))
    }
}

impl From<InvalidHeaderValue> for AppError {
    fn from(e: InvalidHeaderValue) -> Self {
        AppError::InvalidInput(format!("invalid header value: {e}"))
    }
}
