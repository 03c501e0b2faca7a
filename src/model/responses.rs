/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error body returned by the API on failed requests
///
/// Every field is optional: 401 and 5xx answers usually carry only `message`,
/// 422 answers add `errors`.
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Human readable message
    #[serde(default)]
    pub message: Option<String>,
    /// Machine readable error code, when provided
    #[serde(default)]
    pub code: Option<String>,
    /// Field level validation errors (422 only)
    #[serde(default)]
    pub errors: Vec<EntityError>,
}

impl ErrorResponse {
    /// Parses an error body without failing
    ///
    /// A body that is not a JSON object is kept as the message, so plain text
    /// answers from proxies are not lost. An empty body yields an empty response.
    pub fn from_body(body: &str) -> Self {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Self::default();
        }
        match serde_json::from_str::<ErrorResponse>(trimmed) {
            Ok(parsed) => parsed,
            Err(_) => Self {
                message: Some(trimmed.to_string()),
                ..Self::default()
            },
        }
    }
}

/// A single field level validation error
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntityError {
    /// Name of the offending field
    #[serde(default)]
    pub field: Option<String>,
    /// Error code for the field
    #[serde(default)]
    pub code: Option<String>,
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.field.as_deref().unwrap_or("<unknown field>"),
            self.code.as_deref().unwrap_or("<no code>")
        )
    }
}

/// Cursors returned alongside every list endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListMetadata {
    /// Cursor to request the next page
    #[serde(default)]
    pub after: Option<String>,
    /// Cursor to request the previous page
    #[serde(default)]
    pub before: Option<String>,
}
