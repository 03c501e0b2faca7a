use crate::error::AppError;
use crate::model::options::require;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
/// Kind of passwordless session
pub enum PasswordlessSessionType {
    /// Sign in through an emailed link
    #[default]
    MagicLink,
}

/// Parameters for creating a passwordless session
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CreatePasswordlessSessionOptions {
    /// Email of the user
    pub email: String,
    /// Kind of session
    #[serde(rename = "type")]
    pub session_type: PasswordlessSessionType,
    /// Where the user lands after following the link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
    /// Opaque value echoed back on the redirect URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Connection to authenticate through
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<String>,
    /// Lifetime of the link in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u32>,
}

impl CreatePasswordlessSessionOptions {
    /// Creates a magic link session for `email`
    pub fn new(email: impl Into<String>) -> Result<Self, AppError> {
        let email = email.into();
        require(&email, "Email is required")?;
        Ok(Self {
            email,
            session_type: PasswordlessSessionType::MagicLink,
            redirect_uri: None,
            state: None,
            connection: None,
            expires_in: None,
        })
    }

    /// Set the redirect URI
    pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    /// Set the state
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Set the connection
    pub fn with_connection(mut self, connection: impl Into<String>) -> Self {
        self.connection = Some(connection.into());
        self
    }

    /// Set the link lifetime in seconds
    pub fn with_expires_in(mut self, seconds: u32) -> Self {
        self.expires_in = Some(seconds);
        self
    }
}
