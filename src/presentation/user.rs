use crate::model::responses::ListMetadata;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A user managed by WorkOS
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Object type, always `user`
    #[serde(rename = "object", default)]
    pub obj: String,
    /// Unique identifier of the user
    pub id: String,
    /// Email address
    pub email: String,
    /// First name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default)]
    pub last_name: Option<String>,
    /// Whether the email address has been verified
    #[serde(default)]
    pub email_verified: bool,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: String,
}

/// A page of users
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserList {
    /// Users of the page
    pub data: Vec<User>,
    /// Cursors for the neighbouring pages
    #[serde(default)]
    pub list_metadata: ListMetadata,
}

/// Result of a successful authentication
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticationResponse {
    /// The authenticated user
    pub user: User,
    /// Organization the user authenticated into, if any
    #[serde(default)]
    pub organization_id: Option<String>,
}

/// Result of starting a password reset
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordResetChallenge {
    /// Token to pass to the password reset completion
    pub token: String,
    /// User the challenge was created for
    pub user: User,
}
