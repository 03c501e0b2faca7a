use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A passwordless session
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordlessSession {
    /// Object type, always `passwordless_session`
    #[serde(rename = "object", default)]
    pub obj: String,
    /// Unique identifier of the session
    pub id: String,
    /// Email the session was created for
    pub email: String,
    /// Expiry timestamp
    #[serde(default)]
    pub expires_at: String,
    /// Magic link to sign in with
    pub link: String,
}

/// Answer of the send session endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SendSessionResponse {
    /// Whether the email was sent
    pub success: bool,
}
