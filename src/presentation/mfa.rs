use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
/// Kind of authentication factor
pub enum FactorType {
    /// Time based one time password
    Totp,
    /// One time code sent by SMS
    Sms,
}

impl FactorType {
    /// Wire value of the factor type
    pub fn as_str(&self) -> &'static str {
        match self {
            FactorType::Totp => "totp",
            FactorType::Sms => "sms",
        }
    }
}

/// TOTP enrollment details
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Totp {
    /// QR code as a data URI
    #[serde(default)]
    pub qr_code: String,
    /// Shared secret
    #[serde(default)]
    pub secret: String,
    /// `otpauth://` URI
    #[serde(default)]
    pub uri: String,
}

/// SMS enrollment details
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sms {
    /// Phone number codes are sent to
    pub phone_number: String,
}

/// An enrolled authentication factor
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Factor {
    /// Object type, always `authentication_factor`
    #[serde(rename = "object", default)]
    pub obj: String,
    /// Unique identifier of the factor
    pub id: String,
    /// Kind of factor
    #[serde(rename = "type")]
    pub factor_type: FactorType,
    /// TOTP details, for `totp` factors
    #[serde(default)]
    pub totp: Option<Totp>,
    /// SMS details, for `sms` factors
    #[serde(default)]
    pub sms: Option<Sms>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: String,
}

/// A challenge issued against a factor
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Challenge {
    /// Object type, always `authentication_challenge`
    #[serde(rename = "object", default)]
    pub obj: String,
    /// Unique identifier of the challenge
    pub id: String,
    /// Factor the challenge belongs to
    pub authentication_factor_id: String,
    /// Expiry timestamp
    #[serde(default)]
    pub expires_at: Option<String>,
    /// Code, only returned in test environments
    #[serde(default)]
    pub code: Option<String>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: String,
}

/// Result of verifying a challenge
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyFactorResponse {
    /// The verified challenge
    pub challenge: Challenge,
    /// Whether the code matched
    pub valid: bool,
}
