use crate::model::responses::ListMetadata;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
/// Identity provider behind an SSO connection
pub enum ConnectionType {
    /// Active Directory Federation Services SAML
    #[serde(rename = "ADFSSAML")]
    AdfsSaml,
    /// Auth0 SAML
    #[serde(rename = "Auth0SAML")]
    Auth0Saml,
    /// Azure AD SAML
    #[serde(rename = "AzureSAML")]
    AzureSaml,
    /// Generic OpenID Connect
    #[serde(rename = "GenericOIDC")]
    GenericOidc,
    /// Generic SAML
    #[serde(rename = "GenericSAML")]
    GenericSaml,
    /// Google OAuth
    #[serde(rename = "GoogleOAuth")]
    GoogleOAuth,
    /// Google SAML
    #[serde(rename = "GoogleSAML")]
    GoogleSaml,
    /// JumpCloud SAML
    #[serde(rename = "JumpCloudSAML")]
    JumpCloudSaml,
    /// Passwordless magic link
    #[serde(rename = "MagicLink")]
    MagicLink,
    /// Microsoft OAuth
    #[serde(rename = "MicrosoftOAuth")]
    MicrosoftOAuth,
    /// Okta SAML
    #[serde(rename = "OktaSAML")]
    OktaSaml,
    /// OneLogin SAML
    #[serde(rename = "OneLoginSAML")]
    OneLoginSaml,
    /// PingFederate SAML
    #[serde(rename = "PingFederateSAML")]
    PingFederateSaml,
    /// PingOne SAML
    #[serde(rename = "PingOneSAML")]
    PingOneSaml,
    /// Shibboleth SAML
    #[serde(rename = "ShibbolethSAML")]
    ShibbolethSaml,
    /// VMware SAML
    #[serde(rename = "VMwareSAML")]
    VmwareSaml,
    /// A provider this version of the client does not know about
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
/// Lifecycle state of a connection
pub enum ConnectionState {
    /// Connection is live
    Active,
    /// Connection is disabled
    Inactive,
    /// Connection setup is not finished
    Draft,
    /// Connection is being validated
    Validating,
    /// A state this version of the client does not know about
    #[serde(other)]
    Unknown,
}

/// A domain attached to a connection
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectionDomain {
    /// Object type, always `connection_domain`
    #[serde(rename = "object", default)]
    pub obj: String,
    /// Unique identifier of the domain
    pub id: String,
    /// Domain name
    pub domain: String,
}

/// An SSO connection
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Connection {
    /// Object type, always `connection`
    #[serde(rename = "object", default)]
    pub obj: String,
    /// Unique identifier of the connection
    pub id: String,
    /// Organization the connection belongs to
    #[serde(default)]
    pub organization_id: Option<String>,
    /// Identity provider type
    pub connection_type: ConnectionType,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Lifecycle state
    pub state: ConnectionState,
    /// Domains routed to the connection
    #[serde(default)]
    pub domains: Vec<ConnectionDomain>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: String,
}

/// A page of connections
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectionList {
    /// Connections of the page
    pub data: Vec<Connection>,
    /// Cursors for the neighbouring pages
    #[serde(default)]
    pub list_metadata: ListMetadata,
}

/// A user profile returned by an identity provider
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// Object type, always `profile`
    #[serde(rename = "object", default)]
    pub obj: String,
    /// Unique identifier of the profile
    pub id: String,
    /// Connection the user signed in with
    pub connection_id: String,
    /// Identity provider type of that connection
    pub connection_type: ConnectionType,
    /// Organization of the connection
    #[serde(default)]
    pub organization_id: Option<String>,
    /// Email address
    pub email: String,
    /// First name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default)]
    pub last_name: Option<String>,
    /// Identifier of the user at the identity provider
    #[serde(default)]
    pub idp_id: String,
    /// Attributes as sent by the identity provider
    #[serde(default)]
    pub raw_attributes: HashMap<String, serde_json::Value>,
}

/// Result of exchanging an authorization code
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileAndToken {
    /// Access token usable with the profile endpoint
    pub access_token: String,
    /// Profile of the signed in user
    pub profile: Profile,
}
