use crate::model::responses::ListMetadata;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
/// Provider type of a directory
pub enum DirectoryType {
    /// Azure SCIM 2.0
    #[serde(rename = "azure scim v2.0")]
    AzureScimV2,
    /// BambooHR
    #[serde(rename = "bamboohr")]
    BambooHr,
    /// Fourth HR
    #[serde(rename = "fourth hr")]
    FourthHr,
    /// Generic SCIM 1.1
    #[serde(rename = "generic scim v1.1")]
    GenericScimV1,
    /// Generic SCIM 2.0
    #[serde(rename = "generic scim v2.0")]
    GenericScimV2,
    /// Google Workspace
    #[serde(rename = "gsuite directory")]
    GSuiteDirectory,
    /// Gusto
    #[serde(rename = "gusto")]
    Gusto,
    /// Hibob
    #[serde(rename = "hibob")]
    Hibob,
    /// JumpCloud SCIM 2.0
    #[serde(rename = "jump cloud scim v2.0")]
    JumpCloudScimV2,
    /// Okta SCIM 1.1
    #[serde(rename = "okta scim v1.1")]
    OktaScimV1,
    /// Okta SCIM 2.0
    #[serde(rename = "okta scim v2.0")]
    OktaScimV2,
    /// Rippling
    #[serde(rename = "rippling")]
    Rippling,
    /// Workday
    #[serde(rename = "workday")]
    Workday,
    /// A provider this version of the client does not know about
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
/// Link state of a directory
pub enum DirectoryState {
    /// Directory is syncing
    Linked,
    /// Directory is not syncing
    Unlinked,
    /// Credentials of the provider were rejected
    InvalidCredentials,
    /// Directory is being validated
    Validating,
    /// Directory is being deleted
    Deleting,
    /// A state this version of the client does not know about
    #[serde(other)]
    Unknown,
}

/// A directory connected to an identity provider
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Directory {
    /// Object type, always `directory`
    #[serde(rename = "object", default)]
    pub obj: String,
    /// Unique identifier of the directory
    pub id: String,
    /// Primary domain of the directory
    #[serde(default)]
    pub domain: Option<String>,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Organization the directory belongs to
    #[serde(default)]
    pub organization_id: Option<String>,
    /// Link state
    pub state: DirectoryState,
    /// Provider type
    #[serde(rename = "type")]
    pub directory_type: DirectoryType,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: String,
}

/// A page of directories
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectoryList {
    /// Directories of the page
    pub data: Vec<Directory>,
    /// Cursors for the neighbouring pages
    #[serde(default)]
    pub list_metadata: ListMetadata,
}

#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
/// State of a directory user
pub enum DirectoryUserState {
    /// User is active
    Active,
    /// User is deactivated
    Inactive,
    /// User is suspended
    Suspended,
    /// A state this version of the client does not know about
    #[serde(other)]
    Unknown,
}

/// An email address of a directory user
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectoryUserEmail {
    /// Whether this is the primary address
    #[serde(default)]
    pub primary: Option<bool>,
    /// Kind of address (`work`, `home`, ...)
    #[serde(rename = "type", default)]
    pub email_type: Option<String>,
    /// The address
    #[serde(default)]
    pub value: Option<String>,
}

/// A user provisioned from a directory
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirectoryUser {
    /// Object type, always `directory_user`
    #[serde(rename = "object", default)]
    pub obj: String,
    /// Unique identifier of the user
    pub id: String,
    /// Directory the user belongs to
    pub directory_id: String,
    /// Organization of the directory
    #[serde(default)]
    pub organization_id: Option<String>,
    /// Identifier of the user at the provider
    #[serde(default)]
    pub idp_id: String,
    /// Username
    #[serde(default)]
    pub username: Option<String>,
    /// First name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default)]
    pub last_name: Option<String>,
    /// Email addresses
    #[serde(default, deserialize_with = "deserialize_null_as_empty_vec")]
    pub emails: Vec<DirectoryUserEmail>,
    /// Groups the user is a member of
    #[serde(default, deserialize_with = "deserialize_null_as_empty_vec")]
    pub groups: Vec<DirectoryGroup>,
    /// State of the user
    pub state: DirectoryUserState,
    /// Attributes mapped through custom attribute mappings
    #[serde(default)]
    pub custom_attributes: HashMap<String, serde_json::Value>,
    /// Attributes as sent by the provider
    #[serde(default)]
    pub raw_attributes: HashMap<String, serde_json::Value>,
}

/// Deserializes an explicit `null` as an empty vector
fn deserialize_null_as_empty_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

impl DirectoryUser {
    /// The primary email address, if any
    pub fn primary_email(&self) -> Option<&str> {
        self.emails
            .iter()
            .find(|email| email.primary == Some(true))
            .and_then(|email| email.value.as_deref())
    }
}

/// A page of directory users
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirectoryUserList {
    /// Users of the page
    pub data: Vec<DirectoryUser>,
    /// Cursors for the neighbouring pages
    #[serde(default)]
    pub list_metadata: ListMetadata,
}

/// A group provisioned from a directory
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirectoryGroup {
    /// Object type, always `directory_group`
    #[serde(rename = "object", default)]
    pub obj: String,
    /// Unique identifier of the group
    pub id: String,
    /// Identifier of the group at the provider
    #[serde(default)]
    pub idp_id: String,
    /// Directory the group belongs to
    #[serde(default)]
    pub directory_id: String,
    /// Organization of the directory
    #[serde(default)]
    pub organization_id: Option<String>,
    /// Group name
    pub name: String,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: String,
    /// Attributes as sent by the provider
    #[serde(default)]
    pub raw_attributes: HashMap<String, serde_json::Value>,
}

/// A page of directory groups
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirectoryGroupList {
    /// Groups of the page
    pub data: Vec<DirectoryGroup>,
    /// Cursors for the neighbouring pages
    #[serde(default)]
    pub list_metadata: ListMetadata,
}
