use crate::model::responses::ListMetadata;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// An organization
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Organization {
    /// Object type, always `organization`
    #[serde(rename = "object", default)]
    pub obj: String,
    /// Unique identifier of the organization
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Whether profiles outside the organization's domains may sign in
    #[serde(default)]
    pub allow_profiles_outside_organization: bool,
    /// Domains owned by the organization
    #[serde(default)]
    pub domains: Vec<OrganizationDomain>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: String,
}

/// A domain attached to an organization
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrganizationDomain {
    /// Object type, always `organization_domain`
    #[serde(rename = "object", default)]
    pub obj: String,
    /// Unique identifier of the domain
    pub id: String,
    /// Domain name
    pub domain: String,
}

/// A page of organizations
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrganizationList {
    /// Organizations of the page
    pub data: Vec<Organization>,
    /// Cursors for the neighbouring pages
    #[serde(default)]
    pub list_metadata: ListMetadata,
}
