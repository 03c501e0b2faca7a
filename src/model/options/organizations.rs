use crate::error::AppError;
use crate::model::options::require;
use crate::model::requests::{PaginationParams, QueryParams};
use serde::{Deserialize, Serialize};

/// Parameters for creating an organization
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateOrganizationOptions {
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether profiles outside the organization's domains may sign in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_profiles_outside_organization: Option<bool>,
    /// Domains owned by the organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domains: Option<Vec<String>>,
}

impl CreateOrganizationOptions {
    /// Creates empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Allow or refuse profiles outside the organization
    pub fn with_allow_profiles_outside_organization(mut self, allow: bool) -> Self {
        self.allow_profiles_outside_organization = Some(allow);
        self
    }

    /// Set the domains
    pub fn with_domains<S: Into<String>>(mut self, domains: impl IntoIterator<Item = S>) -> Self {
        self.domains = Some(domains.into_iter().map(Into::into).collect());
        self
    }
}

/// Parameters for updating an organization
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateOrganizationOptions {
    /// Display name
    pub name: String,
    /// Whether profiles outside the organization's domains may sign in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_profiles_outside_organization: Option<bool>,
    /// Domains owned by the organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domains: Option<Vec<String>>,
}

impl UpdateOrganizationOptions {
    /// Creates update options; the name is required by the API
    pub fn new(name: impl Into<String>) -> Result<Self, AppError> {
        let name = name.into();
        require(&name, "Organization name is required")?;
        Ok(Self {
            name,
            allow_profiles_outside_organization: None,
            domains: None,
        })
    }

    /// Allow or refuse profiles outside the organization
    pub fn with_allow_profiles_outside_organization(mut self, allow: bool) -> Self {
        self.allow_profiles_outside_organization = Some(allow);
        self
    }

    /// Set the domains
    pub fn with_domains<S: Into<String>>(mut self, domains: impl IntoIterator<Item = S>) -> Self {
        self.domains = Some(domains.into_iter().map(Into::into).collect());
        self
    }
}

/// Parameters for listing organizations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOrganizationsOptions {
    /// Only return organizations owning one of these domains
    pub domains: Option<Vec<String>>,
    /// Cursor pagination
    pub pagination: PaginationParams,
}

impl ListOrganizationsOptions {
    /// Creates options listing every organization
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by domains
    pub fn with_domains<S: Into<String>>(mut self, domains: impl IntoIterator<Item = S>) -> Self {
        self.domains = Some(domains.into_iter().map(Into::into).collect());
        self
    }

    /// Set the pagination
    pub fn with_pagination(mut self, pagination: PaginationParams) -> Self {
        self.pagination = pagination;
        self
    }

    /// Query parameters: pagination first, then the comma joined domains
    pub fn to_params(&self) -> QueryParams {
        let mut params = self.pagination.clone();
        if let Some(domains) = &self.domains {
            params.set("domains", domains.join(","));
        }
        params.into_params()
    }
}
