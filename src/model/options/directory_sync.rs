use crate::error::AppError;
use crate::model::requests::{PaginationParams, QueryParams};

/// Parameters for listing directories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDirectoriesOptions {
    /// Only return directories of this domain
    pub domain: Option<String>,
    /// Only return directories whose name matches
    pub search: Option<String>,
    /// Only return directories of this organization
    pub organization_id: Option<String>,
    /// Cursor pagination
    pub pagination: PaginationParams,
}

impl ListDirectoriesOptions {
    /// Creates options listing every directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by domain
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Filter by name
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Filter by organization
    pub fn with_organization_id(mut self, organization_id: impl Into<String>) -> Self {
        self.organization_id = Some(organization_id.into());
        self
    }

    /// Set the pagination
    pub fn with_pagination(mut self, pagination: PaginationParams) -> Self {
        self.pagination = pagination;
        self
    }

    /// Query parameters: pagination first, then the filters
    pub fn to_params(&self) -> QueryParams {
        let mut params = self.pagination.clone();
        if let Some(domain) = &self.domain {
            params.set("domain", domain.as_str());
        }
        if let Some(search) = &self.search {
            params.set("search", search.as_str());
        }
        if let Some(organization_id) = &self.organization_id {
            params.set("organization_id", organization_id.as_str());
        }
        params.into_params()
    }
}

/// Parameters for listing directory users
///
/// The API needs a directory or a group to scope the listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDirectoryUsersOptions {
    /// Directory to list the users of
    pub directory: Option<String>,
    /// Group to list the members of
    pub group: Option<String>,
    /// Cursor pagination
    pub pagination: PaginationParams,
}

impl ListDirectoryUsersOptions {
    /// Lists the users of a directory
    pub fn for_directory(directory_id: impl Into<String>) -> Self {
        Self {
            directory: Some(directory_id.into()),
            ..Self::default()
        }
    }

    /// Lists the members of a group
    pub fn for_group(group_id: impl Into<String>) -> Self {
        Self {
            group: Some(group_id.into()),
            ..Self::default()
        }
    }

    /// Set the pagination
    pub fn with_pagination(mut self, pagination: PaginationParams) -> Self {
        self.pagination = pagination;
        self
    }

    /// Query parameters: pagination first, then the scope
    pub fn to_params(&self) -> Result<QueryParams, AppError> {
        scoped_params(&self.pagination, ("directory", &self.directory), ("group", &self.group))
    }
}

/// Parameters for listing directory groups
///
/// The API needs a directory or a user to scope the listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDirectoryGroupsOptions {
    /// Directory to list the groups of
    pub directory: Option<String>,
    /// User to list the groups of
    pub user: Option<String>,
    /// Cursor pagination
    pub pagination: PaginationParams,
}

impl ListDirectoryGroupsOptions {
    /// Lists the groups of a directory
    pub fn for_directory(directory_id: impl Into<String>) -> Self {
        Self {
            directory: Some(directory_id.into()),
            ..Self::default()
        }
    }

    /// Lists the groups of a user
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user: Some(user_id.into()),
            ..Self::default()
        }
    }

    /// Set the pagination
    pub fn with_pagination(mut self, pagination: PaginationParams) -> Self {
        self.pagination = pagination;
        self
    }

    /// Query parameters: pagination first, then the scope
    pub fn to_params(&self) -> Result<QueryParams, AppError> {
        scoped_params(&self.pagination, ("directory", &self.directory), ("user", &self.user))
    }
}

fn scoped_params(
    pagination: &PaginationParams,
    first: (&str, &Option<String>),
    second: (&str, &Option<String>),
) -> Result<QueryParams, AppError> {
    let mut params = pagination.clone();
    let mut scoped = false;
    for (key, value) in [first, second] {
        if let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) {
            params.set(key, value);
            scoped = true;
        }
    }
    if !scoped {
        return Err(AppError::InvalidInput(format!(
            "Either {} or {} is required",
            first.0, second.0
        )));
    }
    Ok(params.into_params())
}
