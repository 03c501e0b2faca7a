use crate::error::AppError;
use crate::model::options::{
    CreateOrganizationOptions, ListOrganizationsOptions, UpdateOrganizationOptions,
};
use crate::presentation::organization::{Organization, OrganizationList};
use async_trait::async_trait;

/// Interface for the organizations service
#[async_trait]
pub trait OrganizationsService: Send + Sync {
    /// Creates an organization
    async fn create_organization(
        &self,
        options: &CreateOrganizationOptions,
    ) -> Result<Organization, AppError>;

    /// Gets an organization by id
    async fn get_organization(&self, id: &str) -> Result<Organization, AppError>;

    /// Replaces the editable fields of an organization
    async fn update_organization(
        &self,
        id: &str,
        options: &UpdateOrganizationOptions,
    ) -> Result<Organization, AppError>;

    /// Lists organizations, optionally filtered by domains
    async fn list_organizations(
        &self,
        options: &ListOrganizationsOptions,
    ) -> Result<OrganizationList, AppError>;

    /// Deletes an organization
    async fn delete_organization(&self, id: &str) -> Result<(), AppError>;
}
