/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::interfaces::organizations::OrganizationsService;
use crate::error::AppError;
use crate::model::options::{
    CreateOrganizationOptions, ListOrganizationsOptions, UpdateOrganizationOptions,
};
use crate::model::requests::RequestConfig;
use crate::presentation::organization::{Organization, OrganizationList};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl OrganizationsService for Client {
    async fn create_organization(
        &self,
        options: &CreateOrganizationOptions,
    ) -> Result<Organization, AppError> {
        info!("Creating organization");
        let config = RequestConfig::new().with_data(options)?;
        let organization: Organization = self
            .http_client()
            .post("/organizations", Some(&config))
            .await?;
        debug!("Organization created: {}", organization.id);
        Ok(organization)
    }

    async fn get_organization(&self, id: &str) -> Result<Organization, AppError> {
        debug!("Getting organization: {}", id);
        self.http_client()
            .get(&format!("/organizations/{id}"), None)
            .await
    }

    async fn update_organization(
        &self,
        id: &str,
        options: &UpdateOrganizationOptions,
    ) -> Result<Organization, AppError> {
        info!("Updating organization: {}", id);
        let config = RequestConfig::new().with_data(options)?;
        self.http_client()
            .put(&format!("/organizations/{id}"), Some(&config))
            .await
    }

    async fn list_organizations(
        &self,
        options: &ListOrganizationsOptions,
    ) -> Result<OrganizationList, AppError> {
        let config = RequestConfig::new().with_params(options.to_params());
        let list: OrganizationList = self
            .http_client()
            .get("/organizations", Some(&config))
            .await?;
        debug!("Organizations obtained: {}", list.data.len());
        Ok(list)
    }

    async fn delete_organization(&self, id: &str) -> Result<(), AppError> {
        info!("Deleting organization: {}", id);
        self.http_client()
            .delete(&format!("/organizations/{id}"), None)
            .await?;
        Ok(())
    }
}
