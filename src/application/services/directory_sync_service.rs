use crate::application::client::Client;
use crate::application::interfaces::directory_sync::DirectorySyncService;
use crate::error::AppError;
use crate::model::options::{
    ListDirectoriesOptions, ListDirectoryGroupsOptions, ListDirectoryUsersOptions,
};
use crate::model::requests::RequestConfig;
use crate::presentation::directory_sync::{
    Directory, DirectoryGroup, DirectoryGroupList, DirectoryList, DirectoryUser,
    DirectoryUserList,
};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl DirectorySyncService for Client {
    async fn list_directories(
        &self,
        options: &ListDirectoriesOptions,
    ) -> Result<DirectoryList, AppError> {
        let config = RequestConfig::new().with_params(options.to_params());
        let list: DirectoryList = self.http_client().get("/directories", Some(&config)).await?;
        debug!("Directories obtained: {}", list.data.len());
        Ok(list)
    }

    async fn get_directory(&self, id: &str) -> Result<Directory, AppError> {
        debug!("Getting directory: {}", id);
        self.http_client()
            .get(&format!("/directories/{id}"), None)
            .await
    }

    async fn delete_directory(&self, id: &str) -> Result<(), AppError> {
        info!("Deleting directory: {}", id);
        self.http_client()
            .delete(&format!("/directories/{id}"), None)
            .await?;
        Ok(())
    }

    async fn list_directory_users(
        &self,
        options: &ListDirectoryUsersOptions,
    ) -> Result<DirectoryUserList, AppError> {
        let config = RequestConfig::new().with_params(options.to_params()?);
        let list: DirectoryUserList = self
            .http_client()
            .get("/directory_users", Some(&config))
            .await?;
        debug!("Directory users obtained: {}", list.data.len());
        Ok(list)
    }

    async fn get_directory_user(&self, id: &str) -> Result<DirectoryUser, AppError> {
        self.http_client()
            .get(&format!("/directory_users/{id}"), None)
            .await
    }

    async fn list_directory_groups(
        &self,
        options: &ListDirectoryGroupsOptions,
    ) -> Result<DirectoryGroupList, AppError> {
        let config = RequestConfig::new().with_params(options.to_params()?);
        let list: DirectoryGroupList = self
            .http_client()
            .get("/directory_groups", Some(&config))
            .await?;
        debug!("Directory groups obtained: {}", list.data.len());
        Ok(list)
    }

    async fn get_directory_group(&self, id: &str) -> Result<DirectoryGroup, AppError> {
        self.http_client()
            .get(&format!("/directory_groups/{id}"), None)
            .await
    }
}
