use crate::error::AppError;
use crate::model::options::{
    ListDirectoriesOptions, ListDirectoryGroupsOptions, ListDirectoryUsersOptions,
};
use crate::presentation::directory_sync::{
    Directory, DirectoryGroup, DirectoryGroupList, DirectoryList, DirectoryUser,
    DirectoryUserList,
};
use async_trait::async_trait;

/// Interface for the Directory Sync service
#[async_trait]
pub trait DirectorySyncService: Send + Sync {
    /// Lists directories
    async fn list_directories(
        &self,
        options: &ListDirectoriesOptions,
    ) -> Result<DirectoryList, AppError>;

    /// Gets a directory by id
    async fn get_directory(&self, id: &str) -> Result<Directory, AppError>;

    /// Deletes a directory
    async fn delete_directory(&self, id: &str) -> Result<(), AppError>;

    /// Lists the users of a directory or the members of a group
    async fn list_directory_users(
        &self,
        options: &ListDirectoryUsersOptions,
    ) -> Result<DirectoryUserList, AppError>;

    /// Gets a directory user by id
    async fn get_directory_user(&self, id: &str) -> Result<DirectoryUser, AppError>;

    /// Lists the groups of a directory or of a user
    async fn list_directory_groups(
        &self,
        options: &ListDirectoryGroupsOptions,
    ) -> Result<DirectoryGroupList, AppError>;

    /// Gets a directory group by id
    async fn get_directory_group(&self, id: &str) -> Result<DirectoryGroup, AppError>;
}
