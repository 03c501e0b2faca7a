use crate::error::AppError;
use crate::model::options::{AuthorizationUrlBuilder, ListConnectionsOptions};
use crate::presentation::sso::{Connection, ConnectionList, Profile, ProfileAndToken};
use async_trait::async_trait;

/// Interface for the single sign on service
#[async_trait]
pub trait SsoService: Send + Sync {
    /// Starts building the URL a user is sent to in order to sign in
    ///
    /// Nothing is sent to the API; call `build()` on the returned builder.
    fn get_authorization_url(&self, client_id: &str, redirect_uri: &str)
    -> AuthorizationUrlBuilder;

    /// Exchanges an authorization code for the user's profile and an access token
    ///
    /// # Arguments
    /// * `client_id` - Client identifier of the application
    /// * `code` - Code received on the redirect URI
    async fn get_profile_and_token(
        &self,
        client_id: &str,
        code: &str,
    ) -> Result<ProfileAndToken, AppError>;

    /// Gets the profile bound to an access token
    async fn get_profile(&self, access_token: &str) -> Result<Profile, AppError>;

    /// Gets a connection by id
    async fn get_connection(&self, id: &str) -> Result<Connection, AppError>;

    /// Lists connections
    async fn list_connections(
        &self,
        options: &ListConnectionsOptions,
    ) -> Result<ConnectionList, AppError>;

    /// Deletes a connection
    async fn delete_connection(&self, id: &str) -> Result<(), AppError>;
}
