use crate::application::client::Client;
use crate::application::interfaces::sso::SsoService;
use crate::error::AppError;
use crate::model::options::{AuthorizationUrlBuilder, ListConnectionsOptions, ProfileAndTokenRequest};
use crate::model::requests::RequestConfig;
use crate::presentation::sso::{Connection, ConnectionList, Profile, ProfileAndToken};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl SsoService for Client {
    fn get_authorization_url(
        &self,
        client_id: &str,
        redirect_uri: &str,
    ) -> AuthorizationUrlBuilder {
        AuthorizationUrlBuilder::new(self.http_client().base_url(), client_id, redirect_uri)
    }

    async fn get_profile_and_token(
        &self,
        client_id: &str,
        code: &str,
    ) -> Result<ProfileAndToken, AppError> {
        info!("Exchanging authorization code");
        let body = ProfileAndTokenRequest::new(client_id, self.config().api_key.as_str(), code)?;
        let config = RequestConfig::new().with_data(&body)?;
        let result: ProfileAndToken = self.http_client().post("/sso/token", Some(&config)).await?;
        debug!("Profile obtained: {}", result.profile.id);
        Ok(result)
    }

    async fn get_profile(&self, access_token: &str) -> Result<Profile, AppError> {
        // the access token replaces the API key for this call
        let config =
            RequestConfig::new().with_header("Authorization", format!("Bearer {access_token}"));
        self.http_client().get("/sso/profile", Some(&config)).await
    }

    async fn get_connection(&self, id: &str) -> Result<Connection, AppError> {
        debug!("Getting connection: {}", id);
        self.http_client()
            .get(&format!("/connections/{id}"), None)
            .await
    }

    async fn list_connections(
        &self,
        options: &ListConnectionsOptions,
    ) -> Result<ConnectionList, AppError> {
        let config = RequestConfig::new().with_params(options.to_params()?);
        let list: ConnectionList = self.http_client().get("/connections", Some(&config)).await?;
        debug!("Connections obtained: {}", list.data.len());
        Ok(list)
    }

    async fn delete_connection(&self, id: &str) -> Result<(), AppError> {
        info!("Deleting connection: {}", id);
        self.http_client()
            .delete(&format!("/connections/{id}"), None)
            .await?;
        Ok(())
    }
}
