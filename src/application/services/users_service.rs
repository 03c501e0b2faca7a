/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::interfaces::users::UsersService;
use crate::error::AppError;
use crate::model::http::decode_body;
use crate::model::options::{
    AddUserToOrganizationOptions, AuthenticateWithCodeOptions, AuthenticateWithMagicAuthOptions,
    AuthenticateWithPasswordOptions, CompletePasswordResetOptions,
    CreatePasswordResetChallengeOptions, CreateUserOptions, ListUsersOptions,
    RemoveUserFromOrganizationOptions, SendMagicAuthCodeOptions, UpdateUserPasswordOptions,
    VerifyEmailCodeOptions,
};
use crate::model::requests::RequestConfig;
use crate::presentation::user::{
    AuthenticationResponse, PasswordResetChallenge, User, UserList,
};
use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info};

const AUTHENTICATE_PATH: &str = "/users/authenticate";

impl Client {
    async fn post_user<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<User, AppError> {
        let config = RequestConfig::new().with_data(body)?;
        self.http_client().post(path, Some(&config)).await
    }

    async fn authenticate<B: Serialize + Sync>(
        &self,
        body: &B,
    ) -> Result<AuthenticationResponse, AppError> {
        let config = RequestConfig::new().with_data(body)?;
        let response: AuthenticationResponse = self
            .http_client()
            .post(AUTHENTICATE_PATH, Some(&config))
            .await?;
        debug!("User authenticated: {}", response.user.id);
        Ok(response)
    }

    fn client_secret(&self) -> String {
        self.config().api_key.clone()
    }
}

#[async_trait]
impl UsersService for Client {
    async fn create_user(&self, options: &CreateUserOptions) -> Result<User, AppError> {
        info!("Creating user");
        let user = self.post_user("/users", options).await?;
        debug!("User created: {}", user.id);
        Ok(user)
    }

    async fn get_user(&self, id: &str) -> Result<User, AppError> {
        debug!("Getting user: {}", id);
        self.http_client().get(&format!("/users/{id}"), None).await
    }

    async fn list_users(&self, options: &ListUsersOptions) -> Result<UserList, AppError> {
        let config = RequestConfig::new().with_params(options.to_params());
        let list: UserList = self.http_client().get("/users", Some(&config)).await?;
        debug!("Users obtained: {}", list.data.len());
        Ok(list)
    }

    async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        info!("Deleting user: {}", id);
        self.http_client()
            .delete(&format!("/users/{id}"), None)
            .await?;
        Ok(())
    }

    async fn add_user_to_organization(
        &self,
        options: &AddUserToOrganizationOptions,
    ) -> Result<User, AppError> {
        info!(
            "Adding user {} to organization {}",
            options.user_id, options.organization_id
        );
        self.post_user(&format!("/users/{}/organizations", options.user_id), options)
            .await
    }

    async fn remove_user_from_organization(
        &self,
        options: &RemoveUserFromOrganizationOptions,
    ) -> Result<User, AppError> {
        info!(
            "Removing user {} from organization {}",
            options.user_id, options.organization_id
        );
        let path = format!(
            "/users/{}/organizations/{}",
            options.user_id, options.organization_id
        );
        let body = self.http_client().delete(&path, None).await?;
        decode_body(&path, &body)
    }

    async fn create_password_reset_challenge(
        &self,
        options: &CreatePasswordResetChallengeOptions,
    ) -> Result<PasswordResetChallenge, AppError> {
        info!("Creating password reset challenge");
        let config = RequestConfig::new().with_data(options)?;
        self.http_client()
            .post("/users/password_reset_challenge", Some(&config))
            .await
    }

    async fn complete_password_reset(
        &self,
        options: &CompletePasswordResetOptions,
    ) -> Result<User, AppError> {
        info!("Completing password reset");
        self.post_user("/users/password_reset", options).await
    }

    async fn update_user_password(
        &self,
        options: &UpdateUserPasswordOptions,
    ) -> Result<User, AppError> {
        info!("Updating password of user {}", options.user_id);
        let config = RequestConfig::new().with_data(options)?;
        self.http_client()
            .put(&format!("/users/{}/password", options.user_id), Some(&config))
            .await
    }

    async fn authenticate_with_password(
        &self,
        options: &AuthenticateWithPasswordOptions,
    ) -> Result<AuthenticationResponse, AppError> {
        info!("Authenticating user with password");
        let mut body = options.clone();
        body.client_secret = Some(self.client_secret());
        self.authenticate(&body).await
    }

    async fn authenticate_with_code(
        &self,
        options: &AuthenticateWithCodeOptions,
    ) -> Result<AuthenticationResponse, AppError> {
        info!("Authenticating user with code");
        let mut body = options.clone();
        body.client_secret = Some(self.client_secret());
        self.authenticate(&body).await
    }

    async fn authenticate_with_magic_auth(
        &self,
        options: &AuthenticateWithMagicAuthOptions,
    ) -> Result<AuthenticationResponse, AppError> {
        info!("Authenticating user with magic auth");
        let mut body = options.clone();
        body.client_secret = Some(self.client_secret());
        self.authenticate(&body).await
    }

    async fn send_magic_auth_code(
        &self,
        options: &SendMagicAuthCodeOptions,
    ) -> Result<User, AppError> {
        info!("Sending magic auth code");
        self.post_user("/users/magic_auth/send", options).await
    }

    async fn send_verification_email(&self, user_id: &str) -> Result<User, AppError> {
        info!("Sending verification email to user {}", user_id);
        self.http_client()
            .post(&format!("/users/{user_id}/send_verification_email"), None)
            .await
    }

    async fn verify_email_code(&self, options: &VerifyEmailCodeOptions) -> Result<User, AppError> {
        info!("Verifying email of user {}", options.user_id);
        self.post_user(
            &format!("/users/{}/verify_email_code", options.user_id),
            options,
        )
        .await
    }
}
