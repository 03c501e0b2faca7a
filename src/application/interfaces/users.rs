use crate::error::AppError;
use crate::model::options::{
    AddUserToOrganizationOptions, AuthenticateWithCodeOptions, AuthenticateWithMagicAuthOptions,
    AuthenticateWithPasswordOptions, CompletePasswordResetOptions,
    CreatePasswordResetChallengeOptions, CreateUserOptions, ListUsersOptions,
    RemoveUserFromOrganizationOptions, SendMagicAuthCodeOptions, UpdateUserPasswordOptions,
    VerifyEmailCodeOptions,
};
use crate::presentation::user::{
    AuthenticationResponse, PasswordResetChallenge, User, UserList,
};
use async_trait::async_trait;

/// Interface for the user management service
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Creates a user
    async fn create_user(&self, options: &CreateUserOptions) -> Result<User, AppError>;

    /// Gets a user by id
    async fn get_user(&self, id: &str) -> Result<User, AppError>;

    /// Lists users
    async fn list_users(&self, options: &ListUsersOptions) -> Result<UserList, AppError>;

    /// Deletes a user
    async fn delete_user(&self, id: &str) -> Result<(), AppError>;

    /// Adds a user to an organization
    async fn add_user_to_organization(
        &self,
        options: &AddUserToOrganizationOptions,
    ) -> Result<User, AppError>;

    /// Removes a user from an organization
    async fn remove_user_from_organization(
        &self,
        options: &RemoveUserFromOrganizationOptions,
    ) -> Result<User, AppError>;

    /// Starts a password reset and returns the token sent to the user
    async fn create_password_reset_challenge(
        &self,
        options: &CreatePasswordResetChallengeOptions,
    ) -> Result<PasswordResetChallenge, AppError>;

    /// Sets a new password from a reset token
    async fn complete_password_reset(
        &self,
        options: &CompletePasswordResetOptions,
    ) -> Result<User, AppError>;

    /// Sets a user's password directly
    async fn update_user_password(
        &self,
        options: &UpdateUserPasswordOptions,
    ) -> Result<User, AppError>;

    /// Authenticates a user with email and password
    async fn authenticate_with_password(
        &self,
        options: &AuthenticateWithPasswordOptions,
    ) -> Result<AuthenticationResponse, AppError>;

    /// Authenticates a user with an authorization code
    async fn authenticate_with_code(
        &self,
        options: &AuthenticateWithCodeOptions,
    ) -> Result<AuthenticationResponse, AppError>;

    /// Authenticates a user with a magic auth code
    async fn authenticate_with_magic_auth(
        &self,
        options: &AuthenticateWithMagicAuthOptions,
    ) -> Result<AuthenticationResponse, AppError>;

    /// Emails a magic auth code to a user
    async fn send_magic_auth_code(
        &self,
        options: &SendMagicAuthCodeOptions,
    ) -> Result<User, AppError>;

    /// Emails a verification code to a user
    async fn send_verification_email(&self, user_id: &str) -> Result<User, AppError>;

    /// Verifies a user's email with the code they received
    async fn verify_email_code(&self, options: &VerifyEmailCodeOptions) -> Result<User, AppError>;
}
