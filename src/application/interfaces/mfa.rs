use crate::error::AppError;
use crate::model::options::{ChallengeFactorOptions, EnrollFactorOptions, VerifyFactorOptions};
use crate::presentation::mfa::{Challenge, Factor, VerifyFactorResponse};
use async_trait::async_trait;

/// Interface for the multi factor authentication service
#[async_trait]
pub trait MfaService: Send + Sync {
    /// Enrolls a TOTP or SMS factor
    async fn enroll_factor(&self, options: &EnrollFactorOptions) -> Result<Factor, AppError>;

    /// Creates a challenge for a factor
    async fn challenge_factor(
        &self,
        options: &ChallengeFactorOptions,
    ) -> Result<Challenge, AppError>;

    /// Verifies the code entered for a challenge
    async fn verify_factor(
        &self,
        options: &VerifyFactorOptions,
    ) -> Result<VerifyFactorResponse, AppError>;

    /// Gets a factor by id
    async fn get_factor(&self, id: &str) -> Result<Factor, AppError>;

    /// Deletes a factor
    async fn delete_factor(&self, id: &str) -> Result<(), AppError>;
}
