use crate::application::client::Client;
use crate::application::interfaces::mfa::MfaService;
use crate::error::AppError;
use crate::model::options::{ChallengeFactorOptions, EnrollFactorOptions, VerifyFactorOptions};
use crate::model::requests::RequestConfig;
use crate::presentation::mfa::{Challenge, Factor, VerifyFactorResponse};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl MfaService for Client {
    async fn enroll_factor(&self, options: &EnrollFactorOptions) -> Result<Factor, AppError> {
        info!("Enrolling {} factor", options.factor_type.as_str());
        let config = RequestConfig::new().with_data(options)?;
        let factor: Factor = self
            .http_client()
            .post("/auth/factors/enroll", Some(&config))
            .await?;
        debug!("Factor enrolled: {}", factor.id);
        Ok(factor)
    }

    async fn challenge_factor(
        &self,
        options: &ChallengeFactorOptions,
    ) -> Result<Challenge, AppError> {
        info!("Challenging factor {}", options.authentication_factor_id);
        let config = RequestConfig::new().with_data(options)?;
        self.http_client()
            .post("/auth/factors/challenge", Some(&config))
            .await
    }

    async fn verify_factor(
        &self,
        options: &VerifyFactorOptions,
    ) -> Result<VerifyFactorResponse, AppError> {
        info!("Verifying challenge {}", options.authentication_challenge_id);
        let config = RequestConfig::new().with_data(options)?;
        let response: VerifyFactorResponse = self
            .http_client()
            .post("/auth/factors/verify", Some(&config))
            .await?;
        debug!("Challenge valid: {}", response.valid);
        Ok(response)
    }

    async fn get_factor(&self, id: &str) -> Result<Factor, AppError> {
        self.http_client()
            .get(&format!("/auth/factors/{id}"), None)
            .await
    }

    async fn delete_factor(&self, id: &str) -> Result<(), AppError> {
        info!("Deleting factor: {}", id);
        self.http_client()
            .delete(&format!("/auth/factors/{id}"), None)
            .await?;
        Ok(())
    }
}
