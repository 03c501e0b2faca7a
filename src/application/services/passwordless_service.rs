use crate::application::client::Client;
use crate::application::interfaces::passwordless::PasswordlessService;
use crate::error::AppError;
use crate::model::options::CreatePasswordlessSessionOptions;
use crate::model::requests::RequestConfig;
use crate::presentation::passwordless::{PasswordlessSession, SendSessionResponse};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl PasswordlessService for Client {
    async fn create_session(
        &self,
        options: &CreatePasswordlessSessionOptions,
    ) -> Result<PasswordlessSession, AppError> {
        info!("Creating passwordless session");
        let config = RequestConfig::new().with_data(options)?;
        let session: PasswordlessSession = self
            .http_client()
            .post("/passwordless/sessions", Some(&config))
            .await?;
        debug!("Passwordless session created: {}", session.id);
        Ok(session)
    }

    async fn send_session(&self, session_id: &str) -> Result<SendSessionResponse, AppError> {
        info!("Sending passwordless session {}", session_id);
        self.http_client()
            .post(&format!("/passwordless/sessions/{session_id}/send"), None)
            .await
    }
}
