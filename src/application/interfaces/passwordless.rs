use crate::error::AppError;
use crate::model::options::CreatePasswordlessSessionOptions;
use crate::presentation::passwordless::{PasswordlessSession, SendSessionResponse};
use async_trait::async_trait;

/// Interface for the passwordless service
#[async_trait]
pub trait PasswordlessService: Send + Sync {
    /// Creates a magic link session
    async fn create_session(
        &self,
        options: &CreatePasswordlessSessionOptions,
    ) -> Result<PasswordlessSession, AppError>;

    /// Emails the magic link of a session to its user
    async fn send_session(&self, session_id: &str) -> Result<SendSessionResponse, AppError>;
}
