use crate::error::AppError;
use crate::model::options::GeneratePortalLinkOptions;
use crate::presentation::portal::PortalLink;
use async_trait::async_trait;

/// Interface for the Admin Portal service
#[async_trait]
pub trait PortalService: Send + Sync {
    /// Generates a short lived Admin Portal link
    async fn generate_link(
        &self,
        options: &GeneratePortalLinkOptions,
    ) -> Result<PortalLink, AppError>;
}
