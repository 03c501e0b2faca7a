use crate::application::client::Client;
use crate::application::interfaces::portal::PortalService;
use crate::error::AppError;
use crate::model::options::GeneratePortalLinkOptions;
use crate::model::requests::RequestConfig;
use crate::presentation::portal::PortalLink;
use async_trait::async_trait;
use tracing::info;

#[async_trait]
impl PortalService for Client {
    async fn generate_link(
        &self,
        options: &GeneratePortalLinkOptions,
    ) -> Result<PortalLink, AppError> {
        info!(
            "Generating portal link for organization {}",
            options.organization
        );
        let config = RequestConfig::new().with_data(options)?;
        self.http_client()
            .post("/portal/generate_link", Some(&config))
            .await
    }
}
