use std::error::Error;
use tracing::{error, info};
use workos_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logger();

    // WORKOS_API_KEY and friends come from the environment or a .env file
    let client = Client::from_env()?;
    info!("Loaded config → {}", client.http_client().base_url());

    let mut pagination = PaginationParams::new().limit(10);
    loop {
        let options = ListOrganizationsOptions::new().with_pagination(pagination.clone());
        let page = match client.list_organizations(&options).await {
            Ok(page) => page,
            Err(e) => {
                error!("Failed to list organizations: {e}");
                if let Some(request_id) = e.request_id() {
                    error!("Request id: {request_id}");
                }
                return Err(Box::new(e));
            }
        };

        for organization in &page.data {
            let domains: Vec<&str> = organization
                .domains
                .iter()
                .map(|d| d.domain.as_str())
                .collect();
            info!("{} {} [{}]", organization.id, organization.name, domains.join(", "));
        }

        match page.list_metadata.after {
            Some(after) => pagination = PaginationParams::new().limit(10).after(after),
            None => break,
        }
    }

    Ok(())
}
