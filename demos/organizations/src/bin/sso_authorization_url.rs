use std::env;
use std::error::Error;
use tracing::info;
use workos_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logger();

    let client = Client::from_env()?;
    let client_id = env::var("WORKOS_CLIENT_ID")?;
    let organization = env::var("WORKOS_ORGANIZATION_ID")?;

    let url = client
        .get_authorization_url(&client_id, "http://localhost:8080/callback")
        .organization(organization)
        .state("demo")
        .build();
    info!("Send the user to: {url}");

    // Paste the `code` query parameter received on the callback
    if let Ok(code) = env::var("WORKOS_SSO_CODE") {
        let result = client.get_profile_and_token(&client_id, &code).await?;
        info!("Signed in: {}", result.profile);
    }
    Ok(())
}
