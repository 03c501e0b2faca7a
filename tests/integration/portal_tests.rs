use crate::common::mock_server;
use mockito::Matcher;
use serde_json::json;
use workos_client::prelude::*;

#[tokio::test]
async fn test_generate_link() {
    let (mut server, client) = mock_server().await;
    let mock = server
        .mock("POST", "/portal/generate_link")
        .match_body(Matcher::Json(json!({"organization": "org_1", "intent": "sso"})))
        .with_status(201)
        .with_body(r#"{"link":"https://id.workos.com/portal/launch?secret=secret"}"#)
        .create_async()
        .await;

    let options = GeneratePortalLinkOptions::new("org_1", Intent::Sso).unwrap();
    let link = client.generate_link(&options).await.unwrap();
    assert_eq!(link.link, "https://id.workos.com/portal/launch?secret=secret");
    mock.assert_async().await;
}
