use crate::common::mock_server;
use mockito::Matcher;
use serde_json::json;
use workos_client::prelude::*;

#[tokio::test]
async fn test_create_and_send_session() {
    let (mut server, client) = mock_server().await;
    let create = server
        .mock("POST", "/passwordless/sessions")
        .match_body(Matcher::Json(json!({
            "email": "marcelina@foo-corp.com",
            "type": "MagicLink",
            "redirect_uri": "https://example.com/cb"
        })))
        .with_status(201)
        .with_body(
            r#"{"object":"passwordless_session","id":"passwordless_session_1","email":"marcelina@foo-corp.com","expires_at":"2020-08-13T05:50:00.000Z","link":"https://auth.workos.com/passwordless/token/confirm"}"#,
        )
        .create_async()
        .await;
    let send = server
        .mock("POST", "/passwordless/sessions/passwordless_session_1/send")
        .with_body(r#"{"success":true}"#)
        .create_async()
        .await;

    let options = CreatePasswordlessSessionOptions::new("marcelina@foo-corp.com")
        .unwrap()
        .with_redirect_uri("https://example.com/cb");
    let session = client.create_session(&options).await.unwrap();
    assert_eq!(session.link, "https://auth.workos.com/passwordless/token/confirm");

    let sent = client.send_session(&session.id).await.unwrap();
    assert!(sent.success);

    create.assert_async().await;
    send.assert_async().await;
}
