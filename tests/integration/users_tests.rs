use crate::common::{API_KEY, mock_server};
use mockito::Matcher;
use serde_json::json;
use workos_client::prelude::*;

const USER: &str = r#"{
    "object": "user",
    "id": "user_1",
    "email": "marcelina@foo-corp.com",
    "first_name": "Marcelina",
    "last_name": "Davis",
    "email_verified": false,
    "created_at": "2021-06-25T19:07:33.155Z",
    "updated_at": "2021-06-25T19:07:33.155Z"
}"#;

fn auth_response() -> String {
    format!(r#"{{"user":{USER},"organization_id":"org_1"}}"#)
}

#[tokio::test]
async fn test_create_get_list_delete_user() {
    let (mut server, client) = mock_server().await;
    let create = server
        .mock("POST", "/users")
        .match_body(Matcher::Json(json!({
            "email": "marcelina@foo-corp.com",
            "password": "pw",
            "email_verified": false
        })))
        .with_status(201)
        .with_body(USER)
        .create_async()
        .await;
    server
        .mock("GET", "/users/user_1")
        .with_body(USER)
        .create_async()
        .await;
    let list = server
        .mock("GET", "/users")
        .match_query(Matcher::UrlEncoded("organization".to_string(), "org_1".to_string()))
        .with_body(format!(r#"{{"data":[{USER}],"list_metadata":{{"after":null}}}}"#))
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/users/user_1")
        .with_status(202)
        .create_async()
        .await;

    let options = CreateUserOptions::new("marcelina@foo-corp.com")
        .unwrap()
        .with_password("pw");
    assert_eq!(client.create_user(&options).await.unwrap().id, "user_1");
    assert_eq!(
        client.get_user("user_1").await.unwrap().last_name.as_deref(),
        Some("Davis")
    );
    let users = client
        .list_users(&ListUsersOptions::new().with_organization("org_1"))
        .await
        .unwrap();
    assert_eq!(users.data.len(), 1);
    client.delete_user("user_1").await.unwrap();

    create.assert_async().await;
    list.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn test_organization_membership() {
    let (mut server, client) = mock_server().await;
    let add = server
        .mock("POST", "/users/user_1/organizations")
        .match_body(Matcher::Json(json!({"organization_id": "org_1"})))
        .with_body(USER)
        .create_async()
        .await;
    let remove = server
        .mock("DELETE", "/users/user_1/organizations/org_1")
        .with_body(USER)
        .create_async()
        .await;

    let options = AddUserToOrganizationOptions::new("user_1", "org_1").unwrap();
    assert_eq!(client.add_user_to_organization(&options).await.unwrap().id, "user_1");

    let options = RemoveUserFromOrganizationOptions::new("user_1", "org_1").unwrap();
    let user = client.remove_user_from_organization(&options).await.unwrap();
    assert_eq!(user.email, "marcelina@foo-corp.com");

    add.assert_async().await;
    remove.assert_async().await;
}

#[tokio::test]
async fn test_password_reset_flow() {
    let (mut server, client) = mock_server().await;
    let challenge = server
        .mock("POST", "/users/password_reset_challenge")
        .match_body(Matcher::Json(json!({
            "email": "marcelina@foo-corp.com",
            "password_reset_url": "https://example.com/reset"
        })))
        .with_body(format!(r#"{{"token":"reset_token","user":{USER}}}"#))
        .create_async()
        .await;
    let complete = server
        .mock("POST", "/users/password_reset")
        .match_body(Matcher::Json(json!({"token": "reset_token", "new_password": "new_pw"})))
        .with_body(USER)
        .create_async()
        .await;
    let update = server
        .mock("PUT", "/users/user_1/password")
        .match_body(Matcher::Json(json!({"password": "other_pw"})))
        .with_body(USER)
        .create_async()
        .await;

    let options =
        CreatePasswordResetChallengeOptions::new("marcelina@foo-corp.com", "https://example.com/reset")
            .unwrap();
    let reset = client.create_password_reset_challenge(&options).await.unwrap();
    assert_eq!(reset.token, "reset_token");

    let options = CompletePasswordResetOptions::new(reset.token, "new_pw").unwrap();
    client.complete_password_reset(&options).await.unwrap();

    let options = UpdateUserPasswordOptions::new("user_1", "other_pw").unwrap();
    client.update_user_password(&options).await.unwrap();

    challenge.assert_async().await;
    complete.assert_async().await;
    update.assert_async().await;
}

#[tokio::test]
async fn test_authenticate_with_password_adds_client_secret() {
    let (mut server, client) = mock_server().await;
    let mock = server
        .mock("POST", "/users/authenticate")
        .match_body(Matcher::Json(json!({
            "client_id": "client_1",
            "email": "marcelina@foo-corp.com",
            "password": "pw",
            "client_secret": API_KEY,
            "grant_type": "password"
        })))
        .with_body(auth_response())
        .create_async()
        .await;

    let options =
        AuthenticateWithPasswordOptions::new("client_1", "marcelina@foo-corp.com", "pw").unwrap();
    let response = client.authenticate_with_password(&options).await.unwrap();
    assert_eq!(response.user.id, "user_1");
    assert_eq!(response.organization_id.as_deref(), Some("org_1"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_authenticate_with_code_and_magic_auth() {
    let (mut server, client) = mock_server().await;
    let code = server
        .mock("POST", "/users/authenticate")
        .match_body(Matcher::PartialJson(json!({
            "code": "code_1",
            "client_secret": API_KEY,
            "grant_type": "authorization_code",
            "user_agent": "Mozilla/5.0"
        })))
        .with_body(auth_response())
        .create_async()
        .await;
    let magic = server
        .mock("POST", "/users/authenticate")
        .match_body(Matcher::PartialJson(json!({
            "code": "123456",
            "user_id": "user_1",
            "grant_type": "urn:workos:oauth:grant-type:magic-auth:code"
        })))
        .with_body(auth_response())
        .create_async()
        .await;

    let options = AuthenticateWithCodeOptions::new("client_1", "code_1")
        .unwrap()
        .with_user_agent("Mozilla/5.0");
    client.authenticate_with_code(&options).await.unwrap();

    let options = AuthenticateWithMagicAuthOptions::new("client_1", "123456", "user_1").unwrap();
    client.authenticate_with_magic_auth(&options).await.unwrap();

    code.assert_async().await;
    magic.assert_async().await;
}

#[tokio::test]
async fn test_email_verification_and_magic_auth_code() {
    let (mut server, client) = mock_server().await;
    let magic = server
        .mock("POST", "/users/magic_auth/send")
        .match_body(Matcher::Json(json!({"email": "marcelina@foo-corp.com"})))
        .with_body(USER)
        .create_async()
        .await;
    let send = server
        .mock("POST", "/users/user_1/send_verification_email")
        .match_body(Matcher::Exact(String::new()))
        .with_body(USER)
        .create_async()
        .await;
    let verify = server
        .mock("POST", "/users/user_1/verify_email_code")
        .match_body(Matcher::Json(json!({"code": "123456"})))
        .with_body(USER)
        .create_async()
        .await;

    let options = SendMagicAuthCodeOptions::new("marcelina@foo-corp.com").unwrap();
    client.send_magic_auth_code(&options).await.unwrap();
    client.send_verification_email("user_1").await.unwrap();
    let options = VerifyEmailCodeOptions::new("user_1", "123456").unwrap();
    client.verify_email_code(&options).await.unwrap();

    magic.assert_async().await;
    send.assert_async().await;
    verify.assert_async().await;
}
