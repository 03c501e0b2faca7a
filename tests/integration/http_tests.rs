use crate::common::{API_KEY, bearer, client_for, mock_server};
use mockito::Matcher;
use serde_json::{Value, json};
use tokio_test::block_on;
use workos_client::model::requests::{QueryParams, RequestConfig};
use workos_client::prelude::*;

#[tokio::test]
async fn test_default_headers_are_sent() {
    let (mut server, client) = mock_server().await;
    let mock = server
        .mock("GET", "/ping")
        .match_header("authorization", bearer().as_str())
        .match_header("content-type", "application/json")
        .match_header("user-agent", Matcher::Regex("^workos-rust/".to_string()))
        .with_status(200)
        .with_body(r#"{"ok":true}"#)
        .create_async()
        .await;

    let value: Value = client.http_client().get("/ping", None).await.unwrap();
    assert_eq!(value, json!({"ok": true}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_sends_query_params() {
    let (mut server, client) = mock_server().await;
    let mock = server
        .mock("GET", "/things")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("b".to_string(), "2".to_string()),
            Matcher::UrlEncoded("a".to_string(), "x y".to_string()),
        ]))
        .with_body("[]")
        .create_async()
        .await;

    let config = RequestConfig::new().with_params(QueryParams::new().with("b", "2").with("a", "x y"));
    let value: Value = client.http_client().get("/things", Some(&config)).await.unwrap();
    assert_eq!(value, json!([]));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_post_without_data_sends_empty_body() {
    let (mut server, client) = mock_server().await;
    let mock = server
        .mock("POST", "/things")
        .match_body(Matcher::Exact(String::new()))
        .with_status(201)
        .with_body(r#"{"id":"thing_1"}"#)
        .create_async()
        .await;

    let config = RequestConfig::new().with_params(QueryParams::new().with("ignored", "1"));
    let body = client
        .http_client()
        .post_text("/things", Some(&config))
        .await
        .unwrap();
    assert_eq!(body, r#"{"id":"thing_1"}"#);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_put_sends_json_body() {
    let (mut server, client) = mock_server().await;
    let mock = server
        .mock("PUT", "/things/thing_1")
        .match_body(Matcher::Json(json!({"name": "renamed"})))
        .with_body(r#"{"id":"thing_1","name":"renamed"}"#)
        .create_async()
        .await;

    let config = RequestConfig::new().with_json(json!({"name": "renamed"}));
    let value: Value = client
        .http_client()
        .put("/things/thing_1", Some(&config))
        .await
        .unwrap();
    assert_eq!(value["name"], "renamed");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_extra_headers_override_defaults() {
    let (mut server, client) = mock_server().await;
    let mock = server
        .mock("GET", "/things")
        .match_header("authorization", "Bearer other")
        .match_header("x-custom", "1")
        .with_body("{}")
        .create_async()
        .await;

    let config = RequestConfig::new()
        .with_header("Authorization", "Bearer other")
        .with_header("X-Custom", "1");
    let _: Value = client.http_client().get("/things", Some(&config)).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_returns_raw_body() {
    let (mut server, client) = mock_server().await;
    server
        .mock("DELETE", "/things/thing_1")
        .with_status(202)
        .with_body("accepted")
        .create_async()
        .await;

    let body = client.http_client().delete("/things/thing_1", None).await.unwrap();
    assert_eq!(body, "accepted");
}

#[tokio::test]
async fn test_delete_sends_no_body_even_with_data() {
    let (mut server, client) = mock_server().await;
    let mock = server
        .mock("DELETE", "/things/thing_1")
        .match_body(Matcher::Exact(String::new()))
        .with_status(202)
        .create_async()
        .await;

    let config = RequestConfig::new().with_json(json!({"ignored": true}));
    let body = client
        .http_client()
        .delete("/things/thing_1", Some(&config))
        .await
        .unwrap();
    assert_eq!(body, "");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unauthorized_with_request_id() {
    let (mut server, client) = mock_server().await;
    server
        .mock("DELETE", "/connections/conn_1")
        .with_status(401)
        .with_header("X-Request-ID", "req_abc")
        .with_body(r#"{"message":"bad key"}"#)
        .create_async()
        .await;

    match client.delete_connection("conn_1").await {
        Err(AppError::Unauthorized {
            message,
            request_id,
        }) => {
            assert_eq!(message.as_deref(), Some("bad key"));
            assert_eq!(request_id.as_deref(), Some("req_abc"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_not_found_reports_path() {
    let (mut server, client) = mock_server().await;
    server
        .mock("GET", "/organizations/org_missing")
        .with_status(404)
        .with_body(r#"{"message":"Not Found"}"#)
        .create_async()
        .await;

    match client.get_organization("org_missing").await {
        Err(AppError::NotFound { path, request_id }) => {
            assert_eq!(path, "/organizations/org_missing");
            assert_eq!(request_id, None);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_question_mark_in_id_stays_in_path() {
    let (mut server, client) = mock_server().await;
    let truncated = server
        .mock("GET", "/organizations/org_1")
        .with_status(200)
        .with_body(r#"{"id":"org_1","name":"Acme"}"#)
        .expect(0)
        .create_async()
        .await;
    server
        .mock("GET", Matcher::Any)
        .with_status(404)
        .create_async()
        .await;

    match client.get_organization("org_1?x=1").await {
        Err(AppError::NotFound { path, .. }) => {
            assert_eq!(path, "/organizations/org_1?x=1");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    truncated.assert_async().await;
}

#[tokio::test]
async fn test_unprocessable_entity_errors() {
    let (mut server, client) = mock_server().await;
    server
        .mock("POST", "/organizations")
        .with_status(422)
        .with_body(
            r#"{"message":"Validation failed","errors":[{"field":"domains","code":"domain_taken"}]}"#,
        )
        .create_async()
        .await;

    let options = CreateOrganizationOptions::new().with_domains(["taken.com"]);
    match client.create_organization(&options).await {
        Err(AppError::UnprocessableEntity { message, errors, .. }) => {
            assert_eq!(message.as_deref(), Some("Validation failed"));
            assert_eq!(errors[0].to_string(), "domains: domain_taken");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_generic() {
    let (mut server, client) = mock_server().await;
    server
        .mock("GET", "/organizations/org_1")
        .with_status(503)
        .with_body("Service Unavailable")
        .create_async()
        .await;

    let error = client.get_organization("org_1").await.unwrap_err();
    assert_eq!(error.status().map(|s| s.as_u16()), Some(503));
    match error {
        AppError::GenericServer { message, .. } => {
            assert_eq!(message.as_deref(), Some("Service Unavailable"))
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_success_body_is_an_error() {
    let (mut server, client) = mock_server().await;
    server
        .mock("GET", "/organizations/org_1")
        .with_status(200)
        .create_async()
        .await;

    match client.get_organization("org_1").await {
        Err(AppError::EmptyResponse { path }) => assert_eq!(path, "/organizations/org_1"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_transport_failure_is_network_error() {
    let config = Config::new(API_KEY)
        .unwrap()
        .with_hostname("127.0.0.1")
        .with_https(false)
        .with_port(1)
        .with_timeout(5);
    let client = Client::new(config).unwrap();
    assert!(matches!(
        client.get_organization("org_1").await,
        Err(AppError::Network(_))
    ));
}

#[test]
fn test_blocking_call_through_tokio_test() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/organizations/org_1")
        .with_body(r#"{"id":"org_1","name":"Foo Corp"}"#)
        .create();
    let client = client_for(&server);

    let organization = block_on(client.get_organization("org_1")).unwrap();
    assert_eq!(organization.name, "Foo Corp");
    mock.assert();
}
