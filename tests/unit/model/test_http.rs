use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use workos_client::config::Config;
use workos_client::error::AppError;
use workos_client::model::http::{
    HttpClient, RawResponse, build_headers, build_url, classify_response, decode_body,
};
use workos_client::model::requests::{ExtraHeaders, QueryParams};

fn base() -> Url {
    Url::parse("https://api.workos.com").unwrap()
}

fn raw(status: StatusCode, body: &str, request_id: Option<&str>) -> RawResponse {
    let mut headers = HeaderMap::new();
    if let Some(id) = request_id {
        headers.insert("X-Request-ID", HeaderValue::from_str(id).unwrap());
    }
    RawResponse {
        status,
        headers,
        body: body.to_string(),
    }
}

#[test]
fn test_build_url_without_params_has_no_query() {
    let url = build_url(&base(), "/organizations", None);
    assert_eq!(url.as_str(), "https://api.workos.com/organizations");

    let empty = QueryParams::new();
    let url = build_url(&base(), "/organizations", Some(&empty));
    assert_eq!(url.as_str(), "https://api.workos.com/organizations");
}

#[test]
fn test_build_url_adds_missing_slash() {
    let url = build_url(&base(), "connections/conn_1", None);
    assert_eq!(url.as_str(), "https://api.workos.com/connections/conn_1");
}

#[test]
fn test_build_url_encodes_params_in_order() {
    let params = QueryParams::new()
        .with("redirect_uri", "http://localhost:8080/redirect")
        .with("domains", "a.com,b.com")
        .with("search", "acme corp");
    let url = build_url(&base(), "/organizations", Some(&params));
    assert_eq!(
        url.as_str(),
        "https://api.workos.com/organizations?redirect_uri=http%3A%2F%2Flocalhost%3A8080%2Fredirect&domains=a.com%2Cb.com&search=acme+corp"
    );
}

#[test]
fn test_build_url_encodes_question_mark_in_path() {
    let url = build_url(&base(), "/organizations/org_1?limit=1", None);
    assert_eq!(url.path(), "/organizations/org_1%3Flimit=1");
    assert_eq!(url.query(), None);

    let params = QueryParams::new().with("b", "2");
    let url = build_url(&base(), "/things?a=1", Some(&params));
    assert_eq!(url.as_str(), "https://api.workos.com/things%3Fa=1?b=2");
}

#[test]
fn test_build_headers_defaults() {
    let headers = build_headers("sk_test", "workos-rust/test", None).unwrap();
    assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer sk_test");
    assert_eq!(headers.get(USER_AGENT).unwrap(), "workos-rust/test");
    assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    assert!(headers.get(AUTHORIZATION).unwrap().is_sensitive());
}

#[test]
fn test_build_headers_extra_replace_defaults() {
    let extra = ExtraHeaders::new()
        .with("Authorization", "Bearer access_token")
        .with("Idempotency-Key", "key_1");
    let headers = build_headers("sk_test", "ua", Some(&extra)).unwrap();
    assert_eq!(headers.get_all(AUTHORIZATION).iter().count(), 1);
    assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer access_token");
    assert_eq!(headers.get("idempotency-key").unwrap(), "key_1");
}

#[test]
fn test_build_headers_invalid_name() {
    let extra = ExtraHeaders::new().with("bad header", "x");
    assert!(matches!(
        build_headers("sk_test", "ua", Some(&extra)),
        Err(AppError::InvalidInput(_))
    ));
}

#[test]
fn test_classify_success_statuses() {
    let body = classify_response("/x", raw(StatusCode::OK, "{\"a\":1}", None)).unwrap();
    assert_eq!(body, "{\"a\":1}");
    let body = classify_response("/x", raw(StatusCode::FOUND, "", None)).unwrap();
    assert_eq!(body, "");
}

#[test]
fn test_classify_unauthorized() {
    let response = raw(
        StatusCode::UNAUTHORIZED,
        r#"{"message":"bad key"}"#,
        Some("req_401"),
    );
    match classify_response("/connections/conn_1", response) {
        Err(AppError::Unauthorized {
            message,
            request_id,
        }) => {
            assert_eq!(message.as_deref(), Some("bad key"));
            assert_eq!(request_id.as_deref(), Some("req_401"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_classify_unauthorized_without_body() {
    match classify_response("/x", raw(StatusCode::UNAUTHORIZED, "", None)) {
        Err(AppError::Unauthorized {
            message,
            request_id,
        }) => {
            assert_eq!(message, None);
            assert_eq!(request_id, None);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_classify_not_found_uses_path() {
    let response = raw(StatusCode::NOT_FOUND, r#"{"message":"Not Found"}"#, Some("req_404"));
    match classify_response("/organizations/org_missing", response) {
        Err(AppError::NotFound { path, request_id }) => {
            assert_eq!(path, "/organizations/org_missing");
            assert_eq!(request_id.as_deref(), Some("req_404"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_classify_unprocessable_entity() {
    let body = r#"{"message":"Validation failed","errors":[{"field":"email","code":"invalid_email"}]}"#;
    match classify_response("/users", raw(StatusCode::UNPROCESSABLE_ENTITY, body, None)) {
        Err(AppError::UnprocessableEntity { message, errors, .. }) => {
            assert_eq!(message.as_deref(), Some("Validation failed"));
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field.as_deref(), Some("email"));
            assert_eq!(errors[0].code.as_deref(), Some("invalid_email"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_classify_other_statuses_are_generic() {
    for status in [
        StatusCode::BAD_REQUEST,
        StatusCode::FORBIDDEN,
        StatusCode::INTERNAL_SERVER_ERROR,
    ] {
        match classify_response("/x", raw(status, "upstream exploded", None)) {
            Err(AppError::GenericServer {
                message,
                status: got,
                ..
            }) => {
                assert_eq!(got, status);
                assert_eq!(message.as_deref(), Some("upstream exploded"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
struct Thing {
    id: String,
}

#[test]
fn test_decode_body_ignores_unknown_fields() {
    let thing: Thing = decode_body("/things/1", r#"{"id":"t_1","extra":true}"#).unwrap();
    assert_eq!(thing, Thing { id: "t_1".to_string() });
}

#[test]
fn test_decode_body_empty_is_an_error() {
    for body in ["", "  \n"] {
        match decode_body::<Thing>("/sso/profile", body) {
            Err(AppError::EmptyResponse { path }) => assert_eq!(path, "/sso/profile"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}

#[test]
fn test_decode_body_wrong_shape() {
    assert!(matches!(
        decode_body::<Thing>("/things/1", r#"{"name":"x"}"#),
        Err(AppError::Json(_))
    ));
}

#[test]
fn test_http_client_base_url_is_fixed_at_construction() {
    let config = Config::new("sk_test")
        .unwrap()
        .with_hostname("localhost")
        .with_https(false)
        .with_port(8081);
    let client = HttpClient::new(config).unwrap();
    assert_eq!(client.base_url().as_str(), "http://localhost:8081/");
    assert_eq!(client.config().api_key, "sk_test");
}

#[test]
fn test_http_client_rejects_invalid_config() {
    let mut config = Config::new("sk_test").unwrap();
    config.api_key = String::new();
    assert!(matches!(
        HttpClient::new(config),
        Err(AppError::InvalidConfiguration(_))
    ));
}
