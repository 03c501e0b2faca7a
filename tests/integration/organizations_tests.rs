use crate::common::{bearer, mock_server};
use assert_json_diff::assert_json_include;
use mockito::Matcher;
use serde_json::json;
use workos_client::prelude::*;

#[tokio::test]
async fn test_create_organization() {
    let (mut server, client) = mock_server().await;
    let mock = server
        .mock("POST", "/organizations")
        .match_header("authorization", bearer().as_str())
        .match_body(Matcher::Json(json!({"name": "Acme", "domains": ["acme.com"]})))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"org_1","name":"Acme","domains":[{"id":"org_domain_1","domain":"acme.com"}]}"#)
        .create_async()
        .await;

    let options = CreateOrganizationOptions::new()
        .with_name("Acme")
        .with_domains(["acme.com"]);
    let organization = client.create_organization(&options).await.unwrap();
    assert_eq!(organization.id, "org_1");
    assert_eq!(organization.name, "Acme");
    assert_eq!(organization.domains[0].domain, "acme.com");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_organization_with_name_only() {
    let (mut server, client) = mock_server().await;
    let mock = server
        .mock("POST", "/organizations")
        .match_body(Matcher::Json(json!({"name": "Acme"})))
        .with_status(201)
        .with_body(r#"{"id":"org_1","name":"Acme"}"#)
        .create_async()
        .await;

    let organization = client
        .create_organization(&CreateOrganizationOptions::new().with_name("Acme"))
        .await
        .unwrap();
    assert_eq!(organization.id, "org_1");
    assert_eq!(organization.name, "Acme");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_organization_uses_put() {
    let (mut server, client) = mock_server().await;
    let mock = server
        .mock("PUT", "/organizations/org_1")
        .match_body(Matcher::Json(json!({"name": "Acme 2"})))
        .with_body(r#"{"id":"org_1","name":"Acme 2"}"#)
        .create_async()
        .await;

    let options = UpdateOrganizationOptions::new("Acme 2").unwrap();
    let organization = client.update_organization("org_1", &options).await.unwrap();
    assert_eq!(organization.name, "Acme 2");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_organizations_with_domains_and_pagination() {
    let (mut server, client) = mock_server().await;
    let mock = server
        .mock("GET", "/organizations")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("domains".to_string(), "foo.com,bar.com".to_string()),
            Matcher::UrlEncoded("limit".to_string(), "2".to_string()),
            Matcher::UrlEncoded("order".to_string(), "asc".to_string()),
        ]))
        .with_body(
            r#"{"object":"list","data":[{"id":"org_1"},{"id":"org_2"}],"list_metadata":{"after":"org_2","before":null}}"#,
        )
        .create_async()
        .await;

    let options = ListOrganizationsOptions::new()
        .with_domains(["foo.com", "bar.com"])
        .with_pagination(PaginationParams::new().limit(2).order(Order::Asc));
    let list = client.list_organizations(&options).await.unwrap();
    assert_eq!(list.data.len(), 2);
    assert_eq!(list.list_metadata.after.as_deref(), Some("org_2"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_and_delete_organization() {
    let (mut server, client) = mock_server().await;
    let get = server
        .mock("GET", "/organizations/org_1")
        .with_body(r#"{"object":"organization","id":"org_1","name":"Foo Corp","new_field":{"x":1}}"#)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/organizations/org_1")
        .with_status(202)
        .create_async()
        .await;

    let organization = client.get_organization("org_1").await.unwrap();
    assert_json_include!(
        actual: serde_json::to_value(&organization).unwrap(),
        expected: json!({"object": "organization", "id": "org_1", "name": "Foo Corp"})
    );
    client.delete_organization("org_1").await.unwrap();
    get.assert_async().await;
    delete.assert_async().await;
}
