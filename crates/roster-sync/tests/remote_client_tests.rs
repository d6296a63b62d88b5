//! Integration tests for the remote client using wiremock

use roster_core::UserRole;
use roster_sync::{RemoteClient, RemoteFetchError};

use googletest::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn customers_body(items: serde_json::Value, next_token: serde_json::Value) -> serde_json::Value {
    json!({
        "data": {
            "listCustomers": {
                "items": items,
                "nextToken": next_token
            }
        }
    })
}

#[tokio::test]
async fn given_well_formed_response_when_fetched_then_users_decoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("listCustomers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(customers_body(
            json!([
                { "id": "1", "name": "John Doe", "email": "john@example.com", "role": "Admin" },
                { "id": "2", "name": "Alice", "email": "alice@example.com", "role": "Manager" }
            ]),
            json!(null),
        )))
        .mount(&mock_server)
        .await;

    let client = RemoteClient::new(&format!("{}/graphql", mock_server.uri()));
    let users = client.fetch_customers().await.unwrap();

    assert_that!(users.len(), eq(2));
    assert_that!(users[0].name, eq("John Doe"));
    assert_that!(users[0].role, eq(UserRole::Admin));
    assert_that!(users[1].role, eq(UserRole::Manager));
}

#[tokio::test]
async fn given_continuation_token_when_fetched_then_single_request_only() {
    let mock_server = MockServer::start().await;

    // expect(1) verifies on drop that the token was never followed
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(customers_body(
            json!([
                { "id": "1", "name": "John Doe", "email": "john@example.com", "role": "Admin" }
            ]),
            json!("opaque-continuation-token"),
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RemoteClient::new(&format!("{}/graphql", mock_server.uri()));
    let users = client.fetch_customers().await.unwrap();

    assert_that!(users.len(), eq(1));
}

#[tokio::test]
async fn given_server_error_when_fetched_then_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = RemoteClient::new(&format!("{}/graphql", mock_server.uri()));
    let result = client.fetch_customers().await;

    assert!(matches!(result, Err(RemoteFetchError::Http { .. })));
}

#[tokio::test]
async fn given_unreachable_endpoint_when_fetched_then_http_error() {
    // Nothing is listening here
    let client = RemoteClient::new("http://127.0.0.1:1/graphql");

    let result = client.fetch_customers().await;

    assert!(matches!(result, Err(RemoteFetchError::Http { .. })));
}

#[tokio::test]
async fn given_missing_data_when_fetched_then_malformed_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": null })))
        .mount(&mock_server)
        .await;

    let client = RemoteClient::new(&format!("{}/graphql", mock_server.uri()));
    let result = client.fetch_customers().await;

    assert!(matches!(result, Err(RemoteFetchError::Malformed { .. })));
}

#[tokio::test]
async fn given_query_errors_when_fetched_then_malformed_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [ { "message": "Cannot query field listCustomers" } ]
        })))
        .mount(&mock_server)
        .await;

    let client = RemoteClient::new(&format!("{}/graphql", mock_server.uri()));
    let result = client.fetch_customers().await;

    assert!(matches!(result, Err(RemoteFetchError::Malformed { .. })));
}

#[tokio::test]
async fn given_unknown_role_when_fetched_then_malformed_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(customers_body(
            json!([
                { "id": "1", "name": "John Doe", "email": "john@example.com", "role": "Owner" }
            ]),
            json!(null),
        )))
        .mount(&mock_server)
        .await;

    let client = RemoteClient::new(&format!("{}/graphql", mock_server.uri()));
    let result = client.fetch_customers().await;

    assert!(matches!(result, Err(RemoteFetchError::Malformed { .. })));
}
