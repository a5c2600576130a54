//! Integration tests for the remote collection client against a mock
//! HTTP server.

mod common;

use common::{leads_payload, mount_list, test_auth, users_payload, TEST_TOKEN};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use opsdesk::adapters::ReqwestHttpClient;
use opsdesk::api::{CollectionClient, Resource};
use opsdesk::error::DeskError;

fn client(server: &MockServer) -> CollectionClient<ReqwestHttpClient> {
    CollectionClient::new(&server.uri(), ReqwestHttpClient::new())
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_list_users_unwraps_envelope() {
    let server = MockServer::start().await;
    mount_list(&server, "/auth/users/user-data", users_payload()).await;

    let records = client(&server)
        .list(Resource::Users, &test_auth())
        .await
        .unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].get_str("username"), Some("ada"));
    assert_eq!(records[2].get_str("status"), Some("suspended"));
}

#[tokio::test]
async fn test_list_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/users/leads-details"))
        .and(header("Authorization", format!("Bearer {}", TEST_TOKEN)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"leadsData": []})))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .list(Resource::Leads, &test_auth())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_list_missing_envelope_key_is_empty() {
    let server = MockServer::start().await;
    mount_list(
        &server,
        "/auth/users/projects-details",
        json!({"unrelated": 42}),
    )
    .await;

    let records = client(&server)
        .list(Resource::Projects, &test_auth())
        .await
        .unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_list_assigns_ids_to_records_without_one() {
    let server = MockServer::start().await;
    mount_list(&server, "/auth/users/leads-details", leads_payload()).await;

    let records = client(&server)
        .list(Resource::Leads, &test_auth())
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id().as_deref(), Some("l1"));
    // The incomplete lead got a synthetic id.
    let synthetic = records[1].id().expect("id was assigned");
    assert!(!synthetic.is_empty());
    assert_ne!(synthetic, "l1");
}

#[tokio::test]
async fn test_list_unauthorized_surfaces_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/users/user-data"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"msg": "Token is not valid"})),
        )
        .mount(&server)
        .await;

    let err = client(&server)
        .list(Resource::Users, &test_auth())
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Token is not valid");
    assert!(err.requires_signin());
}

#[tokio::test]
async fn test_list_server_error_is_retryable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/users/user-data"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client(&server)
        .list(Resource::Users, &test_auth())
        .await
        .unwrap_err();
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_list_makes_exactly_one_attempt() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/users/user-data"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server).list(Resource::Users, &test_auth()).await;
    assert!(result.is_err());
    // MockServer verifies expect(1) on drop.
}

// ============================================================================
// Mutations
// ============================================================================

#[tokio::test]
async fn test_update_puts_full_payload() {
    let server = MockServer::start().await;
    let body = json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "role": "admin",
        "status": "active"
    });
    Mock::given(method("PUT"))
        .and(path("/auth/users/user-data/u1"))
        .and(header("Authorization", format!("Bearer {}", TEST_TOKEN)))
        .and(body_json(&body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"msg": "updated"})))
        .expect(1)
        .mount(&server)
        .await;

    let patch = body.as_object().unwrap().clone();
    client(&server)
        .update(Resource::Users, "u1", &patch, &test_auth())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_failure_keeps_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/auth/users/user-data/u1"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"msg": "Email already in use"})),
        )
        .mount(&server)
        .await;

    let patch = json!({"name": "x", "email": "x@x.com", "role": "user", "status": "active"});
    let err = client(&server)
        .update(
            Resource::Users,
            "u1",
            patch.as_object().unwrap(),
            &test_auth(),
        )
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Email already in use");
}

#[tokio::test]
async fn test_delete_hits_delete_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/auth/users/delete-user/u2"))
        .and(header("Authorization", format!("Bearer {}", TEST_TOKEN)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"msg": "deleted"})))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .delete(Resource::Users, "u2", &test_auth())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_mutations_rejected_for_read_only_resources() {
    let server = MockServer::start().await;
    let patch = json!({"name": "x"});

    let err = client(&server)
        .update(
            Resource::Leads,
            "l1",
            patch.as_object().unwrap(),
            &test_auth(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DeskError::Config(_)));

    let err = client(&server)
        .delete(Resource::Projects, "p1", &test_auth())
        .await
        .unwrap_err();
    assert!(matches!(err, DeskError::Config(_)));
}
