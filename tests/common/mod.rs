//! Common test utilities for integration tests.
//!
//! Provides canned backend payloads, test credentials, and wiremock
//! helpers shared across the integration suites.

#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use opsdesk::auth::{AuthContext, CurrentUser};

/// The bearer token used by [`test_auth`].
pub const TEST_TOKEN: &str = "test-token-12345";

/// A signed-in context for authenticated calls.
pub fn test_auth() -> AuthContext {
    AuthContext::new(CurrentUser {
        token: TEST_TOKEN.to_string(),
        name: Some("Ada Admin".to_string()),
        email: Some("ada@example.com".to_string()),
        role: Some("admin".to_string()),
    })
    .expect("test token is non-empty")
}

/// Three users as the backend's user-data endpoint returns them.
pub fn users_payload() -> Value {
    json!({
        "users": [
            {
                "_id": "u1",
                "username": "ada",
                "name": "Ada Admin",
                "email": "ada@example.com",
                "role": "admin",
                "status": "active"
            },
            {
                "_id": "u2",
                "username": "bo",
                "name": "Bo Editor",
                "email": "bo@example.com",
                "role": "editor",
                "status": "inactive"
            },
            {
                "_id": "u3",
                "username": "cy",
                "name": "Cy User",
                "email": "cy@example.com",
                "role": "user",
                "status": "suspended"
            }
        ]
    })
}

/// Leads with the gaps the real scraper output has: missing names,
/// vendors, and ids.
pub fn leads_payload() -> Value {
    json!({
        "leadsData": [
            {
                "_id": "l1",
                "storeName": "Corner Cafe",
                "vendorId": "v-9",
                "phone": "555-0101",
                "stars": "4.5",
                "projectCategory": "food",
                "city": "Lisbon"
            },
            {
                "phone": "555-0102",
                "city": "Porto"
            }
        ]
    })
}

/// Mount a successful list endpoint for one resource.
pub async fn mount_list(server: &MockServer, list_path: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(list_path))
        .and(header("Authorization", format!("Bearer {}", TEST_TOKEN)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
