//! Remote collection client.
//!
//! Issues authenticated read/write requests for a named collection and
//! normalizes outcomes into [`DeskResult`]. Exactly one attempt per call;
//! retries are the caller's decision. The client never mutates
//! caller-owned state.

use serde_json::{Map, Value};

use crate::api::resource::Resource;
use crate::auth::AuthContext;
use crate::error::{classify_http_error, DeskResult, NetworkError};
use crate::models::Record;
use crate::traits::{Headers, HttpClient, Response};

/// Client for the record collections served by the backend.
#[derive(Debug, Clone)]
pub struct CollectionClient<C> {
    base_url: String,
    http: C,
}

impl<C: HttpClient> CollectionClient<C> {
    /// Create a client against the given base URL.
    pub fn new(base_url: impl Into<String>, http: C) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn headers(auth: &AuthContext) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Authorization".to_string(), auth.bearer());
        headers
    }

    /// Extract the server-provided message from a failure response, with
    /// a generic fallback.
    fn failure_message(response: &Response) -> String {
        if let Ok(value) = response.json::<Value>() {
            for key in ["msg", "message", "error"] {
                if let Some(text) = value.get(key).and_then(Value::as_str) {
                    if !text.is_empty() {
                        return text.to_string();
                    }
                }
            }
        }
        match response.text() {
            Ok(text) if !text.trim().is_empty() && text.len() <= 200 => text.trim().to_string(),
            _ => format!("The server rejected the request (HTTP {}).", response.status),
        }
    }

    fn check_success(response: &Response) -> Result<(), NetworkError> {
        if response.is_success() {
            Ok(())
        } else {
            Err(NetworkError::RequestFailed {
                status: response.status,
                message: Self::failure_message(response),
            })
        }
    }

    /// Fetch all rows of a collection.
    ///
    /// Unwraps the resource's envelope key; an absent or non-array key
    /// yields an empty collection rather than an error. Rows without a
    /// stable identifier receive a synthetic one at ingestion.
    pub async fn list(&self, resource: Resource, auth: &AuthContext) -> DeskResult<Vec<Record>> {
        let url = format!("{}{}", self.base_url, resource.list_path());
        let response = self
            .http
            .get(&url, &Self::headers(auth))
            .await
            .map_err(classify_http_error)?;
        Self::check_success(&response)?;

        let payload: Value = response.json().map_err(|e| NetworkError::InvalidResponse {
            message: e.to_string(),
        })?;

        let rows = match payload.get(resource.envelope_key()) {
            Some(Value::Array(rows)) => rows.clone(),
            // Defensive default: missing or mistyped envelope key means
            // an empty collection, not a failure.
            _ => Vec::new(),
        };

        let mut records: Vec<Record> = rows.into_iter().filter_map(Record::from_value).collect();
        for record in &mut records {
            record.assign_id_if_missing();
        }

        tracing::debug!(
            resource = resource.noun(),
            count = records.len(),
            "listed collection"
        );
        Ok(records)
    }

    /// Update one record with a full replacement payload.
    pub async fn update(
        &self,
        resource: Resource,
        id: &str,
        patch: &Map<String, Value>,
        auth: &AuthContext,
    ) -> DeskResult<()> {
        let url = format!("{}{}", self.base_url, resource.update_path(id)?);
        let body = Value::Object(patch.clone()).to_string();
        let response = self
            .http
            .put(&url, &body, &Self::headers(auth))
            .await
            .map_err(classify_http_error)?;
        Self::check_success(&response)?;
        tracing::debug!(resource = resource.noun(), id, "updated record");
        Ok(())
    }

    /// Delete one record.
    pub async fn delete(&self, resource: Resource, id: &str, auth: &AuthContext) -> DeskResult<()> {
        let url = format!("{}{}", self.base_url, resource.delete_path(id)?);
        let response = self
            .http
            .delete(&url, &Self::headers(auth))
            .await
            .map_err(classify_http_error)?;
        Self::check_success(&response)?;
        tracing::debug!(resource = resource.noun(), id, "deleted record");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::auth::CurrentUser;
    use crate::error::DeskError;
    use crate::traits::HttpError;
    use bytes::Bytes;

    fn auth() -> AuthContext {
        AuthContext::new(CurrentUser {
            token: "tok-xyz".into(),
            ..Default::default()
        })
        .unwrap()
    }

    fn mock_client() -> (MockHttpClient, CollectionClient<MockHttpClient>) {
        let http = MockHttpClient::new();
        let client = CollectionClient::new("http://test", http.clone());
        (http, client)
    }

    #[tokio::test]
    async fn test_list_unwraps_envelope_and_sends_bearer() {
        let (http, client) = mock_client();
        http.set_response(
            "http://test/auth/users/leads-details",
            MockResponse::Success(Response::new(
                200,
                Bytes::from(r#"{"leadsData": [{"_id": "l1", "storeName": "Cafe"}]}"#),
            )),
        );

        let records = client.list(Resource::Leads, &auth()).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id().as_deref(), Some("l1"));

        let requests = http.requests();
        assert_eq!(requests[0].method, "GET");
        assert_eq!(
            requests[0].headers.get("Authorization"),
            Some(&"Bearer tok-xyz".to_string())
        );
    }

    #[tokio::test]
    async fn test_list_missing_envelope_key_defaults_empty() {
        let (http, client) = mock_client();
        http.set_response(
            "http://test/auth/users/user-data",
            MockResponse::Success(Response::new(200, Bytes::from(r#"{"somethingElse": 1}"#))),
        );
        let records = client.list(Resource::Users, &auth()).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_list_mistyped_envelope_defaults_empty() {
        let (http, client) = mock_client();
        http.set_response(
            "http://test/auth/users/projects-details",
            MockResponse::Success(Response::new(
                200,
                Bytes::from(r#"{"projectsData": "nope"}"#),
            )),
        );
        let records = client.list(Resource::Projects, &auth()).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_list_assigns_synthetic_ids() {
        let (http, client) = mock_client();
        http.set_response(
            "http://test/auth/users/leads-details",
            MockResponse::Success(Response::new(
                200,
                Bytes::from(r#"{"leadsData": [{"storeName": "A"}, {"storeName": "B"}]}"#),
            )),
        );
        let records = client.list(Resource::Leads, &auth()).await.unwrap();
        let ids: Vec<_> = records.iter().map(|r| r.id().unwrap()).collect();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
    }

    #[tokio::test]
    async fn test_list_failure_status_carries_message() {
        let (http, client) = mock_client();
        http.set_response(
            "http://test/auth/users/user-data",
            MockResponse::Success(Response::new(
                401,
                Bytes::from(r#"{"msg": "Token expired"}"#),
            )),
        );
        let err = client.list(Resource::Users, &auth()).await.unwrap_err();
        match err {
            DeskError::Network(NetworkError::RequestFailed { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "Token expired");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_transport_failure() {
        let (http, client) = mock_client();
        http.set_response(
            "http://test/auth/users/user-data",
            MockResponse::Error(HttpError::ConnectionFailed("refused".into())),
        );
        let err = client.list(Resource::Users, &auth()).await.unwrap_err();
        assert!(matches!(
            err,
            DeskError::Network(NetworkError::Transport { .. })
        ));
    }

    #[tokio::test]
    async fn test_update_sends_put_with_payload() {
        let (http, client) = mock_client();
        http.set_response(
            "http://test/auth/users/user-data/u1",
            MockResponse::Success(Response::new(200, Bytes::new())),
        );

        let Value::Object(patch) =
            serde_json::json!({"name": "Ada", "email": "ada@example.com", "role": "admin", "status": "active"})
        else {
            unreachable!()
        };
        client
            .update(Resource::Users, "u1", &patch, &auth())
            .await
            .unwrap();

        let requests = http.requests();
        assert_eq!(requests[0].method, "PUT");
        assert_eq!(requests[0].url, "http://test/auth/users/user-data/u1");
        let body: Value = serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["role"], "admin");
    }

    #[tokio::test]
    async fn test_update_read_only_resource_is_config_error() {
        let (_http, client) = mock_client();
        let err = client
            .update(Resource::Leads, "l1", &Map::new(), &auth())
            .await
            .unwrap_err();
        assert!(matches!(err, DeskError::Config(_)));
    }

    #[tokio::test]
    async fn test_delete_targets_delete_endpoint() {
        let (http, client) = mock_client();
        http.set_response(
            "http://test/auth/users/delete-user/u9",
            MockResponse::Success(Response::new(200, Bytes::new())),
        );
        client.delete(Resource::Users, "u9", &auth()).await.unwrap();

        let requests = http.requests();
        assert_eq!(requests[0].method, "DELETE");
        assert_eq!(requests[0].url, "http://test/auth/users/delete-user/u9");
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_generic_message_for_empty_body() {
        let (http, client) = mock_client();
        http.set_response(
            "http://test/auth/users/delete-user/u9",
            MockResponse::Success(Response::new(500, Bytes::new())),
        );
        let err = client
            .delete(Resource::Users, "u9", &auth())
            .await
            .unwrap_err();
        assert!(err.user_message().contains("500"));
        assert!(err.is_retryable());
    }
}
