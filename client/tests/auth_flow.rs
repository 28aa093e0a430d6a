//! Login, token persistence and authenticated calls over real HTTP.

use islami_client::{ApiClient, ApiError, ApiService, FileTokenStore, TokenStore};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn temp_token_file() -> std::path::PathBuf {
    std::env::temp_dir()
        .join(format!("islami-client-it-{}", uuid::Uuid::new_v4()))
        .join("credentials.json")
}

#[tokio::test]
async fn login_persists_token_for_later_requests() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"username": "ali", "password": "Sifre123"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "jwt-1", "token_type": "bearer", "user_id": 7
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/user/favorites"))
        .and(query_param("hadith_id", "42"))
        .and(header("authorization", "Bearer jwt-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let token_file = temp_token_file();
    let client = ApiClient::builder()
        .base_url(server.uri())
        .token_file(&token_file)
        .build()
        .unwrap();

    client.login("ali", "Sifre123").await.unwrap();
    assert_eq!(client.add_favorite(42).await.unwrap().status, "ok");

    // A fresh store over the same file sees the credentials
    let reopened = FileTokenStore::new(&token_file);
    assert_eq!(reopened.access_token().unwrap().as_deref(), Some("jwt-1"));
    assert_eq!(reopened.user_id().unwrap().as_deref(), Some("7"));

    client.logout().unwrap();
    assert_eq!(reopened.access_token().unwrap(), None);

    if let Some(dir) = token_file.parent() {
        let _ = std::fs::remove_dir_all(dir);
    }
}

#[tokio::test]
async fn unauthorized_detail_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/profile"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Not authenticated"})),
        )
        .mount(&server)
        .await;

    let client: Arc<dyn ApiService> = Arc::new(
        ApiClient::builder()
            .base_url(server.uri())
            .build()
            .unwrap(),
    );

    let err = client.get_profile().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "HTTP 401: Not authenticated");
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    // Nothing listens on the discard port
    let client = ApiClient::builder()
        .base_url("http://127.0.0.1:9")
        .build()
        .unwrap();

    let err = client.health().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
