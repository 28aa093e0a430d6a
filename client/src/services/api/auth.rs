//! # Authentication Endpoints
//!
//! Login, registration and the current-user lookup. A successful login
//! stores the returned token so later requests carry it automatically.

use super::client::ApiClient;
use crate::core::error::Result;
use crate::services::transport::ApiRequest;
use shared::{CurrentUser, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

/// Login with username and password.
#[tracing::instrument(skip(client, password))]
pub async fn login(client: &ApiClient, username: &str, password: &str) -> Result<LoginResponse> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = ApiRequest::post(client.url("/auth/login")).json(&LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    })?;

    let response: LoginResponse = client.send_json(request).await?;

    if let Some(token) = response.access_token.as_deref().filter(|t| !t.is_empty()) {
        client.tokens.set_access_token(token)?;
    }
    if let Some(user_id) = response.user_id_string() {
        client.tokens.set_user_id(&user_id)?;
    }

    tracing::info!(duration_ms = start.elapsed().as_millis(), "Login successful");
    Ok(response)
}

/// Register a new account.
pub async fn register(
    client: &ApiClient,
    username: &str,
    email: &str,
    password: &str,
) -> Result<RegisterResponse> {
    // The slash-terminated path avoids a redirect on the backend.
    let request = ApiRequest::post(client.url("/auth/register/")).json(&RegisterRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })?;
    client.send_json(request).await
}

/// Account details for the stored token.
pub async fn me(client: &ApiClient) -> Result<CurrentUser> {
    client.send_json(ApiRequest::get(client.url("/auth/me"))).await
}

/// Forget the stored token and user id.
pub fn logout(client: &ApiClient) -> Result<()> {
    tracing::info!("Clearing stored credentials");
    client.tokens.clear()
}
