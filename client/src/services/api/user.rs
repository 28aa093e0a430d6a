//! # User Endpoints
//!
//! Favorites, question history and profile settings. All of these require a
//! stored token; without one the backend answers 401.

use super::client::ApiClient;
use crate::core::error::Result;
use crate::services::transport::{ApiRequest, FilePart};
use shared::{
    AvatarResponse, ChangePasswordRequest, DeleteHistoryRequest, FavoriteHadith, HistoryEntry,
    HistoryFilter, PremiumResponse, StatusResponse, ThemeRequest, UserProfile,
};

/// Multipart field name the avatar endpoint reads.
const AVATAR_FIELD: &str = "file";

pub async fn get_favorites(client: &ApiClient) -> Result<Vec<FavoriteHadith>> {
    client.send_json(ApiRequest::get(client.url("/user/favorites"))).await
}

pub async fn add_favorite(client: &ApiClient, hadith_id: i64) -> Result<StatusResponse> {
    let request = ApiRequest::post(client.url("/user/favorites")).query("hadith_id", hadith_id);
    client.send_json(request).await
}

pub async fn remove_favorite(client: &ApiClient, hadith_id: i64) -> Result<StatusResponse> {
    let request = ApiRequest::delete(client.url("/user/favorites")).query("hadith_id", hadith_id);
    client.send_json(request).await
}

/// Question history, filtered and sorted server side.
pub async fn get_history(client: &ApiClient, filter: &HistoryFilter) -> Result<Vec<HistoryEntry>> {
    let request = ApiRequest::get(client.url("/user/history"))
        .query_opt("search", filter.search.as_deref())
        .query_opt("category", filter.category.as_deref())
        .query_opt("source", filter.source.as_deref())
        .query_opt("date_from", filter.date_from.as_deref())
        .query_opt("date_to", filter.date_to.as_deref())
        .query("sort_by", &filter.sort_by)
        .query("order", &filter.order);
    client.send_json(request).await
}

pub async fn delete_history_many(client: &ApiClient, history_ids: &[i64]) -> Result<StatusResponse> {
    let request = ApiRequest::post(client.url("/user/history/delete_many")).json(
        &DeleteHistoryRequest {
            history_ids: history_ids.to_vec(),
        },
    )?;
    client.send_json(request).await
}

pub async fn get_profile(client: &ApiClient) -> Result<UserProfile> {
    client.send_json(ApiRequest::get(client.url("/user/profile"))).await
}

pub async fn update_theme_preference(client: &ApiClient, theme: &str) -> Result<StatusResponse> {
    let request = ApiRequest::post(client.url("/user/theme")).json(&ThemeRequest {
        theme: theme.to_string(),
    })?;
    client.send_json(request).await
}

#[tracing::instrument(skip_all)]
pub async fn change_password(
    client: &ApiClient,
    old_password: &str,
    new_password: &str,
) -> Result<StatusResponse> {
    let request = ApiRequest::post(client.url("/user/change_password")).json(
        &ChangePasswordRequest {
            old_password: old_password.to_string(),
            new_password: new_password.to_string(),
        },
    )?;
    client.send_json(request).await
}

/// Upload a profile picture as `multipart/form-data`.
///
/// The content type is guessed from the file extension; unknown extensions
/// are sent without one.
pub async fn upload_avatar(
    client: &ApiClient,
    file_name: &str,
    bytes: Vec<u8>,
) -> Result<AvatarResponse> {
    tracing::info!(file_name, size = bytes.len(), "Uploading avatar");
    let part = FilePart {
        field: AVATAR_FIELD.to_string(),
        file_name: file_name.to_string(),
        mime: image_mime(file_name).map(str::to_string),
        bytes,
    };
    let request = ApiRequest::post(client.url("/user/avatar")).file(part);
    client.send_json(request).await
}

pub async fn activate_premium(client: &ApiClient) -> Result<PremiumResponse> {
    client
        .send_json(ApiRequest::post(client.url("/user/activate_premium")))
        .await
}

fn image_mime(file_name: &str) -> Option<&'static str> {
    let (_, ext) = file_name.rsplit_once('.')?;
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::MockTransport;
    use crate::services::token::MemoryTokenStore;
    use crate::services::transport::{Method, RequestBody};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Arc;

    fn client_with(mock: &Arc<MockTransport>) -> ApiClient {
        ApiClient::builder()
            .base_url("https://backend.test")
            .transport(mock.clone())
            .token_store(Arc::new(MemoryTokenStore::with_token("jwt")))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_favorite_id_goes_in_query() {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(200, json!({"status": "ok"}));
        mock.push_json(200, json!({"status": "deleted"}));
        let client = client_with(&mock);

        assert_eq!(add_favorite(&client, 42).await.unwrap().status, "ok");
        assert_eq!(remove_favorite(&client, 42).await.unwrap().status, "deleted");

        let requests = mock.requests();
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[1].method, Method::DELETE);
        for request in &requests {
            assert_eq!(request.url, "https://backend.test/user/favorites");
            assert_eq!(request.query_value("hadith_id"), Some("42"));
            assert_eq!(request.body, RequestBody::Empty);
            assert_eq!(request.bearer.as_deref(), Some("jwt"));
        }
    }

    #[tokio::test]
    async fn test_history_default_filter() {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(200, json!([{"id": 1, "question": "Namaz?", "answer": "..."}]));
        let client = client_with(&mock);

        let history = get_history(&client, &HistoryFilter::default()).await.unwrap();

        assert_eq!(history.len(), 1);
        assert_eq!(
            mock.requests()[0].query,
            vec![
                ("sort_by".to_string(), "created_at".to_string()),
                ("order".to_string(), "desc".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_history_filter_skips_empty_values() {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(200, json!([]));
        let client = client_with(&mock);
        let filter = HistoryFilter {
            search: Some("oruç".to_string()),
            category: Some(String::new()),
            order: "asc".to_string(),
            ..HistoryFilter::default()
        };

        get_history(&client, &filter).await.unwrap();

        let request = &mock.requests()[0];
        assert_eq!(request.query_value("search"), Some("oruç"));
        assert_eq!(request.query_value("category"), None);
        assert_eq!(request.query_value("order"), Some("asc"));
    }

    #[tokio::test]
    async fn test_delete_history_many_body() {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(200, json!({"status": "deleted", "count": 2}));
        let client = client_with(&mock);

        let resp = delete_history_many(&client, &[3, 5]).await.unwrap();

        assert_eq!(resp.extra.get("count"), Some(&json!(2)));
        assert_eq!(
            mock.requests()[0].body,
            RequestBody::Json(json!({"history_ids": [3, 5]}))
        );
    }

    #[tokio::test]
    async fn test_upload_avatar_builds_file_part() {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(200, json!({"status": "ok", "avatar_url": "/static/a.png"}));
        let client = client_with(&mock);

        let resp = upload_avatar(&client, "me.PNG", vec![1, 2, 3]).await.unwrap();

        assert_eq!(resp.avatar_url.as_deref(), Some("/static/a.png"));
        assert_eq!(
            mock.requests()[0].body,
            RequestBody::File(FilePart {
                field: "file".to_string(),
                file_name: "me.PNG".to_string(),
                mime: Some("image/png".to_string()),
                bytes: vec![1, 2, 3],
            })
        );
    }

    #[tokio::test]
    async fn test_profile_reads_camel_case_premium() {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(
            200,
            json!({"username": "ali", "email": "ali@example.com", "isPremium": true, "theme_preference": "dark"}),
        );
        let client = client_with(&mock);

        let profile = get_profile(&client).await.unwrap();
        assert!(profile.is_premium);
        assert_eq!(profile.theme_preference.as_deref(), Some("dark"));
    }

    #[test]
    fn test_image_mime() {
        assert_eq!(image_mime("a.jpeg"), Some("image/jpeg"));
        assert_eq!(image_mime("a.webp"), Some("image/webp"));
        assert_eq!(image_mime("a.bmp"), None);
        assert_eq!(image_mime("noext"), None);
    }
}
