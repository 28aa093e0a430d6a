//! # Service Traits
//!
//! Traits for dependency injection, so screens and tests can work against a
//! mock instead of a live backend.

use crate::core::error::Result;
use crate::quran::CanonicalVerse;
use crate::services::api::{self, ApiClient, VerseQuery};
use async_trait::async_trait;
use shared::{
    AskResponse, AvatarResponse, ChatResponse, CurrentUser, DailyContent, FavoriteHadith,
    HadithResult, HealthStatus, HistoryEntry, HistoryFilter, LoginResponse, PremiumResponse,
    Reciter, RegisterResponse, SessionResponse, StatusResponse, UserProfile,
};

/// Trait for API service operations
///
/// [`ApiClient`] implements it by delegating to the endpoint functions in
/// [`crate::services::api`].
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Login and persist the returned token
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse>;

    async fn register(&self, username: &str, email: &str, password: &str)
        -> Result<RegisterResponse>;

    async fn me(&self) -> Result<CurrentUser>;

    fn logout(&self) -> Result<()>;

    /// Verses in canonical form; never fails, an empty list means nothing
    /// could be retrieved
    async fn get_quran_verses(&self, query: &VerseQuery) -> Vec<CanonicalVerse>;

    async fn hadith_search(&self, query: &str, top_k: Option<u32>) -> Result<Vec<HadithResult>>;

    async fn get_favorites(&self) -> Result<Vec<FavoriteHadith>>;

    async fn add_favorite(&self, hadith_id: i64) -> Result<StatusResponse>;

    async fn remove_favorite(&self, hadith_id: i64) -> Result<StatusResponse>;

    async fn get_history(&self, filter: &HistoryFilter) -> Result<Vec<HistoryEntry>>;

    async fn delete_history_many(&self, history_ids: &[i64]) -> Result<StatusResponse>;

    async fn create_or_get_session(&self, session_token: Option<&str>) -> Result<SessionResponse>;

    async fn chat(
        &self,
        question: &str,
        source_filter: Option<&str>,
        session_token: Option<&str>,
    ) -> Result<ChatResponse>;

    async fn ask_ai(&self, question: &str, source_filter: Option<&str>) -> Result<AskResponse>;

    async fn get_profile(&self) -> Result<UserProfile>;

    async fn update_theme_preference(&self, theme: &str) -> Result<StatusResponse>;

    async fn change_password(&self, old_password: &str, new_password: &str)
        -> Result<StatusResponse>;

    async fn upload_avatar(&self, file_name: &str, bytes: Vec<u8>) -> Result<AvatarResponse>;

    async fn activate_premium(&self) -> Result<PremiumResponse>;

    async fn health(&self) -> Result<HealthStatus>;

    async fn daily_ayah(&self) -> Result<DailyContent>;

    async fn daily_hadith(&self) -> Result<DailyContent>;

    async fn reciters(&self) -> Result<Vec<Reciter>>;
}

#[async_trait]
impl ApiService for ApiClient {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        api::login(self, username, password).await
    }

    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisterResponse> {
        api::register(self, username, email, password).await
    }

    async fn me(&self) -> Result<CurrentUser> {
        api::me(self).await
    }

    fn logout(&self) -> Result<()> {
        api::logout(self)
    }

    async fn get_quran_verses(&self, query: &VerseQuery) -> Vec<CanonicalVerse> {
        api::get_quran_verses(self, query).await
    }

    async fn hadith_search(&self, query: &str, top_k: Option<u32>) -> Result<Vec<HadithResult>> {
        api::hadith_search(self, query, top_k).await
    }

    async fn get_favorites(&self) -> Result<Vec<FavoriteHadith>> {
        api::get_favorites(self).await
    }

    async fn add_favorite(&self, hadith_id: i64) -> Result<StatusResponse> {
        api::add_favorite(self, hadith_id).await
    }

    async fn remove_favorite(&self, hadith_id: i64) -> Result<StatusResponse> {
        api::remove_favorite(self, hadith_id).await
    }

    async fn get_history(&self, filter: &HistoryFilter) -> Result<Vec<HistoryEntry>> {
        api::get_history(self, filter).await
    }

    async fn delete_history_many(&self, history_ids: &[i64]) -> Result<StatusResponse> {
        api::delete_history_many(self, history_ids).await
    }

    async fn create_or_get_session(&self, session_token: Option<&str>) -> Result<SessionResponse> {
        api::create_or_get_session(self, session_token).await
    }

    async fn chat(
        &self,
        question: &str,
        source_filter: Option<&str>,
        session_token: Option<&str>,
    ) -> Result<ChatResponse> {
        api::chat(self, question, source_filter, session_token).await
    }

    async fn ask_ai(&self, question: &str, source_filter: Option<&str>) -> Result<AskResponse> {
        api::ask_ai(self, question, source_filter).await
    }

    async fn get_profile(&self) -> Result<UserProfile> {
        api::get_profile(self).await
    }

    async fn update_theme_preference(&self, theme: &str) -> Result<StatusResponse> {
        api::update_theme_preference(self, theme).await
    }

    async fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> Result<StatusResponse> {
        api::change_password(self, old_password, new_password).await
    }

    async fn upload_avatar(&self, file_name: &str, bytes: Vec<u8>) -> Result<AvatarResponse> {
        api::upload_avatar(self, file_name, bytes).await
    }

    async fn activate_premium(&self) -> Result<PremiumResponse> {
        api::activate_premium(self).await
    }

    async fn health(&self) -> Result<HealthStatus> {
        api::health(self).await
    }

    async fn daily_ayah(&self) -> Result<DailyContent> {
        api::daily_ayah(self).await
    }

    async fn daily_hadith(&self) -> Result<DailyContent> {
        api::daily_hadith(self).await
    }

    async fn reciters(&self) -> Result<Vec<Reciter>> {
        api::reciters(self).await
    }
}
