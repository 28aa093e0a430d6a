use serde::{Deserialize, Serialize};

/// A favorited hadith (`GET /user/favorites`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FavoriteHadith {
    pub id: i64,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

/// Filters for `GET /user/history`
///
/// `sort_by` and `order` always go on the wire; the rest only when set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    pub sort_by: String,
    pub order: String,
}

impl Default for HistoryFilter {
    fn default() -> Self {
        Self {
            search: None,
            category: None,
            source: None,
            date_from: None,
            date_to: None,
            sort_by: "created_at".to_string(),
            order: "desc".to_string(),
        }
    }
}

/// One asked question (`GET /user/history`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub id: i64,
    pub question: String,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub hadith_id: Option<i64>,
}

/// Bulk history deletion (`POST /user/history/delete_many`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteHistoryRequest {
    pub history_ids: Vec<i64>,
}

/// Profile (`GET /user/profile`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(rename = "isPremium", default)]
    pub is_premium: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium_expiry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_preference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Theme change (`POST /user/theme`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemeRequest {
    pub theme: String,
}

/// Avatar upload result (`POST /user/avatar`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AvatarResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Premium activation result (`POST /user/activate_premium`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PremiumResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub is_premium: Option<bool>,
    #[serde(default)]
    pub premium_expiry: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_filter_defaults_on_the_wire() {
        let value = serde_json::to_value(HistoryFilter::default()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "sort_by": "created_at", "order": "desc" })
        );
    }

    #[test]
    fn test_profile_reads_camel_case_premium_flag() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"username":"ali","email":"ali@example.com","is_admin":false,"isPremium":true,"premium_expiry":null}"#,
        )
        .unwrap();
        assert!(profile.is_premium);
        assert!(profile.premium_expiry.is_none());
    }
}
