use serde::{Deserialize, Serialize};

/// Hadith search hit (`GET /api/hadith_search`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HadithResult {
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

/// Daily ayah or hadith (`GET /api/daily_ayah`, `GET /api/daily_hadith`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyContent {
    pub text: String,
    #[serde(default)]
    pub reference: Option<String>,
}

/// Quran reciter (`GET /api/reciters`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reciter {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Backend health (`GET /health`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub db: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "ok" && self.db.as_deref().map_or(true, |db| db == "ok")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status() {
        let ok: HealthStatus = serde_json::from_str(r#"{"status":"ok","db":"ok"}"#).unwrap();
        assert!(ok.is_healthy());

        let degraded: HealthStatus =
            serde_json::from_str(r#"{"status":"ok","db":"error"}"#).unwrap();
        assert!(!degraded.is_healthy());
    }
}
