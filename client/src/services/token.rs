//! # Token Storage
//!
//! Where the bearer token and user id live between requests.
//!
//! The client reads the token before every backend request and attaches it
//! when present. A store that fails to read is treated as "no token" so a
//! broken keychain never blocks anonymous endpoints.

use crate::core::error::{ApiError, Result};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Persisted credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Storage backend for credentials.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Credentials>;

    fn save(&self, credentials: &Credentials) -> Result<()>;

    fn access_token(&self) -> Result<Option<String>> {
        Ok(self.load()?.access_token)
    }

    fn set_access_token(&self, token: &str) -> Result<()> {
        let mut creds = self.load()?;
        creds.access_token = Some(token.to_string());
        self.save(&creds)
    }

    fn user_id(&self) -> Result<Option<String>> {
        Ok(self.load()?.user_id)
    }

    fn set_user_id(&self, user_id: &str) -> Result<()> {
        let mut creds = self.load()?;
        creds.user_id = Some(user_id.to_string());
        self.save(&creds)
    }

    fn clear(&self) -> Result<()> {
        self.save(&Credentials::default())
    }
}

/// Process-local store. Credentials are lost on exit.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    credentials: RwLock<Credentials>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            credentials: RwLock::new(Credentials {
                access_token: Some(token.into()),
                user_id: None,
            }),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Credentials> {
        Ok(self.credentials.read().clone())
    }

    fn save(&self, credentials: &Credentials) -> Result<()> {
        *self.credentials.write() = credentials.clone();
        Ok(())
    }
}

/// JSON file store. A missing file reads as empty credentials.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    // Serializes read-modify-write cycles from concurrent requests.
    lock: Mutex<()>,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> Result<Credentials> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.is_empty() => Ok(Credentials::default()),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                ApiError::Storage(format!("{} is not valid JSON: {}", self.path.display(), e))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Credentials::default()),
            Err(e) => Err(ApiError::Storage(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Credentials> {
        let _guard = self.lock.lock();
        self.read_file()
    }

    fn save(&self, credentials: &Credentials) -> Result<()> {
        let _guard = self.lock.lock();
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                ApiError::Storage(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }
        let bytes = serde_json::to_vec_pretty(credentials)?;
        fs::write(&self.path, bytes).map_err(|e| {
            ApiError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("islami-client-{}", uuid::Uuid::new_v4()))
            .join("credentials.json")
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.access_token().unwrap(), None);

        store.set_access_token("abc").unwrap();
        store.set_user_id("7").unwrap();
        assert_eq!(store.access_token().unwrap().as_deref(), Some("abc"));
        assert_eq!(store.user_id().unwrap().as_deref(), Some("7"));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), Credentials::default());
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let store = FileTokenStore::new(temp_path());
        assert_eq!(store.load().unwrap(), Credentials::default());
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let path = temp_path();
        FileTokenStore::new(&path).set_access_token("tok").unwrap();
        FileTokenStore::new(&path).set_user_id("42").unwrap();

        let reopened = FileTokenStore::new(&path);
        assert_eq!(reopened.access_token().unwrap().as_deref(), Some("tok"));
        assert_eq!(reopened.user_id().unwrap().as_deref(), Some("42"));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_file_store_rejects_garbage() {
        let path = temp_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"not json").unwrap();

        let err = FileTokenStore::new(&path).load().unwrap_err();
        assert!(matches!(err, ApiError::Storage(_)));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
