//! Admin session store.
//!
//! [`AuthSession`] holds the bearer token and username of the logged-in
//! admin, mirrors them into a [`SessionStorage`] backend under fixed keys,
//! and publishes changes through a `tokio::sync::watch` channel. Sessions
//! are plain values: create one per context instead of sharing a global.
//!
//! Storage is read and written once per call with no cross-call
//! coordination, so concurrent `set_auth`/`clear_auth` calls resolve as
//! last write wins.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "admin_token";

/// Storage key of the admin username.
pub const USERNAME_KEY: &str = "admin_username";

// ---------------------------------------------------------------------------
// Storage
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Session storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session storage is corrupt: {0}")]
    Format(#[from] serde_json::Error),
}

/// Durable string key/value storage.
pub trait SessionStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process storage; lives as long as the value.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.remove(key);
        Ok(())
    }
}

/// Storage backed by a JSON object file.
///
/// Every call reads the whole file and, for writes, rewrites it. A missing
/// file reads as empty.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match std::fs::read(&self.path) {
            Ok(bytes) if bytes.is_empty() => Ok(BTreeMap::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, serde_json::to_vec_pretty(items)?)?;
        Ok(())
    }
}

impl SessionStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.load()?;
        items.insert(key.to_string(), value.to_string());
        self.save(&items)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.load()?;
        if items.remove(key).is_some() {
            self.save(&items)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// AuthSession
// ---------------------------------------------------------------------------

/// Snapshot of the session as seen by observers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub username: Option<String>,
    pub is_authenticated: bool,
}

impl AuthState {
    fn new(token: Option<String>, username: Option<String>) -> Self {
        let is_authenticated = token.as_deref().is_some_and(|t| !t.is_empty());
        Self {
            token,
            username,
            is_authenticated,
        }
    }
}

pub struct AuthSession {
    storage: Option<Arc<dyn SessionStorage>>,
    state: watch::Sender<AuthState>,
}

impl AuthSession {
    /// Create a session backed by `storage`, restoring any persisted
    /// token and username.
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        let token = read_or_log(storage.as_ref(), TOKEN_KEY);
        let username = read_or_log(storage.as_ref(), USERNAME_KEY);
        let (state, _) = watch::channel(AuthState::new(token, username));
        Self {
            storage: Some(storage),
            state,
        }
    }

    /// A session without durable storage. It starts unauthenticated and
    /// [`get_token`](Self::get_token) always returns `None`.
    pub fn detached() -> Self {
        let (state, _) = watch::channel(AuthState::default());
        Self {
            storage: None,
            state,
        }
    }

    /// Persist `token` and `username`, then publish the new state.
    ///
    /// If the username cannot be written the previous token is restored,
    /// so storage never pairs the new token with a stale username.
    pub fn set_auth(&self, token: &str, username: &str) -> Result<(), StorageError> {
        if let Some(storage) = &self.storage {
            let previous = storage.get_item(TOKEN_KEY)?;
            storage.set_item(TOKEN_KEY, token)?;
            if let Err(e) = storage.set_item(USERNAME_KEY, username) {
                let restored = match &previous {
                    Some(previous) => storage.set_item(TOKEN_KEY, previous),
                    None => storage.remove_item(TOKEN_KEY),
                };
                if let Err(rollback) = restored {
                    tracing::warn!(error = %rollback, "Failed to restore previous session token");
                }
                return Err(e);
            }
        }
        self.state.send_replace(AuthState {
            token: Some(token.to_string()),
            username: Some(username.to_string()),
            is_authenticated: true,
        });
        tracing::info!(username, "Admin session stored");
        Ok(())
    }

    /// Remove the persisted entries and reset the state.
    pub fn clear_auth(&self) -> Result<(), StorageError> {
        if let Some(storage) = &self.storage {
            storage.remove_item(TOKEN_KEY)?;
            storage.remove_item(USERNAME_KEY)?;
        }
        self.state.send_replace(AuthState::default());
        tracing::info!("Admin session cleared");
        Ok(())
    }

    /// Read the token straight from storage, bypassing the cached state.
    pub fn get_token(&self) -> Option<String> {
        let storage = self.storage.as_ref()?;
        read_or_log(storage.as_ref(), TOKEN_KEY)
    }

    /// Current cached state.
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated
    }

    /// Observe state changes.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }
}

fn read_or_log(storage: &dyn SessionStorage, key: &str) -> Option<String> {
    match storage.get_item(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read session storage");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unauthenticated_with_empty_storage() {
        let session = AuthSession::new(Arc::new(MemoryStorage::new()));
        assert_eq!(session.state(), AuthState::default());
        assert_eq!(session.get_token(), None);
    }

    #[test]
    fn restores_persisted_values() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set_item(TOKEN_KEY, "tok").unwrap();
        storage.set_item(USERNAME_KEY, "admin").unwrap();

        let session = AuthSession::new(storage);
        let state = session.state();
        assert_eq!(state.token.as_deref(), Some("tok"));
        assert_eq!(state.username.as_deref(), Some("admin"));
        assert!(state.is_authenticated);
    }

    #[test]
    fn set_then_clear_returns_to_initial_state() {
        let storage = Arc::new(MemoryStorage::new());
        let session = AuthSession::new(storage.clone());
        let initial = session.state();

        session.set_auth("tok", "admin").unwrap();
        assert!(session.is_authenticated());
        assert_eq!(storage.get_item(TOKEN_KEY).unwrap().as_deref(), Some("tok"));
        assert_eq!(storage.get_item(USERNAME_KEY).unwrap().as_deref(), Some("admin"));

        session.clear_auth().unwrap();
        assert_eq!(session.state(), initial);
        assert!(!session.is_authenticated());
        assert_eq!(storage.get_item(TOKEN_KEY).unwrap(), None);
        assert_eq!(storage.get_item(USERNAME_KEY).unwrap(), None);
    }

    /// Memory storage that refuses to write one key.
    struct RefusingStorage {
        inner: MemoryStorage,
        refused_key: &'static str,
    }

    impl SessionStorage for RefusingStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get_item(key)
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == self.refused_key {
                return Err(std::io::Error::other("disk full").into());
            }
            self.inner.set_item(key, value)
        }

        fn remove_item(&self, key: &str) -> Result<(), StorageError> {
            self.inner.remove_item(key)
        }
    }

    #[test]
    fn failed_username_write_leaves_storage_and_state_unchanged() {
        let storage = Arc::new(RefusingStorage {
            inner: MemoryStorage::new(),
            refused_key: USERNAME_KEY,
        });
        let session = AuthSession::new(storage.clone());

        let err = session.set_auth("tok", "admin").unwrap_err();
        assert!(matches!(err, StorageError::Io(_)));
        assert_eq!(storage.get_item(TOKEN_KEY).unwrap(), None);
        assert_eq!(storage.get_item(USERNAME_KEY).unwrap(), None);
        assert_eq!(session.state(), AuthState::default());
    }

    #[test]
    fn failed_username_write_restores_previous_token() {
        let storage = Arc::new(RefusingStorage {
            inner: MemoryStorage::new(),
            refused_key: USERNAME_KEY,
        });
        storage.inner.set_item(TOKEN_KEY, "old").unwrap();
        storage.inner.set_item(USERNAME_KEY, "admin").unwrap();
        let session = AuthSession::new(storage.clone());

        assert!(session.set_auth("new", "other").is_err());
        assert_eq!(storage.get_item(TOKEN_KEY).unwrap().as_deref(), Some("old"));
        assert_eq!(session.state().token.as_deref(), Some("old"));
    }

    #[test]
    fn get_token_reads_storage_not_cache() {
        let storage = Arc::new(MemoryStorage::new());
        let session = AuthSession::new(storage.clone());

        storage.set_item(TOKEN_KEY, "written-elsewhere").unwrap();

        assert_eq!(session.get_token().as_deref(), Some("written-elsewhere"));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn detached_session_has_no_durable_token() {
        let session = AuthSession::detached();
        session.set_auth("tok", "admin").unwrap();

        assert!(session.is_authenticated());
        assert_eq!(session.get_token(), None);
    }

    #[test]
    fn subscribers_see_updates() {
        let session = AuthSession::detached();
        let mut rx = session.subscribe();

        session.set_auth("tok", "admin").unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().username.as_deref(), Some("admin"));

        session.clear_auth().unwrap();
        assert!(!rx.borrow_and_update().is_authenticated);
    }

    #[test]
    fn file_storage_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let session = AuthSession::new(Arc::new(FileStorage::new(&path)));
        session.set_auth("tok", "admin").unwrap();

        let reopened = AuthSession::new(Arc::new(FileStorage::new(&path)));
        assert!(reopened.is_authenticated());
        assert_eq!(reopened.get_token().as_deref(), Some("tok"));

        reopened.clear_auth().unwrap();
        let storage = FileStorage::new(&path);
        assert_eq!(storage.get_item(TOKEN_KEY).unwrap(), None);
        assert_eq!(storage.get_item(USERNAME_KEY).unwrap(), None);
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("absent.json"));
        assert_eq!(storage.get_item(TOKEN_KEY).unwrap(), None);
        storage.remove_item(TOKEN_KEY).unwrap();
    }

    #[test]
    fn corrupt_file_is_a_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let err = FileStorage::new(&path).get_item(TOKEN_KEY).unwrap_err();
        assert!(matches!(err, StorageError::Format(_)));
    }
}
