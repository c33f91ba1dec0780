//! Durable session state
//!
//! The access token and the user record travel together: both are written on
//! login and both are removed on logout or an expired session. The remembered
//! login email lives under its own key and survives `clear_session`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::types::User;

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const USER_KEY: &str = "user";
pub const REMEMBERED_EMAIL_KEY: &str = "rememberedEmail";

/// Key/value storage the session sits on.
///
/// `take` removes a key and reports what was there; the token removal is the
/// gate that lets concurrent 401 handlers clear the session exactly once.
pub trait StorageBackend: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn take(&self, key: &str) -> Option<String>;
}

/// `localStorage`-backed storage for web builds. The handle is looked up per
/// call; the single browser UI thread makes get-then-remove atomic enough.
#[cfg(feature = "web")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(feature = "web")]
impl BrowserStorage {
    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(feature = "web")]
impl StorageBackend for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            if let Err(err) = storage.set_item(key, value) {
                tracing::warn!(?err, key, "localStorage write failed");
            }
        }
    }

    fn take(&self, key: &str) -> Option<String> {
        let storage = self.storage()?;
        let previous = storage.get_item(key).ok().flatten();
        let _ = storage.remove_item(key);
        previous
    }
}

/// In-memory storage for tests and non-web builds.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn take(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.remove(key)
    }
}

/// Handle over a storage backend. Cheap to clone; every clone shares the
/// same backend.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn StorageBackend>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    #[cfg(feature = "web")]
    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserStorage))
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::default()))
    }

    /// Browser storage on web builds, process-local memory otherwise.
    pub fn for_target() -> Self {
        #[cfg(feature = "web")]
        {
            Self::browser()
        }
        #[cfg(not(feature = "web"))]
        {
            Self::in_memory()
        }
    }

    /// Persist a login. An empty token is never stored.
    pub fn set_session(&self, token: &str, user: &User) {
        if !token.is_empty() {
            self.backend.set(ACCESS_TOKEN_KEY, token);
        }
        match serde_json::to_string(user) {
            Ok(json) => self.backend.set(USER_KEY, &json),
            Err(err) => tracing::warn!(%err, "user serialization failed"),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.backend
            .get(ACCESS_TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }

    /// Stored user, or `None` when absent or unreadable. Corrupt JSON is
    /// treated as "no session", never surfaced as an error.
    pub fn user(&self) -> Option<User> {
        let raw = self.backend.get(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn clear_session(&self) {
        self.backend.take(ACCESS_TOKEN_KEY);
        self.backend.take(USER_KEY);
    }

    /// Clear the session and report whether a token was actually present.
    /// Concurrent expired-session handlers race on the token removal, so at
    /// most one caller sees `true`.
    pub fn take_session(&self) -> bool {
        let had_token = self.backend.take(ACCESS_TOKEN_KEY).is_some();
        self.backend.take(USER_KEY);
        had_token
    }

    pub fn remember_email(&self, email: &str) {
        self.backend.set(REMEMBERED_EMAIL_KEY, email);
    }

    pub fn remembered_email(&self) -> Option<String> {
        self.backend
            .get(REMEMBERED_EMAIL_KEY)
            .filter(|email| !email.is_empty())
    }

    pub fn forget_email(&self) {
        self.backend.take(REMEMBERED_EMAIL_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RoleValue;

    fn sample_user() -> User {
        User {
            id: Some("u1".into()),
            full_name: Some("Nguyễn Văn A".into()),
            email: Some("a.nguyen@example.com".into()),
            role: Some(RoleValue::Name("admin".into())),
            ..User::default()
        }
    }

    #[test]
    fn set_then_get_round_trips_token_and_user() {
        let store = SessionStore::in_memory();
        store.set_session("tok-123", &sample_user());

        assert_eq!(store.token().as_deref(), Some("tok-123"));
        let user = store.user().expect("user should be stored");
        assert_eq!(user.id.as_deref(), Some("u1"));
        assert_eq!(user.role_key(), "admin");
        assert!(store.is_authenticated());
    }

    #[test]
    fn clear_session_removes_both_entries() {
        let store = SessionStore::in_memory();
        store.set_session("tok-123", &sample_user());
        store.clear_session();

        assert!(store.token().is_none());
        assert!(store.user().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn empty_token_is_not_stored() {
        let store = SessionStore::in_memory();
        store.set_session("", &sample_user());

        assert!(store.token().is_none());
        assert!(!store.is_authenticated());
        // The user record is still written; the session just never looks
        // authenticated.
        assert!(store.user().is_some());
    }

    #[test]
    fn corrupt_user_json_reads_as_no_user() {
        let backend = Arc::new(MemoryStorage::default());
        backend.set(USER_KEY, "{not json");
        let store = SessionStore::new(backend);

        assert!(store.user().is_none());
    }

    #[test]
    fn remembered_email_survives_clear_session() {
        let store = SessionStore::in_memory();
        store.remember_email("a.nguyen@example.com");
        store.set_session("tok-123", &sample_user());
        store.clear_session();

        assert_eq!(
            store.remembered_email().as_deref(),
            Some("a.nguyen@example.com")
        );

        store.forget_email();
        assert!(store.remembered_email().is_none());
    }

    #[test]
    fn take_session_reports_false_without_a_session() {
        let store = SessionStore::in_memory();
        assert!(!store.take_session());
    }

    #[test]
    fn concurrent_takes_clear_exactly_once() {
        let store = SessionStore::in_memory();
        store.set_session("tok-123", &sample_user());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || store.take_session())
            })
            .collect();

        let cleared = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|took| *took)
            .count();

        assert_eq!(cleared, 1);
        assert!(store.token().is_none());
        assert!(store.user().is_none());
    }
}
