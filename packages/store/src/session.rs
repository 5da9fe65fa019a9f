//! # Persisted session record
//!
//! The session is the single piece of client-persisted state: the logged-in
//! user's record, stored wholesale as JSON under a fixed key. Login
//! overwrites it, logout removes it, and every protected view reads it on
//! mount. There is no token, expiry, or refresh — the record is trusted
//! client-side JSON, exactly as the backend returned it.
//!
//! Storage errors are swallowed on every operation: a corrupted or
//! unavailable store degrades to "not logged in" rather than crashing the
//! UI. The authoritative user record always lives on the backend.

use std::sync::{Arc, Mutex};

use crate::models::User;

/// Fixed localStorage key holding the session record.
pub const SESSION_KEY: &str = "user";

/// Read/write access to the persisted session record.
pub trait SessionStore {
    /// The stored user, or `None` when absent or unreadable.
    fn load(&self) -> Option<User>;
    /// Overwrite the stored record wholesale.
    fn save(&self, user: &User);
    /// Remove the stored record.
    fn clear(&self);
}

/// In-memory SessionStore for native builds and tests. Mirrors localStorage
/// by holding the serialized JSON text, not the decoded struct.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    value: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<User> {
        let raw = self.value.lock().unwrap().clone()?;
        serde_json::from_str(&raw).ok()
    }

    fn save(&self, user: &User) {
        if let Ok(json) = serde_json::to_string(user) {
            *self.value.lock().unwrap() = Some(json);
        }
    }

    fn clear(&self) {
        *self.value.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn user(id: i64, username: &str) -> User {
        User {
            id,
            username: username.into(),
            email: format!("{username}@example.org"),
            role: Role::User,
            points: 10,
            badges: Vec::new(),
            created_at: None,
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = MemoryStore::new();
        assert!(store.load().is_none());

        store.save(&user(1, "asha"));
        let loaded = store.load().unwrap();
        assert_eq!(loaded.id, 1);
        assert_eq!(loaded.username, "asha");
    }

    #[test]
    fn save_overwrites_wholesale() {
        let store = MemoryStore::new();
        store.save(&user(1, "asha"));
        store.save(&user(2, "ravi"));
        assert_eq!(store.load().unwrap().id, 2);
    }

    #[test]
    fn clear_removes_the_record() {
        let store = MemoryStore::new();
        store.save(&user(1, "asha"));
        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn corrupt_record_degrades_to_logged_out() {
        let store = MemoryStore::new();
        *store.value.lock().unwrap() = Some("{not json".into());
        assert!(store.load().is_none());
    }
}
