//! localStorage-backed SessionStore for the web platform.

use crate::models::User;
use crate::session::{SessionStore, SESSION_KEY};

/// Browser localStorage session store. Zero-size; the connection is the
/// window's storage object, fetched per operation.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalStorage {
    fn load(&self) -> Option<User> {
        let raw = Self::storage()?.get_item(SESSION_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }

    fn save(&self, user: &User) {
        if let (Some(storage), Ok(json)) = (Self::storage(), serde_json::to_string(user)) {
            let _ = storage.set_item(SESSION_KEY, &json);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}
