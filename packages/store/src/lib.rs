pub mod feed;
pub mod models;

mod session;
pub use session::{MemoryStore, SessionStore, SESSION_KEY};

#[cfg(target_arch = "wasm32")]
mod local;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;

pub use models::{
    Decision, GenAiAnalysis, Role, Submission, SubmissionStatus, SubmissionType, User,
};

/// Session store for the current platform: browser localStorage on the web,
/// a process-wide in-memory store everywhere else.
#[cfg(target_arch = "wasm32")]
pub fn session_store() -> impl SessionStore {
    LocalStorage::new()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn session_store() -> impl SessionStore {
    use std::sync::OnceLock;
    static STORE: OnceLock<MemoryStore> = OnceLock::new();
    STORE.get_or_init(MemoryStore::new).clone()
}
