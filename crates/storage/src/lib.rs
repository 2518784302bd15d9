#![forbid(unsafe_code)]

pub mod backend;
pub mod session_store;

pub use backend::{DisabledTabStorage, InMemoryTabStorage, StorageError, TabStorage};
pub use session_store::{LEGACY_KEYS, NAMESPACE, SessionKey, SessionStore};
