use std::fmt;
use std::sync::Arc;

use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::backend::{InMemoryTabStorage, StorageError, TabStorage};

/// Prefix applied to every key written by the client.
pub const NAMESPACE: &str = "concursoia_";

/// Keys written by older client versions; removed unconditionally on startup.
pub const LEGACY_KEYS: [&str; 3] = ["simulado_questoes", "simulado_respostas", "indice_atual"];

/// Typed keys of the ephemeral session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKey {
    /// Epoch milliseconds at which the running attempt started.
    SimuladoStartTime,
    /// Cursor of the running attempt.
    SimuladoAtual,
    FontSize,
    FocusMode,
}

impl SessionKey {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SessionKey::SimuladoStartTime => "simuladoStartTime",
            SessionKey::SimuladoAtual => "simuladoAtual",
            SessionKey::FontSize => "fontSize",
            SessionKey::FocusMode => "focusMode",
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn namespaced(key: &str) -> String {
    format!("{NAMESPACE}{key}")
}

/// JSON-typed view over a `TabStorage` that never fails.
///
/// Backend and codec errors are logged and swallowed: `get` degrades to `None`,
/// `set` and `remove` to no-ops. Resume and preferences are best-effort.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn TabStorage>,
}

impl SessionStore {
    #[must_use]
    pub fn new(backend: Arc<dyn TabStorage>) -> Self {
        Self { backend }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryTabStorage::new()))
    }

    pub fn set<T: Serialize + ?Sized>(&self, key: SessionKey, value: &T) {
        if let Err(err) = self.try_set(key, value) {
            warn!("failed to save session key {key}: {err}");
        }
    }

    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: SessionKey) -> Option<T> {
        match self.try_get(key) {
            Ok(value) => value,
            Err(err) => {
                warn!("failed to read session key {key}: {err}");
                None
            }
        }
    }

    #[must_use]
    pub fn contains(&self, key: SessionKey) -> bool {
        self.get::<serde_json::Value>(key)
            .is_some_and(|value| !value.is_null())
    }

    pub fn remove(&self, key: SessionKey) {
        self.remove_raw(key.as_str());
    }

    /// Drop keys left behind by older client versions.
    pub fn clear_legacy(&self) {
        for key in LEGACY_KEYS {
            self.remove_raw(key);
        }
    }

    fn remove_raw(&self, key: &str) {
        if let Err(err) = self.backend.remove_item(&namespaced(key)) {
            warn!("failed to remove session key {key}: {err}");
        }
    }

    fn try_set<T: Serialize + ?Sized>(&self, key: SessionKey, value: &T) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(value)?;
        self.backend.set_item(&namespaced(key.as_str()), encoded)
    }

    fn try_get<T: DeserializeOwned>(&self, key: SessionKey) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.backend.get_item(&namespaced(key.as_str()))? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}
