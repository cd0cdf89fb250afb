//! Session store: the in-memory current session plus its persisted copy.
//!
//! DESIGN
//! ======
//! The store is read once at construction and afterwards treated as the
//! source of truth; storage is written through on every mutation but never
//! re-read in the background. The in-memory value is updated before the write
//! so a failing backend degrades to a session that lasts for the page
//! lifetime rather than a failed sign-in.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::error::StorageError;
use crate::session::Session;
use crate::storage::SessionStorage;

pub struct SessionStore<S> {
    storage: S,
    key: String,
    current: Option<Session>,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Open the slot at `key` and load any persisted session.
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let mut store = Self {
            storage,
            key: key.into(),
            current: None,
        };
        store.load();
        store
    }

    /// Re-read the persisted slot, replacing the in-memory session.
    ///
    /// Absence yields `None` silently; unreadable or malformed data also
    /// yields `None`, logged at `warn`.
    pub fn load(&mut self) -> Option<Session> {
        self.current = match self.storage.read(&self.key) {
            Ok(Some(raw)) => decode(&raw),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "session slot unreadable; starting signed out");
                None
            }
        };
        self.current.clone()
    }

    #[must_use]
    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Make `session` current and persist it, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns the storage error if persisting failed. The in-memory session
    /// is replaced either way.
    pub fn save(&mut self, session: Session) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&session)?;
        self.current = Some(session);
        self.storage.write(&self.key, &raw)
    }

    /// Drop the current session and remove the persisted copy.
    ///
    /// # Errors
    ///
    /// Returns the storage error if removal failed. The in-memory session is
    /// cleared either way.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.current = None;
        self.storage.remove(&self.key)
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Parse a persisted blob, rejecting anything that breaks the session invariant.
pub(crate) fn decode(raw: &str) -> Option<Session> {
    match serde_json::from_str::<Session>(raw) {
        Ok(session) if session.is_valid() => Some(session),
        Ok(_) => {
            tracing::warn!("persisted session has an empty id; ignoring");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "persisted session is malformed; ignoring");
            None
        }
    }
}
