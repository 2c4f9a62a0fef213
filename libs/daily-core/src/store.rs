//! Persistence for the application state.
//!
//! State is stored as one JSON blob under [`STORAGE_KEY`]. Implementations
//! report failures; the engine decides how to degrade.

use crate::error::{Result, StoreError};
use crate::types::AppState;
use std::sync::Mutex;

/// Key the state blob is stored under.
pub const STORAGE_KEY: &str = "iAlwaysCare";

/// Storage backend for [`AppState`].
pub trait StateStore: Send {
    /// Read the stored state, `Ok(None)` if nothing has been saved.
    fn load(&self) -> Result<Option<AppState>>;

    /// Overwrite the stored state.
    fn save(&self, state: &AppState) -> Result<()>;

    /// Remove the stored state.
    fn clear(&self) -> Result<()>;
}

/// Decode a stored payload.
pub fn decode(payload: &str) -> Result<AppState> {
    Ok(serde_json::from_str(payload)?)
}

/// Encode state for storage.
pub fn encode(state: &AppState) -> Result<String> {
    Ok(serde_json::to_string(state)?)
}

/// In-memory store holding the raw JSON payload.
#[derive(Debug, Default)]
pub struct MemoryStore {
    payload: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a raw payload, e.g. a legacy or corrupt record.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Mutex::new(Some(payload.into())),
        }
    }

    /// Raw stored payload.
    pub fn payload(&self) -> Option<String> {
        self.payload.lock().ok().and_then(|p| p.clone())
    }

    fn slot(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>> {
        self.payload
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<Option<AppState>> {
        self.slot()?.as_deref().map(decode).transpose()
    }

    fn save(&self, state: &AppState) -> Result<()> {
        let encoded = encode(state)?;
        *self.slot()? = Some(encoded);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.slot()? = None;
        Ok(())
    }
}
