//! Cart persistence
//!
//! The persisted schema is an ordered JSON array of [`CartLine`] records,
//! nothing else. Persistence is a durability side channel: the manager
//! treats every store failure as survivable.

use parking_lot::Mutex;
use shared::cart::CartLine;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Durable key-value slot for the cart snapshot
///
/// `load` returns `Ok(None)` when no snapshot exists; corruption surfaces
/// as an error and the manager degrades to an empty cart.
pub trait CartStore: Send + Sync {
    fn load(&self) -> Result<Option<Vec<CartLine>>, StoreError>;
    fn save(&self, lines: &[CartLine]) -> Result<(), StoreError>;
    fn delete(&self) -> Result<(), StoreError>;
}

/// File-backed store: one `cart.json` under the profile directory
pub struct JsonFileStore {
    file_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(profile_dir: &Path) -> Self {
        Self {
            file_path: profile_dir.join("cart.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl CartStore for JsonFileStore {
    fn load(&self) -> Result<Option<Vec<CartLine>>, StoreError> {
        if !self.file_path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.file_path)?;
        let lines: Vec<CartLine> = serde_json::from_str(&content)?;
        Ok(Some(lines))
    }

    fn save(&self, lines: &[CartLine]) -> Result<(), StoreError> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(lines)?;
        std::fs::write(&self.file_path, content)?;
        tracing::debug!(path = %self.file_path.display(), lines = lines.len(), "Cart snapshot saved");
        Ok(())
    }

    fn delete(&self) -> Result<(), StoreError> {
        if self.file_path.exists() {
            std::fs::remove_file(&self.file_path)?;
            tracing::debug!(path = %self.file_path.display(), "Cart snapshot deleted");
        }
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Default)]
pub struct MemoryStore {
    slot: Mutex<Option<Vec<CartLine>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStore for MemoryStore {
    fn load(&self) -> Result<Option<Vec<CartLine>>, StoreError> {
        Ok(self.slot.lock().clone())
    }

    fn save(&self, lines: &[CartLine]) -> Result<(), StoreError> {
        *self.slot.lock() = Some(lines.to_vec());
        Ok(())
    }

    fn delete(&self) -> Result<(), StoreError> {
        *self.slot.lock() = None;
        Ok(())
    }
}
