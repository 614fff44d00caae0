// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session storage backends.
//!
//! The original dashboard kept its session in browser local storage; this
//! client keeps the same key/value shape behind a backend trait so the
//! storage medium is interchangeable: a JSON file for the console, an
//! in-memory map for tests.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;

/// Errors that can occur reading or writing a session store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying file could not be read or written.
    #[error("session store I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The stored content is not a valid session document.
    #[error("session store is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    /// The in-memory store's lock was poisoned by a panicking holder.
    #[error("session store lock poisoned")]
    Poisoned,
}

/// Trait for backend-specific session storage.
///
/// Entries are flat string key/value pairs, mirroring the local-storage
/// shape the session was originally persisted in.
pub trait SessionStore: Send + Sync {
    /// Loads every stored entry.
    ///
    /// A store that has never been written loads as empty, not as an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be read or holds
    /// content that is not a session document.
    fn load(&self) -> Result<HashMap<String, String>, StoreError>;

    /// Replaces the stored entries wholesale.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be written.
    fn save(&self, entries: &HashMap<String, String>) -> Result<(), StoreError>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<HashMap<String, String>, StoreError> {
        self.entries
            .lock()
            .map(|guard| guard.clone())
            .map_err(|_| StoreError::Poisoned)
    }

    fn save(&self, entries: &HashMap<String, String>) -> Result<(), StoreError> {
        let mut guard = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        *guard = entries.clone();
        Ok(())
    }
}

/// File-backed store holding the session as a JSON object.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the given file path.
    ///
    /// The file is created on first save; a missing file loads as an
    /// empty session.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SessionStore for JsonFileStore {
    fn load(&self) -> Result<HashMap<String, String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(HashMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn save(&self, entries: &HashMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content: String = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
