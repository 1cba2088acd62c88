//! Bounded calculation history.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult, PersistenceWarning};
use crate::models::{HistoryEntry, LastCalculation, NormalizedSeveranceInput, SeveranceResult};

use super::storage::KeyValueStore;

/// Storage key of the last-calculation slot.
pub const LAST_CALCULATION_KEY: &str = "last_calculation";

/// Storage key of the history ledger.
pub const HISTORY_KEY: &str = "calculation_history";

/// Maximum number of entries kept in the ledger.
pub const HISTORY_CAPACITY: usize = 5;

/// A bounded, most-recent-first ledger of past calculations plus the
/// "last calculation" slot used to restore a form.
///
/// Persistence problems never fail an operation. Writes report a
/// [`PersistenceWarning`]; reads of missing or corrupt data yield an empty
/// ledger or an empty slot. Every warning is also logged.
///
/// # Example
///
/// ```
/// use severance_engine::history::{HistoryStore, MemoryStore};
///
/// let store = HistoryStore::new(MemoryStore::new());
/// assert!(store.list().is_empty());
/// assert!(store.load_last().is_none());
/// ```
#[derive(Debug)]
pub struct HistoryStore<S> {
    storage: S,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Creates a history store over the given storage backend.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Returns the underlying storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Overwrites the last-calculation slot.
    pub fn record_last(
        &mut self,
        input: &NormalizedSeveranceInput,
        result: &SeveranceResult,
    ) -> Option<PersistenceWarning> {
        self.write_json(LAST_CALCULATION_KEY, &LastCalculation::new(input, result))
    }

    /// Returns the contents of the last-calculation slot.
    pub fn last_calculation(&self) -> Option<LastCalculation> {
        self.read_json(LAST_CALCULATION_KEY).ok().flatten()
    }

    /// Returns the input of the most recent successful calculation.
    pub fn load_last(&self) -> Option<NormalizedSeveranceInput> {
        self.last_calculation().map(|last| last.input)
    }

    /// Prepends an entry, keeping only the newest [`HISTORY_CAPACITY`] entries.
    ///
    /// A corrupt ledger is replaced. If the ledger cannot be read at all the
    /// stored entries are left untouched and the read failure is returned.
    pub fn append(&mut self, entry: HistoryEntry) -> Option<PersistenceWarning> {
        let mut entries: Vec<HistoryEntry> = match self.read_json(HISTORY_KEY) {
            Ok(entries) => entries.unwrap_or_default(),
            Err(warning) => {
                warn!(key = HISTORY_KEY, "Skipping history append");
                return Some(warning);
            }
        };
        entries.insert(0, entry);
        entries.truncate(HISTORY_CAPACITY);
        self.write_json(HISTORY_KEY, &entries)
    }

    /// Returns the stored entries, newest first.
    ///
    /// Returns an empty list when nothing is stored or the stored data is corrupt.
    pub fn list(&self) -> Vec<HistoryEntry> {
        self.read_json(HISTORY_KEY).ok().flatten().unwrap_or_default()
    }

    /// Returns the entry at `index`, where 0 is the newest.
    pub fn get(&self, index: usize) -> EngineResult<HistoryEntry> {
        let mut entries = self.list();
        let len = entries.len();
        if index >= len {
            return Err(EngineError::HistoryIndexOutOfRange { index, len });
        }
        Ok(entries.swap_remove(index))
    }

    /// Removes both the ledger and the last-calculation slot.
    pub fn clear(&mut self) -> Vec<PersistenceWarning> {
        [HISTORY_KEY, LAST_CALCULATION_KEY]
            .into_iter()
            .filter_map(|key| {
                self.storage.delete(key).err().map(|e| {
                    let warning = PersistenceWarning::DeleteFailed {
                        key: key.to_string(),
                        message: e.message,
                    };
                    warn!(key, error = %warning, "Failed to clear stored history");
                    warning
                })
            })
            .collect()
    }

    /// Reads and parses a stored value.
    ///
    /// Missing and corrupt values read as `Ok(None)`. Only a failing backend
    /// is an error.
    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, PersistenceWarning> {
        let content = match self.storage.get(key) {
            Ok(Some(content)) => content,
            Ok(None) => return Ok(None),
            Err(e) => {
                let warning = PersistenceWarning::ReadFailed {
                    key: key.to_string(),
                    message: e.message,
                };
                warn!(key, error = %warning, "Stored history unavailable");
                return Err(warning);
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => {
                debug!(key, bytes = content.len(), "Loaded stored history");
                Ok(Some(value))
            }
            Err(e) => {
                let warning = PersistenceWarning::Corrupt {
                    key: key.to_string(),
                    message: e.to_string(),
                };
                warn!(key, error = %warning, "Treating corrupt stored history as empty");
                Ok(None)
            }
        }
    }

    fn write_json<T: Serialize + ?Sized>(
        &mut self,
        key: &str,
        value: &T,
    ) -> Option<PersistenceWarning> {
        let content = match serde_json::to_string(value) {
            Ok(content) => content,
            Err(e) => {
                let warning = PersistenceWarning::WriteFailed {
                    key: key.to_string(),
                    message: e.to_string(),
                };
                warn!(key, error = %warning, "Failed to serialize history");
                return Some(warning);
            }
        };

        match self.storage.set(key, &content) {
            Ok(()) => {
                debug!(key, bytes = content.len(), "Saved history");
                None
            }
            Err(e) => {
                let warning = PersistenceWarning::WriteFailed {
                    key: key.to_string(),
                    message: e.message,
                };
                warn!(key, error = %warning, "Failed to save history");
                Some(warning)
            }
        }
    }
}
