//! Calculation history for the Severance Engine.
//!
//! The [`HistoryStore`] keeps the five most recent calculations and the
//! last successful input on top of a pluggable [`KeyValueStore`].

mod storage;
mod store;

pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use store::{HISTORY_CAPACITY, HISTORY_KEY, HistoryStore, LAST_CALCULATION_KEY};
