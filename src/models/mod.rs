//! Core data models for the Severance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod history_entry;
mod input;
mod severance_result;

pub use history_entry::{HistoryEntry, LastCalculation};
pub use input::{DATE_FORMAT, InputField, NormalizedSeveranceInput, RawSeveranceInput};
pub use severance_result::{AuditStep, AuditTrace, SeveranceResult};
