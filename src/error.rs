//! Error types for the Severance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Three categories exist:
//!
//! - [`ValidationFailure`]: user-correctable problems with a submitted form.
//!   These are always reported as a complete list.
//! - [`PersistenceWarning`]: read, write or parse failures in the history
//!   store. They are logged and degrade to an empty state, never fatal.
//! - [`EngineError`]: configuration loading failures and history lookups
//!   outside the stored range.

use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

use crate::models::InputField;

/// The main error type for the Severance Engine.
///
/// # Example
///
/// ```
/// use severance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value the engine cannot use.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A history lookup fell outside the stored entries.
    #[error("History index {index} out of range (history holds {len} entries)")]
    HistoryIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of entries currently stored.
        len: usize,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

/// A user-correctable problem with a submitted severance form.
///
/// Each failure knows which input field it belongs to, so a form can
/// highlight every offending field at once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    /// Daily wage missing, not a number, or not greater than zero.
    #[error("Daily wage must be greater than 0")]
    InvalidWage,

    /// Daily wage above the largest amount the engine accepts.
    #[error("Daily wage cannot exceed {maximum}")]
    WageAboveMaximum {
        /// The largest accepted daily wage.
        maximum: Decimal,
    },

    /// Annual bonus entitlement missing, not a number, or below the legal floor.
    #[error("Annual bonus must be at least {minimum} days")]
    BonusBelowStatutoryFloor {
        /// The statutory minimum number of bonus days.
        minimum: Decimal,
    },

    /// Annual bonus entitlement above the days in a year.
    #[error("Annual bonus cannot exceed {maximum} days")]
    BonusAboveMaximum {
        /// The largest accepted number of bonus days.
        maximum: Decimal,
    },

    /// A date field was missing or could not be parsed.
    #[error("{field} is missing or is not a valid date")]
    MissingDate {
        /// The date field that failed.
        field: InputField,
    },

    /// The hire date is not strictly before the separation date.
    ///
    /// Reported once for each of the two date fields.
    #[error("{field}: hire date must be before separation date")]
    DateOrderInvalid {
        /// The date field this report is attached to.
        field: InputField,
    },

    /// Pending vacation days were negative.
    #[error("Pending vacation days cannot be negative")]
    NegativeVacationDays,

    /// Pending vacation days were present but not a number.
    #[error("Pending vacation days must be a number")]
    InvalidVacationDays,

    /// Pending vacation days above the largest accepted count.
    #[error("Pending vacation days cannot exceed {maximum}")]
    VacationDaysAboveMaximum {
        /// The largest accepted number of pending vacation days.
        maximum: Decimal,
    },
}

impl ValidationFailure {
    /// Returns the input field this failure should be displayed against.
    pub fn field(&self) -> InputField {
        match self {
            ValidationFailure::InvalidWage | ValidationFailure::WageAboveMaximum { .. } => {
                InputField::DailyWage
            }
            ValidationFailure::BonusBelowStatutoryFloor { .. }
            | ValidationFailure::BonusAboveMaximum { .. } => InputField::AnnualBonusDays,
            ValidationFailure::MissingDate { field }
            | ValidationFailure::DateOrderInvalid { field } => *field,
            ValidationFailure::NegativeVacationDays
            | ValidationFailure::InvalidVacationDays
            | ValidationFailure::VacationDaysAboveMaximum { .. } => InputField::PendingVacationDays,
        }
    }
}

impl Serialize for ValidationFailure {
    /// Serializes as `{ "field": ..., "message": ... }` for form display.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationFailure", 2)?;
        state.serialize_field("field", &self.field())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// A non-fatal persistence problem encountered by the history store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceWarning {
    /// Reading a key from storage failed.
    #[error("Failed to read '{key}' from storage: {message}")]
    ReadFailed {
        /// The storage key.
        key: String,
        /// The underlying storage message.
        message: String,
    },

    /// Writing a key to storage failed.
    #[error("Failed to write '{key}' to storage: {message}")]
    WriteFailed {
        /// The storage key.
        key: String,
        /// The underlying storage message.
        message: String,
    },

    /// Deleting a key from storage failed.
    #[error("Failed to delete '{key}' from storage: {message}")]
    DeleteFailed {
        /// The storage key.
        key: String,
        /// The underlying storage message.
        message: String,
    },

    /// Stored data could not be parsed and was treated as empty.
    #[error("Stored data under '{key}' is corrupt: {message}")]
    Corrupt {
        /// The storage key.
        key: String,
        /// The parse error.
        message: String,
    },
}
