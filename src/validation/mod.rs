//! Input validation for the Severance Engine.
//!
//! This module gates the calculator: it turns a [`RawSeveranceInput`] into a
//! [`NormalizedSeveranceInput`] or reports every problem found.
//!
//! [`RawSeveranceInput`]: crate::models::RawSeveranceInput
//! [`NormalizedSeveranceInput`]: crate::models::NormalizedSeveranceInput

mod input_validator;

pub use input_validator::{
    MAX_ANNUAL_BONUS_DAYS, MAX_DAILY_WAGE, MAX_PENDING_VACATION_DAYS, validate,
};
