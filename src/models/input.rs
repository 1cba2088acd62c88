//! Severance input models.
//!
//! A [`RawSeveranceInput`] mirrors what a form submits: every value is
//! optional and numbers arrive as text. The validator turns it into a
//! [`NormalizedSeveranceInput`] with concrete types and defaults applied.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Date format used by form date fields and persisted dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Identifies a single input field, used to attach validation failures
/// to the field that caused them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    /// Gross daily salary.
    DailyWage,
    /// Contractual annual bonus entitlement in days.
    AnnualBonusDays,
    /// Start of employment.
    HireDate,
    /// End of employment.
    SeparationDate,
    /// Unused vacation days owed.
    PendingVacationDays,
}

impl InputField {
    /// Returns the snake_case name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputField::DailyWage => "daily_wage",
            InputField::AnnualBonusDays => "annual_bonus_days",
            InputField::HireDate => "hire_date",
            InputField::SeparationDate => "separation_date",
            InputField::PendingVacationDays => "pending_vacation_days",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severance input as supplied by the caller, before validation.
///
/// # Example
///
/// ```
/// use severance_engine::models::RawSeveranceInput;
///
/// let raw = RawSeveranceInput {
///     daily_wage: Some("500".to_string()),
///     annual_bonus_days: Some("15".to_string()),
///     hire_date: Some("2022-01-01".to_string()),
///     separation_date: Some("2025-06-15".to_string()),
///     ..RawSeveranceInput::default()
/// };
/// assert!(raw.pending_vacation_days.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSeveranceInput {
    /// Gross daily salary.
    pub daily_wage: Option<String>,
    /// Annual bonus entitlement in days.
    pub annual_bonus_days: Option<String>,
    /// Hire date as `YYYY-MM-DD`.
    pub hire_date: Option<String>,
    /// Separation date as `YYYY-MM-DD`.
    pub separation_date: Option<String>,
    /// Unused vacation days owed.
    pub pending_vacation_days: Option<String>,
    /// Whether the dismissal settlement adds 20 days per year of service.
    pub include_twenty_days_per_year: Option<bool>,
    /// Whether the 25% vacation premium applies to unused vacation pay.
    pub include_vacation_premium: Option<bool>,
}

/// Severance input after validation, with defaults applied.
///
/// Only the validator constructs this type from raw form data, so the
/// calculator can rely on its invariants: positive wage, bonus days at or
/// above the statutory floor, hire date strictly before separation date and
/// non-negative vacation days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedSeveranceInput {
    /// Gross daily salary.
    pub daily_wage: Decimal,
    /// Annual bonus entitlement in days.
    pub annual_bonus_days: Decimal,
    /// Start of employment.
    pub hire_date: NaiveDate,
    /// End of employment.
    pub separation_date: NaiveDate,
    /// Unused vacation days owed.
    pub pending_vacation_days: Decimal,
    /// Whether the dismissal settlement adds 20 days per year of service.
    pub include_twenty_days_per_year: bool,
    /// Whether the 25% vacation premium applies to unused vacation pay.
    pub include_vacation_premium: bool,
}

impl From<&NormalizedSeveranceInput> for RawSeveranceInput {
    /// Converts a normalized input back to form values, e.g. to restore the
    /// form from the last calculation.
    fn from(input: &NormalizedSeveranceInput) -> Self {
        RawSeveranceInput {
            daily_wage: Some(input.daily_wage.to_string()),
            annual_bonus_days: Some(input.annual_bonus_days.to_string()),
            hire_date: Some(input.hire_date.format(DATE_FORMAT).to_string()),
            separation_date: Some(input.separation_date.format(DATE_FORMAT).to_string()),
            pending_vacation_days: Some(input.pending_vacation_days.to_string()),
            include_twenty_days_per_year: Some(input.include_twenty_days_per_year),
            include_vacation_premium: Some(input.include_vacation_premium),
        }
    }
}
