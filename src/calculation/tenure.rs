//! Tenure calculation functionality.
//!
//! This module determines the length of service: total days, whole years of
//! service and days elapsed in the separation year.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// Days in a service year.
///
/// A fixed 365-day year is used for seniority, with no leap-year or
/// calendar-month adjustment.
pub const DAYS_PER_SERVICE_YEAR: u32 = 365;

/// The result of a tenure calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenureResult {
    /// Whole days between hire date and separation date.
    pub total_days: u32,
    /// Whole 365-day years of service.
    pub completed_years: u32,
    /// Days from January 1 of the separation year to the separation date.
    pub days_elapsed_this_year: u32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the whole days from `from` to `to`, or zero if `to` is earlier.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::days_between;
/// use chrono::NaiveDate;
///
/// let a = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
/// let b = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
/// assert_eq!(days_between(a, b), 1261);
/// assert_eq!(days_between(b, a), 0);
/// ```
pub fn days_between(from: NaiveDate, to: NaiveDate) -> u32 {
    let days = (to - from).num_days().max(0);
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// Calculates the length of service for a separation.
///
/// # Arguments
///
/// * `hire_date` - Start of employment
/// * `separation_date` - End of employment
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::calculate_tenure;
/// use chrono::NaiveDate;
///
/// let result = calculate_tenure(
///     NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
///     1,
/// );
/// assert_eq!(result.total_days, 1261);
/// assert_eq!(result.completed_years, 3);
/// assert_eq!(result.days_elapsed_this_year, 165);
/// ```
pub fn calculate_tenure(
    hire_date: NaiveDate,
    separation_date: NaiveDate,
    step_number: u32,
) -> TenureResult {
    let total_days = days_between(hire_date, separation_date);
    let completed_years = total_days / DAYS_PER_SERVICE_YEAR;
    // ordinal0 counts days since January 1 of the same year
    let days_elapsed_this_year = separation_date.ordinal0();

    let audit_step = AuditStep {
        step_number,
        rule_id: "tenure".to_string(),
        rule_name: "Length of Service".to_string(),
        clause_ref: "LFT 162".to_string(),
        input: serde_json::json!({
            "hire_date": hire_date.to_string(),
            "separation_date": separation_date.to_string()
        }),
        output: serde_json::json!({
            "total_days": total_days,
            "completed_years": completed_years,
            "days_elapsed_this_year": days_elapsed_this_year
        }),
        reasoning: format!(
            "{} days of service / {} = {} completed years; {} days elapsed since January 1, {}",
            total_days,
            DAYS_PER_SERVICE_YEAR,
            completed_years,
            days_elapsed_this_year,
            separation_date.year()
        ),
    };

    TenureResult {
        total_days,
        completed_years,
        days_elapsed_this_year,
        audit_step,
    }
}
