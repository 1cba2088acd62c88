//! Severance result models.
//!
//! This module contains the [`SeveranceResult`] type and the audit structures
//! that record how each amount was reached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::VOLUNTARY_SENIORITY_THRESHOLD_YEARS;

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the Ley Federal del Trabajo article for this rule.
    pub clause_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a severance calculation.
///
/// Holds no timing information, so two runs over the same input produce
/// identical traces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
}

/// The itemized result of a severance calculation.
///
/// All monetary amounts are non-negative and expressed in MXN. Amounts are
/// not rounded; rounding for display is left to the caller.
///
/// # Example
///
/// ```
/// use severance_engine::models::{AuditTrace, SeveranceResult};
/// use rust_decimal::Decimal;
///
/// let result = SeveranceResult {
///     total_days_of_service: 0,
///     completed_years: 0,
///     days_elapsed_this_year: 0,
///     capped_wage: Decimal::ZERO,
///     proportional_bonus: Decimal::ZERO,
///     vacation_pay: Decimal::ZERO,
///     vacation_premium: Decimal::ZERO,
///     seniority_premium: Decimal::ZERO,
///     finiquito_total: Decimal::ZERO,
///     indemnity_three_months: Decimal::ZERO,
///     twenty_days_per_year: Decimal::ZERO,
///     liquidacion_total: Decimal::ZERO,
///     audit_trace: AuditTrace::default(),
/// };
/// assert_eq!(result.finiquito_total, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveranceResult {
    /// Whole days between hire date and separation date.
    pub total_days_of_service: u32,
    /// Whole 365-day years of service.
    pub completed_years: u32,
    /// Days from January 1 of the separation year to the separation date.
    pub days_elapsed_this_year: u32,
    /// Daily wage clamped to the seniority premium ceiling.
    pub capped_wage: Decimal,
    /// Pro-rated annual bonus (aguinaldo proporcional).
    pub proportional_bonus: Decimal,
    /// Pay for unused vacation days.
    pub vacation_pay: Decimal,
    /// Premium on unused vacation pay (prima vacacional).
    pub vacation_premium: Decimal,
    /// Seniority premium (prima de antigüedad).
    pub seniority_premium: Decimal,
    /// Voluntary separation settlement.
    pub finiquito_total: Decimal,
    /// Constitutional indemnity of 90 days of wage.
    pub indemnity_three_months: Decimal,
    /// Indemnity of 20 days of wage per year of service.
    pub twenty_days_per_year: Decimal,
    /// Unjustified dismissal settlement.
    pub liquidacion_total: Decimal,
    /// Audit trace of every rule applied.
    pub audit_trace: AuditTrace,
}

impl SeveranceResult {
    /// Returns true if the finiquito includes the seniority premium, which
    /// it does from 15 completed years of service.
    pub fn finiquito_includes_seniority_premium(&self) -> bool {
        self.completed_years >= VOLUNTARY_SENIORITY_THRESHOLD_YEARS
    }
}
