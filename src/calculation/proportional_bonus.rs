//! Proportional annual bonus (aguinaldo proporcional) calculation.
//!
//! LFT article 87 grants an annual bonus of at least 15 days of wage. On
//! separation the bonus is paid in proportion to the days elapsed in the
//! separation year.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

use super::tenure::DAYS_PER_SERVICE_YEAR;

/// The statutory minimum annual bonus in days.
pub fn statutory_minimum_bonus_days() -> Decimal {
    Decimal::from(15)
}

/// The result of a proportional bonus calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProportionalBonusResult {
    /// The pro-rated bonus amount.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the bonus owed for the part of the year worked.
///
/// `amount = daily_wage * annual_bonus_days * (days_elapsed_this_year / 365)`
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::calculate_proportional_bonus;
/// use rust_decimal::Decimal;
///
/// let result = calculate_proportional_bonus(Decimal::from(500), Decimal::from(15), 165, 2);
/// assert_eq!(result.amount.round_dp(2), Decimal::new(339041, 2));
/// ```
pub fn calculate_proportional_bonus(
    daily_wage: Decimal,
    annual_bonus_days: Decimal,
    days_elapsed_this_year: u32,
    step_number: u32,
) -> ProportionalBonusResult {
    let year_fraction =
        Decimal::from(days_elapsed_this_year) / Decimal::from(DAYS_PER_SERVICE_YEAR);
    let amount = daily_wage * annual_bonus_days * year_fraction;

    let audit_step = AuditStep {
        step_number,
        rule_id: "proportional_bonus".to_string(),
        rule_name: "Proportional Annual Bonus".to_string(),
        clause_ref: "LFT 87".to_string(),
        input: serde_json::json!({
            "daily_wage": daily_wage.normalize().to_string(),
            "annual_bonus_days": annual_bonus_days.normalize().to_string(),
            "days_elapsed_this_year": days_elapsed_this_year
        }),
        output: serde_json::json!({
            "proportional_bonus": amount.normalize().to_string()
        }),
        reasoning: format!(
            "${} x {} days x ({} / {}) = ${}",
            daily_wage.normalize(),
            annual_bonus_days.normalize(),
            days_elapsed_this_year,
            DAYS_PER_SERVICE_YEAR,
            amount.round_dp(2)
        ),
    };

    ProportionalBonusResult { amount, audit_step }
}
