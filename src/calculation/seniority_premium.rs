//! Seniority premium (prima de antigüedad) calculation.
//!
//! LFT article 162 grants 12 days of wage per year of service. Article 486
//! caps the wage used for this premium at twice the zone minimum wage.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// Days of wage granted per completed year of service.
pub const SENIORITY_PREMIUM_DAYS_PER_YEAR: u32 = 12;

/// The result of a seniority premium calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeniorityPremiumResult {
    /// The daily wage after applying the ceiling.
    pub capped_wage: Decimal,
    /// The seniority premium amount.
    pub seniority_premium: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Clamps a daily wage to the seniority premium ceiling.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::capped_wage;
/// use rust_decimal::Decimal;
///
/// let ceiling = Decimal::new(83976, 2);
/// assert_eq!(capped_wage(Decimal::from(500), ceiling), Decimal::from(500));
/// assert_eq!(capped_wage(Decimal::from(1200), ceiling), ceiling);
/// ```
pub fn capped_wage(daily_wage: Decimal, ceiling: Decimal) -> Decimal {
    daily_wage.min(ceiling)
}

/// Calculates the seniority premium.
///
/// # Arguments
///
/// * `daily_wage` - The employee's gross daily wage
/// * `completed_years` - Whole years of service
/// * `ceiling` - The wage ceiling (twice the zone minimum wage)
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::calculate_seniority_premium;
/// use rust_decimal::Decimal;
///
/// let result = calculate_seniority_premium(Decimal::from(500), 3, Decimal::new(83976, 2), 4);
/// assert_eq!(result.seniority_premium, Decimal::from(18000));
/// ```
pub fn calculate_seniority_premium(
    daily_wage: Decimal,
    completed_years: u32,
    ceiling: Decimal,
    step_number: u32,
) -> SeniorityPremiumResult {
    let capped = capped_wage(daily_wage, ceiling);
    let seniority_premium =
        Decimal::from(SENIORITY_PREMIUM_DAYS_PER_YEAR) * Decimal::from(completed_years) * capped;
    let cap_applied = capped < daily_wage;

    let wage_note = if cap_applied {
        format!(
            "wage ${} capped at ${}",
            daily_wage.normalize(),
            capped.normalize()
        )
    } else {
        format!(
            "wage ${} below ceiling ${}",
            daily_wage.normalize(),
            ceiling.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "seniority_premium".to_string(),
        rule_name: "Seniority Premium".to_string(),
        clause_ref: "LFT 162, 486".to_string(),
        input: serde_json::json!({
            "daily_wage": daily_wage.normalize().to_string(),
            "completed_years": completed_years,
            "wage_ceiling": ceiling.normalize().to_string()
        }),
        output: serde_json::json!({
            "capped_wage": capped.normalize().to_string(),
            "cap_applied": cap_applied,
            "seniority_premium": seniority_premium.normalize().to_string()
        }),
        reasoning: format!(
            "{}; {} days x {} years x ${} = ${}",
            wage_note,
            SENIORITY_PREMIUM_DAYS_PER_YEAR,
            completed_years,
            capped.normalize(),
            seniority_premium.normalize()
        ),
    };

    SeniorityPremiumResult {
        capped_wage: capped,
        seniority_premium,
        audit_step,
    }
}
