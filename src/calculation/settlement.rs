//! Settlement totals: finiquito and liquidación.
//!
//! The finiquito is paid on voluntary separation and includes the seniority
//! premium only after 15 years of service (LFT article 162, fraction III).
//! The liquidación is paid on unjustified dismissal: three months of wage
//! (LFT article 48), optionally 20 days per year of service (LFT article 50)
//! and the seniority premium regardless of tenure.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// Years of service after which voluntary separation earns the seniority premium.
pub const VOLUNTARY_SENIORITY_THRESHOLD_YEARS: u32 = 15;

/// Days of wage paid as the constitutional three-month indemnity.
pub const INDEMNITY_DAYS: u32 = 90;

/// Days of wage paid per year of service under the 20-days indemnity.
pub const TWENTY_DAYS_INDEMNITY_PER_YEAR: u32 = 20;

/// Amounts owed on any separation, shared by both settlements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccruedBenefits {
    /// Pro-rated annual bonus.
    pub proportional_bonus: Decimal,
    /// Pay for unused vacation days.
    pub vacation_pay: Decimal,
    /// Premium on vacation pay.
    pub vacation_premium: Decimal,
}

impl AccruedBenefits {
    /// Returns the sum of the accrued benefits.
    pub fn total(&self) -> Decimal {
        self.proportional_bonus + self.vacation_pay + self.vacation_premium
    }
}

/// The result of a finiquito calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiniquitoResult {
    /// Whether the seniority premium was included.
    pub seniority_premium_included: bool,
    /// The finiquito total.
    pub total: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The result of a liquidación calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidacionResult {
    /// 90 days of wage.
    pub indemnity_three_months: Decimal,
    /// 20 days of wage per year of service; zero when not included.
    pub twenty_days_per_year: Decimal,
    /// The liquidación total.
    pub total: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the voluntary separation settlement.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::{calculate_finiquito, AccruedBenefits};
/// use rust_decimal::Decimal;
///
/// let accrued = AccruedBenefits {
///     proportional_bonus: Decimal::from(1000),
///     vacation_pay: Decimal::from(500),
///     vacation_premium: Decimal::ZERO,
/// };
///
/// let short = calculate_finiquito(&accrued, Decimal::from(18000), 3, 6);
/// assert_eq!(short.total, Decimal::from(1500));
///
/// let long = calculate_finiquito(&accrued, Decimal::from(90000), 15, 6);
/// assert_eq!(long.total, Decimal::from(91500));
/// ```
pub fn calculate_finiquito(
    accrued: &AccruedBenefits,
    seniority_premium: Decimal,
    completed_years: u32,
    step_number: u32,
) -> FiniquitoResult {
    let seniority_premium_included = completed_years >= VOLUNTARY_SENIORITY_THRESHOLD_YEARS;
    let premium_component = if seniority_premium_included {
        seniority_premium
    } else {
        Decimal::ZERO
    };
    let total = accrued.total() + premium_component;

    let reasoning = if seniority_premium_included {
        format!(
            "{} years >= {}: accrued ${} + seniority premium ${} = ${}",
            completed_years,
            VOLUNTARY_SENIORITY_THRESHOLD_YEARS,
            accrued.total().round_dp(2),
            seniority_premium.round_dp(2),
            total.round_dp(2)
        )
    } else {
        format!(
            "{} years < {}: seniority premium excluded; accrued ${} = ${}",
            completed_years,
            VOLUNTARY_SENIORITY_THRESHOLD_YEARS,
            accrued.total().round_dp(2),
            total.round_dp(2)
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "finiquito".to_string(),
        rule_name: "Voluntary Separation Settlement".to_string(),
        clause_ref: "LFT 162 fr. III".to_string(),
        input: serde_json::json!({
            "proportional_bonus": accrued.proportional_bonus.normalize().to_string(),
            "vacation_pay": accrued.vacation_pay.normalize().to_string(),
            "vacation_premium": accrued.vacation_premium.normalize().to_string(),
            "seniority_premium": seniority_premium.normalize().to_string(),
            "completed_years": completed_years
        }),
        output: serde_json::json!({
            "seniority_premium_included": seniority_premium_included,
            "finiquito_total": total.normalize().to_string()
        }),
        reasoning,
    };

    FiniquitoResult {
        seniority_premium_included,
        total,
        audit_step,
    }
}

/// Calculates the unjustified dismissal settlement.
///
/// The seniority premium is always included, whatever the tenure.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::{calculate_liquidacion, AccruedBenefits};
/// use rust_decimal::Decimal;
///
/// let accrued = AccruedBenefits {
///     proportional_bonus: Decimal::ZERO,
///     vacation_pay: Decimal::ZERO,
///     vacation_premium: Decimal::ZERO,
/// };
///
/// let result = calculate_liquidacion(&accrued, Decimal::from(18000), Decimal::from(500), 3, true, 7);
/// assert_eq!(result.indemnity_three_months, Decimal::from(45000));
/// assert_eq!(result.twenty_days_per_year, Decimal::from(30000));
/// assert_eq!(result.total, Decimal::from(93000));
/// ```
pub fn calculate_liquidacion(
    accrued: &AccruedBenefits,
    seniority_premium: Decimal,
    daily_wage: Decimal,
    completed_years: u32,
    include_twenty_days_per_year: bool,
    step_number: u32,
) -> LiquidacionResult {
    let indemnity_three_months = Decimal::from(INDEMNITY_DAYS) * daily_wage;
    let twenty_days_per_year = if include_twenty_days_per_year {
        Decimal::from(TWENTY_DAYS_INDEMNITY_PER_YEAR) * Decimal::from(completed_years) * daily_wage
    } else {
        Decimal::ZERO
    };
    let total = indemnity_three_months + twenty_days_per_year + seniority_premium + accrued.total();

    let audit_step = AuditStep {
        step_number,
        rule_id: "liquidacion".to_string(),
        rule_name: "Unjustified Dismissal Settlement".to_string(),
        clause_ref: "LFT 48, 50, 162".to_string(),
        input: serde_json::json!({
            "daily_wage": daily_wage.normalize().to_string(),
            "completed_years": completed_years,
            "include_twenty_days_per_year": include_twenty_days_per_year,
            "seniority_premium": seniority_premium.normalize().to_string(),
            "accrued_benefits": accrued.total().normalize().to_string()
        }),
        output: serde_json::json!({
            "indemnity_three_months": indemnity_three_months.normalize().to_string(),
            "twenty_days_per_year": twenty_days_per_year.normalize().to_string(),
            "liquidacion_total": total.normalize().to_string()
        }),
        reasoning: format!(
            "{} days x ${} = ${}; 20 days per year ${}; seniority premium ${}; accrued ${}; total ${}",
            INDEMNITY_DAYS,
            daily_wage.normalize(),
            indemnity_three_months.normalize(),
            twenty_days_per_year.normalize(),
            seniority_premium.round_dp(2),
            accrued.total().round_dp(2),
            total.round_dp(2)
        ),
    };

    LiquidacionResult {
        indemnity_three_months,
        twenty_days_per_year,
        total,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn accrued() -> AccruedBenefits {
        AccruedBenefits {
            proportional_bonus: dec("3390.41"),
            vacation_pay: dec("5000"),
            vacation_premium: dec("1250"),
        }
    }

    #[test]
    fn test_finiquito_excludes_premium_under_15_years() {
        let result = calculate_finiquito(&accrued(), dec("18000"), 3, 1);

        assert!(!result.seniority_premium_included);
        assert_eq!(result.total, dec("9640.41"));
        assert!(result.audit_step.reasoning.contains("excluded"));
    }

    #[test]
    fn test_finiquito_excludes_premium_at_14_years() {
        let result = calculate_finiquito(&accrued(), dec("84000"), 14, 1);
        assert!(!result.seniority_premium_included);
        assert_eq!(result.total, dec("9640.41"));
    }

    #[test]
    fn test_finiquito_includes_premium_at_exactly_15_years() {
        let result = calculate_finiquito(&accrued(), dec("90000"), 15, 1);

        assert!(result.seniority_premium_included);
        assert_eq!(result.total, dec("99640.41"));
    }

    #[test]
    fn test_liquidacion_with_twenty_days() {
        let result = calculate_liquidacion(&accrued(), dec("18000"), dec("500"), 3, true, 1);

        assert_eq!(result.indemnity_three_months, dec("45000"));
        assert_eq!(result.twenty_days_per_year, dec("30000"));
        assert_eq!(result.total, dec("102640.41"));
    }

    #[test]
    fn test_liquidacion_without_twenty_days() {
        let result = calculate_liquidacion(&accrued(), dec("18000"), dec("500"), 3, false, 1);

        assert_eq!(result.twenty_days_per_year, Decimal::ZERO);
        assert_eq!(result.total, dec("72640.41"));
    }

    #[test]
    fn test_liquidacion_includes_premium_under_15_years() {
        let without_premium =
            calculate_liquidacion(&accrued(), Decimal::ZERO, dec("500"), 1, false, 1);
        let with_premium = calculate_liquidacion(&accrued(), dec("6000"), dec("500"), 1, false, 1);

        assert_eq!(with_premium.total - without_premium.total, dec("6000"));
    }

    #[test]
    fn test_liquidacion_twenty_days_with_zero_years() {
        let result = calculate_liquidacion(&accrued(), Decimal::ZERO, dec("500"), 0, true, 1);
        assert_eq!(result.twenty_days_per_year, Decimal::ZERO);
    }

    #[test]
    fn test_audit_steps_reference_lft() {
        let finiquito = calculate_finiquito(&accrued(), dec("18000"), 3, 7);
        let liquidacion = calculate_liquidacion(&accrued(), dec("18000"), dec("500"), 3, true, 8);

        assert_eq!(finiquito.audit_step.step_number, 7);
        assert_eq!(finiquito.audit_step.clause_ref, "LFT 162 fr. III");
        assert_eq!(liquidacion.audit_step.step_number, 8);
        assert_eq!(liquidacion.audit_step.clause_ref, "LFT 48, 50, 162");
        assert_eq!(
            liquidacion.audit_step.output["liquidacion_total"],
            "102640.41"
        );
    }
}
