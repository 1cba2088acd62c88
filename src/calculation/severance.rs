//! Full severance calculation.
//!
//! Chains the individual rules in order and assembles the itemized
//! [`SeveranceResult`] with its audit trace.

use crate::config::StatutoryConfig;
use crate::models::{AuditTrace, NormalizedSeveranceInput, SeveranceResult};

use super::proportional_bonus::calculate_proportional_bonus;
use super::seniority_premium::calculate_seniority_premium;
use super::settlement::{AccruedBenefits, calculate_finiquito, calculate_liquidacion};
use super::tenure::calculate_tenure;
use super::vacation_pay::calculate_vacation_pay;

/// Calculates both settlements for a validated input.
///
/// This function has no failure mode: every invalid input is rejected by the
/// validator before it gets here. It performs no I/O and is deterministic, so
/// the same input and configuration always produce an identical result.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::calculate_severance;
/// use severance_engine::config::StatutoryConfig;
/// use severance_engine::models::NormalizedSeveranceInput;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let input = NormalizedSeveranceInput {
///     daily_wage: Decimal::from(500),
///     annual_bonus_days: Decimal::from(15),
///     hire_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
///     separation_date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
///     pending_vacation_days: Decimal::from(10),
///     include_twenty_days_per_year: true,
///     include_vacation_premium: true,
/// };
///
/// let result = calculate_severance(&input, &StatutoryConfig::default());
/// assert_eq!(result.completed_years, 3);
/// assert_eq!(result.finiquito_total.round_dp(2), Decimal::new(964041, 2));
/// assert_eq!(result.liquidacion_total.round_dp(2), Decimal::new(10264041, 2));
/// ```
pub fn calculate_severance(
    input: &NormalizedSeveranceInput,
    config: &StatutoryConfig,
) -> SeveranceResult {
    let mut steps = Vec::with_capacity(6);

    let tenure = calculate_tenure(input.hire_date, input.separation_date, 1);
    steps.push(tenure.audit_step);

    let bonus = calculate_proportional_bonus(
        input.daily_wage,
        input.annual_bonus_days,
        tenure.days_elapsed_this_year,
        2,
    );
    steps.push(bonus.audit_step);

    let vacation = calculate_vacation_pay(
        input.pending_vacation_days,
        input.daily_wage,
        input.include_vacation_premium,
        3,
    );
    steps.push(vacation.audit_step);

    let seniority = calculate_seniority_premium(
        input.daily_wage,
        tenure.completed_years,
        config.seniority_wage_ceiling(),
        4,
    );
    steps.push(seniority.audit_step);

    let accrued = AccruedBenefits {
        proportional_bonus: bonus.amount,
        vacation_pay: vacation.vacation_pay,
        vacation_premium: vacation.vacation_premium,
    };

    let finiquito = calculate_finiquito(
        &accrued,
        seniority.seniority_premium,
        tenure.completed_years,
        5,
    );
    steps.push(finiquito.audit_step);

    let liquidacion = calculate_liquidacion(
        &accrued,
        seniority.seniority_premium,
        input.daily_wage,
        tenure.completed_years,
        input.include_twenty_days_per_year,
        6,
    );
    steps.push(liquidacion.audit_step);

    SeveranceResult {
        total_days_of_service: tenure.total_days,
        completed_years: tenure.completed_years,
        days_elapsed_this_year: tenure.days_elapsed_this_year,
        capped_wage: seniority.capped_wage,
        proportional_bonus: accrued.proportional_bonus,
        vacation_pay: accrued.vacation_pay,
        vacation_premium: accrued.vacation_premium,
        seniority_premium: seniority.seniority_premium,
        finiquito_total: finiquito.total,
        indemnity_three_months: liquidacion.indemnity_three_months,
        twenty_days_per_year: liquidacion.twenty_days_per_year,
        liquidacion_total: liquidacion.total,
        audit_trace: AuditTrace { steps },
    }
}
