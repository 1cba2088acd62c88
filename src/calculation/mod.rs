//! Calculation logic for the Severance Engine.
//!
//! This module contains the calculation functions for a separation under the
//! Ley Federal del Trabajo: length of service, proportional annual bonus,
//! vacation pay and premium, the capped seniority premium, and the finiquito
//! and liquidación totals. [`calculate_severance`] chains them in order.

mod proportional_bonus;
mod seniority_premium;
mod settlement;
mod severance;
mod tenure;
mod vacation_pay;

pub use proportional_bonus::{
    ProportionalBonusResult, calculate_proportional_bonus, statutory_minimum_bonus_days,
};
pub use seniority_premium::{
    SENIORITY_PREMIUM_DAYS_PER_YEAR, SeniorityPremiumResult, calculate_seniority_premium,
    capped_wage,
};
pub use settlement::{
    AccruedBenefits, FiniquitoResult, INDEMNITY_DAYS, LiquidacionResult,
    TWENTY_DAYS_INDEMNITY_PER_YEAR, VOLUNTARY_SENIORITY_THRESHOLD_YEARS, calculate_finiquito,
    calculate_liquidacion,
};
pub use severance::calculate_severance;
pub use tenure::{DAYS_PER_SERVICE_YEAR, TenureResult, calculate_tenure, days_between};
pub use vacation_pay::{VacationPayResult, calculate_vacation_pay, vacation_premium_rate};
