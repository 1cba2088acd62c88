//! Vacation pay and vacation premium calculation.
//!
//! Unused vacation days are paid out at the daily wage (LFT article 79). The
//! vacation premium (prima vacacional) adds 25% of that pay when applicable
//! (LFT article 80).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// Returns the vacation premium rate as defined in LFT article 80.
///
/// The rate is 0.25 (25% of vacation pay).
pub fn vacation_premium_rate() -> Decimal {
    Decimal::new(25, 2)
}

/// The result of a vacation pay calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationPayResult {
    /// Pay for unused vacation days.
    pub vacation_pay: Decimal,
    /// Premium on the vacation pay; zero when not included.
    pub vacation_premium: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates vacation pay and, when requested, the vacation premium.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::calculate_vacation_pay;
/// use rust_decimal::Decimal;
///
/// let result = calculate_vacation_pay(Decimal::from(10), Decimal::from(500), true, 3);
/// assert_eq!(result.vacation_pay, Decimal::from(5000));
/// assert_eq!(result.vacation_premium, Decimal::from(1250));
/// ```
pub fn calculate_vacation_pay(
    pending_vacation_days: Decimal,
    daily_wage: Decimal,
    include_vacation_premium: bool,
    step_number: u32,
) -> VacationPayResult {
    let vacation_pay = pending_vacation_days * daily_wage;
    let rate = if include_vacation_premium {
        vacation_premium_rate()
    } else {
        Decimal::ZERO
    };
    let vacation_premium = vacation_pay * rate;

    let reasoning = if include_vacation_premium {
        format!(
            "{} days x ${} = ${}; premium {} x ${} = ${}",
            pending_vacation_days.normalize(),
            daily_wage.normalize(),
            vacation_pay.normalize(),
            rate.normalize(),
            vacation_pay.normalize(),
            vacation_premium.normalize()
        )
    } else {
        format!(
            "{} days x ${} = ${}; no vacation premium applied",
            pending_vacation_days.normalize(),
            daily_wage.normalize(),
            vacation_pay.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "vacation_pay".to_string(),
        rule_name: "Vacation Pay and Premium".to_string(),
        clause_ref: "LFT 79, 80".to_string(),
        input: serde_json::json!({
            "pending_vacation_days": pending_vacation_days.normalize().to_string(),
            "daily_wage": daily_wage.normalize().to_string(),
            "include_vacation_premium": include_vacation_premium
        }),
        output: serde_json::json!({
            "vacation_pay": vacation_pay.normalize().to_string(),
            "vacation_premium": vacation_premium.normalize().to_string(),
            "premium_applied": include_vacation_premium
        }),
        reasoning,
    };

    VacationPayResult {
        vacation_pay,
        vacation_premium,
        audit_step,
    }
}
