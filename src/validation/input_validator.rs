//! Severance input validation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::calculation::statutory_minimum_bonus_days;
use crate::error::ValidationFailure;
use crate::models::{DATE_FORMAT, InputField, NormalizedSeveranceInput, RawSeveranceInput};

/// Largest accepted daily wage in MXN.
pub const MAX_DAILY_WAGE: u32 = 1_000_000;

/// Largest accepted annual bonus entitlement in days.
pub const MAX_ANNUAL_BONUS_DAYS: u32 = 365;

/// Largest accepted number of pending vacation days.
pub const MAX_PENDING_VACATION_DAYS: u32 = 365;

/// Validates a raw severance input.
///
/// Every rule is checked and all failures are returned together, so a form
/// can mark each offending field at once:
///
/// - daily wage missing, not a number or not above zero: `InvalidWage`;
///   above [`MAX_DAILY_WAGE`]: `WageAboveMaximum`
/// - bonus days missing, not a number or below 15: `BonusBelowStatutoryFloor`;
///   above [`MAX_ANNUAL_BONUS_DAYS`]: `BonusAboveMaximum`
/// - a date missing or unparsable: `MissingDate` for that field
/// - hire date on or after separation date: `DateOrderInvalid`, once for
///   each date field
/// - vacation days negative: `NegativeVacationDays`; not a number:
///   `InvalidVacationDays`; above [`MAX_PENDING_VACATION_DAYS`]:
///   `VacationDaysAboveMaximum`
///
/// The maximums keep every accepted input within `Decimal` range through
/// the whole calculation.
///
/// Blank or absent vacation days default to zero and absent flags default
/// to false.
///
/// # Example
///
/// ```
/// use severance_engine::models::RawSeveranceInput;
/// use severance_engine::validation::validate;
///
/// let raw = RawSeveranceInput {
///     daily_wage: Some("500".to_string()),
///     annual_bonus_days: Some("15".to_string()),
///     hire_date: Some("2022-01-01".to_string()),
///     separation_date: Some("2025-06-15".to_string()),
///     ..RawSeveranceInput::default()
/// };
///
/// let input = validate(&raw).unwrap();
/// assert!(input.pending_vacation_days.is_zero());
/// assert!(!input.include_vacation_premium);
/// ```
pub fn validate(
    raw: &RawSeveranceInput,
) -> Result<NormalizedSeveranceInput, Vec<ValidationFailure>> {
    let mut failures = Vec::new();

    let maximum_wage = Decimal::from(MAX_DAILY_WAGE);
    let daily_wage = match parse_decimal(raw.daily_wage.as_deref()) {
        Some(wage) if wage > maximum_wage => {
            failures.push(ValidationFailure::WageAboveMaximum {
                maximum: maximum_wage,
            });
            None
        }
        Some(wage) if wage > Decimal::ZERO => Some(wage),
        _ => {
            failures.push(ValidationFailure::InvalidWage);
            None
        }
    };

    let minimum_bonus = statutory_minimum_bonus_days();
    let maximum_bonus = Decimal::from(MAX_ANNUAL_BONUS_DAYS);
    let annual_bonus_days = match parse_decimal(raw.annual_bonus_days.as_deref()) {
        Some(days) if days > maximum_bonus => {
            failures.push(ValidationFailure::BonusAboveMaximum {
                maximum: maximum_bonus,
            });
            None
        }
        Some(days) if days >= minimum_bonus => Some(days),
        _ => {
            failures.push(ValidationFailure::BonusBelowStatutoryFloor {
                minimum: minimum_bonus,
            });
            None
        }
    };

    let hire_date = parse_date(raw.hire_date.as_deref());
    if hire_date.is_none() {
        failures.push(ValidationFailure::MissingDate {
            field: InputField::HireDate,
        });
    }

    let separation_date = parse_date(raw.separation_date.as_deref());
    if separation_date.is_none() {
        failures.push(ValidationFailure::MissingDate {
            field: InputField::SeparationDate,
        });
    }

    if let (Some(hire), Some(separation)) = (hire_date, separation_date) {
        if hire >= separation {
            failures.push(ValidationFailure::DateOrderInvalid {
                field: InputField::HireDate,
            });
            failures.push(ValidationFailure::DateOrderInvalid {
                field: InputField::SeparationDate,
            });
        }
    }

    let maximum_vacation = Decimal::from(MAX_PENDING_VACATION_DAYS);
    let pending_vacation_days = match non_blank(raw.pending_vacation_days.as_deref()) {
        None => Some(Decimal::ZERO),
        Some(text) => match Decimal::from_str(text) {
            Ok(days) if days.is_sign_negative() && !days.is_zero() => {
                failures.push(ValidationFailure::NegativeVacationDays);
                None
            }
            Ok(days) if days > maximum_vacation => {
                failures.push(ValidationFailure::VacationDaysAboveMaximum {
                    maximum: maximum_vacation,
                });
                None
            }
            Ok(days) => Some(days),
            Err(_) => {
                failures.push(ValidationFailure::InvalidVacationDays);
                None
            }
        },
    };

    match (
        daily_wage,
        annual_bonus_days,
        hire_date,
        separation_date,
        pending_vacation_days,
    ) {
        (
            Some(daily_wage),
            Some(annual_bonus_days),
            Some(hire_date),
            Some(separation_date),
            Some(pending_vacation_days),
        ) if failures.is_empty() => Ok(NormalizedSeveranceInput {
            daily_wage,
            annual_bonus_days,
            hire_date,
            separation_date,
            pending_vacation_days,
            include_twenty_days_per_year: raw.include_twenty_days_per_year.unwrap_or(false),
            include_vacation_premium: raw.include_vacation_premium.unwrap_or(false),
        }),
        _ => Err(failures),
    }
}

/// Returns the trimmed text, or `None` when absent or blank.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}

fn parse_decimal(value: Option<&str>) -> Option<Decimal> {
    non_blank(value).and_then(|text| Decimal::from_str(text).ok())
}

fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    non_blank(value).and_then(|text| NaiveDate::parse_from_str(text, DATE_FORMAT).ok())
}
