//! History models persisted by the history store.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{DATE_FORMAT, NormalizedSeveranceInput, RawSeveranceInput, SeveranceResult};

/// Bonus days assumed when restoring an entry saved without them.
const RESTORE_DEFAULT_BONUS_DAYS: u32 = 15;

/// A past calculation recorded in the history ledger.
///
/// The required fields are the summary shown in a history list. The
/// optional fields complete the form so the entry can be loaded back and
/// recalculated; entries written without them still parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// End of employment.
    pub separation_date: NaiveDate,
    /// Voluntary separation settlement.
    pub finiquito_total: Decimal,
    /// Unjustified dismissal settlement.
    pub liquidacion_total: Decimal,
    /// Gross daily salary used.
    pub daily_wage: Decimal,
    /// Whether the vacation premium was applied.
    pub include_vacation_premium: bool,
    /// When the calculation was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Annual bonus entitlement in days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_bonus_days: Option<Decimal>,
    /// Start of employment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<NaiveDate>,
    /// Unused vacation days owed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_vacation_days: Option<Decimal>,
    /// Whether the 20-days-per-year indemnity was applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_twenty_days_per_year: Option<bool>,
}

impl HistoryEntry {
    /// Builds an entry from a successful calculation.
    pub fn new(
        input: &NormalizedSeveranceInput,
        result: &SeveranceResult,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        HistoryEntry {
            separation_date: input.separation_date,
            finiquito_total: result.finiquito_total,
            liquidacion_total: result.liquidacion_total,
            daily_wage: input.daily_wage,
            include_vacation_premium: input.include_vacation_premium,
            recorded_at,
            annual_bonus_days: Some(input.annual_bonus_days),
            hire_date: Some(input.hire_date),
            pending_vacation_days: Some(input.pending_vacation_days),
            include_twenty_days_per_year: Some(input.include_twenty_days_per_year),
        }
    }

    /// Rebuilds the form values this entry was calculated from.
    ///
    /// Values missing from older entries fall back to 15 bonus days, no
    /// pending vacation and no 20-days indemnity. A missing hire date stays
    /// missing, so resubmitting it fails validation.
    pub fn to_raw_input(&self) -> RawSeveranceInput {
        let bonus_days = self
            .annual_bonus_days
            .unwrap_or_else(|| Decimal::from(RESTORE_DEFAULT_BONUS_DAYS));
        RawSeveranceInput {
            daily_wage: Some(self.daily_wage.to_string()),
            annual_bonus_days: Some(bonus_days.to_string()),
            hire_date: self
                .hire_date
                .map(|date| date.format(DATE_FORMAT).to_string()),
            separation_date: Some(self.separation_date.format(DATE_FORMAT).to_string()),
            pending_vacation_days: Some(
                self.pending_vacation_days
                    .unwrap_or(Decimal::ZERO)
                    .to_string(),
            ),
            include_twenty_days_per_year: Some(
                self.include_twenty_days_per_year.unwrap_or(false),
            ),
            include_vacation_premium: Some(self.include_vacation_premium),
        }
    }
}

/// The single "last calculation" slot used to restore the form on startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastCalculation {
    /// The input of the most recent successful calculation.
    pub input: NormalizedSeveranceInput,
    /// Its voluntary separation settlement.
    pub finiquito_total: Decimal,
    /// Its unjustified dismissal settlement.
    pub liquidacion_total: Decimal,
}

impl LastCalculation {
    /// Builds the slot contents from a successful calculation.
    pub fn new(input: &NormalizedSeveranceInput, result: &SeveranceResult) -> Self {
        LastCalculation {
            input: input.clone(),
            finiquito_total: result.finiquito_total,
            liquidacion_total: result.liquidacion_total,
        }
    }
}
