//! Configuration types for severance calculation.
//!
//! This module contains the strongly-typed configuration structure that
//! is deserialized from a YAML configuration file.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Statutory parameters that change by jurisdiction and year.
///
/// The zone minimum wage sets the ceiling of the seniority premium wage
/// (twice the minimum wage). It is published yearly by CONASAMI, so it is
/// loaded from configuration rather than compiled in.
///
/// # Example
///
/// ```
/// use severance_engine::config::StatutoryConfig;
/// use rust_decimal::Decimal;
///
/// let config = StatutoryConfig::default();
/// assert_eq!(config.zone_minimum_wage, Decimal::new(41988, 2));
/// assert_eq!(config.seniority_wage_ceiling(), Decimal::new(83976, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryConfig {
    /// The minimum wage zone these parameters apply to.
    pub jurisdiction: String,
    /// The date these parameters became effective.
    pub effective_date: NaiveDate,
    /// URL of the official publication.
    pub source_url: String,
    /// Daily minimum wage for the zone, in MXN.
    pub zone_minimum_wage: Decimal,
    /// Daily general-zone minimum wage, in MXN. Reference only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_minimum_wage: Option<Decimal>,
}

impl StatutoryConfig {
    /// Returns the daily wage ceiling for the seniority premium: twice the
    /// zone minimum wage.
    pub fn seniority_wage_ceiling(&self) -> Decimal {
        self.zone_minimum_wage
            .checked_mul(Decimal::TWO)
            .unwrap_or(Decimal::MAX)
    }
}

impl Default for StatutoryConfig {
    /// Parameters for the Zona Libre de la Frontera Norte, 2025.
    fn default() -> Self {
        StatutoryConfig {
            jurisdiction: "Zona Libre de la Frontera Norte".to_string(),
            effective_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
            source_url: "https://www.gob.mx/conasami".to_string(),
            zone_minimum_wage: Decimal::new(41988, 2),
            general_minimum_wage: Some(Decimal::new(24893, 2)),
        }
    }
}
