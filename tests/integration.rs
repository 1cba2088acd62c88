//! Integration tests for the Severance Engine.
//!
//! This test suite covers complete submissions through the engine:
//! - The reference separation scenario
//! - Long-tenure separations and the 15-year finiquito rule
//! - Wage ceiling for the seniority premium
//! - Validation failures reported together
//! - History ordering, eviction, reload and clearing
//! - Durable persistence across engine instances
//! - Corrupt persisted state

use rust_decimal::Decimal;
use serde_json::Value;
use std::cell::Cell;
use std::str::FromStr;

use severance_engine::config::{ConfigLoader, StatutoryConfig};
use severance_engine::engine::{SeveranceEngine, Submission};
use severance_engine::error::{PersistenceWarning, ValidationFailure};
use severance_engine::history::{FileStore, HISTORY_KEY, KeyValueStore, MemoryStore, StorageError};
use severance_engine::models::{InputField, RawSeveranceInput, SeveranceResult};

// =============================================================================
// Test Helpers
// =============================================================================

fn load_config() -> StatutoryConfig {
    ConfigLoader::load("./config/zona_libre_frontera_norte.yaml")
        .expect("Failed to load config")
        .into_config()
}

fn create_engine() -> SeveranceEngine<MemoryStore> {
    SeveranceEngine::new(load_config(), MemoryStore::new())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn create_form(
    daily_wage: &str,
    annual_bonus_days: &str,
    hire_date: &str,
    separation_date: &str,
) -> RawSeveranceInput {
    RawSeveranceInput {
        daily_wage: Some(daily_wage.to_string()),
        annual_bonus_days: Some(annual_bonus_days.to_string()),
        hire_date: Some(hire_date.to_string()),
        separation_date: Some(separation_date.to_string()),
        pending_vacation_days: None,
        include_twenty_days_per_year: None,
        include_vacation_premium: None,
    }
}

fn reference_form() -> RawSeveranceInput {
    RawSeveranceInput {
        pending_vacation_days: Some("10".to_string()),
        include_twenty_days_per_year: Some(true),
        include_vacation_premium: Some(true),
        ..create_form("500", "15", "2022-01-01", "2025-06-15")
    }
}

/// A memory backend whose next `get` fails once.
#[derive(Default)]
struct FlakyStore {
    inner: MemoryStore,
    fail_next_get: Cell<bool>,
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_next_get.replace(false) {
            return Err(StorageError::new("device busy"));
        }
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set(key, value)
    }

    fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        self.inner.delete(key)
    }
}

fn expect_result(submission: Submission) -> SeveranceResult {
    assert!(
        submission.failures.is_empty(),
        "Unexpected failures: {:?}",
        submission.failures
    );
    submission.result.expect("Expected a result")
}

fn assert_amount(actual: Decimal, expected: &str) {
    assert_eq!(
        actual.round_dp(2),
        decimal(expected),
        "Expected {}, got {}",
        expected,
        actual
    );
}

// =============================================================================
// Calculation scenarios
// =============================================================================

#[test]
fn test_reference_scenario() {
    let mut engine = create_engine();
    let result = expect_result(engine.submit(&reference_form()));

    assert_eq!(result.completed_years, 3);
    assert_eq!(result.days_elapsed_this_year, 165);
    assert_amount(result.proportional_bonus, "3390.41");
    assert_amount(result.vacation_pay, "5000");
    assert_amount(result.vacation_premium, "1250");
    assert_amount(result.capped_wage, "500");
    assert_amount(result.seniority_premium, "18000");
    assert_amount(result.finiquito_total, "9640.41");
    assert_amount(result.indemnity_three_months, "45000");
    assert_amount(result.twenty_days_per_year, "30000");
    assert_amount(result.liquidacion_total, "102640.41");
}

#[test]
fn test_minimal_form_uses_defaults() {
    let mut engine = create_engine();
    let result = expect_result(engine.submit(&create_form(
        "500",
        "15",
        "2022-01-01",
        "2025-06-15",
    )));

    assert_eq!(result.vacation_pay, Decimal::ZERO);
    assert_eq!(result.vacation_premium, Decimal::ZERO);
    assert_eq!(result.twenty_days_per_year, Decimal::ZERO);
    assert_amount(result.finiquito_total, "3390.41");
    assert_amount(result.liquidacion_total, "66390.41");
}

#[test]
fn test_fifteen_years_adds_premium_to_finiquito() {
    let mut engine = create_engine();
    // 2010-01-01 to 2025-01-05: 5483 days = 15 years of 365 days
    let result = expect_result(engine.submit(&create_form(
        "400",
        "15",
        "2010-01-01",
        "2025-01-05",
    )));

    assert_eq!(result.completed_years, 15);
    assert_eq!(result.days_elapsed_this_year, 4);
    assert_amount(result.seniority_premium, "72000");
    assert_eq!(
        result.finiquito_total,
        result.proportional_bonus + result.seniority_premium
    );
    assert!(result.finiquito_includes_seniority_premium());
}

#[test]
fn test_fourteen_years_excludes_premium_from_finiquito() {
    let mut engine = create_engine();
    let result = expect_result(engine.submit(&create_form(
        "400",
        "15",
        "2011-01-01",
        "2025-01-05",
    )));

    assert_eq!(result.completed_years, 14);
    assert_eq!(result.finiquito_total, result.proportional_bonus);
    assert!(!result.finiquito_includes_seniority_premium());
    // The dismissal settlement still carries the premium.
    assert_eq!(
        result.liquidacion_total,
        result.indemnity_three_months + result.seniority_premium + result.proportional_bonus
    );
}

#[test]
fn test_wage_above_double_minimum_is_capped() {
    let mut engine = create_engine();
    let result = expect_result(engine.submit(&create_form(
        "1000",
        "15",
        "2020-01-01",
        "2025-01-01",
    )));

    assert_eq!(result.completed_years, 5);
    assert_amount(result.capped_wage, "839.76");
    assert_amount(result.seniority_premium, "50385.60");
    assert_amount(result.indemnity_three_months, "90000");
}

#[test]
fn test_audit_trace_is_serializable() {
    let mut engine = create_engine();
    let result = expect_result(engine.submit(&reference_form()));

    let json: Value = serde_json::to_value(&result).unwrap();
    let steps = json["audit_trace"]["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 6);
    assert_eq!(steps[3]["clause_ref"], "LFT 162, 486");
    assert_eq!(steps[5]["output"]["indemnity_three_months"], "45000");
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_wage_bonus_and_date_failures_reported_together() {
    let mut engine = create_engine();
    let submission = engine.submit(&create_form("0", "10", "2025-06-15", "2022-01-01"));

    assert!(submission.result.is_none());
    assert!(submission.failures.contains(&ValidationFailure::InvalidWage));
    assert!(
        submission
            .failures
            .iter()
            .any(|f| matches!(f, ValidationFailure::BonusBelowStatutoryFloor { .. }))
    );
    assert_eq!(submission.failures_for(InputField::HireDate).len(), 1);
    assert_eq!(submission.failures_for(InputField::SeparationDate).len(), 1);
}

#[test]
fn test_oversized_amounts_are_rejected() {
    let mut engine = create_engine();
    let submission = engine.submit(&RawSeveranceInput {
        daily_wage: Some("79228162514264337593543950335".to_string()),
        annual_bonus_days: Some("1000".to_string()),
        pending_vacation_days: Some("100000".to_string()),
        ..reference_form()
    });

    assert!(submission.result.is_none());
    assert_eq!(submission.failures.len(), 3);
    assert_eq!(submission.failures_for(InputField::DailyWage).len(), 1);
    assert_eq!(submission.failures_for(InputField::AnnualBonusDays).len(), 1);
    assert_eq!(submission.failures_for(InputField::PendingVacationDays).len(), 1);
}

#[test]
fn test_failed_submission_does_not_touch_history() {
    let mut engine = create_engine();
    expect_result(engine.submit(&reference_form()));

    let submission = engine.submit(&RawSeveranceInput {
        pending_vacation_days: Some("-2".to_string()),
        ..reference_form()
    });

    assert_eq!(
        submission.failures,
        vec![ValidationFailure::NegativeVacationDays]
    );
    assert_eq!(engine.history().list().len(), 1);
    assert_eq!(
        engine.load_last().unwrap().pending_vacation_days,
        decimal("10")
    );
}

// =============================================================================
// History
// =============================================================================

#[test]
fn test_history_keeps_five_newest() {
    let mut engine = create_engine();
    for wage in ["100", "200", "300", "400", "500", "600"] {
        expect_result(engine.submit(&create_form(wage, "15", "2022-01-01", "2025-06-15")));
    }

    let wages: Vec<Decimal> = engine
        .history()
        .list()
        .iter()
        .map(|e| e.daily_wage)
        .collect();
    assert_eq!(
        wages,
        vec![
            decimal("600"),
            decimal("500"),
            decimal("400"),
            decimal("300"),
            decimal("200")
        ]
    );
}

#[test]
fn test_restore_form_from_last_calculation() {
    let mut engine = create_engine();
    let first = expect_result(engine.submit(&reference_form()));

    let restored = RawSeveranceInput::from(&engine.load_last().unwrap());
    let again = expect_result(engine.submit(&restored));

    assert_eq!(first, again);
}

#[test]
fn test_reload_from_history() {
    let mut engine = create_engine();
    let original = expect_result(engine.submit(&reference_form()));
    expect_result(engine.submit(&create_form("900", "20", "2015-03-01", "2025-02-01")));

    let reloaded = expect_result(engine.load_from_history(1).unwrap());
    assert_eq!(reloaded, original);
}

#[test]
fn test_reload_legacy_entry_without_hire_date_fails_validation() {
    let mut storage = MemoryStore::new();
    storage
        .set(
            HISTORY_KEY,
            r#"[{
                "separation_date": "2025-06-15",
                "finiquito_total": "9640.41",
                "liquidacion_total": "102640.41",
                "daily_wage": "500",
                "include_vacation_premium": true,
                "recorded_at": "2025-06-15T10:30:00Z"
            }]"#,
        )
        .unwrap();
    let mut engine = SeveranceEngine::new(load_config(), storage);

    let submission = engine.load_from_history(0).unwrap();
    assert_eq!(
        submission.failures,
        vec![ValidationFailure::MissingDate {
            field: InputField::HireDate
        }]
    );
    assert_eq!(engine.history().list().len(), 1);
}

#[test]
fn test_corrupt_history_is_replaced_on_next_submission() {
    let mut storage = MemoryStore::new();
    storage.set(HISTORY_KEY, "not json at all").unwrap();
    let mut engine = SeveranceEngine::new(load_config(), storage);

    assert!(engine.history().list().is_empty());
    let submission = engine.submit(&reference_form());

    assert!(submission.is_accepted());
    assert!(submission.warnings.is_empty());
    assert_eq!(engine.history().list().len(), 1);
}

#[test]
fn test_history_read_failure_is_reported_and_keeps_entries() {
    let mut engine = SeveranceEngine::new(load_config(), FlakyStore::default());
    for wage in ["100", "200", "300", "400"] {
        expect_result(engine.submit(&create_form(wage, "15", "2022-01-01", "2025-06-15")));
    }

    engine.history().storage().fail_next_get.set(true);
    let submission = engine.submit(&create_form("500", "15", "2022-01-01", "2025-06-15"));

    assert!(submission.is_accepted());
    assert!(matches!(
        submission.warnings.as_slice(),
        [PersistenceWarning::ReadFailed { .. }]
    ));
    assert_eq!(engine.history().list().len(), 4);
    assert_eq!(engine.load_last().unwrap().daily_wage, decimal("500"));
}

#[test]
fn test_file_store_persists_across_engines() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut engine = SeveranceEngine::new(load_config(), FileStore::new(dir.path()));
        expect_result(engine.submit(&reference_form()));
        expect_result(engine.submit(&create_form("700", "15", "2019-05-01", "2025-03-31")));
    }

    let engine = SeveranceEngine::new(load_config(), FileStore::new(dir.path()));
    let entries = engine.history().list();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].daily_wage, decimal("700"));
    assert_eq!(entries[1].daily_wage, decimal("500"));
    assert_eq!(engine.load_last().unwrap().daily_wage, decimal("700"));
}

#[test]
fn test_clear_removes_persisted_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = SeveranceEngine::new(load_config(), FileStore::new(dir.path()));
    expect_result(engine.submit(&reference_form()));

    assert!(engine.clear().is_empty());
    assert!(!dir.path().join("calculation_history.json").exists());
    assert!(!dir.path().join("last_calculation.json").exists());
}
