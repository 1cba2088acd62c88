//! The severance engine: validate, calculate, record.

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_severance;
use crate::config::StatutoryConfig;
use crate::error::{EngineResult, PersistenceWarning};
use crate::history::{HistoryStore, KeyValueStore};
use crate::models::{HistoryEntry, NormalizedSeveranceInput, RawSeveranceInput};
use crate::validation::validate;

use super::submission::Submission;

/// Owns the statutory configuration and the history store, and runs the
/// validate → calculate → record cycle for each submitted form.
///
/// # Example
///
/// ```
/// use severance_engine::config::StatutoryConfig;
/// use severance_engine::engine::SeveranceEngine;
/// use severance_engine::history::MemoryStore;
/// use severance_engine::models::RawSeveranceInput;
///
/// let mut engine = SeveranceEngine::new(StatutoryConfig::default(), MemoryStore::new());
///
/// let submission = engine.submit(&RawSeveranceInput {
///     daily_wage: Some("500".to_string()),
///     annual_bonus_days: Some("15".to_string()),
///     hire_date: Some("2022-01-01".to_string()),
///     separation_date: Some("2025-06-15".to_string()),
///     ..RawSeveranceInput::default()
/// });
///
/// assert!(submission.is_accepted());
/// assert_eq!(engine.history().list().len(), 1);
/// ```
#[derive(Debug)]
pub struct SeveranceEngine<S> {
    config: StatutoryConfig,
    history: HistoryStore<S>,
}

impl<S: KeyValueStore> SeveranceEngine<S> {
    /// Creates an engine over the given configuration and storage backend.
    pub fn new(config: StatutoryConfig, storage: S) -> Self {
        Self {
            config,
            history: HistoryStore::new(storage),
        }
    }

    /// Returns the statutory configuration.
    pub fn config(&self) -> &StatutoryConfig {
        &self.config
    }

    /// Returns the history store.
    pub fn history(&self) -> &HistoryStore<S> {
        &self.history
    }

    /// Validates and calculates a submitted form, recording the result.
    ///
    /// On validation failure nothing is calculated and the history is left
    /// untouched.
    pub fn submit(&mut self, raw: &RawSeveranceInput) -> Submission {
        self.submit_at(raw, Utc::now())
    }

    /// Same as [`submit`](Self::submit) with an explicit recording time.
    pub fn submit_at(&mut self, raw: &RawSeveranceInput, recorded_at: DateTime<Utc>) -> Submission {
        let correlation_id = Uuid::new_v4();
        info!(correlation_id = %correlation_id, "Processing severance submission");

        let input = match validate(raw) {
            Ok(input) => input,
            Err(failures) => {
                warn!(
                    correlation_id = %correlation_id,
                    failures = failures.len(),
                    "Severance submission rejected"
                );
                return Submission::rejected(failures);
            }
        };

        let result = calculate_severance(&input, &self.config);

        let mut warnings: Vec<PersistenceWarning> = Vec::new();
        warnings.extend(self.history.record_last(&input, &result));
        warnings.extend(
            self.history
                .append(HistoryEntry::new(&input, &result, recorded_at)),
        );

        info!(
            correlation_id = %correlation_id,
            completed_years = result.completed_years,
            finiquito_total = %result.finiquito_total.round_dp(2),
            liquidacion_total = %result.liquidacion_total.round_dp(2),
            warnings = warnings.len(),
            "Severance calculation completed"
        );

        Submission::accepted(result, warnings)
    }

    /// Returns the input of the last successful calculation, to restore a form.
    pub fn load_last(&self) -> Option<NormalizedSeveranceInput> {
        self.history.load_last()
    }

    /// Reloads the history entry at `index` and submits it again.
    ///
    /// The resubmission becomes the newest history entry.
    pub fn load_from_history(&mut self, index: usize) -> EngineResult<Submission> {
        let entry = self.history.get(index)?;
        info!(index, "Loading calculation from history");
        Ok(self.submit(&entry.to_raw_input()))
    }

    /// Clears the history and the last-calculation slot.
    pub fn clear(&mut self) -> Vec<PersistenceWarning> {
        info!("Clearing calculation history");
        self.history.clear()
    }
}
