//! Submission outcome returned to the caller.

use serde::Serialize;

use crate::error::{PersistenceWarning, ValidationFailure};
use crate::models::{InputField, SeveranceResult};

/// The outcome of submitting a severance form.
///
/// Exactly one of `result` and a non-empty `failures` list is present.
/// `warnings` lists persistence problems that did not prevent the result
/// from being returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    /// The calculation result, present when validation passed.
    pub result: Option<SeveranceResult>,
    /// Every validation failure, empty when validation passed.
    pub failures: Vec<ValidationFailure>,
    /// Non-fatal persistence warnings raised while recording the result.
    #[serde(serialize_with = "serialize_warnings")]
    pub warnings: Vec<PersistenceWarning>,
}

impl Submission {
    /// Creates an accepted submission.
    pub fn accepted(result: SeveranceResult, warnings: Vec<PersistenceWarning>) -> Self {
        Self {
            result: Some(result),
            failures: Vec::new(),
            warnings,
        }
    }

    /// Creates a rejected submission.
    pub fn rejected(failures: Vec<ValidationFailure>) -> Self {
        Self {
            result: None,
            failures,
            warnings: Vec::new(),
        }
    }

    /// Returns true if the input passed validation.
    pub fn is_accepted(&self) -> bool {
        self.result.is_some()
    }

    /// Returns the failures attached to a given field.
    pub fn failures_for(&self, field: InputField) -> Vec<&ValidationFailure> {
        self.failures.iter().filter(|f| f.field() == field).collect()
    }
}

fn serialize_warnings<S: serde::Serializer>(
    warnings: &[PersistenceWarning],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(warnings.iter().map(ToString::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_submission_has_no_result() {
        let submission = Submission::rejected(vec![ValidationFailure::InvalidWage]);

        assert!(!submission.is_accepted());
        assert_eq!(submission.failures.len(), 1);
        assert!(submission.warnings.is_empty());
    }

    #[test]
    fn test_failures_for_field() {
        let submission = Submission::rejected(vec![
            ValidationFailure::InvalidWage,
            ValidationFailure::DateOrderInvalid {
                field: InputField::HireDate,
            },
            ValidationFailure::DateOrderInvalid {
                field: InputField::SeparationDate,
            },
        ]);

        assert_eq!(submission.failures_for(InputField::HireDate).len(), 1);
        assert_eq!(submission.failures_for(InputField::DailyWage).len(), 1);
        assert!(
            submission
                .failures_for(InputField::PendingVacationDays)
                .is_empty()
        );
    }

    #[test]
    fn test_rejected_submission_serializes_field_and_message() {
        let submission = Submission::rejected(vec![ValidationFailure::MissingDate {
            field: InputField::SeparationDate,
        }]);
        let json = serde_json::to_value(&submission).unwrap();

        assert!(json["result"].is_null());
        assert_eq!(json["failures"][0]["field"], "separation_date");
        assert_eq!(
            json["failures"][0]["message"],
            "separation_date is missing or is not a valid date"
        );
        assert_eq!(json["warnings"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_warnings_serialize_as_messages() {
        let submission = Submission {
            result: None,
            failures: Vec::new(),
            warnings: vec![PersistenceWarning::WriteFailed {
                key: "calculation_history".to_string(),
                message: "disk full".to_string(),
            }],
        };
        let json = serde_json::to_value(&submission).unwrap();

        assert_eq!(
            json["warnings"][0],
            "Failed to write 'calculation_history' to storage: disk full"
        );
    }
}
