//! Threshold classification.
//!
//! Every 0-100 metric is classified against the configured `{pass, fail}`
//! bounds. The partition is strict:
//!
//!   - value >= pass          → Pass
//!   - fail <= value < pass   → Warning
//!   - value < fail           → Error
//!   - absent value           → NotApplicable
//!
//! Classification is pure and deterministic. Exit codes for CI gating
//! derive strictly from the worst observed status:
//!
//!   - Pass / NotApplicable → 0
//!   - Warning              → 1
//!   - Error                → 2

use serde::{Deserialize, Serialize};

use crate::config::Thresholds;

/// Per-metric verdict. Variants are ordered from benign to severe so that
/// `max` yields the worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    NotApplicable,
    Pass,
    Warning,
    Error,
}

impl Status {
    /// Worst status of a set; an empty set is NotApplicable.
    pub fn worst(statuses: impl IntoIterator<Item = Status>) -> Status {
        statuses
            .into_iter()
            .max()
            .unwrap_or(Status::NotApplicable)
    }

    pub fn exit_code(self) -> i32 {
        match self {
            Status::Error => 2,
            Status::Warning => 1,
            Status::Pass | Status::NotApplicable => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::NotApplicable => "not-applicable",
            Status::Pass => "pass",
            Status::Warning => "warning",
            Status::Error => "error",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a metric value against the thresholds.
pub fn classify(value: Option<f64>, thresholds: &Thresholds) -> Status {
    match value {
        None => Status::NotApplicable,
        Some(v) if v >= thresholds.pass => Status::Pass,
        Some(v) if v >= thresholds.fail => Status::Warning,
        Some(_) => Status::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thresholds() -> Thresholds {
        Thresholds::default()
    }

    #[test]
    fn partition_at_the_pass_boundary() {
        assert_eq!(classify(Some(90.0), &thresholds()), Status::Pass);
        assert_eq!(classify(Some(89.999), &thresholds()), Status::Warning);
    }

    #[test]
    fn partition_at_the_fail_boundary() {
        assert_eq!(classify(Some(30.0), &thresholds()), Status::Warning);
        assert_eq!(classify(Some(29.999), &thresholds()), Status::Error);
    }

    #[test]
    fn extremes_classify_cleanly() {
        assert_eq!(classify(Some(100.0), &thresholds()), Status::Pass);
        assert_eq!(classify(Some(0.0), &thresholds()), Status::Error);
    }

    #[test]
    fn absent_values_are_not_applicable() {
        assert_eq!(classify(None, &thresholds()), Status::NotApplicable);
    }

    #[test]
    fn custom_thresholds_shift_the_partition() {
        let t = Thresholds::new(80.0, 20.0).expect("valid thresholds");
        assert_eq!(classify(Some(85.0), &t), Status::Pass);
        assert_eq!(classify(Some(50.0), &t), Status::Warning);
        assert_eq!(classify(Some(19.0), &t), Status::Error);
    }

    #[test]
    fn worst_folds_towards_error() {
        let statuses = [Status::Pass, Status::Warning, Status::NotApplicable];
        assert_eq!(Status::worst(statuses), Status::Warning);

        let statuses = [Status::Pass, Status::Error, Status::Warning];
        assert_eq!(Status::worst(statuses), Status::Error);

        assert_eq!(Status::worst(std::iter::empty()), Status::NotApplicable);
    }

    #[test]
    fn exit_codes_follow_the_worst_status() {
        assert_eq!(Status::Pass.exit_code(), 0);
        assert_eq!(Status::NotApplicable.exit_code(), 0);
        assert_eq!(Status::Warning.exit_code(), 1);
        assert_eq!(Status::Error.exit_code(), 2);
    }

    #[test]
    fn status_serializes_in_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Status::NotApplicable).expect("serialize"),
            "\"not-applicable\""
        );
        assert_eq!(
            serde_json::to_string(&Status::Pass).expect("serialize"),
            "\"pass\""
        );
    }

    #[test]
    fn classification_is_deterministic() {
        let t = thresholds();
        for v in [0.0, 29.999, 30.0, 59.9, 90.0, 100.0] {
            assert_eq!(classify(Some(v), &t), classify(Some(v), &t));
        }
    }
}
