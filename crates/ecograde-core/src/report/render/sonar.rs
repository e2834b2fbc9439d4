//! Sonar adapter.
//!
//! Emits the SonarQube generic-issue-import format so a CI pipeline can
//! surface failing metrics as dashboard issues. Exactly one issue is
//! produced per page-metric whose status is warning or error:
//!
//!   - error (below the fail threshold)              → MAJOR
//!   - warning (between the fail and pass thresholds) → MINOR
//!
//! The format requires a file path for every issue location; rendering
//! without one is a configuration error.

use serde::{Deserialize, Serialize};

use crate::error::{AuditError, Result};
use crate::i18n::Translations;
use crate::report::model::GlobalReport;
use crate::score::classify::Status;

const ENGINE_ID: &str = "ecograde";

#[derive(Debug, Serialize, Deserialize)]
pub struct SonarReport {
    pub issues: Vec<SonarIssue>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SonarIssue {
    pub engine_id: String,
    pub rule_id: String,
    pub severity: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub primary_location: PrimaryLocation,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryLocation {
    pub message: String,
    pub file_path: String,
}

fn severity(status: Status) -> Option<&'static str> {
    match status {
        Status::Error => Some("MAJOR"),
        Status::Warning => Some("MINOR"),
        Status::Pass | Status::NotApplicable => None,
    }
}

/// Collects one issue per non-passing page metric, in page order.
pub fn issues(report: &GlobalReport, file_path: &str, i18n: &Translations) -> Vec<SonarIssue> {
    let mut out = Vec::new();

    for page in &report.pages {
        for (metric, status) in page.statuses.iter() {
            let Some(severity) = severity(status) else {
                continue;
            };

            let value = match metric {
                "eco_index" => Some(page.eco_index),
                "performance" => page.metrics.categories.performance,
                "accessibility" => page.metrics.categories.accessibility,
                "best_practices" => page.metrics.categories.best_practices,
                _ => None,
            };

            let label_key = format!("metric.{metric}");
            let label = i18n.get(&label_key);
            let message = match value {
                Some(v) => format!(
                    "{label} {v:.0}/100 for {} ({status})",
                    page.metrics.url
                ),
                None => format!("{label} for {} ({status})", page.metrics.url),
            };

            out.push(SonarIssue {
                engine_id: ENGINE_ID.to_string(),
                rule_id: metric.replace('_', "-"),
                severity: severity.to_string(),
                kind: "CODE_SMELL".to_string(),
                primary_location: PrimaryLocation {
                    message,
                    file_path: file_path.to_string(),
                },
            });
        }
    }

    out
}

pub fn render(
    report: &GlobalReport,
    file_path: Option<&str>,
    i18n: &Translations,
) -> Result<String> {
    let file_path = file_path.ok_or(AuditError::MissingConfig("sonar_file_path"))?;
    let sonar = SonarReport {
        issues: issues(report, file_path, i18n),
    };
    Ok(serde_json::to_string_pretty(&sonar)?)
}
