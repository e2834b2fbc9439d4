//! Category scores from the external `lighthouse` CLI.
//!
//! The audit engine is an external collaborator: it is invoked as a
//! subprocess with JSON output and only its category scores are consumed.
//! A missing binary or a malformed report degrades to absent scores so the
//! eco-index part of the audit still completes.

use serde::Deserialize;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::{AuditError, Result};
use crate::metrics::model::CategoryScores;

#[derive(Debug, Deserialize)]
struct LighthouseRoot {
    categories: LighthouseCategories,
}

#[derive(Debug, Deserialize)]
struct LighthouseCategories {
    performance: Option<LighthouseCategory>,
    accessibility: Option<LighthouseCategory>,
    #[serde(rename = "best-practices")]
    best_practices: Option<LighthouseCategory>,
}

#[derive(Debug, Deserialize)]
struct LighthouseCategory {
    score: Option<f64>,
}

/// Runs the audit engine for one URL. Failures are logged and mapped to
/// `CategoryScores::default()`.
pub async fn category_scores(url: &str) -> CategoryScores {
    match run(url).await {
        Ok(scores) => scores,
        Err(e) => {
            warn!(url, error = %e, "audit engine unavailable, category scores skipped");
            CategoryScores::default()
        }
    }
}

async fn run(url: &str) -> Result<CategoryScores> {
    let output = Command::new("lighthouse")
        .arg(url)
        .arg("--output=json")
        .arg("--output-path=stdout")
        .arg("--quiet")
        .arg("--no-enable-error-reporting")
        .arg("--chrome-flags=--headless --no-sandbox")
        .arg("--only-categories=performance,accessibility,best-practices")
        .output()
        .await?;

    if !output.status.success() {
        return Err(AuditError::AuditEngine(
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ));
    }

    let scores = parse_categories(&output.stdout)?;
    debug!(url, "audit engine categories parsed");
    Ok(scores)
}

/// Extracts the 0-1 category scores from a raw report and rescales them
/// to 0-100.
fn parse_categories(raw: &[u8]) -> Result<CategoryScores> {
    let root: LighthouseRoot = serde_json::from_slice(raw)?;
    let to_percent = |category: Option<LighthouseCategory>| {
        category.and_then(|c| c.score).map(|s| (s * 100.0).round())
    };

    Ok(CategoryScores {
        performance: to_percent(root.categories.performance),
        accessibility: to_percent(root.categories.accessibility),
        best_practices: to_percent(root.categories.best_practices),
    })
}
