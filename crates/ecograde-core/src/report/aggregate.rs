//! Aggregation of page reports into a global report.
//!
//! The global report is derived once from the ordered list of page reports:
//! mean scores, worst status, CI exit code. Zero pages must never divide by
//! zero; means over absent category scores skip the absent values.

use chrono::Utc;

use crate::REPORT_SCHEMA_VERSION;
use crate::config::Thresholds;
use crate::report::model::{GlobalReport, PageReport, ToolInfo};
use crate::score::classify::Status;
use crate::score::ecoindex::{grade, round2};

pub fn aggregate(pages: Vec<PageReport>, thresholds: Thresholds, tool: ToolInfo) -> GlobalReport {
    let eco_index = mean(pages.iter().map(|p| p.eco_index));
    let status = Status::worst(pages.iter().map(PageReport::worst_status));

    GlobalReport {
        schema_version: REPORT_SCHEMA_VERSION.to_string(),
        tool,
        generated_at: Utc::now().to_rfc3339(),
        thresholds,
        eco_index,
        grade: grade(eco_index),
        performance: mean_present(pages.iter().map(|p| p.metrics.categories.performance)),
        accessibility: mean_present(pages.iter().map(|p| p.metrics.categories.accessibility)),
        best_practices: mean_present(pages.iter().map(|p| p.metrics.categories.best_practices)),
        status,
        exit_code: status.exit_code(),
        pages,
    }
}

/// Mean of a score sequence; 0 for an empty sequence, never NaN.
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (count, sum) = values.fold((0u32, 0.0), |(c, s), v| (c + 1, s + v));
    if count == 0 {
        0.0
    } else {
        round2(sum / count as f64)
    }
}

/// Mean over the present values; `None` when every value is absent.
fn mean_present(values: impl Iterator<Item = Option<f64>>) -> Option<f64> {
    let (count, sum) = values
        .flatten()
        .fold((0u32, 0.0), |(c, s), v| (c + 1, s + v));
    if count == 0 {
        None
    } else {
        Some(round2(sum / count as f64))
    }
}
