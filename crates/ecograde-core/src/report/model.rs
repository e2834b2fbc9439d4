use serde::{Deserialize, Serialize};

use crate::config::Thresholds;
use crate::i18n::Translations;
use crate::metrics::model::PageMetrics;
use crate::score::classify::{Status, classify};
use crate::score::ecoindex::EcoIndex;
use crate::score::quantile::MEDIAN_STEP;

/// Tool metadata carried by every report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

/// Verdicts for the four scored metrics of a page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetricStatuses {
    pub eco_index: Status,
    pub performance: Status,
    pub accessibility: Status,
    pub best_practices: Status,
}

impl MetricStatuses {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Status)> {
        [
            ("eco_index", self.eco_index),
            ("performance", self.performance),
            ("accessibility", self.accessibility),
            ("best_practices", self.best_practices),
        ]
        .into_iter()
    }
}

/// Scored report for one audited page. Immutable once computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageReport {
    pub metrics: PageMetrics,
    /// Eco-index score in `[0, 100]`.
    pub eco_index: f64,
    pub grade: char,
    pub ghg_grams: f64,
    pub water_cl: f64,
    pub statuses: MetricStatuses,
    pub recommendations: Vec<String>,
}

impl PageReport {
    pub fn from_metrics(metrics: PageMetrics, thresholds: &Thresholds, i18n: &Translations) -> Self {
        let eco = EcoIndex::compute(
            metrics.dom_element_count,
            metrics.request_count,
            metrics.transfer_size_kib(),
        );

        let statuses = MetricStatuses {
            eco_index: classify(Some(eco.score), thresholds),
            performance: classify(metrics.categories.performance, thresholds),
            accessibility: classify(metrics.categories.accessibility, thresholds),
            best_practices: classify(metrics.categories.best_practices, thresholds),
        };

        let recommendations = recommendations(&eco, &statuses, i18n);

        Self {
            metrics,
            eco_index: eco.score,
            grade: eco.grade(),
            ghg_grams: eco.ghg_grams(),
            water_cl: eco.water_cl(),
            statuses,
            recommendations,
        }
    }

    /// Worst verdict across the page's scored metrics.
    pub fn worst_status(&self) -> Status {
        Status::worst(self.statuses.iter().map(|(_, s)| s))
    }
}

fn recommendations(eco: &EcoIndex, statuses: &MetricStatuses, i18n: &Translations) -> Vec<String> {
    let mut out = Vec::new();

    if matches!(statuses.eco_index, Status::Warning | Status::Error) {
        out.push(i18n.get("recommendation.eco_index").to_string());
        // Name the raw drivers sitting above the median of the reference corpus.
        if eco.q_dom > MEDIAN_STEP {
            out.push(i18n.get("recommendation.dom").to_string());
        }
        if eco.q_requests > MEDIAN_STEP {
            out.push(i18n.get("recommendation.requests").to_string());
        }
        if eco.q_size > MEDIAN_STEP {
            out.push(i18n.get("recommendation.size").to_string());
        }
    }

    for (metric, status) in [
        ("performance", statuses.performance),
        ("accessibility", statuses.accessibility),
        ("best_practices", statuses.best_practices),
    ] {
        if matches!(status, Status::Warning | Status::Error) {
            out.push(i18n.get(&format!("recommendation.{metric}")).to_string());
        }
    }

    out
}

/// Aggregated report over all audited pages.
///
/// Derived solely from its pages; never mutated after aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalReport {
    pub schema_version: String,
    pub tool: ToolInfo,
    /// RFC 3339 generation timestamp.
    pub generated_at: String,
    pub thresholds: Thresholds,
    /// Mean eco-index over all pages; 0 when there are none.
    pub eco_index: f64,
    pub grade: char,
    pub performance: Option<f64>,
    pub accessibility: Option<f64>,
    pub best_practices: Option<f64>,
    /// Worst page-metric status across the run.
    pub status: Status,
    pub exit_code: i32,
    /// Page reports in audit order.
    pub pages: Vec<PageReport>,
}
