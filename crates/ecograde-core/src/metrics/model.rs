use serde::{Deserialize, Serialize};

/// Raw observations from a single visit to a page.
///
/// Pure measurements, no interpretation: counting and summing happen at the
/// collection layer, scoring happens in `score`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VisitSample {
    pub request_count: u64,
    pub transfer_size_bytes: u64,
    pub dom_element_count: u64,
}

/// Audit-engine category scores on a 0-100 scale.
///
/// `None` means the engine did not produce the category, which classifies
/// as not-applicable rather than failing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryScores {
    pub performance: Option<f64>,
    pub accessibility: Option<f64>,
    pub best_practices: Option<f64>,
}

/// Raw measurements for one audited URL, averaged over its visits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageMetrics {
    pub url: String,
    /// Number of visits averaged into this record.
    pub visits: u32,
    pub request_count: u64,
    pub transfer_size_bytes: u64,
    pub dom_element_count: u64,
    #[serde(default)]
    pub categories: CategoryScores,
}

impl PageMetrics {
    /// Averages per-visit samples into one record. Counts are rounded to
    /// the nearest integer. An empty sample list yields zeroed metrics.
    pub fn from_samples(
        url: impl Into<String>,
        samples: &[VisitSample],
        categories: CategoryScores,
    ) -> Self {
        let mean = |total: u64| {
            if samples.is_empty() {
                0
            } else {
                (total as f64 / samples.len() as f64).round() as u64
            }
        };

        Self {
            url: url.into(),
            visits: samples.len() as u32,
            request_count: mean(samples.iter().map(|s| s.request_count).sum()),
            transfer_size_bytes: mean(samples.iter().map(|s| s.transfer_size_bytes).sum()),
            dom_element_count: mean(samples.iter().map(|s| s.dom_element_count).sum()),
            categories,
        }
    }

    pub fn transfer_size_kib(&self) -> f64 {
        self.transfer_size_bytes as f64 / 1024.0
    }
}
