pub mod browser;
pub mod config;
pub mod error;
pub mod i18n;
pub mod metrics;
pub mod report;
pub mod score;

use config::AuditConfig;
use error::Result;
use i18n::Translations;
use metrics::model::{CategoryScores, PageMetrics};
use report::aggregate::aggregate;
use report::model::{GlobalReport, PageReport, ToolInfo};

pub const TOOL_NAME: &str = "ecograde";

/// JSON schema version of ecograde reports.
/// Bump only when the serialized report shape changes semantically.
pub const REPORT_SCHEMA_VERSION: &str = "0.1.0";

/// Scores pre-collected page metrics and aggregates them into a global
/// report. This is the whole pipeline minus the browser.
pub fn audit_metrics(
    metrics: Vec<PageMetrics>,
    config: &AuditConfig,
    tool: ToolInfo,
) -> GlobalReport {
    let i18n = Translations::load(&config.language);
    let pages = metrics
        .into_iter()
        .map(|m| PageReport::from_metrics(m, &config.thresholds, &i18n))
        .collect();
    aggregate(pages, config.thresholds, tool)
}

/// Drives the headless browser over the configured URLs, collecting and
/// scoring each page sequentially.
pub async fn audit_urls(config: &AuditConfig, tool: ToolInfo) -> Result<GlobalReport> {
    for url in &config.urls {
        url::Url::parse(url).map_err(|e| error::AuditError::InvalidUrl(format!("{url}: {e}")))?;
    }

    let session = browser::session::Session::launch(config.nav_timeout_secs).await?;

    let mut collected = Vec::with_capacity(config.urls.len());
    for url in &config.urls {
        let categories = if config.eco_index_only {
            CategoryScores::default()
        } else {
            browser::lighthouse::category_scores(url).await
        };
        collected.push(browser::collect::collect_page(&session, url, config.visits, categories).await?);
    }

    session.close().await?;
    Ok(audit_metrics(collected, config, tool))
}
