use std::io::Write;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ecograde_core::config::{AuditConfig, Thresholds};
use ecograde_core::i18n::Translations;
use ecograde_core::metrics::model::PageMetrics;
use ecograde_core::report::model::ToolInfo;
use ecograde_core::report::render::{self, RenderContext};
use ecograde_core::report::sink::sinks_from_config;

mod args;

#[tokio::main]
async fn main() -> Result<()> {
    let args = args::Args::parse();

    let mut config = match &args.config {
        Some(path) => AuditConfig::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => AuditConfig::default(),
    };
    config.apply_env();
    apply_cli_overrides(&mut config, &args)?;

    init_tracing(config.verbose);

    let tool = ToolInfo {
        name: ecograde_core::TOOL_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let report = match &args.metrics_json {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading metrics from {}", path.display()))?;
            let metrics: Vec<PageMetrics> =
                serde_json::from_str(&raw).context("parsing page metrics")?;
            ecograde_core::audit_metrics(metrics, &config, tool)
        }
        None => {
            if config.urls.is_empty() {
                bail!("no URLs to audit: pass --url or a configuration file");
            }
            ecograde_core::audit_urls(&config, tool).await?
        }
    };

    tracing::info!(
        pages = report.pages.len(),
        eco_index = report.eco_index,
        status = %report.status,
        "audit complete"
    );

    let i18n = Translations::load(&config.language);
    let ctx = RenderContext {
        i18n: &i18n,
        sonar_file_path: config.sonar_file_path.as_deref(),
    };

    let output = render::render(&report, args.output.into(), &ctx)?;
    match &args.out {
        Some(path) => std::fs::write(path, &output)
            .with_context(|| format!("writing report to {}", path.display()))?,
        None => {
            // Flushed explicitly: process::exit below skips buffered writers.
            let mut stdout = std::io::stdout();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }

    for sink in sinks_from_config(&config)? {
        sink.write(&report, &ctx)
            .with_context(|| format!("writing sink {}", sink.name()))?;
    }

    std::process::exit(report.exit_code);
}

fn apply_cli_overrides(config: &mut AuditConfig, args: &args::Args) -> Result<()> {
    config.urls.extend(args.urls.iter().cloned());

    if let Some(visits) = args.visits {
        config.visits = visits;
    }
    if args.eco_index_only {
        config.eco_index_only = true;
    }
    if let Some(path) = &args.sonar_file_path {
        config.sonar_file_path = Some(path.clone());
    }
    if let Some(dir) = &args.output_path_dir {
        config.output_path_dir = Some(dir.clone());
    }
    if args.pass_threshold.is_some() || args.fail_threshold.is_some() {
        config.thresholds = Thresholds::new(
            args.pass_threshold.unwrap_or(config.thresholds.pass),
            args.fail_threshold.unwrap_or(config.thresholds.fail),
        )?;
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
