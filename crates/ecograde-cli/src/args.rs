use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "ecograde",
    version,
    about = "Eco-index audit for web pages: weight, requests, DOM and audit-engine scores"
)]
pub struct Args {
    /// URL to audit; repeat the flag for several pages
    #[arg(long = "url", value_name = "URL")]
    pub urls: Vec<String>,

    /// JSON configuration file (urls, thresholds, outputs, language)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Score pre-collected page metrics from a JSON file instead of
    /// driving a browser
    #[arg(long, value_name = "PATH")]
    pub metrics_json: Option<PathBuf>,

    /// Restrict the audit to the eco-index and skip the audit-engine
    /// categories
    #[arg(long = "eco-index")]
    pub eco_index_only: bool,

    /// Visits per page; raw metrics are averaged
    #[arg(long)]
    pub visits: Option<u32>,

    /// Output format
    #[arg(long, default_value = "table")]
    pub output: OutputFormat,

    /// File the Sonar issues are attached to (required for sonar output)
    #[arg(long)]
    pub sonar_file_path: Option<String>,

    /// Base directory for report files from the config outputs list
    #[arg(long)]
    pub output_path_dir: Option<PathBuf>,

    /// Score at or above which a metric passes
    #[arg(long, value_name = "0-100")]
    pub pass_threshold: Option<f64>,

    /// Score below which a metric fails
    #[arg(long, value_name = "0-100")]
    pub fail_threshold: Option<f64>,

    /// Write the rendered output to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
    Html,
    Sonar,
}

impl From<OutputFormat> for ecograde_core::report::render::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        use ecograde_core::report::render::OutputFormat as Core;
        match format {
            OutputFormat::Table => Core::Table,
            OutputFormat::Csv => Core::Csv,
            OutputFormat::Json => Core::Json,
            OutputFormat::Html => Core::Html,
            OutputFormat::Sonar => Core::Sonar,
        }
    }
}
