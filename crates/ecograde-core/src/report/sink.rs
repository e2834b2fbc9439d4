//! Report sinks.
//!
//! A sink consumes the aggregated report after the audit: built-in file
//! sinks cover the config file's `outputs` list, and callback sinks let
//! library users forward reports to external systems.

use std::path::PathBuf;
use std::str::FromStr;

use tracing::{debug, info};

use crate::config::AuditConfig;
use crate::error::Result;
use crate::report::model::GlobalReport;
use crate::report::render::{self, OutputFormat, RenderContext};

pub trait ReportSink {
    fn name(&self) -> &str;
    fn write(&self, report: &GlobalReport, ctx: &RenderContext<'_>) -> Result<()>;
}

/// Renders the report in one format and writes it to a file, creating
/// parent directories as needed.
pub struct FileSink {
    format: OutputFormat,
    path: PathBuf,
    name: String,
}

impl FileSink {
    pub fn new(format: OutputFormat, path: PathBuf) -> Self {
        let name = format!("{format}:{}", path.display());
        Self { format, path, name }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl ReportSink for FileSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn write(&self, report: &GlobalReport, ctx: &RenderContext<'_>) -> Result<()> {
        let output = render::render(report, self.format, ctx)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, output)?;
        info!(path = %self.path.display(), format = %self.format, "report written");
        Ok(())
    }
}

/// Forwards the report to an arbitrary closure.
pub struct CallbackSink {
    name: String,
    callback: Box<dyn Fn(&GlobalReport) -> Result<()> + Send + Sync>,
}

impl CallbackSink {
    pub fn new(
        name: impl Into<String>,
        callback: impl Fn(&GlobalReport) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            callback: Box::new(callback),
        }
    }
}

impl ReportSink for CallbackSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn write(&self, report: &GlobalReport, _ctx: &RenderContext<'_>) -> Result<()> {
        (self.callback)(report)
    }
}

/// Builds the file sinks described by the config's `outputs` list.
///
/// Relative paths are resolved under `output_path_dir` when set. HTML
/// entries are dropped when `ECOINDEX_DISPLAY_HTML` disabled them.
pub fn sinks_from_config(config: &AuditConfig) -> Result<Vec<Box<dyn ReportSink>>> {
    let mut sinks: Vec<Box<dyn ReportSink>> = Vec::new();

    for spec in &config.outputs {
        let format = OutputFormat::from_str(&spec.format)?;

        if format == OutputFormat::Html && !config.display_html {
            debug!(path = %spec.path.display(), "HTML output disabled, skipping sink");
            continue;
        }

        let path = match (&config.output_path_dir, spec.path.is_relative()) {
            (Some(dir), true) => dir.join(&spec.path),
            _ => spec.path.clone(),
        };
        sinks.push(Box::new(FileSink::new(format, path)));
    }

    Ok(sinks)
}
