//! Presentation adapters for global reports.
//!
//! Each adapter is a stateless formatter over an already-aggregated
//! [`GlobalReport`]:
//! - `table` - terminal table with grade colors
//! - `csv`   - one row per page plus a global summary row
//! - `json`  - the report serialized as pretty JSON
//! - `html`  - standalone HTML document with embedded styles
//! - `sonar` - SonarQube generic-issue-import JSON for CI gating

mod csv;
mod html;
mod json;
mod sonar;
mod table;

pub use sonar::{SonarIssue, SonarReport};

use std::str::FromStr;

use crate::error::{AuditError, Result};
use crate::i18n::Translations;
use crate::report::model::GlobalReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
    Html,
    Sonar,
}

impl FromStr for OutputFormat {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "html" => Ok(OutputFormat::Html),
            "sonar" => Ok(OutputFormat::Sonar),
            _ => Err(AuditError::UnknownFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OutputFormat::Table => "table",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Html => "html",
            OutputFormat::Sonar => "sonar",
        };
        f.write_str(name)
    }
}

/// Everything an adapter may need besides the report itself.
pub struct RenderContext<'a> {
    pub i18n: &'a Translations,
    /// File the Sonar issues are attached to. Required by the Sonar adapter.
    pub sonar_file_path: Option<&'a str>,
}

pub fn render(report: &GlobalReport, format: OutputFormat, ctx: &RenderContext<'_>) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(table::render(report, ctx.i18n)),
        OutputFormat::Csv => Ok(csv::render(report)),
        OutputFormat::Json => json::render(report),
        OutputFormat::Html => Ok(html::render(report, ctx.i18n)),
        OutputFormat::Sonar => sonar::render(report, ctx.sonar_file_path, ctx.i18n),
    }
}
