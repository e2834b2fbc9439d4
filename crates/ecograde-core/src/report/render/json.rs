//! JSON adapter: the aggregated report, pretty-printed.

use crate::error::Result;
use crate::report::model::GlobalReport;

pub fn render(report: &GlobalReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
