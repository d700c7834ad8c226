//! Output formats for a report.

pub mod text;

use crate::Result;
use crate::model::ReportData;

pub use text::render_text_report;

/// Pretty-printed JSON, raw fractions rather than percentages.
pub fn render_json_report(data: &ReportData) -> Result<String> {
    let mut json = serde_json::to_string_pretty(data)?;
    json.push('\n');
    Ok(json)
}
