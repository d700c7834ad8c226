use crate::model::ReportData;

use std::fmt::Write;

/// Render the plain-text summary printed by the `report` command.
///
/// Example:
/// Highest Polling Candidate: Harris 57.0%
/// Likely Voter Polling Average:
///   Harris: 49.34%
///   Trump: 46.04%
/// Polling History Change:
///   Harris: +1.53%
///   Trump: +2.07%
pub fn render_text_report(data: &ReportData) -> String {
    let names = &data.candidates;
    let lv = &data.likely_voter_average;
    let change = &data.history_change;

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        "Highest Polling Candidate: {} {}",
        data.highest.label,
        percent(data.highest.value, 1)
    );
    let _ = writeln!(out, "Likely Voter Polling Average:");
    let _ = writeln!(out, "  {}: {}", names.a, percent(lv.a, 2));
    let _ = writeln!(out, "  {}: {}", names.b, percent(lv.b, 2));
    let _ = writeln!(out, "Polling History Change:");
    let _ = writeln!(out, "  {}: {}", names.a, signed_percent(change.a, 2));
    let _ = writeln!(out, "  {}: {}", names.b, signed_percent(change.b, 2));
    out
}

/// 0.5734 -> "57.3%" at one decimal.
fn percent(fraction: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, fraction * 100.0)
}

fn signed_percent(fraction: f64, decimals: usize) -> String {
    format!("{:+.*}%", decimals, fraction * 100.0)
}
