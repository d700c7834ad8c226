//! Report model: run the poll queries and collect their results.

use crate::poll::PollTable;
use crate::stats::{self, CandidatePair, Highest};

use serde::Serialize;

/// Knobs for a report run, filled from the command line.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub candidate_a: String,
    pub candidate_b: String,
    /// Sample type averaged by the likely-voter query.
    pub marker: String,
    /// Polls per side of the history comparison.
    pub window: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            candidate_a: "Harris".to_string(),
            candidate_b: "Trump".to_string(),
            marker: stats::LIKELY_VOTER.to_string(),
            window: stats::HISTORY_WINDOW,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    pub candidates: CandidateNames,
    pub polls: usize,
    pub highest: HighestView,
    pub likely_voter_average: CandidatePair,
    pub history_change: CandidatePair,
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateNames {
    pub a: String,
    pub b: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HighestView {
    /// Candidate name, or "EVEN" on a tie.
    pub label: String,
    pub value: f64,
}

pub fn build_report_data(table: &PollTable, opts: &ReportOptions) -> ReportData {
    let Highest { leader, value } = stats::highest(table);
    let label = match leader {
        stats::Leader::A => opts.candidate_a.clone(),
        stats::Leader::B => opts.candidate_b.clone(),
        stats::Leader::Even => leader.to_string(),
    };

    ReportData {
        candidates: CandidateNames {
            a: opts.candidate_a.clone(),
            b: opts.candidate_b.clone(),
        },
        polls: table.len(),
        highest: HighestView { label, value },
        likely_voter_average: stats::sample_type_average(table, &opts.marker),
        history_change: stats::history_change_window(table, opts.window),
    }
}
