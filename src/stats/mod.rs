//! Read-only queries over a parsed poll table.
//!
//! Every query returns a zero-valued default instead of failing when no rows
//! apply. Window queries assume row 0 is the most recent poll; nothing here
//! sorts the table, so the labels are only as good as the input order.

use crate::poll::{PollRow, PollTable};
use serde::Serialize;
use std::fmt;

/// Sample type marking likely-voter polls.
pub const LIKELY_VOTER: &str = "LV";

/// Number of polls on each side of the history comparison.
pub const HISTORY_WINDOW: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Leader {
    A,
    B,
    Even,
}

impl Leader {
    pub fn as_str(self) -> &'static str {
        match self {
            Leader::A => "A",
            Leader::B => "B",
            Leader::Even => "EVEN",
        }
    }
}

impl fmt::Display for Leader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Highest single result and who holds it. `value` is the raw fraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Highest {
    pub leader: Leader,
    pub value: f64,
}

/// One value per candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CandidatePair {
    pub a: f64,
    pub b: f64,
}

impl CandidatePair {
    pub const ZERO: CandidatePair = CandidatePair { a: 0.0, b: 0.0 };
}

/// Highest single result across both candidates.
///
/// Ties compare with exact float equality and report `Leader::Even`.
pub fn highest(table: &PollTable) -> Highest {
    if table.is_empty() {
        return Highest {
            leader: Leader::Even,
            value: 0.0,
        };
    }

    let max_a = column_max(table.results_a());
    let max_b = column_max(table.results_b());

    if max_a == max_b {
        Highest {
            leader: Leader::Even,
            value: max_a,
        }
    } else if max_a > max_b {
        Highest {
            leader: Leader::A,
            value: max_a,
        }
    } else {
        Highest {
            leader: Leader::B,
            value: max_b,
        }
    }
}

/// Mean result per candidate over likely-voter polls.
pub fn likely_voter_average(table: &PollTable) -> CandidatePair {
    sample_type_average(table, LIKELY_VOTER)
}

/// Mean result per candidate over rows whose sample type equals `marker`.
pub fn sample_type_average(table: &PollTable, marker: &str) -> CandidatePair {
    let mut total = CandidatePair::ZERO;
    let mut count = 0usize;

    for row in table.rows().iter().filter(|r| r.sample_type == marker) {
        total.a += row.result_a;
        total.b += row.result_b;
        count += 1;
    }

    if count == 0 {
        return CandidatePair::ZERO;
    }

    CandidatePair {
        a: total.a / count as f64,
        b: total.b / count as f64,
    }
}

/// Change between the oldest and newest `HISTORY_WINDOW` polls.
pub fn history_change(table: &PollTable) -> CandidatePair {
    history_change_window(table, HISTORY_WINDOW)
}

/// Latest-window mean minus earliest-window mean, per candidate.
///
/// Both windows hold `k = min(window, rows)` polls: the first `k` rows are
/// the latest, the last `k` the earliest. They overlap when there are fewer
/// than `2 * window` rows.
pub fn history_change_window(table: &PollTable, window: usize) -> CandidatePair {
    let rows = table.rows();
    let k = window.min(rows.len());
    if k == 0 {
        return CandidatePair::ZERO;
    }

    let latest = window_mean(&rows[..k]);
    let earliest = window_mean(&rows[rows.len() - k..]);

    CandidatePair {
        a: latest.a - earliest.a,
        b: latest.b - earliest.b,
    }
}

fn window_mean(rows: &[PollRow]) -> CandidatePair {
    let k = rows.len() as f64;
    let mut total = CandidatePair::ZERO;
    for row in rows {
        total.a += row.result_a;
        total.b += row.result_b;
    }
    CandidatePair {
        a: total.a / k,
        b: total.b / k,
    }
}

// Starts at zero and only moves on a strictly larger value, so NaN never wins.
fn column_max(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0, |max, v| if v > max { v } else { max })
}
