/// A single poll from the CSV export.
#[derive(Debug, Clone, PartialEq)]
pub struct PollRow {
    pub month: String,
    pub date: i64,
    pub sample: i64,
    /// "LV", "RV", ... or empty when the descriptor had a single token.
    pub sample_type: String,
    pub result_a: f64,
    pub result_b: f64,
}

/// Parsed polls in input order. Row 0 is taken to be the most recent poll.
///
/// Stored row-wise, so every column view below has the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PollTable {
    rows: Vec<PollRow>,
}

impl PollTable {
    pub fn new(rows: Vec<PollRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[PollRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn months(&self) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().map(|r| r.month.as_str())
    }

    pub fn dates(&self) -> impl Iterator<Item = i64> + '_ {
        self.rows.iter().map(|r| r.date)
    }

    pub fn samples(&self) -> impl Iterator<Item = i64> + '_ {
        self.rows.iter().map(|r| r.sample)
    }

    pub fn sample_types(&self) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().map(|r| r.sample_type.as_str())
    }

    pub fn results_a(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|r| r.result_a)
    }

    pub fn results_b(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|r| r.result_b)
    }
}
