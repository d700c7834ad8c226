use crate::Result;
use crate::poll::row::{PollRow, PollTable};

use anyhow::Context;
use std::fs;
use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

/// Minimum number of comma-separated fields for a data row.
const MIN_FIELDS: usize = 5;

/// A numeric field that failed to convert. Aborts the whole parse.
///
/// `line` is the 1-based line number in the input, header included.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: field `{field}` is not an integer: {value:?}")]
    Integer {
        line: usize,
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("line {line}: field `{field}` is not a number: {value:?}")]
    Float {
        line: usize,
        field: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("line {line}: field `sample` is empty")]
    EmptySample { line: usize },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::Integer { line, .. }
            | ParseError::Float { line, .. }
            | ParseError::EmptySample { line } => *line,
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            ParseError::Integer { field, .. } | ParseError::Float { field, .. } => *field,
            ParseError::EmptySample { .. } => "sample",
        }
    }
}

/// Read a polling CSV from disk and parse it.
pub fn parse_file(path: &str) -> Result<PollTable> {
    let text = fs::read_to_string(path).with_context(|| format!("read poll file {}", path))?;
    let table = parse_lines(text.lines()).with_context(|| format!("parse poll file {}", path))?;
    Ok(table)
}

/// Parse raw CSV lines into a table.
///
/// Expected columns:
/// month, date, sample, result_a, result_b
///
/// Example:
/// October,21,1880 LV,0.490,0.470
///
/// The first line is a header and is always dropped. Blank lines and lines
/// with fewer than five fields are skipped. A non-numeric date, sample size
/// or result fails the whole call.
pub fn parse_lines<I, S>(lines: I) -> std::result::Result<PollTable, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for (idx, raw) in lines.into_iter().enumerate() {
        let lno = idx + 1;
        let line = raw.as_ref().trim();

        if line.is_empty() || idx == 0 {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < MIN_FIELDS {
            debug!(line = lno, fields = fields.len(), "skipping short row");
            skipped += 1;
            continue;
        }

        // "1880 LV" -> size + type; a lone "1880" has no type.
        let mut tokens = fields[2].split_whitespace();
        let size_str = tokens.next().ok_or(ParseError::EmptySample { line: lno })?;
        let sample_type = tokens.next().unwrap_or_default();

        rows.push(PollRow {
            month: fields[0].to_string(),
            date: parse_int(fields[1], lno, "date")?,
            sample: parse_int(size_str, lno, "sample")?,
            sample_type: sample_type.to_string(),
            result_a: parse_float(fields[3], lno, "result_a")?,
            result_b: parse_float(fields[4], lno, "result_b")?,
        });
    }

    info!(rows = rows.len(), skipped, "parsed poll rows");
    Ok(PollTable::new(rows))
}

fn parse_int(
    s: &str,
    line: usize,
    field: &'static str,
) -> std::result::Result<i64, ParseError> {
    i64::from_str(s).map_err(|source| ParseError::Integer {
        line,
        field,
        value: s.to_string(),
        source,
    })
}

fn parse_float(
    s: &str,
    line: usize,
    field: &'static str,
) -> std::result::Result<f64, ParseError> {
    f64::from_str(s).map_err(|source| ParseError::Float {
        line,
        field,
        value: s.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HEADER: &str = "month,date,sample,result_a,result_b";

    #[test]
    fn parses_rows_in_input_order() {
        let table = parse_lines([
            HEADER,
            "October,21,1880 LV,0.570,0.400",
            "October,20,1200 RV,0.500,0.450",
            "October,18,950,0.450,0.500",
        ])
        .unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(
            table.rows()[0],
            PollRow {
                month: "October".to_string(),
                date: 21,
                sample: 1880,
                sample_type: "LV".to_string(),
                result_a: 0.57,
                result_b: 0.40,
            }
        );
        assert_eq!(table.dates().collect::<Vec<_>>(), vec![21, 20, 18]);
        assert_eq!(table.sample_types().collect::<Vec<_>>(), vec!["LV", "RV", ""]);
    }

    #[test]
    fn columns_stay_aligned() {
        let table = parse_lines([
            HEADER,
            "October,21,1880 LV,0.57,0.40",
            "",
            "broken,row",
            "October,19,800 RV,0.48,0.47",
        ])
        .unwrap();

        let n = table.len();
        assert_eq!(n, 2);
        assert_eq!(table.months().count(), n);
        assert_eq!(table.dates().count(), n);
        assert_eq!(table.samples().count(), n);
        assert_eq!(table.sample_types().count(), n);
        assert_eq!(table.results_a().count(), n);
        assert_eq!(table.results_b().count(), n);
    }

    #[test]
    fn header_is_dropped_even_if_it_looks_like_data() {
        let table = parse_lines(["October,22,1000 LV,0.9,0.1", "October,21,1880 LV,0.57,0.40"])
            .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].date, 21);
    }

    #[test]
    fn short_row_is_skipped_without_shifting_neighbours() {
        let table = parse_lines([
            HEADER,
            "October,21,1880 LV,0.57,0.40",
            "October,20,1200 RV",
            "October,19,800 RV,0.48,0.47",
        ])
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.dates().collect::<Vec<_>>(), vec![21, 19]);
    }

    #[test]
    fn extra_tokens_and_fields_are_ignored() {
        let table = parse_lines([
            HEADER,
            "  September , 3 , 1500 LV extra , 0.47 , 0.46 , note  ",
        ])
        .unwrap();

        let row = &table.rows()[0];
        assert_eq!(row.month, "September");
        assert_eq!(row.date, 3);
        assert_eq!(row.sample, 1500);
        assert_eq!(row.sample_type, "LV");
        assert_eq!(row.result_b, 0.46);
    }

    #[test]
    fn bad_date_names_line_and_field() {
        let err = parse_lines([
            HEADER,
            "October,21,1880 LV,0.57,0.40",
            "October,abc,1880 LV,0.57,0.40",
        ])
        .unwrap_err();

        assert_eq!(err.line(), 3);
        assert_eq!(err.field(), "date");
        assert!(err.to_string().contains("\"abc\""));
    }

    #[test]
    fn bad_result_is_a_float_error() {
        let err = parse_lines([HEADER, "October,21,1880 LV,0.57,n/a"]).unwrap_err();
        assert!(matches!(err, ParseError::Float { field: "result_b", line: 2, .. }));
    }

    #[test]
    fn empty_sample_descriptor_is_an_error() {
        let err = parse_lines([HEADER, "October,21, ,0.57,0.40"]).unwrap_err();
        assert_eq!(err.field(), "sample");
        assert_eq!(err.line(), 2);
    }

    #[test]
    fn reparsing_gives_identical_tables() {
        let input = [HEADER, "October,21,1880 LV,0.57,0.40", "October,19,800 RV,0.48,0.47"];
        assert_eq!(parse_lines(input).unwrap(), parse_lines(input).unwrap());
    }

    #[test]
    fn empty_input_gives_empty_table() {
        let table = parse_lines(Vec::<String>::new()).unwrap();
        assert!(table.is_empty());
    }
}
