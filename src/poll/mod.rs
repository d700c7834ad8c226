//! Parsing for the polling CSV export.

pub mod parse;
pub mod row;

pub use parse::{ParseError, parse_file, parse_lines};
pub use row::{PollRow, PollTable};
