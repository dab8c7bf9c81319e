//! Line parser for the seed CSV.
//!
//! Columns: `node_id,sampling_interval_ms,deadband_value,deadband_type,active`.
//! Empty optional columns become `None`; `active` is true only for `"1"`.

use std::str::FromStr;

use signalapi_state::Signal;

use crate::error::{IngestError, IngestResult};

const FIELD_COUNT: usize = 5;

/// Outcome of parsing one data line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Signal(Signal),
    /// Fewer than five fields; the caller skips it and moves on.
    Short { fields: usize },
}

/// Parse a single data line. `line_no` is 1-based and only used for errors.
///
/// Splitting keeps trailing empty fields, so `NODE3,,,,0` has five fields.
/// Fields past the fifth are ignored.
pub fn parse_line(line: &str, line_no: usize) -> IngestResult<ParsedLine> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < FIELD_COUNT {
        return Ok(ParsedLine::Short {
            fields: fields.len(),
        });
    }

    Ok(ParsedLine::Signal(Signal {
        node_id: fields[0].to_string(),
        sampling_interval_ms: optional_number(fields[1], line_no, "sampling_interval_ms")?,
        deadband_value: optional_number(fields[2], line_no, "deadband_value")?,
        deadband_type: (!fields[3].is_empty()).then(|| fields[3].to_string()),
        active: fields[4] == "1",
    }))
}

fn optional_number<T>(raw: &str, line: usize, column: &'static str) -> IngestResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|e: T::Err| IngestError::InvalidNumber {
            line,
            column,
            value: raw.to_string(),
            reason: e.to_string(),
        })
}
