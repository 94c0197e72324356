//! Newline-delimited text to time series.
//!
//! Every line holds one float literal with optional surrounding whitespace. Blank lines
//! are ignored. Line numbers in reports start at 1.

use alloc::{string::String, vec::Vec};

use crate::SpectrumError;

/// A non-empty line that did not parse as a float.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// Line number, starting at 1.
    pub line: usize,
    /// The trimmed content of the line.
    pub content: String,
}

/// Outcome of [`parse_samples_lenient`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseReport {
    /// Samples of all valid lines, in line order.
    pub samples: Vec<f32>,
    /// Lines that were skipped because they could not be parsed.
    pub rejected: Vec<RejectedLine>,
}

/// Yields `(line_number, trimmed_content)` for every non-blank line.
fn numbered_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, trimmed)| !trimmed.is_empty())
}

/// Parses `text` into samples, failing on the first line that is not a valid float.
pub fn parse_samples(text: &str) -> Result<Vec<f32>, SpectrumError> {
    let mut samples = Vec::new();

    for (line, trimmed) in numbered_lines(text) {
        match trimmed.parse::<f32>() {
            Ok(value) => samples.push(value),
            Err(_) => {
                tracing::debug!(line, "rejecting time series with unparsable line");
                return Err(SpectrumError::Parse { line });
            }
        }
    }

    Ok(samples)
}

/// Parses `text` into samples, skipping lines that are not valid floats.
pub fn parse_samples_lenient(text: &str) -> ParseReport {
    let mut report = ParseReport::default();

    for (line, trimmed) in numbered_lines(text) {
        match trimmed.parse::<f32>() {
            Ok(value) => report.samples.push(value),
            Err(_) => report.rejected.push(RejectedLine {
                line,
                content: String::from(trimmed),
            }),
        }
    }

    report
}
