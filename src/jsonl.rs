//! Line-delimited JSON validation for generation responses.
//!
//! A response is accepted when every non-blank line parses as an
//! independent JSON object, with no enclosing array. The check is purely
//! syntactic; field presence, language and category correctness are not
//! inspected. The same parse feeds the success path, so a response is
//! written to the result log exactly as it was validated.

use serde_json::Value;
use thiserror::Error;

/// Reasons a response failed the line-delimited JSON check.
#[derive(Debug, Error)]
pub enum JsonlError {
    #[error("Response contains no records")]
    Empty,

    #[error("Invalid JSON on line {line}: {source}")]
    Syntax {
        line: usize,
        source: serde_json::Error,
    },

    #[error("Line {line} is not a JSON object")]
    NotAnObject { line: usize },
}

/// Parses `text` as line-delimited JSON records.
///
/// Blank lines are skipped. At least one record is required and every
/// record must be a JSON object.
pub fn parse_records(text: &str) -> Result<Vec<Value>, JsonlError> {
    let mut records = Vec::new();

    for (line_index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let value: Value = serde_json::from_str(trimmed).map_err(|source| JsonlError::Syntax {
            line: line_index + 1,
            source,
        })?;

        if !value.is_object() {
            return Err(JsonlError::NotAnObject {
                line: line_index + 1,
            });
        }

        records.push(value);
    }

    if records.is_empty() {
        return Err(JsonlError::Empty);
    }

    Ok(records)
}

/// Returns true when `response` failed syntactic validation and must be
/// routed to quality control.
pub fn needs_quality_control(response: &str) -> bool {
    parse_records(response).is_err()
}
