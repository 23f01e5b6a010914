//! Best-effort date normalization
//!
//! Spreadsheet dates arrive either as real date cells or as text. Both are
//! reduced to `YYYY-MM-DD`; anything unrecognised passes through verbatim.

use crate::types::CellValue;
use chrono::NaiveDateTime;

/// Output format for normalized dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Text timestamps that are reduced to their date part
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date-like cell → `YYYY-MM-DD`. Never fails.
///
/// 1. date-time cell: formatted, time discarded
/// 2. text `YYYY-MM-DD HH:MM:SS`: reformatted
/// 3. anything else: its text form, unchanged
pub fn normalize_date(value: &CellValue) -> String {
    match value {
        CellValue::DateTime(dt) => dt.format(DATE_FORMAT).to_string(),
        CellValue::Text(text) => normalize_date_text(text),
        other => other.to_text(),
    }
}

/// Text variant of [`normalize_date`].
pub fn normalize_date_text(text: &str) -> String {
    match NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT) {
        Ok(dt) => dt.format(DATE_FORMAT).to_string(),
        Err(_) => text.to_string(),
    }
}
