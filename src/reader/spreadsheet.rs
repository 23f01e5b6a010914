//! Spreadsheet input via calamine (first worksheet only)

use super::{header_name, push_non_blank};
use crate::error::{ArherbError, Result};
use arherb_common::{CellValue, Dataset};
use calamine::{open_workbook_auto, Data, Reader};
use chrono::NaiveDateTime;
use std::path::Path;

pub(super) fn read_spreadsheet(path: &Path) -> Result<Dataset> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| ArherbError::SpreadsheetRead(format!("{}: {}", path.display(), e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ArherbError::SpreadsheetRead(format!("{}: no worksheets", path.display())))?
        .map_err(|e| ArherbError::SpreadsheetRead(format!("{}: {}", path.display(), e)))?;

    let mut rows = range.rows();
    let headers = match rows.next() {
        Some(header_row) => header_row.iter().map(|cell| header_name(&cell_value(cell))).collect(),
        None => return Ok(Dataset::default()),
    };

    let mut dataset = Dataset::new(headers);
    for (index, row) in rows.enumerate() {
        let cells = row.iter().map(cell_value).collect();
        // header is line 1
        push_non_blank(&mut dataset, cells, index + 2);
    }

    Ok(dataset)
}

/// calamine cell → CellValue. Error cells count as missing.
pub(super) fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(value) => CellValue::DateTime(value),
            None => CellValue::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) => parse_iso_datetime(s)
            .map(CellValue::DateTime)
            .unwrap_or_else(|| CellValue::Text(s.clone())),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}

fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
