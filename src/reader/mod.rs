//! Input table readers
//!
//! Spreadsheets (calamine) and CSV files become a [`Dataset`]: first row is
//! the header, blank rows are dropped.

mod delimited;
mod spreadsheet;

use crate::error::{ArherbError, Result};
use arherb_common::{CellValue, Dataset};
use std::path::Path;

const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];
const CSV_EXTENSIONS: &[&str] = &["csv"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Spreadsheet,
    Csv,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_string_lossy().to_lowercase();
        if SPREADSHEET_EXTENSIONS.contains(&ext.as_str()) {
            Some(InputFormat::Spreadsheet)
        } else if CSV_EXTENSIONS.contains(&ext.as_str()) {
            Some(InputFormat::Csv)
        } else {
            None
        }
    }
}

/// Reads the input table at `path`.
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    if !path.is_file() {
        return Err(ArherbError::FileNotFound(path.display().to_string()));
    }

    let format = InputFormat::from_path(path)
        .ok_or_else(|| ArherbError::UnsupportedInput(path.display().to_string()))?;

    let dataset = match format {
        InputFormat::Spreadsheet => spreadsheet::read_spreadsheet(path)?,
        InputFormat::Csv => delimited::read_csv(path)?,
    };

    tracing::info!(
        path = %path.display(),
        rows = dataset.len(),
        columns = dataset.headers().len(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Header cell → column name
fn header_name(cell: &CellValue) -> String {
    cell.to_text().trim().to_string()
}

/// Adds `cells` unless every one is blank. Returns whether it was kept.
fn push_non_blank(dataset: &mut Dataset, cells: Vec<CellValue>, line: usize) -> bool {
    if cells.iter().all(CellValue::is_empty) {
        tracing::warn!(line, "blank row skipped");
        return false;
    }
    dataset.push_row(cells);
    true
}
