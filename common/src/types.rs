//! Input data types
//!
//! - CellValue: one spreadsheet cell as read from the input file
//! - Dataset: header row plus data rows, in file order
//! - SpecimenRecord: one row after field resolution (all text)

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single cell of the input table.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    /// Blank cell, missing column or spreadsheet error value
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Text form used on labels. Empty cells become "".
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Bool(b) => if *b { "TRUE".into() } else { "FALSE".into() },
            CellValue::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(value: NaiveDateTime) -> Self {
        CellValue::DateTime(value)
    }
}

/// Integral values print without a fractional part ("7", not "7.0").
fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Row-oriented table with named columns.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Dataset {
    pub fn new(headers: Vec<String>) -> Self {
        Self { headers, rows: Vec::new() }
    }

    /// Appends a data row. Short rows are padded, long rows keep their extra cells
    /// (unreachable by name).
    pub fn push_row(&mut self, mut cells: Vec<CellValue>) {
        if cells.len() < self.headers.len() {
            cells.resize(self.headers.len(), CellValue::Empty);
        }
        self.rows.push(cells);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        self.rows.get(index).map(|cells| Row { headers: &self.headers, cells })
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(|cells| Row { headers: &self.headers, cells })
    }
}

/// Borrowed view of one dataset row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    headers: &'a [String],
    cells: &'a [CellValue],
}

impl<'a> Row<'a> {
    /// Cell under `column`, or None when the column does not exist.
    /// With duplicate headers the first match wins.
    pub fn get(&self, column: &str) -> Option<&'a CellValue> {
        self.headers
            .iter()
            .position(|h| h == column)
            .and_then(|i| self.cells.get(i))
    }
}

/// One specimen after field resolution. Every field is plain text; missing
/// values are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecimenRecord {
    pub family: String,
    pub familyrus: String,
    pub species: String,
    pub speciesrus: String,
    pub region: String,
    pub point: String,
    pub habitats: String,
    /// Normalized to YYYY-MM-DD when recognisable
    pub date: String,
    pub leg: String,
    pub det: String,
    /// Specimen identifier, also names the QR artifact
    pub num: String,
    pub latitude: String,
    pub longitude: String,
}
