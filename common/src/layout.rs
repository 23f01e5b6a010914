//! Two-column table layout
//!
//! The dataset is split at `floor(n/2)`. The first half runs down the left
//! column and the second half down the right column, both from row 0, so
//! record `k` sits beside record `k + floor(n/2)`. Any odd record goes to
//! the right column, and the left column's last cell stays empty.

use crate::config::HerbariumConfig;
use crate::error::{Error, Result};
use crate::fields::resolve;
use crate::label::{format_label, Label};
use crate::types::{Dataset, SpecimenRecord};
use std::path::PathBuf;

/// Table column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Left,
    Right,
}

impl Column {
    pub const COUNT: usize = 2;

    pub fn index(self) -> usize {
        match self {
            Column::Left => 0,
            Column::Right => 1,
        }
    }
}

/// One table row; each cell holds at most one label.
pub type LayoutRow = [Option<Label>; Column::COUNT];

/// Two-column table of labels. Rows only grow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutTable {
    rows: Vec<LayoutRow>,
}

impl LayoutTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Appends an empty row and returns its index.
    pub fn append_row(&mut self) -> usize {
        self.rows.push([None, None]);
        self.rows.len() - 1
    }

    /// Appends empty rows until there are at least `count`.
    pub fn ensure_rows(&mut self, count: usize) {
        while self.rows.len() < count {
            self.append_row();
        }
    }

    /// Places `label` at (`row`, `column`), replacing whatever was there.
    pub fn set(&mut self, row: usize, column: Column, label: Label) -> Result<()> {
        let rows = self.rows.len();
        let cells = self
            .rows
            .get_mut(row)
            .ok_or(Error::RowOutOfBounds { row, rows })?;
        cells[column.index()] = Some(label);
        Ok(())
    }

    pub fn get(&self, row: usize, column: Column) -> Option<&Label> {
        self.rows.get(row).and_then(|cells| cells[column.index()].as_ref())
    }

    pub fn rows(&self) -> &[LayoutRow] {
        &self.rows
    }

    /// Number of populated cells
    pub fn label_count(&self) -> usize {
        self.rows.iter().flatten().filter(|cell| cell.is_some()).count()
    }
}

/// Splits `items` at `floor(n/2)`; the second half gets any remainder.
pub fn split_halves<T>(items: &[T]) -> (&[T], &[T]) {
    items.split_at(items.len() / 2)
}

/// Resolves every dataset row in file order.
pub fn resolve_all(dataset: &Dataset, config: &HerbariumConfig) -> Vec<SpecimenRecord> {
    dataset.rows().map(|row| resolve(&row, config.mapping())).collect()
}

/// Lays out labels for `records`.
///
/// `qr_for` is called once per record, first half then second half, each
/// in original order, and returns the QR image to embed (if any). Its first
/// error aborts the layout.
pub fn layout_labels<F, E>(
    records: &[SpecimenRecord],
    config: &HerbariumConfig,
    mut qr_for: F,
) -> std::result::Result<LayoutTable, E>
where
    F: FnMut(&SpecimenRecord) -> std::result::Result<Option<PathBuf>, E>,
    E: From<Error>,
{
    let mut table = LayoutTable::new();
    let (first, second) = split_halves(records);

    for (half, column) in [(first, Column::Left), (second, Column::Right)] {
        for (row, record) in half.iter().enumerate() {
            let qr_path = qr_for(record)?;
            let label = format_label(
                record,
                config.herbarium_name(),
                config.specimen_type(),
                qr_path.as_deref(),
            );

            table.ensure_rows(row + 1);
            table.set(row, column, label)?;
        }
    }

    Ok(table)
}

/// Layout without QR images.
pub fn layout(records: &[SpecimenRecord], config: &HerbariumConfig) -> LayoutTable {
    let table: std::result::Result<LayoutTable, Error> = layout_labels(records, config, |_| Ok(None));
    // rows are ensured before every set, so placement cannot go out of bounds
    table.unwrap_or_default()
}
