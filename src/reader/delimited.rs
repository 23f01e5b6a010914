//! CSV input. Every cell is text; empty cells are missing values.

use super::{header_name, push_non_blank};
use crate::error::{ArherbError, Result};
use arherb_common::{CellValue, Dataset};
use std::path::Path;

pub(super) fn read_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| ArherbError::SpreadsheetRead(format!("{}: {}", path.display(), e)))?;

    let headers = reader
        .headers()
        .map_err(|e| ArherbError::SpreadsheetRead(format!("{}: {}", path.display(), e)))?
        .iter()
        .map(|h| header_name(&CellValue::from(h.trim_start_matches('\u{feff}'))))
        .collect();

    let mut dataset = Dataset::new(headers);
    for (index, record) in reader.records().enumerate() {
        let record = record
            .map_err(|e| ArherbError::SpreadsheetRead(format!("{}: {}", path.display(), e)))?;
        let cells = record.iter().map(text_cell).collect();
        push_non_blank(&mut dataset, cells, index + 2);
    }

    Ok(dataset)
}

fn text_cell(field: &str) -> CellValue {
    if field.is_empty() {
        CellValue::Empty
    } else {
        CellValue::Text(field.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("specimens.csv");
        std::fs::write(
            &path,
            "\u{feff}family,species,num,N,E\nRosaceae,Rosa majalis,1,55.75,37.62\n,,,,\nPoaceae,Poa annua,2\n",
        )
        .unwrap();

        let dataset = read_csv(&path).unwrap();
        assert_eq!(dataset.headers(), &["family", "species", "num", "N", "E"]);
        assert_eq!(dataset.len(), 2);

        let second = dataset.row(1).unwrap();
        assert_eq!(second.get("family"), Some(&CellValue::from("Poaceae")));
        assert_eq!(second.get("N"), Some(&CellValue::Empty));
    }
}
