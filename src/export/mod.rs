pub mod docx;

use crate::error::Result;
use arherb_common::LayoutTable;
use std::path::{Path, PathBuf};

/// Suffix appended to the input file stem
pub const OUTPUT_SUFFIX: &str = "_output";

/// `<input dir>/<input stem>_output.docx`, or inside `output` when it is a
/// directory, or `output` itself.
pub fn output_path_for(input: &Path, output: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "labels".to_string());
    let file_name = format!("{}{}.docx", stem, OUTPUT_SUFFIX);

    match output {
        Some(out) if out.is_dir() || out.extension().is_none() => out.join(file_name),
        Some(out) => out.to_path_buf(),
        None => input
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(file_name),
    }
}

/// Writes the label table as a document.
pub fn export_document(table: &LayoutTable, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    tracing::info!(path = %output_path.display(), rows = table.row_count(), "writing document");
    docx::write_docx(table, output_path)
}
