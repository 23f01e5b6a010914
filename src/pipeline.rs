//! Label generation pipeline
//!
//! read → resolve (+ date) → QR → format → layout → write.
//! Any failure aborts the run; no partial document is promised.

use crate::error::{ArherbError, Result};
use crate::export::{export_document, output_path_for};
use crate::qr::QrGenerator;
use crate::reader::read_dataset;
use arherb_common::{layout_labels, resolve_all, Dataset, HerbariumConfig, LayoutTable};
use std::path::{Path, PathBuf};

/// Where the pipeline reads and writes
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub input: PathBuf,
    /// Output file or directory; None puts `<stem>_output.docx` next to the input
    pub output: Option<PathBuf>,
    pub qr_dir: PathBuf,
}

/// What a finished run produced
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    pub output_path: PathBuf,
    pub labels: usize,
    pub rows: usize,
    pub qr_codes: usize,
}

/// Builds the label table for an already loaded dataset. QR images are
/// written under `qr_dir` when the config asks for them.
pub fn build_table(
    dataset: &Dataset,
    config: &HerbariumConfig,
    qr_dir: &Path,
) -> Result<(LayoutTable, usize)> {
    let records = resolve_all(dataset, config);
    tracing::info!(
        records = records.len(),
        specimen_type = %config.specimen_type(),
        include_qr = config.include_qr(),
        "laying out labels"
    );

    if !config.include_qr() {
        let table = layout_labels(&records, config, |_| Ok::<_, ArherbError>(None))?;
        return Ok((table, 0));
    }

    let mut generator = QrGenerator::new(qr_dir);
    let table = layout_labels(&records, config, |record| {
        tracing::debug!(num = %record.num, "formatting label");
        generator.generate(&record.latitude, &record.longitude, &record.num)
    })?;
    Ok((table, generator.count()))
}

/// Runs the whole pipeline for one input file.
pub fn generate_document(config: &HerbariumConfig, options: &GenerateOptions) -> Result<GenerateSummary> {
    let dataset = read_dataset(&options.input)?;
    let (table, qr_codes) = build_table(&dataset, config, &options.qr_dir)?;

    let output_path = output_path_for(&options.input, options.output.as_deref());
    export_document(&table, &output_path)?;

    Ok(GenerateSummary {
        output_path,
        labels: table.label_count(),
        rows: table.row_count(),
        qr_codes,
    })
}
