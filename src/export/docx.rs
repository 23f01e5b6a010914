//! DOCX writer
//!
//! One table, two equal columns, one label per cell.

use crate::error::{ArherbError, Result};
use arherb_common::{Alignment, Label, LabelImage, LabelParagraph, LayoutTable, TextRun};
use docx_rs::{
    AlignmentType, BreakType, Docx, Paragraph, Pic, Run, Table, TableCell, TableRow,
};
use std::fs::File;
use std::path::Path;

/// Column width in twips (two columns ≈ 17 cm)
const COLUMN_WIDTH_TWIPS: usize = 4819;

/// English Metric Units per inch
const EMU_PER_INCH: f32 = 914_400.0;

pub fn write_docx(table: &LayoutTable, output_path: &Path) -> Result<()> {
    let docx = build_docx(table)?;

    let file = File::create(output_path)?;
    docx.build()
        .pack(file)
        .map_err(|e| ArherbError::DocumentWrite(format!("{}: {}", output_path.display(), e)))?;

    Ok(())
}

pub fn build_docx(table: &LayoutTable) -> Result<Docx> {
    let mut rows = Vec::with_capacity(table.row_count().max(1));
    for cells in table.rows() {
        let mut row_cells = Vec::with_capacity(cells.len());
        for cell in cells {
            row_cells.push(match cell {
                Some(label) => label_cell(label)?,
                None => empty_cell(),
            });
        }
        rows.push(TableRow::new(row_cells));
    }

    // a fresh two-column table always has one row
    if rows.is_empty() {
        rows.push(TableRow::new(vec![empty_cell(), empty_cell()]));
    }

    let table = Table::new(rows).set_grid(vec![COLUMN_WIDTH_TWIPS, COLUMN_WIDTH_TWIPS]);
    Ok(Docx::new().add_table(table))
}

fn empty_cell() -> TableCell {
    TableCell::new().add_paragraph(Paragraph::new())
}

fn label_cell(label: &Label) -> Result<TableCell> {
    let title = paragraph(&label.title);
    let mut body = paragraph(&label.body);
    if let Some(image) = &label.image {
        body = body.add_run(Run::new().add_image(picture(image)?));
    }

    Ok(TableCell::new().add_paragraph(title).add_paragraph(body))
}

fn paragraph(source: &LabelParagraph) -> Paragraph {
    let alignment = match source.alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
    };

    source
        .runs
        .iter()
        .fold(Paragraph::new().align(alignment), |p, run| p.add_run(styled_run(run)))
}

/// Newlines in the run text become line breaks.
fn styled_run(source: &TextRun) -> Run {
    let mut run = Run::new();
    for (i, line) in source.text.split('\n').enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        if !line.is_empty() {
            run = run.add_text(line);
        }
    }

    if source.bold {
        run = run.bold();
    }
    if source.italic {
        run = run.italic();
    }
    if let Some(size) = source.size_pt {
        // half-points
        run = run.size((size * 2.0).round() as usize);
    }
    run
}

/// Square QR picture at the label's display width.
fn picture(image: &LabelImage) -> Result<Pic> {
    let bytes = std::fs::read(&image.path)?;
    let decoded = image::load_from_memory(&bytes)
        .map_err(|e| ArherbError::DocumentWrite(format!("{}: {}", image.path.display(), e)))?;

    let width_emu = (image.width_inch * EMU_PER_INCH).round() as u32;
    let height_emu = if decoded.width() == 0 {
        width_emu
    } else {
        (width_emu as u64 * decoded.height() as u64 / decoded.width() as u64) as u32
    };

    Ok(Pic::new(&bytes).size(width_emu, height_emu))
}
