//! Label model and formatting
//!
//! A label is a document-agnostic description of one printed specimen
//! label: a bold centered title, italic taxon names, a small body block and
//! an optional QR image. Writers turn it into a concrete file format.

use crate::config::SpecimenType;
use crate::types::SpecimenRecord;
use std::path::{Path, PathBuf};

/// Body text size (pt)
pub const BODY_FONT_SIZE_PT: f32 = 10.0;

/// Printed QR width (inch)
pub const QR_WIDTH_INCH: f32 = 0.5;

/// Character column at which `leg.:` / `det.:` start in the body block
pub const BODY_COLUMN_WIDTH: usize = 24;

/// Paragraph alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
}

/// Styled piece of text. `\n` marks a line break.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    /// None keeps the document default
    pub size_pt: Option<f32>,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), bold: false, italic: false, size_pt: None }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self { bold: true, ..Self::plain(text) }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self { italic: true, ..Self::plain(text) }
    }

    pub fn with_size(mut self, size_pt: f32) -> Self {
        self.size_pt = Some(size_pt);
        self
    }
}

/// Inline image placed after the body text
#[derive(Debug, Clone, PartialEq)]
pub struct LabelImage {
    pub path: PathBuf,
    pub width_inch: f32,
}

/// Paragraph of runs with one alignment
#[derive(Debug, Clone, PartialEq)]
pub struct LabelParagraph {
    pub alignment: Alignment,
    pub runs: Vec<TextRun>,
}

/// Rendered specimen label
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// Herbarium name, bold, centered
    pub title: LabelParagraph,
    /// Taxon runs followed by the body run, left-aligned
    pub body: LabelParagraph,
    pub image: Option<LabelImage>,
}

impl Label {
    /// Concatenated text of every run, paragraphs separated by a newline
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for run in self.title.runs.iter() {
            out.push_str(&run.text);
        }
        out.push('\n');
        for run in self.body.runs.iter() {
            out.push_str(&run.text);
        }
        out
    }
}

/// Formats one resolved record into a label.
///
/// Russian names appear only for vascular plants, and only when both the
/// Russian family and species are filled in.
pub fn format_label(
    record: &SpecimenRecord,
    herbarium_name: &str,
    specimen_type: SpecimenType,
    qr_path: Option<&Path>,
) -> Label {
    let title = LabelParagraph {
        alignment: Alignment::Center,
        runs: vec![TextRun::bold(format!("{}\n", herbarium_name))],
    };

    let show_russian = specimen_type.shows_russian_names()
        && !record.familyrus.is_empty()
        && !record.speciesrus.is_empty();

    let mut runs = Vec::with_capacity(5);
    runs.push(TextRun::italic(format!("{}\n", record.family)));
    if show_russian {
        runs.push(TextRun::italic(format!("{}\n", record.familyrus)));
    }
    runs.push(TextRun::italic(format!("{}\n", record.species)));
    if show_russian {
        runs.push(TextRun::italic(format!("{}\n", record.speciesrus)));
    }
    runs.push(TextRun::plain(body_text(record)).with_size(BODY_FONT_SIZE_PT));

    Label {
        title,
        body: LabelParagraph { alignment: Alignment::Left, runs },
        image: qr_path.map(|path| LabelImage {
            path: path.to_path_buf(),
            width_inch: QR_WIDTH_INCH,
        }),
    }
}

/// Locality line, blank line, then the two aligned collector lines.
fn body_text(record: &SpecimenRecord) -> String {
    format!(
        "\n{}, {}, {}\n\n{}\n{}\n",
        record.region,
        record.point,
        record.habitats,
        two_column_line(&record.date, &format!("leg.: {}", record.leg)),
        two_column_line(&format!("№ {}", record.num), &format!("det.: {}", record.det)),
    )
}

/// `left` padded to [`BODY_COLUMN_WIDTH`] characters, then `right`.
/// At least one space separates them.
fn two_column_line(left: &str, right: &str) -> String {
    let width = BODY_COLUMN_WIDTH.max(left.chars().count() + 1);
    format!("{:<width$}{}", left, right, width = width)
}
