//! ARHerb common library
//!
//! Pure label-generation logic shared by the CLI: input cell model, field
//! resolution, date normalization, label formatting and two-column layout.
//! Nothing in this crate touches the filesystem except `FieldMapping::from_file`.

pub mod config;
pub mod date;
pub mod error;
pub mod fields;
pub mod label;
pub mod layout;
pub mod types;

pub use config::{HerbariumConfig, SpecimenType};
pub use date::{normalize_date, normalize_date_text};
pub use error::{Error, Result};
pub use fields::{resolve, resolve_field, FieldMapping, LogicalField};
pub use label::{format_label, Alignment, Label, LabelImage, LabelParagraph, TextRun};
pub use layout::{layout, layout_labels, resolve_all, split_halves, Column, LayoutRow, LayoutTable};
pub use types::{CellValue, Dataset, Row, SpecimenRecord};
