//! ARHerb: herbarium labels from a spreadsheet
//!
//! Reads specimen rows, formats one label per row, lays the labels out in a
//! two-column table and writes it as a DOCX document, optionally with a QR
//! map link per specimen.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod pipeline;
pub mod qr;
pub mod reader;

pub use arherb_common as common;
