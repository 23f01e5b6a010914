use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArherbError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Herbarium name is not set. Pass --herbarium NAME or run `arherb config --set-herbarium NAME`")]
    MissingHerbariumName,

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported input file: {0} (use .xlsx, .xlsm, .xlsb, .xls, .ods or .csv)")]
    UnsupportedInput(String),

    #[error("Failed to read spreadsheet: {0}")]
    SpreadsheetRead(String),

    #[error("Failed to generate QR code: {0}")]
    QrGeneration(String),

    #[error("Failed to write document: {0}")]
    DocumentWrite(String),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] arherb_common::Error),
}

pub type Result<T> = std::result::Result<T, ArherbError>;
