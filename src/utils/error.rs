// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum DocxError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Missing or unreadable file

    #[error("Not a valid document container: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Malformed document XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Document part not found in package: {0}")]
    MissingPart(String),

    #[error("Not a word-processing document: {0}")]
    NotADocument(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Table index {index} out of range (document has {count} tables)")]
    TableOutOfRange { index: usize, count: usize },

    #[error("Row index {row} out of range for table {table} ({count} rows)")]
    RowOutOfRange { table: usize, row: usize, count: usize },

    #[error("Document does not match the form template: {0}")]
    SchemaMismatch(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Writing the report

    #[error("Document could not be loaded: {0}")]
    Docx(#[from] DocxError),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0} check(s) failed")]
    ChecksFailed(usize),
}
