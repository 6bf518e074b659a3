use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("The file {} does not exist.", .path.display())]
    NotFound { path: PathBuf },

    #[error("The input file {} is empty.", .path.display())]
    EmptyInput { path: PathBuf },

    #[error("Missing expected column(s) {missing:?}. Available columns: {available:?}")]
    Schema {
        missing: Vec<String>,
        available: Vec<String>,
    },

    #[error("Could not convert Amount '{value}' on data line {line} to a number")]
    Parse { line: usize, value: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("CSV parsing system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    // Anything that does not fit the categories above.
    #[error("An unexpected error occurred: {0}")]
    Unexpected(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, CleanerError>;
