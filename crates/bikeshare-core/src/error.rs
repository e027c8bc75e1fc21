use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the bikeshare explorer.
#[derive(Error, Debug)]
pub enum BikeshareError {
    /// A city file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV row could not be decoded into a trip record.
    #[error("Failed to parse CSV file {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// One or more mandatory columns are absent from a city file.
    #[error("{}", missing_columns_message(.file, .columns))]
    MissingColumns { file: String, columns: Vec<String> },

    /// A `Start Time` cell did not match any recognised format.
    #[error("Invalid timestamp format in row {row}: {value}")]
    TimestampParse { row: usize, value: String },

    /// Standard input was closed while a prompt was waiting for an answer.
    #[error("Input closed while waiting for an answer")]
    InputClosed,

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn missing_columns_message(file: &str, columns: &[String]) -> String {
    columns
        .iter()
        .map(|col| format!("Missing column '{}' in '{}' file", col, file))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Convenience alias used throughout the bikeshare crates.
pub type Result<T> = std::result::Result<T, BikeshareError>;
