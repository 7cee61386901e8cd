use thiserror::Error;

#[derive(Error, Debug)]
pub enum CsvKitError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Path '{path}' has no file extension")]
    MissingExtensionError { path: String },

    #[error("Gave up finding a free filename for '{path}' after {attempts} attempts")]
    RenameAttemptsExhaustedError { path: String, attempts: usize },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, CsvKitError>;
