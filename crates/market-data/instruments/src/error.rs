//! Error types for instrument table rendering

use thiserror::Error;

/// Instrument table error types
#[derive(Error, Debug)]
pub enum TableError {
    /// Input is not syntactically valid JSON
    #[error("JSON decode error: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// Any other fault while traversing or writing the table
    #[error("Processing error: {message}")]
    Processing {
        /// Human-readable description of the fault
        message: String,
    },
}

impl TableError {
    /// Build a processing error from any displayable message
    pub fn processing(message: impl Into<String>) -> Self {
        Self::Processing {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        Self::processing(format!("failed to write table: {err}"))
    }
}

/// Type alias for table results
pub type TableResult<T> = Result<T, TableError>;
