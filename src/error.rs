//! Error types for the Героі Беларусі bot

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Data file not found: {0}")]
    DataFileNotFound(String),

    #[error("Invalid data file {path}: {reason}")]
    InvalidDataFile { path: String, reason: String },

    #[error("Dataset is empty: {0}")]
    EmptyDataset(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}
