// src/utils/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Document has no <body> element")]
    MissingBody,

    #[error("HTML serialization failed: {0}")]
    Serialize(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Data processing failed: {0}")]
    Processing(String),
}
