use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("product '{0}' already exists")]
    Duplicate(String),
    #[error("product '{0}' not found")]
    NotFound(String),
    #[error("input stream closed")]
    InputClosed,
}
