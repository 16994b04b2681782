//! Error types for JSON round-tripping.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObjectError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ObjectError>;
