//! Shared document store types for HackHub
//!
//! The document store surfaces a closed set of failure kinds. Callers match
//! on the variant, never on the message.

use crate::error::Error;
use thiserror::Error;

/// Document store error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Document not found")]
    NotFound,

    #[error("Document already exists")]
    Conflict,

    #[error("Document store error: {0}")]
    Other(String),
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => Error::NotFound("Document not found".to_string()),
            StoreError::Conflict => Error::Conflict("Document already exists".to_string()),
            StoreError::Other(msg) => Error::Upstream(msg),
        }
    }
}
