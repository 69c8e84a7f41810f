//! Shared utilities, configuration, and error handling for HackHub
//!
//! This crate provides common functionality used across the HackHub API:
//! - Configuration management following 12-factor principles
//! - Error types, the document store error set, and the response envelope
//! - Request extractors and identifier validation

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod response;
pub mod validation;

pub use config::Config;
pub use db::StoreError;
pub use error::{Error, Result};
pub use extractors::ValidatedJson;
pub use response::ApiResponse;
pub use validation::validate_document_id;
