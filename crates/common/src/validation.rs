//! Validation helpers shared by request DTOs

use regex::Regex;

lazy_static::lazy_static! {
    /// Document ID format accepted by the document store.
    /// Up to 36 chars of `[A-Za-z0-9._-]`, must not start with a special char.
    pub static ref DOCUMENT_ID_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]{0,35}$").unwrap();
}

/// Validate a caller supplied document or identity ID
pub fn validate_document_id(id: &str) -> Result<(), validator::ValidationError> {
    if DOCUMENT_ID_REGEX.is_match(id) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_document_id"))
    }
}
