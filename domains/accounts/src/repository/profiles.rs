//! User profile repository

use std::sync::Arc;

use hackhub_common::{Error, Result};
use hackhub_docstore::{into_document, DocumentStore};
use serde_json::Value;

use crate::domain::entities::{NewProfile, UserProfile};

#[derive(Clone)]
pub struct ProfileRepository {
    store: Arc<dyn DocumentStore>,
    collection: String,
}

impl ProfileRepository {
    pub fn new(store: Arc<dyn DocumentStore>, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    /// Create the profile keyed by the identity ID.
    ///
    /// An existing profile surfaces as [`Error::Conflict`].
    pub async fn create(&self, user_id: &str, profile: &NewProfile) -> Result<UserProfile> {
        let data = into_document(serde_json::to_value(profile)?);
        tracing::debug!(user_id, collection = %self.collection, "Creating user profile");

        let doc = self
            .store
            .create(&self.collection, Some(user_id), data)
            .await
            .map_err(Error::from)?;
        Ok(serde_json::from_value(Value::Object(doc))?)
    }
}
