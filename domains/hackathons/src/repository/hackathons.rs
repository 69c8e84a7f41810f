//! Hackathon repository

use std::sync::Arc;

use hackhub_common::Result;
use hackhub_docstore::{document_id, into_document, Document, DocumentStore};
use serde_json::Value;

use crate::domain::entities::{Hackathon, NewHackathon};

#[derive(Clone)]
pub struct HackathonRepository {
    store: Arc<dyn DocumentStore>,
    collection: String,
}

fn to_hackathon(doc: Document) -> Result<Hackathon> {
    Ok(serde_json::from_value(Value::Object(doc))?)
}

impl HackathonRepository {
    pub fn new(store: Arc<dyn DocumentStore>, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    /// Create a hackathon with a store assigned ID
    pub async fn create(&self, hackathon: &NewHackathon) -> Result<Hackathon> {
        let data = into_document(serde_json::to_value(hackathon)?);
        let doc = self.store.create(&self.collection, None, data).await?;
        to_hackathon(doc)
    }

    /// Every hackathon in catalog order, skipping documents that do not decode
    pub async fn list(&self) -> Result<Vec<Hackathon>> {
        let docs = self.store.list(&self.collection, &[]).await?;
        let total = docs.len();

        let hackathons: Vec<Hackathon> = docs
            .into_iter()
            .filter_map(|doc| {
                let id = document_id(&doc).unwrap_or_default().to_string();
                match to_hackathon(doc) {
                    Ok(hackathon) => Some(hackathon),
                    Err(e) => {
                        tracing::warn!(hackathon_id = %id, error = %e, "Skipping malformed hackathon");
                        None
                    }
                }
            })
            .collect();

        tracing::debug!(total, decoded = hackathons.len(), "Listed hackathons");
        Ok(hackathons)
    }
}
