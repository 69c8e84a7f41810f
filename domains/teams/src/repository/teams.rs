//! Team repository

use std::sync::Arc;

use hackhub_common::{Error, Result, StoreError};
use hackhub_docstore::{document_id, into_document, Document, DocumentStore, Filter};
use serde::Serialize;
use serde_json::Value;

use crate::domain::entities::{NewTeam, Team};

#[derive(Clone)]
pub struct TeamRepository {
    store: Arc<dyn DocumentStore>,
    collection: String,
}

fn not_found_as_team(err: StoreError) -> Error {
    match err {
        StoreError::NotFound => Error::NotFound("Team not found".to_string()),
        other => other.into(),
    }
}

fn to_team(doc: Document) -> Result<Team> {
    Ok(serde_json::from_value(Value::Object(doc))?)
}

impl TeamRepository {
    pub fn new(store: Arc<dyn DocumentStore>, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    /// Find team by ID
    pub async fn fetch(&self, team_id: &str) -> Result<Team> {
        let doc = self
            .store
            .get(&self.collection, team_id)
            .await
            .map_err(not_found_as_team)?;
        to_team(doc)
    }

    /// Create a team with a store assigned ID
    pub async fn create(&self, team: &NewTeam) -> Result<Team> {
        let data = into_document(serde_json::to_value(team)?);
        let doc = self.store.create(&self.collection, None, data).await?;
        to_team(doc)
    }

    /// Persist only the fields present in `changes`
    pub async fn save<T: Serialize>(&self, team_id: &str, changes: &T) -> Result<Team> {
        let data = into_document(serde_json::to_value(changes)?);
        let doc = self
            .store
            .update(&self.collection, team_id, data)
            .await
            .map_err(not_found_as_team)?;
        to_team(doc)
    }

    pub async fn delete(&self, team_id: &str) -> Result<()> {
        self.store
            .delete(&self.collection, team_id)
            .await
            .map_err(not_found_as_team)
    }

    /// List teams, optionally only those `member_id` belongs to
    ///
    /// Documents that do not decode as a team are skipped.
    pub async fn list(&self, member_id: Option<&str>) -> Result<Vec<Team>> {
        let filters: Vec<Filter> = member_id
            .map(|id| Filter::equal("members", id))
            .into_iter()
            .collect();
        let docs = self.store.list(&self.collection, &filters).await?;
        Ok(docs
            .into_iter()
            .filter_map(|doc| {
                let id = document_id(&doc).unwrap_or_default().to_string();
                match to_team(doc) {
                    Ok(team) => Some(team),
                    Err(e) => {
                        tracing::warn!(team_id = %id, error = %e, "Skipping malformed team");
                        None
                    }
                }
            })
            .collect())
    }
}
