//! In-memory collaborators
//!
//! Documents are kept per collection in insertion order. Thread-safe via
//! `Arc<Mutex<>>`; clones share state.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use hackhub_common::StoreError;
use serde_json::Value;

use crate::{
    document_id, Document, DocumentStore, Filter, IdentityService, StoreResult, UserDirectory,
};

fn lock<T>(mutex: &Mutex<T>) -> StoreResult<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|e| StoreError::Other(format!("mock store lock poisoned: {e}")))
}

fn timestamp() -> Value {
    Value::String(chrono::Utc::now().to_rfc3339())
}

/// In-memory document store
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    collections: Arc<Mutex<HashMap<String, Vec<Document>>>>,
    failing_creates: Arc<Mutex<HashSet<String>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `create` into `collection` fail with `StoreError::Other`
    pub fn fail_creates_in(&self, collection: &str) {
        if let Ok(mut failing) = self.failing_creates.lock() {
            failing.insert(collection.to_string());
        }
    }

    /// Number of documents held in `collection`
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .map(|c| c.get(collection).map_or(0, Vec::len))
            .unwrap_or(0)
    }
}

#[async_trait::async_trait]
impl DocumentStore for InMemoryStore {
    async fn get(&self, collection: &str, id: &str) -> StoreResult<Document> {
        let collections = lock(&self.collections)?;
        collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| document_id(d) == Some(id)))
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create(
        &self,
        collection: &str,
        id: Option<&str>,
        mut data: Document,
    ) -> StoreResult<Document> {
        if lock(&self.failing_creates)?.contains(collection) {
            return Err(StoreError::Other(format!(
                "create rejected for collection {collection}"
            )));
        }

        let mut collections = lock(&self.collections)?;
        let docs = collections.entry(collection.to_string()).or_default();

        let id = id
            .map(str::to_string)
            .unwrap_or_else(|| uuid::Uuid::new_v4().simple().to_string());
        if docs.iter().any(|d| document_id(d) == Some(id.as_str())) {
            return Err(StoreError::Conflict);
        }

        let now = timestamp();
        data.insert("$id".to_string(), Value::String(id));
        data.insert("$createdAt".to_string(), now.clone());
        data.insert("$updatedAt".to_string(), now);
        docs.push(data.clone());
        Ok(data)
    }

    async fn update(&self, collection: &str, id: &str, data: Document) -> StoreResult<Document> {
        let mut collections = lock(&self.collections)?;
        let doc = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| document_id(d) == Some(id)))
            .ok_or(StoreError::NotFound)?;

        for (field, value) in data {
            doc.insert(field, value);
        }
        doc.insert("$updatedAt".to_string(), timestamp());
        Ok(doc.clone())
    }

    async fn delete(&self, collection: &str, id: &str) -> StoreResult<()> {
        let mut collections = lock(&self.collections)?;
        let docs = collections
            .get_mut(collection)
            .ok_or(StoreError::NotFound)?;
        let position = docs
            .iter()
            .position(|d| document_id(d) == Some(id))
            .ok_or(StoreError::NotFound)?;
        docs.remove(position);
        Ok(())
    }

    async fn list(&self, collection: &str, filters: &[Filter]) -> StoreResult<Vec<Document>> {
        let collections = lock(&self.collections)?;
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|d| filters.iter().all(|f| f.matches(d)))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[derive(Debug, Clone)]
struct MockAccount {
    name: String,
    email: String,
}

/// In-memory identity service that doubles as the user directory
#[derive(Debug, Clone, Default)]
pub struct MockIdentityService {
    accounts: Arc<Mutex<Vec<(String, MockAccount)>>>,
    unreachable: Arc<Mutex<HashSet<String>>>,
}

impl MockIdentityService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a known identity
    pub fn with_user(self, id: &str, name: &str) -> Self {
        if let Ok(mut accounts) = self.accounts.lock() {
            accounts.push((
                id.to_string(),
                MockAccount {
                    name: name.to_string(),
                    email: format!("{id}@example.test"),
                },
            ));
        }
        self
    }

    /// Make name lookups for `id` fail with `StoreError::Other`
    pub fn fail_lookups_for(&self, id: &str) {
        if let Ok(mut unreachable) = self.unreachable.lock() {
            unreachable.insert(id.to_string());
        }
    }

    /// Number of identities created or seeded
    pub fn account_count(&self) -> usize {
        self.accounts.lock().map(|a| a.len()).unwrap_or(0)
    }
}

#[async_trait::async_trait]
impl UserDirectory for MockIdentityService {
    async fn display_name(&self, user_id: &str) -> StoreResult<String> {
        if lock(&self.unreachable)?.contains(user_id) {
            return Err(StoreError::Other(format!("lookup failed for {user_id}")));
        }
        lock(&self.accounts)?
            .iter()
            .find(|(id, _)| id == user_id)
            .map(|(_, account)| account.name.clone())
            .ok_or(StoreError::NotFound)
    }
}

#[async_trait::async_trait]
impl IdentityService for MockIdentityService {
    async fn create_account(
        &self,
        name: &str,
        email: &str,
        _password: &str,
    ) -> StoreResult<String> {
        let mut accounts = lock(&self.accounts)?;
        if accounts
            .iter()
            .any(|(_, a)| a.email.eq_ignore_ascii_case(email))
        {
            return Err(StoreError::Conflict);
        }
        let id = uuid::Uuid::new_v4().simple().to_string();
        accounts.push((
            id.clone(),
            MockAccount {
                name: name.to_string(),
                email: email.to_string(),
            },
        ));
        Ok(id)
    }
}
