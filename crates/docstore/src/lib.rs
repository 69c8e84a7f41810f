//! HackHub document store collaborators
//!
//! Provides the external services the API delegates to:
//! - `DocumentStore`: collection scoped CRUD plus equality filters
//! - `UserDirectory`: display name lookup for a single identity
//! - `IdentityService`: account creation
//!
//! Two implementations: the Appwrite REST client for production and an
//! in-memory mock for tests and local development.

pub mod appwrite;
pub mod mock;

use std::sync::Arc;
use std::time::Duration;

use hackhub_common::{Config, StoreError};
use serde_json::{Map, Value};

/// A stored document: top level field map, including `$id` metadata
pub type Document = Map<String, Value>;

/// Store level result type
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Read the `$id` metadata field of a document
pub fn document_id(doc: &Document) -> Option<&str> {
    doc.get("$id").and_then(Value::as_str)
}

/// Convert a JSON value into a document; non-objects become empty documents
pub fn into_document(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        _ => Document::new(),
    }
}

/// Query filter applied by `DocumentStore::list`
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Field equals value. Against an array field this matches when the
    /// array holds the value, which is how the hosted store behaves.
    Equal(String, Value),
}

impl Filter {
    pub fn equal(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Filter::Equal(field.into(), value.into())
    }

    /// Evaluate the filter against a document in memory
    pub fn matches(&self, doc: &Document) -> bool {
        match self {
            Filter::Equal(field, value) => match doc.get(field) {
                Some(Value::Array(items)) => items.contains(value),
                Some(other) => other == value,
                None => false,
            },
        }
    }

    /// Render as an Appwrite JSON query string
    pub fn to_query(&self) -> String {
        let Filter::Equal(field, value) = self;
        serde_json::json!({
            "method": "equal",
            "attribute": field,
            "values": [value],
        })
        .to_string()
    }
}

/// Collection scoped document CRUD
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch one document by ID
    async fn get(&self, collection: &str, id: &str) -> StoreResult<Document>;

    /// Create a document; the store assigns an ID when `id` is `None`
    async fn create(
        &self,
        collection: &str,
        id: Option<&str>,
        data: Document,
    ) -> StoreResult<Document>;

    /// Merge the supplied top level fields into an existing document
    async fn update(&self, collection: &str, id: &str, data: Document) -> StoreResult<Document>;

    /// Remove a document
    async fn delete(&self, collection: &str, id: &str) -> StoreResult<()>;

    /// List every document matching all filters
    async fn list(&self, collection: &str, filters: &[Filter]) -> StoreResult<Vec<Document>>;
}

/// Display name lookup. There is no bulk fetch by ID list.
#[async_trait::async_trait]
pub trait UserDirectory: Send + Sync {
    async fn display_name(&self, user_id: &str) -> StoreResult<String>;
}

/// Identity (account) provisioning
#[async_trait::async_trait]
pub trait IdentityService: Send + Sync {
    /// Create an account and return its identity ID. Duplicate email is `Conflict`.
    async fn create_account(&self, name: &str, email: &str, password: &str)
        -> StoreResult<String>;
}

/// The collaborator handles, constructed once at startup and shared.
#[derive(Clone)]
pub struct Backends {
    pub store: Arc<dyn DocumentStore>,
    pub users: Arc<dyn UserDirectory>,
    pub identities: Arc<dyn IdentityService>,
}

impl Backends {
    /// In-memory backends, used by tests and the `mock` provider
    pub fn in_memory() -> Self {
        let identities = mock::MockIdentityService::new();
        Self {
            store: Arc::new(mock::InMemoryStore::new()),
            users: Arc::new(identities.clone()),
            identities: Arc::new(identities),
        }
    }
}

/// Factory for creating the collaborator handles from configuration.
pub struct BackendFactory;

impl BackendFactory {
    pub fn create(config: &Config) -> StoreResult<Backends> {
        match config.docstore_provider.as_str() {
            "appwrite" => {
                tracing::info!(endpoint = %config.appwrite_endpoint, "Creating Appwrite client");
                let client = Arc::new(appwrite::AppwriteClient::new(
                    appwrite::AppwriteConfig::from(config),
                )?);
                Ok(Backends {
                    store: client.clone(),
                    users: client.clone(),
                    identities: client,
                })
            }
            "mock" => {
                tracing::info!("Creating in-memory document store");
                Ok(Backends::in_memory())
            }
            provider => Err(StoreError::Other(format!(
                "Unknown document store provider: {}. Supported providers: appwrite, mock",
                provider
            ))),
        }
    }
}

impl From<&Config> for appwrite::AppwriteConfig {
    fn from(config: &Config) -> Self {
        Self {
            endpoint: config.appwrite_endpoint.clone(),
            project_id: config.appwrite_project_id.clone(),
            api_key: config.appwrite_api_key.clone(),
            database_id: config.appwrite_database_id.clone(),
            timeout: Duration::from_secs(config.http_timeout_secs),
        }
    }
}
