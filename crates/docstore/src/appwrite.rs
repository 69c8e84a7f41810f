//! Appwrite REST client
//!
//! Talks to `{endpoint}/databases/{database}/collections/{collection}/documents`
//! for documents and `{endpoint}/users` for identities. Status codes are mapped
//! onto the closed `StoreError` set here so nothing above this layer inspects
//! error strings.

use std::time::Duration;

use hackhub_common::StoreError;
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use serde_json::json;

use crate::{Document, DocumentStore, Filter, IdentityService, StoreResult, UserDirectory};

/// Appwrite connection settings
#[derive(Clone)]
pub struct AppwriteConfig {
    pub endpoint: String,
    pub project_id: String,
    pub api_key: String,
    pub database_id: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for AppwriteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppwriteConfig")
            .field("endpoint", &self.endpoint)
            .field("project_id", &self.project_id)
            .field("api_key", &"[REDACTED]")
            .field("database_id", &self.database_id)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct DocumentList {
    documents: Vec<Document>,
}

#[derive(Debug, Deserialize)]
struct Account {
    #[serde(rename = "$id")]
    id: String,
    #[serde(default)]
    name: String,
}

/// Appwrite client. Build once at startup and share it.
pub struct AppwriteClient {
    http: reqwest::Client,
    base_url: String,
    database_id: String,
}

impl AppwriteClient {
    pub fn new(config: AppwriteConfig) -> StoreResult<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "X-Appwrite-Project",
            config
                .project_id
                .parse()
                .map_err(|_| StoreError::Other("Invalid Appwrite project ID".to_string()))?,
        );
        headers.insert(
            "X-Appwrite-Key",
            config
                .api_key
                .parse()
                .map_err(|_| StoreError::Other("Invalid Appwrite API key".to_string()))?,
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| StoreError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.endpoint.trim_end_matches('/').to_string(),
            database_id: config.database_id,
        })
    }

    fn documents_url(&self, collection: &str) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.base_url, self.database_id, collection
        )
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}", self.documents_url(collection), id)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> StoreResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Other(format!("Appwrite request failed: {}", e)))?;
        check_status(response).await
    }
}

/// Map an Appwrite response status onto `StoreError`
async fn check_status(response: Response) -> StoreResult<Response> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::NOT_FOUND => Err(StoreError::NotFound),
        StatusCode::CONFLICT => Err(StoreError::Conflict),
        status => {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".to_string());
            Err(StoreError::Other(format!(
                "Appwrite returned {}: {}",
                status, body
            )))
        }
    }
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> StoreResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| StoreError::Other(format!("Invalid Appwrite response: {}", e)))
}

#[async_trait::async_trait]
impl DocumentStore for AppwriteClient {
    async fn get(&self, collection: &str, id: &str) -> StoreResult<Document> {
        tracing::debug!(collection, id, "Fetching document");
        let response = self
            .send(self.http.get(self.document_url(collection, id)))
            .await?;
        decode(response).await
    }

    async fn create(
        &self,
        collection: &str,
        id: Option<&str>,
        data: Document,
    ) -> StoreResult<Document> {
        let document_id = id.unwrap_or("unique()");
        tracing::debug!(collection, document_id, "Creating document");
        let body = json!({ "documentId": document_id, "data": data });
        let response = self
            .send(self.http.post(self.documents_url(collection)).json(&body))
            .await?;
        decode(response).await
    }

    async fn update(&self, collection: &str, id: &str, data: Document) -> StoreResult<Document> {
        tracing::debug!(collection, id, fields = data.len(), "Updating document");
        let body = json!({ "data": data });
        let response = self
            .send(self.http.patch(self.document_url(collection, id)).json(&body))
            .await?;
        decode(response).await
    }

    async fn delete(&self, collection: &str, id: &str) -> StoreResult<()> {
        tracing::debug!(collection, id, "Deleting document");
        self.send(self.http.delete(self.document_url(collection, id)))
            .await?;
        Ok(())
    }

    async fn list(&self, collection: &str, filters: &[Filter]) -> StoreResult<Vec<Document>> {
        tracing::debug!(collection, filters = filters.len(), "Listing documents");
        let queries: Vec<(&str, String)> = filters
            .iter()
            .map(|f| ("queries[]", f.to_query()))
            .collect();
        let response = self
            .send(self.http.get(self.documents_url(collection)).query(&queries))
            .await?;
        let list: DocumentList = decode(response).await?;
        Ok(list.documents)
    }
}

#[async_trait::async_trait]
impl UserDirectory for AppwriteClient {
    async fn display_name(&self, user_id: &str) -> StoreResult<String> {
        let url = format!("{}/users/{}", self.base_url, user_id);
        let response = self.send(self.http.get(url)).await?;
        let account: Account = decode(response).await?;
        Ok(account.name)
    }
}

#[async_trait::async_trait]
impl IdentityService for AppwriteClient {
    async fn create_account(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> StoreResult<String> {
        let url = format!("{}/users", self.base_url);
        let body = json!({
            "userId": "unique()",
            "email": email,
            "password": password,
            "name": name,
        });
        let response = self.send(self.http.post(url).json(&body)).await?;
        let account: Account = decode(response).await?;
        tracing::info!(identity_id = %account.id, "Identity account created");
        Ok(account.id)
    }
}
