//! REST content store for the CMS backend
//!
//! Speaks the backend's `blog` collection over HTTP:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | list      | `GET {collection}?role=admin` |
//! | get       | `GET {collection}/{id}` |
//! | create    | `POST {collection}` |
//! | update    | `PUT {collection}/{id}` |
//! | delete    | `DELETE {collection}/{id}` |
//!
//! Any non-2xx answer becomes [`StoreError::Remote`] with the backend's
//! `message` text, or `"Server Error"` when the body carries none. Requests
//! are sent once; the only time bound is the client timeout.

use crate::config::StoreConfig;
use crate::db::record::{decode_body, BlogPayload, BlogRecord, ErrorBody};
use crate::db::{ContentStore, StoreError, StoreOperation};
use crate::models::{ContentDocument, DocumentId, StoredDocument};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

/// Message used when a failed response explains nothing
pub const FALLBACK_ERROR_MESSAGE: &str = "Server Error";

/// Content store backed by the CMS HTTP API
#[derive(Debug, Clone)]
pub struct RestContentStore {
    client: Client,
    collection_url: Url,
    list_role: Option<String>,
}

impl RestContentStore {
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        config
            .validate()
            .map_err(|e| StoreError::Configuration(e.to_string()))?;
        let collection_url = config
            .collection_url()
            .map_err(|e| StoreError::Configuration(e.to_string()))?;

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| StoreError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            collection_url,
            list_role: config.list_role.clone(),
        })
    }

    pub fn collection_url(&self) -> &Url {
        &self.collection_url
    }

    fn document_url(&self, id: &DocumentId) -> Result<Url, StoreError> {
        let mut url = self.collection_url.clone();
        url.path_segments_mut()
            .map_err(|_| StoreError::Configuration("collection URL cannot be a base".to_string()))?
            .push(id.as_str());
        Ok(url)
    }

    /// Send a request once and turn a failed answer into a store error
    async fn send(
        &self,
        operation: StoreOperation,
        request: RequestBuilder,
    ) -> Result<Response, StoreError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("Content store {} request failed: {}", operation, e);
            StoreError::transport(operation, e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|error| error.message)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());

        tracing::warn!(
            "Content store {} rejected with {}: {}",
            operation,
            status,
            message
        );
        Err(StoreError::remote(operation, Some(status.as_u16()), message))
    }

    async fn read_json<T: DeserializeOwned>(
        operation: StoreOperation,
        response: Response,
    ) -> Result<T, StoreError> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| StoreError::transport(operation, e.to_string()))?;
        decode_body(&bytes)
    }
}

#[async_trait]
impl ContentStore for RestContentStore {
    async fn create(&self, document: &ContentDocument) -> Result<DocumentId, StoreError> {
        tracing::debug!("POST {}", self.collection_url);
        let request = self
            .client
            .post(self.collection_url.clone())
            .json(&BlogPayload::from(document));
        let response = self.send(StoreOperation::Create, request).await?;

        let record: BlogRecord = Self::read_json(StoreOperation::Create, response).await?;
        record
            .id
            .map(DocumentId::new)
            .ok_or_else(|| StoreError::serialization("Create response has no _id"))
    }

    async fn update(&self, id: &DocumentId, document: &ContentDocument) -> Result<(), StoreError> {
        let url = self.document_url(id)?;
        tracing::debug!("PUT {}", url);
        let request = self.client.put(url).json(&BlogPayload::from(document));
        self.send(StoreOperation::Update, request).await?;
        Ok(())
    }

    async fn delete(&self, id: &DocumentId) -> Result<(), StoreError> {
        let url = self.document_url(id)?;
        tracing::debug!("DELETE {}", url);
        self.send(StoreOperation::Delete, self.client.delete(url))
            .await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<StoredDocument>, StoreError> {
        let mut url = self.collection_url.clone();
        if let Some(role) = &self.list_role {
            url.query_pairs_mut().append_pair("role", role);
        }
        tracing::debug!("GET {}", url);

        let response = self.send(StoreOperation::List, self.client.get(url)).await?;
        let records: Vec<BlogRecord> = Self::read_json(StoreOperation::List, response).await?;

        records
            .into_iter()
            .map(BlogRecord::into_stored)
            .collect()
    }

    async fn get(&self, id: &DocumentId) -> Result<StoredDocument, StoreError> {
        let url = self.document_url(id)?;
        tracing::debug!("GET {}", url);

        let response = self.send(StoreOperation::Get, self.client.get(url)).await?;
        let record: BlogRecord = Self::read_json(StoreOperation::Get, response).await?;
        record.into_stored()
    }
}
