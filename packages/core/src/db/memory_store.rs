//! In-memory content store
//!
//! Keeps documents in insertion order behind a `tokio::sync::RwLock`. Any
//! operation can be switched to fail with [`StoreError::Unavailable`], which is
//! how editor and service tests exercise the failure paths.

use crate::db::{ContentStore, StoreError, StoreOperation};
use crate::models::{ContentDocument, DocumentId, StoredDocument};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
struct StoreState {
    documents: Vec<StoredDocument>,
    failing: HashSet<StoreOperation>,
    requests: HashMap<StoreOperation, usize>,
}

impl StoreState {
    /// Count the request and refuse it if the operation is switched off
    fn begin(&mut self, operation: StoreOperation) -> Result<(), StoreError> {
        *self.requests.entry(operation).or_insert(0) += 1;
        if self.failing.contains(&operation) {
            tracing::debug!("In-memory store refusing {}", operation);
            return Err(StoreError::Unavailable { operation });
        }
        Ok(())
    }

    fn position(&self, id: &DocumentId) -> Option<usize> {
        self.documents.iter().position(|stored| &stored.id == id)
    }
}

/// Content store backed by process memory
#[derive(Debug, Default)]
pub struct InMemoryContentStore {
    state: RwLock<StoreState>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every future call of `operation` fail until [`recover`](Self::recover)
    pub async fn fail_on(&self, operation: StoreOperation) {
        self.state.write().await.failing.insert(operation);
    }

    /// Let `operation` succeed again
    pub async fn recover(&self, operation: StoreOperation) {
        self.state.write().await.failing.remove(&operation);
    }

    /// Number of `operation` calls received, failed ones included
    pub async fn request_count(&self, operation: StoreOperation) -> usize {
        self.state
            .read()
            .await
            .requests
            .get(&operation)
            .copied()
            .unwrap_or(0)
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.documents.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn create(&self, document: &ContentDocument) -> Result<DocumentId, StoreError> {
        let mut state = self.state.write().await;
        state.begin(StoreOperation::Create)?;

        let id = DocumentId::new(Uuid::new_v4().to_string());
        state.documents.push(StoredDocument {
            id: id.clone(),
            document: document.clone(),
            created_at: Some(Utc::now()),
        });
        Ok(id)
    }

    async fn update(&self, id: &DocumentId, document: &ContentDocument) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state.begin(StoreOperation::Update)?;

        let position = state
            .position(id)
            .ok_or_else(|| StoreError::not_found(id.clone()))?;
        state.documents[position].document = document.clone();
        Ok(())
    }

    async fn delete(&self, id: &DocumentId) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state.begin(StoreOperation::Delete)?;

        let position = state
            .position(id)
            .ok_or_else(|| StoreError::not_found(id.clone()))?;
        state.documents.remove(position);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<StoredDocument>, StoreError> {
        let mut state = self.state.write().await;
        state.begin(StoreOperation::List)?;
        Ok(state.documents.clone())
    }

    async fn get(&self, id: &DocumentId) -> Result<StoredDocument, StoreError> {
        let mut state = self.state.write().await;
        state.begin(StoreOperation::Get)?;

        state
            .position(id)
            .map(|position| state.documents[position].clone())
            .ok_or_else(|| StoreError::not_found(id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContentBlock;

    #[tokio::test]
    async fn test_create_assigns_distinct_ids_and_keeps_order() {
        let store = InMemoryContentStore::new();
        let first = store.create(&ContentDocument::new("First")).await.unwrap();
        let second = store.create(&ContentDocument::new("Second")).await.unwrap();

        assert_ne!(first, second);
        let titles: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|stored| stored.document.title)
            .collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn test_update_replaces_document() {
        let store = InMemoryContentStore::new();
        let id = store.create(&ContentDocument::new("Draft")).await.unwrap();

        let mut revised = ContentDocument::new("Revised");
        revised.blocks.push(ContentBlock::paragraph("Body"));
        store.update(&id, &revised).await.unwrap();

        let stored = store.get(&id).await.unwrap();
        assert_eq!(stored.document, revised);
        assert!(stored.created_at.is_some());
    }

    #[tokio::test]
    async fn test_missing_ids_are_not_found() {
        let store = InMemoryContentStore::new();
        let id = DocumentId::new("missing");

        assert!(matches!(
            store.update(&id, &ContentDocument::new("x")).await,
            Err(StoreError::NotFound { .. })
        ));
        assert!(matches!(store.get(&id).await, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_second_delete_fails() {
        let store = InMemoryContentStore::new();
        let id = store.create(&ContentDocument::new("Gone")).await.unwrap();

        store.delete(&id).await.unwrap();
        assert!(store.is_empty().await);
        assert!(matches!(
            store.delete(&id).await,
            Err(StoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_failure_injection() {
        let store = InMemoryContentStore::new();
        store.fail_on(StoreOperation::Create).await;

        let result = store.create(&ContentDocument::new("Offline")).await;
        assert!(matches!(
            result,
            Err(StoreError::Unavailable {
                operation: StoreOperation::Create
            })
        ));
        assert!(store.is_empty().await);
        assert_eq!(store.request_count(StoreOperation::Create).await, 1);

        store.recover(StoreOperation::Create).await;
        store.create(&ContentDocument::new("Online")).await.unwrap();
        assert_eq!(store.len().await, 1);
        assert_eq!(store.request_count(StoreOperation::Create).await, 2);
    }
}
