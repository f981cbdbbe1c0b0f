//! ContentStore Trait - Persistence Abstraction
//!
//! `ContentStore` is the only seam between the editing core and wherever
//! articles are kept. Two backends ship with the crate:
//!
//! - [`InMemoryContentStore`](super::InMemoryContentStore) for tests and offline use
//! - [`RestContentStore`](super::RestContentStore) for the CMS HTTP backend
//!
//! # Examples
//!
//! ```rust
//! use blogstudio_core::db::{ContentStore, InMemoryContentStore};
//! use blogstudio_core::models::ContentDocument;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), blogstudio_core::db::StoreError> {
//!     let store: Arc<dyn ContentStore> = Arc::new(InMemoryContentStore::new());
//!
//!     let id = store.create(&ContentDocument::new("Hello")).await?;
//!     let stored = store.get(&id).await?;
//!     assert_eq!(stored.document.title, "Hello");
//!
//!     Ok(())
//! }
//! ```

use crate::db::StoreError;
use crate::models::{ContentDocument, DocumentId, StoredDocument};
use async_trait::async_trait;

/// Persistence for content documents
///
/// Every call is a single request with no retry. A failure leaves nothing
/// half-applied on the caller's side; the caller keeps its editing state and
/// may try again.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a store can sit behind an
/// `Arc<dyn ContentStore>` shared across tasks.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Persist a new document and return the identity the store assigned
    async fn create(&self, document: &ContentDocument) -> Result<DocumentId, StoreError>;

    /// Replace the stored document with this identity
    async fn update(&self, id: &DocumentId, document: &ContentDocument) -> Result<(), StoreError>;

    /// Remove a document permanently
    async fn delete(&self, id: &DocumentId) -> Result<(), StoreError>;

    /// All stored documents, in the order the store reports them
    async fn list(&self) -> Result<Vec<StoredDocument>, StoreError>;

    /// Fetch one stored document
    async fn get(&self, id: &DocumentId) -> Result<StoredDocument, StoreError>;
}
