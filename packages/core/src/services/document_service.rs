//! Document Service - Editing Sessions Against a Content Store
//!
//! Connects [`BlockEditor`] sessions to a [`ContentStore`]:
//!
//! - `new_document` / `open` start a session in "new" or "edit" mode
//! - `save` validates, stamps the publish time and creates or updates
//! - `request_delete` / `delete` remove a document after explicit confirmation
//!
//! # Examples
//!
//! ```rust
//! use blogstudio_core::db::InMemoryContentStore;
//! use blogstudio_core::models::{BlockKind, DocumentStatus};
//! use blogstudio_core::services::{DocumentService, SaveOutcome};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), blogstudio_core::services::DocumentServiceError> {
//!     let service = DocumentService::new(Arc::new(InMemoryContentStore::new()));
//!
//!     let mut editor = service.new_document();
//!     editor.set_title("Launch notes");
//!     editor.append_block(BlockKind::Paragraph);
//!
//!     let outcome = service.save(&mut editor).await?;
//!     assert!(matches!(outcome, SaveOutcome::Created(_)));
//!
//!     // A second save of the same session updates in place
//!     editor.set_status(DocumentStatus::Published);
//!     editor.set_excerpt("What shipped");
//!     assert!(matches!(service.save(&mut editor).await?, SaveOutcome::Updated(_)));
//!
//!     Ok(())
//! }
//! ```

use crate::db::ContentStore;
use crate::models::{DocumentId, StoredDocument};
use crate::operations::BlockEditor;
use crate::services::DocumentServiceError;
use chrono::Utc;
use std::sync::Arc;

/// Question the user must answer before a document is deleted
pub const DELETE_PROMPT: &str = "Delete this article permanently?";

/// Result of a successful save
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The store assigned a new identity
    Created(DocumentId),
    /// An existing document was overwritten
    Updated(DocumentId),
}

impl SaveOutcome {
    pub fn id(&self) -> &DocumentId {
        match self {
            SaveOutcome::Created(id) | SaveOutcome::Updated(id) => id,
        }
    }
}

/// A delete awaiting the user's answer to [`DELETE_PROMPT`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a pending delete does nothing until confirmed"]
pub struct PendingDelete {
    id: DocumentId,
}

impl PendingDelete {
    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    pub fn prompt(&self) -> &'static str {
        DELETE_PROMPT
    }

    /// The user said yes
    pub fn confirm(self) -> ConfirmedDelete {
        ConfirmedDelete { id: self.id }
    }
}

/// A delete the user has confirmed
///
/// Only obtainable from [`PendingDelete::confirm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedDelete {
    id: DocumentId,
}

impl ConfirmedDelete {
    pub fn id(&self) -> &DocumentId {
        &self.id
    }
}

/// Editing sessions backed by a content store
#[derive(Clone)]
pub struct DocumentService {
    store: Arc<dyn ContentStore>,
}

impl DocumentService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn ContentStore> {
        &self.store
    }

    /// Start a session for a document that has never been saved
    pub fn new_document(&self) -> BlockEditor {
        BlockEditor::new()
    }

    /// Start a session for a stored document
    pub async fn open(&self, id: &DocumentId) -> Result<BlockEditor, DocumentServiceError> {
        let stored = self.store.get(id).await?;
        tracing::debug!("Opened document {} for editing", id);
        Ok(BlockEditor::from_stored(stored))
    }

    /// All stored documents
    pub async fn list(&self) -> Result<Vec<StoredDocument>, DocumentServiceError> {
        Ok(self.store.list().await?)
    }

    /// Persist the editor's document
    ///
    /// Sends a finalized copy: a published document without a publish time is
    /// stamped with the current time. The editor takes on the identity and the
    /// stamped time only once the store accepts the write. On any error the
    /// editor is exactly as it was before the call.
    pub async fn save(&self, editor: &mut BlockEditor) -> Result<SaveOutcome, DocumentServiceError> {
        editor.document().validate()?;

        let outgoing = editor.document().finalized_at(Utc::now());

        let outcome = match editor.identity() {
            Some(id) => {
                self.store.update(id, &outgoing).await?;
                SaveOutcome::Updated(id.clone())
            }
            None => SaveOutcome::Created(self.store.create(&outgoing).await?),
        };

        editor.mark_saved(outcome.id().clone(), outgoing.published_at);
        tracing::info!(
            "Saved document {} ({}, {} blocks)",
            outcome.id(),
            outgoing.status,
            outgoing.blocks.len()
        );
        Ok(outcome)
    }

    /// Ask for confirmation before deleting `id`
    pub fn request_delete(&self, id: DocumentId) -> PendingDelete {
        PendingDelete { id }
    }

    /// Delete a confirmed document
    pub async fn delete(&self, confirmed: ConfirmedDelete) -> Result<DocumentId, DocumentServiceError> {
        self.store.delete(&confirmed.id).await?;
        tracing::info!("Deleted document {}", confirmed.id);
        Ok(confirmed.id)
    }
}

#[cfg(test)]
#[path = "document_service_test.rs"]
mod document_service_test;
