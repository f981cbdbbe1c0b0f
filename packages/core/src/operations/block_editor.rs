//! Block Editor
//!
//! [`BlockEditor`] owns one [`ContentDocument`] and is the only way to mutate
//! it. Each operation targets exactly one block or one list item and leaves
//! every other block untouched and in place.
//!
//! # Invariants
//!
//! - Block order is exactly the authored order; nothing is sorted.
//! - A block's kind never changes. Changing content type means removing the
//!   block and appending a new one.
//! - New list blocks start with one empty item. Items only disappear through
//!   [`BlockEditor::remove_list_item`].
//! - A rejected operation leaves the document unchanged.
//!
//! Each block also gets an editor-local [`BlockId`] that follows it through
//! removals and moves, so callers holding on to a block across edits can
//! re-resolve its current position with [`BlockEditor::index_of`].
//!
//! # Examples
//!
//! ```rust
//! use blogstudio_core::models::{BlockKind, ListItemField};
//! use blogstudio_core::operations::BlockEditor;
//!
//! let mut editor = BlockEditor::new();
//! editor.append_block(BlockKind::Heading);
//! editor.update_block_text(0, "Intro").unwrap();
//!
//! editor.append_block(BlockKind::BulletList);
//! editor
//!     .update_list_item_field(1, 0, ListItemField::Title, "First point")
//!     .unwrap();
//!
//! // Text edits are rejected on list blocks
//! assert!(editor.update_block_text(1, "nope").is_err());
//! assert_eq!(editor.blocks().len(), 2);
//! ```

use crate::models::{
    BlockId, BlockKind, ContentBlock, ContentDocument, DocumentId, DocumentStatus, ListItem,
    ListItemField, StoredDocument,
};
use crate::operations::EditorError;
use chrono::{DateTime, Utc};

/// Editing state for one document
///
/// Opened in "new" mode (no identity) by [`BlockEditor::new`] or in "edit" mode
/// by [`BlockEditor::from_stored`]. The identity is set by the document service
/// after the first successful create.
#[derive(Debug, Clone, Default)]
pub struct BlockEditor {
    document: ContentDocument,
    /// Parallel to `document.blocks`
    block_ids: Vec<BlockId>,
    identity: Option<DocumentId>,
}

impl BlockEditor {
    /// Open an editor on a new, empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an editor on unsaved content (no identity yet)
    pub fn from_document(document: ContentDocument) -> Self {
        let block_ids = document.blocks.iter().map(|_| BlockId::new()).collect();
        Self {
            document,
            block_ids,
            identity: None,
        }
    }

    /// Open an editor on a persisted document
    pub fn from_stored(stored: StoredDocument) -> Self {
        let mut editor = Self::from_document(stored.document);
        editor.identity = Some(stored.id);
        editor
    }

    /// Store-assigned identity, `None` until the first successful create
    pub fn identity(&self) -> Option<&DocumentId> {
        self.identity.as_ref()
    }

    /// Whether saving will create a new record rather than update one
    pub fn is_new(&self) -> bool {
        self.identity.is_none()
    }

    pub fn document(&self) -> &ContentDocument {
        &self.document
    }

    pub fn into_document(self) -> ContentDocument {
        self.document
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.document.blocks
    }

    pub fn block(&self, index: usize) -> Option<&ContentBlock> {
        self.document.blocks.get(index)
    }

    pub fn len(&self) -> usize {
        self.document.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document.blocks.is_empty()
    }

    /// Editor-local id of the block at `index`
    pub fn block_id(&self, index: usize) -> Option<BlockId> {
        self.block_ids.get(index).copied()
    }

    /// Current position of the block with `id`
    pub fn index_of(&self, id: BlockId) -> Option<usize> {
        self.block_ids.iter().position(|candidate| *candidate == id)
    }

    /// Record a successful save
    pub(crate) fn mark_saved(&mut self, id: DocumentId, published_at: Option<DateTime<Utc>>) {
        self.identity = Some(id);
        self.document.published_at = published_at;
    }

    //
    // METADATA
    //

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.document.title = title.into();
    }

    pub fn set_excerpt(&mut self, excerpt: impl Into<String>) {
        self.document.excerpt = excerpt.into();
    }

    /// Set the cover image URL; an empty string clears it
    pub fn set_cover_image(&mut self, url: impl Into<String>) {
        let url = url.into();
        self.document.cover_image = if url.trim().is_empty() {
            None
        } else {
            Some(url)
        };
    }

    pub fn set_status(&mut self, status: DocumentStatus) {
        self.document.status = status;
    }

    pub fn set_published_at(&mut self, published_at: Option<DateTime<Utc>>) {
        self.document.published_at = published_at;
    }

    //
    // BLOCK OPERATIONS
    //

    /// Append a blank block of `kind` to the end of the document
    pub fn append_block(&mut self, kind: BlockKind) -> BlockId {
        let id = BlockId::new();
        self.document.blocks.push(ContentBlock::empty(kind));
        self.block_ids.push(id);
        id
    }

    /// Replace the text of a heading or paragraph block
    ///
    /// # Errors
    ///
    /// `InvalidOperation` if the block is a list, `BlockIndexOutOfRange` if
    /// `index` does not exist.
    pub fn update_block_text(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), EditorError> {
        let block = self.block_mut(index)?;
        let kind = block.kind();
        let text = block.text_mut().ok_or_else(|| {
            tracing::debug!("Rejected text edit on {} block {}", kind, index);
            EditorError::invalid_operation("update_block_text", index, kind)
        })?;
        *text = value.into();
        Ok(())
    }

    /// Remove the block at `index`, closing the gap
    pub fn remove_block(&mut self, index: usize) -> Result<ContentBlock, EditorError> {
        let len = self.len();
        if index >= len {
            return Err(EditorError::block_out_of_range(index, len));
        }
        self.block_ids.remove(index);
        Ok(self.document.blocks.remove(index))
    }

    /// Move the block at `from` so that it ends up at index `to`
    ///
    /// All other blocks keep their relative order.
    pub fn move_block(&mut self, from: usize, to: usize) -> Result<(), EditorError> {
        let len = self.len();
        for index in [from, to] {
            if index >= len {
                return Err(EditorError::block_out_of_range(index, len));
            }
        }
        if from == to {
            return Ok(());
        }

        let block = self.document.blocks.remove(from);
        let id = self.block_ids.remove(from);
        self.document.blocks.insert(to, block);
        self.block_ids.insert(to, id);
        Ok(())
    }

    //
    // LIST ITEM OPERATIONS
    //

    /// Append an empty item to a list block, returning its index
    pub fn append_list_item(&mut self, block_index: usize) -> Result<usize, EditorError> {
        let items = self.list_items_mut(block_index, "append_list_item")?;
        items.push(ListItem::default());
        Ok(items.len() - 1)
    }

    /// Replace one field of one list item
    pub fn update_list_item_field(
        &mut self,
        block_index: usize,
        item_index: usize,
        field: ListItemField,
        value: impl Into<String>,
    ) -> Result<(), EditorError> {
        let items = self.list_items_mut(block_index, "update_list_item_field")?;
        let len = items.len();
        let item = items
            .get_mut(item_index)
            .ok_or_else(|| EditorError::item_out_of_range(block_index, item_index, len))?;
        item.set_field(field, value.into());
        Ok(())
    }

    /// Remove one item from a list block
    ///
    /// Removing the last item leaves an empty list, which stays a valid block.
    pub fn remove_list_item(
        &mut self,
        block_index: usize,
        item_index: usize,
    ) -> Result<ListItem, EditorError> {
        let items = self.list_items_mut(block_index, "remove_list_item")?;
        let len = items.len();
        if item_index >= len {
            return Err(EditorError::item_out_of_range(block_index, item_index, len));
        }
        Ok(items.remove(item_index))
    }

    fn block_mut(&mut self, index: usize) -> Result<&mut ContentBlock, EditorError> {
        let len = self.document.blocks.len();
        self.document
            .blocks
            .get_mut(index)
            .ok_or_else(|| EditorError::block_out_of_range(index, len))
    }

    fn list_items_mut(
        &mut self,
        index: usize,
        operation: &'static str,
    ) -> Result<&mut Vec<ListItem>, EditorError> {
        let block = self.block_mut(index)?;
        let kind = block.kind();
        block.items_mut().ok_or_else(|| {
            tracing::debug!("Rejected {} on {} block {}", operation, kind, index);
            EditorError::invalid_operation(operation, index, kind)
        })
    }
}

#[cfg(test)]
#[path = "block_editor_test.rs"]
mod block_editor_test;
