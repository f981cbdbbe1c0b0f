//! Error types for block editing operations
//!
//! Every editor error is synchronous and local: the rejected call leaves the
//! document exactly as it was, and the editing session carries on.

use crate::models::BlockKind;
use thiserror::Error;

/// Errors returned by [`BlockEditor`](crate::operations::BlockEditor) operations
///
/// # Examples
///
/// ```rust
/// use blogstudio_core::models::BlockKind;
/// use blogstudio_core::operations::EditorError;
///
/// let err = EditorError::invalid_operation("update_block_text", 1, BlockKind::BulletList);
/// assert_eq!(
///     err.to_string(),
///     "Cannot update_block_text on block 1 of kind 'bulletList'"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// Operation does not apply to the kind of the target block
    ///
    /// Text edits only apply to headings and paragraphs; item edits only apply
    /// to bullet and numbered lists.
    #[error("Cannot {operation} on block {index} of kind '{kind}'")]
    InvalidOperation {
        operation: &'static str,
        index: usize,
        kind: BlockKind,
    },

    /// Block index past the end of the sequence
    #[error("Block index {index} is out of range for {len} blocks")]
    BlockIndexOutOfRange { index: usize, len: usize },

    /// Item index past the end of a list block
    #[error("Item index {item_index} is out of range for {len} items in block {block_index}")]
    ListItemIndexOutOfRange {
        block_index: usize,
        item_index: usize,
        len: usize,
    },
}

impl EditorError {
    /// Create an invalid operation error
    pub fn invalid_operation(operation: &'static str, index: usize, kind: BlockKind) -> Self {
        Self::InvalidOperation {
            operation,
            index,
            kind,
        }
    }

    /// Create a block index error
    pub fn block_out_of_range(index: usize, len: usize) -> Self {
        Self::BlockIndexOutOfRange { index, len }
    }

    /// Create a list item index error
    pub fn item_out_of_range(block_index: usize, item_index: usize, len: usize) -> Self {
        Self::ListItemIndexOutOfRange {
            block_index,
            item_index,
            len,
        }
    }

    /// Whether the error comes from a kind mismatch rather than a bad index
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::InvalidOperation { .. })
    }
}
