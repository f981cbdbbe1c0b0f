//! Block Editing Operations
//!
//! This module provides the editor that mutates a document's block sequence:
//!
//! - `BlockEditor` - owns one document and applies block and list item edits
//! - `EditorError` - rejection reasons for edits (wrong kind, bad index)
//!
//! All operations are synchronous, in-memory, and either fully apply or leave
//! the document untouched.

pub mod block_editor;
pub mod error;

pub use block_editor::BlockEditor;
pub use error::EditorError;
