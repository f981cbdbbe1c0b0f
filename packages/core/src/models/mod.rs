//! Data Models
//!
//! This module contains the structures that make up an article:
//!
//! - `ContentDocument` - metadata plus the ordered block sequence
//! - `ContentBlock` - the four block kinds (heading, paragraph, bullet list, numbered list)
//! - `ListItem` - a `{title, description}` entry inside a list block
//! - `StoredDocument` / `DocumentId` - documents as returned by a content store
//!
//! The `wire` submodule parses untrusted JSON into these types with
//! per-block error reporting.

mod block;
mod document;
pub mod wire;

pub use block::{BlockId, BlockKind, ContentBlock, ListItem, ListItemField, UnknownVariant};
pub use document::{
    parse_publish_date, ContentDocument, DocumentId, DocumentStatus, StoredDocument,
    ValidationError,
};
pub use wire::{parse_document, parse_document_str, MalformedDocument};
