//! Checked parsing of documents from untrusted JSON
//!
//! `serde_json::from_value::<ContentDocument>` rejects a bad block with a
//! generic message. Fetched documents go through [`parse_document`] instead,
//! which reports which block is wrong and why, so a display can surface the
//! problem rather than render an empty section.

use crate::models::{BlockKind, ContentBlock, ContentDocument, ListItem};
use serde_json::{Map, Value};
use thiserror::Error;

/// A fetched document that does not fit the block schema
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedDocument {
    #[error("Document is not a JSON object")]
    NotAnObject,

    #[error("Document blocks are not a JSON array")]
    BlocksNotArray,

    #[error("Block {index} is not a JSON object")]
    BlockNotObject { index: usize },

    #[error("Block {index} has no kind")]
    MissingKind { index: usize },

    #[error("Block {index} has unknown kind '{kind}'")]
    UnknownKind { index: usize, kind: String },

    #[error("Block {index} of kind '{kind}' has no text")]
    MissingText { index: usize, kind: BlockKind },

    #[error("Block {index} of kind '{kind}' has no items")]
    MissingItems { index: usize, kind: BlockKind },

    #[error("Block {index} has invalid items: {reason}")]
    InvalidItems { index: usize, reason: String },

    #[error("Invalid document metadata: {0}")]
    InvalidMetadata(String),
}

/// Parse a canonical document, checking every block
pub fn parse_document(value: &Value) -> Result<ContentDocument, MalformedDocument> {
    let mut object = value
        .as_object()
        .cloned()
        .ok_or(MalformedDocument::NotAnObject)?;

    let blocks = object.remove("blocks");

    let mut document: ContentDocument = serde_json::from_value(Value::Object(object))
        .map_err(|e| MalformedDocument::InvalidMetadata(e.to_string()))?;

    document.blocks = match blocks {
        Some(blocks) => parse_blocks(&blocks)?,
        None => Vec::new(),
    };

    Ok(document)
}

/// Parse a canonical document from a JSON string
pub fn parse_document_str(json: &str) -> Result<ContentDocument, MalformedDocument> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| MalformedDocument::InvalidMetadata(e.to_string()))?;
    parse_document(&value)
}

/// Parse a canonical `blocks` array
pub fn parse_blocks(value: &Value) -> Result<Vec<ContentBlock>, MalformedDocument> {
    let blocks = value.as_array().ok_or(MalformedDocument::BlocksNotArray)?;

    blocks
        .iter()
        .enumerate()
        .map(|(index, block)| parse_block(index, block))
        .collect()
}

/// Parse one canonical block (`kind` / `text` / `items`)
pub fn parse_block(index: usize, value: &Value) -> Result<ContentBlock, MalformedDocument> {
    let object = value
        .as_object()
        .ok_or(MalformedDocument::BlockNotObject { index })?;

    let kind = required_kind(index, object, "kind", |raw| raw.parse().ok())?;
    assemble_block(index, kind, object.get("text"), object.get("items"))
}

/// Read the discriminator field of a block and map it to a kind
///
/// `resolve` turns the raw string into a kind, so callers with a different
/// naming scheme for kinds can reuse the check.
pub(crate) fn required_kind(
    index: usize,
    object: &Map<String, Value>,
    field: &str,
    resolve: impl Fn(&str) -> Option<BlockKind>,
) -> Result<BlockKind, MalformedDocument> {
    let raw = match object.get(field) {
        None | Some(Value::Null) => return Err(MalformedDocument::MissingKind { index }),
        Some(Value::String(raw)) => raw,
        Some(other) => {
            return Err(MalformedDocument::UnknownKind {
                index,
                kind: other.to_string(),
            })
        }
    };

    resolve(raw).ok_or_else(|| MalformedDocument::UnknownKind {
        index,
        kind: raw.to_string(),
    })
}

/// Build a block of a known kind from its raw payload fields
///
/// Only the payload belonging to `kind` is read and it must be present.
pub(crate) fn assemble_block(
    index: usize,
    kind: BlockKind,
    text: Option<&Value>,
    items: Option<&Value>,
) -> Result<ContentBlock, MalformedDocument> {
    if kind.is_list() {
        let items = items.ok_or(MalformedDocument::MissingItems { index, kind })?;
        let items: Vec<ListItem> =
            serde_json::from_value(items.clone()).map_err(|e| MalformedDocument::InvalidItems {
                index,
                reason: e.to_string(),
            })?;
        Ok(ContentBlock::from_parts(kind, String::new(), items))
    } else {
        let text = text
            .and_then(Value::as_str)
            .ok_or(MalformedDocument::MissingText { index, kind })?;
        Ok(ContentBlock::from_parts(kind, text.to_string(), Vec::new()))
    }
}
