//! CMS backend record shapes
//!
//! The HTTP backend stores articles as `blog` records:
//!
//! ```json
//! {
//!   "_id": "665f1c...",
//!   "title": "Annual report",
//!   "excerpt": "The year in review",
//!   "mainImage": "",
//!   "status": "published",
//!   "publishedAt": "2026-01-15T00:00:00.000Z",
//!   "createdAt": "2026-01-10T08:12:00.000Z",
//!   "bodySections": [
//!     { "type": "heading", "content": "Intro", "listItems": [] },
//!     { "type": "bullet-list", "content": "", "listItems": [{ "title": "A", "description": "" }] }
//!   ]
//! }
//! ```
//!
//! Sections always carry both `content` and `listItems`; only the one that
//! belongs to the section type is meaningful. Conversion to and from
//! [`ContentDocument`] happens here so the rest of the crate never sees this
//! shape.

use crate::db::StoreError;
use crate::models::wire::{assemble_block, required_kind};
use crate::models::{
    BlockKind, ContentBlock, ContentDocument, DocumentId, DocumentStatus, ListItem,
    MalformedDocument, StoredDocument,
};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Section type name used by the backend for a block kind
pub fn section_type(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::Heading => "heading",
        BlockKind::Paragraph => "paragraph",
        BlockKind::BulletList => "bullet-list",
        BlockKind::NumberedList => "numbered-list",
    }
}

/// Block kind for a backend section type name
pub fn kind_from_section_type(section_type: &str) -> Option<BlockKind> {
    match section_type {
        "heading" => Some(BlockKind::Heading),
        "paragraph" => Some(BlockKind::Paragraph),
        "bullet-list" => Some(BlockKind::BulletList),
        "numbered-list" => Some(BlockKind::NumberedList),
        _ => None,
    }
}

/// One outgoing body section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodySection {
    #[serde(rename = "type")]
    pub section_type: &'static str,
    pub content: String,
    pub list_items: Vec<ListItem>,
}

impl From<&ContentBlock> for BodySection {
    fn from(block: &ContentBlock) -> Self {
        Self {
            section_type: section_type(block.kind()),
            content: block.text().unwrap_or_default().to_string(),
            list_items: block.items().map(<[ListItem]>::to_vec).unwrap_or_default(),
        }
    }
}

/// Request body for create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPayload {
    pub title: String,
    pub excerpt: String,
    pub main_image: String,
    pub status: DocumentStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub body_sections: Vec<BodySection>,
}

impl From<&ContentDocument> for BlogPayload {
    fn from(document: &ContentDocument) -> Self {
        Self {
            title: document.title.clone(),
            excerpt: document.excerpt.clone(),
            main_image: document.cover_image.clone().unwrap_or_default(),
            status: document.status,
            published_at: document.published_at,
            body_sections: document.blocks.iter().map(BodySection::from).collect(),
        }
    }
}

/// A record as returned by the backend
///
/// Sections are kept as raw JSON until [`BlogRecord::into_stored`] checks them
/// block by block.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogRecord {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub main_image: Option<String>,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub body_sections: Option<Value>,
}

impl BlogRecord {
    /// Convert into the canonical document, checking every section
    pub fn to_document(&self) -> Result<ContentDocument, MalformedDocument> {
        let blocks = match &self.body_sections {
            Some(sections) => parse_sections(sections)?,
            None => Vec::new(),
        };

        Ok(ContentDocument {
            title: self.title.clone(),
            excerpt: self.excerpt.clone(),
            cover_image: self
                .main_image
                .clone()
                .filter(|image| !image.trim().is_empty()),
            status: self.status,
            published_at: self.published_at,
            blocks,
        })
    }

    pub fn into_stored(self) -> Result<StoredDocument, StoreError> {
        let document = self.to_document()?;
        let id = self
            .id
            .ok_or_else(|| StoreError::serialization("Record has no _id"))?;

        Ok(StoredDocument {
            id: DocumentId::new(id),
            document,
            created_at: self.created_at,
        })
    }
}

/// Parse a backend `bodySections` array
pub fn parse_sections(value: &Value) -> Result<Vec<ContentBlock>, MalformedDocument> {
    let sections = value.as_array().ok_or(MalformedDocument::BlocksNotArray)?;

    sections
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let object = section
                .as_object()
                .ok_or(MalformedDocument::BlockNotObject { index })?;
            let kind = required_kind(index, object, "type", kind_from_section_type)?;
            assemble_block(index, kind, object.get("content"), object.get("listItems"))
        })
        .collect()
}

/// Decode a response body that may or may not be wrapped as `{ "data": ... }`
///
/// When the body is an object with a `data` key only that value is decoded,
/// so a bad field inside it is reported instead of being read as a bare
/// record.
pub fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, StoreError> {
    let body: Value =
        serde_json::from_slice(bytes).map_err(|e| StoreError::serialization(e.to_string()))?;
    let inner = match body {
        Value::Object(mut object) if object.contains_key("data") => {
            object.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };
    serde_json::from_value(inner).map_err(|e| StoreError::serialization(e.to_string()))
}

/// Error body of a failed request
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
