//! Content Document Data Structures
//!
//! A [`ContentDocument`] is one article's complete editable state: scalar
//! metadata plus the ordered block sequence. Documents that have been persisted
//! are returned by a content store as [`StoredDocument`]s, which pair the
//! document with its store-assigned [`DocumentId`].
//!
//! # Examples
//!
//! ```rust
//! use blogstudio_core::models::{ContentBlock, ContentDocument, DocumentStatus};
//!
//! let mut document = ContentDocument::new("Quarterly results");
//! document.excerpt = "Highlights from Q3".to_string();
//! document.blocks.push(ContentBlock::heading("Overview"));
//!
//! assert_eq!(document.status, DocumentStatus::Draft);
//! assert!(document.validate().is_ok());
//! ```

use crate::models::ContentBlock;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Validation errors raised before a document is sent to a store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Document title is required")]
    MissingTitle,

    #[error("An excerpt is required before publishing")]
    MissingExcerpt,

    #[error("List item {item_index} in block {block_index} needs a title before publishing")]
    EmptyListItemTitle {
        block_index: usize,
        item_index: usize,
    },

    #[error("Invalid publish date: '{0}'")]
    InvalidPublishDate(String),

    #[error("Invalid document status: '{0}'")]
    InvalidStatus(String),
}

/// Publication state of a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    #[default]
    Draft,
    Published,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Draft => "draft",
            DocumentStatus::Published => "published",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(DocumentStatus::Draft),
            "published" => Ok(DocumentStatus::Published),
            other => Err(ValidationError::InvalidStatus(other.to_string())),
        }
    }
}

/// Identity assigned by a content store on first create
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// One article: metadata plus ordered body blocks
///
/// # Fields
///
/// - `title`: Article title, required on save
/// - `excerpt`: Summary shown on cards, required once published
/// - `cover_image`: URL of an externally hosted cover image
/// - `status`: Draft or published
/// - `published_at`: Explicit publish time; stamped at save time when a
///   published document has none
/// - `blocks`: Body content in reading order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentDocument {
    pub title: String,
    pub excerpt: String,
    pub cover_image: Option<String>,
    pub status: DocumentStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub blocks: Vec<ContentBlock>,
}

impl ContentDocument {
    /// Create a draft with the given title and no body
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn is_published(&self) -> bool {
        self.status == DocumentStatus::Published
    }

    /// Check the document is fit to be sent to a store
    ///
    /// Drafts only need a title. Published documents also need an excerpt and
    /// a title on every list item.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }

        if !self.is_published() {
            return Ok(());
        }

        if self.excerpt.trim().is_empty() {
            return Err(ValidationError::MissingExcerpt);
        }

        for (block_index, block) in self.blocks.iter().enumerate() {
            let Some(items) = block.items() else {
                continue;
            };
            if let Some(item_index) = items.iter().position(|item| item.title.trim().is_empty()) {
                return Err(ValidationError::EmptyListItemTitle {
                    block_index,
                    item_index,
                });
            }
        }

        Ok(())
    }

    /// Copy of the document as it should be sent to a store at `now`
    ///
    /// A published document without an explicit `published_at` is stamped with
    /// `now`. Everything else is returned unchanged.
    pub fn finalized_at(&self, now: DateTime<Utc>) -> ContentDocument {
        let mut finalized = self.clone();
        if finalized.is_published() && finalized.published_at.is_none() {
            finalized.published_at = Some(now);
        }
        finalized
    }
}

/// A document as returned by a content store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredDocument {
    pub id: DocumentId,
    pub document: ContentDocument,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl StoredDocument {
    /// Date shown in listings: publish time, falling back to creation time
    pub fn display_date(&self) -> Option<DateTime<Utc>> {
        self.document.published_at.or(self.created_at)
    }
}

/// Parse a publish date as entered in a form
///
/// Accepts an empty string (no date), a calendar date `YYYY-MM-DD` (midnight
/// UTC), or a full RFC 3339 timestamp.
pub fn parse_publish_date(input: &str) -> Result<Option<DateTime<Utc>>, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|midnight| Some(midnight.and_utc()))
            .ok_or_else(|| ValidationError::InvalidPublishDate(input.to_string()));
    }

    DateTime::parse_from_rfc3339(input)
        .map(|timestamp| Some(timestamp.with_timezone(&Utc)))
        .map_err(|_| ValidationError::InvalidPublishDate(input.to_string()))
}

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;
