//! Content Block Data Structures
//!
//! An article body is an ordered sequence of [`ContentBlock`]s. Each block is one
//! of four closed variants, discriminated on the wire by a `kind` field:
//!
//! - `heading` - a single line of text
//! - `paragraph` - free-form multi-line text
//! - `bulletList` / `numberedList` - an ordered sequence of [`ListItem`]s
//!
//! Scalar blocks and list blocks have disjoint payloads: a heading can never
//! carry items and a list can never carry text, because each variant only has
//! the field that belongs to it.
//!
//! # Examples
//!
//! ```rust
//! use blogstudio_core::models::{BlockKind, ContentBlock};
//!
//! let heading = ContentBlock::heading("Intro");
//! assert_eq!(heading.kind(), BlockKind::Heading);
//!
//! // New list blocks are seeded with one empty item
//! let list = ContentBlock::empty(BlockKind::BulletList);
//! assert_eq!(list.items().map(|items| items.len()), Some(1));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Error returned when a kind or field name is not part of the block schema
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {what}: '{value}'")]
pub struct UnknownVariant {
    pub what: &'static str,
    pub value: String,
}

impl UnknownVariant {
    fn new(what: &'static str, value: &str) -> Self {
        Self {
            what,
            value: value.to_string(),
        }
    }
}

/// Discriminator of a [`ContentBlock`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockKind {
    Heading,
    Paragraph,
    BulletList,
    NumberedList,
}

impl BlockKind {
    /// Every kind in the union, in toolbar order
    pub const ALL: [BlockKind; 4] = [
        BlockKind::Heading,
        BlockKind::Paragraph,
        BlockKind::BulletList,
        BlockKind::NumberedList,
    ];

    /// Wire name used in the `kind` field
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Heading => "heading",
            BlockKind::Paragraph => "paragraph",
            BlockKind::BulletList => "bulletList",
            BlockKind::NumberedList => "numberedList",
        }
    }

    /// Human-readable label shown on kind badges
    pub fn label(&self) -> &'static str {
        match self {
            BlockKind::Heading => "heading",
            BlockKind::Paragraph => "paragraph",
            BlockKind::BulletList => "bullet list",
            BlockKind::NumberedList => "numbered list",
        }
    }

    /// Whether blocks of this kind carry `items` instead of `text`
    pub fn is_list(&self) -> bool {
        matches!(self, BlockKind::BulletList | BlockKind::NumberedList)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("block kind", s))
    }
}

/// One `{title, description}` entry of a list block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// Item title, shown prominently
    pub title: String,

    /// Optional detail text; empty means "no description"
    #[serde(default)]
    pub description: String,
}

impl ListItem {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Read one field by name
    pub fn field(&self, field: ListItemField) -> &str {
        match field {
            ListItemField::Title => &self.title,
            ListItemField::Description => &self.description,
        }
    }

    pub(crate) fn set_field(&mut self, field: ListItemField, value: String) {
        match field {
            ListItemField::Title => self.title = value,
            ListItemField::Description => self.description = value,
        }
    }

    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}

/// Editable fields of a [`ListItem`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListItemField {
    Title,
    Description,
}

impl FromStr for ListItemField {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(ListItemField::Title),
            "description" => Ok(ListItemField::Description),
            other => Err(UnknownVariant::new("list item field", other)),
        }
    }
}

/// A typed unit of article body content
///
/// Serialized with an internal `kind` tag:
///
/// ```json
/// { "kind": "heading", "text": "Intro" }
/// { "kind": "bulletList", "items": [ { "title": "First point", "description": "" } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ContentBlock {
    Heading { text: String },
    Paragraph { text: String },
    BulletList { items: Vec<ListItem> },
    NumberedList { items: Vec<ListItem> },
}

impl ContentBlock {
    /// Create the blank block an editor appends for `kind`
    ///
    /// Scalar kinds start with empty text; list kinds start with exactly one
    /// empty item.
    pub fn empty(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Heading => ContentBlock::Heading {
                text: String::new(),
            },
            BlockKind::Paragraph => ContentBlock::Paragraph {
                text: String::new(),
            },
            BlockKind::BulletList => ContentBlock::BulletList {
                items: vec![ListItem::default()],
            },
            BlockKind::NumberedList => ContentBlock::NumberedList {
                items: vec![ListItem::default()],
            },
        }
    }

    pub fn heading(text: impl Into<String>) -> Self {
        ContentBlock::Heading { text: text.into() }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentBlock::Paragraph { text: text.into() }
    }

    pub fn bullet_list(items: Vec<ListItem>) -> Self {
        ContentBlock::BulletList { items }
    }

    pub fn numbered_list(items: Vec<ListItem>) -> Self {
        ContentBlock::NumberedList { items }
    }

    /// Build a block of `kind` from whichever payload the kind uses
    ///
    /// The payload that does not belong to `kind` is ignored.
    pub fn from_parts(kind: BlockKind, text: String, items: Vec<ListItem>) -> Self {
        match kind {
            BlockKind::Heading => ContentBlock::Heading { text },
            BlockKind::Paragraph => ContentBlock::Paragraph { text },
            BlockKind::BulletList => ContentBlock::BulletList { items },
            BlockKind::NumberedList => ContentBlock::NumberedList { items },
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            ContentBlock::Heading { .. } => BlockKind::Heading,
            ContentBlock::Paragraph { .. } => BlockKind::Paragraph,
            ContentBlock::BulletList { .. } => BlockKind::BulletList,
            ContentBlock::NumberedList { .. } => BlockKind::NumberedList,
        }
    }

    pub fn is_list(&self) -> bool {
        self.kind().is_list()
    }

    /// Text payload, `None` for list blocks
    pub fn text(&self) -> Option<&str> {
        match self {
            ContentBlock::Heading { text } | ContentBlock::Paragraph { text } => Some(text),
            ContentBlock::BulletList { .. } | ContentBlock::NumberedList { .. } => None,
        }
    }

    /// Item payload, `None` for heading and paragraph blocks
    pub fn items(&self) -> Option<&[ListItem]> {
        match self {
            ContentBlock::BulletList { items } | ContentBlock::NumberedList { items } => {
                Some(items)
            }
            ContentBlock::Heading { .. } | ContentBlock::Paragraph { .. } => None,
        }
    }

    pub(crate) fn text_mut(&mut self) -> Option<&mut String> {
        match self {
            ContentBlock::Heading { text } | ContentBlock::Paragraph { text } => Some(text),
            ContentBlock::BulletList { .. } | ContentBlock::NumberedList { .. } => None,
        }
    }

    pub(crate) fn items_mut(&mut self) -> Option<&mut Vec<ListItem>> {
        match self {
            ContentBlock::BulletList { items } | ContentBlock::NumberedList { items } => {
                Some(items)
            }
            ContentBlock::Heading { .. } | ContentBlock::Paragraph { .. } => None,
        }
    }
}

/// Editor-local identifier of a block
///
/// Stable across insertions, removals and moves within one editor session.
/// Never serialized: the stored document shape has no block ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(Uuid);

impl BlockId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
#[path = "block_test.rs"]
mod block_test;
