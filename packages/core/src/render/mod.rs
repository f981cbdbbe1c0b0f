//! Block Rendering
//!
//! Turns a block sequence into read-only display output:
//!
//! - `BlockRenderer` - one method per block kind, plus provided methods that
//!   walk a document in reading order
//! - `HtmlRenderer` - escaped HTML fragments for web previews
//! - `TextRenderer` - plain text for terminals and logs
//!
//! Renderers never mutate their input and do not care whether a document has
//! been persisted, so a live preview of editor state and a view of a stored
//! document go through the same code.
//!
//! Dispatch over [`ContentBlock`] is an exhaustive `match`: adding a kind fails
//! to compile until every renderer handles it. JSON from outside the process is
//! parsed with [`crate::models::wire`] first, so an unknown kind surfaces as
//! [`MalformedDocument`] instead of a silently empty section.

mod html;
mod text;

pub use html::HtmlRenderer;
pub use text::TextRenderer;

use crate::models::wire::{parse_blocks, parse_document};
use crate::models::{ContentBlock, ContentDocument, ListItem, MalformedDocument};
use serde_json::Value;

/// A display target for content blocks
///
/// Implementors write each kind into `out`. Every kind must produce non-empty
/// output, distinguishable from the other kinds, even when the block has no
/// text or no items.
pub trait BlockRenderer {
    fn render_heading(&self, text: &str, out: &mut String);

    /// Paragraph text keeps its internal line breaks
    fn render_paragraph(&self, text: &str, out: &mut String);

    fn render_bullet_list(&self, items: &[ListItem], out: &mut String);

    fn render_numbered_list(&self, items: &[ListItem], out: &mut String);

    /// Title, status line and excerpt shown above the body
    fn render_header(&self, document: &ContentDocument, out: &mut String);

    /// Render one block
    fn render_block(&self, block: &ContentBlock, out: &mut String) {
        dispatch_block(self, block, out);
    }

    /// Render a block sequence in order
    fn render_blocks(&self, blocks: &[ContentBlock]) -> String {
        let mut out = String::new();
        for block in blocks {
            self.render_block(block, &mut out);
        }
        out
    }

    /// Render a full document: header, then body
    fn render_document(&self, document: &ContentDocument) -> String {
        let mut out = String::new();
        self.render_header(document, &mut out);
        out.push_str(&self.render_blocks(&document.blocks));
        out
    }

    /// Render a document received as JSON, refusing malformed blocks
    fn render_value(&self, value: &Value) -> Result<String, MalformedDocument> {
        let document = parse_document(value)?;
        Ok(self.render_document(&document))
    }

    /// Render a bare `blocks` array received as JSON
    fn render_blocks_value(&self, value: &Value) -> Result<String, MalformedDocument> {
        let blocks = parse_blocks(value)?;
        Ok(self.render_blocks(&blocks))
    }
}

/// Route a block to the renderer method for its kind
pub fn dispatch_block<R: BlockRenderer + ?Sized>(
    renderer: &R,
    block: &ContentBlock,
    out: &mut String,
) {
    match block {
        ContentBlock::Heading { text } => renderer.render_heading(text, out),
        ContentBlock::Paragraph { text } => renderer.render_paragraph(text, out),
        ContentBlock::BulletList { items } => renderer.render_bullet_list(items, out),
        ContentBlock::NumberedList { items } => renderer.render_numbered_list(items, out),
    }
}

/// Status line text: `published • 2026-01-15`, or `draft • unpublished`
pub(crate) fn status_line(document: &ContentDocument) -> String {
    let date = document
        .published_at
        .map(|published_at| published_at.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "unpublished".to_string());
    format!("{} • {}", document.status, date)
}

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;
