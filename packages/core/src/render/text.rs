//! Plain text renderer for terminals

use super::{status_line, BlockRenderer};
use crate::models::{BlockKind, ContentDocument, ListItem};

const INDENT: &str = "    ";

/// Renders blocks as plain text
///
/// Each block opens with a `[kind]` label line and ends with a blank line:
///
/// ```text
/// [heading]
/// Intro
/// =====
///
/// [bullet list]
///   • First point
///       with a description
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }

    fn label(kind: BlockKind, out: &mut String) {
        out.push('[');
        out.push_str(kind.label());
        out.push_str("]\n");
    }

    fn render_items(
        &self,
        items: &[ListItem],
        marker: impl Fn(usize) -> String,
        out: &mut String,
    ) {
        if items.is_empty() {
            out.push_str("  (no items)\n\n");
            return;
        }

        for (index, item) in items.iter().enumerate() {
            out.push_str("  ");
            out.push_str(&marker(index));
            out.push(' ');
            out.push_str(&item.title);
            out.push('\n');
            for line in item.description.lines() {
                out.push_str(INDENT);
                out.push_str("  ");
                out.push_str(line);
                out.push('\n');
            }
        }
        out.push('\n');
    }
}

impl BlockRenderer for TextRenderer {
    fn render_heading(&self, text: &str, out: &mut String) {
        Self::label(BlockKind::Heading, out);
        out.push_str(text);
        out.push('\n');
        out.push_str(&"=".repeat(text.chars().count().max(3)));
        out.push_str("\n\n");
    }

    fn render_paragraph(&self, text: &str, out: &mut String) {
        Self::label(BlockKind::Paragraph, out);
        out.push_str(text);
        out.push_str("\n\n");
    }

    fn render_bullet_list(&self, items: &[ListItem], out: &mut String) {
        Self::label(BlockKind::BulletList, out);
        self.render_items(items, |_| "•".to_string(), out);
    }

    fn render_numbered_list(&self, items: &[ListItem], out: &mut String) {
        Self::label(BlockKind::NumberedList, out);
        self.render_items(items, |index| format!("{}.", index + 1), out);
    }

    fn render_header(&self, document: &ContentDocument, out: &mut String) {
        out.push_str(&document.title);
        out.push('\n');
        out.push_str(&status_line(document));
        out.push('\n');
        if let Some(cover_image) = &document.cover_image {
            out.push_str("Cover: ");
            out.push_str(cover_image);
            out.push('\n');
        }
        if !document.excerpt.is_empty() {
            out.push_str("Summary: ");
            out.push_str(&document.excerpt);
            out.push('\n');
        }
        out.push('\n');
    }
}
