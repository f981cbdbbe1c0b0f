//! HTML fragment renderer

use super::{dispatch_block, status_line, BlockRenderer};
use crate::models::{ContentBlock, ContentDocument, ListItem};
use html_escape::encode_text;

/// Renders blocks as an HTML fragment
///
/// All text is escaped. With badges enabled, each block is wrapped in a
/// `<section>` labelled with its kind, the way the admin repository view shows
/// stored articles.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer {
    badges: bool,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap every block in a section carrying a kind badge
    pub fn with_badges(mut self) -> Self {
        self.badges = true;
        self
    }

    fn render_items(&self, tag: &str, items: &[ListItem], out: &mut String) {
        out.push_str(&format!("<{tag}>\n"));
        for item in items {
            out.push_str("<li><strong>");
            out.push_str(&encode_text(&item.title));
            out.push_str("</strong>");
            if item.has_description() {
                out.push_str("<p>");
                out.push_str(&encode_text(&item.description));
                out.push_str("</p>");
            }
            out.push_str("</li>\n");
        }
        out.push_str(&format!("</{tag}>\n"));
    }
}

impl BlockRenderer for HtmlRenderer {
    fn render_heading(&self, text: &str, out: &mut String) {
        out.push_str("<h3>");
        out.push_str(&encode_text(text));
        out.push_str("</h3>\n");
    }

    fn render_paragraph(&self, text: &str, out: &mut String) {
        let lines: Vec<_> = text.split('\n').map(encode_text).collect();
        out.push_str("<p>");
        out.push_str(&lines.join("<br>\n"));
        out.push_str("</p>\n");
    }

    fn render_bullet_list(&self, items: &[ListItem], out: &mut String) {
        self.render_items("ul", items, out);
    }

    fn render_numbered_list(&self, items: &[ListItem], out: &mut String) {
        self.render_items("ol", items, out);
    }

    fn render_header(&self, document: &ContentDocument, out: &mut String) {
        out.push_str("<h1>");
        out.push_str(&encode_text(&document.title));
        out.push_str("</h1>\n");
        if let Some(cover_image) = &document.cover_image {
            out.push_str("<img class=\"cover\" src=\"");
            out.push_str(&html_escape::encode_double_quoted_attribute(cover_image));
            out.push_str("\">\n");
        }
        out.push_str("<p class=\"meta\">");
        out.push_str(&encode_text(&status_line(document)));
        out.push_str("</p>\n");
        if !document.excerpt.is_empty() {
            out.push_str("<p class=\"excerpt\"><em>");
            out.push_str(&encode_text(&document.excerpt));
            out.push_str("</em></p>\n");
        }
    }

    fn render_block(&self, block: &ContentBlock, out: &mut String) {
        if !self.badges {
            dispatch_block(self, block, out);
            return;
        }

        let kind = block.kind();
        out.push_str(&format!(
            "<section class=\"block block-{}\">\n<span class=\"badge\">{}</span>\n",
            kind.as_str(),
            kind.label()
        ));
        dispatch_block(self, block, out);
        out.push_str("</section>\n");
    }
}
