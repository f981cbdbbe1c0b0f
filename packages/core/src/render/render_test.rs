//! Tests for the HTML and text renderers

#[cfg(test)]
mod tests {
    use crate::models::{
        parse_document_str, BlockKind, ContentBlock, ContentDocument, DocumentStatus, ListItem,
        MalformedDocument,
    };
    use crate::render::{BlockRenderer, HtmlRenderer, TextRenderer};
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use std::collections::HashSet;

    fn sample_document() -> ContentDocument {
        let mut document = ContentDocument::new("Annual report");
        document.excerpt = "The year in review".to_string();
        document.status = DocumentStatus::Published;
        document.published_at = Some(Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap());
        document.blocks = vec![
            ContentBlock::heading("Intro"),
            ContentBlock::paragraph("First line\nSecond line"),
            ContentBlock::bullet_list(vec![
                ListItem::new("Growth", "Revenue up 12%"),
                ListItem::new("Hiring", ""),
            ]),
            ContentBlock::numbered_list(vec![ListItem::new("Plan", ""), ListItem::new("Do", "")]),
        ];
        document
    }

    fn renderers() -> Vec<Box<dyn BlockRenderer>> {
        vec![
            Box::new(HtmlRenderer::new()),
            Box::new(HtmlRenderer::new().with_badges()),
            Box::new(TextRenderer::new()),
        ]
    }

    #[test]
    fn test_every_kind_renders_distinct_non_empty_output() {
        for renderer in renderers() {
            let outputs: Vec<String> = BlockKind::ALL
                .iter()
                .map(|kind| renderer.render_blocks(&[ContentBlock::empty(*kind)]))
                .collect();

            assert!(outputs.iter().all(|output| !output.trim().is_empty()));
            let distinct: HashSet<_> = outputs.iter().collect();
            assert_eq!(distinct.len(), BlockKind::ALL.len());
        }
    }

    #[test]
    fn test_empty_lists_render_as_empty_containers() {
        let html = HtmlRenderer::new().render_blocks(&[
            ContentBlock::bullet_list(Vec::new()),
            ContentBlock::numbered_list(Vec::new()),
        ]);
        assert_eq!(html, "<ul>\n</ul>\n<ol>\n</ol>\n");

        let text = TextRenderer::new().render_blocks(&[ContentBlock::bullet_list(Vec::new())]);
        assert_eq!(text, "[bullet list]\n  (no items)\n\n");
    }

    #[test]
    fn test_html_blocks() {
        let html = HtmlRenderer::new().render_blocks(&sample_document().blocks);

        assert_eq!(
            html,
            "<h3>Intro</h3>\n\
             <p>First line<br>\nSecond line</p>\n\
             <ul>\n\
             <li><strong>Growth</strong><p>Revenue up 12%</p></li>\n\
             <li><strong>Hiring</strong></li>\n\
             </ul>\n\
             <ol>\n\
             <li><strong>Plan</strong></li>\n\
             <li><strong>Do</strong></li>\n\
             </ol>\n"
        );
    }

    #[test]
    fn test_html_escapes_text() {
        let html = HtmlRenderer::new().render_blocks(&[ContentBlock::heading("<script>&</script>")]);
        assert_eq!(html, "<h3>&lt;script&gt;&amp;&lt;/script&gt;</h3>\n");
    }

    #[test]
    fn test_html_paragraph_keeps_trailing_newline() {
        let renderer = HtmlRenderer::new();
        let plain = renderer.render_blocks(&[ContentBlock::paragraph("a")]);
        let trailing = renderer.render_blocks(&[ContentBlock::paragraph("a\n")]);

        assert_eq!(plain, "<p>a</p>\n");
        assert_eq!(trailing, "<p>a<br>\n</p>\n");
        assert_eq!(
            renderer.render_blocks(&[ContentBlock::paragraph("a\n\nb")]),
            "<p>a<br>\n<br>\nb</p>\n"
        );
        assert_eq!(renderer.render_blocks(&[ContentBlock::paragraph("")]), "<p></p>\n");
    }

    #[test]
    fn test_html_badges_wrap_each_block() {
        let html = HtmlRenderer::new()
            .with_badges()
            .render_blocks(&[ContentBlock::numbered_list(vec![ListItem::new("One", "")])]);

        assert!(html.starts_with(
            "<section class=\"block block-numberedList\">\n<span class=\"badge\">numbered list</span>\n"
        ));
        assert!(html.contains("<ol>\n<li><strong>One</strong></li>\n</ol>\n"));
        assert!(html.ends_with("</section>\n"));
    }

    #[test]
    fn test_text_blocks() {
        let text = TextRenderer::new().render_blocks(&sample_document().blocks);

        assert_eq!(
            text,
            "[heading]\nIntro\n=====\n\n\
             [paragraph]\nFirst line\nSecond line\n\n\
             [bullet list]\n  • Growth\n      Revenue up 12%\n  • Hiring\n\n\
             [numbered list]\n  1. Plan\n  2. Do\n\n"
        );
    }

    #[test]
    fn test_document_header() {
        let text = TextRenderer::new().render_document(&sample_document());
        assert!(text.starts_with(
            "Annual report\npublished • 2026-01-15\nSummary: The year in review\n\n[heading]"
        ));

        let draft = ContentDocument::new("Draft <1>");
        let html = HtmlRenderer::new().render_document(&draft);
        assert_eq!(
            html,
            "<h1>Draft &lt;1&gt;</h1>\n<p class=\"meta\">draft • unpublished</p>\n"
        );
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let document = sample_document();
        for renderer in renderers() {
            let first = renderer.render_document(&document);
            let second = renderer.render_document(&document);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_round_trip_does_not_change_rendered_output() {
        let document = sample_document();
        let serialized = serde_json::to_string(&document).unwrap();
        let parsed = parse_document_str(&serialized).unwrap();

        for renderer in renderers() {
            assert_eq!(
                renderer.render_document(&parsed),
                renderer.render_document(&document)
            );
        }
    }

    #[test]
    fn test_unknown_kind_is_surfaced_not_dropped() {
        let value = json!({
            "title": "Broken",
            "blocks": [
                { "kind": "heading", "text": "fine" },
                { "kind": "video", "url": "https://example.com" }
            ]
        });

        for renderer in renderers() {
            assert_eq!(
                renderer.render_value(&value),
                Err(MalformedDocument::UnknownKind {
                    index: 1,
                    kind: "video".to_string()
                })
            );
        }
    }

    #[test]
    fn test_list_missing_items_is_surfaced() {
        let blocks = json!([{ "kind": "numberedList" }]);
        assert_eq!(
            TextRenderer::new().render_blocks_value(&blocks),
            Err(MalformedDocument::MissingItems {
                index: 0,
                kind: BlockKind::NumberedList
            })
        );
    }

    #[test]
    fn test_render_value_matches_render_document() {
        let document = sample_document();
        let value = serde_json::to_value(&document).unwrap();
        let renderer = HtmlRenderer::new();

        assert_eq!(
            renderer.render_value(&value).unwrap(),
            renderer.render_document(&document)
        );
    }
}
