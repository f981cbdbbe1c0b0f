//! Tests for the content block schema

#[cfg(test)]
mod tests {
    use crate::models::{BlockId, BlockKind, ContentBlock, ListItem, ListItemField};
    use serde_json::json;

    #[test]
    fn test_empty_scalar_blocks_have_empty_text() {
        for kind in [BlockKind::Heading, BlockKind::Paragraph] {
            let block = ContentBlock::empty(kind);
            assert_eq!(block.kind(), kind);
            assert_eq!(block.text(), Some(""));
            assert!(block.items().is_none());
        }
    }

    #[test]
    fn test_empty_list_blocks_are_seeded_with_one_item() {
        for kind in [BlockKind::BulletList, BlockKind::NumberedList] {
            let block = ContentBlock::empty(kind);
            assert_eq!(block.kind(), kind);
            assert!(block.text().is_none());
            assert_eq!(block.items(), Some(&[ListItem::default()][..]));
        }
    }

    #[test]
    fn test_heading_serializes_with_kind_tag() {
        let value = serde_json::to_value(ContentBlock::heading("Intro")).unwrap();
        assert_eq!(value, json!({ "kind": "heading", "text": "Intro" }));
    }

    #[test]
    fn test_list_serializes_without_text_field() {
        let block = ContentBlock::numbered_list(vec![ListItem::new("Step", "Do it")]);
        let value = serde_json::to_value(block).unwrap();

        assert_eq!(
            value,
            json!({
                "kind": "numberedList",
                "items": [{ "title": "Step", "description": "Do it" }]
            })
        );
        assert!(value.get("text").is_none());
    }

    #[test]
    fn test_list_item_description_defaults_to_empty() {
        let block: ContentBlock = serde_json::from_value(json!({
            "kind": "bulletList",
            "items": [{ "title": "Only a title" }]
        }))
        .unwrap();

        assert_eq!(block.items().unwrap()[0], ListItem::new("Only a title", ""));
    }

    #[test]
    fn test_kind_parsing_matches_wire_names() {
        for kind in BlockKind::ALL {
            assert_eq!(kind.as_str().parse::<BlockKind>().unwrap(), kind);
        }

        let err = "bullet-list".parse::<BlockKind>().unwrap_err();
        assert!(err.to_string().contains("bullet-list"));
    }

    #[test]
    fn test_labels_are_distinct() {
        let labels: std::collections::HashSet<_> =
            BlockKind::ALL.iter().map(|kind| kind.label()).collect();
        assert_eq!(labels.len(), BlockKind::ALL.len());
        assert_eq!(BlockKind::NumberedList.label(), "numbered list");
    }

    #[test]
    fn test_from_parts_ignores_foreign_payload() {
        let heading = ContentBlock::from_parts(
            BlockKind::Heading,
            "Title".to_string(),
            vec![ListItem::new("ignored", "")],
        );
        assert_eq!(heading, ContentBlock::heading("Title"));

        let list = ContentBlock::from_parts(
            BlockKind::BulletList,
            "ignored".to_string(),
            vec![ListItem::new("kept", "")],
        );
        assert_eq!(list, ContentBlock::bullet_list(vec![ListItem::new("kept", "")]));
    }

    #[test]
    fn test_list_item_field_access() {
        let mut item = ListItem::new("Title", "");
        assert!(!item.has_description());

        item.set_field(ListItemField::Description, "More".to_string());
        assert_eq!(item.field(ListItemField::Description), "More");
        assert_eq!(item.field(ListItemField::Title), "Title");
        assert_eq!("title".parse::<ListItemField>().unwrap(), ListItemField::Title);
        assert!("subtitle".parse::<ListItemField>().is_err());
    }

    #[test]
    fn test_block_ids_are_unique() {
        assert_ne!(BlockId::new(), BlockId::new());
    }
}
