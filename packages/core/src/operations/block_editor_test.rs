//! Tests for BlockEditor operations
//!
//! Covers ordering, kind immutability, list-item isolation, rejection of
//! operations on the wrong block kind, and stable block ids.

#[cfg(test)]
mod tests {
    use crate::models::{
        BlockKind, ContentBlock, ContentDocument, DocumentId, DocumentStatus, ListItem,
        ListItemField, StoredDocument,
    };
    use crate::operations::{BlockEditor, EditorError};

    /// Helper: editor with one block of every kind, each with distinct content
    fn mixed_editor() -> BlockEditor {
        let mut editor = BlockEditor::new();
        editor.append_block(BlockKind::Heading);
        editor.update_block_text(0, "Heading").unwrap();
        editor.append_block(BlockKind::Paragraph);
        editor.update_block_text(1, "Paragraph").unwrap();
        editor.append_block(BlockKind::BulletList);
        editor
            .update_list_item_field(2, 0, ListItemField::Title, "Bullet")
            .unwrap();
        editor.append_block(BlockKind::NumberedList);
        editor
            .update_list_item_field(3, 0, ListItemField::Title, "Step")
            .unwrap();
        editor.append_list_item(3).unwrap();
        editor
            .update_list_item_field(3, 1, ListItemField::Description, "details")
            .unwrap();
        editor
    }

    fn kinds(editor: &BlockEditor) -> Vec<BlockKind> {
        editor.blocks().iter().map(ContentBlock::kind).collect()
    }

    #[test]
    fn test_new_editor_is_empty_and_unsaved() {
        let editor = BlockEditor::new();
        assert!(editor.is_empty());
        assert!(editor.is_new());
        assert!(editor.identity().is_none());
        assert_eq!(editor.document(), &ContentDocument::default());
    }

    #[test]
    fn test_append_block_seeds_content_by_kind() {
        let mut editor = BlockEditor::new();
        for kind in BlockKind::ALL {
            editor.append_block(kind);
        }

        assert_eq!(kinds(&editor), BlockKind::ALL.to_vec());
        assert_eq!(editor.blocks()[0], ContentBlock::heading(""));
        assert_eq!(editor.blocks()[1], ContentBlock::paragraph(""));
        assert_eq!(
            editor.blocks()[2],
            ContentBlock::bullet_list(vec![ListItem::new("", "")])
        );
        assert_eq!(
            editor.blocks()[3],
            ContentBlock::numbered_list(vec![ListItem::new("", "")])
        );
    }

    #[test]
    fn test_intro_and_points_scenario() {
        let mut editor = BlockEditor::new();
        editor.append_block(BlockKind::Heading);
        editor.update_block_text(0, "Intro").unwrap();
        editor.append_block(BlockKind::BulletList);
        assert_eq!(editor.append_list_item(1).unwrap(), 1);
        editor
            .update_list_item_field(1, 0, ListItemField::Title, "First point")
            .unwrap();
        editor
            .update_list_item_field(1, 1, ListItemField::Title, "Second point")
            .unwrap();

        assert_eq!(
            editor.blocks(),
            &[
                ContentBlock::heading("Intro"),
                ContentBlock::bullet_list(vec![
                    ListItem::new("First point", ""),
                    ListItem::new("Second point", ""),
                ]),
            ]
        );
    }

    #[test]
    fn test_update_block_text_on_list_is_rejected() {
        let mut editor = BlockEditor::new();
        editor.append_block(BlockKind::BulletList);
        let before = editor.blocks().to_vec();

        let err = editor.update_block_text(0, "text").unwrap_err();

        assert_eq!(
            err,
            EditorError::InvalidOperation {
                operation: "update_block_text",
                index: 0,
                kind: BlockKind::BulletList,
            }
        );
        assert!(err.is_invalid_operation());
        assert_eq!(editor.blocks(), before.as_slice());
    }

    #[test]
    fn test_list_operations_on_scalar_blocks_are_rejected() {
        let mut editor = mixed_editor();
        let before = editor.document().clone();

        for index in [0, 1] {
            assert!(editor.append_list_item(index).unwrap_err().is_invalid_operation());
            assert!(editor
                .update_list_item_field(index, 0, ListItemField::Title, "x")
                .unwrap_err()
                .is_invalid_operation());
            assert!(editor.remove_list_item(index, 0).unwrap_err().is_invalid_operation());
        }

        assert_eq!(editor.document(), &before);
    }

    #[test]
    fn test_out_of_range_indices_are_errors() {
        let mut editor = mixed_editor();
        let before = editor.document().clone();

        assert_eq!(
            editor.update_block_text(9, "x"),
            Err(EditorError::block_out_of_range(9, 4))
        );
        assert_eq!(
            editor.remove_block(4).unwrap_err(),
            EditorError::block_out_of_range(4, 4)
        );
        assert_eq!(
            editor.update_list_item_field(3, 5, ListItemField::Title, "x"),
            Err(EditorError::item_out_of_range(3, 5, 2))
        );
        assert_eq!(
            editor.move_block(0, 7),
            Err(EditorError::block_out_of_range(7, 4))
        );

        assert_eq!(editor.document(), &before);
    }

    #[test]
    fn test_remove_block_preserves_order_of_the_rest() {
        for removed in 0..4 {
            let mut editor = mixed_editor();
            let mut expected = editor.blocks().to_vec();
            let expected_removed = expected.remove(removed);

            let block = editor.remove_block(removed).unwrap();

            assert_eq!(block, expected_removed);
            assert_eq!(editor.blocks(), expected.as_slice());
        }
    }

    #[test]
    fn test_kind_never_changes_under_edits() {
        let mut editor = mixed_editor();
        let original = kinds(&editor);

        editor.update_block_text(0, "New heading").unwrap();
        editor.update_block_text(1, "New\nparagraph").unwrap();
        let _ = editor.update_block_text(2, "rejected");
        editor.append_list_item(2).unwrap();
        editor.remove_list_item(2, 0).unwrap();
        editor.remove_list_item(2, 0).unwrap();
        editor
            .update_list_item_field(3, 0, ListItemField::Description, "d")
            .unwrap();

        assert_eq!(kinds(&editor), original);
    }

    #[test]
    fn test_list_item_update_touches_exactly_one_field() {
        let mut editor = mixed_editor();
        let snapshot = editor.document().clone();

        editor
            .update_list_item_field(3, 1, ListItemField::Title, "Second step")
            .unwrap();

        let mut expected = snapshot;
        match &mut expected.blocks[3] {
            ContentBlock::NumberedList { items } => items[1].title = "Second step".to_string(),
            other => panic!("Expected numbered list, got {:?}", other),
        }
        assert_eq!(editor.document(), &expected);
    }

    #[test]
    fn test_remove_last_list_item_leaves_empty_list() {
        let mut editor = BlockEditor::new();
        editor.append_block(BlockKind::BulletList);

        let removed = editor.remove_list_item(0, 0).unwrap();

        assert_eq!(removed, ListItem::default());
        assert_eq!(editor.blocks()[0], ContentBlock::bullet_list(Vec::new()));
        assert_eq!(
            editor.remove_list_item(0, 0),
            Err(EditorError::item_out_of_range(0, 0, 0))
        );
    }

    #[test]
    fn test_move_block_keeps_relative_order() {
        let mut editor = mixed_editor();
        let blocks = editor.blocks().to_vec();

        editor.move_block(0, 3).unwrap();
        assert_eq!(
            editor.blocks(),
            &[
                blocks[1].clone(),
                blocks[2].clone(),
                blocks[3].clone(),
                blocks[0].clone()
            ]
        );

        editor.move_block(3, 0).unwrap();
        assert_eq!(editor.blocks(), blocks.as_slice());

        editor.move_block(2, 2).unwrap();
        assert_eq!(editor.blocks(), blocks.as_slice());
    }

    #[test]
    fn test_block_ids_follow_blocks() {
        let mut editor = BlockEditor::new();
        let heading = editor.append_block(BlockKind::Heading);
        let paragraph = editor.append_block(BlockKind::Paragraph);
        let list = editor.append_block(BlockKind::BulletList);

        editor.remove_block(0).unwrap();
        assert_eq!(editor.index_of(heading), None);
        assert_eq!(editor.index_of(paragraph), Some(0));
        assert_eq!(editor.index_of(list), Some(1));

        editor.move_block(1, 0).unwrap();
        assert_eq!(editor.index_of(list), Some(0));
        assert_eq!(editor.block_id(1), Some(paragraph));
        assert_eq!(editor.block_id(2), None);
    }

    #[test]
    fn test_from_stored_opens_in_edit_mode() {
        let mut document = ContentDocument::new("Stored");
        document.blocks = vec![ContentBlock::heading("A"), ContentBlock::paragraph("B")];
        let stored = StoredDocument {
            id: DocumentId::from("doc-1"),
            document: document.clone(),
            created_at: None,
        };

        let editor = BlockEditor::from_stored(stored);

        assert!(!editor.is_new());
        assert_eq!(editor.identity(), Some(&DocumentId::from("doc-1")));
        assert_eq!(editor.document(), &document);
        assert!(editor.block_id(1).is_some());
    }

    #[test]
    fn test_metadata_setters() {
        let mut editor = BlockEditor::new();
        editor.set_title("Title");
        editor.set_excerpt("Excerpt");
        editor.set_cover_image("https://cdn.example.com/cover.png");
        editor.set_status(DocumentStatus::Published);

        let document = editor.document();
        assert_eq!(document.title, "Title");
        assert_eq!(document.excerpt, "Excerpt");
        assert_eq!(
            document.cover_image.as_deref(),
            Some("https://cdn.example.com/cover.png")
        );
        assert!(document.is_published());

        editor.set_cover_image("  ");
        assert!(editor.document().cover_image.is_none());
    }
}
