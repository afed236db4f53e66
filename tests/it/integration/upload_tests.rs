//! Uploading images: decode, placement and interleaving with editing.

use crate::helpers::{geometry, png_bytes, surface_pixel, TestEditorBuilder, GRAY, GREEN};
use imageboard::{point, EditorError, UploadFile, UploadOutcome};
use std::time::Duration;

const WAIT: Duration = Duration::from_secs(10);

#[test]
fn test_cancelled_pick_is_noop() {
    let (mut editor, _) = TestEditorBuilder::new().build();

    assert!(!editor.submit_upload(None).unwrap());
    assert_eq!(editor.pending_uploads(), 0);
    assert!(editor.wait_for_uploads(WAIT).is_empty());
    assert!(editor.is_empty());
}

#[test]
fn test_upload_is_placed_at_half_size() {
    let (mut editor, _) = TestEditorBuilder::new().build();

    let file = UploadFile::new("photo.png", png_bytes(40, 30, GREEN));
    assert!(editor.submit_upload(Some(file)).unwrap());
    let outcomes = editor.wait_for_uploads(WAIT);

    assert_eq!(outcomes.len(), 1);
    let id = match &outcomes[0] {
        UploadOutcome::Added { name, item_id } => {
            assert_eq!(name, "photo.png");
            *item_id
        }
        UploadOutcome::Failed { error, .. } => panic!("upload failed: {error}"),
    };

    assert_eq!(geometry(&editor, id), (50.0, 50.0, 20.0, 15.0));
    let item = editor.item(id).unwrap();
    assert_eq!((item.image.width(), item.image.height()), (40, 30));
    assert!(!item.is_dragging && !item.is_resizing);
    assert_eq!(editor.selected_id(), None);
    assert_eq!(editor.pending_uploads(), 0);

    // Drawn on the surface.
    let (_, g, _, a) = surface_pixel(&editor, 58, 58);
    assert!(g > 190 && a >= 250);
}

#[test]
fn test_undecodable_upload_adds_nothing() {
    let (mut editor, ids) = TestEditorBuilder::new().with_item(0.0, 0.0, 10.0, 10.0).build();

    let file = UploadFile::new("notes.txt", b"definitely not an image".to_vec());
    editor.submit_upload(Some(file)).unwrap();
    let outcomes = editor.wait_for_uploads(WAIT);

    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].item_id().is_none());
    assert!(matches!(
        &outcomes[0],
        UploadOutcome::Failed { name, error: EditorError::Decode(_) } if name == "notes.txt"
    ));
    assert_eq!(crate::helpers::item_ids(&editor), ids);
}

#[test]
fn test_upload_bytes_decodes_inline() {
    let (mut editor, _) = TestEditorBuilder::new().build();

    let id = editor.upload_bytes(&png_bytes(10, 4, GRAY)).unwrap();
    assert_eq!(geometry(&editor, id), (50.0, 50.0, 5.0, 2.0));

    let err = editor.upload_bytes(&[0u8; 16]).unwrap_err();
    assert!(matches!(err, EditorError::Decode(_)));
    assert_eq!(editor.len(), 1);
}

#[test]
fn test_editing_continues_while_upload_pending() {
    let (mut editor, ids) = TestEditorBuilder::new().with_item(200.0, 200.0, 40.0, 40.0).build();

    editor
        .submit_upload(Some(UploadFile::new("a.png", png_bytes(20, 20, GREEN))))
        .unwrap();

    editor.handle_pointer_down(point(210.0, 210.0));
    editor.handle_pointer_move(point(220.0, 215.0));

    let outcomes = editor.wait_for_uploads(WAIT);
    let uploaded = outcomes[0].item_id().expect("upload decoded");

    // The gesture survives the append and still targets the same item.
    editor.handle_pointer_move(point(230.0, 220.0));
    editor.handle_pointer_up();

    assert_eq!(geometry(&editor, ids[0]), (220.0, 210.0, 40.0, 40.0));
    assert_eq!(geometry(&editor, uploaded), (50.0, 50.0, 10.0, 10.0));
    assert_eq!(editor.selected_id(), Some(ids[0]));
    assert_eq!(crate::helpers::item_ids(&editor), vec![ids[0], uploaded]);
}

#[test]
fn test_several_uploads_all_land() {
    let (mut editor, _) = TestEditorBuilder::new().build();

    for i in 0..3 {
        let file = UploadFile::new(format!("img{i}.png"), png_bytes(8 + i, 8, GREEN));
        editor.submit_upload(Some(file)).unwrap();
    }
    assert_eq!(editor.pending_uploads(), 3);

    let outcomes = editor.wait_for_uploads(WAIT);
    assert_eq!(outcomes.len(), 3);
    assert!(outcomes.iter().all(|o| o.item_id().is_some()));
    assert_eq!(editor.len(), 3);
    assert_eq!(editor.pending_uploads(), 0);
    assert!(editor.poll_uploads().is_empty());
}
