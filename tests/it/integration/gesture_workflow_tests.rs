//! Drag and resize gestures from press to release.

use crate::helpers::{geometry, TestEditorBuilder};
use imageboard::point;

#[test]
fn test_drag_applies_summed_deltas() {
    let (mut editor, ids) = TestEditorBuilder::new().with_item(100.0, 100.0, 200.0, 150.0).build();

    editor.handle_pointer_down(point(150.0, 150.0));
    editor.handle_pointer_move(point(160.0, 155.0));
    editor.handle_pointer_move(point(140.0, 175.0));
    editor.handle_pointer_up();

    // Net delta (-10, +25), size untouched.
    assert_eq!(geometry(&editor, ids[0]), (90.0, 125.0, 200.0, 150.0));
    assert!(editor.input_state().is_idle());
    assert_eq!(editor.selected_id(), Some(ids[0]));
}

#[test]
fn test_resize_grows_from_handle() {
    let (mut editor, ids) = TestEditorBuilder::new().with_item(100.0, 100.0, 200.0, 150.0).build();

    editor.handle_pointer_down(point(295.0, 245.0));
    editor.handle_pointer_move(point(305.0, 250.0));
    editor.handle_pointer_move(point(325.0, 240.0));
    editor.handle_pointer_up();

    assert_eq!(geometry(&editor, ids[0]), (100.0, 100.0, 230.0, 145.0));
}

#[test]
fn test_resize_can_go_negative_without_clamp() {
    let (mut editor, ids) = TestEditorBuilder::new().with_item(10.0, 10.0, 20.0, 20.0).build();

    editor.handle_pointer_down(point(25.0, 25.0));
    editor.handle_pointer_move(point(0.0, 5.0));

    assert_eq!(geometry(&editor, ids[0]), (10.0, 10.0, -5.0, 0.0));

    // The handle followed the corner, so the next move keeps resizing.
    editor.handle_pointer_move(point(10.0, 15.0));
    assert_eq!(geometry(&editor, ids[0]), (10.0, 10.0, 5.0, 10.0));
}

#[test]
fn test_resize_respects_min_item_size() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_min_item_size(8.0)
        .with_item(10.0, 10.0, 20.0, 20.0)
        .build();

    editor.handle_pointer_down(point(25.0, 25.0));
    editor.handle_pointer_move(point(0.0, 20.0));

    assert_eq!(geometry(&editor, ids[0]), (10.0, 10.0, 8.0, 15.0));
}

#[test]
fn test_move_without_gesture_changes_nothing() {
    let (mut editor, ids) = TestEditorBuilder::new().with_item(10.0, 10.0, 20.0, 20.0).build();
    let frames = editor.perf().total_frames();

    editor.handle_pointer_move(point(15.0, 15.0));
    editor.handle_pointer_move(point(100.0, 100.0));

    assert_eq!(geometry(&editor, ids[0]), (10.0, 10.0, 20.0, 20.0));
    assert_eq!(editor.perf().total_frames(), frames);
}

#[test]
fn test_moves_after_release_are_ignored() {
    let (mut editor, ids) = TestEditorBuilder::new().with_item(10.0, 10.0, 20.0, 20.0).build();

    editor.handle_pointer_down(point(15.0, 15.0));
    editor.handle_pointer_move(point(20.0, 15.0));
    editor.handle_pointer_up();
    editor.handle_pointer_move(point(80.0, 80.0));

    assert_eq!(geometry(&editor, ids[0]), (15.0, 10.0, 20.0, 20.0));
}

#[test]
fn test_pointer_up_clears_flags_without_redraw() {
    let (mut editor, ids) = TestEditorBuilder::new().with_item(10.0, 10.0, 20.0, 20.0).build();

    editor.handle_pointer_down(point(15.0, 15.0));
    assert!(editor.item(ids[0]).unwrap().is_dragging);
    let frames = editor.perf().total_frames();

    editor.handle_pointer_up();

    let item = editor.item(ids[0]).unwrap();
    assert!(!item.is_dragging && !item.is_resizing);
    assert_eq!(editor.perf().total_frames(), frames);

    // Releasing twice is harmless.
    editor.handle_pointer_up();
    assert!(editor.input_state().is_idle());
}

#[test]
fn test_second_press_without_release_drops_stale_flags() {
    let (mut editor, ids) = TestEditorBuilder::new()
        .with_item(0.0, 0.0, 50.0, 50.0)
        .with_item(200.0, 200.0, 50.0, 50.0)
        .build();

    editor.handle_pointer_down(point(10.0, 10.0));
    editor.handle_pointer_down(point(210.0, 210.0));

    assert!(!editor.item(ids[0]).unwrap().is_dragging);
    assert!(editor.item(ids[1]).unwrap().is_dragging);
    assert_eq!(editor.input_state().dragged_item_id(), Some(ids[1]));
}

#[test]
fn test_dragged_item_is_hit_at_new_position() {
    let (mut editor, ids) = TestEditorBuilder::new().with_item(0.0, 0.0, 50.0, 50.0).build();

    editor.handle_pointer_down(point(10.0, 10.0));
    editor.handle_pointer_move(point(210.0, 110.0));
    editor.handle_pointer_up();

    assert_eq!(editor.item_at(point(10.0, 10.0)), None);
    assert_eq!(editor.item_at(point(220.0, 120.0)), Some(ids[0]));

    editor.handle_pointer_down(point(220.0, 120.0));
    assert_eq!(editor.selected_id(), Some(ids[0]));
}

#[test]
fn test_each_move_redraws() {
    let (mut editor, _) = TestEditorBuilder::new().with_item(0.0, 0.0, 50.0, 50.0).build();

    editor.handle_pointer_down(point(10.0, 10.0));
    let frames = editor.perf().total_frames();
    editor.handle_pointer_move(point(11.0, 10.0));
    editor.handle_pointer_move(point(12.0, 10.0));

    assert_eq!(editor.perf().total_frames(), frames + 2);
}
