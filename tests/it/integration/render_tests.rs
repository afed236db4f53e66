//! Rendering of the editor surface after interactive changes.

use crate::helpers::{surface_pixel, TestEditorBuilder, GRAY, GREEN};
use imageboard::{point, Bounds};

const RED: (u8, u8, u8, u8) = (255, 0, 0, 255);

fn is_blue(px: (u8, u8, u8, u8)) -> bool {
    px.2 > 200 && px.0 < 50 && px.3 >= 250
}

fn is_red(px: (u8, u8, u8, u8)) -> bool {
    px.0 > 200 && px.1 < 50 && px.2 < 50 && px.3 >= 250
}

fn near(actual: (u8, u8, u8, u8), rgba: [u8; 4]) -> bool {
    let expected = [actual.0, actual.1, actual.2, actual.3];
    expected.iter().zip(rgba).all(|(a, b)| a.abs_diff(b) <= 2)
}

#[test]
fn test_new_editor_surface_is_transparent() {
    let (editor, _) = TestEditorBuilder::new().build();
    assert_eq!(surface_pixel(&editor, 0, 0).3, 0);
    assert_eq!(surface_pixel(&editor, 399, 299).3, 0);
}

#[test]
fn test_placed_item_is_drawn_with_handle() {
    let (editor, _) = TestEditorBuilder::new().with_item(20.0, 20.0, 100.0, 80.0).build();

    assert!(near(surface_pixel(&editor, 60, 60), GREEN));
    // Handle square 110..120 x 90..100.
    assert_eq!(surface_pixel(&editor, 115, 95), RED);
    assert_eq!(surface_pixel(&editor, 200, 200).3, 0);
}

#[test]
fn test_selection_border_follows_selection() {
    let (mut editor, _) = TestEditorBuilder::new().with_item(20.0, 20.0, 100.0, 80.0).build();
    assert!(!is_blue(surface_pixel(&editor, 20, 60)));

    editor.handle_pointer_down(point(60.0, 60.0));
    editor.handle_pointer_up();
    assert!(is_blue(surface_pixel(&editor, 20, 60)));

    editor.handle_pointer_down(point(300.0, 250.0));
    assert!(!is_blue(surface_pixel(&editor, 20, 60)));
}

#[test]
fn test_drag_redraws_at_new_position() {
    let (mut editor, _) = TestEditorBuilder::new().with_item(20.0, 20.0, 40.0, 40.0).build();

    editor.handle_pointer_down(point(30.0, 30.0));
    editor.handle_pointer_move(point(230.0, 130.0));
    editor.handle_pointer_up();

    assert_eq!(surface_pixel(&editor, 40, 40).3, 0);
    assert!(near(surface_pixel(&editor, 240, 140), GREEN));
}

#[test]
fn test_later_item_paints_over_earlier() {
    let (editor, _) = TestEditorBuilder::new()
        .with_colored_item(Bounds::new(0.0, 0.0, 100.0, 100.0), GREEN)
        .with_colored_item(Bounds::new(50.0, 50.0, 100.0, 100.0), GRAY)
        .build();

    assert!(near(surface_pixel(&editor, 25, 25), GREEN));
    assert!(near(surface_pixel(&editor, 75, 75), GRAY));
}

#[test]
fn test_undecorated_render_hides_handles_and_border() {
    let (mut editor, ids) = TestEditorBuilder::new().with_item(20.0, 20.0, 100.0, 80.0).build();
    editor.handle_pointer_down(point(60.0, 60.0));
    editor.handle_pointer_up();

    let snapshot = editor.render_without_decoration();

    let px = snapshot.pixel(115, 95).unwrap();
    let handle_px = (px.red(), px.green(), px.blue(), px.alpha());
    assert!(!is_red(handle_px));
    assert!(near(handle_px, GREEN));
    let px = snapshot.pixel(20, 60).unwrap();
    assert!(!is_blue((px.red(), px.green(), px.blue(), px.alpha())));

    // Selection and decoration are back on the live surface.
    assert_eq!(editor.selected_id(), Some(ids[0]));
    assert_eq!(surface_pixel(&editor, 115, 95), RED);
    assert!(is_blue(surface_pixel(&editor, 20, 60)));
}

#[test]
fn test_render_without_handles_then_with_matches_plain_render() {
    let (mut editor, _) = TestEditorBuilder::new()
        .with_item(20.0, 20.0, 100.0, 80.0)
        .with_item(60.0, 40.0, 50.0, 50.0)
        .build();
    editor.handle_pointer_down(point(70.0, 50.0));
    editor.handle_pointer_up();

    editor.render(true);
    let plain = editor.surface().data().to_vec();

    editor.render(false);
    assert_ne!(editor.surface().data(), plain.as_slice());
    editor.render(true);
    assert_eq!(editor.surface().data(), plain.as_slice());
}

#[test]
fn test_shrunk_to_nothing_keeps_handle_visible() {
    let (mut editor, ids) = TestEditorBuilder::new().with_item(100.0, 100.0, 20.0, 20.0).build();

    editor.handle_pointer_down(point(115.0, 115.0));
    editor.handle_pointer_move(point(75.0, 75.0));

    assert_eq!(editor.item(ids[0]).unwrap().size(), (-20.0, -20.0));
    assert_eq!(surface_pixel(&editor, 110, 110).3, 0);
    // Corner now at (80, 80); handle covers 70..80.
    assert_eq!(surface_pixel(&editor, 75, 75), RED);
}
