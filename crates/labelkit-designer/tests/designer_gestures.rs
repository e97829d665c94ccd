//! Gesture-level tests for the interaction state machine, driven headlessly
//! against a live canvas.

use labelkit_designer::{
    EditorKey, ElementContent, ElementKind, Gesture, InteractionController, LabelCanvas, Point,
    MIN_ELEMENT_SIZE,
};

fn text_canvas_at(x: f64, y: f64) -> (LabelCanvas, labelkit_designer::ElementId) {
    let mut canvas = LabelCanvas::new();
    let id = canvas.add_element(
        ElementContent::default_for(ElementKind::CustomText),
        Point::new(x, y),
    );
    (canvas, id)
}

#[test]
fn test_drag_with_grid_snap_lands_on_grid() {
    let (mut canvas, id) = text_canvas_at(50.0, 50.0);
    assert!(canvas.show_grid());

    let mut controller = InteractionController::new();
    // Grab 5 units inside the element, then drag by (+20, +13).
    controller.pointer_down(&mut canvas, Point::new(55.0, 55.0));
    controller.pointer_move(&mut canvas, Point::new(75.0, 68.0));
    controller.pointer_up();

    let frame = canvas.element(id).unwrap().frame;
    assert_eq!((frame.x, frame.y), (70.0, 60.0));
}

#[test]
fn test_drag_without_grid_is_exact() {
    let (mut canvas, id) = text_canvas_at(50.0, 50.0);
    canvas.set_show_grid(false);

    let mut controller = InteractionController::new();
    controller.pointer_down(&mut canvas, Point::new(55.0, 55.0));
    controller.pointer_move(&mut canvas, Point::new(78.0, 71.0));

    let frame = canvas.element(id).unwrap().frame;
    assert_eq!((frame.x, frame.y), (73.0, 66.0));
}

#[test]
fn test_drag_is_clamped_to_canvas_bounds() {
    let (mut canvas, id) = text_canvas_at(50.0, 50.0);
    let (w, h) = canvas.size_px();

    let mut controller = InteractionController::new();
    controller.pointer_down(&mut canvas, Point::new(55.0, 55.0));
    controller.pointer_move(&mut canvas, Point::new(w + 800.0, h + 800.0));

    let frame = canvas.element(id).unwrap().frame;
    assert!(frame.x >= 0.0 && frame.y >= 0.0);
    assert!(frame.x + frame.width <= w);
    assert!(frame.y + frame.height <= h);

    controller.pointer_move(&mut canvas, Point::new(-500.0, -500.0));
    let frame = canvas.element(id).unwrap().frame;
    assert_eq!((frame.x, frame.y), (0.0, 0.0));
}

#[test]
fn test_resize_floors_at_minimum_size() {
    let mut canvas = LabelCanvas::new();
    let id = canvas.add_element(
        ElementContent::default_for(ElementKind::Barcode),
        Point::new(20.0, 20.0),
    );
    let frame = canvas.element(id).unwrap().frame;
    assert_eq!((frame.width, frame.height), (180.0, 60.0));

    canvas.select_element(id);
    let mut controller = InteractionController::new();
    let corner = Point::new(frame.x + frame.width, frame.y + frame.height);
    controller.pointer_down(&mut canvas, corner);
    assert!(matches!(controller.gesture(), Gesture::Resizing { .. }));

    // Pull the corner in by far more than the element is wide.
    controller.pointer_move(&mut canvas, Point::new(corner.x - 100.0, corner.y - 100.0));
    let frame = canvas.element(id).unwrap().frame;
    assert_eq!(frame.width, 80.0);
    assert_eq!(frame.height, MIN_ELEMENT_SIZE);

    controller.pointer_move(&mut canvas, Point::new(corner.x - 400.0, corner.y - 400.0));
    let frame = canvas.element(id).unwrap().frame;
    assert_eq!(frame.width, MIN_ELEMENT_SIZE);
    assert_eq!(frame.height, MIN_ELEMENT_SIZE);
}

#[test]
fn test_resize_accumulates_incremental_moves() {
    let mut canvas = LabelCanvas::new();
    canvas.set_show_grid(false);
    let id = canvas.add_element(
        ElementContent::default_for(ElementKind::Qrcode),
        Point::new(10.0, 10.0),
    );
    canvas.select_element(id);
    let frame = canvas.element(id).unwrap().frame;
    let corner = Point::new(frame.x + frame.width, frame.y + frame.height);

    let mut controller = InteractionController::new();
    controller.pointer_down(&mut canvas, corner);
    controller.pointer_move(&mut canvas, Point::new(corner.x + 5.0, corner.y + 5.0));
    controller.pointer_move(&mut canvas, Point::new(corner.x + 12.0, corner.y + 9.0));
    controller.pointer_up();

    let resized = canvas.element(id).unwrap().frame;
    assert_eq!(resized.width, frame.width + 12.0);
    assert_eq!(resized.height, frame.height + 9.0);
    // Resizing never moves the top-left corner.
    assert_eq!((resized.x, resized.y), (frame.x, frame.y));
}

#[test]
fn test_corner_press_drags_until_selected_then_resizes() {
    let mut canvas = LabelCanvas::new();
    canvas.set_show_grid(false);
    let id = canvas.add_element(
        ElementContent::default_for(ElementKind::Image),
        Point::new(40.0, 40.0),
    );
    let frame = canvas.element(id).unwrap().frame;
    // Just inside the corner: within handle tolerance, but handles are not
    // active until the element is selected.
    let near_corner = Point::new(frame.x + frame.width - 2.0, frame.y + frame.height - 2.0);

    let mut controller = InteractionController::new();
    controller.pointer_down(&mut canvas, near_corner);
    assert_eq!(canvas.selected_id(), Some(id));
    assert!(matches!(controller.gesture(), Gesture::Dragging { .. }));
    controller.pointer_up();

    controller.pointer_down(&mut canvas, near_corner);
    assert!(matches!(controller.gesture(), Gesture::Resizing { id: hit, .. } if hit == id));
}

#[test]
fn test_resize_is_capped_at_canvas_bounds() {
    let mut canvas = LabelCanvas::new();
    let (w, h) = canvas.size_px();
    let id = canvas.add_element(
        ElementContent::default_for(ElementKind::Barcode),
        Point::new(20.0, 20.0),
    );
    canvas.select_element(id);
    let frame = canvas.element(id).unwrap().frame;
    let corner = Point::new(frame.x + frame.width, frame.y + frame.height);

    let mut controller = InteractionController::new();
    controller.pointer_down(&mut canvas, corner);
    controller.pointer_move(&mut canvas, Point::new(corner.x + 800.0, corner.y + 800.0));
    controller.pointer_up();

    let frame = canvas.element(id).unwrap().frame;
    assert!(frame.width <= w);
    assert!(frame.height <= h);
    assert!(frame.x >= 0.0 && frame.y >= 0.0);
    assert!(frame.x + frame.width <= w);
    assert!(frame.y + frame.height <= h);
}

#[test]
fn test_delete_key_removes_selection_and_idles() {
    let (mut canvas, id) = text_canvas_at(50.0, 50.0);
    canvas.select_element(id);

    let mut controller = InteractionController::new();
    controller.key_down(&mut canvas, EditorKey::Delete);
    assert!(canvas.is_empty());
    assert_eq!(canvas.selected_id(), None);
    assert_eq!(controller.gesture(), Gesture::Idle);

    // Backspace with nothing selected is a no-op.
    controller.key_down(&mut canvas, EditorKey::Backspace);
    assert_eq!(controller.gesture(), Gesture::Idle);
}

#[test]
fn test_selection_always_resolves_after_gesture_storm() {
    let mut canvas = LabelCanvas::new();
    let a = canvas.add_element(
        ElementContent::default_for(ElementKind::CustomText),
        Point::new(10.0, 10.0),
    );
    let b = canvas.add_element(
        ElementContent::default_for(ElementKind::Barcode),
        Point::new(10.0, 60.0),
    );

    let mut controller = InteractionController::new();
    controller.pointer_down(&mut canvas, Point::new(20.0, 20.0));
    controller.pointer_up();
    controller.pointer_down(&mut canvas, Point::new(20.0, 70.0));
    controller.pointer_up();
    controller.key_down(&mut canvas, EditorKey::Delete);
    controller.pointer_down(&mut canvas, Point::new(20.0, 20.0));
    controller.pointer_up();

    assert_eq!(canvas.selected_id(), Some(a));
    assert!(canvas.element(a).is_some());
    assert!(canvas.element(b).is_none());
    assert_eq!(canvas.element_count(), 1);
}
