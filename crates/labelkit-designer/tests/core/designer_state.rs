use labelkit_designer::geometry::Point;
use labelkit_designer::model::{ElementKind, ReorderDirection};
use labelkit_designer::{DataBindingKey, DesignerState, ElementPatch, Key, KeyAction, KeyModifiers};

#[test]
fn test_new_state_is_clean() {
    let state = DesignerState::default();
    assert!(state.template().is_empty());
    assert!(state.selected_id().is_none());
    assert!(!state.can_undo());
    assert!(!state.can_redo());
    assert!(!state.is_modified);
    assert_eq!(state.viewport().base_size_px(), (400.0, 200.0));
}

#[test]
fn test_undo_n_edits_restores_start() {
    let mut state = DesignerState::default();
    let start = state.template().clone();

    let text = state.add_element(ElementKind::Text);
    state.update_selected(ElementPatch::Binding(Some(DataBindingKey::ProductName)));
    state.update_selected(ElementPatch::FontSize(14.0));
    let code = state.add_element(ElementKind::Barcode);
    state.reorder_element(&code, ReorderDirection::Back);
    state.duplicate_element(&text);
    state.rename_template("Bread");
    let end = state.template().clone();

    let mut steps = 0;
    while state.undo() {
        steps += 1;
    }
    assert_eq!(steps, 7);
    assert_eq!(state.template(), &start);

    while state.redo() {}
    assert_eq!(state.template(), &end);
}

#[test]
fn test_undo_drops_stale_selection() {
    let mut state = DesignerState::default();
    let id = state.add_element(ElementKind::Qrcode);
    assert_eq!(state.selected_id(), Some(&id));
    assert!(state.undo());
    assert!(state.selected_id().is_none());
    assert!(state.properties().is_none());
}

#[test]
fn test_edit_after_undo_clears_redo() {
    let mut state = DesignerState::default();
    state.add_element(ElementKind::Text);
    state.add_element(ElementKind::Line);
    assert!(state.undo());
    assert!(state.can_redo());
    state.add_element(ElementKind::Logo);
    assert!(!state.can_redo());
}

#[test]
fn test_drag_frames_share_one_history_slot() {
    let mut state = DesignerState::default();
    let id = state.add_element(ElementKind::Logo);
    state.clear_selection();
    let len = state.history().len();

    // logo box is 40,20 .. 140,50 px
    state.pointer_down(Point::new(60.0, 40.0));
    for i in 0..50 {
        state.pointer_move(Point::new(60.0 + i as f64 * 2.0, 40.0 + i as f64));
        assert_eq!(state.history().len(), len);
    }
    assert!(state.pointer_up());
    assert_eq!(state.history().len(), len + 1);

    let moved = state.template().element(&id).unwrap().clone();
    assert!(state.undo());
    let before = state.template().element(&id).unwrap();
    assert_eq!((before.x, before.y), (10.0, 10.0));
    assert!(state.redo());
    assert_eq!(state.template().element(&id).unwrap(), &moved);
}

#[test]
fn test_shortcuts_ignored_while_dragging() {
    let mut state = DesignerState::default();
    state.add_element(ElementKind::Logo);
    state.pointer_down(Point::new(60.0, 40.0));
    state.pointer_move(Point::new(80.0, 40.0));
    assert!(state.is_dragging());
    assert_eq!(state.handle_key(Key::Char('z'), KeyModifiers::ctrl()), None);
    assert_eq!(state.handle_key(Key::Delete, KeyModifiers::NONE), None);
    assert!(!state.undo());
    state.pointer_up();
    assert_eq!(
        state.handle_key(Key::Char('z'), KeyModifiers::ctrl()),
        Some(KeyAction::Undo)
    );
}

#[test]
fn test_zoom_never_changes_geometry() {
    let mut state = DesignerState::default();
    let id = state.add_element(ElementKind::Text);
    let before = state.template().clone();
    let len = state.history().len();

    state.zoom_in();
    state.zoom_in();
    state.set_zoom(3.0);
    state.fit_to_area(1200.0, 800.0, 0.1);
    assert_eq!(state.template(), &before);
    assert_eq!(state.history().len(), len);

    // a click on the element still hits it at the new zoom
    let zoom = state.viewport().zoom();
    let hit = state.pointer_down(Point::new(45.0 * zoom, 25.0 * zoom));
    assert_eq!(hit.element_id(), Some(&id));
    state.pointer_up();
}

#[test]
fn test_size_edits_clamp_to_minimum() {
    let mut state = DesignerState::default();
    let id = state.add_element(ElementKind::Text);
    state.update_selected(ElementPatch::Width(0.0));
    state.update_selected(ElementPatch::Height(-3.0));
    state.update_selected(ElementPatch::X(-15.0));
    let e = state.template().element(&id).unwrap();
    assert_eq!((e.width, e.height), (0.5, 0.5));
    assert_eq!(e.x, -15.0);
}
