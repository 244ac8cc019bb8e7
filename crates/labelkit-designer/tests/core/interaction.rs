use labelkit_designer::geometry::{normalize_deg, rotate_point, Corner, Point, Rect};
use labelkit_designer::hit_test::{HitTarget, ScreenBox};
use labelkit_designer::interaction::resize_rect;
use labelkit_designer::model::{ElementId, ElementKind, LabelTemplate, LayoutElement};
use labelkit_designer::{DesignerOptions, DesignerState, ElementPatch, GuideOrientation};
use proptest::prelude::*;

/// 100 x 50 mm label: 400 x 200 px at zoom 1.
fn state_with(elements: Vec<LayoutElement>) -> DesignerState {
    let template = elements
        .into_iter()
        .fold(LabelTemplate::new("Test", 100.0, 50.0), |t, e| t.with_element(e));
    DesignerState::new(template, DesignerOptions::default())
}

fn rotate_quarter_turn(state: &mut DesignerState, id: &ElementId) {
    let element = state.template().element(id).unwrap().clone();
    let bx = ScreenBox::of(&element, state.viewport());
    let handle = bx.rotation_handle();

    assert_eq!(state.pointer_down(handle), HitTarget::RotateHandle(id.clone()));
    assert!(state.pointer_move(rotate_point(handle, bx.center(), 90.0)));
    assert!(state.pointer_up());
}

#[test]
fn test_snap_to_left_edge_is_exact() {
    let anchor = LayoutElement::new(ElementKind::Logo).at(10.0, 10.0, 20.0, 10.0);
    let moving = LayoutElement::new(ElementKind::Logo).at(10.04, 30.0, 20.0, 10.0);
    let moving_id = moving.id.clone();
    let mut state = state_with(vec![anchor, moving]);

    // grab inside the moving box and nudge it slightly to the right
    state.pointer_down(Point::new(60.0, 70.0));
    assert_eq!(state.selected_id(), Some(&moving_id));
    assert!(state.pointer_move(Point::new(60.3, 70.0)));

    let guides = state.guides().clone();
    assert!(guides
        .iter()
        .any(|g| g.orientation == GuideOrientation::Vertical && g.position == 10.0));
    assert!(state.pointer_up());
    assert!(state.guides().is_empty());
    assert_eq!(state.template().element(&moving_id).unwrap().x, 10.0);
}

#[test]
fn test_snap_disabled_keeps_raw_position() {
    let anchor = LayoutElement::new(ElementKind::Logo).at(10.0, 10.0, 20.0, 10.0);
    let moving = LayoutElement::new(ElementKind::Logo).at(10.04, 30.0, 20.0, 10.0);
    let moving_id = moving.id.clone();
    let template = LabelTemplate::new("Test", 100.0, 50.0)
        .with_element(anchor)
        .with_element(moving);
    let mut state = DesignerState::new(
        template,
        DesignerOptions {
            snap_enabled: false,
            ..DesignerOptions::default()
        },
    );

    state.pointer_down(Point::new(60.0, 70.0));
    state.pointer_move(Point::new(64.0, 70.0));
    state.pointer_up();
    let x = state.template().element(&moving_id).unwrap().x;
    assert!((x - 11.04).abs() < 1e-9);
}

#[test]
fn test_resize_keeps_opposite_corner() {
    let start = Rect::new(10.0, 10.0, 20.0, 20.0);
    let rect = resize_rect(start, Corner::TopLeft, Point::new(5.0, 0.0), 0.5);
    assert_eq!(rect, Rect::new(5.0, 0.0, 25.0, 30.0));

    // dragged past the opposite edge: clamped at the minimum size
    let rect = resize_rect(start, Corner::BottomRight, Point::new(0.0, 0.0), 0.5);
    assert_eq!((rect.x, rect.y), (10.0, 10.0));
    assert_eq!((rect.width, rect.height), (0.5, 0.5));
}

#[test]
fn test_resize_gesture_through_handle() {
    let element = LayoutElement::new(ElementKind::Barcode).at(10.0, 10.0, 30.0, 20.0);
    let id = element.id.clone();
    let mut state = state_with(vec![element]);
    state.select(&id);

    // bottom-right corner of 40,20 .. 160,60 px
    let target = state.pointer_down(Point::new(160.0, 60.0));
    assert_eq!(target, HitTarget::ResizeHandle(id.clone(), Corner::BottomRight));
    state.pointer_move(Point::new(200.0, 100.0));
    state.pointer_up();

    let e = state.template().element(&id).unwrap();
    assert!((e.width - 40.0).abs() < 1e-9);
    assert!((e.height - 40.0).abs() < 1e-9);
    assert_eq!((e.x, e.y), (10.0, 10.0));
}

#[test]
fn test_four_quarter_turns() {
    let element = LayoutElement::new(ElementKind::Logo).at(10.0, 10.0, 25.0, 15.0);
    let id = element.id.clone();
    let mut state = state_with(vec![element]);
    state.select(&id);
    let len = state.history().len();

    for _ in 0..4 {
        rotate_quarter_turn(&mut state, &id);
    }
    assert_eq!(state.history().len(), len + 4);
    let rotation = normalize_deg(state.template().element(&id).unwrap().rotation);
    assert!(rotation < 1e-6 || rotation > 360.0 - 1e-6, "{rotation}");
}

proptest! {
    #[test]
    fn prop_full_turn_is_congruent(start in -720.0f64..720.0) {
        let element = LayoutElement::new(ElementKind::Text).at(30.0, 30.0, 30.0, 20.0);
        let id = element.id.clone();
        let mut state = state_with(vec![element]);
        state.select(&id);
        state.update_selected(ElementPatch::Rotation(start));

        for _ in 0..4 {
            rotate_quarter_turn(&mut state, &id);
        }
        let end = state.template().element(&id).unwrap().rotation;
        let diff = normalize_deg(end - start);
        prop_assert!(diff < 1e-6 || diff > 360.0 - 1e-6, "{} vs {}", start, end);
    }
}
