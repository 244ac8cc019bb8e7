use labelkit_designer::geometry::Point;
use labelkit_designer::model::{
    ElementKind, LabelData, LabelTemplate, LayoutElement, TextProps,
};
use labelkit_designer::render::{render_label_svg, LabelScene};
use labelkit_designer::{DataBindingKey, DesignerState, ElementPatch};

#[test]
fn test_label_svg_uses_label_units() {
    let template = LabelTemplate::new("Box", 100.0, 50.0).with_element(
        LayoutElement::new(ElementKind::Text)
            .with_text(TextProps::static_text("Salt & Pepper <mix>"))
            .at(10.0, 20.0, 50.0, 10.0),
    );
    let svg = render_label_svg(&LabelScene::placeholders(&template), "100mm", "50mm");

    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"viewBox="0 0 400 200""#));
    assert!(svg.contains(r#"width="100mm""#));
    assert!(svg.contains("Salt &amp; Pepper &lt;mix&gt;"));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn test_rotation_is_about_the_box_center() {
    let mut element = LayoutElement::new(ElementKind::Logo).at(10.0, 10.0, 20.0, 20.0);
    element.rotation = 45.0;
    let template = LabelTemplate::new("Box", 100.0, 50.0).with_element(element);
    let svg = render_label_svg(&LabelScene::placeholders(&template), "100%", "100%");
    // center: (20% of 400, 20% of 200)
    assert!(svg.contains("rotate(45 80 40)"));
}

#[test]
fn test_codes_render_as_modules() {
    let template = LabelTemplate::default()
        .with_element(LayoutElement::new(ElementKind::Barcode))
        .with_element(LayoutElement::new(ElementKind::Qrcode).at(60.0, 10.0, 20.0, 40.0));
    let mut data = LabelData::default();
    data.set(DataBindingKey::Sku, "SD-680");

    let svg = render_label_svg(&LabelScene::build(&template, &data), "100%", "100%");
    assert!(svg.contains("<path"));
    assert!(!svg.contains("NO SKU"));
}

#[test]
fn test_editor_canvas_overlay() {
    let mut state = DesignerState::default();
    let id = state.add_element(ElementKind::Text);
    state.update_selected(ElementPatch::Binding(Some(DataBindingKey::Sku)));

    let svg = state.render_canvas_svg();
    assert!(svg.contains("{sku}"));
    assert_eq!(svg.matches("resize-handle").count(), 4);
    assert!(svg.contains("rotate-handle"));
    assert!(svg.contains(&format!("data-element-id=\"{}\"", id)));

    state.clear_selection();
    let svg = state.render_canvas_svg();
    assert!(!svg.contains("resize-handle"));
    assert!(svg.contains("class=\"outline\""));
}

#[test]
fn test_guides_drawn_while_dragging() {
    let anchor = LayoutElement::new(ElementKind::Logo).at(10.0, 10.0, 20.0, 10.0);
    let moving = LayoutElement::new(ElementKind::Logo).at(10.5, 30.0, 20.0, 10.0);
    let template = LabelTemplate::new("Box", 100.0, 50.0)
        .with_element(anchor)
        .with_element(moving);
    let mut state = DesignerState::new(template, Default::default());

    state.pointer_down(Point::new(60.0, 70.0));
    state.pointer_move(Point::new(61.0, 70.0));
    assert!(state.render_canvas_svg().contains("class=\"guide\""));
    state.pointer_up();
    assert!(!state.render_canvas_svg().contains("class=\"guide\""));
}
