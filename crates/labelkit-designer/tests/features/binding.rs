use labelkit_designer::model::{
    ElementKind, FontWeight, LabelData, LabelTemplate, LayoutElement, StyleOverride, TextDirection,
    TextProps, TextSource,
};
use labelkit_designer::render::scene::{INVALID_CODE_PLACEHOLDER, NO_SKU_PLACEHOLDER};
use labelkit_designer::render::{LabelScene, Visual};
use labelkit_designer::{DataBindingKey, DesignerState, ElementPatch};

fn bound_text_template(key: DataBindingKey) -> (LabelTemplate, labelkit_designer::ElementId) {
    let element = LayoutElement::new(ElementKind::Text).with_text(TextProps::bound(key));
    let id = element.id.clone();
    (LabelTemplate::new("Bread", 100.0, 50.0).with_element(element), id)
}

#[test]
fn test_product_name_renders_unchanged() {
    let (template, id) = bound_text_template(DataBindingKey::ProductName);
    let mut data = LabelData::default();
    data.product_name = "ARTISAN SOURDOUGH BREAD".to_string();

    let scene = LabelScene::build(&template, &data);
    assert_eq!(scene.texts().collect::<Vec<_>>(), vec!["ARTISAN SOURDOUGH BREAD"]);
    assert!(scene.item(&id).is_some());
}

#[test]
fn test_uppercase_is_visual_only() {
    let (template, id) = bound_text_template(DataBindingKey::ProductName);
    let mut state = DesignerState::new(template, Default::default());
    state.select(&id);
    assert!(state.update_selected(ElementPatch::Uppercase(true)));

    let mut data = LabelData::default();
    data.product_name = "Artisan Sourdough Bread".to_string();
    let scene = LabelScene::build(state.template(), &data);

    assert_eq!(scene.texts().next(), Some("ARTISAN SOURDOUGH BREAD"));
    assert_eq!(data.product_name, "Artisan Sourdough Bread");
    let props = state.template().element(&id).unwrap().text().unwrap();
    assert_eq!(props.source, TextSource::Bound(DataBindingKey::ProductName));
}

#[test]
fn test_binding_wins_over_stale_content() {
    let json = r#"{
        "id": "t1", "type": "text", "x": 0, "y": 0, "width": 10, "height": 10,
        "dataBinding": "sku", "content": "stale"
    }"#;
    let element: LayoutElement = serde_json::from_str(json).unwrap();
    let template = LabelTemplate::default().with_element(element);
    let mut data = LabelData::default();
    data.sku = "SD-680".to_string();

    let scene = LabelScene::build(&template, &data);
    assert_eq!(scene.texts().next(), Some("SD-680"));
}

#[test]
fn test_missing_field_renders_empty() {
    let (template, _) = bound_text_template(DataBindingKey::Tagline);
    let scene = LabelScene::build(&template, &LabelData::default());
    assert_eq!(scene.texts().next(), Some(""));
}

#[test]
fn test_editor_shows_binding_placeholder() {
    let (template, _) = bound_text_template(DataBindingKey::NetWeight);
    let scene = LabelScene::placeholders(&template);
    assert_eq!(scene.texts().next(), Some("{netWeight}"));
}

#[test]
fn test_secondary_script_style() {
    let mut props = TextProps::bound(DataBindingKey::IngredientsAr);
    props.style_by_script.secondary = Some(StyleOverride {
        font_family: Some("Cairo".to_string()),
        font_weight: Some(FontWeight::Bold),
    });
    let element = LayoutElement::new(ElementKind::Text).with_text(props);
    let template = LabelTemplate::default().with_element(element);
    let mut data = LabelData::default();
    data.ingredients_ar = "دقيق، ماء، ملح".to_string();

    let scene = LabelScene::build(&template, &data);
    let Visual::Text(text) = &scene.items[0].visual else {
        panic!("expected text visual");
    };
    assert_eq!(text.font_family, "Cairo");
    assert_eq!(text.font_weight, FontWeight::Bold);
    assert_eq!(text.direction, TextDirection::Rtl);
    assert_eq!(text.text, "دقيق، ماء، ملح");
}

#[test]
fn test_bad_codes_degrade_to_placeholders() {
    let template = LabelTemplate::default()
        .with_element(LayoutElement::new(ElementKind::Barcode))
        .with_element(LayoutElement::new(ElementKind::Qrcode))
        .with_element(LayoutElement::new(ElementKind::Text).with_text(TextProps::static_text("ok")));

    let scene = LabelScene::build(&template, &LabelData::default());
    for item in &scene.items[..2] {
        assert_eq!(
            item.visual,
            Visual::Placeholder {
                label: NO_SKU_PLACEHOLDER.to_string()
            }
        );
    }
    assert_eq!(scene.texts().next(), Some("ok"));

    let mut data = LabelData::default();
    data.sku = "SKU-\u{2603}".to_string();
    let scene = LabelScene::build(&template, &data);
    assert_eq!(
        scene.items[0].visual,
        Visual::Placeholder {
            label: INVALID_CODE_PLACEHOLDER.to_string()
        }
    );
    assert!(matches!(scene.items[1].visual, Visual::Symbol(_)));
}
