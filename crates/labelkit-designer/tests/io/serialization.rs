use labelkit_core::StoreError;
use labelkit_designer::model::{
    ElementKind, LabelData, LabelTemplate, LayoutElement, ReorderDirection, TextProps,
};
use labelkit_designer::serialization::{load_label_data, JsonTemplateStore, TemplateFile};
use labelkit_designer::templates::{builtin_templates, TemplateStore};
use labelkit_designer::{DataBindingKey, DesignerState};

fn sample_template() -> LabelTemplate {
    let mut template = LabelTemplate::new("Jam Jar", 60.0, 40.0)
        .with_element(
            LayoutElement::new(ElementKind::Text)
                .with_text(TextProps::bound(DataBindingKey::ProductNameAr))
                .at(5.0, 5.0, 90.0, 20.0),
        )
        .with_element(LayoutElement::new(ElementKind::Line).at(5.0, 30.0, 90.0, 1.0))
        .with_element(LayoutElement::new(ElementKind::Qrcode).at(70.0, 50.0, 25.0, 40.0));
    let qr = template.elements()[2].id.clone();
    template.reorder(&qr, ReorderDirection::Back);
    template.touch();
    template
}

#[test]
fn test_template_round_trip_is_exact() {
    let template = sample_template();
    let json = serde_json::to_string(&template).unwrap();
    let back: LabelTemplate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, template);
}

#[test]
fn test_order_comes_from_z_index() {
    let template = sample_template();
    let mut value = serde_json::to_value(&template).unwrap();
    let elements = value["elements"].as_array_mut().unwrap();
    assert_eq!(elements[0]["zIndex"], 0);
    assert_eq!(elements[0]["type"], "qrcode");
    elements.reverse();

    let back: LabelTemplate = serde_json::from_value(value).unwrap();
    assert_eq!(back.elements(), template.elements());
}

#[test]
fn test_fractional_z_index_from_older_files() {
    let json = r#"{
        "id": "legacy", "name": "Legacy", "widthMm": 100, "heightMm": 50,
        "elements": [
            { "id": "a", "type": "logo", "x": 0, "y": 0, "width": 10, "height": 10, "zIndex": 3 },
            { "id": "b", "type": "logo", "x": 0, "y": 0, "width": 10, "height": 10, "zIndex": 1.5 },
            { "id": "c", "type": "logo", "x": 0, "y": 0, "width": 10, "height": 10, "zIndex": 2 }
        ]
    }"#;
    let template: LabelTemplate = serde_json::from_str(json).unwrap();
    let order: Vec<_> = template.elements().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(order, ["b", "c", "a"]);

    let out = serde_json::to_value(&template).unwrap();
    assert_eq!(out["elements"][2]["zIndex"], 2);
}

#[test]
fn test_template_file_accepts_legacy_shapes() {
    let template = sample_template();
    let array = serde_json::to_string(&vec![template.clone()]).unwrap();
    assert_eq!(TemplateFile::from_json(&array).unwrap().templates, vec![template.clone()]);

    let single = serde_json::to_string(&template).unwrap();
    assert_eq!(TemplateFile::from_json(&single).unwrap().templates.len(), 1);

    let mut file = serde_json::to_value(TemplateFile::new(vec![template])).unwrap();
    file["version"] = "2.0".into();
    let err = TemplateFile::from_json(&file.to_string()).unwrap_err();
    assert!(matches!(err, StoreError::UnsupportedVersion { .. }));
}

#[test]
fn test_json_store_persists_user_templates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library").join("templates.json");

    let mut store = JsonTemplateStore::open(&path).unwrap();
    assert_eq!(store.library().count(), builtin_templates().len());

    let mut state = DesignerState::new(sample_template(), Default::default());
    state.add_element(ElementKind::Barcode);
    state.save(&mut store).unwrap();
    assert!(path.exists());

    let id = state.template().id.clone();
    let reopened = JsonTemplateStore::open(&path).unwrap();
    let loaded = reopened.load_template(&id).unwrap();
    assert_eq!(loaded.elements(), state.template().elements());
    assert_eq!(reopened.library().count(), builtin_templates().len() + 1);

    let on_disk = TemplateFile::load_from_file(&path).unwrap();
    assert_eq!(on_disk.templates.len(), 1);
    assert!(on_disk.templates.iter().all(|t| !t.is_default));
}

#[test]
fn test_store_update_skips_write_on_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("templates.json");
    let mut store = JsonTemplateStore::open(&path).unwrap();
    assert!(store.update(|library| library.delete("builtin-standard")).is_err());
    assert!(!path.exists());
}

#[test]
fn test_load_label_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(
        &path,
        r#"{ "productName": "Fig Jam", "productName_ar": "مربى التين",
             "quantityValue": "2", "unitWeightValue": "100", "unitWeightUnit": "g" }"#,
    )
    .unwrap();

    let data = load_label_data(&path).unwrap();
    assert_eq!(data.product_name, "Fig Jam");
    assert_eq!(data.get(DataBindingKey::ProductNameAr), "مربى التين");
    assert_eq!(data.net_weight, "7.1 oz | 200g");

    let missing = load_label_data(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(missing, StoreError::Io { .. }));
    assert_eq!(LabelData::default().logo(), None);
}
