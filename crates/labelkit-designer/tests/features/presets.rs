use labelkit_designer::model::{
    expiry_date, net_weight, seed_presets, set_production_date, ElementKind, LabelData,
    LayoutElement, TextProps,
};
use labelkit_designer::{DataBindingKey, DesignerState, LabelTemplate};

#[test]
fn test_net_weight_derivation() {
    assert_eq!(net_weight("6", "33.3", "g"), "7.0 oz | 200g");
    assert_eq!(net_weight("2", "8", "oz"), "16.0 oz | 454g");
    assert_eq!(net_weight("0", "100", "g"), "");
    assert_eq!(net_weight("abc", "100", "g"), "");
    assert_eq!(net_weight("1", "-5", "g"), "");
}

#[test]
fn test_setting_quantity_refreshes_net_weight() {
    let mut data = LabelData::seed("2024-06-01");
    data.set(DataBindingKey::UnitWeightValue, "250");
    assert_eq!(data.net_weight, "");
    data.set(DataBindingKey::QuantityValue, "2");
    assert_eq!(data.net_weight, "17.6 oz | 500g");
}

#[test]
fn test_preset_session_dates() {
    let presets = seed_presets();
    let jam = presets.iter().find(|p| p.id == "preset-3").unwrap();
    let mut data = LabelData::seed("2024-01-01");
    jam.apply_to(&mut data);
    assert_eq!(data.expiry_date, expiry_date("2024-01-01", 365));
    assert_eq!(data.expiry_date, "2024-12-31");

    set_production_date(&mut data, "", Some(jam));
    assert_eq!(data.expiry_date, "");
}

#[test]
fn test_designer_preview_switches_presets() {
    let element =
        LayoutElement::new(ElementKind::Text).with_text(TextProps::bound(DataBindingKey::Sku));
    let mut state = DesignerState::new(
        LabelTemplate::default().with_element(element),
        Default::default(),
    );
    state.set_presets(seed_presets());
    state.set_preview_base(LabelData::seed("2024-01-01"));

    for (id, sku) in [("preset-1", "CK-006"), ("preset-2", "SD-680"), ("preset-3", "SJ-227")] {
        assert!(state.set_preview_preset(Some(id)));
        assert_eq!(state.scene().texts().next(), Some(sku));
        assert_eq!(state.preview_data().unwrap().production_date, "2024-01-01");
    }

    assert!(!state.set_preview_preset(None));
    assert_eq!(state.scene().texts().next(), Some("{sku}"));
    assert!(!state.can_undo());
}
