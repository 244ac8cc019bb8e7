use labelkit_designer::model::{
    ElementKind, LabelTemplate, LayoutElement, ReorderDirection, TextSource,
};
use labelkit_designer::DataBindingKey;
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = ElementKind> {
    prop::sample::select(ElementKind::ALL.to_vec())
}

#[test]
fn test_new_template_defaults() {
    let template = LabelTemplate::default();
    assert_eq!(template.name, "New Template");
    assert_eq!((template.width_mm, template.height_mm), (100.0, 50.0));
    assert!(template.is_empty());
    assert!(!template.is_default);
}

#[test]
fn test_text_source_is_exclusive() {
    let mut template = LabelTemplate::default();
    let id = template.add_element(ElementKind::Text);
    template.update_element(&id, |e| {
        if let Some(text) = e.text_mut() {
            text.source = TextSource::Bound(DataBindingKey::Sku);
        }
    });
    let text = template.element(&id).unwrap().text().unwrap();
    assert_eq!(text.source.binding(), Some(DataBindingKey::Sku));
}

#[test]
fn test_update_cannot_change_id() {
    let mut template = LabelTemplate::default();
    let id = template.add_element(ElementKind::Logo);
    assert!(template.update_element(&id, |e| {
        e.id = "other".into();
        e.x = 42.0;
    }));
    assert_eq!(template.element(&id).unwrap().x, 42.0);
}

#[test]
fn test_reorder_at_ends_is_noop() {
    let mut template = LabelTemplate::default();
    let bottom = template.add_element(ElementKind::Text);
    let top = template.add_element(ElementKind::Line);
    assert!(!template.reorder(&top, ReorderDirection::Front));
    assert!(!template.reorder(&bottom, ReorderDirection::Backward));
    assert!(template.reorder(&bottom, ReorderDirection::Forward));
    assert!(template.is_above(&bottom, &top));
}

proptest! {
    #[test]
    fn prop_duplicate_keeps_every_field_but_id_and_position(
        kind in kind_strategy(),
        x in -20.0f64..120.0,
        y in -20.0f64..120.0,
        w in 0.5f64..100.0,
        h in 0.5f64..100.0,
        rotation in -720.0f64..720.0,
    ) {
        let mut template = LabelTemplate::default();
        let mut element = LayoutElement::new(kind).at(x, y, w, h);
        element.rotation = rotation;
        let id = template.push_element(element);

        let copy_id = template.duplicate_element(&id, 2.0).unwrap();
        prop_assert_ne!(&copy_id, &id);

        let original = template.element(&id).unwrap().clone();
        let copy = template.element(&copy_id).unwrap();
        prop_assert_eq!(copy.x, original.x + 2.0);
        prop_assert_eq!(copy.y, original.y + 2.0);
        prop_assert_eq!(
            LayoutElement { id: original.id.clone(), x: original.x, y: original.y, ..copy.clone() },
            original
        );
        prop_assert_eq!(template.z_index_of(&copy_id), Some(1));
    }

    #[test]
    fn prop_front_and_back_are_extremes(count in 2usize..10, pick in 0usize..10) {
        let mut template = LabelTemplate::default();
        let ids: Vec<_> = (0..count).map(|_| template.add_element(ElementKind::Text)).collect();
        let id = &ids[pick % count];

        template.reorder(id, ReorderDirection::Front);
        for other in ids.iter().filter(|o| *o != id) {
            prop_assert!(template.z_index_of(id) > template.z_index_of(other));
        }

        template.reorder(id, ReorderDirection::Back);
        for other in ids.iter().filter(|o| *o != id) {
            prop_assert!(template.z_index_of(id) < template.z_index_of(other));
        }
        prop_assert_eq!(template.len(), count);
    }
}
