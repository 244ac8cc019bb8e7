use labelkit_core::{Error, TemplateError};
use labelkit_designer::model::{ElementKind, LabelTemplate};
use labelkit_designer::templates::{TemplateLibrary, TemplateStore, COPY_SUFFIX};
use labelkit_designer::DesignerState;

#[test]
fn test_builtins_are_protected() {
    let mut library = TemplateLibrary::new();
    let builtin = library.list()[0].clone();
    assert!(builtin.is_default);

    let err = library.delete(&builtin.id).unwrap_err();
    assert!(matches!(
        err,
        Error::Template(TemplateError::BuiltIn { action: "deleted", .. })
    ));
    assert!(library.rename(&builtin.id, "Mine").is_err());
    assert!(library.save(builtin.clone()).is_err());
    assert_eq!(library.get(&builtin.id), Some(&builtin));
}

#[test]
fn test_clone_builtin_then_edit() {
    let mut library = TemplateLibrary::new();
    let builtin_id = library.list()[0].id.clone();
    let copy_id = library.clone_template(&builtin_id).unwrap();

    let copy = library.load_template(&copy_id).unwrap();
    assert!(!copy.is_default);
    assert!(copy.name.ends_with(COPY_SUFFIX));
    assert_eq!(copy.elements().len(), library.get(&builtin_id).unwrap().elements().len());

    let mut state = DesignerState::new(copy, Default::default());
    state.add_element(ElementKind::Qrcode);
    state.rename_template("Bakery Box");
    state.save(&mut library).unwrap();

    let saved = library.get(&copy_id).unwrap();
    assert_eq!(saved.name, "Bakery Box");
    assert!(saved.last_modified.is_some());
    assert_eq!(library.find_by_name("bakery box").map(|t| &t.id), Some(&copy_id));
    assert_eq!(library.delete(&copy_id).unwrap().name, "Bakery Box");
}

#[test]
fn test_invalid_size_is_rejected() {
    let mut library = TemplateLibrary::empty();
    let err = library.save(LabelTemplate::new("Bad", 0.0, 50.0)).unwrap_err();
    assert!(matches!(err, Error::Template(TemplateError::InvalidSize { .. })));
    assert_eq!(library.count(), 0);
}

#[test]
fn test_unknown_id() {
    let mut library = TemplateLibrary::new();
    assert!(matches!(
        library.delete("missing"),
        Err(Error::Template(TemplateError::NotFound { .. }))
    ));
    assert!(library.load_template("missing").is_err());
}
