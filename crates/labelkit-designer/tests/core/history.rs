use labelkit_designer::history::{DispatchMode, History};
use proptest::prelude::*;

#[test]
fn test_boundaries_are_noops() {
    let mut history = History::new(0u32, 10);
    assert!(!history.undo());
    assert!(!history.redo());
    assert_eq!(*history.state(), 0);
    assert_eq!(history.len(), 1);
}

#[test]
fn test_commit_after_undo_drops_redo_tail() {
    let mut history = History::new(0u32, 10);
    history.commit(1);
    history.commit(2);
    assert!(history.undo());
    history.commit(3);
    assert!(!history.can_redo());
    assert_eq!(history.len(), 3);
    assert!(history.undo());
    assert_eq!(*history.state(), 1);
}

#[test]
fn test_depth_limit_drops_oldest() {
    let mut history = History::new(0u32, 3);
    for v in 1..=5 {
        history.commit(v);
    }
    assert_eq!(history.len(), 3);
    while history.undo() {}
    assert_eq!(*history.state(), 3);
}

proptest! {
    #[test]
    fn prop_undo_all_restores_start(values in prop::collection::vec(any::<u32>(), 1..40)) {
        let mut history = History::new(vec![0u32], 64);
        let mut doc = vec![0u32];
        for v in &values {
            doc.push(*v);
            history.commit(doc.clone());
        }
        let end = history.state().clone();

        for _ in &values {
            prop_assert!(history.undo());
        }
        prop_assert_eq!(history.state(), &vec![0u32]);
        prop_assert!(!history.can_undo());

        for _ in &values {
            prop_assert!(history.redo());
        }
        prop_assert_eq!(history.state(), &end);
    }

    #[test]
    fn prop_replace_never_grows(frames in prop::collection::vec(any::<i32>(), 1..100)) {
        let mut history = History::new(0i32, 16);
        history.commit(1);
        let len = history.len();

        for f in &frames {
            history.dispatch(*f, DispatchMode::Replace);
            prop_assert_eq!(history.len(), len);
        }
        history.dispatch(7, DispatchMode::Commit);
        prop_assert_eq!(history.len(), len + 1);
        prop_assert!(history.undo());
        prop_assert_eq!(*history.state(), *frames.last().unwrap());
    }
}
