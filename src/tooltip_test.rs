use super::*;
use crate::testing::FakeElement;

#[test]
fn attaches_one_widget_per_element() {
    let triggers = [
        FakeElement::with_classes(&["btn"]),
        FakeElement::with_classes(&["badge"]),
        FakeElement::default(),
    ];
    let mut built = Vec::new();

    let count = attach_all(triggers.iter(), |el| built.push(el.classes()));

    assert_eq!(count, 3);
    assert_eq!(built, vec![vec!["btn".to_owned()], vec!["badge".to_owned()], vec![]]);
}

#[test]
fn no_triggers_builds_nothing() {
    let mut calls = 0;
    let count = attach_all(std::iter::empty::<FakeElement>(), |_| calls += 1);
    assert_eq!(count, 0);
    assert_eq!(calls, 0);
}
