use super::*;
use crate::error::Error;
use crate::memory::MemoryElement;

struct RejectingForm;

impl SubmitForm for RejectingForm {
    fn submit(&self) -> Result<()> {
        Err(Error::Submit { reason: "form is detached".into() })
    }
}

struct RejectingControl;

impl AutoSubmitControl for RejectingControl {
    type Form = RejectingForm;

    fn closest_form(&self, _selector: &str) -> Result<Option<RejectingForm>> {
        Ok(Some(RejectingForm))
    }
}

#[test]
fn change_submits_enclosing_form_once() {
    let form = MemoryElement::new("form");
    let control = MemoryElement::child(&form, "select");
    assert!(on_change(&control, "form").unwrap());
    assert_eq!(form.submissions(), 1);
}

#[test]
fn each_change_submits_again() {
    let form = MemoryElement::new("form");
    let control = MemoryElement::child(&form, "select");
    for _ in 0..3 {
        on_change(&control, "form").unwrap();
    }
    assert_eq!(form.submissions(), 3);
}

#[test]
fn change_only_submits_own_form() {
    let mine = MemoryElement::new("form");
    let other = MemoryElement::new("form");
    on_change(&MemoryElement::child(&mine, "select"), "form").unwrap();
    assert_eq!(mine.submissions(), 1);
    assert_eq!(other.submissions(), 0);
}

#[test]
fn nested_control_submits_nearest_form() {
    let outer = MemoryElement::new("form");
    let inner = MemoryElement::child(&outer, "form");
    let row = MemoryElement::child(&inner, "div");
    let control = MemoryElement::child(&row, "input");
    on_change(&control, "form").unwrap();
    assert_eq!(inner.submissions(), 1);
    assert_eq!(outer.submissions(), 0);
}

#[test]
fn control_without_enclosing_form_is_silent_noop() {
    let section = MemoryElement::new("section");
    let control = MemoryElement::child(&section, "select");
    assert!(!on_change(&control, "form").unwrap());
    assert!(!on_change(&MemoryElement::new("select"), "form").unwrap());
    assert_eq!(section.submissions(), 0);
}

#[test]
fn submit_failure_propagates() {
    let err = on_change(&RejectingControl, "form").unwrap_err();
    assert!(matches!(err, Error::Submit { .. }));
}
