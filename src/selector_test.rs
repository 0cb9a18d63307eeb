use super::*;

fn matches(selector: &str, element: &MemoryElement) -> bool {
    Selector::parse(selector).unwrap().matches(element)
}

#[test]
fn compound_parts_all_must_match() {
    let form = MemoryElement::new("FORM").with_attr("data-autosubmit", "").with_attr("id", "filters");
    assert!(matches("form", &form));
    assert!(matches("form[data-autosubmit]", &form));
    assert!(matches("#filters", &form));
    assert!(matches("form#filters[data-autosubmit]", &form));
    assert!(matches("*", &form));
    assert!(!matches("form[data-other]", &form));
    assert!(!matches("div", &form));
}

#[test]
fn class_parts_require_every_class() {
    let select = MemoryElement::new("select").with_classes("js-auto-submit wide");
    assert!(matches(".js-auto-submit", &select));
    assert!(matches("select.js-auto-submit.wide", &select));
    assert!(!matches(".js-auto-submit.narrow", &select));
}

#[test]
fn descendant_chain_walks_ancestors() {
    let form = MemoryElement::new("form").with_attr("data-autosubmit", "");
    let row = MemoryElement::child(&form, "div").with_classes("row");
    let select = MemoryElement::child(&row, "select").with_classes("js-auto-submit");

    assert!(matches("form[data-autosubmit] .js-auto-submit", &select));
    assert!(matches("form .row select", &select));
    assert!(!matches(".row form select", &select));
    assert!(!matches("form[data-autosubmit] .js-auto-submit", &row));
}

#[test]
fn descendant_requires_strict_ancestor() {
    let select = MemoryElement::new("select").with_classes("js-auto-submit");
    assert!(!matches("select .js-auto-submit", &select));
}

#[test]
fn unsupported_syntax_is_rejected() {
    for raw in ["", "   ", "form > select", "a:hover", "[data-x=1]", "form[data", "a, b", ".", "#"] {
        let err = Selector::parse(raw).unwrap_err();
        assert!(matches!(err, Error::Selector { .. }), "{raw:?}");
    }
}
