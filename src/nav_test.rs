use super::*;
use crate::memory::MemoryElement;

// =============================================================
// Helpers
// =============================================================

fn anchor(href: &str) -> MemoryElement {
    MemoryElement::new("a").with_attr("href", href)
}

fn links(paths: &[&str]) -> Vec<MemoryElement> {
    paths.iter().map(|p| anchor(p)).collect()
}

fn active(links: &[MemoryElement]) -> Vec<bool> {
    links.iter().map(|l| l.has_class("active")).collect()
}

// =============================================================
// link_path
// =============================================================

#[test]
fn link_path_prefers_data_path() {
    let link = anchor("/users/?page=2").with_attr("data-path", "/users");
    assert_eq!(link_path(&link, "data-path").as_deref(), Some("/users"));
}

#[test]
fn link_path_falls_back_to_href() {
    let link = anchor("/parking");
    assert_eq!(link_path(&link, "data-path").as_deref(), Some("/parking"));
}

#[test]
fn link_path_empty_data_path_falls_back_to_href() {
    let link = anchor("/flats").with_attr("data-path", "");
    assert_eq!(link_path(&link, "data-path").as_deref(), Some("/flats"));
}

#[test]
fn link_path_none_without_usable_attributes() {
    assert_eq!(link_path(&MemoryElement::new("a"), "data-path"), None);
    assert_eq!(link_path(&anchor(""), "data-path"), None);
}

// =============================================================
// is_active
// =============================================================

#[test]
fn is_active_is_plain_prefix() {
    assert!(is_active("/users/42", "/users"));
    assert!(is_active("/users", "/users"));
    assert!(is_active("/billing", "/"));
    assert!(is_active("/billing", "/bill"));
    assert!(!is_active("/billing", "/users"));
    assert!(!is_active("/users", "/users/42"));
}

// =============================================================
// highlight
// =============================================================

#[test]
fn highlight_marks_every_matching_ancestor() {
    let mut l = links(&["/", "/users", "/users/settings"]);
    let marked = highlight("/users/settings/profile", &mut l, &NavConfig::default()).unwrap();
    assert_eq!(marked, 3);
    assert_eq!(active(&l), [true, true, true]);
}

#[test]
fn highlight_root_link_matches_any_path() {
    let mut l = links(&["/"]);
    assert_eq!(highlight("/billing", &mut l, &NavConfig::default()).unwrap(), 1);
    assert_eq!(active(&l), [true]);
}

#[test]
fn highlight_skips_non_matching_links() {
    let mut l = links(&["/", "/people/", "/parking/", "/providers/"]);
    assert_eq!(highlight("/parking/slots/", &mut l, &NavConfig::default()).unwrap(), 2);
    assert_eq!(active(&l), [true, false, true, false]);
}

#[test]
fn highlight_is_not_segment_aware() {
    let mut l = links(&["/bill", "/billing/archive"]);
    highlight("/billing", &mut l, &NavConfig::default()).unwrap();
    assert_eq!(active(&l), [true, false]);
}

#[test]
fn highlight_skips_links_without_path() {
    let mut l = vec![MemoryElement::new("a"), anchor("/flats")];
    assert_eq!(highlight("/flats/3", &mut l, &NavConfig::default()).unwrap(), 1);
    assert_eq!(active(&l), [false, true]);
}

#[test]
fn highlight_uses_data_path_over_href() {
    let mut l = vec![anchor("/people/?sort=name").with_attr("data-path", "/people")];
    highlight("/people/12", &mut l, &NavConfig::default()).unwrap();
    assert_eq!(active(&l), [true]);
}

#[test]
fn highlight_twice_is_idempotent() {
    let mut l = links(&["/users"]);
    highlight("/users/1", &mut l, &NavConfig::default()).unwrap();
    highlight("/users/1", &mut l, &NavConfig::default()).unwrap();
    assert_eq!(l[0].class_value(), "active");
}

#[test]
fn highlight_with_no_links_marks_nothing() {
    let mut l: Vec<MemoryElement> = Vec::new();
    assert_eq!(highlight("/", &mut l, &NavConfig::default()).unwrap(), 0);
}

#[test]
fn highlight_honors_configured_attribute_and_class() {
    let config = NavConfig { link_selector: ".menu a".into(), path_attr: "data-route".into(), active_class: "current".into() };
    let mut l = vec![anchor("/x").with_attr("data-route", "/reports")];
    highlight("/reports/q3", &mut l, &config).unwrap();
    assert!(l[0].has_class("current"));
    assert!(!l[0].has_class("active"));
}

#[test]
fn highlight_propagates_class_errors() {
    let config = NavConfig { active_class: "is active".into(), ..NavConfig::default() };
    let mut l = links(&["/"]);
    let err = highlight("/", &mut l, &config).unwrap_err();
    assert!(matches!(err, crate::error::Error::ClassList { .. }));
}
