//! In-memory implementations of the DOM and storage seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by non-browser hosts and by the unit tests. Behavior follows the
//! browser objects they stand in for: class lists split on ASCII whitespace,
//! keep insertion order and ignore duplicates; `replace` only acts when the
//! source class is present; selectors support the descendant subset the page
//! contract uses.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::autosubmit::{AutoSubmitControl, SubmitForm};
use crate::error::{Error, Result};
use crate::nav::NavLink;
use crate::page::{Handler, Page};
use crate::selector::Selector;
use crate::theme::{ClassList, PreferenceStore};

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

// =============================================================================
// CLASS LIST
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClassList {
    classes: Vec<String>,
}

impl MemoryClassList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from whitespace-separated markup, like a `class` attribute.
    #[must_use]
    pub fn parse(attr: &str) -> Self {
        let mut list = Self::new();
        for token in attr.split_ascii_whitespace() {
            if !list.contains(token) {
                list.classes.push(token.to_owned());
            }
        }
        list
    }

    /// Serialize back to `class` attribute form.
    #[must_use]
    pub fn value(&self) -> String {
        self.classes.join(" ")
    }
}

fn check_token(class: &str) -> Result<()> {
    if class.is_empty() || class.chars().any(|c| c.is_ascii_whitespace()) {
        return Err(Error::ClassList { class: class.to_owned(), reason: "invalid token".into() });
    }
    Ok(())
}

impl ClassList for MemoryClassList {
    fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn add(&mut self, class: &str) -> Result<()> {
        check_token(class)?;
        if !self.contains(class) {
            self.classes.push(class.to_owned());
        }
        Ok(())
    }

    fn remove(&mut self, class: &str) -> Result<()> {
        check_token(class)?;
        self.classes.retain(|c| c != class);
        Ok(())
    }

    fn replace(&mut self, from: &str, to: &str) -> Result<bool> {
        check_token(from)?;
        check_token(to)?;
        let Some(idx) = self.classes.iter().position(|c| c == from) else {
            return Ok(false);
        };
        if self.contains(to) {
            self.classes.remove(idx);
        } else {
            to.clone_into(&mut self.classes[idx]);
        }
        Ok(true)
    }
}

// =============================================================================
// PREFERENCE STORE
// =============================================================================

/// Key-value store whose clones share entries, like every script on one
/// origin sharing `localStorage`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.peek(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// =============================================================================
// ELEMENT
// =============================================================================

struct Listener {
    event: String,
    handler: Handler,
}

struct Node {
    tag: String,
    parent: Option<MemoryElement>,
    attributes: RefCell<HashMap<String, String>>,
    classes: RefCell<MemoryClassList>,
    listeners: RefCell<Vec<Listener>>,
    submissions: Cell<usize>,
}

/// A DOM element stand-in. Clones are handles to the same element.
#[derive(Clone)]
pub struct MemoryElement(Rc<Node>);

impl MemoryElement {
    /// A detached element with no parent.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self::build(tag, None)
    }

    /// An element nested inside `parent`.
    #[must_use]
    pub fn child(parent: &MemoryElement, tag: &str) -> Self {
        Self::build(tag, Some(parent.clone()))
    }

    fn build(tag: &str, parent: Option<MemoryElement>) -> Self {
        Self(Rc::new(Node {
            tag: tag.to_ascii_lowercase(),
            parent,
            attributes: RefCell::new(HashMap::new()),
            classes: RefCell::new(MemoryClassList::new()),
            listeners: RefCell::new(Vec::new()),
            submissions: Cell::new(0),
        }))
    }

    #[must_use]
    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.0.attributes.borrow_mut().insert(name.to_owned(), value.to_owned());
        self
    }

    /// Set the class list from `class` attribute markup.
    #[must_use]
    pub fn with_classes(self, markup: &str) -> Self {
        *self.0.classes.borrow_mut() = MemoryClassList::parse(markup);
        self
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.0.tag
    }

    #[must_use]
    pub fn parent(&self) -> Option<MemoryElement> {
        self.0.parent.clone()
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.0.attributes.borrow().get(name).cloned()
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.0.classes.borrow().contains(class)
    }

    /// Current `class` attribute value.
    #[must_use]
    pub fn class_value(&self) -> String {
        self.0.classes.borrow().value()
    }

    /// Nearest element, starting with this one, matching `selector`.
    pub fn closest(&self, selector: &str) -> Result<Option<MemoryElement>> {
        let selector = Selector::parse(selector)?;
        let mut cursor = Some(self.clone());
        while let Some(element) = cursor {
            if selector.matches(&element) {
                return Ok(Some(element));
            }
            cursor = element.parent();
        }
        Ok(None)
    }

    #[must_use]
    pub fn listener_count(&self, event: &str) -> usize {
        self.0.listeners.borrow().iter().filter(|l| l.event == event).count()
    }

    /// Fire `event` at this element. Returns how many handlers ran.
    pub fn dispatch(&self, event: &str) -> usize {
        let mut ran = 0;
        for listener in self.0.listeners.borrow_mut().iter_mut().filter(|l| l.event == event) {
            (listener.handler)();
            ran += 1;
        }
        ran
    }

    /// Times this element was submitted as a form.
    #[must_use]
    pub fn submissions(&self) -> usize {
        self.0.submissions.get()
    }

    #[must_use]
    pub fn same_element(&self, other: &MemoryElement) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryElement")
            .field("tag", &self.0.tag)
            .field("class", &self.class_value())
            .field("attributes", &self.0.attributes.borrow())
            .finish_non_exhaustive()
    }
}

impl ClassList for MemoryElement {
    fn contains(&self, class: &str) -> bool {
        self.has_class(class)
    }

    fn add(&mut self, class: &str) -> Result<()> {
        self.0.classes.borrow_mut().add(class)
    }

    fn remove(&mut self, class: &str) -> Result<()> {
        self.0.classes.borrow_mut().remove(class)
    }

    fn replace(&mut self, from: &str, to: &str) -> Result<bool> {
        self.0.classes.borrow_mut().replace(from, to)
    }
}

impl NavLink for MemoryElement {
    fn attribute(&self, name: &str) -> Option<String> {
        MemoryElement::attribute(self, name)
    }

    fn add_class(&mut self, class: &str) -> Result<()> {
        self.add(class)
    }
}

impl SubmitForm for MemoryElement {
    fn submit(&self) -> Result<()> {
        self.0.submissions.set(self.0.submissions.get() + 1);
        Ok(())
    }
}

impl AutoSubmitControl for MemoryElement {
    type Form = MemoryElement;

    fn closest_form(&self, selector: &str) -> Result<Option<MemoryElement>> {
        self.closest(selector)
    }
}

// =============================================================================
// PAGE
// =============================================================================

/// A document made of [`MemoryElement`]s in insertion order.
#[derive(Debug, Default)]
pub struct MemoryPage {
    path: String,
    elements: Vec<MemoryElement>,
}

impl MemoryPage {
    #[must_use]
    pub fn new(path: &str) -> Self {
        Self { path: path.to_owned(), elements: Vec::new() }
    }

    /// Append `element` to the document and hand it back.
    pub fn add(&mut self, element: MemoryElement) -> MemoryElement {
        self.elements.push(element.clone());
        element
    }
}

impl Page for MemoryPage {
    type Element = MemoryElement;

    fn query_all(&self, selector: &str) -> Result<Vec<MemoryElement>> {
        let selector = Selector::parse(selector)?;
        Ok(self.elements.iter().filter(|e| selector.matches(e)).cloned().collect())
    }

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.elements.iter().find(|e| e.attribute("id").as_deref() == Some(id)).cloned()
    }

    fn current_path(&self) -> Result<String> {
        Ok(self.path.clone())
    }

    fn listen(&self, target: &MemoryElement, event: &str, handler: Handler) -> Result<()> {
        target.0.listeners.borrow_mut().push(Listener { event: event.to_owned(), handler });
        Ok(())
    }
}
