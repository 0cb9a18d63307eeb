//! Browser adapters for the page, class list, storage, and form seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only module that touches `web_sys`. It implements [`Page`] over
//! `window.document` and the element-level seams directly on the `web_sys`
//! types, so the registration functions in [`crate::page`] run unchanged
//! against the real DOM.
//!
//! TRADE-OFFS
//! ==========
//! Listener closures are leaked with `Closure::forget` so they live as long as
//! the page. Pages are fully reloaded on navigation, so nothing accumulates.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, DomTokenList, Element, Event, HtmlFormElement, Storage, Window};

use crate::autosubmit::{AutoSubmitControl, SubmitForm};
use crate::config::ThemeConfig;
use crate::error::{Error, Result};
use crate::nav::NavLink;
use crate::page::{Handler, Page};
use crate::theme::{ClassList, PreferenceStore, ThemeController};

/// Theme controller wired to the live page.
pub type BrowserThemeController = ThemeController<DomClassList, LocalStore>;

/// Best-effort message for a thrown JS value.
fn js_reason(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

// =============================================================================
// CLASS LIST / STORAGE
// =============================================================================

/// `element.classList`.
pub struct DomClassList(DomTokenList);

impl DomClassList {
    #[must_use]
    pub fn of(element: &Element) -> Self {
        Self(element.class_list())
    }
}

impl ClassList for DomClassList {
    fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }

    fn add(&mut self, class: &str) -> Result<()> {
        self.0.add_1(class).map_err(|e| Error::ClassList { class: class.to_owned(), reason: js_reason(&e) })
    }

    fn remove(&mut self, class: &str) -> Result<()> {
        self.0.remove_1(class).map_err(|e| Error::ClassList { class: class.to_owned(), reason: js_reason(&e) })
    }

    fn replace(&mut self, from: &str, to: &str) -> Result<bool> {
        self.0.replace(from, to).map_err(|e| Error::ClassList { class: from.to_owned(), reason: js_reason(&e) })
    }

    fn set(&mut self, class: &str, on: bool) -> Result<()> {
        self.0
            .toggle_with_force(class, on)
            .map(|_| ())
            .map_err(|e| Error::ClassList { class: class.to_owned(), reason: js_reason(&e) })
    }
}

/// `window.localStorage`.
pub struct LocalStore(Storage);

impl LocalStore {
    pub fn open(window: &Window) -> Result<Self> {
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self(storage)),
            Ok(None) | Err(_) => Err(Error::StorageUnavailable),
        }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.0.get_item(key).map_err(|e| Error::StorageRead { key: key.to_owned(), reason: js_reason(&e) })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.0.set_item(key, value).map_err(|e| Error::StorageWrite { key: key.to_owned(), reason: js_reason(&e) })
    }
}

// =============================================================================
// ELEMENTS
// =============================================================================

impl NavLink for Element {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn add_class(&mut self, class: &str) -> Result<()> {
        DomClassList::of(self).add(class)
    }
}

impl SubmitForm for HtmlFormElement {
    fn submit(&self) -> Result<()> {
        HtmlFormElement::submit(self).map_err(|e| Error::Submit { reason: js_reason(&e) })
    }
}

impl AutoSubmitControl for Element {
    type Form = HtmlFormElement;

    fn closest_form(&self, selector: &str) -> Result<Option<HtmlFormElement>> {
        let found = self
            .closest(selector)
            .map_err(|e| Error::Selector { selector: selector.to_owned(), reason: js_reason(&e) })?;
        let Some(element) = found else {
            return Ok(None);
        };
        let Ok(form) = element.dyn_into::<HtmlFormElement>() else {
            return Ok(None);
        };
        Ok(Some(form))
    }
}

// =============================================================================
// PAGE
// =============================================================================

/// The live document of the current window.
pub struct BrowserPage {
    window: Window,
    document: Document,
}

impl BrowserPage {
    /// Resolve `window` and its `document`.
    pub fn current() -> Result<Self> {
        let window = web_sys::window().ok_or(Error::MissingWindow)?;
        let document = window.document().ok_or(Error::MissingDocument)?;
        Ok(Self { window, document })
    }

    /// Theme controller over `document.body` and `localStorage`.
    pub fn theme_controller(&self, config: &ThemeConfig) -> Result<BrowserThemeController> {
        let body = self.document.body().ok_or(Error::MissingRoot)?;
        let store = LocalStore::open(&self.window)?;
        Ok(ThemeController::new(DomClassList::of(&body), store, config.clone()))
    }
}

impl Page for BrowserPage {
    type Element = Element;

    fn query_all(&self, selector: &str) -> Result<Vec<Element>> {
        let list = self
            .document
            .query_selector_all(selector)
            .map_err(|e| Error::Selector { selector: selector.to_owned(), reason: js_reason(&e) })?;
        let mut elements = Vec::with_capacity(list.length() as usize);
        for i in 0..list.length() {
            let Some(node) = list.get(i) else {
                continue;
            };
            if let Ok(element) = node.dyn_into::<Element>() {
                elements.push(element);
            }
        }
        Ok(elements)
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn current_path(&self) -> Result<String> {
        self.window.location().pathname().map_err(|e| Error::Location { reason: js_reason(&e) })
    }

    fn listen(&self, target: &Element, event: &str, mut handler: Handler) -> Result<()> {
        let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| handler());
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref::<js_sys::Function>())
            .map_err(|e| Error::Listener { event: event.to_owned(), reason: js_reason(&e) })?;
        closure.forget();
        Ok(())
    }
}
