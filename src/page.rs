//! Registration phase: find elements on a page and attach listeners.
//!
//! DESIGN
//! ======
//! [`Page`] is the seam between element enumeration and the effects in
//! [`crate::theme`], [`crate::nav`] and [`crate::autosubmit`]. The browser
//! implements it over `window.document`, the tests over
//! [`crate::memory::MemoryPage`]. Listener bodies only call the effect
//! functions and log failures, so a broken handler never throws into the page.

use std::cell::Cell;

use crate::autosubmit::{self, AutoSubmitControl};
use crate::config::{AutoSubmitConfig, NavConfig};
use crate::error::Result;
use crate::nav::{self, NavLink};
use crate::theme::{ClassList, PreferenceStore, Theme, ThemeController};

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Event listener body. Owned by the page for its lifetime.
pub type Handler = Box<dyn FnMut()>;

/// The document the page behaviors are registered against.
pub trait Page {
    type Element: Clone + 'static;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Result<Vec<Self::Element>>;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Path component of the current location.
    fn current_path(&self) -> Result<String>;

    /// Run `handler` on every `event` fired at `target`.
    fn listen(&self, target: &Self::Element, event: &str, handler: Handler) -> Result<()>;
}

/// Open the page once per `started` flag.
///
/// Returns `Ok(None)` when already started. The flag is only set after `open`
/// succeeds, so a failed start can be retried.
pub fn start_once<T, F>(started: &Cell<bool>, open: F) -> Result<Option<T>>
where
    F: FnOnce() -> Result<T>,
{
    if started.get() {
        return Ok(None);
    }
    let page = open()?;
    started.set(true);
    Ok(Some(page))
}

/// Apply the stored theme, then bind the toggle control if the page has one.
pub fn init_theme<P, C, S>(page: &P, mut controller: ThemeController<C, S>) -> Result<Option<Theme>>
where
    P: Page,
    C: ClassList + 'static,
    S: PreferenceStore + 'static,
{
    let applied = controller.init()?;
    bind_theme_toggle(page, controller)?;
    Ok(applied)
}

/// Hand `controller` to a click listener on the toggle control.
///
/// Returns `false` when the page has no toggle control; that is not an error.
pub fn bind_theme_toggle<P, C, S>(page: &P, mut controller: ThemeController<C, S>) -> Result<bool>
where
    P: Page,
    C: ClassList + 'static,
    S: PreferenceStore + 'static,
{
    let toggle_id = controller.config().toggle_id.clone();
    let Some(button) = page.element_by_id(&toggle_id) else {
        log::debug!("no #{toggle_id} element, theme toggle not bound");
        return Ok(false);
    };
    page.listen(
        &button,
        "click",
        Box::new(move || {
            if let Err(err) = controller.toggle() {
                log::error!("theme toggle failed: {err}");
            }
        }),
    )?;
    Ok(true)
}

/// Mark nav anchors matching the current location.
pub fn highlight_nav<P>(page: &P, config: &NavConfig) -> Result<usize>
where
    P: Page,
    P::Element: NavLink,
{
    let here = page.current_path()?;
    let mut links = page.query_all(&config.link_selector)?;
    nav::highlight(&here, &mut links, config)
}

/// Bind `change` listeners on auto-submit controls. Returns how many were bound.
pub fn bind_auto_submit<P>(page: &P, config: &AutoSubmitConfig) -> Result<usize>
where
    P: Page,
    P::Element: AutoSubmitControl,
{
    let controls = page.query_all(&config.control_selector)?;
    for control in &controls {
        let target = control.clone();
        let form_selector = config.form_selector.clone();
        page.listen(
            control,
            "change",
            Box::new(move || {
                if let Err(err) = autosubmit::on_change(&target, &form_selector) {
                    log::error!("auto-submit failed: {err}");
                }
            }),
        )?;
    }
    log::debug!("bound {} auto-submit controls", controls.len());
    Ok(controls.len())
}
