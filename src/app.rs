//! WebAssembly entry points.
//!
//! Module instantiation installs the panic hook and console logger. The page
//! then calls `start()` (or `start_with_config(json)`) once the DOM is ready.
//! Each behavior runs as its own unit: a failure is logged and the remaining
//! behaviors still run.

use std::cell::{Cell, RefCell};

use wasm_bindgen::prelude::*;

use crate::config::UiConfig;
use crate::dom::BrowserPage;
use crate::page;

thread_local! {
    static STARTED: Cell<bool> = const { Cell::new(false) };
    static CONFIG: RefCell<UiConfig> = RefCell::new(UiConfig::default());
}

#[wasm_bindgen(start)]
pub fn boot() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        log::warn!("console logger already installed");
    }
}

/// Run all page behaviors with the default page contract.
#[wasm_bindgen]
pub fn start() {
    run(UiConfig::default());
}

/// Run all page behaviors with a JSON override of the page contract.
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(json: &str) -> Result<(), JsError> {
    run(UiConfig::from_json(json)?);
    Ok(())
}

/// Flip the theme as if the toggle button had been clicked. Returns the new
/// theme name.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> Result<String, JsError> {
    let config = CONFIG.with(|c| c.borrow().theme.clone());
    let mut controller = BrowserPage::current()?.theme_controller(&config)?;
    Ok(controller.toggle()?.to_string())
}

/// Theme currently shown on the page, if any marker is present.
#[wasm_bindgen(js_name = currentTheme)]
pub fn current_theme() -> Result<Option<String>, JsError> {
    let config = CONFIG.with(|c| c.borrow().theme.clone());
    let controller = BrowserPage::current()?.theme_controller(&config)?;
    Ok(controller.current().map(|t| t.to_string()))
}

fn run(config: UiConfig) {
    let page = match STARTED.with(|started| page::start_once(started, BrowserPage::current)) {
        Ok(Some(page)) => page,
        Ok(None) => {
            log::warn!("page behaviors already started, ignoring repeated start");
            return;
        }
        Err(err) => {
            log::error!("cannot start page behaviors: {err}");
            return;
        }
    };

    match page.theme_controller(&config.theme).and_then(|controller| page::init_theme(&page, controller)) {
        Ok(Some(theme)) => log::debug!("stored theme preference: {theme}"),
        Ok(None) => {}
        Err(err) => log::error!("theme init failed: {err}"),
    }
    if let Err(err) = page::highlight_nav(&page, &config.nav) {
        log::error!("nav highlight failed: {err}");
    }
    if let Err(err) = page::bind_auto_submit(&page, &config.auto_submit) {
        log::error!("auto-submit binding failed: {err}");
    }

    CONFIG.with(|c| *c.borrow_mut() = config);
}
