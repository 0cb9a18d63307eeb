//! Client-side page behaviors for the building management UI.
//!
//! This crate is compiled to WebAssembly and started once per page load. It
//! owns three small behaviors that the server-rendered templates rely on:
//! persisting the light/dark theme, highlighting the active nav link, and
//! submitting filter forms when a designated control changes.
//!
//! The behavior lives in plain Rust behind small traits, so everything except
//! the `dom` adapters runs and tests without a browser.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Theme preference parsing and the [`theme::ThemeController`] state machine |
//! | [`nav`] | Prefix-match highlighting of navigation anchors |
//! | [`autosubmit`] | Change handler that submits the enclosing form |
//! | [`page`] | The [`page::Page`] seam and listener registration for all three behaviors |
//! | [`memory`] | In-memory class lists, store, elements, and page |
//! | [`config`] | Page contract configuration, overridable from JSON |
//! | [`consts`] | Default storage key, marker classes, and selectors |
//! | [`error`] | Crate error type |
//! | `dom` | `web_sys` implementations of the seams (feature `browser`) |
//! | `app` | WebAssembly entry points (feature `browser`) |

pub mod autosubmit;
pub mod config;
pub mod consts;
pub mod error;
pub mod memory;
pub mod nav;
pub mod page;
mod selector;
pub mod theme;

#[cfg(feature = "browser")]
pub mod app;
#[cfg(feature = "browser")]
pub mod dom;

pub use error::{Error, Result};
