//! Light/dark theme persistence and toggling.
//!
//! DESIGN
//! ======
//! The root element's class list and the preference store are injected as
//! [`ClassList`] and [`PreferenceStore`] so the state machine runs the same
//! against `document.body` + `localStorage` in the browser and against the
//! in-memory types in [`crate::memory`].
//!
//! Startup only ever *replaces* one marker with the other, so a page whose
//! markup carries neither marker is left alone. Toggling assigns both markers
//! unconditionally, which repairs markup that carries both or neither.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ThemeConfig;
use crate::error::Result;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Persisted theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than exactly `light` or `dark`
    /// counts as no preference.
    #[must_use]
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marker classes on a single element, with `DOMTokenList` semantics.
pub trait ClassList {
    fn contains(&self, class: &str) -> bool;

    /// Add `class`; adding a present class is a no-op.
    fn add(&mut self, class: &str) -> Result<()>;

    /// Remove `class`; removing an absent class is a no-op.
    fn remove(&mut self, class: &str) -> Result<()>;

    /// Replace `from` with `to`. Returns `false` and changes nothing when
    /// `from` is absent.
    fn replace(&mut self, from: &str, to: &str) -> Result<bool>;

    /// Force `class` on or off, like `classList.toggle(class, on)`.
    fn set(&mut self, class: &str, on: bool) -> Result<()> {
        if on { self.add(class) } else { self.remove(class) }
    }
}

/// Synchronous, durable string key-value store.
pub trait PreferenceStore {
    /// Stored value for `key`, `None` when unset.
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Keeps the root element's theme markers in sync with the stored preference.
pub struct ThemeController<C, S> {
    classes: C,
    store: S,
    config: ThemeConfig,
}

impl<C: ClassList, S: PreferenceStore> ThemeController<C, S> {
    pub fn new(classes: C, store: S, config: ThemeConfig) -> Self {
        Self { classes, store, config }
    }

    /// Apply the stored preference to the root markers.
    ///
    /// Returns the recognized preference, or `None` when nothing usable is
    /// stored and the initial markup stands.
    pub fn init(&mut self) -> Result<Option<Theme>> {
        let stored = self.store.get(&self.config.storage_key)?;
        let Some(theme) = stored.as_deref().and_then(Theme::from_stored) else {
            if let Some(raw) = stored {
                log::debug!("ignoring unrecognized theme preference {raw:?}");
            }
            return Ok(None);
        };
        self.apply(theme)?;
        Ok(Some(theme))
    }

    /// Swap the opposite marker for `theme`'s marker, if the opposite is present.
    pub fn apply(&mut self, theme: Theme) -> Result<()> {
        let (from, to) = match theme {
            Theme::Light => (&self.config.dark_class, &self.config.light_class),
            Theme::Dark => (&self.config.light_class, &self.config.dark_class),
        };
        if self.classes.replace(from, to)? {
            log::debug!("applied stored theme {theme}");
        }
        Ok(())
    }

    /// Flip the theme and persist the new preference.
    ///
    /// Markers are assigned before the store write, so a failed write still
    /// leaves the page showing the new theme.
    pub fn toggle(&mut self) -> Result<Theme> {
        let is_dark = self.classes.contains(&self.config.dark_class);
        self.classes.set(&self.config.dark_class, !is_dark)?;
        self.classes.set(&self.config.light_class, is_dark)?;

        let shown = if is_dark { Theme::Dark } else { Theme::Light };
        let next = shown.opposite();
        self.store.set(&self.config.storage_key, next.as_str())?;
        log::debug!("theme toggled to {next}");
        Ok(next)
    }

    /// Theme currently shown by the root markers.
    #[must_use]
    pub fn current(&self) -> Option<Theme> {
        if self.classes.contains(&self.config.dark_class) {
            Some(Theme::Dark)
        } else if self.classes.contains(&self.config.light_class) {
            Some(Theme::Light)
        } else {
            None
        }
    }

    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    #[must_use]
    pub fn classes(&self) -> &C {
        &self.classes
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
