//! Fixed DOM and storage contract shared by the page templates and this crate.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "bms-theme";

/// Marker class on the root element while the dark theme is active.
pub const THEME_DARK_CLASS: &str = "theme-dark";

/// Marker class on the root element while the light theme is active.
pub const THEME_LIGHT_CLASS: &str = "theme-light";

/// Element id of the optional theme toggle button.
pub const THEME_TOGGLE_ID: &str = "themeToggle";

// ── Navigation ──────────────────────────────────────────────────

/// Anchors considered for active-link highlighting.
pub const NAV_LINK_SELECTOR: &str = ".nav a";

/// Attribute carrying an anchor's logical path. Falls back to `href`.
pub const NAV_PATH_ATTR: &str = "data-path";

/// Fallback attribute for an anchor's path.
pub const NAV_HREF_ATTR: &str = "href";

/// Marker class added to matching anchors.
pub const NAV_ACTIVE_CLASS: &str = "active";

// ── Auto-submit ─────────────────────────────────────────────────

/// Controls that submit their form on `change`, scoped to opted-in forms.
pub const AUTO_SUBMIT_SELECTOR: &str = "form[data-autosubmit] .js-auto-submit";

/// Selector used to find a control's enclosing form.
pub const FORM_SELECTOR: &str = "form";
