//! Page contract configuration.
//!
//! Defaults mirror [`crate::consts`]. A host page may override any subset of
//! fields by passing a JSON object to `start_with_config`; omitted fields keep
//! their defaults.

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::error::Result;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: ThemeConfig,
    pub nav: NavConfig,
    pub auto_submit: AutoSubmitConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub dark_class: String,
    pub light_class: String,
    pub toggle_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub link_selector: String,
    pub path_attr: String,
    pub active_class: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoSubmitConfig {
    pub control_selector: String,
    pub form_selector: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: consts::THEME_STORAGE_KEY.to_owned(),
            dark_class: consts::THEME_DARK_CLASS.to_owned(),
            light_class: consts::THEME_LIGHT_CLASS.to_owned(),
            toggle_id: consts::THEME_TOGGLE_ID.to_owned(),
        }
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            link_selector: consts::NAV_LINK_SELECTOR.to_owned(),
            path_attr: consts::NAV_PATH_ATTR.to_owned(),
            active_class: consts::NAV_ACTIVE_CLASS.to_owned(),
        }
    }
}

impl Default for AutoSubmitConfig {
    fn default() -> Self {
        Self {
            control_selector: consts::AUTO_SUBMIT_SELECTOR.to_owned(),
            form_selector: consts::FORM_SELECTOR.to_owned(),
        }
    }
}

impl UiConfig {
    /// Parse a (possibly partial) JSON config. Blank input yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}
