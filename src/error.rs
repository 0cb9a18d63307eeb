//! Error type for browser access and configuration failures.
//!
//! Missing optional elements (toggle button, nav anchors, auto-submit
//! controls) are never errors. These variants cover the cases where the host
//! environment itself misbehaves.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `window.localStorage` is missing or access to it threw.
    #[error("local storage is unavailable")]
    StorageUnavailable,
    /// `getItem` threw.
    #[error("failed to read `{key}` from storage: {reason}")]
    StorageRead { key: String, reason: String },
    /// `setItem` threw, typically on quota or disabled storage.
    #[error("failed to write `{key}` to storage: {reason}")]
    StorageWrite { key: String, reason: String },
    #[error("no global window")]
    MissingWindow,
    #[error("no document attached to the window")]
    MissingDocument,
    /// No `document.body` to carry the theme markers.
    #[error("document has no root element")]
    MissingRoot,
    /// A class-list update was rejected, usually an empty or spaced token.
    #[error("failed to update class `{class}`: {reason}")]
    ClassList { class: String, reason: String },
    #[error("form submission failed: {reason}")]
    Submit { reason: String },
    #[error("failed to read location: {reason}")]
    Location { reason: String },
    #[error("failed to attach `{event}` listener: {reason}")]
    Listener { event: String, reason: String },
    /// A selector could not be parsed.
    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },
    /// Config JSON was malformed or had the wrong shape.
    #[error("invalid ui config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
