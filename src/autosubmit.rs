//! Submit-on-change for opted-in form controls.
//!
//! Registration (finding controls and attaching listeners) lives in
//! [`crate::page`]. This module holds the effect a listener runs.

use crate::error::Result;

#[cfg(test)]
#[path = "autosubmit_test.rs"]
mod autosubmit_test;

/// A form that can be submitted programmatically.
pub trait SubmitForm {
    /// Submit with standard form submission semantics (no `submit` event).
    fn submit(&self) -> Result<()>;
}

/// A control bound for auto-submit.
pub trait AutoSubmitControl {
    type Form: SubmitForm;

    /// Nearest ancestor (or self) matching `selector`.
    fn closest_form(&self, selector: &str) -> Result<Option<Self::Form>>;
}

/// Change handler: submit the control's enclosing form.
///
/// Returns `false` without error when the control has no enclosing form.
pub fn on_change<C: AutoSubmitControl>(control: &C, form_selector: &str) -> Result<bool> {
    let Some(form) = control.closest_form(form_selector)? else {
        log::debug!("auto-submit control has no enclosing form");
        return Ok(false);
    };
    form.submit()?;
    Ok(true)
}
