//! Submit button busy state.
//!
//! On submit the button is disabled and relabelled so a slow server response
//! cannot be double-submitted. If the page has not navigated away after
//! [`SUBMIT_FAILSAFE_MS`] the button is restored.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

pub const SUBMIT_FAILSAFE_MS: u32 = 10_000;

/// Markup shown inside the submit button while the form is in flight.
pub const PROCESSING_LABEL_HTML: &str = r#"<i class="fas fa-spinner fa-spin"></i> Processing..."#;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitGuard {
    original_label: Option<String>,
}

impl SubmitGuard {
    /// Enter the busy state, remembering `current_label`.
    ///
    /// Returns `false` when the button is already disabled, in which case
    /// nothing should change. A button the page re-enabled mid-flight can be
    /// submitted again; the guard then remembers the label it shows now.
    pub fn begin(&mut self, current_label: &str, already_disabled: bool) -> bool {
        if already_disabled {
            return false;
        }
        self.original_label = Some(current_label.to_owned());
        true
    }

    /// Leave the busy state. Returns the label to put back, if busy.
    pub fn release(&mut self) -> Option<String> {
        self.original_label.take()
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.original_label.is_some()
    }
}
