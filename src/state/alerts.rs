//! Flash alert kinds and dismissal lifecycle.
//!
//! An alert is visible until its close button is clicked or the auto-dismiss
//! timer fires, then fades out for [`FADE_OUT_MS`] before it is removed.
//! Both triggers can race; only the first one starts the fade.

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

use serde::{Deserialize, Serialize};

/// Time an alert stays up before dismissing itself.
pub const AUTO_DISMISS_MS: u32 = 5_000;

/// Fade-out duration between dismissal and removal.
pub const FADE_OUT_MS: u32 = 300;

/// Inline style applied while an alert fades out.
pub const LEAVING_OPACITY: &str = "0";
pub const LEAVING_TRANSFORM: &str = "translateX(100%)";

/// Flash categories the server emits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl AlertKind {
    /// Parse a flash category. Unknown categories yield `None`.
    #[must_use]
    pub fn parse(category: &str) -> Option<Self> {
        match category.trim().to_ascii_lowercase().as_str() {
            "success" => Some(Self::Success),
            "error" | "danger" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            "info" | "message" => Some(Self::Info),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Class list for an alert element, e.g. `alert alert-success`.
    #[must_use]
    pub fn class_list(self) -> String {
        format!("alert alert-{}", self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertPhase {
    #[default]
    Visible,
    Leaving,
    Removed,
}

/// Dismissal state machine for a single alert.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlertLifecycle {
    phase: AlertPhase,
}

impl AlertLifecycle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(self) -> AlertPhase {
        self.phase
    }

    /// Start fading out. Returns `true` only for the first request, which is
    /// the one that should apply the leaving style and schedule removal.
    pub fn dismiss(&mut self) -> bool {
        if self.phase != AlertPhase::Visible {
            return false;
        }
        self.phase = AlertPhase::Leaving;
        true
    }

    /// The fade finished. Returns `true` when the element should be removed.
    pub fn finish(&mut self) -> bool {
        if self.phase != AlertPhase::Leaving {
            return false;
        }
        self.phase = AlertPhase::Removed;
        true
    }

    /// The element left the document some other way.
    pub fn detach(&mut self) {
        self.phase = AlertPhase::Removed;
    }
}
