//! Utility helpers shared by the page bindings and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (timers, storage,
//! clipboard) from widget logic so the logic can be exercised natively.

pub mod clipboard;
pub mod dark_mode;
pub mod debounce;
pub mod format;
pub mod lenient;
pub mod password_strength;
pub mod storage;
pub mod timer;
pub mod validation;
