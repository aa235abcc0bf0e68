//! Widget state machines.
//!
//! DESIGN
//! ======
//! State is split by widget (`rating`, `autosave`, `alerts`, etc.) and kept
//! free of DOM handles so each machine is testable without a browser.

pub mod alerts;
pub mod autosave;
pub mod rating;
pub mod submit;
pub mod ui;
