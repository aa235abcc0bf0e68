//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render widget state held in Leptos signals. The imperative page
//! bindings in `dom` mount them into server-rendered markup.

pub mod star_rating;
