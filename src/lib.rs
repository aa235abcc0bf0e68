//! # review-ui
//!
//! Browser interactivity for the event review site, compiled to WASM and
//! loaded by the server-rendered pages.
//!
//! The crate is split the way the page needs it: `state` holds DOM-free
//! widget state machines, `util` holds shared helpers (storage, timers,
//! debounce/throttle, formatting, validation, clipboard, dark mode),
//! `components` holds Leptos views, and `dom` (browser builds only) wires
//! everything to the page and exports the script-facing API.

pub mod components;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod state;
pub mod util;

pub use components::star_rating::{StarRating, StarUnits};
pub use state::autosave::{AutoSave, AutoSaveConfig, AutoSaveOptions, FormAutoSave, FormFields};
pub use state::rating::{RatingChanged, RatingOptions, RatingState, StarSize};
pub use util::clipboard::{ClipboardError, copy_to_clipboard};
pub use util::debounce::{Debounced, Throttled, debounce, throttle};
pub use util::format::{FormatError, format_date, format_time};
pub use util::storage::{KeyValueStore, MemoryStore, StorageError, load_json, save_json};
pub use util::timer::{Scheduler, SharedScheduler, TimerHandle, VirtualClock};

/// Page entry point: runs once the module is instantiated.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    util::dark_mode::init(&util::storage::LocalStorage);
    bind_dark_mode_toggle();
    dom::nav::initialize_navigation();
    dom::alerts::initialize_alerts();
    dom::forms::initialize_form_validation();
    dom::animations::initialize_animations();
    dom::star_rating::mount_declared_ratings();
    dom::autosave::attach_declared_forms();
}

#[cfg(feature = "hydrate")]
fn bind_dark_mode_toggle() {
    for button in dom::query_all(".dark-mode-toggle") {
        dom::EventListener::attach_forever(&button, "click", |_| {
            dom::exports::toggle_dark_mode();
        });
    }
}
