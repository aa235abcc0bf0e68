//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from the `darkMode` key (a JSON boolean) and
//! applies the `.dark-mode` class to `<body>`. Toggle writes back to storage,
//! updates the class, and relabels the `.dark-mode-toggle` button.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; native builds
//! skip the DOM side and only touch the given store.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
use crate::state::ui::UiState;
use crate::util::storage::{KeyValueStore, load_json_or, save_json};

pub const STORAGE_KEY: &str = "darkMode";
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Read the stored preference. Missing or unreadable means light.
pub fn read_preference(store: &impl KeyValueStore) -> bool {
    load_json_or(store, STORAGE_KEY, false)
}

/// Apply the stored preference at page start. Returns the active state.
pub fn init(store: &impl KeyValueStore) -> bool {
    let enabled = read_preference(store);
    if enabled {
        apply(enabled);
    }
    enabled
}

/// Toggle dark mode and persist the new preference.
pub fn toggle(store: &impl KeyValueStore, current: bool) -> bool {
    let next = !current;
    apply(next);
    save_json(store, STORAGE_KEY, &next);
    next
}

/// Apply or remove the `.dark-mode` class on `<body>` and relabel the toggle.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(body) = doc.body() {
            let class_list = body.class_list();
            let result = if enabled {
                class_list.add_1(DARK_MODE_CLASS)
            } else {
                class_list.remove_1(DARK_MODE_CLASS)
            };
            if result.is_err() {
                leptos::logging::warn!("could not update body class for dark mode");
            }
        }
        if let Ok(Some(button)) = doc.query_selector(".dark-mode-toggle") {
            let ui = UiState {
                dark_mode: enabled,
                ..UiState::default()
            };
            button.set_inner_html(&format!(
                r#"<i class="{}"></i> {}"#,
                ui.dark_mode_icon(),
                ui.dark_mode_label()
            ));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}
