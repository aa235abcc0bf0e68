//! Page chrome state (navigation menu, dark mode).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns in one plain struct so the page
//! binding only has to mirror it into classes and inline styles.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Hamburger bars in the navigation toggle.
pub const NAV_BAR_COUNT: usize = 3;

/// UI state for the navigation menu and theme.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub nav_open: bool,
}

impl UiState {
    /// Flip the mobile menu. Returns the new open state.
    pub fn toggle_nav(&mut self) -> bool {
        self.nav_open = !self.nav_open;
        self.nav_open
    }

    pub fn close_nav(&mut self) {
        self.nav_open = false;
    }

    /// Inline style for hamburger bar `index` under the current menu state.
    #[must_use]
    pub fn bar_style(&self, index: usize) -> BarStyle {
        BarStyle::for_bar(index, self.nav_open)
    }

    /// Label for the `.dark-mode-toggle` button.
    #[must_use]
    pub fn dark_mode_label(&self) -> &'static str {
        if self.dark_mode { "Light Mode" } else { "Dark Mode" }
    }

    /// Icon class shown next to the dark mode label.
    #[must_use]
    pub fn dark_mode_icon(&self) -> &'static str {
        if self.dark_mode { "fas fa-sun" } else { "fas fa-moon" }
    }
}

/// Transform and opacity for one hamburger bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarStyle {
    pub transform: String,
    pub opacity: &'static str,
}

impl BarStyle {
    /// Open menu: outer bars cross into an X and the middle bar slides out.
    #[must_use]
    pub fn for_bar(index: usize, open: bool) -> Self {
        if !open {
            return Self {
                transform: "none".to_owned(),
                opacity: "1",
            };
        }
        let (angle, dx, dy) = match index {
            0 => (45, "0", "6px"),
            1 => (0, "100px", "0"),
            2 => (-45, "0", "-6px"),
            _ => (0, "0", "0"),
        };
        Self {
            transform: format!("rotate({angle}deg) translate({dx}, {dy})"),
            opacity: if index == 1 { "0" } else { "1" },
        }
    }
}
