//! Local UI chrome state (navigation menu).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of page state so each page can
//! own its data while the shell owns the chrome.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared by the navigation shell.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Whether the collapsed (mobile) navigation menu is open.
    pub menu_open: bool,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
