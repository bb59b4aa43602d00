//! Local dashboard-shell chrome state.
//!
//! DESIGN
//! ======
//! The mobile drawer flag is presentation-only: it is never persisted and
//! carries no session meaning.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Mobile navigation drawer visibility.
    pub sidebar_open: bool,
}

impl UiState {
    pub fn open_sidebar(&mut self) {
        self.sidebar_open = true;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }
}
