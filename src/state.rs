//! Application state owned by the navigation controller.
//!
//! DESIGN
//! ======
//! Menu, theme, and current page live in one value that every handler takes
//! by reference, instead of loose globals. Derived DOM state (classes, inline
//! styles, the theme attribute, the logo source) is always written from here.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::theme::Theme;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub theme: Theme,
    /// Page last activated by the router. `None` until the first navigation;
    /// markup may still show a page chosen by the server.
    pub active_page: Option<String>,
}

impl NavState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_active(&self, page_id: &str) -> bool {
        self.active_page.as_deref() == Some(page_id)
    }
}
