//! Mobile menu toggle and the hamburger-to-X bar poses.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::host::MenuSurface;
use crate::state::NavState;

pub const BAR_COUNT: usize = 3;

/// One inline style declaration applied to a hamburger bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarStyle {
    pub property: &'static str,
    pub value: &'static str,
}

impl BarStyle {
    const fn new(property: &'static str, value: &'static str) -> Self {
        Self { property, value }
    }
}

/// Bars folded into an X: outer bars rotate, the middle one fades out.
pub const OPEN_BARS: [BarStyle; BAR_COUNT] = [
    BarStyle::new("transform", "rotate(45deg) translate(5px, 5px)"),
    BarStyle::new("opacity", "0"),
    BarStyle::new("transform", "rotate(-45deg) translate(5px, -5px)"),
];

/// Neutral hamburger.
pub const CLOSED_BARS: [BarStyle; BAR_COUNT] = [
    BarStyle::new("transform", "none"),
    BarStyle::new("opacity", "1"),
    BarStyle::new("transform", "none"),
];

#[must_use]
pub fn bar_styles(open: bool) -> &'static [BarStyle; BAR_COUNT] {
    if open { &OPEN_BARS } else { &CLOSED_BARS }
}

/// Flip the menu and repaint its chrome. Returns the new open flag.
///
/// This is the only path that changes `menu_open`; the router closes the menu
/// by calling it too, so the bars can never disagree with the state.
pub fn toggle_menu<H: MenuSurface + ?Sized>(state: &mut NavState, host: &mut H) -> bool {
    state.menu_open = !state.menu_open;
    paint(state.menu_open, host);
    log::debug!("menu: {}", if state.menu_open { "open" } else { "closed" });
    state.menu_open
}

fn paint<H: MenuSurface + ?Sized>(open: bool, host: &mut H) {
    host.set_panel_open(open);
    for (bar, style) in bar_styles(open).iter().enumerate() {
        host.set_bar_style(bar, *style);
    }
}
