//! The navigation controller: state, config, and host behind one handle.
//!
//! Every browser event handler funnels into one method here. Handlers run to
//! completion on the UI thread, so the controller needs no locking; the DOM
//! glue keeps it in an `Rc<RefCell<_>>`.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::NavConfig;
use crate::host::{Host, RevealKey};
use crate::menu;
use crate::reveal::{self, RevealSet};
use crate::router;
use crate::state::NavState;
use crate::theme::{self, Theme};

pub struct NavController<H: Host> {
    state: NavState,
    config: NavConfig,
    reveal: RevealSet,
    host: H,
}

impl<H: Host> NavController<H> {
    #[must_use]
    pub fn new(host: H, config: NavConfig) -> Self {
        Self { state: NavState::new(), config, reveal: RevealSet::new(), host }
    }

    /// Document-ready initialization.
    ///
    /// Restores the stored theme, lands on the page named by a non-empty
    /// fragment, and starts watching reveal targets.
    pub fn start(&mut self) {
        let theme = theme::restore_theme(&mut self.state, &mut self.host, &self.config);
        router::handle_hash_change(&mut self.state, &mut self.host, &self.config);
        reveal::start_reveal(&mut self.reveal, &mut self.host);
        log::info!(
            "navigation ready: theme={theme}, page={}",
            self.state.active_page.as_deref().unwrap_or("-")
        );
    }

    pub fn toggle_menu(&mut self) -> bool {
        menu::toggle_menu(&mut self.state, &mut self.host)
    }

    pub fn toggle_theme(&mut self) -> Theme {
        theme::toggle_theme(&mut self.state, &mut self.host, &self.config)
    }

    pub fn navigate_to(&mut self, page_id: &str) -> bool {
        router::navigate_to(&mut self.state, &mut self.host, page_id)
    }

    pub fn handle_hash_change(&mut self) -> bool {
        router::handle_hash_change(&mut self.state, &mut self.host, &self.config)
    }

    /// Click on a nav link or action button carrying an optional target id.
    /// Missing or empty targets do nothing; the id is matched verbatim.
    pub fn activate_trigger(&mut self, target: Option<&str>) -> bool {
        match target {
            Some(page_id) if !page_id.is_empty() => self.navigate_to(page_id),
            _ => false,
        }
    }

    pub fn reveal<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (RevealKey, bool)>,
    {
        reveal::on_intersections(&mut self.reveal, &mut self.host, entries);
    }

    #[must_use]
    pub fn state(&self) -> &NavState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    #[must_use]
    pub fn reveal_set(&self) -> &RevealSet {
        &self.reveal
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
