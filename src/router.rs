//! Single-level page router keyed by page id, synced with the URL fragment.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page container is already in the document; routing only decides
//! which one carries the active class. The URL fragment mirrors the current
//! page so reloads, shared links, and back/forward land on the same page.
//!
//! Unknown ids are never an error. `navigate_to` ignores them without
//! touching anything, and `handle_hash_change` falls back to the default page.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use crate::config::NavConfig;
use crate::host::{History, MenuSurface, PageSurface, Viewport};
use crate::menu;
use crate::state::NavState;

/// Show `page_id`, hide every other page, and sync links, menu and history.
///
/// Returns `false` (and changes nothing) when no page has that id.
pub fn navigate_to<H>(state: &mut NavState, host: &mut H, page_id: &str) -> bool
where
    H: PageSurface + MenuSurface + History + Viewport + ?Sized,
{
    let pages = host.page_ids();
    if !pages.iter().any(|id| id == page_id) {
        log::debug!("router: ignoring unknown page {page_id:?}");
        return false;
    }

    // Clear every page, not just the last one we activated: markup may ship
    // with zero or several pages already active.
    for id in &pages {
        if id != page_id {
            host.set_page_active(id, false);
        }
    }
    host.set_page_active(page_id, true);
    state.active_page = Some(page_id.to_owned());

    host.scroll_to_top();

    for (index, target) in host.nav_link_targets().iter().enumerate() {
        host.set_nav_link_active(index, target.as_deref() == Some(page_id));
    }

    if state.menu_open {
        menu::toggle_menu(state, host);
    }

    host.push_fragment(page_id);
    log::debug!("router: showing {page_id}");
    true
}

/// Page id named by a raw fragment, or `None` when it carries no target.
///
/// A bare `#` or whitespace-only fragment counts as absent.
#[must_use]
pub fn fragment_target(raw: &str) -> Option<&str> {
    let target = raw.strip_prefix('#').unwrap_or(raw).trim();
    (!target.is_empty()).then_some(target)
}

/// Route to the page named by the current fragment.
///
/// Known ids navigate there; unknown ids fall back to the configured default
/// page. An absent fragment does nothing. Returns whether a navigation ran.
pub fn handle_hash_change<H>(state: &mut NavState, host: &mut H, config: &NavConfig) -> bool
where
    H: PageSurface + MenuSurface + History + Viewport + ?Sized,
{
    let raw = host.fragment();
    let Some(target) = fragment_target(&raw) else {
        return false;
    };

    if host.page_ids().iter().any(|id| id == target) {
        navigate_to(state, host, target)
    } else {
        log::debug!("router: unknown fragment {target:?}, falling back to {}", config.default_page);
        navigate_to(state, host, &config.default_page)
    }
}
