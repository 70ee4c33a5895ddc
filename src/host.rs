//! Capability seams between controller logic and the rendering surface.
//!
//! ARCHITECTURE
//! ============
//! Each trait covers one browser concern (page visibility, menu chrome, theme
//! chrome, history, scrolling, session storage, intersection watching). The
//! behavior modules only ever talk to these traits, so the whole navigation
//! layer runs natively against `FakeHost` in tests and against `dom::WebHost`
//! in the browser.
//!
//! Mutations are infallible from the caller's view: a host that cannot apply
//! one logs it and moves on. Only storage reports failure, because callers
//! must decide (and visibly choose) to ignore it.

use crate::error::StorageError;
use crate::menu::BarStyle;

/// Opaque handle to one element registered for reveal-on-scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RevealKey(pub usize);

pub trait PageSurface {
    /// Ids of every page container, in document order.
    fn page_ids(&self) -> Vec<String>;
    fn set_page_active(&mut self, page_id: &str, active: bool);
    /// Target page id of each nav link, in document order. `None` when the
    /// link carries no target attribute.
    fn nav_link_targets(&self) -> Vec<Option<String>>;
    fn set_nav_link_active(&mut self, index: usize, active: bool);
}

pub trait MenuSurface {
    fn set_panel_open(&mut self, open: bool);
    /// Apply an inline style to hamburger bar `bar` (0..3).
    fn set_bar_style(&mut self, bar: usize, style: BarStyle);
}

pub trait ThemeSurface {
    fn set_root_attribute(&mut self, name: &str, value: &str);
    fn set_logo_src(&mut self, src: &str);
}

pub trait History {
    /// Raw location fragment, including the leading `#` when present.
    fn fragment(&self) -> String;
    /// Push a history entry for `#fragment` without reloading or scrolling.
    fn push_fragment(&mut self, fragment: &str);
}

pub trait Viewport {
    /// Start a smooth scroll to the top of the document. Fire-and-forget.
    fn scroll_to_top(&mut self);
}

/// Session-scoped key/value storage. Every call may fail.
pub trait SessionStore {
    /// # Errors
    ///
    /// Returns a [`StorageError`] when storage is unavailable or the read throws.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns a [`StorageError`] when storage is unavailable or the write throws.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub trait RevealWatcher {
    /// Every element matching a reveal category, collected once.
    fn reveal_targets(&self) -> Vec<RevealKey>;
    fn watch(&mut self, key: RevealKey);
    fn unwatch(&mut self, key: RevealKey);
    fn mark_revealed(&mut self, key: RevealKey);
}

/// Everything the navigation controller needs from its environment.
pub trait Host: PageSurface + MenuSurface + ThemeSurface + History + Viewport + SessionStore + RevealWatcher {}

impl<T> Host for T where T: PageSurface + MenuSurface + ThemeSurface + History + Viewport + SessionStore + RevealWatcher {}
