//! In-memory host used by unit tests. Records every capability call.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::error::StorageError;
use crate::host::{History, MenuSurface, PageSurface, RevealKey, RevealWatcher, SessionStore, ThemeSurface, Viewport};
use crate::menu::{BAR_COUNT, BarStyle, CLOSED_BARS};

#[derive(Debug, Clone)]
pub struct FakeHost {
    /// (id, active) per page container.
    pub pages: Vec<(String, bool)>,
    /// (target, active) per nav link.
    pub links: Vec<(Option<String>, bool)>,
    pub panel_open: bool,
    pub bars: [BarStyle; BAR_COUNT],
    pub root_attributes: HashMap<String, String>,
    pub logo_src: Option<String>,
    pub fragment: String,
    pub pushed: Vec<String>,
    pub scrolls: usize,
    pub storage: HashMap<String, String>,
    pub fail_get: Option<StorageError>,
    pub fail_set: Option<StorageError>,
    pub reveal_count: usize,
    pub watched: BTreeSet<RevealKey>,
    pub revealed: BTreeMap<RevealKey, usize>,
}

impl FakeHost {
    pub fn new(page_ids: &[&str]) -> Self {
        Self {
            pages: page_ids.iter().map(|id| ((*id).to_owned(), false)).collect(),
            links: page_ids.iter().map(|id| (Some((*id).to_owned()), false)).collect(),
            panel_open: false,
            bars: CLOSED_BARS,
            root_attributes: HashMap::new(),
            logo_src: None,
            fragment: String::new(),
            pushed: Vec::new(),
            scrolls: 0,
            storage: HashMap::new(),
            fail_get: None,
            fail_set: None,
            reveal_count: 0,
            watched: BTreeSet::new(),
            revealed: BTreeMap::new(),
        }
    }

    pub fn portfolio() -> Self {
        Self::new(&["home", "about", "projects", "contact"])
    }

    pub fn with_fragment(mut self, fragment: &str) -> Self {
        self.fragment = fragment.to_owned();
        self
    }

    pub fn with_reveal_targets(mut self, count: usize) -> Self {
        self.reveal_count = count;
        self
    }

    pub fn active_pages(&self) -> Vec<&str> {
        self.pages.iter().filter(|(_, on)| *on).map(|(id, _)| id.as_str()).collect()
    }

    pub fn active_link_targets(&self) -> Vec<Option<&str>> {
        self.links.iter().filter(|(_, on)| *on).map(|(target, _)| target.as_deref()).collect()
    }
}

impl PageSurface for FakeHost {
    fn page_ids(&self) -> Vec<String> {
        self.pages.iter().map(|(id, _)| id.clone()).collect()
    }

    fn set_page_active(&mut self, page_id: &str, active: bool) {
        for (id, on) in &mut self.pages {
            if id == page_id {
                *on = active;
            }
        }
    }

    fn nav_link_targets(&self) -> Vec<Option<String>> {
        self.links.iter().map(|(target, _)| target.clone()).collect()
    }

    fn set_nav_link_active(&mut self, index: usize, active: bool) {
        if let Some(link) = self.links.get_mut(index) {
            link.1 = active;
        }
    }
}

impl MenuSurface for FakeHost {
    fn set_panel_open(&mut self, open: bool) {
        self.panel_open = open;
    }

    fn set_bar_style(&mut self, bar: usize, style: BarStyle) {
        if let Some(slot) = self.bars.get_mut(bar) {
            *slot = style;
        }
    }
}

impl ThemeSurface for FakeHost {
    fn set_root_attribute(&mut self, name: &str, value: &str) {
        self.root_attributes.insert(name.to_owned(), value.to_owned());
    }

    fn set_logo_src(&mut self, src: &str) {
        self.logo_src = Some(src.to_owned());
    }
}

impl History for FakeHost {
    fn fragment(&self) -> String {
        self.fragment.clone()
    }

    fn push_fragment(&mut self, fragment: &str) {
        self.fragment = format!("#{fragment}");
        self.pushed.push(fragment.to_owned());
    }
}

impl Viewport for FakeHost {
    fn scroll_to_top(&mut self) {
        self.scrolls += 1;
    }
}

impl SessionStore for FakeHost {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match &self.fail_get {
            Some(err) => Err(err.clone()),
            None => Ok(self.storage.get(key).cloned()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(err) = &self.fail_set {
            return Err(err.clone());
        }
        self.storage.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

impl RevealWatcher for FakeHost {
    fn reveal_targets(&self) -> Vec<RevealKey> {
        (0..self.reveal_count).map(RevealKey).collect()
    }

    fn watch(&mut self, key: RevealKey) {
        self.watched.insert(key);
    }

    fn unwatch(&mut self, key: RevealKey) {
        self.watched.remove(&key);
    }

    fn mark_revealed(&mut self, key: RevealKey) {
        *self.revealed.entry(key).or_insert(0) += 1;
    }
}
