//! One-shot reveal-on-scroll bookkeeping.
//!
//! Each registered element moves from pending to revealed at most once. After
//! that it is unwatched, and later intersection reports for it are ignored.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::BTreeSet;

use crate::host::{RevealKey, RevealWatcher};

#[derive(Debug, Default, Clone)]
pub struct RevealSet {
    pending: BTreeSet<RevealKey>,
    revealed: BTreeSet<RevealKey>,
}

impl RevealSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking `key`. Returns `false` if it was already known.
    pub fn register(&mut self, key: RevealKey) -> bool {
        if self.revealed.contains(&key) {
            return false;
        }
        self.pending.insert(key)
    }

    /// Fold a batch of `(element, is_intersecting)` reports into the set and
    /// return the elements that just became revealed.
    pub fn observe<I>(&mut self, entries: I) -> Vec<RevealKey>
    where
        I: IntoIterator<Item = (RevealKey, bool)>,
    {
        let mut newly = Vec::new();
        for (key, intersecting) in entries {
            if intersecting && self.pending.remove(&key) {
                self.revealed.insert(key);
                newly.push(key);
            }
        }
        newly
    }

    #[must_use]
    pub fn is_revealed(&self, key: RevealKey) -> bool {
        self.revealed.contains(&key)
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

/// Register and watch every reveal target the host exposes.
pub fn start_reveal<H: RevealWatcher + ?Sized>(set: &mut RevealSet, host: &mut H) {
    let targets = host.reveal_targets();
    for key in targets {
        if set.register(key) {
            host.watch(key);
        }
    }
    log::debug!("reveal: watching {} elements", set.pending_len());
}

/// Apply an intersection batch: mark and unwatch first-time entrants.
pub fn on_intersections<H, I>(set: &mut RevealSet, host: &mut H, entries: I)
where
    H: RevealWatcher + ?Sized,
    I: IntoIterator<Item = (RevealKey, bool)>,
{
    for key in set.observe(entries) {
        host.mark_revealed(key);
        host.unwatch(key);
    }
}
