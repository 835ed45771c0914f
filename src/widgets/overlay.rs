//! Keyed overlay registry shared by the workshop and recipe modal families.
//!
//! Every open overlay holds the page scroll lock; the lock is reference
//! counted so closing one overlay never unfreezes the page while another
//! family still has one open.

use std::cell::Cell;
use std::collections::HashSet;
use std::hash::Hash;
use std::rc::Rc;

/// Reference-counted "page scroll suspended" flag. Widgets run on a single
/// UI thread, so a `Cell` is enough.
#[derive(Debug, Default)]
pub struct ScrollLock {
    holders: Cell<usize>,
}

impl ScrollLock {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    fn acquire(&self) {
        self.holders.set(self.holders.get() + 1);
    }

    fn release(&self) {
        let held = self.holders.get();
        debug_assert!(held > 0, "scroll lock released more times than acquired");
        self.holders.set(held.saturating_sub(1));
    }

    pub fn locked(&self) -> bool {
        self.holders.get() > 0
    }
}

/// One modal family: overlays keyed by a card identifier, any number of
/// which may be open at once.
#[derive(Debug)]
pub struct OverlayRegistry<K: Eq + Hash> {
    open: HashSet<K>,
    scroll: Rc<ScrollLock>,
}

impl<K: Eq + Hash + Clone> OverlayRegistry<K> {
    pub fn new(scroll: Rc<ScrollLock>) -> Self {
        Self {
            open: HashSet::new(),
            scroll,
        }
    }

    /// Opens the overlay for `key`; returns false when it was already open.
    pub fn open(&mut self, key: K) -> bool {
        if self.open.insert(key) {
            self.scroll.acquire();
            true
        } else {
            false
        }
    }

    /// Closes the overlay for `key` via its close control or a backdrop
    /// click; returns false when it was not open.
    pub fn close(&mut self, key: &K) -> bool {
        if self.open.remove(key) {
            self.scroll.release();
            true
        } else {
            false
        }
    }

    /// Escape closes every open overlay in the family.
    pub fn close_all(&mut self) {
        for _ in 0..self.open.len() {
            self.scroll.release();
        }
        self.open.clear();
    }

    pub fn is_open(&self, key: &K) -> bool {
        self.open.contains(key)
    }

    pub fn any_open(&self) -> bool {
        !self.open.is_empty()
    }
}
