//! Bounded undo/redo history.
//!
//! A sequence of snapshots plus a pointer at the active one. New commits drop
//! everything after the pointer, and the oldest entry is evicted once the
//! sequence would grow past its capacity.

use std::num::NonZeroUsize;
use tracing::{debug, trace};

#[derive(Debug, Clone)]
pub struct History<S> {
    entries: Vec<S>,
    pointer: usize,
    capacity: NonZeroUsize,
}

impl<S: PartialEq> History<S> {
    pub fn new(initial: S, capacity: NonZeroUsize) -> Self {
        Self {
            entries: vec![initial],
            pointer: 0,
            capacity,
        }
    }

    /// The active entry.
    pub fn current(&self) -> &S {
        &self.entries[self.pointer]
    }

    /// Record `candidate` as the new active entry.
    ///
    /// Returns `false` without touching anything when it equals the active entry.
    pub fn commit(&mut self, candidate: S) -> bool {
        if candidate == *self.current() {
            debug!(pointer = self.pointer, "candidate matches active entry, not committed");
            return false;
        }

        let dropped = self.entries.len() - (self.pointer + 1);
        if dropped > 0 {
            debug!(dropped, "discarding redo entries");
        }
        self.entries.truncate(self.pointer + 1);
        self.entries.push(candidate);
        self.pointer = self.entries.len() - 1;

        if self.entries.len() > self.capacity.get() {
            // pointer is the last index here, so it is >= 1 and never the evicted entry
            self.entries.remove(0);
            self.pointer -= 1;
            trace!("evicted oldest entry");
        }

        debug!(
            len = self.entries.len(),
            pointer = self.pointer,
            "committed history entry"
        );
        true
    }

    /// Step back one entry. `None` when already at the oldest retained entry.
    pub fn undo(&mut self) -> Option<&S> {
        if !self.can_undo() {
            return None;
        }
        self.pointer -= 1;
        Some(&self.entries[self.pointer])
    }

    /// Step forward one entry. `None` when already at the newest entry.
    pub fn redo(&mut self) -> Option<&S> {
        if !self.can_redo() {
            return None;
        }
        self.pointer += 1;
        Some(&self.entries[self.pointer])
    }

    pub fn can_undo(&self) -> bool {
        self.pointer > 0
    }

    pub fn can_redo(&self) -> bool {
        self.pointer + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: there is always at least the initial entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    pub fn entries(&self) -> &[S] {
        &self.entries
    }
}
