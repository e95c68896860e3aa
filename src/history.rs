// history.rs

//! Bounded back-navigation log of focused cell locations.
//!
//! A [`History`] keeps `(cell id, line)` visits oldest first, plus a cursor on
//! the visit that is currently focused. Recording from a past position drops
//! everything after the cursor, and once the log grows past its capacity the
//! oldest visits are evicted.

use std::collections::VecDeque;
use std::fmt;

use log::{debug, trace};

use crate::error::HistoryError;

/// Number of visits kept when no capacity is given.
pub const DEFAULT_CAPACITY: usize = 20;

/// One visited location.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Entry<C> {
    pub cell_id: C,
    pub line: usize,
}

impl<C> Entry<C> {
    pub fn new(cell_id: C, line: usize) -> Self {
        Self { cell_id, line }
    }
}

impl<C: fmt::Display> fmt::Display for Entry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.cell_id, self.line)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Direction {
    Backward,
    // Only reachable from tests until forward navigation is exposed.
    #[cfg_attr(not(test), allow(dead_code))]
    Forward,
}

impl Direction {
    fn step(self) -> isize {
        match self {
            Direction::Backward => -1,
            Direction::Forward => 1,
        }
    }
}

#[derive(Clone, Debug)]
pub struct History<C> {
    entries: VecDeque<Entry<C>>,
    // None only while `entries` is empty.
    cursor: Option<usize>,
    capacity: usize,
}

impl<C> Default for History<C> {
    fn default() -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: None,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl<C: PartialEq> History<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty history that keeps at most `capacity` visits.
    pub fn bounded(capacity: usize) -> Result<Self, HistoryError> {
        if capacity == 0 {
            return Err(HistoryError::ZeroCapacity);
        }
        Ok(Self {
            entries: VecDeque::new(),
            cursor: None,
            capacity,
        })
    }

    /// Records a visit to `line` of `cell_id` and makes it current.
    ///
    /// Visiting the current location again is ignored. Any visits after the
    /// cursor are discarded first, so there is no way back to them.
    pub fn record(&mut self, cell_id: C, line: usize) {
        if self
            .current()
            .is_some_and(|entry| entry.cell_id == cell_id && entry.line == line)
        {
            trace!("skipping repeated visit to line {}", line);
            return;
        }

        let keep = self.cursor.map_or(0, |cursor| cursor + 1);
        if keep < self.entries.len() {
            debug!("dropping {} forward entries", self.entries.len() - keep);
            self.entries.truncate(keep);
        }

        trace!("recording visit to line {}", line);
        self.entries.push_back(Entry::new(cell_id, line));
        self.cursor = Some(self.entries.len() - 1);

        if self.entries.len() > self.capacity {
            self.evict_front(self.entries.len() - self.capacity);
        }
    }

    /// Drops every entry and clears the cursor.
    pub fn reset(&mut self) {
        debug!("resetting history ({} entries)", self.entries.len());
        self.entries.clear();
        self.cursor = None;
    }

    /// Removes every visit to `cell_id` and returns how many were removed.
    ///
    /// The cursor stays on the current entry when it survives. Otherwise it
    /// moves to the closest older entry of another cell, or to the oldest
    /// survivor when there is no such entry.
    pub fn forget(&mut self, cell_id: &C) -> usize {
        let anchor = self.cursor.and_then(|cursor| {
            self.entries
                .range(..=cursor)
                .rposition(|entry| entry.cell_id != *cell_id)
        });
        // Position of the anchor once the matching entries are gone.
        let anchor = anchor.map(|anchor| {
            self.entries
                .range(..anchor)
                .filter(|entry| entry.cell_id != *cell_id)
                .count()
        });

        let before = self.entries.len();
        self.entries.retain(|entry| entry.cell_id != *cell_id);
        let removed = before - self.entries.len();
        if removed == 0 {
            return 0;
        }

        self.cursor = match anchor {
            Some(index) => Some(index),
            None if self.entries.is_empty() => None,
            None => Some(0),
        };
        debug!("forgot {} entries, cursor now {:?}", removed, self.cursor);
        removed
    }

    pub fn can_go_back(&self) -> bool {
        self.can_navigate(Direction::Backward)
    }

    /// Moves one visit back and returns the entry now current.
    ///
    /// At the oldest entry this keeps returning that entry.
    pub fn go_back(&mut self) -> Option<&Entry<C>> {
        self.navigate(Direction::Backward)
    }

    fn can_navigate(&self, direction: Direction) -> bool {
        self.target(direction).is_some()
    }

    fn navigate(&mut self, direction: Direction) -> Option<&Entry<C>> {
        let index = self.target(direction)?;
        self.cursor = Some(index);
        self.entries.get(index)
    }

    fn target(&self, direction: Direction) -> Option<usize> {
        let cursor = self.cursor?;
        if self.entries.is_empty() {
            return None;
        }
        let index = cursor.saturating_add_signed(direction.step());
        (index < self.entries.len()).then_some(index)
    }

    /// Removes the `count` oldest entries, shifting the cursor with them.
    fn evict_front(&mut self, count: usize) {
        let count = count.min(self.entries.len());
        debug!("evicting {} oldest entries", count);
        self.entries.drain(..count);
        self.cursor = self
            .cursor
            .and_then(|cursor| cursor.checked_sub(count))
            .or_else(|| (!self.entries.is_empty()).then_some(0));
    }

    pub fn current(&self) -> Option<&Entry<C>> {
        self.entries.get(self.cursor?)
    }

    pub fn contains_cell(&self, cell_id: &C) -> bool {
        self.entries.iter().any(|entry| entry.cell_id == *cell_id)
    }
}

impl<C> History<C> {
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Entries oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &Entry<C>> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
