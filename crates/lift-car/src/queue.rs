//! `StopQueue` — the stops an elevator will service in one sweep direction.
//!
//! Entries are keyed by pickup floor in a `BTreeMap`, so a second call from a
//! floor that is already queued is found in O(log n) and merged into the
//! existing entry instead of growing the queue.  The sweep direction only
//! decides which end of the map is the head.

use std::collections::btree_map::{self, Entry};
use std::collections::BTreeMap;

use lift_core::{Direction, Floor, StopRequest};

/// An ordered, duplicate-free queue of stop requests for one sweep direction.
#[derive(Clone, Debug)]
pub struct StopQueue {
    sweep:   Direction,
    entries: BTreeMap<Floor, StopRequest>,
}

impl StopQueue {
    pub fn new(sweep: Direction) -> Self {
        Self { sweep, entries: BTreeMap::new() }
    }

    /// Lowest pickup first.
    pub fn ascending() -> Self {
        Self::new(Direction::Up)
    }

    /// Highest pickup first.
    pub fn descending() -> Self {
        Self::new(Direction::Down)
    }

    #[inline]
    pub fn sweep(&self) -> Direction {
        self.sweep
    }

    /// Insert `request`, or merge its drop-offs into the entry already queued
    /// for the same pickup floor.
    ///
    /// Returns `true` if a new entry was created.
    pub fn insert(&mut self, request: StopRequest) -> bool {
        match self.entries.entry(request.pickup) {
            Entry::Occupied(mut slot) => {
                slot.get_mut().merge(request);
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(request);
                true
            }
        }
    }

    /// The next stop in sweep order.
    pub fn head(&self) -> Option<&StopRequest> {
        match self.sweep {
            Direction::Up   => self.entries.first_key_value().map(|(_, r)| r),
            Direction::Down => self.entries.last_key_value().map(|(_, r)| r),
        }
    }

    #[inline]
    pub fn head_floor(&self) -> Option<Floor> {
        self.head().map(|r| r.pickup)
    }

    /// Remove and return the next stop in sweep order.
    pub fn pop_head(&mut self) -> Option<StopRequest> {
        let entry = match self.sweep {
            Direction::Up   => self.entries.pop_first(),
            Direction::Down => self.entries.pop_last(),
        };
        entry.map(|(_, r)| r)
    }

    pub fn get(&self, floor: Floor) -> Option<&StopRequest> {
        self.entries.get(&floor)
    }

    pub fn contains(&self, floor: Floor) -> bool {
        self.entries.contains_key(&floor)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in sweep order.
    pub fn iter(&self) -> SweepIter<'_> {
        SweepIter { inner: self.entries.values(), sweep: self.sweep }
    }

    /// Pickup floors in sweep order.
    pub fn floors(&self) -> impl Iterator<Item = Floor> + '_ {
        self.iter().map(|r| r.pickup)
    }
}

impl<'a> IntoIterator for &'a StopQueue {
    type Item = &'a StopRequest;
    type IntoIter = SweepIter<'a>;

    fn into_iter(self) -> SweepIter<'a> {
        self.iter()
    }
}

/// Iterator over a [`StopQueue`] in sweep order.
pub struct SweepIter<'a> {
    inner: btree_map::Values<'a, Floor, StopRequest>,
    sweep: Direction,
}

impl<'a> Iterator for SweepIter<'a> {
    type Item = &'a StopRequest;

    fn next(&mut self) -> Option<&'a StopRequest> {
        match self.sweep {
            Direction::Up   => self.inner.next(),
            Direction::Down => self.inner.next_back(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for SweepIter<'_> {}
