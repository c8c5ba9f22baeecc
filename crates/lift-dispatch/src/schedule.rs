//! Call sources: where a run gets its stop requests from.
//!
//! [`CallSchedule`] holds scripted calls keyed by the tick they are placed at;
//! [`TrafficGenerator`][crate::TrafficGenerator] produces random ones.  The
//! controller's run loop only sees the [`CallSource`] trait.

use std::collections::BTreeMap;

use lift_core::{StopRequest, Tick};

/// Anything that can hand the run loop new calls, tick by tick.
pub trait CallSource {
    /// Calls placed at or before `tick` that have not been handed out yet.
    fn calls_at(&mut self, tick: Tick, num_floors: u32) -> Vec<StopRequest>;

    /// `true` once no further calls will ever be produced.
    fn is_exhausted(&self) -> bool;
}

/// Feeds both sources each tick; exhausted only when both are.
impl<A: CallSource, B: CallSource> CallSource for (A, B) {
    fn calls_at(&mut self, tick: Tick, num_floors: u32) -> Vec<StopRequest> {
        let mut calls = self.0.calls_at(tick, num_floors);
        calls.extend(self.1.calls_at(tick, num_floors));
        calls
    }

    fn is_exhausted(&self) -> bool {
        self.0.is_exhausted() && self.1.is_exhausted()
    }
}

// ── CallSchedule ──────────────────────────────────────────────────────────────

/// Scripted calls keyed by the tick at which they are placed.
#[derive(Default, Debug, Clone)]
pub struct CallSchedule {
    inner: BTreeMap<Tick, Vec<StopRequest>>,
    /// Cached total call count for O(1) `len()`.
    total: usize,
}

impl CallSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `request` to be placed at `tick`.  Calls for the same tick
    /// keep their insertion order.
    pub fn push(&mut self, tick: Tick, request: StopRequest) {
        self.inner.entry(tick).or_default().push(request);
        self.total += 1;
    }

    /// Remove and return the calls scheduled for exactly `tick`.
    pub fn drain_tick(&mut self, tick: Tick) -> Option<Vec<StopRequest>> {
        let calls = self.inner.remove(&tick)?;
        self.total -= calls.len();
        Some(calls)
    }

    /// Remove and return every call scheduled at or before `tick`, oldest
    /// first.
    pub fn drain_due(&mut self, tick: Tick) -> Vec<StopRequest> {
        let later = self.inner.split_off(&tick.offset(1));
        let due = std::mem::replace(&mut self.inner, later);
        let calls: Vec<StopRequest> = due.into_values().flatten().collect();
        self.total -= calls.len();
        calls
    }

    /// The earliest tick with at least one queued call.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct ticks with at least one queued call.
    pub fn tick_count(&self) -> usize {
        self.inner.len()
    }
}

impl CallSource for CallSchedule {
    fn calls_at(&mut self, tick: Tick, _num_floors: u32) -> Vec<StopRequest> {
        self.drain_due(tick)
    }

    fn is_exhausted(&self) -> bool {
        self.is_empty()
    }
}
