//! `StopRequest` — "someone is waiting at floor P and wants to go to D".
//!
//! # Identity
//!
//! A request *is* its pickup floor.  Equality, ordering and hashing look at
//! `pickup` only; the drop-off set rides along as payload.  This is what lets
//! a direction queue keep one entry per floor and fold later calls from the
//! same floor into it with [`StopRequest::merge`].
//!
//! # Lifecycle
//!
//! A request is created by a caller, or by an elevator when passengers board
//! (each drop-off floor becomes a fresh request with no drop-offs of its own).
//! It is consumed when its pickup floor has been serviced.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use crate::Floor;

/// A pickup floor plus the set of floors its passengers want to reach.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StopRequest {
    /// Where the call was made.
    pub pickup: Floor,
    /// Where the passengers boarding at `pickup` are going.  May be empty.
    drop_offs: BTreeSet<Floor>,
}

impl StopRequest {
    /// A call with no known destination.
    pub fn new(pickup: Floor) -> Self {
        Self { pickup, drop_offs: BTreeSet::new() }
    }

    /// A call from one passenger going to `drop_off`.
    pub fn with_drop_off(pickup: Floor, drop_off: Floor) -> Self {
        Self::with_drop_offs(pickup, [drop_off])
    }

    /// A call from several passengers boarding together.  Duplicate
    /// destinations collapse.
    pub fn with_drop_offs<I>(pickup: Floor, drop_offs: I) -> Self
    where
        I: IntoIterator<Item = Floor>,
    {
        Self { pickup, drop_offs: drop_offs.into_iter().collect() }
    }

    /// The destinations carried by this request, ascending.
    #[inline]
    pub fn drop_offs(&self) -> &BTreeSet<Floor> {
        &self.drop_offs
    }

    /// `true` if at least one destination is known.
    #[inline]
    pub fn has_drop_offs(&self) -> bool {
        !self.drop_offs.is_empty()
    }

    /// Fold `other`'s destinations into `self`.
    ///
    /// Only meaningful for requests with the same pickup floor.  Returns
    /// `false` and leaves `self` untouched if the pickups differ.
    pub fn merge(&mut self, other: StopRequest) -> bool {
        if other.pickup != self.pickup {
            return false;
        }
        self.drop_offs.extend(other.drop_offs);
        true
    }

    /// Consume the request, yielding one destination-less request per
    /// drop-off floor (passengers who just boarded).
    pub fn into_boarded(self) -> impl Iterator<Item = StopRequest> {
        self.drop_offs.into_iter().map(StopRequest::new)
    }
}

impl PartialEq for StopRequest {
    fn eq(&self, other: &Self) -> bool {
        self.pickup == other.pickup
    }
}

impl Eq for StopRequest {}

impl PartialOrd for StopRequest {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StopRequest {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pickup.cmp(&other.pickup)
    }
}

impl Hash for StopRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pickup.hash(state);
    }
}

impl std::fmt::Display for StopRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pickup {}", self.pickup)?;
        if self.has_drop_offs() {
            let floors: Vec<String> = self.drop_offs.iter().map(Floor::to_string).collect();
            write!(f, " -> [{}]", floors.join(", "))?;
        }
        Ok(())
    }
}
