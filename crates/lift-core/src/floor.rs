//! The `Floor` newtype.
//!
//! Valid floors are `1..=num_floors`.  Two values outside that range have a
//! meaning during arrival-time estimation: `Floor(0)` stands for "finish the
//! downward sweep entirely" and `Floor(num_floors + 1)` for "finish the upward
//! sweep entirely".  Neither is ever stored in a queue.

use std::fmt;

/// A building floor, 1-based.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Floor(pub u32);

impl Floor {
    /// The ground floor.  Elevators start here unless configured otherwise.
    pub const GROUND: Floor = Floor(1);

    /// Down-sweep sentinel: one below the lowest floor.
    pub const BELOW_BOTTOM: Floor = Floor(0);

    /// Up-sweep sentinel for a building with `num_floors` floors.
    #[inline]
    pub fn above_top(num_floors: u32) -> Floor {
        Floor(num_floors + 1)
    }

    /// `true` if `self` is a real floor of a `num_floors`-storey building.
    #[inline]
    pub fn in_building(self, num_floors: u32) -> bool {
        (1..=num_floors).contains(&self.0)
    }

    /// Number of floors between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// The floor directly above.
    #[inline]
    pub fn up(self) -> Floor {
        Floor(self.0 + 1)
    }

    /// The floor directly below.  Saturates at the down-sweep sentinel.
    #[inline]
    pub fn down(self) -> Floor {
        Floor(self.0.saturating_sub(1))
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Floor {
    #[inline(always)]
    fn from(n: u32) -> Floor {
        Floor(n)
    }
}
