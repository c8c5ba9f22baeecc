//! Direction of travel and the elevator's three-valued motion state.

use crate::Floor;

/// A direction of travel between two floors.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Direction needed to get from `from` to `to`, or `None` if they match.
    #[inline]
    pub fn between(from: Floor, to: Floor) -> Option<Direction> {
        use std::cmp::Ordering;
        match to.cmp(&from) {
            Ordering::Greater => Some(Direction::Up),
            Ordering::Less    => Some(Direction::Down),
            Ordering::Equal   => None,
        }
    }

    /// `true` if `floor` is at or beyond `target` when sweeping this way.
    #[inline]
    pub fn reached(self, floor: Floor, target: Floor) -> bool {
        match self {
            Direction::Up   => floor >= target,
            Direction::Down => floor <= target,
        }
    }

    /// The floor one past the end of a sweep in this direction.
    #[inline]
    pub fn sentinel(self, num_floors: u32) -> Floor {
        match self {
            Direction::Up   => Floor::above_top(num_floors),
            Direction::Down => Floor::BELOW_BOTTOM,
        }
    }
}

/// The motion state of one elevator.
///
/// `Idle` is both the initial state and the state an elevator returns to once
/// both of its queues are drained.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DirectionState {
    #[default]
    Idle,
    Ascending,
    Descending,
}

impl DirectionState {
    /// `true` for either moving state.
    #[inline]
    pub fn is_active(self) -> bool {
        !matches!(self, DirectionState::Idle)
    }

    /// The sweep direction of a moving state.
    #[inline]
    pub fn direction(self) -> Option<Direction> {
        match self {
            DirectionState::Idle       => None,
            DirectionState::Ascending  => Some(Direction::Up),
            DirectionState::Descending => Some(Direction::Down),
        }
    }

    /// Human-readable label, used for status lines and CSV columns.
    pub fn as_str(self) -> &'static str {
        match self {
            DirectionState::Idle       => "idle",
            DirectionState::Ascending  => "ascending",
            DirectionState::Descending => "descending",
        }
    }
}

impl From<Direction> for DirectionState {
    fn from(d: Direction) -> Self {
        match d {
            Direction::Up   => DirectionState::Ascending,
            Direction::Down => DirectionState::Descending,
        }
    }
}

impl std::fmt::Display for DirectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
