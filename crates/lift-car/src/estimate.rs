//! Time-to-arrival estimation used for dispatch scoring.
//!
//! # Cost model
//!
//! The estimate assumes a car finishes its current sweep before reversing:
//!
//! ```text
//! idle                      |target - floor| × travel
//! moving toward target      walk(active queue, floor → target)
//! moving away from target   walk(active queue, floor → sweep end)
//!                         + walk(other queue, turnaround → target)
//! ```
//!
//! A walk visits queued stops in sweep order.  Every stop strictly before the
//! walk's end costs `dwell + distance × travel`.  The first stop at or beyond
//! the end finishes the walk with travel only: the car is passing through,
//! not servicing.  If the queue runs out first, the remaining leg to a real
//! target floor is travel only; a sweep-end walk stops at the last serviced
//! floor, which is where the car turns around.
//!
//! The estimate ignores dwell ticks already served and any partial travel
//! toward the next floor.

use lift_core::{Direction, Floor, StopRequest};

use crate::{Elevator, StopQueue};

/// Result of walking a queue: ticks consumed and the floor the walk ends on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QueueWalk {
    pub elapsed: u64,
    pub floor:   Floor,
}

impl Elevator {
    /// Estimated ticks until this car reaches `request.pickup`.
    ///
    /// Pure: the car's state is not touched.
    pub fn estimate_time_to_stop(&self, request: &StopRequest) -> u64 {
        let target = request.pickup;
        let Some(needed) = Direction::between(self.current_floor(), target) else {
            return 0;
        };

        match self.state().direction() {
            None => self.travel_cost(self.current_floor(), target),
            Some(sweep) if sweep == needed => {
                self.walk_queue(self.queue(sweep), self.current_floor(), target).elapsed
            }
            Some(sweep) => {
                let sweep_end = sweep.sentinel(self.num_floors());
                let leg = self.walk_queue(self.queue(sweep), self.current_floor(), sweep_end);
                let back = self.walk_queue(self.queue(needed), leg.floor, target);
                leg.elapsed + back.elapsed
            }
        }
    }

    /// Cost of walking `queue` from `start` toward `stop`.
    ///
    /// `stop` is either a real floor or the queue's sweep sentinel
    /// (`Floor(0)` / `Floor(num_floors + 1)`).
    pub fn walk_queue(&self, queue: &StopQueue, start: Floor, stop: Floor) -> QueueWalk {
        if start == stop {
            return QueueWalk { elapsed: 0, floor: start };
        }

        let sweep = queue.sweep();
        let dwell = u64::from(self.config().dwell_duration);
        let mut elapsed = 0u64;
        let mut cur = start;

        for floor in queue.floors() {
            if sweep.reached(floor, stop) {
                elapsed += self.travel_cost(cur, stop);
                return QueueWalk { elapsed, floor: stop };
            }
            if floor != cur {
                elapsed += dwell + self.travel_cost(cur, floor);
                cur = floor;
            }
        }

        if stop.in_building(self.num_floors()) {
            elapsed += self.travel_cost(cur, stop);
            cur = stop;
        }
        QueueWalk { elapsed, floor: cur }
    }

    #[inline]
    fn travel_cost(&self, from: Floor, to: Floor) -> u64 {
        u64::from(from.distance(to)) * u64::from(self.config().travel_time_per_floor)
    }
}
