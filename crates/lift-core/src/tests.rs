//! Unit tests for lift-core primitives.

#[cfg(test)]
mod floor {
    use crate::Floor;

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(Floor(2).distance(Floor(7)), 5);
        assert_eq!(Floor(7).distance(Floor(2)), 5);
        assert_eq!(Floor(4).distance(Floor(4)), 0);
    }

    #[test]
    fn in_building_bounds() {
        assert!(!Floor(0).in_building(10));
        assert!(Floor(1).in_building(10));
        assert!(Floor(10).in_building(10));
        assert!(!Floor(11).in_building(10));
    }

    #[test]
    fn sentinels_sit_outside_the_building() {
        assert!(!Floor::BELOW_BOTTOM.in_building(10));
        assert_eq!(Floor::above_top(10), Floor(11));
        assert!(!Floor::above_top(10).in_building(10));
    }

    #[test]
    fn down_saturates() {
        assert_eq!(Floor(3).down(), Floor(2));
        assert_eq!(Floor(0).down(), Floor(0));
        assert_eq!(Floor(3).up(), Floor(4));
    }
}

#[cfg(test)]
mod ids {
    use crate::ElevatorId;

    #[test]
    fn index_and_order() {
        let id = ElevatorId(3);
        assert_eq!(id.index(), 3);
        assert!(ElevatorId(0) < id);
    }

    #[test]
    fn display() {
        assert_eq!(ElevatorId(7).to_string(), "ElevatorId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5);
    }

    #[test]
    fn clock_advances_one_tick() {
        let mut clock = SimClock::new();
        assert_eq!(clock.current_tick, Tick::ZERO);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert_eq!(clock.elapsed(), 2);
        assert_eq!(clock.to_string(), "T2");
    }
}

#[cfg(test)]
mod direction {
    use crate::{Direction, DirectionState, Floor};

    #[test]
    fn between_floors() {
        assert_eq!(Direction::between(Floor(2), Floor(5)), Some(Direction::Up));
        assert_eq!(Direction::between(Floor(5), Floor(2)), Some(Direction::Down));
        assert_eq!(Direction::between(Floor(5), Floor(5)), None);
    }

    #[test]
    fn reached_respects_sweep() {
        assert!(Direction::Up.reached(Floor(6), Floor(5)));
        assert!(Direction::Up.reached(Floor(5), Floor(5)));
        assert!(!Direction::Up.reached(Floor(4), Floor(5)));
        assert!(Direction::Down.reached(Floor(4), Floor(5)));
        assert!(!Direction::Down.reached(Floor(6), Floor(5)));
    }

    #[test]
    fn sentinels() {
        assert_eq!(Direction::Up.sentinel(10), Floor(11));
        assert_eq!(Direction::Down.sentinel(10), Floor(0));
    }

    #[test]
    fn state_labels() {
        assert_eq!(DirectionState::default(), DirectionState::Idle);
        assert!(!DirectionState::Idle.is_active());
        assert!(DirectionState::Ascending.is_active());
        assert_eq!(DirectionState::Descending.to_string(), "descending");
        assert_eq!(DirectionState::from(Direction::Up), DirectionState::Ascending);
        assert_eq!(DirectionState::Descending.direction(), Some(Direction::Down));
    }
}

#[cfg(test)]
mod request {
    use std::collections::{BTreeSet, BinaryHeap};
    use std::cmp::Reverse;

    use crate::{Floor, StopRequest};

    fn floors(v: &[u32]) -> BTreeSet<Floor> {
        v.iter().copied().map(Floor).collect()
    }

    #[test]
    fn identity_is_pickup_only() {
        let a = StopRequest::with_drop_off(Floor(3), Floor(7));
        let b = StopRequest::with_drop_off(Floor(3), Floor(1));
        let c = StopRequest::new(Floor(4));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.cmp(&b), std::cmp::Ordering::Equal);
    }

    #[test]
    fn ordering_by_pickup() {
        let low = StopRequest::with_drop_off(Floor(2), Floor(5));
        let high = StopRequest::with_drop_off(Floor(3), Floor(7));
        assert!(low < high);
        assert!(high > low);
    }

    #[test]
    fn min_heap_peeks_lowest_pickup() {
        let mut heap = BinaryHeap::new();
        heap.push(Reverse(StopRequest::with_drop_off(Floor(3), Floor(7))));
        heap.push(Reverse(StopRequest::with_drop_off(Floor(2), Floor(5))));
        let Reverse(top) = heap.peek().unwrap();
        assert_eq!(top.pickup, Floor(2));
    }

    #[test]
    fn duplicate_drop_offs_collapse() {
        let r = StopRequest::with_drop_offs(Floor(1), [Floor(6), Floor(7), Floor(6)]);
        assert_eq!(r.drop_offs(), &floors(&[6, 7]));
        assert!(r.has_drop_offs());
        assert!(!StopRequest::new(Floor(1)).has_drop_offs());
    }

    #[test]
    fn merge_unions_destinations() {
        let mut a = StopRequest::with_drop_offs(Floor(5), [Floor(1), Floor(2)]);
        let b = StopRequest::with_drop_offs(Floor(5), [Floor(2), Floor(9)]);
        assert!(a.merge(b));
        assert_eq!(a.drop_offs(), &floors(&[1, 2, 9]));
    }

    #[test]
    fn merge_into_itself_is_idempotent() {
        let mut a = StopRequest::with_drop_offs(Floor(5), [Floor(1), Floor(2)]);
        assert!(a.merge(a.clone()));
        assert_eq!(a.drop_offs(), &floors(&[1, 2]));
    }

    #[test]
    fn merge_rejects_other_pickup() {
        let mut a = StopRequest::with_drop_off(Floor(5), Floor(1));
        assert!(!a.merge(StopRequest::with_drop_off(Floor(6), Floor(2))));
        assert_eq!(a.drop_offs(), &floors(&[1]));
    }

    #[test]
    fn boarding_yields_bare_requests() {
        let r = StopRequest::with_drop_offs(Floor(1), [Floor(7), Floor(6)]);
        let boarded: Vec<StopRequest> = r.into_boarded().collect();
        let pickups: Vec<Floor> = boarded.iter().map(|r| r.pickup).collect();
        assert_eq!(pickups, vec![Floor(6), Floor(7)]);
        assert!(boarded.iter().all(|r| !r.has_drop_offs()));
    }

    #[test]
    fn display() {
        assert_eq!(StopRequest::new(Floor(4)).to_string(), "pickup 4");
        let r = StopRequest::with_drop_offs(Floor(1), [Floor(7), Floor(6)]);
        assert_eq!(r.to_string(), "pickup 1 -> [6, 7]");
    }
}

#[cfg(test)]
mod config {
    use crate::{BuildingConfig, ElevatorConfig, Floor, LiftError};

    #[test]
    fn defaults() {
        let cfg = ElevatorConfig::new(10);
        assert_eq!(cfg.dwell_duration, 2);
        assert_eq!(cfg.travel_time_per_floor, 1);
        assert_eq!(cfg.start_floor, Floor(1));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn too_few_floors() {
        let err = ElevatorConfig::new(1).validate().unwrap_err();
        assert!(matches!(err, LiftError::InvalidConfig(_)));
    }

    #[test]
    fn zero_timings_rejected() {
        let mut cfg = ElevatorConfig::new(5);
        cfg.dwell_duration = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = ElevatorConfig::new(5);
        cfg.travel_time_per_floor = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn start_floor_must_be_in_building() {
        let mut cfg = ElevatorConfig::new(5);
        cfg.start_floor = Floor(6);
        assert!(cfg.validate().is_err());
        cfg.start_floor = Floor(0);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn building_needs_an_elevator() {
        assert!(BuildingConfig::new(10, 4).validate().is_ok());
        assert!(matches!(
            BuildingConfig::new(10, 0).validate(),
            Err(LiftError::InvalidConfig(_))
        ));
        assert!(BuildingConfig::new(1, 2).validate().is_err());
    }

    #[test]
    fn building_elevator_config_copies_timings() {
        let mut b = BuildingConfig::new(12, 3);
        b.dwell_duration = 4;
        b.travel_time_per_floor = 3;
        let e = b.elevator_config();
        assert_eq!(e.num_floors, 12);
        assert_eq!(e.dwell_duration, 4);
        assert_eq!(e.travel_time_per_floor, 3);
        assert_eq!(e.start_floor, Floor::GROUND);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: u32 = r1.gen_range(1..=10);
            let b: u32 = r2.gen_range(1..=10);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        assert!(rng.gen_bool(2.0)); // clamped
    }
}

#[cfg(test)]
mod error {
    use crate::{Floor, LiftError};

    #[test]
    fn invalid_floor_message() {
        let e = LiftError::InvalidFloor { floor: Floor(12), num_floors: 10 };
        assert_eq!(e.to_string(), "floor 12 is outside the building (valid floors are 1..=10)");
    }
}
