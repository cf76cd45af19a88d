//! Unit tests for fleet-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, ReceiverId, SenderId};

    #[test]
    fn index_matches_inner() {
        assert_eq!(AgentId(42).index(), 42);
        assert_eq!(ReceiverId(0).index(), 0);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(SenderId(100) > SenderId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(SenderId::INVALID.0, u32::MAX);
        assert_eq!(ReceiverId::default(), ReceiverId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(SenderId(3).to_string(), "SenderId(3)");
    }
}

#[cfg(test)]
mod cell {
    use crate::Cell;

    #[test]
    fn chebyshev_counts_king_moves() {
        assert_eq!(Cell::new(2, 2).chebyshev(Cell::new(0, 0)), 2);
        assert_eq!(Cell::new(0, 0).chebyshev(Cell::new(4, 4)), 4);
        assert_eq!(Cell::new(0, 0).chebyshev(Cell::new(5, 1)), 5);
        assert_eq!(Cell::new(3, 3).chebyshev(Cell::new(3, 3)), 0);
    }

    #[test]
    fn manhattan_sums_axes() {
        assert_eq!(Cell::new(2, 2).manhattan(Cell::new(0, 0)), 4);
        assert_eq!(Cell::new(1, 5).manhattan(Cell::new(4, 1)), 7);
    }

    #[test]
    fn adjacency_excludes_self() {
        let c = Cell::new(1, 1);
        assert!(!c.is_adjacent(c));
        assert!(c.is_adjacent(Cell::new(0, 0)));
        assert!(c.is_adjacent(Cell::new(2, 1)));
        assert!(!c.is_adjacent(Cell::new(3, 1)));
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(3, 4).to_string(), "(3, 4)");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn clock_advances() {
        let mut clock = SimClock::new();
        assert_eq!(clock.current_tick, Tick::ZERO);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert_eq!(clock.current_tick.to_string(), "T2");
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
            let a: u64 = r1.gen_range(0..u64::MAX);
            let b: u64 = r2.gen_range(0..u64::MAX);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn child_streams_diverge() {
        let mut root = SimRng::new(1);
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        let a: u64 = c0.gen_range(0..u64::MAX);
        let b: u64 = c1.gen_range(0..u64::MAX);
        assert_ne!(a, b);
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0u32..5);
            assert!(v < 5);
        }
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u32; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[9]), Some(&9));
    }
}

#[cfg(test)]
mod config {
    use crate::{Cell, FleetError, SimConfig};

    #[test]
    fn default_starts_at_centre() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.start_cell(), Cell::new(10, 10));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_sized_grid_rejected() {
        let cfg = SimConfig { width: 0, ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(FleetError::Config(_))));
    }

    #[test]
    fn senders_without_receivers_rejected() {
        let cfg = SimConfig { num_receivers: 0, ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(FleetError::Config(_))));
    }

    #[test]
    fn start_outside_grid_rejected() {
        let cfg = SimConfig {
            width:  5,
            height: 5,
            start:  Some(Cell::new(5, 0)),
            ..SimConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(FleetError::OutOfBounds { .. })));
    }
}
