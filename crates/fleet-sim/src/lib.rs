//! `fleet-sim`: builds a delivery fleet and drives it tick by tick.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① on_tick_start
//!   ② Step      : every agent, ascending AgentId, one at a time.  Each
//!                 sees the moves and claims of agents stepped before it.
//!   ③ Stats     : recompute FleetStats from agents, senders and counters.
//!   ④ on_tick_end, on_snapshot (every snapshot_interval_ticks)
//!   ⑤ advance the clock
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fleet_core::SimConfig;
//! use fleet_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("{} deliveries", sim.stats().completed_deliveries);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod stats;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use stats::FleetStats;
