//! Simulation observer trait for progress reporting and data collection.

use fleet_agent::{AgentEvent, DeliveryAgent};
use fleet_core::{AgentId, Tick};

use crate::FleetStats;

/// Callbacks invoked by [`Sim`][crate::Sim] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, stats: &FleetStats) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: {} delivered", stats.completed_deliveries);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any agent is stepped.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called for every event an agent produced, in the order produced.
    fn on_agent_event(&mut self, _tick: Tick, _agent: AgentId, _event: &AgentEvent) {}

    /// Called after all agents have stepped and stats are recomputed.
    fn on_tick_end(&mut self, _tick: Tick, _stats: &FleetStats) {}

    /// Called every `config.snapshot_interval_ticks` ticks, after
    /// `on_tick_end`, with the full agent list in id order.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &[DeliveryAgent]) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_tick: Tick, _stats: &FleetStats) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
