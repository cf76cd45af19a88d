//! The `Sim` struct and its tick loop.

use fleet_agent::{DeliveryAgent, FleetCounters, Receiver, Sender, StepContext};
use fleet_core::{AgentId, SimClock, SimConfig, SimRng, Tick};
use fleet_grid::{AStarPathfinder, Grid, Pathfinder};

use crate::{FleetStats, NoopObserver, SimObserver, SimResult};

/// The delivery fleet and everything it operates on.
///
/// Agents are stepped sequentially in ascending `AgentId` order.  Each step
/// mutates the grid and sender claims in place, so later agents in a tick see
/// the effects of earlier ones.  Given the same config, positions and
/// pathfinder, two runs produce identical results.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: Pathfinder = AStarPathfinder> {
    /// Configuration the fleet was built from.
    pub config: SimConfig,

    pub(crate) clock:      SimClock,
    pub(crate) grid:       Grid,
    pub(crate) agents:     Vec<DeliveryAgent>,
    pub(crate) senders:    Vec<Sender>,
    pub(crate) receivers:  Vec<Receiver>,
    pub(crate) counters:   FleetCounters,
    pub(crate) stats:      FleetStats,
    /// Task-selection stream.
    pub(crate) rng:        SimRng,
    pub(crate) pathfinder: P,
}

impl<P: Pathfinder> Sim<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Advance every agent by one tick.
    pub fn tick(&mut self) -> SimResult<()> {
        self.tick_observed(&mut NoopObserver)
    }

    /// Run the simulation from the current tick to `config.total_ticks`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick.0 < self.config.total_ticks {
            self.tick_observed(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick, &self.stats);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores
    /// `total_ticks`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.tick_observed(observer)?;
        }
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    /// All agents in id order.
    #[inline]
    pub fn agents(&self) -> &[DeliveryAgent] {
        &self.agents
    }

    pub fn agent(&self, id: AgentId) -> Option<&DeliveryAgent> {
        self.agents.get(id.index())
    }

    #[inline]
    pub fn senders(&self) -> &[Sender] {
        &self.senders
    }

    #[inline]
    pub fn receivers(&self) -> &[Receiver] {
        &self.receivers
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn counters(&self) -> &FleetCounters {
        &self.counters
    }

    /// Statistics as of the end of the last tick.
    #[inline]
    pub fn stats(&self) -> &FleetStats {
        &self.stats
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn tick_observed<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;

        observer.on_tick_start(now);
        self.step_agents(now, observer)?;
        self.stats = FleetStats::collect(&self.agents, &self.senders, &self.counters);
        observer.on_tick_end(now, &self.stats);

        let interval = self.config.snapshot_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, &self.agents);
        }

        self.clock.advance();
        Ok(())
    }

    fn step_agents<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<()> {
        for agent in self.agents.iter_mut() {
            let mut ctx = StepContext {
                grid:       &mut self.grid,
                senders:    &mut self.senders,
                receivers:  &self.receivers,
                counters:   &mut self.counters,
                rng:        &mut self.rng,
                pathfinder: &self.pathfinder,
            };
            for event in agent.step(&mut ctx)? {
                observer.on_agent_event(now, agent.id(), &event);
            }
        }
        Ok(())
    }
}
