//! Plain data row types written by output backends.

use fleet_agent::{AgentState, DeliveryAgent};
use fleet_core::Tick;
use fleet_sim::FleetStats;

/// One agent's position and state at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSnapshotRow {
    pub agent_id:          u32,
    pub tick:              u64,
    pub x:                 u32,
    pub y:                 u32,
    pub state:             AgentState,
    pub has_package:       bool,
    /// Hops left on the current route.
    pub path_len:          u32,
    pub distance_traveled: u64,
}

impl AgentSnapshotRow {
    pub fn from_agent(tick: Tick, agent: &DeliveryAgent) -> Self {
        let cell = agent.cell();
        Self {
            agent_id:          agent.id().0,
            tick:              tick.0,
            x:                 cell.x,
            y:                 cell.y,
            state:             agent.state(),
            has_package:       agent.has_package(),
            path_len:          agent.path().len() as u32,
            distance_traveled: agent.distance_traveled(),
        }
    }
}

/// Fleet statistics at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:                 u64,
    pub completed_deliveries: u64,
    pub total_distance:       u64,
    pub pending_deliveries:   u64,
    pub active_agents:        u64,
    pub routing_failures:     u64,
    pub utilization_pct:      f64,
}

impl TickSummaryRow {
    pub fn from_stats(tick: Tick, stats: &FleetStats) -> Self {
        Self {
            tick:                 tick.0,
            completed_deliveries: stats.completed_deliveries,
            total_distance:       stats.total_distance,
            pending_deliveries:   stats.pending_deliveries as u64,
            active_agents:        stats.active_agents as u64,
            routing_failures:     stats.routing_failures,
            utilization_pct:      stats.utilization_pct,
        }
    }
}
