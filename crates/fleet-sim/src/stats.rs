//! Fleet-wide statistics recomputed at the end of every tick.

use fleet_agent::{DeliveryAgent, FleetCounters, Sender};

/// A snapshot of how the fleet is doing.
///
/// Everything here is derived from the agents, senders and
/// [`FleetCounters`]; nothing is accumulated separately.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetStats {
    pub completed_deliveries: u64,
    pub total_distance:       u64,
    pub routing_failures:     u64,

    /// Hops per completed delivery; 0 before the first delivery.
    pub average_distance_per_delivery: f64,

    /// Hops per agent; 0 for an empty fleet.
    pub average_distance_per_agent: f64,

    /// Senders currently claimed, i.e. deliveries in flight.
    pub pending_deliveries: usize,

    /// Agents carrying a package.
    pub active_agents: usize,

    /// Agents not carrying a package (including those heading to a pickup).
    pub idle_agents: usize,

    /// `active_agents` as a percentage of the fleet, in `[0, 100]`.
    pub utilization_pct: f64,
}

impl FleetStats {
    pub fn collect(
        agents:   &[DeliveryAgent],
        senders:  &[Sender],
        counters: &FleetCounters,
    ) -> Self {
        let active = agents.iter().filter(|a| a.has_package()).count();
        let fleet  = agents.len();

        let average_distance_per_agent = if fleet == 0 {
            0.0
        } else {
            counters.total_distance as f64 / fleet as f64
        };

        Self {
            completed_deliveries: counters.completed_deliveries,
            total_distance:       counters.total_distance,
            routing_failures:     counters.routing_failures,
            average_distance_per_delivery: counters.average_distance_per_delivery(),
            average_distance_per_agent,
            pending_deliveries:   senders.iter().filter(|s| s.claimed).count(),
            active_agents:        active,
            idle_agents:          fleet - active,
            utilization_pct:      active as f64 / fleet.max(1) as f64 * 100.0,
        }
    }
}
