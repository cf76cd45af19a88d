/// Running totals updated by agents as they step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetCounters {
    /// Deliveries completed since the start of the run.
    pub completed_deliveries: u64,

    /// Hops taken by all agents since the start of the run.
    pub total_distance: u64,

    /// Route computations that came back empty while the agent was not
    /// already on its target.
    pub routing_failures: u64,
}

impl FleetCounters {
    /// Mean hops per completed delivery; 0 before the first delivery.
    pub fn average_distance_per_delivery(&self) -> f64 {
        if self.completed_deliveries == 0 {
            return 0.0;
        }
        self.total_distance as f64 / self.completed_deliveries as f64
    }
}
