//! Top-level simulation configuration.
//!
//! Typically built in code or loaded from a JSON file by the application
//! crate (with the `serde` feature) and handed to `fleet_sim::SimBuilder`.

use crate::{Cell, FleetError, FleetResult};

/// Parameters of one simulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Grid width in cells.
    pub width: u32,

    /// Grid height in cells.
    pub height: u32,

    /// Number of delivery agents.
    pub num_agents: usize,

    /// Number of senders (pickup points).
    pub num_senders: usize,

    /// Number of receivers.  Sender `i` delivers to receiver
    /// `i % num_receivers`.
    pub num_receivers: usize,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Cell every agent starts on.  `None` means the grid centre
    /// `(width / 2, height / 2)`.
    pub start: Option<Cell>,

    /// Keep the start cell permanently occupied by a depot marker, so agents
    /// leave it and never route back through it.
    pub occupy_depot: bool,

    /// Total ticks for `Sim::run`.
    pub total_ticks: u64,

    /// Report an agent snapshot every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width:                   20,
            height:                  20,
            num_agents:              3,
            num_senders:             2,
            num_receivers:           2,
            seed:                    42,
            start:                   None,
            occupy_depot:            false,
            total_ticks:             200,
            snapshot_interval_ticks: 1,
        }
    }
}

impl SimConfig {
    /// The cell agents are placed on at build time.
    pub fn start_cell(&self) -> Cell {
        self.start
            .unwrap_or(Cell::new(self.width / 2, self.height / 2))
    }

    /// Reject configurations no simulation can be built from.
    pub fn validate(&self) -> FleetResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FleetError::Config(format!(
                "grid must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.num_senders > 0 && self.num_receivers == 0 {
            return Err(FleetError::Config(
                "senders need at least one receiver to deliver to".into(),
            ));
        }
        let start = self.start_cell();
        if start.x >= self.width || start.y >= self.height {
            return Err(FleetError::OutOfBounds {
                cell:   start,
                width:  self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
