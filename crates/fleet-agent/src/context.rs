//! Shared simulation state lent to an agent for one step.

use fleet_core::{Cell, SimRng};
use fleet_grid::{Grid, Pathfinder};

use crate::{FleetCounters, Receiver, Sender};

/// Mutable view of everything an agent may read or change while stepping.
///
/// Built by the driver once per agent per tick.  Because the borrows are
/// exclusive, agents can only be stepped one at a time, and each sees the
/// moves and claims made by agents stepped before it in the same tick.
pub struct StepContext<'a, P: Pathfinder + ?Sized> {
    /// Occupancy grid.  The stepping agent moves itself here.
    pub grid: &'a mut Grid,

    /// All senders, indexed by `SenderId`.  Claims are taken and released here.
    pub senders: &'a mut [Sender],

    /// All receivers, indexed by `ReceiverId`.
    pub receivers: &'a [Receiver],

    /// Global counters.
    pub counters: &'a mut FleetCounters,

    /// Task-selection RNG.
    pub rng: &'a mut SimRng,

    /// Routing engine.
    pub pathfinder: &'a P,
}

impl<P: Pathfinder + ?Sized> StepContext<'_, P> {
    /// Route from `start` to `target` against the current grid occupancy.
    #[inline]
    pub fn route(&self, start: Cell, target: Cell) -> Vec<Cell> {
        self.pathfinder.route(&*self.grid, start, target).into_cells()
    }
}
