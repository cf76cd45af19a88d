//! Bounded multi-occupancy grid.
//!
//! # Data layout
//!
//! Cells are stored row-major in a single `Vec`, one occupant list per cell:
//!
//! ```text
//! cells[ y * width + x ]  →  Vec<Occupant>
//! ```
//!
//! Several occupants may share a cell (two agents passing, an agent standing
//! on its sender).  A cell is *empty* only when its list is empty; routing
//! and hop checks treat every non-empty cell as blocked except the mover's
//! own target.  The grid does not wrap around at its edges.

use fleet_core::{AgentId, Cell, ReceiverId, SenderId};

use crate::{SpatialError, SpatialResult};

/// Relative offsets of the Moore neighbourhood, column-major.
const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

// ── Occupant ──────────────────────────────────────────────────────────────────

/// Anything that can stand on a cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupant {
    Agent(AgentId),
    Sender(SenderId),
    Receiver(ReceiverId),
    /// Placeholder that keeps the agents' start cell blocked.
    Depot,
}

impl Occupant {
    #[inline]
    pub fn is_agent(self) -> bool {
        matches!(self, Occupant::Agent(_))
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// Occupancy grid shared by every agent in the simulation.
///
/// The grid is owned by the simulation and lent to one agent at a time, so
/// mutations are visible to agents stepped later in the same tick.
#[derive(Clone, Debug)]
pub struct Grid {
    width:  u32,
    height: u32,
    cells:  Vec<Vec<Occupant>>,
}

impl Grid {
    /// Create an empty `width × height` grid.
    pub fn new(width: u32, height: u32) -> Self {
        let n = width as usize * height as usize;
        Self { width, height, cells: vec![Vec::new(); n] }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// `true` if `cell` lies on the grid.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Row-major index of `cell`.  Only meaningful when `contains(cell)`.
    #[inline]
    pub fn index_of(&self, cell: Cell) -> usize {
        cell.y as usize * self.width as usize + cell.x as usize
    }

    // ── Occupancy queries ─────────────────────────────────────────────────

    /// `true` if nothing stands on `cell`.  Off-grid cells are never empty.
    #[inline]
    pub fn is_cell_empty(&self, cell: Cell) -> bool {
        self.contains(cell) && self.cells[self.index_of(cell)].is_empty()
    }

    /// Everything currently on `cell`, in placement order.
    pub fn occupants(&self, cell: Cell) -> &[Occupant] {
        if !self.contains(cell) {
            return &[];
        }
        &self.cells[self.index_of(cell)]
    }

    /// Number of agents on `cell`.
    pub fn agents_at(&self, cell: Cell) -> usize {
        self.occupants(cell).iter().filter(|o| o.is_agent()).count()
    }

    /// The up-to-8 cells around `cell`, clipped at the grid boundary.
    ///
    /// Order is fixed (column-major over the 3×3 block, centre skipped) so
    /// searches that depend on expansion order stay reproducible.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        MOORE_OFFSETS.iter().filter_map(move |&(dx, dy)| {
            let x = cell.x as i64 + dx;
            let y = cell.y as i64 + dy;
            let on_grid = x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64;
            on_grid.then(|| Cell::new(x as u32, y as u32))
        })
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Put `occupant` on `cell`.
    pub fn place(&mut self, occupant: Occupant, cell: Cell) -> SpatialResult<()> {
        self.check_bounds(cell)?;
        let i = self.index_of(cell);
        self.cells[i].push(occupant);
        Ok(())
    }

    /// Take `occupant` off `cell`.  Returns `false` if it was not there.
    pub fn remove(&mut self, occupant: Occupant, cell: Cell) -> bool {
        if !self.contains(cell) {
            return false;
        }
        let i = self.index_of(cell);
        let list = &mut self.cells[i];
        match list.iter().position(|&o| o == occupant) {
            Some(pos) => {
                list.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Move `agent` one hop from `from` to the adjacent cell `to`.
    ///
    /// Does not check whether `to` is empty; callers decide enterability.
    pub fn move_agent(&mut self, agent: AgentId, from: Cell, to: Cell) -> SpatialResult<()> {
        self.check_bounds(to)?;
        if !from.is_adjacent(to) {
            return Err(SpatialError::NotAdjacent { agent, from, to });
        }
        let occupant = Occupant::Agent(agent);
        if !self.remove(occupant, from) {
            return Err(SpatialError::NotAtCell { occupant, cell: from });
        }
        let i = self.index_of(to);
        self.cells[i].push(occupant);
        Ok(())
    }

    fn check_bounds(&self, cell: Cell) -> SpatialResult<()> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(SpatialError::OutOfBounds { cell, width: self.width, height: self.height })
        }
    }
}
