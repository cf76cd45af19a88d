//! Routing trait and default grid A* implementation.
//!
//! # Pluggability
//!
//! Agents call routing through the [`Pathfinder`] trait, so the simulation
//! can be run with a different search (plain BFS, jump-point search, a
//! reservation-table planner) without touching the agent state machine.
//!
//! # Costs
//!
//! Every hop costs 1, diagonal or not.  The default heuristic is the
//! Manhattan distance, which overestimates on diagonal-heavy routes; routes
//! are therefore not guaranteed shortest once obstacles force a detour.  On
//! an open grid the search still walks diagonals first and returns routes of
//! Chebyshev length.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use fleet_core::Cell;

use crate::Grid;

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: cells to visit in order, excluding the
/// start cell and ending at the target.  Empty when no route exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub cells: Vec<Cell>,
}

impl Route {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of hops.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Final cell of the route.
    pub fn target(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}

// ── Pathfinder trait ──────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` and keep all search state local to
/// the call, so routes may be computed against the same grid from several
/// places without interfering.
pub trait Pathfinder: Send + Sync {
    /// Compute a route from `start` to `target` against the current
    /// occupancy of `grid`.
    ///
    /// Occupied cells are impassable except `target` itself.  Returns an
    /// empty route if `target` is unreachable or `start == target`.
    fn route(&self, grid: &Grid, start: Cell, target: Cell) -> Route;
}

// ── AStarPathfinder ───────────────────────────────────────────────────────────

/// A* over the 8-connected grid with unit hop cost and a Manhattan heuristic.
///
/// The open set is ordered by `f = g + h`; equal `f` values pop in insertion
/// order.  A node is re-queued only when a strictly cheaper `g` is found;
/// there is no closed set.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarPathfinder;

impl Pathfinder for AStarPathfinder {
    fn route(&self, grid: &Grid, start: Cell, target: Cell) -> Route {
        astar(grid, start, target)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

#[inline]
fn heuristic(cell: Cell, target: Cell) -> u32 {
    cell.manhattan(target)
}

fn astar(grid: &Grid, start: Cell, target: Cell) -> Route {
    if !grid.contains(start) || !grid.contains(target) {
        return Route::default();
    }

    let n = grid.cell_count();
    // g_score[c] = best known hop count from start to c.
    let mut g_score   = vec![u32::MAX; n];
    // came_from[c] = predecessor on the best known route; None if unreached.
    let mut came_from = vec![None::<Cell>; n];

    g_score[grid.index_of(start)] = 0;

    // Min-heap on (f, seq).  `seq` is a push counter so equal f values pop
    // first-in first-out.
    let mut seq: u64 = 0;
    let mut open: BinaryHeap<Reverse<(u32, u64, Cell)>> = BinaryHeap::new();
    open.push(Reverse((heuristic(start, target), seq, start)));

    while let Some(Reverse((_, _, current))) = open.pop() {
        if current == target {
            return reconstruct(grid, &came_from, target);
        }

        let g = g_score[grid.index_of(current)];
        for neighbor in grid.neighbors(current) {
            if neighbor != target && !grid.is_cell_empty(neighbor) {
                continue;
            }

            let tentative = g + 1;
            let ni = grid.index_of(neighbor);
            if tentative < g_score[ni] {
                came_from[ni] = Some(current);
                g_score[ni]   = tentative;
                seq += 1;
                open.push(Reverse((tentative + heuristic(neighbor, target), seq, neighbor)));
            }
        }
    }

    Route::default()
}

/// Walk `came_from` back from `target` until the start (the only reached
/// cell without a predecessor), then reverse.
fn reconstruct(grid: &Grid, came_from: &[Option<Cell>], target: Cell) -> Route {
    let mut cells = Vec::new();
    let mut cur = target;
    while let Some(prev) = came_from[grid.index_of(cur)] {
        cells.push(cur);
        cur = prev;
    }
    cells.reverse();
    Route { cells }
}
