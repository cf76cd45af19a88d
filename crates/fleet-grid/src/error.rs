//! Spatial-subsystem error type.

use thiserror::Error;

use fleet_core::{AgentId, Cell};

use crate::Occupant;

/// Errors produced by `fleet-grid`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("cell {cell} is outside the {width}x{height} grid")]
    OutOfBounds { cell: Cell, width: u32, height: u32 },

    #[error("{occupant:?} is not at {cell}")]
    NotAtCell { occupant: Occupant, cell: Cell },

    #[error("agent {agent} cannot move from {from} to non-adjacent {to}")]
    NotAdjacent { agent: AgentId, from: Cell, to: Cell },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
