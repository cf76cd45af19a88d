use fleet_agent::AgentError;
use fleet_core::{Cell, FleetError};
use fleet_grid::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Fleet(#[from] FleetError),

    #[error("{what} length {got} does not match configured count {expected}")]
    CountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("{what}: cell {cell} is outside the {width}x{height} grid")]
    PositionOutOfBounds {
        what:   &'static str,
        cell:   Cell,
        width:  u32,
        height: u32,
    },

    #[error("grid error: {0}")]
    Spatial(#[from] SpatialError),

    #[error("agent step failed: {0}")]
    Agent(#[from] AgentError),
}

pub type SimResult<T> = Result<T, SimError>;
