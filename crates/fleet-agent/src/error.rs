use fleet_core::{AgentId, ReceiverId, SenderId};
use fleet_grid::SpatialError;
use thiserror::Error;

/// Inconsistencies between an agent and the world it is stepped against.
///
/// These indicate a wiring bug in the caller, not a simulation condition:
/// contention and unreachable targets are handled inside the step.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("agent {agent} is assigned to unknown sender {sender}")]
    UnknownSender { agent: AgentId, sender: SenderId },

    #[error("agent {agent} is assigned to unknown receiver {receiver}")]
    UnknownReceiver { agent: AgentId, receiver: ReceiverId },

    #[error("grid update failed: {0}")]
    Spatial(#[from] SpatialError),
}

pub type AgentResult<T> = Result<T, AgentError>;
