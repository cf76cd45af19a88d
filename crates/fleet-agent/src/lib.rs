//! `fleet-agent`: delivery agents and the work they do.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`entity`]     | `Sender`, `Receiver`: stationary pickup / drop-off points   |
//! | [`assignment`] | `find_work`: uniform random claim of an unclaimed sender    |
//! | [`agent`]      | `DeliveryAgent` state machine, `AgentState`, `AgentEvent`    |
//! | [`context`]    | `StepContext`: shared state lent to one agent for one step  |
//! | [`counters`]   | `FleetCounters`: completed deliveries, distance, failures   |
//! | [`error`]      | `AgentError`, `AgentResult<T>`                               |
//!
//! # Design notes
//!
//! Only `DeliveryAgent` has behaviour.  Senders and receivers are plain
//! records; the grid sees all three as [`fleet_grid::Occupant`] variants.
//!
//! Agents mutate the shared grid and sender claims in place while they are
//! stepped, so whoever drives them must do so one at a time in a fixed
//! order.  Nothing in a step is fatal: no work, no route, and blocked hops
//! all leave the agent in a state it can retry from next tick.

pub mod agent;
pub mod assignment;
pub mod context;
pub mod counters;
pub mod entity;
pub mod error;


pub use agent::{AgentEvent, AgentState, Assignment, DeliveryAgent};
pub use assignment::find_work;
pub use context::StepContext;
pub use counters::FleetCounters;
pub use entity::{Receiver, Sender};
pub use error::{AgentError, AgentResult};
