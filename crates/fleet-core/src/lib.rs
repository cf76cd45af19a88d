//! `fleet-core`: foundational types for the delivery fleet simulation.
//!
//! This crate is a dependency of every other `fleet-*` crate.  It has no
//! `fleet-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `AgentId`, `SenderId`, `ReceiverId`                   |
//! | [`cell`]    | `Cell`, Chebyshev / Manhattan distance                |
//! | [`time`]    | `Tick`, `SimClock`                                    |
//! | [`rng`]     | `SimRng` (seeded, injectable)                         |
//! | [`config`]  | `SimConfig`                                           |
//! | [`error`]   | `FleetError`, `FleetResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cell;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use config::SimConfig;
pub use error::{FleetError, FleetResult};
pub use ids::{AgentId, ReceiverId, SenderId};
pub use rng::SimRng;
pub use time::{SimClock, Tick};
