//! `fleet-grid`: occupancy grid and routing.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`grid`]       | `Grid` (bounded, multi-occupancy, Moore neighbourhood)   |
//! | [`pathfinder`] | `Pathfinder` trait, `Route`, `AStarPathfinder`           |
//! | [`error`]      | `SpatialError`, `SpatialResult<T>`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod grid;
pub mod pathfinder;


pub use error::{SpatialError, SpatialResult};
pub use grid::{Grid, Occupant};
pub use pathfinder::{AStarPathfinder, Pathfinder, Route};
