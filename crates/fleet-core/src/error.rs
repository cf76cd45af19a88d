//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `FleetError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::Cell;

/// The top-level error type for `fleet-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FleetError {
    #[error("cell {cell} is outside the {width}x{height} grid")]
    OutOfBounds { cell: Cell, width: u32, height: u32 },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `fleet-*` crates.
pub type FleetResult<T> = Result<T, FleetError>;
