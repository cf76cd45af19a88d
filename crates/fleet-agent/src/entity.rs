//! Stationary endpoints of a delivery.

use fleet_core::{Cell, ReceiverId, SenderId};

/// A pickup point.  Linked to exactly one receiver for its whole lifetime.
///
/// `claimed` is `true` while exactly one agent holds an assignment
/// referencing this sender.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sender {
    pub id:       SenderId,
    pub cell:     Cell,
    pub receiver: ReceiverId,
    pub claimed:  bool,
}

impl Sender {
    pub fn new(id: SenderId, cell: Cell, receiver: ReceiverId) -> Self {
        Self { id, cell, receiver, claimed: false }
    }
}

/// A drop-off point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Receiver {
    pub id:   ReceiverId,
    pub cell: Cell,
}

impl Receiver {
    pub fn new(id: ReceiverId, cell: Cell) -> Self {
        Self { id, cell }
    }
}
