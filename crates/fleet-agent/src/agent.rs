//! The delivery agent state machine.
//!
//! ```text
//!            find_work ok                 at sender
//!   Idle ───────────────► EnRouteToSender ─────────► EnRouteToReceiver
//!    ▲                                                      │
//!    └──────────────────── at receiver: deliver ────────────┘
//! ```
//!
//! Each call to [`DeliveryAgent::step`] runs one tick of this machine.  An
//! agent that claims work continues into its first hop in the same tick.

use std::collections::VecDeque;
use std::fmt;

use fleet_core::{AgentId, Cell, ReceiverId, SenderId};
use fleet_grid::Pathfinder;
use tracing::{debug, warn};

use crate::{AgentError, AgentResult, StepContext, find_work};

// ── AgentState ────────────────────────────────────────────────────────────────

/// Coarse state of an agent, derived from its assignment and package flag.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentState {
    #[default]
    Idle,
    EnRouteToSender,
    EnRouteToReceiver,
}

impl AgentState {
    /// Label used in CSV output and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            AgentState::Idle              => "idle",
            AgentState::EnRouteToSender   => "to_sender",
            AgentState::EnRouteToReceiver => "to_receiver",
        }
    }
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Assignment & events ───────────────────────────────────────────────────────

/// The sender an agent has claimed and the receiver it delivers to.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub sender:   SenderId,
    pub receiver: ReceiverId,
}

/// Something that happened to an agent during one step.
///
/// Returned from [`DeliveryAgent::step`] in the order it happened.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AgentEvent {
    /// Claimed a sender; `route_len` hops planned towards it.
    Assigned { sender: SenderId, route_len: usize },

    /// Took one hop.
    Moved { from: Cell, to: Cell },

    /// The next planned hop was occupied; the route was recomputed.
    Blocked { at: Cell, next: Cell },

    /// No route to `target` exists right now.  The agent stays put.
    NoRoute { at: Cell, target: Cell },

    /// Picked up the package; `route_len` hops planned to the receiver.
    PickedUp { sender: SenderId, route_len: usize },

    /// Dropped off the package and released the sender.
    Delivered { sender: SenderId, receiver: ReceiverId },
}

// ── DeliveryAgent ─────────────────────────────────────────────────────────────

/// An autonomous courier on the grid.
///
/// Invariants:
/// - the agent is busy iff it holds an [`Assignment`]; `has_package` implies busy;
/// - `path` never contains the current cell, and popping its head in a hop
///   is the only way `cell` changes.
#[derive(Clone, Debug)]
pub struct DeliveryAgent {
    id:                AgentId,
    cell:              Cell,
    has_package:       bool,
    assignment:        Option<Assignment>,
    path:              VecDeque<Cell>,
    distance_traveled: u64,
}

impl DeliveryAgent {
    /// An idle agent standing on `cell`.  The caller places it on the grid.
    pub fn new(id: AgentId, cell: Cell) -> Self {
        Self {
            id,
            cell,
            has_package:       false,
            assignment:        None,
            path:              VecDeque::new(),
            distance_traveled: 0,
        }
    }

    // ── Read-only accessors ───────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn cell(&self) -> Cell {
        self.cell
    }

    #[inline]
    pub fn has_package(&self) -> bool {
        self.has_package
    }

    #[inline]
    pub fn is_busy(&self) -> bool {
        self.assignment.is_some()
    }

    #[inline]
    pub fn assignment(&self) -> Option<Assignment> {
        self.assignment
    }

    /// Remaining planned hops, next hop first.
    #[inline]
    pub fn path(&self) -> &VecDeque<Cell> {
        &self.path
    }

    /// Hops this agent has taken since the start of the run.
    #[inline]
    pub fn distance_traveled(&self) -> u64 {
        self.distance_traveled
    }

    pub fn state(&self) -> AgentState {
        match (self.assignment, self.has_package) {
            (None, _)        => AgentState::Idle,
            (Some(_), false) => AgentState::EnRouteToSender,
            (Some(_), true)  => AgentState::EnRouteToReceiver,
        }
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance this agent by one tick.
    ///
    /// Errors only on inconsistent wiring (an assignment pointing at a
    /// sender or receiver that does not exist, or the grid disagreeing about
    /// where the agent stands).  Contention is never an error.
    pub fn step<P: Pathfinder + ?Sized>(
        &mut self,
        ctx: &mut StepContext<'_, P>,
    ) -> AgentResult<Vec<AgentEvent>> {
        let mut events = Vec::new();

        let fresh = self.assignment.is_none();
        if fresh && !self.take_work(ctx, &mut events)? {
            return Ok(events);
        }
        let Some(job) = self.assignment else {
            return Ok(events);
        };
        let (sender_cell, receiver_cell) = self.endpoints(ctx, job)?;

        if !self.has_package {
            if self.cell == sender_cell {
                self.has_package = true;
                self.path = self.plan(ctx, receiver_cell, &mut events);
                debug!(agent = %self.id, sender = %job.sender, "picked up package");
                events.push(AgentEvent::PickedUp { sender: job.sender, route_len: self.path.len() });
            } else if !(fresh && self.path.is_empty()) {
                // Claimed this tick with no route: wait for the next tick.
                self.follow_path(ctx, sender_cell, receiver_cell, &mut events)?;
            }
        } else if self.cell == receiver_cell {
            self.complete_delivery(ctx, job);
            events.push(AgentEvent::Delivered { sender: job.sender, receiver: job.receiver });
        } else {
            self.follow_path(ctx, sender_cell, receiver_cell, &mut events)?;
        }

        Ok(events)
    }

    // ── State transitions ─────────────────────────────────────────────────

    /// Try to claim a sender.  Returns `false` if none is free.
    ///
    /// A sender linked to a missing receiver is released again before the
    /// error is returned.
    fn take_work<P: Pathfinder + ?Sized>(
        &mut self,
        ctx:    &mut StepContext<'_, P>,
        events: &mut Vec<AgentEvent>,
    ) -> AgentResult<bool> {
        let Some(sender) = find_work(ctx.senders, ctx.rng) else {
            return Ok(false);
        };
        let (target, receiver) = {
            let s = &ctx.senders[sender.index()];
            (s.cell, s.receiver)
        };
        if ctx.receivers.get(receiver.index()).is_none() {
            ctx.senders[sender.index()].claimed = false;
            return Err(AgentError::UnknownReceiver { agent: self.id, receiver });
        }

        self.assignment = Some(Assignment { sender, receiver });
        self.path = self.plan(ctx, target, events);
        debug!(agent = %self.id, %sender, route_len = self.path.len(), "assigned");
        events.push(AgentEvent::Assigned { sender, route_len: self.path.len() });
        Ok(true)
    }

    fn complete_delivery<P: Pathfinder + ?Sized>(
        &mut self,
        ctx: &mut StepContext<'_, P>,
        job: Assignment,
    ) {
        ctx.senders[job.sender.index()].claimed = false;
        ctx.counters.completed_deliveries += 1;

        self.has_package = false;
        self.assignment  = None;
        self.path.clear();

        debug!(agent = %self.id, total = ctx.counters.completed_deliveries, "delivered");
    }

    // ── Movement ──────────────────────────────────────────────────────────

    /// Take the next hop if it is enterable, otherwise replan from here.
    ///
    /// Endpoint cells are always enterable even though their sender or
    /// receiver occupies them.  A blocked hop throws the whole route away;
    /// there is no partial repair.
    fn follow_path<P: Pathfinder + ?Sized>(
        &mut self,
        ctx:           &mut StepContext<'_, P>,
        sender_cell:   Cell,
        receiver_cell: Cell,
        events:        &mut Vec<AgentEvent>,
    ) -> AgentResult<()> {
        let target = if self.has_package { receiver_cell } else { sender_cell };

        match self.path.front().copied() {
            Some(next)
                if next == sender_cell
                    || next == receiver_cell
                    || ctx.grid.is_cell_empty(next) =>
            {
                ctx.grid.move_agent(self.id, self.cell, next)?;
                self.path.pop_front();
                events.push(AgentEvent::Moved { from: self.cell, to: next });
                self.cell = next;
                self.distance_traveled += 1;
                ctx.counters.total_distance += 1;
            }
            Some(next) => {
                events.push(AgentEvent::Blocked { at: self.cell, next });
                self.path = self.plan(ctx, target, events);
            }
            None => {
                self.path = self.plan(ctx, target, events);
            }
        }
        Ok(())
    }

    /// Compute a fresh route to `target`, recording a failure when none
    /// exists and the agent is not already there.
    fn plan<P: Pathfinder + ?Sized>(
        &self,
        ctx:    &mut StepContext<'_, P>,
        target: Cell,
        events: &mut Vec<AgentEvent>,
    ) -> VecDeque<Cell> {
        let route = ctx.route(self.cell, target);
        if route.is_empty() && self.cell != target {
            ctx.counters.routing_failures += 1;
            warn!(agent = %self.id, at = %self.cell, %target, "no route to target, retrying next tick");
            events.push(AgentEvent::NoRoute { at: self.cell, target });
        }
        route.into()
    }

    fn endpoints<P: Pathfinder + ?Sized>(
        &self,
        ctx: &StepContext<'_, P>,
        job: Assignment,
    ) -> AgentResult<(Cell, Cell)> {
        let sender = ctx
            .senders
            .get(job.sender.index())
            .ok_or(AgentError::UnknownSender { agent: self.id, sender: job.sender })?;
        let receiver = ctx
            .receivers
            .get(job.receiver.index())
            .ok_or(AgentError::UnknownReceiver { agent: self.id, receiver: job.receiver })?;
        Ok((sender.cell, receiver.cell))
    }
}
