//! Fluent builder for constructing a [`Sim`].

use fleet_agent::{DeliveryAgent, FleetCounters, Receiver, Sender};
use fleet_core::{AgentId, Cell, ReceiverId, SenderId, SimClock, SimConfig, SimRng};
use fleet_grid::{AStarPathfinder, Grid, Occupant, Pathfinder};
use tracing::info;

use crate::{FleetStats, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<P>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                     | Default                                   |
/// |----------------------------|-------------------------------------------|
/// | `.pathfinder(p)`           | [`AStarPathfinder`]                       |
/// | `.receiver_positions(v)`   | `num_receivers` uniformly random cells    |
/// | `.sender_positions(v)`     | `num_senders` uniformly random cells      |
///
/// Random cells may coincide with each other or with the start cell; the
/// grid allows several occupants per cell.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .receiver_positions(vec![Cell::new(4, 4)])
///     .sender_positions(vec![Cell::new(0, 0)])
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: Pathfinder = AStarPathfinder> {
    config:             SimConfig,
    pathfinder:         P,
    receiver_positions: Option<Vec<Cell>>,
    sender_positions:   Option<Vec<Cell>>,
}

impl SimBuilder<AStarPathfinder> {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            pathfinder:         AStarPathfinder,
            receiver_positions: None,
            sender_positions:   None,
        }
    }
}

impl<P: Pathfinder> SimBuilder<P> {
    /// Swap the routing engine.
    pub fn pathfinder<Q: Pathfinder>(self, pathfinder: Q) -> SimBuilder<Q> {
        SimBuilder {
            config:             self.config,
            pathfinder,
            receiver_positions: self.receiver_positions,
            sender_positions:   self.sender_positions,
        }
    }

    /// Place receivers on these cells instead of random ones.  Must be
    /// length `num_receivers`.
    pub fn receiver_positions(mut self, positions: Vec<Cell>) -> Self {
        self.receiver_positions = Some(positions);
        self
    }

    /// Place senders on these cells instead of random ones.  Must be
    /// length `num_senders`.
    pub fn sender_positions(mut self, positions: Vec<Cell>) -> Self {
        self.sender_positions = Some(positions);
        self
    }

    /// Validate inputs, populate the grid and return a ready-to-run [`Sim`]
    /// at tick 0.
    pub fn build(self) -> SimResult<Sim<P>> {
        self.config.validate()?;
        let config = self.config;

        // Task selection gets its own stream, independent of how many
        // placement draws happen below.
        let mut rng  = SimRng::new(config.seed);
        let task_rng = rng.child(1);

        let receiver_cells = resolve_positions(
            self.receiver_positions, config.num_receivers, "receiver positions", &config, &mut rng,
        )?;
        let sender_cells = resolve_positions(
            self.sender_positions, config.num_senders, "sender positions", &config, &mut rng,
        )?;

        let mut grid = Grid::new(config.width, config.height);

        // ── Receivers, then senders linked round-robin ────────────────────
        let mut receivers = Vec::with_capacity(receiver_cells.len());
        for (i, cell) in receiver_cells.into_iter().enumerate() {
            let id = ReceiverId(i as u32);
            grid.place(Occupant::Receiver(id), cell)?;
            receivers.push(Receiver::new(id, cell));
        }

        let mut senders = Vec::with_capacity(sender_cells.len());
        for (i, cell) in sender_cells.into_iter().enumerate() {
            let id       = SenderId(i as u32);
            let receiver = ReceiverId((i % config.num_receivers) as u32);
            grid.place(Occupant::Sender(id), cell)?;
            senders.push(Sender::new(id, cell, receiver));
        }

        // ── Agents on the start cell ──────────────────────────────────────
        let start = config.start_cell();
        let mut agents = Vec::with_capacity(config.num_agents);
        for i in 0..config.num_agents {
            let id = AgentId(i as u32);
            grid.place(Occupant::Agent(id), start)?;
            agents.push(DeliveryAgent::new(id, start));
        }
        if config.occupy_depot {
            grid.place(Occupant::Depot, start)?;
        }

        info!(
            width     = config.width,
            height    = config.height,
            agents    = agents.len(),
            senders   = senders.len(),
            receivers = receivers.len(),
            %start,
            seed      = config.seed,
            "fleet initialized"
        );

        let counters = FleetCounters::default();
        let stats    = FleetStats::collect(&agents, &senders, &counters);

        Ok(Sim {
            config,
            clock: SimClock::new(),
            grid,
            agents,
            senders,
            receivers,
            counters,
            stats,
            rng: task_rng,
            pathfinder: self.pathfinder,
        })
    }
}

/// Use the caller's cells after checking them, or draw `count` random ones.
fn resolve_positions(
    explicit: Option<Vec<Cell>>,
    count:    usize,
    what:     &'static str,
    config:   &SimConfig,
    rng:      &mut SimRng,
) -> SimResult<Vec<Cell>> {
    let Some(cells) = explicit else {
        return Ok((0..count)
            .map(|_| Cell::new(rng.gen_range(0..config.width), rng.gen_range(0..config.height)))
            .collect());
    };

    if cells.len() != count {
        return Err(SimError::CountMismatch { expected: count, got: cells.len(), what });
    }
    if let Some(&cell) = cells.iter().find(|c| c.x >= config.width || c.y >= config.height) {
        return Err(SimError::PositionOutOfBounds {
            what,
            cell,
            width:  config.width,
            height: config.height,
        });
    }
    Ok(cells)
}
