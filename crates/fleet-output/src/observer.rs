//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use fleet_agent::DeliveryAgent;
use fleet_core::Tick;
use fleet_sim::{FleetStats, SimObserver};

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes agent snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, stats: &FleetStats) {
        let result = self.writer.write_tick_summary(&TickSummaryRow::from_stats(tick, stats));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &[DeliveryAgent]) {
        if agents.is_empty() {
            return;
        }
        let rows: Vec<AgentSnapshotRow> = agents
            .iter()
            .map(|a| AgentSnapshotRow::from_agent(tick, a))
            .collect();
        let result = self.writer.write_snapshots(&rows);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick, _stats: &FleetStats) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
