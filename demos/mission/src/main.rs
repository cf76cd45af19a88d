//! mission: a small delivery fleet on a grid.
//!
//! Usage: `mission [config.json]`
//!
//! Without an argument the default configuration is used (20×20 grid,
//! 3 agents, 2 senders, 2 receivers, 200 ticks).  Any field missing from the
//! JSON file keeps its default.  Set `RUST_LOG=debug` to see every
//! assignment, pickup and delivery.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fleet_agent::{AgentEvent, DeliveryAgent};
use fleet_core::{AgentId, SimConfig, Tick};
use fleet_output::{CsvWriter, OutputWriter, SimOutputObserver};
use fleet_sim::{FleetStats, SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR:         &str = "output/mission";
const PROGRESS_INTERVAL:  u64  = 50;

// ── Observer wrapper: progress log + row counts ──────────────────────────────

struct ProgressObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows:  usize,
    deliveries:    u64,
}

impl<W: OutputWriter> ProgressObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, summary_rows: 0, deliveries: 0 }
    }
}

impl<W: OutputWriter> SimObserver for ProgressObserver<W> {
    fn on_agent_event(&mut self, tick: Tick, agent: AgentId, event: &AgentEvent) {
        if let AgentEvent::Delivered { .. } = event {
            self.deliveries += 1;
        }
        self.inner.on_agent_event(tick, agent, event);
    }

    fn on_tick_end(&mut self, tick: Tick, stats: &FleetStats) {
        self.summary_rows += 1;
        if tick.0 % PROGRESS_INTERVAL == 0 {
            info!(
                %tick,
                completed = stats.completed_deliveries,
                pending   = stats.pending_deliveries,
                active    = stats.active_agents,
                "progress"
            );
        }
        self.inner.on_tick_end(tick, stats);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &[DeliveryAgent]) {
        self.snapshot_rows += agents.len();
        self.inner.on_snapshot(tick, agents);
    }

    fn on_sim_end(&mut self, final_tick: Tick, stats: &FleetStats) {
        self.inner.on_sim_end(final_tick, stats);
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&str>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {path}"))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let arg = std::env::args().nth(1);
    let config = load_config(arg.as_deref())?;

    println!("=== mission: delivery fleet ===");
    println!(
        "Grid: {}x{}  |  Agents: {}  |  Senders: {}  |  Receivers: {}  |  Seed: {}",
        config.width, config.height, config.num_agents,
        config.num_senders, config.num_receivers, config.seed,
    );
    println!();

    // 1. Build the fleet.
    let mut sim = SimBuilder::new(config).build()?;

    // 2. Set up output.
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = ProgressObserver::new(SimOutputObserver::new(writer));

    // 3. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  agent_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  tick_summaries.csv  : {} rows", obs.summary_rows);
    println!("  deliveries observed : {}", obs.deliveries);
    println!();
    println!("{}", serde_json::to_string_pretty(sim.stats())?);
    println!();

    // 5. Final agent table.
    println!("{:<8} {:<10} {:<12} {:<10}", "Agent", "Cell", "State", "Distance");
    println!("{}", "-".repeat(42));
    for agent in sim.agents() {
        println!(
            "{:<8} {:<10} {:<12} {:<10}",
            agent.id().0,
            agent.cell().to_string(),
            agent.state().as_str(),
            agent.distance_traveled(),
        );
    }

    Ok(())
}
