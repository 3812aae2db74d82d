/*
 * Boid Flocking Simulation - Headless Driver
 *
 * Runs the flocking core without a window: builds a seeded flock, advances it
 * for a fixed number of ticks and streams debug snapshots as JSON lines so an
 * external renderer (or a test harness) can replay what the boids perceived.
 */

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use flocking::{Flock, SimulationConfig, UpdateOrder};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Order {
    Snapshot,
    Immediate,
}

impl From<Order> for UpdateOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Snapshot => UpdateOrder::Snapshot,
            Order::Immediate => UpdateOrder::Immediate,
        }
    }
}

#[derive(Parser)]
#[command(name = "flocking")]
#[command(version)]
#[command(about = "Headless boid flocking simulation")]
struct Cli {
    /// JSON file with simulation parameters (missing fields use defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of boids to spawn
    #[arg(short = 'n', long, default_value = "200")]
    boids: usize,

    /// Number of ticks to simulate
    #[arg(short, long, default_value = "500")]
    ticks: u64,

    /// Seed for the initial positions and headings
    #[arg(long, default_value = "0")]
    seed: u64,

    /// Override the per-tick update order from the config
    #[arg(long, value_enum)]
    update_order: Option<Order>,

    /// Record perception for the first N boids
    #[arg(long, default_value = "0")]
    debug_agents: usize,

    /// Emit a debug snapshot every N ticks (0 disables snapshots)
    #[arg(long, default_value = "0")]
    snapshot_every: u64,

    /// Write snapshots to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    let mut config = match &cli.config {
        Some(path) => SimulationConfig::from_json_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SimulationConfig::default(),
    };
    if let Some(order) = cli.update_order {
        config.update_order = order.into();
    }
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(cli.seed);
    let mut flock = Flock::random(cli.boids, &config, &mut rng);
    let inspected: Vec<u64> = flock.boids().iter().take(cli.debug_agents).map(|boid| boid.id()).collect();
    for id in inspected {
        flock.set_debug(id, true);
    }

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    info!(
        boids = flock.len(),
        ticks = cli.ticks,
        seed = cli.seed,
        update_order = ?config.update_order,
        "starting simulation"
    );

    for _ in 0..cli.ticks {
        flock.advance(&config);
        if cli.snapshot_every > 0 && flock.frame() % cli.snapshot_every == 0 {
            let snapshot = flock.debug_snapshot();
            serde_json::to_writer(&mut out, &snapshot)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    let mean_speed = if flock.is_empty() {
        0.0
    } else {
        flock.boids().iter().map(|boid| boid.velocity.magnitude()).sum::<f32>() / flock.len() as f32
    };
    info!(frame = flock.frame(), mean_speed, "simulation finished");

    Ok(())
}
