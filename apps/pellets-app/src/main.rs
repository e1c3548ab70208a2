//! Pellets particle-drop simulation CLI.
//!
//! Provides two modes of operation:
//! - `run`: Drive the scripted drop headless and print statistics
//! - `info`: Print workspace crate versions

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};

use pellets_core::config::SimConfig;
use pellets_core::time::FixedStep;
use pellets_sim::{SceneBuilder, SimError, Simulation};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Pellets: scripted particle-drop physics simulation.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scripted particle drop and print statistics.
    Run {
        /// Number of fixed ticks to simulate.
        #[arg(short, long, default_value_t = 600)]
        ticks: u64,

        /// Random seed.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Path to a TOML configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Pace the ticks against wall-clock time instead of running
        /// them back to back.
        #[arg(long)]
        realtime: bool,
    },

    /// Print crate information.
    Info,
}

// ---------------------------------------------------------------------------
// Mode implementations
// ---------------------------------------------------------------------------

fn build_sim(seed: Option<u64>, config_path: Option<&PathBuf>) -> Result<Simulation, SimError> {
    let mut config = match config_path {
        Some(path) => SimConfig::from_file(path)?,
        None => SimConfig::default(),
    };
    if seed.is_some() {
        config.seed = seed;
    }
    SceneBuilder::new().with_config(config).build()
}

fn report(sim: &Simulation, tick: u64) {
    println!(
        "tick {tick}: t={}, bodies={}, spawned={}",
        sim.time(),
        sim.world().len(),
        sim.stats().particles_spawned
    );
}

fn run_headless(sim: &mut Simulation, ticks: u64) -> Result<(), SimError> {
    let report_every = (ticks / 10).max(1);
    for tick in 1..=ticks {
        sim.tick()?;
        if tick % report_every == 0 {
            report(sim, tick);
        }
    }
    Ok(())
}

fn run_realtime(sim: &mut Simulation, ticks: u64) -> Result<(), SimError> {
    let mut ticker = FixedStep::new(sim.config().timestep);
    let mut done = 0_u64;
    let mut last = Instant::now();

    while done < ticks {
        let now = Instant::now();
        ticker.accumulate(now - last);
        last = now;

        while done < ticks && ticker.should_step() {
            sim.tick()?;
            done += 1;
        }

        std::thread::sleep(Duration::from_millis(1));
    }
    report(sim, done);
    Ok(())
}

fn run(
    ticks: u64,
    seed: Option<u64>,
    config: Option<&PathBuf>,
    realtime: bool,
) -> Result<(), SimError> {
    let mut sim = build_sim(seed, config)?;

    if realtime {
        run_realtime(&mut sim, ticks)?;
    } else {
        run_headless(&mut sim, ticks)?;
    }

    let stats = sim.stats();
    println!(
        "\ntotal: ticks={}, spawned={}, bodies={}, script_done={}",
        stats.ticks,
        stats.particles_spawned,
        sim.world().len(),
        sim.script_done()
    );
    Ok(())
}

fn info() {
    println!("pellets v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("crates:");
    println!("  pellets-core    {}", env!("CARGO_PKG_VERSION"));
    println!("  pellets-physics {}", env!("CARGO_PKG_VERSION"));
    println!("  pellets-actions {}", env!("CARGO_PKG_VERSION"));
    println!("  pellets-sim     {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("edition: 2024");
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Run {
            ticks,
            seed,
            config,
            realtime,
        }) => run(ticks, seed, config.as_ref(), realtime),
        Some(Commands::Info) => {
            info();
            Ok(())
        }
        // Default: one headless run with defaults.
        None => run(600, None, None, false),
    };

    if let Err(error) = result {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
