//! lifetime: run one sensor-network lifetime simulation and report on it.
//!
//! ```text
//! lifetime [CONFIG.json] [--policy greedy|minimal-cover] [--out DIR]
//! lifetime --help
//! ```
//!
//! Without a configuration file a random field of `TARGET_COUNT` targets and
//! `SENSOR_COUNT` sensors is generated from `SEED`.  Set `RUST_LOG=debug` to
//! see every reshuffle.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;

use wsn_core::{SimulationParameters, StopCondition};
use wsn_output::{CsvWriter, RunReport, SimOutputObserver};
use wsn_schedule::policy_by_name;
use wsn_sim::SimulationManager;


// ── Constants ─────────────────────────────────────────────────────────────────

const TARGET_COUNT: usize = 40;
const SENSOR_COUNT: usize = 120;
const SEED:         u64   = 42;
const OUTPUT_DIR:   &str  = "output/lifetime";

fn random_parameters() -> SimulationParameters {
    SimulationParameters::new(0.12, 20, 5, StopCondition::ZeroCoverage, 0.0, 10_000)
}

// ── Arguments ─────────────────────────────────────────────────────────────────

/// Run one sensor-network lifetime simulation and report on it.
#[derive(Parser, Debug)]
#[command(name = "lifetime")]
#[command(about = "Simulate how long a duty-cycled sensor field keeps its targets covered")]
struct Args {
    /// JSON configuration (flat or nested).  Omit for a random field.
    config: Option<PathBuf>,

    /// Reshuffle policy
    #[arg(long, default_value = "greedy", value_parser = ["greedy", "minimal-cover"])]
    policy: String,

    /// Output directory for CSV files and reports
    #[arg(long, default_value = OUTPUT_DIR)]
    out: PathBuf,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    println!("=== lifetime: wireless sensor network simulator ===");

    // 1. Configure.
    let mut manager = SimulationManager::new();
    let policy = policy_by_name(&args.policy)
        .with_context(|| format!("unknown policy {:?} (try greedy or minimal-cover)", args.policy))?;
    manager.set_policy(policy)?;

    match &args.config {
        Some(path) => {
            manager
                .load_from_json(path)
                .with_context(|| format!("loading {}", path.display()))?;
            println!("Configuration: {}", path.display());
        }
        None => {
            manager.load_parameters(random_parameters())?;
            manager.load_random_scenario(TARGET_COUNT, SENSOR_COUNT, SEED)?;
            println!("Configuration: random field (seed {SEED})");
        }
    }
    let scenario = manager.scenario()?;
    println!(
        "Targets: {}  |  Sensors: {}  |  Policy: {}",
        scenario.target_count(),
        scenario.sensor_count(),
        manager.policy_name()
    );
    println!("Parameters: {}", serde_json::to_string(manager.parameters()?)?);
    println!();

    // 2. Initialize (tick 0).
    manager.initialize()?;

    // 3. Set up output.
    std::fs::create_dir_all(&args.out)?;
    let writer = CsvWriter::new(&args.out)?;
    let mut obs = SimOutputObserver::new(writer);

    // 4. Run.
    let t0 = Instant::now();
    manager.run_with(&mut obs)?;
    let elapsed = t0.elapsed();
    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }
    info!(
        "simulated {} tick(s) in {:.3} s",
        manager.simulation_states().len(),
        elapsed.as_secs_f64()
    );

    // 5. Report.
    let report = RunReport::from_states(manager.simulation_states(), manager.stop_reason())
        .context("simulation recorded no states")?;
    println!("{report}");

    report.write_json(&args.out.join("report.json"))?;
    report.write_text(&args.out.join("report.txt"))?;
    println!("Output written to {}", display_dir(&args.out));

    Ok(())
}

fn display_dir(dir: &Path) -> String {
    format!("{}/{{tick_summaries.csv, sensor_snapshots.csv, report.json, report.txt}}", dir.display())
}
