//! `parkwalk` — experiment harness CLI.
//!
//! Three subcommands:
//!
//! - `generate` — write a random instance's node and arc tables;
//! - `run` — execute one experiment run against an instance (loaded from
//!   tables or freshly generated);
//! - `sweep` — iterate over a grid of instance sizes, running the full
//!   pipeline for each configuration.
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pw_core::SpeedProfile;
use pw_exp::Experiment;
use pw_instance::{generator, tables, GeneratorConfig, Instance};
use pw_solver::SolverConfig;

// ── CLI definition ────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "parkwalk", about = "Park-and-walk routing experiment harness")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a random instance and write its node and arc tables.
    Generate {
        #[command(flatten)]
        gen_opts: GenOpts,
        /// Directory to write nodes.csv and arcs.csv into.
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Run one experiment: stage, solve, extract, render, log.
    Run {
        /// Experiment root directory (runs/, results/, experiments.csv).
        #[arg(long, default_value = "experiment")]
        root: PathBuf,
        /// Node table to load; generated if omitted.
        #[arg(long, requires = "arcs")]
        nodes: Option<PathBuf>,
        /// Arc table to load; generated if omitted.
        #[arg(long, requires = "nodes")]
        arcs: Option<PathBuf>,
        #[command(flatten)]
        gen_opts: GenOpts,
        #[command(flatten)]
        solver: SolverOpts,
    },
    /// Run the pipeline for every configuration in a size grid.
    Sweep {
        /// Experiment root directory.
        #[arg(long, default_value = "experiment")]
        root: PathBuf,
        #[arg(long, default_value_t = 5)]
        max_entries: u32,
        #[arg(long, default_value_t = 5)]
        max_exits: u32,
        #[arg(long, default_value_t = 3)]
        max_parkings: u32,
        #[arg(long, default_value_t = 3)]
        min_objectives: u32,
        #[arg(long, default_value_t = 20)]
        max_objectives: u32,
        #[command(flatten)]
        gen_opts: GenOpts,
        #[command(flatten)]
        solver: SolverOpts,
    },
}

/// Instance generation parameters (shared by `generate`, `run`, `sweep`).
#[derive(Args)]
struct GenOpts {
    #[arg(long, default_value_t = 2)]
    entries: u32,
    #[arg(long, default_value_t = 2)]
    exits: u32,
    #[arg(long, default_value_t = 2)]
    parkings: u32,
    #[arg(long, default_value_t = 5)]
    objectives: u32,
    /// Side of the square placement area, metres.
    #[arg(long, default_value_t = 100_000.0)]
    size_m: f64,
    /// Entry/exit border band width as a fraction of the side.
    #[arg(long, default_value_t = 0.15)]
    margin_frac: f64,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Vehicular regime speed, km/h.
    #[arg(long, default_value_t = 50.0)]
    vehicular_kmh: f64,
    /// Pedestrian regime speed, km/h.
    #[arg(long, default_value_t = 7.0)]
    pedestrian_kmh: f64,
}

impl GenOpts {
    fn speeds(&self) -> SpeedProfile {
        SpeedProfile::from_kmh(self.vehicular_kmh, self.pedestrian_kmh)
    }

    fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            entries: self.entries,
            exits: self.exits,
            parkings: self.parkings,
            objectives: self.objectives,
            size_m: self.size_m,
            margin_frac: self.margin_frac,
            seed: self.seed,
        }
    }
}

/// External solver invocation parameters.
#[derive(Args)]
struct SolverOpts {
    /// Solver program, e.g. `julia`.
    #[arg(long)]
    solver: String,
    /// Leading solver arguments (repeatable); staged table paths are
    /// appended after these.
    #[arg(long = "solver-arg")]
    solver_args: Vec<String>,
    /// Working directory for the solver process.
    #[arg(long)]
    solver_dir: Option<PathBuf>,
    /// Where the solver writes its result artifact.
    #[arg(long)]
    result: PathBuf,
    /// Kill the solver after this many seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,
}

impl SolverOpts {
    fn config(&self) -> SolverConfig {
        SolverConfig {
            program: self.solver.clone(),
            args: self.solver_args.clone(),
            working_dir: self.solver_dir.clone(),
            result_path: self.result.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().command {
        Command::Generate { gen_opts, out_dir } => generate(&gen_opts, &out_dir),
        Command::Run { root, nodes, arcs, gen_opts, solver } => {
            run(&root, nodes.as_deref().zip(arcs.as_deref()), &gen_opts, &solver)
        }
        Command::Sweep {
            root,
            max_entries,
            max_exits,
            max_parkings,
            min_objectives,
            max_objectives,
            gen_opts,
            solver,
        } => sweep(
            &root,
            max_entries,
            max_exits,
            max_parkings,
            min_objectives..=max_objectives,
            &gen_opts,
            &solver,
        ),
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

fn generate(gen_opts: &GenOpts, out_dir: &std::path::Path) -> Result<()> {
    let instance = generator::generate(&gen_opts.config(), &gen_opts.speeds())?;
    std::fs::create_dir_all(out_dir)?;
    let nodes_path = out_dir.join("nodes.csv");
    let arcs_path = out_dir.join("arcs.csv");
    tables::write_node_table(&nodes_path, instance.nodes())?;
    tables::write_arc_table(&arcs_path, instance.arcs())?;

    let counts = instance.class_counts();
    info!(
        nodes = counts.total(),
        arcs = instance.arcs().len(),
        nodes_table = %nodes_path.display(),
        arcs_table = %arcs_path.display(),
        "instance written"
    );
    Ok(())
}

fn run(
    root: &std::path::Path,
    tables_in: Option<(&std::path::Path, &std::path::Path)>,
    gen_opts: &GenOpts,
    solver: &SolverOpts,
) -> Result<()> {
    let instance = match tables_in {
        Some((nodes_path, arcs_path)) => Instance::from_tables(
            tables::read_node_table(nodes_path)
                .with_context(|| format!("loading {}", nodes_path.display()))?,
            tables::read_arc_table(arcs_path)
                .with_context(|| format!("loading {}", arcs_path.display()))?,
        )?,
        None => generator::generate(&gen_opts.config(), &gen_opts.speeds())?,
    };

    let experiment = Experiment::new(root, solver.config())?;
    let summary = experiment.run(&instance)?;
    info!(
        index = summary.index,
        elapsed_ms = summary.elapsed_ms,
        outcome = ?summary.outcome,
        "run complete"
    );
    Ok(())
}

fn sweep(
    root: &std::path::Path,
    max_entries: u32,
    max_exits: u32,
    max_parkings: u32,
    objectives: std::ops::RangeInclusive<u32>,
    gen_opts: &GenOpts,
    solver: &SolverOpts,
) -> Result<()> {
    let experiment = Experiment::new(root, solver.config())?;
    let speeds = gen_opts.speeds();

    let mut seed = gen_opts.seed;
    for entries in 1..=max_entries {
        for exits in 1..=max_exits {
            for parkings in 1..=max_parkings {
                for objectives in objectives.clone() {
                    let config = GeneratorConfig {
                        entries,
                        exits,
                        parkings,
                        objectives,
                        size_m: gen_opts.size_m,
                        margin_frac: gen_opts.margin_frac,
                        seed,
                    };
                    seed += 1;
                    info!(entries, exits, parkings, objectives, "sweep configuration");

                    let instance = generator::generate(&config, &speeds)?;
                    // A failed run is already logged by the pipeline; a
                    // harness error on one configuration skips to the next.
                    match experiment.run(&instance) {
                        Ok(summary) if summary.solved() => {}
                        Ok(summary) => {
                            warn!(index = summary.index, outcome = ?summary.outcome, "configuration not solved")
                        }
                        Err(e) => warn!(error = %e, "run failed; continuing sweep"),
                    }
                }
            }
        }
    }
    Ok(())
}
