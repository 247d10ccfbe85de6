//! The run pipeline: index → stage → solve → extract → render → log.
//!
//! Failure policy (per stage):
//! - staging IO errors are fatal to the run and propagate;
//! - solver failures and timeouts degrade the run — extraction and rendering
//!   are skipped, but the run is still logged with its elapsed time;
//! - a missing result artifact is a recoverable "no solution" outcome, also
//!   logged (rather than silently dropping the run's record);
//! - malformed result lines are handled inside the extractor.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use pw_instance::Instance;
use pw_render::render_diagram;
use pw_solver::{extract_path_file, SolverClient, SolverConfig, SolverError, SolverOutcome};

use crate::log::{ExperimentLog, RunRecord};
use crate::stage::Stager;
use crate::{next_run_index, ExpResult};

// ── Run summary ───────────────────────────────────────────────────────────────

/// How one run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Solver succeeded and a path was extracted.
    Solved { steps: usize },
    /// Solver exited cleanly but produced no result artifact.
    NoSolution,
    /// Solver exited non-zero or failed to launch.
    SolverFailed(String),
    /// Solver exceeded the configured deadline and was killed.
    SolverTimedOut,
}

/// Everything a caller needs to know about one finished run.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub index: u64,
    pub elapsed_ms: u64,
    pub outcome: RunOutcome,
    /// Rendered diagram, present only for solved runs.
    pub diagram: Option<PathBuf>,
    /// Archived copy of the raw result artifact, present only for solved runs.
    pub result_copy: Option<PathBuf>,
}

impl RunSummary {
    pub fn solved(&self) -> bool {
        matches!(self.outcome, RunOutcome::Solved { .. })
    }
}

// ── Experiment ────────────────────────────────────────────────────────────────

/// An experiment root on disk plus the solver to run against it.
///
/// Layout under the root:
///
/// ```text
/// <root>/runs/nodes_<i>.csv     staged instance snapshots
/// <root>/runs/arcs_<i>.csv
/// <root>/runs/result_<i>.txt    archived solver output
/// <root>/results/graph_<i>.png  rendered diagrams
/// <root>/experiments.csv        append-only run log
/// ```
pub struct Experiment {
    stager: Stager,
    results_dir: PathBuf,
    log: ExperimentLog,
    solver: SolverClient,
}

impl Experiment {
    /// Bootstrap the directory layout under `root` and open the log.
    pub fn new(root: &Path, solver_config: SolverConfig) -> ExpResult<Self> {
        let results_dir = root.join("results");
        std::fs::create_dir_all(&results_dir)?;
        Ok(Self {
            stager: Stager::new(root.join("runs"))?,
            results_dir,
            log: ExperimentLog::open(root.join("experiments.csv"))?,
            solver: SolverClient::new(solver_config),
        })
    }

    pub fn log_path(&self) -> &Path {
        self.log.path()
    }

    /// Execute one full run against `instance`.
    ///
    /// Always appends a log row once the solver step has completed, whatever
    /// its outcome.
    pub fn run(&self, instance: &Instance) -> ExpResult<RunSummary> {
        let index = next_run_index(
            self.stager.runs_dir(),
            Stager::ARCS_PREFIX,
            Stager::TABLE_EXT,
        )?;
        info!(index, nodes = instance.node_count(), "starting run");

        let staged = self.stager.stage(instance, index)?;

        // A stale artifact from an earlier run must not be mistaken for this
        // run's result.
        remove_if_present(self.solver.result_path())?;

        let report = self.solver.solve(&staged.nodes_path, &staged.arcs_path);

        let mut diagram = None;
        let mut result_copy = None;
        let outcome = match report.outcome {
            SolverOutcome::Failed(msg) => RunOutcome::SolverFailed(msg),
            SolverOutcome::TimedOut => RunOutcome::SolverTimedOut,
            SolverOutcome::Solved => match extract_path_file(self.solver.result_path()) {
                Err(SolverError::MissingResult(path)) => {
                    warn!(index, path = %path.display(), "no result artifact; logging run without a diagram");
                    RunOutcome::NoSolution
                }
                Err(e) => return Err(e.into()),
                Ok(path) => {
                    result_copy =
                        Some(self.stager.archive_result(self.solver.result_path(), index)?);
                    let out = self.results_dir.join(format!("graph_{index}.png"));
                    render_diagram(instance, &path.steps, &out)?;
                    info!(index, diagram = %out.display(), "diagram rendered");
                    diagram = Some(out);
                    RunOutcome::Solved { steps: path.steps.len() }
                }
            },
        };

        let record = RunRecord::new(index, instance.class_counts(), report.elapsed_ms);
        self.log.append(&record)?;
        info!(index, elapsed_ms = report.elapsed_ms, ?outcome, "run recorded");

        Ok(RunSummary {
            index,
            elapsed_ms: report.elapsed_ms,
            outcome,
            diagram,
            result_copy,
        })
    }
}

fn remove_if_present(path: &Path) -> std::io::Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}
