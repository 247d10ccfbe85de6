//! Blocking invocation of the external solver.
//!
//! The instance location is passed to the solver explicitly (the staged node
//! and arc table paths are appended as the last two command arguments), so
//! two runs never race on a shared fixed-name input file.
//!
//! A solve never returns `Err`: launch failures, non-zero exits, and timeout
//! kills all fold into [`SolverOutcome`] so the pipeline can continue in a
//! degraded mode and still record the run.

use std::path::{Path, PathBuf};
use std::process::{Child, Command};
use std::time::{Duration, Instant};

use tracing::{info, warn};

// ── Configuration ─────────────────────────────────────────────────────────────

/// How to invoke the external solver.
#[derive(Clone, Debug)]
pub struct SolverConfig {
    /// Program to execute, e.g. `julia`.
    pub program: String,
    /// Leading arguments, e.g. `["--project=.", "solver.jl"]`.  The staged
    /// node and arc table paths are appended after these.
    pub args: Vec<String>,
    /// Working directory for the child, if different from the harness's.
    pub working_dir: Option<PathBuf>,
    /// Where the solver writes its result artifact.
    pub result_path: PathBuf,
    /// Kill the solver and report [`SolverOutcome::TimedOut`] after this long.
    /// `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

// ── Report ────────────────────────────────────────────────────────────────────

/// What happened to one solver invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolverOutcome {
    /// Exit code 0.
    Solved,
    /// Non-zero exit or launch failure, with the captured error text.
    Failed(String),
    /// The configured deadline expired and the child was killed.
    TimedOut,
}

/// Timing and outcome of one solver invocation.
#[derive(Clone, Debug)]
pub struct SolverReport {
    /// Wall-clock duration of the invocation, milliseconds.  Recorded for
    /// every outcome, including failures.
    pub elapsed_ms: u64,
    pub outcome: SolverOutcome,
}

impl SolverReport {
    pub fn solved(&self) -> bool {
        self.outcome == SolverOutcome::Solved
    }
}

// ── Client ────────────────────────────────────────────────────────────────────

/// Invokes the external solver and times it.
pub struct SolverClient {
    config: SolverConfig,
}

impl SolverClient {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Where the solver writes its result artifact.
    pub fn result_path(&self) -> &Path {
        &self.config.result_path
    }

    /// Run the solver against the staged instance, blocking until it exits
    /// or the configured timeout expires.
    pub fn solve(&self, nodes_path: &Path, arcs_path: &Path) -> SolverReport {
        let mut command = Command::new(&self.config.program);
        command.args(&self.config.args).arg(nodes_path).arg(arcs_path);
        if let Some(dir) = &self.config.working_dir {
            command.current_dir(dir);
        }

        info!(program = %self.config.program, "launching solver");
        let start = Instant::now();
        let outcome = match command.spawn() {
            Err(e) => SolverOutcome::Failed(format!("failed to launch solver: {e}")),
            Ok(child) => self.wait(child, start),
        };
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match &outcome {
            SolverOutcome::Solved => info!(elapsed_ms, "solver finished"),
            SolverOutcome::Failed(msg) => warn!(elapsed_ms, %msg, "solver failed"),
            SolverOutcome::TimedOut => warn!(elapsed_ms, "solver timed out and was killed"),
        }
        SolverReport { elapsed_ms, outcome }
    }

    /// Wait for `child`, enforcing the timeout by polling `try_wait`.
    fn wait(&self, mut child: Child, start: Instant) -> SolverOutcome {
        const POLL_INTERVAL: Duration = Duration::from_millis(20);

        loop {
            match child.try_wait() {
                Err(e) => return SolverOutcome::Failed(format!("wait failed: {e}")),
                Ok(Some(status)) => {
                    return if status.success() {
                        SolverOutcome::Solved
                    } else {
                        SolverOutcome::Failed(format!("solver exited with {status}"))
                    };
                }
                Ok(None) => {}
            }
            if let Some(timeout) = self.config.timeout {
                if start.elapsed() >= timeout {
                    // Best-effort kill; the child may have exited in between.
                    let _ = child.kill();
                    let _ = child.wait();
                    return SolverOutcome::TimedOut;
                }
            }
            std::thread::sleep(POLL_INTERVAL);
        }
    }
}
