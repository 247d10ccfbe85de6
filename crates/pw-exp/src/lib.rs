//! `pw-exp` — the experiment harness around one solver run.
//!
//! A run is: allocate a fresh index, stage the instance under it, invoke the
//! solver (timed), extract the result path, archive the raw artifact, render
//! the diagram, and append one row to the experiment log.  [`Experiment`]
//! owns that sequence; the leaf concerns live in their own modules:
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`index`]    | `next_run_index` — directory-scan index allocation     |
//! | [`stage`]    | `Stager` — run-qualified instance snapshots            |
//! | [`log`]      | `ExperimentLog`, `RunRecord` — append-only run log     |
//! | [`pipeline`] | `Experiment` — the full run sequence                   |
//! | [`error`]    | `ExpError`, `ExpResult`                                |
//!
//! One run at a time: nothing here is safe against two concurrent runs
//! sharing the same experiment root (index allocation scans the directory).

pub mod error;
pub mod index;
pub mod log;
pub mod pipeline;
pub mod stage;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ExpError, ExpResult};
pub use index::next_run_index;
pub use log::{ExperimentLog, RunRecord};
pub use pipeline::{Experiment, RunOutcome, RunSummary};
pub use stage::{StagedInstance, Stager};
