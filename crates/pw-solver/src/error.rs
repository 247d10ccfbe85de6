//! Solver-boundary error type.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by `pw-solver`.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The solver finished without producing its result artifact.
    #[error("solver result artifact not found at {0}")]
    MissingResult(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SolverResult<T> = Result<T, SolverError>;
