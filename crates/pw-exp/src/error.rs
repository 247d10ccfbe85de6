//! Experiment-subsystem error type.

use thiserror::Error;

use pw_instance::InstanceError;
use pw_render::RenderError;
use pw_solver::SolverError;

/// Errors produced by `pw-exp`.
#[derive(Debug, Error)]
pub enum ExpError {
    #[error("instance error: {0}")]
    Instance(#[from] InstanceError),

    #[error("solver error: {0}")]
    Solver(#[from] SolverError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ExpResult<T> = Result<T, ExpError>;
