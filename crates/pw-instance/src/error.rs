//! Instance-subsystem error type.

use thiserror::Error;

use pw_core::CoreError;

/// Errors produced by `pw-instance`.
#[derive(Debug, Error)]
pub enum InstanceError {
    #[error("duplicate node id {0:?}")]
    DuplicateNodeId(String),

    #[error("node id {0:?} has no recognized class prefix (expected E/S/P/D)")]
    UnknownClassPrefix(String),

    #[error("arc references unknown node id {0:?}")]
    UnknownArcEndpoint(String),

    #[error("self-loop arc on {0:?}")]
    SelfLoopArc(String),

    #[error("zero-cost arc {0:?} → {1:?}")]
    ZeroCostArc(String, String),

    #[error("arc {0:?} → {1:?} joins classes with no allowed transition")]
    ForbiddenArc(String, String),

    #[error("duplicate arc {0:?} → {1:?}")]
    DuplicateArc(String, String),

    #[error("generator configuration error: {0}")]
    Generator(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<CoreError> for InstanceError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::UnknownClassPrefix(id) => InstanceError::UnknownClassPrefix(id),
            CoreError::Config(msg) => InstanceError::Generator(msg),
            CoreError::Io(e) => InstanceError::Io(e),
        }
    }
}

pub type InstanceResult<T> = Result<T, InstanceError>;
