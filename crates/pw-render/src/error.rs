//! Render-subsystem error type.

use thiserror::Error;

/// Errors produced by `pw-render`.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Backend or drawing failure, flattened to text (the plotters error
    /// types are generic over the backend and not worth threading through).
    #[error("drawing error: {0}")]
    Draw(String),

    #[error("arc references unknown node id {0:?}")]
    UnknownNode(String),
}

impl RenderError {
    pub(crate) fn draw(e: impl std::fmt::Display) -> Self {
        RenderError::Draw(e.to_string())
    }
}

pub type RenderResult<T> = Result<T, RenderError>;
