//! `pw-render` — diagram output for routing instances.
//!
//! One raster image per run: every node as a point colored by class, every
//! arc as a directed edge labeled with its cost, and the solution path drawn
//! emphasized over the rest of the graph.

pub mod diagram;
pub mod error;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use diagram::render_diagram;
pub use error::{RenderError, RenderResult};
