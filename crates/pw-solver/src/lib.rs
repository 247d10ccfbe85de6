//! `pw-solver` — the boundary to the external combinatorial solver.
//!
//! The solver is an opaque collaborator: a command-line program that reads
//! the staged instance tables and writes a textual result artifact.  This
//! crate owns both sides of that boundary:
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`client`]  | `SolverClient` — blocking invocation, timing, timeout   |
//! | [`extract`] | result-artifact parser → ordered `(from, to)` path      |
//! | [`error`]   | `SolverError`, `SolverResult`                           |

pub mod client;
pub mod error;
pub mod extract;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use client::{SolverClient, SolverConfig, SolverOutcome, SolverReport};
pub use error::{SolverError, SolverResult};
pub use extract::{extract_path, extract_path_file, ExtractedPath};
