//! Result-artifact parser.
//!
//! The solver emits one logical path step per line:
//!
//! ```text
//! step 1: E1 → P2
//! ```
//!
//! Only lines containing the arrow token are path steps; anything else
//! (banners, comments, blank lines) is ignored.  A step line splits at the
//! arrow into a left and a right segment; the "from" id is the last
//! `:`-separated field of the left segment, the "to" id is the right segment,
//! both trimmed.  A line with more than one arrow fails this decomposition
//! and is skipped with a warning; extraction continues.

use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::warn;

use pw_core::NodeId;

use crate::{SolverError, SolverResult};

/// The arrow token separating "from" and "to" in a step line.
pub const PATH_SEPARATOR: char = '→';

/// An ordered path read from the result artifact.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractedPath {
    /// Directed steps in artifact order.
    pub steps: Vec<(NodeId, NodeId)>,
    /// Step lines that failed to decompose and were dropped.
    pub skipped_lines: usize,
}

impl ExtractedPath {
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Whether `(from, to)` is one of the extracted steps.
    pub fn contains(&self, from: &NodeId, to: &NodeId) -> bool {
        self.steps.iter().any(|(f, t)| f == from && t == to)
    }
}

/// Extract the path from the artifact at `path`.
///
/// A missing artifact is [`SolverError::MissingResult`] — the caller decides
/// whether that aborts the run or degrades to a "no solution" outcome.
pub fn extract_path_file(path: &Path) -> SolverResult<ExtractedPath> {
    let file = std::fs::File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => SolverError::MissingResult(path.to_owned()),
        _ => SolverError::Io(e),
    })?;
    extract_path(BufReader::new(file))
}

/// Extract the path from any line-oriented source.
pub fn extract_path<R: BufRead>(reader: R) -> SolverResult<ExtractedPath> {
    let mut extracted = ExtractedPath::default();
    for line in reader.lines() {
        let line = line?;
        if !line.contains(PATH_SEPARATOR) {
            continue;
        }
        match parse_step(&line) {
            Some(step) => extracted.steps.push(step),
            None => {
                extracted.skipped_lines += 1;
                warn!(line = %line, "malformed path step skipped");
            }
        }
    }
    Ok(extracted)
}

/// Decompose one step line, or `None` if it is malformed.
fn parse_step(line: &str) -> Option<(NodeId, NodeId)> {
    let mut segments = line.trim().split(PATH_SEPARATOR);
    let left = segments.next()?;
    let right = segments.next()?;
    if segments.next().is_some() {
        return None; // more than one arrow
    }
    // "step 1: E1 " → the trailing field after the label separator.
    let from = left.rsplit(':').next().unwrap_or(left).trim();
    let to = right.trim();
    Some((NodeId::new(from), NodeId::new(to)))
}
