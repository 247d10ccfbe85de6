//! Run index allocation by directory scan.
//!
//! Indices disambiguate repeated experiment executions and their artifacts.
//! The next index is one past the highest already present, so indices are
//! monotonic and collision-free across sequential runs sharing a directory.
//! Not safe against concurrent allocators on the same directory.

use std::path::Path;

use crate::ExpResult;

/// Scan `dir` for filenames of the form `prefix<integer>ext` and return
/// `max(existing) + 1`, or 1 for an empty or non-matching directory.
///
/// An unreadable directory is an error — defaulting to index 1 there would
/// silently overwrite run 1's artifacts on the next write.
pub fn next_run_index(dir: &Path, prefix: &str, ext: &str) -> ExpResult<u64> {
    let mut max = 0u64;
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        let Some(stem) = name.strip_prefix(prefix).and_then(|s| s.strip_suffix(ext)) else {
            continue;
        };
        if let Ok(n) = stem.parse::<u64>() {
            max = max.max(n);
        }
    }
    Ok(max + 1)
}
