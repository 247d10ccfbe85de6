//! Run-qualified instance snapshots.
//!
//! Every run's inputs are persisted under its index so past runs stay
//! reproducible and independently inspectable.  The stager only ever writes
//! fresh index-qualified names (the allocator guarantees freshness), so it
//! never overwrites a previous run's files.

use std::path::{Path, PathBuf};

use pw_instance::{tables, Instance};

use crate::ExpResult;

/// Paths of one run's staged instance tables.
#[derive(Clone, Debug)]
pub struct StagedInstance {
    pub index: u64,
    pub nodes_path: PathBuf,
    pub arcs_path: PathBuf,
}

/// Persists instance snapshots and result copies under a runs directory.
pub struct Stager {
    runs_dir: PathBuf,
}

impl Stager {
    /// Filename prefix of staged arc tables; the index allocator scans for
    /// this pattern.
    pub const ARCS_PREFIX: &'static str = "arcs_";
    pub const TABLE_EXT: &'static str = ".csv";

    /// Create the runs directory if needed.
    pub fn new(runs_dir: impl Into<PathBuf>) -> ExpResult<Self> {
        let runs_dir = runs_dir.into();
        std::fs::create_dir_all(&runs_dir)?;
        Ok(Self { runs_dir })
    }

    pub fn runs_dir(&self) -> &Path {
        &self.runs_dir
    }

    /// Write `nodes_<index>.csv` and `arcs_<index>.csv` for `instance`.
    pub fn stage(&self, instance: &Instance, index: u64) -> ExpResult<StagedInstance> {
        let nodes_path = self.runs_dir.join(format!("nodes_{index}.csv"));
        let arcs_path = self
            .runs_dir
            .join(format!("{}{index}{}", Self::ARCS_PREFIX, Self::TABLE_EXT));
        tables::write_node_table(&nodes_path, instance.nodes())?;
        tables::write_arc_table(&arcs_path, instance.arcs())?;
        Ok(StagedInstance { index, nodes_path, arcs_path })
    }

    /// Copy the solver's raw result artifact to `result_<index>.txt`.
    pub fn archive_result(&self, artifact: &Path, index: u64) -> ExpResult<PathBuf> {
        let dest = self.runs_dir.join(format!("result_{index}.txt"));
        std::fs::copy(artifact, &dest)?;
        Ok(dest)
    }
}
