//! Append-only experiment log.
//!
//! One CSV row per run, fixed schema, header written on creation.  Rows are
//! never rewritten or deleted.  Single writer: the harness runs one
//! experiment at a time.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use serde::Serialize;

use pw_instance::ClassCounts;

use crate::ExpResult;

/// One run's log row.  Created once per run after the solver step completes
/// (successfully or not) and appended immutably.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RunRecord {
    pub index: u64,
    pub entries: u32,
    pub exits: u32,
    pub parkings: u32,
    pub objectives: u32,
    pub total_nodes: u32,
    pub execution_ms: u64,
}

impl RunRecord {
    /// Assemble a record from the run's class counts and solver timing.
    pub fn new(index: u64, counts: ClassCounts, execution_ms: u64) -> Self {
        Self {
            index,
            entries: counts.entries,
            exits: counts.exits,
            parkings: counts.parkings,
            objectives: counts.objectives,
            total_nodes: counts.total(),
            execution_ms,
        }
    }
}

/// Append-only CSV log of all runs under an experiment root.
pub struct ExperimentLog {
    path: PathBuf,
}

impl ExperimentLog {
    const HEADER: [&'static str; 7] = [
        "index",
        "entries",
        "exits",
        "parkings",
        "objectives",
        "total_nodes",
        "execution_ms",
    ];

    /// Open the log at `path`, creating it with the header row if absent.
    pub fn open(path: impl Into<PathBuf>) -> ExpResult<Self> {
        let path = path.into();
        if !path.exists() {
            let mut w = csv::Writer::from_path(&path)?;
            w.write_record(Self::HEADER)?;
            w.flush()?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record.  Prior rows are never touched.
    pub fn append(&self, record: &RunRecord) -> ExpResult<()> {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut w = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        w.serialize(record)?;
        w.flush()?;
        Ok(())
    }
}
