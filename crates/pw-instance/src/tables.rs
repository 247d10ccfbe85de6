//! CSV persistence of node and arc tables.
//!
//! # File formats
//!
//! Node table (one row per node, header required):
//!
//! ```csv
//! id,x,y
//! E1,1500.0,98000.0
//! P1,42000.0,51000.0
//! ```
//!
//! Arc table:
//!
//! ```csv
//! from,to,cost_ms
//! E1,P1,4521
//! ```
//!
//! Both formats are shared with the external solver, so column names and
//! order are fixed.

use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use pw_core::{NodeId, Point};

use crate::model::{Arc, Node};
use crate::InstanceResult;

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Serialize, Deserialize)]
struct NodeRecord {
    id: String,
    x: f64,
    y: f64,
}

#[derive(Serialize, Deserialize)]
struct ArcRecord {
    from: String,
    to: String,
    cost_ms: u64,
}

// ── Node table ────────────────────────────────────────────────────────────────

/// Write the node table to `path`, creating or truncating it.
pub fn write_node_table(path: &Path, nodes: &[Node]) -> InstanceResult<()> {
    let file = std::fs::File::create(path)?;
    write_nodes(file, nodes)
}

/// Like [`write_node_table`] but for any `Write` sink.
pub fn write_nodes<W: Write>(writer: W, nodes: &[Node]) -> InstanceResult<()> {
    let mut w = csv::Writer::from_writer(writer);
    for node in nodes {
        w.serialize(NodeRecord {
            id: node.id.as_str().to_owned(),
            x: node.pos.x,
            y: node.pos.y,
        })?;
    }
    w.flush()?;
    Ok(())
}

/// Load a node table from `path`.  Fails on an unrecognized class prefix.
pub fn read_node_table(path: &Path) -> InstanceResult<Vec<Node>> {
    let file = std::fs::File::open(path)?;
    read_nodes(file)
}

/// Like [`read_node_table`] but for any `Read` source (pass a
/// `std::io::Cursor` in tests).
pub fn read_nodes<R: Read>(reader: R) -> InstanceResult<Vec<Node>> {
    let mut r = csv::Reader::from_reader(reader);
    let mut nodes = Vec::new();
    for result in r.deserialize::<NodeRecord>() {
        let rec = result?;
        nodes.push(Node::new(NodeId::new(rec.id), Point::new(rec.x, rec.y))?);
    }
    Ok(nodes)
}

// ── Arc table ─────────────────────────────────────────────────────────────────

/// Write the arc table to `path`, creating or truncating it.
pub fn write_arc_table(path: &Path, arcs: &[Arc]) -> InstanceResult<()> {
    let file = std::fs::File::create(path)?;
    write_arcs(file, arcs)
}

pub fn write_arcs<W: Write>(writer: W, arcs: &[Arc]) -> InstanceResult<()> {
    let mut w = csv::Writer::from_writer(writer);
    for arc in arcs {
        w.serialize(ArcRecord {
            from: arc.from.as_str().to_owned(),
            to: arc.to.as_str().to_owned(),
            cost_ms: arc.cost_ms,
        })?;
    }
    w.flush()?;
    Ok(())
}

/// Load an arc table from `path`.
pub fn read_arc_table(path: &Path) -> InstanceResult<Vec<Arc>> {
    let file = std::fs::File::open(path)?;
    read_arcs(file)
}

pub fn read_arcs<R: Read>(reader: R) -> InstanceResult<Vec<Arc>> {
    let mut r = csv::Reader::from_reader(reader);
    let mut arcs = Vec::new();
    for result in r.deserialize::<ArcRecord>() {
        let rec = result?;
        arcs.push(Arc {
            from: NodeId::new(rec.from),
            to: NodeId::new(rec.to),
            cost_ms: rec.cost_ms,
        });
    }
    Ok(arcs)
}
