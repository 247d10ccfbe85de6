//! Instance data model: nodes, arcs, and the instance that owns them.

use rustc_hash::{FxHashMap, FxHashSet};

use pw_core::{NodeClass, NodeId, Point, SpeedProfile};

use crate::cost;
use crate::{InstanceError, InstanceResult};

// ── Node ──────────────────────────────────────────────────────────────────────

/// A positioned, classed network node.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub pos: Point,
    pub class: NodeClass,
}

impl Node {
    /// Build a node, deriving the class from the id prefix.
    pub fn new(id: NodeId, pos: Point) -> InstanceResult<Self> {
        let class = id.class_checked()?;
        Ok(Self { id, pos, class })
    }
}

// ── Arc ───────────────────────────────────────────────────────────────────────

/// A directed, weighted arc.  `cost_ms` is strictly positive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arc {
    pub from: NodeId,
    pub to: NodeId,
    pub cost_ms: u64,
}

// ── ClassCounts ───────────────────────────────────────────────────────────────

/// Node counts per class, as recorded in the experiment log.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassCounts {
    pub entries: u32,
    pub exits: u32,
    pub parkings: u32,
    pub objectives: u32,
}

impl ClassCounts {
    pub fn total(&self) -> u32 {
        self.entries + self.exits + self.parkings + self.objectives
    }
}

// ── Instance ──────────────────────────────────────────────────────────────────

/// A complete routing instance: node table plus derived arc table.
///
/// Node iteration order is the insertion order of the node table, and the arc
/// table is ordered the way [`cost::build_arcs`] emits it, so two instances
/// built from the same node table compare equal.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    nodes: Vec<Node>,
    arcs: Vec<Arc>,
    by_id: FxHashMap<NodeId, usize>,
}

impl Instance {
    /// Build an instance from a node table, deriving the full arc set via the
    /// cost model.  Fails on duplicate ids.
    pub fn from_nodes(nodes: Vec<Node>, speeds: &SpeedProfile) -> InstanceResult<Self> {
        let by_id = Self::index(&nodes)?;
        let arcs = cost::build_arcs(&nodes, speeds);
        Ok(Self { nodes, arcs, by_id })
    }

    /// Rebuild an instance from previously persisted node and arc tables.
    ///
    /// Tables come from outside the process, so the arc invariants are
    /// re-checked here: known endpoints, no self-loops, strictly positive
    /// cost, an allowed class transition, and no duplicate `(from, to)`.
    pub fn from_tables(nodes: Vec<Node>, arcs: Vec<Arc>) -> InstanceResult<Self> {
        let by_id = Self::index(&nodes)?;
        Self::validate_arcs(&nodes, &by_id, &arcs)?;
        Ok(Self { nodes, arcs, by_id })
    }

    fn validate_arcs(
        nodes: &[Node],
        by_id: &FxHashMap<NodeId, usize>,
        arcs: &[Arc],
    ) -> InstanceResult<()> {
        let mut seen: FxHashSet<(&str, &str)> = FxHashSet::default();
        for arc in arcs {
            let class_of = |id: &NodeId| {
                by_id
                    .get(id)
                    .map(|&i| nodes[i].class)
                    .ok_or_else(|| InstanceError::UnknownArcEndpoint(id.as_str().to_owned()))
            };
            let from_class = class_of(&arc.from)?;
            let to_class = class_of(&arc.to)?;

            let endpoints = || (arc.from.as_str().to_owned(), arc.to.as_str().to_owned());
            if arc.from == arc.to {
                return Err(InstanceError::SelfLoopArc(arc.from.as_str().to_owned()));
            }
            if arc.cost_ms == 0 {
                let (from, to) = endpoints();
                return Err(InstanceError::ZeroCostArc(from, to));
            }
            if cost::regime_for(from_class, to_class).is_none() {
                let (from, to) = endpoints();
                return Err(InstanceError::ForbiddenArc(from, to));
            }
            if !seen.insert((arc.from.as_str(), arc.to.as_str())) {
                let (from, to) = endpoints();
                return Err(InstanceError::DuplicateArc(from, to));
            }
        }
        Ok(())
    }

    fn index(nodes: &[Node]) -> InstanceResult<FxHashMap<NodeId, usize>> {
        let mut by_id = FxHashMap::default();
        for (i, node) in nodes.iter().enumerate() {
            if by_id.insert(node.id.clone(), i).is_some() {
                return Err(InstanceError::DuplicateNodeId(node.id.as_str().to_owned()));
            }
        }
        Ok(by_id)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.by_id.get(id).map(|&i| &self.nodes[i])
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node counts per class.
    pub fn class_counts(&self) -> ClassCounts {
        let mut counts = ClassCounts::default();
        for node in &self.nodes {
            match node.class {
                NodeClass::Entry => counts.entries += 1,
                NodeClass::Exit => counts.exits += 1,
                NodeClass::Parking => counts.parkings += 1,
                NodeClass::Objective => counts.objectives += 1,
            }
        }
        counts
    }
}
