//! Node identifiers and the class encoding they carry.
//!
//! The external solver's file formats address nodes by short string ids whose
//! leading letter encodes the node class (`E3`, `P1`, `D12`, ...).  The id is
//! therefore the single source of truth for a node's class; [`NodeId::class`]
//! is how the rest of the harness recovers it.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── NodeClass ─────────────────────────────────────────────────────────────────

/// The four node classes of the park-and-walk network.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeClass {
    /// Network boundary point where a vehicle enters the area.
    Entry,
    /// Network boundary point where a vehicle leaves the area.
    Exit,
    /// Hub connecting the vehicular and pedestrian sub-networks.
    Parking,
    /// Pedestrian-reachable destination to be visited.
    Objective,
}

impl NodeClass {
    /// All classes, in the canonical order used by tables and log columns.
    pub const ALL: [NodeClass; 4] =
        [NodeClass::Entry, NodeClass::Exit, NodeClass::Parking, NodeClass::Objective];

    /// The id prefix letter for this class (`E`, `S`, `P`, `D`).
    ///
    /// `S` and `D` are fixed by the solver's wire format, not free to rename.
    pub fn prefix(self) -> char {
        match self {
            NodeClass::Entry => 'E',
            NodeClass::Exit => 'S',
            NodeClass::Parking => 'P',
            NodeClass::Objective => 'D',
        }
    }

    /// Inverse of [`prefix`](Self::prefix).
    pub fn from_prefix(c: char) -> Option<Self> {
        match c {
            'E' => Some(NodeClass::Entry),
            'S' => Some(NodeClass::Exit),
            'P' => Some(NodeClass::Parking),
            'D' => Some(NodeClass::Objective),
            _ => None,
        }
    }
}

impl fmt::Display for NodeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeClass::Entry => "entry",
            NodeClass::Exit => "exit",
            NodeClass::Parking => "parking",
            NodeClass::Objective => "objective",
        };
        f.write_str(s)
    }
}

// ── NodeId ────────────────────────────────────────────────────────────────────

/// A node identifier, e.g. `E1` or `D7`.
///
/// Ids are unique across the whole node set regardless of class.  Cheap to
/// clone (short strings); used as map keys throughout the harness.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build the canonical id for a class and a 1-based ordinal, e.g.
    /// `(Parking, 2)` → `P2`.
    pub fn numbered(class: NodeClass, n: usize) -> Self {
        Self(format!("{}{n}", class.prefix()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The class encoded in the id's first character, if recognized.
    pub fn class(&self) -> Option<NodeClass> {
        self.0.chars().next().and_then(NodeClass::from_prefix)
    }

    /// Like [`class`](Self::class) but surfaces the failure as a `CoreError`.
    pub fn class_checked(&self) -> CoreResult<NodeClass> {
        self.class()
            .ok_or_else(|| CoreError::UnknownClassPrefix(self.0.clone()))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
