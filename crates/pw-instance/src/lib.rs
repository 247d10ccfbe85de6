//! `pw-instance` — the routing instance and everything that produces one.
//!
//! An [`Instance`] is a node table plus the weighted directed arc set derived
//! from it.  Arcs are never hand-authored: the [`cost`] module owns the
//! allowed-transition table and the distance→time conversion, so an instance
//! built through [`Instance::from_nodes`] is correct by construction.
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`model`]     | `Node`, `Arc`, `Instance`, `ClassCounts`                  |
//! | [`cost`]      | allowed transitions, `cost_ms`, `build_arcs`              |
//! | [`tables`]    | CSV read/write of node and arc tables                     |
//! | [`generator`] | seeded random instance placement                          |
//! | [`error`]     | `InstanceError`, `InstanceResult`                         |

pub mod cost;
pub mod error;
pub mod generator;
pub mod model;
pub mod tables;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{InstanceError, InstanceResult};
pub use generator::GeneratorConfig;
pub use model::{Arc, ClassCounts, Instance, Node};
