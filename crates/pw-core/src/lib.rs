//! `pw-core` — foundational types for the parkwalk experiment harness.
//!
//! This crate is a dependency of every other `pw-*` crate.  It intentionally
//! has no `pw-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`ids`]     | `NodeId`, `NodeClass`                             |
//! | [`point`]   | planar `Point`, Euclidean distance                |
//! | [`regime`]  | `Regime` enum, `SpeedProfile`                     |
//! | [`error`]   | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod point;
pub mod regime;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{NodeClass, NodeId};
pub use point::Point;
pub use regime::{Regime, SpeedProfile};
