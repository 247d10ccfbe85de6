//! The cost model: allowed class transitions and distance→time conversion.
//!
//! The arc set of an instance is fully determined by its node table.  For
//! every ordered node pair whose class pair appears in [`ALLOWED_TRANSITIONS`]
//! exactly one arc is emitted; no other arcs exist.  Self-loops cannot arise
//! because no class pair maps a node onto itself with identical ids.
//!
//! Pure and deterministic: identical inputs yield an identical arc set.

use pw_core::{NodeClass, Regime, SpeedProfile};

use crate::model::{Arc, Node};

/// Class pairs that admit an arc, and the regime pricing it.
///
/// | From → To               | Regime     |
/// |-------------------------|------------|
/// | Entry → Parking         | vehicular  |
/// | Parking → Exit          | vehicular  |
/// | Parking → Parking       | vehicular  |
/// | Parking → Objective     | pedestrian |
/// | Objective → Objective   | pedestrian |
/// | Objective → Parking     | pedestrian |
pub const ALLOWED_TRANSITIONS: [(NodeClass, NodeClass, Regime); 6] = [
    (NodeClass::Entry, NodeClass::Parking, Regime::Vehicular),
    (NodeClass::Parking, NodeClass::Exit, Regime::Vehicular),
    (NodeClass::Parking, NodeClass::Parking, Regime::Vehicular),
    (NodeClass::Parking, NodeClass::Objective, Regime::Pedestrian),
    (NodeClass::Objective, NodeClass::Objective, Regime::Pedestrian),
    (NodeClass::Objective, NodeClass::Parking, Regime::Pedestrian),
];

/// The regime for a class transition, or `None` if no arc is allowed.
pub fn regime_for(from: NodeClass, to: NodeClass) -> Option<Regime> {
    ALLOWED_TRANSITIONS
        .iter()
        .find(|(f, t, _)| *f == from && *t == to)
        .map(|(_, _, regime)| *regime)
}

/// Travel time in milliseconds for `distance_m` at `speed_mps`.
///
/// Rounds half-up, then adds 1 so the weight is strictly positive even for
/// near-coincident nodes — the external solver rejects zero-cost arcs.
pub fn cost_ms(distance_m: f64, speed_mps: f64) -> u64 {
    (distance_m / speed_mps * 1000.0 + 0.5).floor() as u64 + 1
}

/// Derive the complete arc set for `nodes` under `speeds`.
///
/// Arcs are emitted in node-table order (outer loop = from, inner = to), so
/// the output order is deterministic.
pub fn build_arcs(nodes: &[Node], speeds: &SpeedProfile) -> Vec<Arc> {
    let mut arcs = Vec::new();
    for (i, from) in nodes.iter().enumerate() {
        for (j, to) in nodes.iter().enumerate() {
            if i == j {
                continue;
            }
            let Some(regime) = regime_for(from.class, to.class) else {
                continue;
            };
            let dist = from.pos.distance_m(to.pos);
            arcs.push(Arc {
                from: from.id.clone(),
                to: to.id.clone(),
                cost_ms: cost_ms(dist, speeds.speed_mps(regime)),
            });
        }
    }
    arcs
}
