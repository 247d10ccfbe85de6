//! Seeded random instance generator.
//!
//! Places nodes in a square of side `size_m`: entries and exits land in a
//! border band `margin_frac * size_m` wide (they are boundary points of the
//! network), parkings and objectives in the interior.  Arcs are then derived
//! by the cost model, so a generated instance is valid by construction.
//!
//! Generation is deterministic for a given config: the RNG is seeded
//! explicitly, and nodes are placed in class order (E, S, P, D).

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use pw_core::{NodeClass, NodeId, Point, SpeedProfile};

use crate::model::{Instance, Node};
use crate::{InstanceError, InstanceResult};

/// Instance generation parameters.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub entries: u32,
    pub exits: u32,
    pub parkings: u32,
    pub objectives: u32,
    /// Side of the square placement area, metres.
    pub size_m: f64,
    /// Width of the entry/exit border band, as a fraction of `size_m`.
    pub margin_frac: f64,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    /// The reference configuration: a 100 km square with a 15 % border band.
    fn default() -> Self {
        Self {
            entries: 2,
            exits: 2,
            parkings: 2,
            objectives: 5,
            size_m: 100_000.0,
            margin_frac: 0.15,
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    fn validate(&self) -> InstanceResult<()> {
        if self.size_m <= 0.0 {
            return Err(InstanceError::Generator(format!(
                "size_m must be positive, got {}",
                self.size_m
            )));
        }
        if !(0.0..0.5).contains(&self.margin_frac) {
            return Err(InstanceError::Generator(format!(
                "margin_frac must be in [0, 0.5), got {}",
                self.margin_frac
            )));
        }
        Ok(())
    }
}

/// Generate a random instance under `config`, pricing arcs with `speeds`.
pub fn generate(config: &GeneratorConfig, speeds: &SpeedProfile) -> InstanceResult<Instance> {
    config.validate()?;

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let size = config.size_m;
    let margin = config.margin_frac * size;

    let mut nodes = Vec::new();
    let counts = [
        (NodeClass::Entry, config.entries),
        (NodeClass::Exit, config.exits),
        (NodeClass::Parking, config.parkings),
        (NodeClass::Objective, config.objectives),
    ];
    for (class, count) in counts {
        for n in 1..=count {
            let pos = match class {
                NodeClass::Entry | NodeClass::Exit => border_position(&mut rng, size, margin),
                NodeClass::Parking | NodeClass::Objective => {
                    interior_position(&mut rng, size, margin)
                }
            };
            let node = Node::new(NodeId::numbered(class, n as usize), pos)?;
            nodes.push(node);
        }
    }

    Instance::from_nodes(nodes, speeds)
}

/// A point in the border band: one of the four sides, uniform along it,
/// within `margin` of the edge.
fn border_position(rng: &mut SmallRng, size: f64, margin: f64) -> Point {
    let along = rng.gen_range(0.0..size);
    let depth = rng.gen_range(0.0..margin.max(f64::MIN_POSITIVE));
    match rng.gen_range(0..4u8) {
        0 => Point::new(along, size - depth), // top
        1 => Point::new(along, depth),        // bottom
        2 => Point::new(depth, along),        // left
        _ => Point::new(size - depth, along), // right
    }
}

/// A point uniform in the interior square `[margin, size - margin]²`.
fn interior_position(rng: &mut SmallRng, size: f64, margin: f64) -> Point {
    Point::new(
        rng.gen_range(margin..=size - margin),
        rng.gen_range(margin..=size - margin),
    )
}
