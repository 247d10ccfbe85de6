//! Speed regimes and the speed profile that prices them.
//!
//! Every arc in the network is traversed under exactly one regime: vehicular
//! (entry/parking/exit legs) or pedestrian (parking/objective legs).  The
//! regime picks which speed converts distance into travel time.

/// Speed class governing arc cost conversion from distance to time.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Regime {
    Vehicular,
    Pedestrian,
}

/// Speeds for both regimes, in metres per second.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedProfile {
    pub vehicular_mps: f64,
    pub pedestrian_mps: f64,
}

impl SpeedProfile {
    /// Build a profile from km/h figures, the unit speed limits are quoted in.
    pub fn from_kmh(vehicular_kmh: f64, pedestrian_kmh: f64) -> Self {
        Self {
            vehicular_mps: vehicular_kmh * 1000.0 / 3600.0,
            pedestrian_mps: pedestrian_kmh * 1000.0 / 3600.0,
        }
    }

    /// The speed for `regime`, in m/s.
    #[inline]
    pub fn speed_mps(&self, regime: Regime) -> f64 {
        match regime {
            Regime::Vehicular => self.vehicular_mps,
            Regime::Pedestrian => self.pedestrian_mps,
        }
    }
}

impl Default for SpeedProfile {
    /// 50 km/h urban driving, 7 km/h brisk walking.
    fn default() -> Self {
        Self::from_kmh(50.0, 7.0)
    }
}
