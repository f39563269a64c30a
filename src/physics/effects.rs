//! Impact effect estimates derived from impact energy.
//!
//! These are the simplified scaling laws used by the Earth Impact Effects
//! Program style calculators. They are illustrative only.

use std::fmt;

use serde::Serialize;

use super::energy::{ImpactEnergyResult, compute_energy};
use crate::types::{ASTEROID_DENSITY, ImpactParameters};

/// Ocean depth assumed for tsunami estimates (meters).
pub const DEFAULT_OCEAN_DEPTH_M: f64 = 4000.0;

/// Smallest crater or fireball ever reported (km).
const MIN_REPORTED_RADIUS_KM: f64 = 0.1;

/// Energy above which a complex crater forms (megatons).
const COMPLEX_CRATER_THRESHOLD_MT: f64 = 1000.0;

/// Severity category of an impact by released energy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ImpactCategory {
    /// Below 0.01 MT
    Local,
    /// Below 10 MT
    Regional,
    /// Below 1000 MT
    Continental,
    /// Below one million MT
    Global,
    /// Everything above
    Extinction,
}

impl ImpactCategory {
    /// Classify an impact by its energy in megatons.
    pub fn from_megatons(energy_megatons: f64) -> Self {
        if energy_megatons < 0.01 {
            Self::Local
        } else if energy_megatons < 10.0 {
            Self::Regional
        } else if energy_megatons < 1000.0 {
            Self::Continental
        } else if energy_megatons < 1_000_000.0 {
            Self::Global
        } else {
            Self::Extinction
        }
    }

    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Local => "Local effects",
            Self::Regional => "Regional devastation",
            Self::Continental => "Continental effects",
            Self::Global => "Global catastrophe",
            Self::Extinction => "Extinction-level event",
        }
    }

    /// One-line summary of what the category means on the ground.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::Local => "Fireball, minor damage",
            Self::Regional => "Large crater, widespread damage",
            Self::Continental => "Massive crater, global climate effects",
            Self::Global => "Mass extinction threshold",
            Self::Extinction => "Planetary-scale destruction",
        }
    }
}

impl fmt::Display for ImpactCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.summary())
    }
}

/// Estimated consequences of an impact.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ImpactEffects {
    pub energy: ImpactEnergyResult,
    /// Final crater diameter (km), never below 0.1
    pub crater_diameter_km: f64,
    /// Richter-equivalent magnitude
    pub seismic_magnitude: f64,
    /// Thermal fireball radius (km)
    pub fireball_radius_km: f64,
    /// Tsunami wave height for an ocean impact at default depth (m)
    pub tsunami_height_m: f64,
    pub category: ImpactCategory,
}

/// Crater diameter from energy and projectile density.
///
/// Simple craters use k = 0.07, complex craters (> 1000 MT) k = 0.12:
/// D = k · E^0.294 · (ρ/1000)^(-1/3)
pub fn crater_diameter_km(energy_megatons: f64, density: f64) -> f64 {
    if energy_megatons <= 0.0 {
        return MIN_REPORTED_RADIUS_KM;
    }
    let k = if energy_megatons > COMPLEX_CRATER_THRESHOLD_MT {
        0.12
    } else {
        0.07
    };
    k * energy_megatons.powf(0.294) * (density / 1000.0).powf(-1.0 / 3.0)
}

/// Richter magnitude: M = 0.67 · log10(E) - 5.87
pub fn seismic_magnitude(energy_joules: f64) -> f64 {
    if energy_joules <= 0.0 {
        return 0.0;
    }
    0.67 * energy_joules.log10() - 5.87
}

/// Fireball radius: R = 0.002 · E^0.41
pub fn fireball_radius_km(energy_megatons: f64) -> f64 {
    if energy_megatons <= 0.0 {
        return MIN_REPORTED_RADIUS_KM;
    }
    0.002 * energy_megatons.powf(0.41)
}

/// Tsunami height: H = 0.5 · E^0.5 · (depth/4000)^0.5
pub fn tsunami_height_m(energy_megatons: f64, ocean_depth_m: f64) -> f64 {
    if energy_megatons <= 0.0 {
        return 0.0;
    }
    0.5 * energy_megatons.sqrt() * (ocean_depth_m / DEFAULT_OCEAN_DEPTH_M).sqrt()
}

/// Compute every effect estimate for a parameter set.
pub fn impact_effects(params: &ImpactParameters) -> ImpactEffects {
    let energy = compute_energy(params);
    let mt = energy.energy_megatons;

    ImpactEffects {
        energy,
        crater_diameter_km: crater_diameter_km(mt, ASTEROID_DENSITY).max(MIN_REPORTED_RADIUS_KM),
        seismic_magnitude: seismic_magnitude(energy.energy_joules),
        fireball_radius_km: fireball_radius_km(mt),
        tsunami_height_m: tsunami_height_m(mt, DEFAULT_OCEAN_DEPTH_M),
        category: ImpactCategory::from_megatons(mt),
    }
}
