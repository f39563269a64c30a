//! Kinetic impact energy.
//!
//! The asteroid is treated as a uniform sphere of [`ASTEROID_DENSITY`].
//! Energy scales with the cube of diameter and the square of velocity.

use serde::Serialize;

use crate::types::{ASTEROID_DENSITY, ImpactParameters, JOULES_PER_MEGATON};

/// Energy released by one impact, derived from [`ImpactParameters`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ImpactEnergyResult {
    /// Projectile mass (kg)
    pub mass_kg: f64,
    /// Kinetic energy (J)
    pub energy_joules: f64,
    /// Kinetic energy in megatons of TNT
    pub energy_megatons: f64,
}

/// Mass of a uniform sphere of the given diameter and density.
///
/// # Arguments
/// * `diameter_km` - Sphere diameter (km)
/// * `density` - Bulk density (kg/m³)
pub fn asteroid_mass_kg(diameter_km: f64, density: f64) -> f64 {
    let radius_m = diameter_km * 500.0;
    let volume = (4.0 / 3.0) * std::f64::consts::PI * radius_m.powi(3);
    volume * density
}

/// E = ½mv²
#[inline]
pub fn kinetic_energy_joules(mass_kg: f64, velocity_m_s: f64) -> f64 {
    0.5 * mass_kg * velocity_m_s * velocity_m_s
}

/// Convert joules to megatons of TNT.
#[inline]
pub fn joules_to_megatons(joules: f64) -> f64 {
    joules / JOULES_PER_MEGATON
}

/// Impact energy in megatons of TNT.
///
/// Total over positive reals: very large diameters are not rejected. NaN or
/// infinite input produces a non-finite result, which callers must check.
pub fn compute_energy_megatons(diameter_km: f64, velocity_km_s: f64) -> f64 {
    let mass = asteroid_mass_kg(diameter_km, ASTEROID_DENSITY);
    joules_to_megatons(kinetic_energy_joules(mass, velocity_km_s * 1000.0))
}

/// Full energy breakdown for a parameter set.
pub fn compute_energy(params: &ImpactParameters) -> ImpactEnergyResult {
    let mass_kg = asteroid_mass_kg(params.diameter_km, ASTEROID_DENSITY);
    let energy_joules = kinetic_energy_joules(mass_kg, params.velocity_m_s());
    ImpactEnergyResult {
        mass_kg,
        energy_joules,
        energy_megatons: joules_to_megatons(energy_joules),
    }
}
