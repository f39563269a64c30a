//! Closed-form impact physics.
//!
//! Everything here is a pure function of its arguments: kinetic energy of a
//! uniform rocky sphere, and the illustrative scaling laws used to turn that
//! energy into crater, seismic, thermal and tsunami figures.

mod effects;
mod energy;

#[cfg(test)]
mod proptest_physics;

pub use effects::{
    ImpactCategory, ImpactEffects, crater_diameter_km, fireball_radius_km, impact_effects,
    seismic_magnitude, tsunami_height_m, DEFAULT_OCEAN_DEPTH_M,
};
pub use energy::{
    ImpactEnergyResult, asteroid_mass_kg, compute_energy, compute_energy_megatons,
    joules_to_megatons, kinetic_energy_joules,
};
