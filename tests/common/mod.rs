//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::math::DVec3;
use impactor::types::ImpactParameters;

/// Closed-form energy check written out step by step.
pub fn reference_energy_megatons(diameter_km: f64, velocity_km_s: f64) -> f64 {
    let radius_m = diameter_km * 1000.0 / 2.0;
    let volume = 4.0 / 3.0 * std::f64::consts::PI * radius_m.powi(3);
    let mass = volume * 3000.0;
    0.5 * mass * (velocity_km_s * 1000.0).powi(2) / 4.184e15
}

/// Parameters that are known to be valid.
pub fn params(diameter_km: f64, velocity_km_s: f64, angle_deg: f64) -> ImpactParameters {
    ImpactParameters::new(diameter_km, velocity_km_s, angle_deg).expect("valid test parameters")
}

/// Largest component-wise difference between two vectors.
pub fn max_diff(a: DVec3, b: DVec3) -> f64 {
    (a - b).abs().max_element()
}
