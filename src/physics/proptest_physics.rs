//! Property-based tests for the energy model using proptest.
//!
//! These tests verify the ordering and purity guarantees of the energy
//! calculation across the full slider range and beyond.

use proptest::prelude::*;

use super::{compute_energy_megatons, impact_effects};
use crate::types::ImpactParameters;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Energy is positive for any positive diameter and velocity.
    #[test]
    fn prop_energy_positive(
        diameter in 0.001f64..100.0,
        velocity in 0.1f64..100.0,
    ) {
        let energy = compute_energy_megatons(diameter, velocity);
        prop_assert!(energy > 0.0 && energy.is_finite());
    }

    /// Strictly increasing in diameter at fixed velocity.
    #[test]
    fn prop_energy_increasing_in_diameter(
        diameter in 0.001f64..100.0,
        growth in 1.001f64..10.0,
        velocity in 0.1f64..100.0,
    ) {
        let smaller = compute_energy_megatons(diameter, velocity);
        let larger = compute_energy_megatons(diameter * growth, velocity);
        prop_assert!(larger > smaller, "{} !> {}", larger, smaller);
    }

    /// Strictly increasing in velocity at fixed diameter.
    #[test]
    fn prop_energy_increasing_in_velocity(
        diameter in 0.001f64..100.0,
        velocity in 0.1f64..100.0,
        growth in 1.001f64..10.0,
    ) {
        let slower = compute_energy_megatons(diameter, velocity);
        let faster = compute_energy_megatons(diameter, velocity * growth);
        prop_assert!(faster > slower, "{} !> {}", faster, slower);
    }

    /// Identical inputs give bit-identical results.
    #[test]
    fn prop_energy_idempotent(
        diameter in 0.001f64..100.0,
        velocity in 0.1f64..100.0,
    ) {
        let first = compute_energy_megatons(diameter, velocity);
        let second = compute_energy_megatons(diameter, velocity);
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }

    /// Effect estimates stay finite and ordered with energy.
    #[test]
    fn prop_effects_grow_with_velocity(
        diameter in 0.01f64..10.0,
        velocity in 11.0f64..72.0,
        angle in 0.0f64..=90.0,
    ) {
        let slow = impact_effects(&ImpactParameters::new(diameter, velocity, angle).unwrap());
        let fast = impact_effects(&ImpactParameters::new(diameter, velocity * 1.5, angle).unwrap());

        prop_assert!(fast.seismic_magnitude > slow.seismic_magnitude);
        prop_assert!(fast.fireball_radius_km > slow.fireball_radius_km);
        prop_assert!(fast.crater_diameter_km >= slow.crater_diameter_km);
        prop_assert!(fast.category >= slow.category);
    }
}
