//! Test utilities for impact model tests.
//!
//! Provides fixtures for common parameter sets and outcomes, and assertions
//! for comparing scene-space vectors.

use bevy::math::DVec3;

use crate::trajectory::{ImpactOutcome, start_position_for_angle};
use crate::types::ImpactParameters;

/// Fixtures for creating test scenarios.
pub mod fixtures {
    use super::*;

    /// 1 km asteroid at 20 km/s approaching at 45°.
    pub fn params() -> ImpactParameters {
        ImpactParameters::new(1.0, 20.0, 45.0).expect("fixture parameters are valid")
    }

    /// Start position matching [`params`].
    pub fn start_position() -> DVec3 {
        start_position_for_angle(45.0)
    }

    /// Impact in the North Atlantic.
    pub fn impact_outcome() -> ImpactOutcome {
        ImpactOutcome::impact_at(35.0, -40.0)
    }

    /// Miss passing two Earth radii out with moderate curvature.
    pub fn miss_outcome() -> ImpactOutcome {
        ImpactOutcome::Miss {
            miss_distance_km: 12_742.0,
            approach: DVec3::new(0.7, 0.5, 0.5),
            curve_factor: Some(0.8),
        }
    }
}

/// Assertions for vector comparisons.
pub mod assertions {
    use super::*;

    /// Assert two vectors agree component-wise within `epsilon`.
    pub fn assert_vec_near(actual: DVec3, expected: DVec3, epsilon: f64) {
        let diff = (actual - expected).abs().max_element();
        assert!(
            diff <= epsilon,
            "vectors differ by {diff:e} (> {epsilon:e}): got {actual:?}, expected {expected:?}"
        );
    }
}
