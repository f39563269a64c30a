//! Property-based tests for trajectory sampling.

use bevy::math::DVec3;
use proptest::prelude::*;

use super::{ImpactOutcome, build_trajectory, ease_in_out_cubic, lat_long_to_vec3, sample_trajectory};
use crate::classifier::{Severity, classify_approach_severity};
use crate::types::EARTH_RADIUS_SCENE;

fn scene_point() -> impl Strategy<Value = DVec3> {
    (-200.0f64..200.0, -200.0f64..200.0, -200.0f64..200.0).prop_map(|(x, y, z)| DVec3::new(x, y, z))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Impact paths hit their endpoints exactly.
    #[test]
    fn prop_impact_endpoints_exact(
        start in scene_point(),
        latitude in -90.0f64..90.0,
        longitude in -180.0f64..180.0,
    ) {
        let outcome = ImpactOutcome::Impact {
            point: lat_long_to_vec3(latitude, longitude, EARTH_RADIUS_SCENE),
            curve_factor: None,
        };
        let spec = build_trajectory(start, &outcome);
        prop_assert_eq!(sample_trajectory(&spec, 0.0), spec.start);
        prop_assert_eq!(sample_trajectory(&spec, 1.0), spec.end);
    }

    /// Miss paths leave from the start point exactly.
    #[test]
    fn prop_miss_starts_at_start(
        start in scene_point(),
        approach in scene_point(),
        miss_distance_km in 0.0f64..1.0e6,
        curve in 0.1f64..5.0,
    ) {
        let outcome = ImpactOutcome::Miss {
            miss_distance_km,
            approach,
            curve_factor: Some(curve),
        };
        let spec = build_trajectory(start, &outcome);
        prop_assert_eq!(sample_trajectory(&spec, 0.0), spec.start);
        prop_assert!((spec.end.length() - 200.0).abs() < 1e-9);
    }

    /// Easing is monotone on [0, 1] and stays within it.
    #[test]
    fn prop_ease_monotone(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let (elo, ehi) = (ease_in_out_cubic(lo), ease_in_out_cubic(hi));
        prop_assert!(elo <= ehi);
        prop_assert!((0.0..=1.0).contains(&elo) && (0.0..=1.0).contains(&ehi));
    }

    /// Resampling is pure: same progress, same point.
    #[test]
    fn prop_sampling_repeatable(start in scene_point(), progress in 0.0f64..=1.0) {
        let spec = build_trajectory(start, &ImpactOutcome::impact_at(12.0, 34.0));
        prop_assert_eq!(sample_trajectory(&spec, progress), sample_trajectory(&spec, progress));
    }

    /// Severity never decreases as the angle steepens, and is repeatable.
    #[test]
    fn prop_severity_monotone(a in 0.0f64..=90.0, b in 0.0f64..=90.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(classify_approach_severity(lo) <= classify_approach_severity(hi));
        prop_assert_eq!(classify_approach_severity(a), classify_approach_severity(a));
        prop_assert_eq!(classify_approach_severity(b) == Severity::High, b > 70.0);
    }
}
