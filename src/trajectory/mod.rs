//! Asteroid approach trajectories.
//!
//! A [`TrajectorySpec`] is built once per simulation run from a start point
//! and an [`ImpactOutcome`], then sampled at increasing progress values by the
//! caller. Nothing here keeps time: progress bookkeeping belongs to whoever
//! drives the animation.
//!
//! - Impact: quadratic Bezier from the start through a lifted control point
//!   down to the impact point on the Earth's surface.
//! - Miss: eased straight line out along the approach direction with a
//!   sinusoidal vertical bow standing in for gravitational deflection.

pub mod approach;
pub mod curve;
pub mod report;

#[cfg(test)]
mod proptest_trajectory;

use bevy::math::DVec3;
use serde::Serialize;

pub use approach::{
    approach_vector, gravitational_influence_m, impact_probability, miss_distance_km,
    predict_outcome, predicts_impact, speed_multiplier, start_position_for_angle,
    trajectory_curve,
};
pub use curve::{ease_in_out_cubic, lat_long_to_vec3, lerp, quadratic_bezier};
pub use report::{OutcomeError, OutcomeReport};

use crate::types::{
    EARTH_RADIUS_KM, EARTH_RADIUS_SCENE, IMPACT_CONTROL_FRACTION, IMPACT_CONTROL_LIFT,
    MISS_BOW_SCALE, MISS_END_DISTANCE_SCENE,
};

/// Curve factor used for impacts when the outcome does not provide one.
pub const DEFAULT_IMPACT_CURVE: f64 = 0.5;

/// Curve factor used for misses when the outcome does not provide one.
pub const DEFAULT_MISS_CURVE: f64 = 1.0;

/// Which family of path a trajectory follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TrajectoryKind {
    Impact,
    Miss,
}

impl TrajectoryKind {
    /// Wall-clock length of the approach animation (seconds).
    pub fn animation_duration_secs(&self) -> f64 {
        match self {
            TrajectoryKind::Impact => 4.0,
            TrajectoryKind::Miss => 5.0,
        }
    }
}

/// Result of a simulation as far as the path is concerned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ImpactOutcome {
    /// Asteroid strikes the Earth.
    Impact {
        /// Impact point in scene coordinates (on the Earth sphere).
        point: DVec3,
        /// Path curvature. None = [`DEFAULT_IMPACT_CURVE`].
        curve_factor: Option<f64>,
    },
    /// Asteroid passes by.
    Miss {
        /// Closest approach distance from the Earth's surface (km).
        miss_distance_km: f64,
        /// Direction the asteroid leaves along. Need not be normalized.
        approach: DVec3,
        /// Path curvature. None = [`DEFAULT_MISS_CURVE`].
        curve_factor: Option<f64>,
    },
}

impl ImpactOutcome {
    /// Impact at a geographic location on the scene Earth.
    pub fn impact_at(latitude: f64, longitude: f64) -> Self {
        ImpactOutcome::Impact {
            point: lat_long_to_vec3(latitude, longitude, EARTH_RADIUS_SCENE),
            curve_factor: None,
        }
    }

    pub fn is_impact(&self) -> bool {
        matches!(self, ImpactOutcome::Impact { .. })
    }
}

/// Geometry of one approach, consumed frame by frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectorySpec {
    pub kind: TrajectoryKind,
    pub start: DVec3,
    pub end: DVec3,
    /// Bezier control point for impacts; closest-approach marker for misses.
    pub control: DVec3,
    pub curve_factor: f64,
}

impl TrajectorySpec {
    /// Position at `progress` in [0, 1].
    pub fn sample(&self, progress: f64) -> DVec3 {
        sample_trajectory(self, progress)
    }

    /// Evenly spaced positions along the whole path, endpoints included.
    ///
    /// Used for trail and preview polylines.
    pub fn sample_path(&self, segments: usize) -> Vec<DVec3> {
        if segments == 0 {
            return vec![self.start];
        }
        (0..=segments)
            .map(|i| self.sample(i as f64 / segments as f64))
            .collect()
    }

    /// Flat lesson path for the tutorial trajectory demo.
    ///
    /// Coordinates are percentages of the demo panel (x, y) with z = 0.
    /// Steeper angles push the control point down toward the Earth.
    pub fn tutorial(angle_deg: f64) -> Self {
        TrajectorySpec {
            kind: TrajectoryKind::Impact,
            start: DVec3::new(100.0, 20.0, 0.0),
            end: DVec3::new(50.0, 50.0, 0.0),
            control: DVec3::new(75.0, 20.0 + (angle_deg / 90.0) * 30.0, 0.0),
            curve_factor: 0.0,
        }
    }

    /// Animation length matching this trajectory's kind.
    pub fn duration_secs(&self) -> f64 {
        self.kind.animation_duration_secs()
    }
}

/// Build the trajectory for a run.
///
/// # Arguments
/// * `start` - Asteroid position when the run begins (scene units)
/// * `outcome` - Impact point or miss geometry
pub fn build_trajectory(start: DVec3, outcome: &ImpactOutcome) -> TrajectorySpec {
    match *outcome {
        ImpactOutcome::Impact {
            point,
            curve_factor,
        } => TrajectorySpec {
            kind: TrajectoryKind::Impact,
            start,
            end: point,
            control: start.lerp(point, IMPACT_CONTROL_FRACTION)
                + DVec3::new(0.0, IMPACT_CONTROL_LIFT, 0.0),
            curve_factor: curve_factor.unwrap_or(DEFAULT_IMPACT_CURVE),
        },
        ImpactOutcome::Miss {
            miss_distance_km,
            approach,
            curve_factor,
        } => {
            let direction = approach.try_normalize().unwrap_or(DVec3::X);
            let miss_distance_scene = miss_distance_km / EARTH_RADIUS_KM * EARTH_RADIUS_SCENE;
            TrajectorySpec {
                kind: TrajectoryKind::Miss,
                start,
                end: direction * MISS_END_DISTANCE_SCENE,
                control: direction * (EARTH_RADIUS_SCENE + miss_distance_scene),
                curve_factor: curve_factor.unwrap_or(DEFAULT_MISS_CURVE),
            }
        }
    }
}

/// Sample a trajectory at `progress`.
///
/// The caller clamps progress to [0, 1]; other values are not meaningful.
/// For impacts the result equals `spec.start` at 0 and `spec.end` at 1 exactly.
pub fn sample_trajectory(spec: &TrajectorySpec, progress: f64) -> DVec3 {
    match spec.kind {
        TrajectoryKind::Impact => quadratic_bezier(spec.start, spec.control, spec.end, progress),
        TrajectoryKind::Miss => {
            let eased = ease_in_out_cubic(progress);
            let mut point = lerp(spec.start, spec.end, eased);
            point.y += miss_bow(spec.curve_factor, progress);
            point
        }
    }
}

/// Vertical bow of a miss path: sin(progress·π) · curve · 20
#[inline]
fn miss_bow(curve_factor: f64, progress: f64) -> f64 {
    (progress * std::f64::consts::PI).sin() * curve_factor * MISS_BOW_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    use crate::test_utils::assertions::assert_vec_near;
    use crate::test_utils::fixtures;

    #[test]
    fn test_impact_control_point() {
        let start = DVec3::new(100.0, 0.0, 0.0);
        let outcome = ImpactOutcome::Impact {
            point: DVec3::new(0.0, 0.0, 15.0),
            curve_factor: None,
        };
        let spec = build_trajectory(start, &outcome);

        assert_eq!(spec.kind, TrajectoryKind::Impact);
        assert_relative_eq!(spec.control.x, 70.0);
        assert_relative_eq!(spec.control.y, 30.0);
        assert_relative_eq!(spec.control.z, 4.5);
        assert_eq!(spec.curve_factor, DEFAULT_IMPACT_CURVE);
    }

    #[test]
    fn test_impact_endpoints_exact() {
        let spec = build_trajectory(fixtures::start_position(), &fixtures::impact_outcome());
        assert_eq!(sample_trajectory(&spec, 0.0), spec.start);
        assert_eq!(sample_trajectory(&spec, 1.0), spec.end);
    }

    #[test]
    fn test_miss_geometry() {
        let outcome = ImpactOutcome::Miss {
            miss_distance_km: EARTH_RADIUS_KM,
            approach: DVec3::new(0.0, 0.0, 2.0),
            curve_factor: Some(0.8),
        };
        let spec = build_trajectory(DVec3::new(50.0, 10.0, 50.0), &outcome);

        assert_eq!(spec.kind, TrajectoryKind::Miss);
        assert_eq!(spec.end, DVec3::new(0.0, 0.0, 200.0));
        // One Earth radius of miss distance doubles the marker distance
        assert_relative_eq!(spec.control.z, 30.0);
        assert_eq!(spec.curve_factor, 0.8);
    }

    #[test]
    fn test_miss_zero_approach_falls_back() {
        let outcome = ImpactOutcome::Miss {
            miss_distance_km: 0.0,
            approach: DVec3::ZERO,
            curve_factor: None,
        };
        let spec = build_trajectory(DVec3::ZERO, &outcome);
        assert_eq!(spec.end, DVec3::new(200.0, 0.0, 0.0));
        assert_eq!(spec.curve_factor, DEFAULT_MISS_CURVE);
    }

    #[test]
    fn test_miss_starts_at_start_and_bows_midway() {
        let spec = build_trajectory(fixtures::start_position(), &fixtures::miss_outcome());
        assert_eq!(sample_trajectory(&spec, 0.0), spec.start);

        let mid = sample_trajectory(&spec, 0.5);
        let straight = lerp(spec.start, spec.end, 0.5);
        assert_relative_eq!(mid.y - straight.y, spec.curve_factor * 20.0, epsilon = 1e-9);
        assert_relative_eq!(mid.x, straight.x, epsilon = 1e-9);

        assert_vec_near(sample_trajectory(&spec, 1.0), spec.end, 1e-9);
    }

    #[test]
    fn test_sample_path_endpoints() {
        let spec = build_trajectory(fixtures::start_position(), &fixtures::impact_outcome());
        let path = spec.sample_path(10);
        assert_eq!(path.len(), 11);
        assert_eq!(path[0], spec.start);
        assert_eq!(path[10], spec.end);
        assert_eq!(spec.sample_path(0), vec![spec.start]);
    }

    #[test]
    fn test_tutorial_control_depends_on_angle() {
        let shallow = TrajectorySpec::tutorial(0.0);
        let steep = TrajectorySpec::tutorial(90.0);
        assert_eq!(shallow.control.y, 20.0);
        assert_eq!(steep.control.y, 50.0);
        assert_eq!(steep.sample(1.0), DVec3::new(50.0, 50.0, 0.0));
    }

    #[test]
    fn test_durations() {
        assert_eq!(TrajectoryKind::Impact.animation_duration_secs(), 4.0);
        assert_eq!(TrajectoryKind::Miss.animation_duration_secs(), 5.0);
    }

    #[test]
    fn test_impact_at_lies_on_scene_earth() {
        let ImpactOutcome::Impact { point, .. } = ImpactOutcome::impact_at(35.0, -120.0) else {
            panic!("expected impact outcome");
        };
        assert_relative_eq!(point.length(), EARTH_RADIUS_SCENE, epsilon = 1e-12);
    }
}
