//! Approach geometry heuristics.
//!
//! Deterministic forms of the approach-vector, curvature, miss distance and
//! impact probability rules used to produce simulation outcomes. The
//! randomised variance the remote service applies on top is left out, so
//! [`predict_outcome`] gives the same report for the same parameters.

use bevy::math::DVec3;

use super::report::{ApproachVector, OutcomeReport, TrajectoryData};
use crate::physics::asteroid_mass_kg;
use crate::scenarios::sample_impact_location;
use crate::types::{
    ASTEROID_DENSITY, DEG_TO_RAD, EARTH_ESCAPE_VELOCITY_M_S, EARTH_MASS_KG, EARTH_RADIUS_KM,
    GRAVITATIONAL_CONSTANT, ImpactParameters, START_DISTANCE_SCENE,
};

/// Relative velocity floor for the influence estimate (m/s).
const MIN_RELATIVE_VELOCITY_M_S: f64 = 1000.0;

/// Initial asteroid position for a given approach angle.
///
/// The vertical component is flattened to 30% so the approach stays in view.
pub fn start_position_for_angle(angle_deg: f64) -> DVec3 {
    let a = angle_deg * DEG_TO_RAD;
    DVec3::new(
        a.sin() * START_DISTANCE_SCENE,
        a.cos() * START_DISTANCE_SCENE * 0.3,
        a.cos() * START_DISTANCE_SCENE,
    )
}

/// Unit approach direction for an angle.
pub fn approach_vector(angle_deg: f64) -> DVec3 {
    let a = angle_deg * DEG_TO_RAD;
    let v = DVec3::new(a.cos(), a.sin(), a.cos() * a.sin());
    v.try_normalize().unwrap_or(DVec3::Y)
}

/// Visual speed multiplier, capped at 3x.
pub fn speed_multiplier(velocity_km_s: f64) -> f64 {
    (velocity_km_s / 20.0).min(3.0)
}

/// Gravitational bending of the path.
///
/// Shallow angles and slow objects curve more.
pub fn trajectory_curve(angle_deg: f64, velocity_km_s: f64) -> f64 {
    let curve_intensity = (90.0 - angle_deg) / 90.0;
    let velocity_factor = 50.0 / velocity_km_s.max(5.0);
    curve_intensity * velocity_factor
}

/// Probability that a scenario hits Earth, clamped to [0.05, 0.95].
pub fn impact_probability(angle_deg: f64, velocity_km_s: f64, diameter_km: f64) -> f64 {
    let angle_factor = 1.0 - (angle_deg / 90.0) * 0.8;
    let velocity_factor = (velocity_km_s / 30.0).min(1.5);
    let size_factor = (diameter_km / 5.0).min(2.0);

    (angle_factor * velocity_factor * size_factor * 0.6).clamp(0.05, 0.95)
}

/// Whether a scenario is expected to hit, without random variance.
pub fn predicts_impact(params: &ImpactParameters) -> bool {
    impact_probability(params.angle_deg, params.velocity_km_s, params.diameter_km) > 0.5
}

/// Distance over which Earth's gravity noticeably bends the path (m).
///
/// sqrt(G·M·m / v²) · (v_esc / v), with v floored at 1 km/s.
pub fn gravitational_influence_m(velocity_m_s: f64, mass_kg: f64) -> f64 {
    let v = velocity_m_s.max(MIN_RELATIVE_VELOCITY_M_S);
    let influence = GRAVITATIONAL_CONSTANT * EARTH_MASS_KG * mass_kg / (v * v);
    influence.sqrt() * (EARTH_ESCAPE_VELOCITY_M_S / v)
}

/// Closest approach distance of a miss (km).
///
/// Shallow angles pass closer; slow objects are pulled in by up to one Earth
/// radius of extra offset.
pub fn miss_distance_km(angle_deg: f64, velocity_km_s: f64, influence_m: f64) -> f64 {
    let base_miss = (angle_deg / 90.0) * EARTH_RADIUS_KM * 3.0;
    let gravity_effect = influence_m / 1000.0;
    let velocity_effect = (70.0 - velocity_km_s) / 70.0 * EARTH_RADIUS_KM;
    base_miss + gravity_effect + velocity_effect
}

/// Outcome report derived locally from the parameters.
///
/// Impacts land at the sample location. Misses carry the computed miss
/// distance and the angle's approach direction.
pub fn predict_outcome(params: &ImpactParameters) -> OutcomeReport {
    let impact_occurred = predicts_impact(params);
    let miss_km = if impact_occurred {
        0.0
    } else {
        let mass = asteroid_mass_kg(params.diameter_km, ASTEROID_DENSITY);
        let influence = gravitational_influence_m(params.velocity_m_s(), mass);
        miss_distance_km(params.angle_deg, params.velocity_km_s, influence)
    };
    let probability = impact_probability(params.angle_deg, params.velocity_km_s, params.diameter_km);

    OutcomeReport {
        impact_occurred,
        impact_location: impact_occurred.then(sample_impact_location),
        trajectory_data: Some(TrajectoryData {
            miss_distance_km: miss_km,
            trajectory_curve: Some(trajectory_curve(params.angle_deg, params.velocity_km_s)),
            impact_probability: Some(probability * 100.0),
        }),
        approach_vector: Some(ApproachVector::from(approach_vector(params.angle_deg))),
    }
}
