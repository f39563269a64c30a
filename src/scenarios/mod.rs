//! Scenario catalog for offline simulations.
//!
//! Holds the sample near-Earth objects the simulator falls back to when the
//! live catalog is unreachable, plus the canned outcome report used when the
//! impact calculation service cannot be reached.

pub mod presets;

use crate::trajectory::report::{ApproachVector, ImpactLocation, OutcomeReport, TrajectoryData};
use crate::types::{ImpactParameters, ParameterError};

pub use presets::SCENARIOS;

/// Approach angle used when loading a catalog asteroid (degrees).
pub const DEFAULT_APPROACH_ANGLE: f64 = 45.0;

/// A catalog asteroid.
#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    /// Catalog identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Estimated diameter (km).
    pub diameter_km: f64,
    /// Relative velocity at close approach (km/s).
    pub velocity_km_s: f64,
    /// Close approach miss distance (km).
    pub miss_distance_km: f64,
    /// Flagged as potentially hazardous.
    pub hazardous: bool,
    /// Close approach date (YYYY-MM-DD).
    pub close_approach_date: &'static str,
}

impl Scenario {
    /// Impact parameters for this asteroid at the given approach angle.
    pub fn params(&self, angle_deg: f64) -> Result<ImpactParameters, ParameterError> {
        ImpactParameters::new(self.diameter_km, self.velocity_km_s, angle_deg)
    }

    /// Miss distance in millions of km, as shown on catalog cards.
    pub fn miss_distance_million_km(&self) -> f64 {
        self.miss_distance_km / 1.0e6
    }
}

/// Look up a scenario by id.
pub fn find_scenario(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.id == id)
}

/// Hazardous scenarios only.
pub fn hazardous_scenarios() -> impl Iterator<Item = &'static Scenario> {
    SCENARIOS.iter().filter(|s| s.hazardous)
}

/// Impact site of the sample outcome: central Pacific.
pub fn sample_impact_location() -> ImpactLocation {
    ImpactLocation {
        latitude: 10.0,
        longitude: -150.0,
        location_type: Some("Ocean".to_string()),
        continent: Some("Pacific Ocean".to_string()),
    }
}

/// Canned outcome used when no live result is available.
///
/// Impacts land in the central Pacific; misses pass 15,000 km out.
pub fn sample_outcome(impact_occurred: bool) -> OutcomeReport {
    OutcomeReport {
        impact_occurred,
        impact_location: impact_occurred.then(sample_impact_location),
        trajectory_data: Some(TrajectoryData {
            miss_distance_km: if impact_occurred { 0.0 } else { 15_000.0 },
            trajectory_curve: Some(0.8),
            impact_probability: Some(if impact_occurred { 85.0 } else { 35.0 }),
        }),
        approach_vector: Some(ApproachVector {
            x: 0.7,
            y: 0.5,
            z: 0.5,
        }),
    }
}
