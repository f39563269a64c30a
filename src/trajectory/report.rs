//! Simulation outcome reports.
//!
//! Mirrors the JSON returned by the impact calculation service (and by the
//! offline sample data) closely enough to build an [`ImpactOutcome`] from it.
//! Unknown fields are ignored.

use bevy::math::DVec3;
use serde::{Deserialize, Serialize};

use super::ImpactOutcome;
use super::curve::lat_long_to_vec3;
use crate::types::EARTH_RADIUS_SCENE;

/// Errors converting a report into an outcome.
#[derive(thiserror::Error, Debug)]
pub enum OutcomeError {
    #[error("invalid outcome report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("report claims an impact but carries no impact location")]
    MissingImpactLocation,

    #[error("report claims a miss but carries no approach vector")]
    MissingApproachVector,

    #[error("report claims a miss but carries no trajectory data")]
    MissingTrajectoryData,
}

/// Geographic impact location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactLocation {
    pub latitude: f64,
    pub longitude: f64,
    /// "Ocean" or "Land"
    #[serde(default)]
    pub location_type: Option<String>,
    #[serde(default)]
    pub continent: Option<String>,
}

impl ImpactLocation {
    pub fn is_ocean(&self) -> bool {
        self.location_type.as_deref() == Some("Ocean")
    }
}

/// Path-related figures of a report.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryData {
    #[serde(default)]
    pub miss_distance_km: f64,
    #[serde(default)]
    pub trajectory_curve: Option<f64>,
    /// Percent, 0-100
    #[serde(default)]
    pub impact_probability: Option<f64>,
}

/// Direction of approach as reported (not necessarily unit length).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApproachVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<ApproachVector> for DVec3 {
    fn from(v: ApproachVector) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

impl From<DVec3> for ApproachVector {
    fn from(v: DVec3) -> Self {
        ApproachVector {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

/// A simulation outcome as delivered by the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutcomeReport {
    pub impact_occurred: bool,
    #[serde(default)]
    pub impact_location: Option<ImpactLocation>,
    #[serde(default)]
    pub trajectory_data: Option<TrajectoryData>,
    #[serde(default)]
    pub approach_vector: Option<ApproachVector>,
}

impl OutcomeReport {
    /// Parse a report from JSON text.
    pub fn from_json(text: &str) -> Result<Self, OutcomeError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reported curvature, treating zero and non-finite values as absent.
    fn curve_factor(&self) -> Option<f64> {
        self.trajectory_data
            .as_ref()
            .and_then(|data| data.trajectory_curve)
            .filter(|c| c.is_finite() && *c != 0.0)
    }

    /// Convert into the typed outcome used to build a trajectory.
    pub fn to_outcome(&self) -> Result<ImpactOutcome, OutcomeError> {
        if self.impact_occurred {
            let location = self
                .impact_location
                .as_ref()
                .ok_or(OutcomeError::MissingImpactLocation)?;
            Ok(ImpactOutcome::Impact {
                point: lat_long_to_vec3(location.latitude, location.longitude, EARTH_RADIUS_SCENE),
                curve_factor: self.curve_factor(),
            })
        } else {
            let approach = self
                .approach_vector
                .ok_or(OutcomeError::MissingApproachVector)?;
            let data = self
                .trajectory_data
                .as_ref()
                .ok_or(OutcomeError::MissingTrajectoryData)?;
            Ok(ImpactOutcome::Miss {
                miss_distance_km: data.miss_distance_km,
                approach: approach.into(),
                curve_factor: self.curve_factor(),
            })
        }
    }
}

impl TryFrom<&OutcomeReport> for ImpactOutcome {
    type Error = OutcomeError;

    fn try_from(report: &OutcomeReport) -> Result<Self, Self::Error> {
        report.to_outcome()
    }
}
