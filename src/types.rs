//! Core impact types and constants.

use serde::{Deserialize, Serialize};

/// Physical constants (SI units)

/// Bulk density assumed for every asteroid (kg/m³).
pub const ASTEROID_DENSITY: f64 = 3000.0;

/// Joules per megaton of TNT.
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Gravitational constant (m³/(kg·s²)).
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;

/// Earth mass (kg).
pub const EARTH_MASS_KG: f64 = 5.972e24;

/// Earth escape velocity (m/s).
pub const EARTH_ESCAPE_VELOCITY_M_S: f64 = 11_200.0;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Scene constants (render units)

/// Radius of the Earth sphere in scene units.
pub const EARTH_RADIUS_SCENE: f64 = 15.0;

/// Distance from Earth at which an asteroid is placed before a run.
pub const START_DISTANCE_SCENE: f64 = 100.0;

/// Distance along the approach direction where a miss trajectory ends.
pub const MISS_END_DISTANCE_SCENE: f64 = 200.0;

/// Upward lift applied to the Bezier control point of an impact trajectory.
pub const IMPACT_CONTROL_LIFT: f64 = 30.0;

/// Fraction along start→impact where the Bezier control point sits.
pub const IMPACT_CONTROL_FRACTION: f64 = 0.3;

/// Vertical bow amplitude per unit of curve factor on a miss trajectory.
pub const MISS_BOW_SCALE: f64 = 20.0;

/// Errors raised when building [`ImpactParameters`] from raw control values.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("diameter must be a positive finite number of km (got {0})")]
    Diameter(f64),

    #[error("velocity must be a positive finite number of km/s (got {0})")]
    Velocity(f64),

    #[error("approach angle must lie in [0, 90] degrees (got {0})")]
    Angle(f64),
}

/// Inputs for one simulation request.
///
/// Created fresh from the current control values each time the user asks for a
/// simulation; never mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactParameters {
    /// Asteroid diameter in kilometers
    pub diameter_km: f64,
    /// Impact velocity in km/s
    pub velocity_km_s: f64,
    /// Approach angle in degrees, 0 = grazing, 90 = head-on
    pub angle_deg: f64,
}

impl ImpactParameters {
    /// Validate raw values and build a parameter set.
    pub fn new(diameter_km: f64, velocity_km_s: f64, angle_deg: f64) -> Result<Self, ParameterError> {
        if !(diameter_km.is_finite() && diameter_km > 0.0) {
            return Err(ParameterError::Diameter(diameter_km));
        }
        if !(velocity_km_s.is_finite() && velocity_km_s > 0.0) {
            return Err(ParameterError::Velocity(velocity_km_s));
        }
        if !(0.0..=90.0).contains(&angle_deg) {
            return Err(ParameterError::Angle(angle_deg));
        }
        Ok(Self {
            diameter_km,
            velocity_km_s,
            angle_deg,
        })
    }

    /// Velocity in m/s
    pub fn velocity_m_s(&self) -> f64 {
        self.velocity_km_s * 1000.0
    }
}

impl Default for ImpactParameters {
    /// Mid-range values of the simulator sliders.
    fn default() -> Self {
        Self {
            diameter_km: 1.0,
            velocity_km_s: 20.0,
            angle_deg: 45.0,
        }
    }
}
