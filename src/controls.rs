//! Typed control configuration.
//!
//! Each slider is a [`ControlRange`] with named bounds. Out-of-range input is
//! clamped before it reaches the physics.

use serde::{Deserialize, Serialize};

use crate::types::{ImpactParameters, ParameterError};

/// Bounds and default of a single numeric control.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControlRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl ControlRange {
    pub const fn new(min: f64, max: f64, step: f64, default: f64) -> Self {
        Self {
            min,
            max,
            step,
            default,
        }
    }

    /// Clamp into [min, max]. NaN maps to the default.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        value.clamp(self.min, self.max)
    }

    /// Clamp and round to the nearest step.
    pub fn snap(&self, value: f64) -> f64 {
        let clamped = self.clamp(value);
        if self.step <= 0.0 {
            return clamped;
        }
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).min(self.max)
    }

    /// Position of a value within the range, 0 at min and 1 at max.
    pub fn fraction(&self, value: f64) -> f64 {
        (self.clamp(value) - self.min) / (self.max - self.min)
    }
}

/// All simulator controls.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationControls {
    /// Asteroid diameter (km)
    pub diameter: ControlRange,
    /// Impact velocity (km/s)
    pub velocity: ControlRange,
    /// Approach angle (degrees)
    pub angle: ControlRange,
}

impl Default for SimulationControls {
    fn default() -> Self {
        Self {
            diameter: ControlRange::new(0.01, 10.0, 0.01, 1.0),
            velocity: ControlRange::new(11.0, 72.0, 0.1, 20.0),
            angle: ControlRange::new(0.0, 90.0, 1.0, 45.0),
        }
    }
}

impl SimulationControls {
    /// Controls of the tutorial challenge panel.
    pub fn challenge() -> Self {
        Self {
            diameter: ControlRange::new(0.1, 5.0, 0.1, 1.0),
            velocity: ControlRange::new(5.0, 50.0, 1.0, 20.0),
            ..Self::default()
        }
    }

    /// Parameters at every control's default.
    pub fn defaults(&self) -> ImpactParameters {
        ImpactParameters {
            diameter_km: self.diameter.default,
            velocity_km_s: self.velocity.default,
            angle_deg: self.angle.default,
        }
    }

    /// Clamp raw control readings into parameters.
    pub fn params(&self, diameter: f64, velocity: f64, angle: f64) -> Result<ImpactParameters, ParameterError> {
        ImpactParameters::new(
            self.diameter.clamp(diameter),
            self.velocity.clamp(velocity),
            self.angle.clamp(angle),
        )
    }
}
