//! Scenario classification for the tutorial.
//!
//! Provides two rule sets:
//! - Challenge: does a user-built scenario land inside the target bands
//! - Approach severity: low/medium/high threat tier from the approach angle
//!
//! The band and threshold values are lesson constants, kept as taught.

use std::fmt;
use std::ops::RangeInclusive;

use serde::Serialize;

use crate::physics::compute_energy_megatons;

/// Target diameter band (km).
pub const CHALLENGE_DIAMETER_KM: RangeInclusive<f64> = 1.0..=2.5;

/// Target velocity band (km/s).
pub const CHALLENGE_VELOCITY_KM_S: RangeInclusive<f64> = 15.0..=25.0;

/// Target energy band (megatons).
pub const CHALLENGE_ENERGY_MT: RangeInclusive<f64> = 50_000.0..=200_000.0;

/// Angle above which an approach is high threat (degrees, exclusive).
pub const HIGH_SEVERITY_ANGLE: f64 = 70.0;

/// Angle above which an approach is medium threat (degrees, exclusive).
pub const MEDIUM_SEVERITY_ANGLE: f64 = 40.0;

/// Outcome of checking a scenario against the challenge bands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ChallengeResult {
    pub diameter_in_range: bool,
    pub velocity_in_range: bool,
    pub energy_in_range: bool,
    /// All three checks hold. No partial credit.
    pub success: bool,
    /// Which side of the band a failed energy check fell on.
    #[serde(skip)]
    energy_side: Option<BandSide>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BandSide {
    Below,
    Above,
}

/// A single failed challenge criterion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChallengeIssue {
    DiameterOutOfRange,
    VelocityOutOfRange,
    EnergyBelowRange,
    EnergyAboveRange,
}

impl fmt::Display for ChallengeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DiameterOutOfRange => write!(f, "Diameter outside target range (1.0-2.5 km)"),
            Self::VelocityOutOfRange => write!(f, "Velocity outside target range (15-25 km/s)"),
            Self::EnergyBelowRange => write!(f, "Energy below target range (50,000-200,000 MT)"),
            Self::EnergyAboveRange => write!(f, "Energy above target range (50,000-200,000 MT)"),
        }
    }
}

impl ChallengeResult {
    /// Failed criteria in display order. Empty on success.
    pub fn issues(&self) -> Vec<ChallengeIssue> {
        let mut issues = Vec::new();
        if !self.diameter_in_range {
            issues.push(ChallengeIssue::DiameterOutOfRange);
        }
        if !self.velocity_in_range {
            issues.push(ChallengeIssue::VelocityOutOfRange);
        }
        match self.energy_side {
            Some(BandSide::Below) => issues.push(ChallengeIssue::EnergyBelowRange),
            Some(BandSide::Above) => issues.push(ChallengeIssue::EnergyAboveRange),
            None => {}
        }
        issues
    }
}

/// Check a scenario against the challenge bands (all bounds inclusive).
pub fn classify_challenge(diameter_km: f64, velocity_km_s: f64, energy_megatons: f64) -> ChallengeResult {
    let diameter_in_range = CHALLENGE_DIAMETER_KM.contains(&diameter_km);
    let velocity_in_range = CHALLENGE_VELOCITY_KM_S.contains(&velocity_km_s);
    let energy_in_range = CHALLENGE_ENERGY_MT.contains(&energy_megatons);

    let energy_side = if energy_in_range {
        None
    } else if energy_megatons < *CHALLENGE_ENERGY_MT.start() {
        Some(BandSide::Below)
    } else {
        // NaN lands here too
        Some(BandSide::Above)
    };

    ChallengeResult {
        diameter_in_range,
        velocity_in_range,
        energy_in_range,
        success: diameter_in_range && velocity_in_range && energy_in_range,
        energy_side,
    }
}

/// Compute the energy and check the challenge in one step.
pub fn evaluate_challenge(diameter_km: f64, velocity_km_s: f64) -> ChallengeResult {
    classify_challenge(
        diameter_km,
        velocity_km_s,
        compute_energy_megatons(diameter_km, velocity_km_s),
    )
}

/// Threat tier of an approach.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// In the trajectory lesson only high-threat approaches end in an impact.
    pub fn predicts_impact(&self) -> bool {
        *self == Severity::High
    }

    /// Highlight color for the impact zone (sRGB, 0-1).
    pub fn zone_color(&self) -> [f32; 3] {
        match self {
            Severity::High => [1.0, 0.42, 0.42],
            Severity::Medium => [1.0, 0.78, 0.0],
            Severity::Low => [0.3, 0.69, 0.31],
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        };
        f.write_str(name)
    }
}

/// Classify approach severity from the angle in degrees.
///
/// Boundary values belong to the lower tier: 40 is Low, 70 is Medium.
pub fn classify_approach_severity(angle_deg: f64) -> Severity {
    if angle_deg > HIGH_SEVERITY_ANGLE {
        Severity::High
    } else if angle_deg > MEDIUM_SEVERITY_ANGLE {
        Severity::Medium
    } else {
        Severity::Low
    }
}
