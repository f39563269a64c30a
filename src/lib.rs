//! Impactor - Asteroid Impact Simulator Core
//!
//! Pure computational models behind an educational asteroid impact
//! visualization: impact energy and effects, approach trajectories, and the
//! tutorial's scenario classification. A small Bevy plugin drives runs for
//! headless use and for any front end that wants one.

pub mod classifier;
pub mod controls;
pub mod physics;
pub mod scenarios;
pub mod sim;
pub mod trajectory;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use classifier::{ChallengeResult, Severity, classify_approach_severity, classify_challenge};
pub use physics::{ImpactEnergyResult, compute_energy_megatons};
pub use trajectory::{ImpactOutcome, TrajectoryKind, TrajectorySpec, build_trajectory, sample_trajectory};
pub use types::ImpactParameters;
