//! Simulation run driver.
//!
//! Owns the animation clock for one impact run: takes the current control
//! values and an outcome report, builds the trajectory, and advances progress
//! from Bevy's [`Time`] each frame. The pure models never see time; they only
//! receive the clamped progress.

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::classifier::{Severity, classify_approach_severity};
use crate::controls::SimulationControls;
use crate::physics::{ImpactEffects, impact_effects};
use crate::scenarios::sample_outcome;
use crate::trajectory::{
    ImpactOutcome, OutcomeReport, TrajectoryKind, TrajectorySpec, build_trajectory, predict_outcome,
    predicts_impact, start_position_for_angle,
};
use crate::types::ImpactParameters;

/// Plugin providing impact run management.
pub struct ImpactSimPlugin;

impl Plugin for ImpactSimPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ImpactControls>()
            .init_resource::<SimulationRequest>()
            .init_resource::<ImpactRun>()
            .add_systems(Update, (start_requested_run, advance_run).chain());
    }
}

/// Current control readings.
#[derive(Resource, Clone, Debug, Default)]
pub struct ImpactControls {
    pub config: SimulationControls,
    pub params: ImpactParameters,
}

impl ImpactControls {
    /// Update from raw readings, clamping to the configured ranges.
    ///
    /// Invalid readings leave the previous parameters in place.
    pub fn set(&mut self, diameter: f64, velocity: f64, angle: f64) {
        match self.config.params(diameter, velocity, angle) {
            Ok(params) => self.params = params,
            Err(err) => warn!("Ignoring control update: {err}"),
        }
    }

    /// Use already validated parameters as-is, bypassing the slider ranges.
    ///
    /// Catalog asteroids can lie outside the slider bounds.
    pub fn load(&mut self, params: ImpactParameters) {
        self.params = params;
    }
}

/// Where the outcome of a requested run comes from.
#[derive(Clone, Debug)]
pub enum RunSource {
    /// Report delivered by the calculation service.
    Report(OutcomeReport),
    /// Service unavailable, derive the outcome locally.
    Offline,
}

/// Pending request to start a run.
#[derive(Resource, Clone, Debug, Default)]
pub struct SimulationRequest {
    pending: Option<RunSource>,
}

impl SimulationRequest {
    /// Start a run with a report from the calculation service.
    pub fn with_report(&mut self, report: OutcomeReport) {
        self.pending = Some(RunSource::Report(report));
    }

    /// Start a run with a locally predicted outcome.
    pub fn offline(&mut self) {
        self.pending = Some(RunSource::Offline);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// State of an in-flight run.
#[derive(Clone, Debug)]
pub struct RunState {
    pub params: ImpactParameters,
    pub trajectory: TrajectorySpec,
    pub effects: ImpactEffects,
    pub severity: Severity,
    /// Seconds since the run started
    pub elapsed: f64,
    /// Clamped to [0, 1]
    pub progress: f64,
    /// Asteroid position at the current progress
    pub position: DVec3,
    pub finished: bool,
}

/// Resource holding the active run, if any.
#[derive(Resource, Clone, Debug, Default)]
pub struct ImpactRun {
    pub active: Option<RunState>,
}

impl ImpactRun {
    /// Begin a run from the angle-derived start position.
    pub fn start(&mut self, params: ImpactParameters, outcome: &ImpactOutcome) {
        let start = start_position_for_angle(params.angle_deg);
        let trajectory = build_trajectory(start, outcome);
        self.active = Some(RunState {
            params,
            trajectory,
            effects: impact_effects(&params),
            severity: classify_approach_severity(params.angle_deg),
            elapsed: 0.0,
            progress: 0.0,
            position: start,
            finished: false,
        });
    }

    /// True while a run exists and has not reached the end of its path.
    pub fn is_running(&self) -> bool {
        self.active.as_ref().is_some_and(|run| !run.finished)
    }

    pub fn is_finished(&self) -> bool {
        self.active.as_ref().is_some_and(|run| run.finished)
    }

    /// Abort the active run.
    pub fn cancel(&mut self) {
        self.active = None;
    }
}

/// Advance a run by `dt` seconds and resample its position.
///
/// Returns true on the frame the run reaches the end of its path.
pub fn step_run(run: &mut RunState, dt: f64) -> bool {
    if run.finished {
        return false;
    }
    run.elapsed += dt.max(0.0);
    run.progress = (run.elapsed / run.trajectory.duration_secs()).clamp(0.0, 1.0);
    run.position = run.trajectory.sample(run.progress);
    if run.progress >= 1.0 {
        run.finished = true;
        return true;
    }
    false
}

/// Turn a pending request into a run.
///
/// Offline requests use the local prediction. A report that cannot be
/// converted falls back to the sample outcome, chosen by whether the
/// parameters are expected to hit.
fn start_requested_run(
    mut request: ResMut<SimulationRequest>,
    mut run: ResMut<ImpactRun>,
    controls: Res<ImpactControls>,
) {
    let Some(source) = request.pending.take() else {
        return;
    };
    if run.is_running() {
        warn!("Simulation already running, request ignored");
        return;
    }

    let params = controls.params;
    let fallback = || sample_outcome(predicts_impact(&params)).to_outcome();

    let outcome = match source {
        RunSource::Report(report) => report.to_outcome().or_else(|err| {
            warn!("Outcome report rejected ({err}), running with sample data");
            fallback()
        }),
        RunSource::Offline => predict_outcome(&params).to_outcome(),
    };

    match outcome {
        Ok(outcome) => {
            run.start(params, &outcome);
            info!(
                "Simulation started: {:.2} km at {:.1} km/s, {}° ({} threat), {}",
                params.diameter_km,
                params.velocity_km_s,
                params.angle_deg,
                classify_approach_severity(params.angle_deg),
                if outcome.is_impact() { "impact" } else { "miss" }
            );
        }
        Err(err) => warn!("Cannot start simulation: {err}"),
    }
}

/// Advance the active run from frame time.
fn advance_run(mut run: ResMut<ImpactRun>, time: Res<Time>) {
    let Some(state) = run.active.as_mut() else {
        return;
    };
    if step_run(state, time.delta_secs_f64()) {
        let energy = state.effects.energy.energy_megatons;
        match state.trajectory.kind {
            TrajectoryKind::Impact => info!(
                "Impact! {:.0} MT, {}, crater {:.2} km, magnitude {:.1}",
                energy,
                state.effects.category.name(),
                state.effects.crater_diameter_km,
                state.effects.seismic_magnitude
            ),
            TrajectoryKind::Miss => info!(
                "Asteroid passed Earth at ({:.1}, {:.1}, {:.1})",
                state.position.x, state.position.y, state.position.z
            ),
        }
    }
}
