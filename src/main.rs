//! Impactor - headless impact run
//!
//! Loads a catalog asteroid (by id, default "2025 Impactor"), runs it through
//! the simulation plugin at a fixed 60 Hz step and logs the results.

use std::process::ExitCode;
use std::time::Duration;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use impactor::classifier::evaluate_challenge;
use impactor::scenarios::{DEFAULT_APPROACH_ANGLE, find_scenario, presets::IMPACTOR_2025};
use impactor::sim::{ImpactControls, ImpactRun, ImpactSimPlugin, SimulationRequest};

/// Upper bound on frames, well past the longest animation.
const MAX_FRAMES: u32 = 60 * 30;

fn main() -> ExitCode {
    let scenario = match std::env::args().nth(1) {
        Some(id) => match find_scenario(&id) {
            Some(scenario) => scenario,
            None => {
                eprintln!("Unknown scenario id: {id}");
                return ExitCode::FAILURE;
            }
        },
        None => &IMPACTOR_2025,
    };

    let params = match scenario.params(DEFAULT_APPROACH_ANGLE) {
        Ok(params) => params,
        Err(err) => {
            eprintln!("Invalid catalog entry {}: {err}", scenario.id);
            return ExitCode::FAILURE;
        }
    };

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default(), ImpactSimPlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(1.0 / 60.0)));

    {
        let world = app.world_mut();
        world.resource_mut::<ImpactControls>().load(params);
        world.resource_mut::<SimulationRequest>().offline();
    }

    info!(
        "Loaded {} ({:.2} km, {:.2} km/s, {} hazardous)",
        scenario.name,
        scenario.diameter_km,
        scenario.velocity_km_s,
        if scenario.hazardous { "potentially" } else { "not" }
    );

    // Frames are driven by hand so the loop ends with the run
    for _ in 0..MAX_FRAMES {
        app.update();
        if app.world().resource::<ImpactRun>().is_finished() {
            break;
        }
    }

    let run = app.world().resource::<ImpactRun>();
    let Some(state) = run.active.as_ref().filter(|state| state.finished) else {
        error!("Run did not complete");
        return ExitCode::FAILURE;
    };

    let challenge = evaluate_challenge(state.params.diameter_km, state.params.velocity_km_s);
    info!(
        "{:.0} MT ({}), {} approach, challenge {}",
        state.effects.energy.energy_megatons,
        state.effects.category,
        state.severity,
        if challenge.success { "met" } else { "not met" }
    );
    for issue in challenge.issues() {
        info!("  - {issue}");
    }

    ExitCode::SUCCESS
}
