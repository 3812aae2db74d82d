/*
 * Application Module
 *
 * This module defines the viewer's application model: the flock, the live
 * simulation config edited from the option panel, and the nannou callbacks
 * that advance the flock once per frame. Only compiled with the `viewer`
 * feature; the simulation core knows nothing about it.
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::flock::Flock;
use crate::params::SimulationConfig;
use crate::renderer;
use crate::ui::{self, UiState};

// Main model for the application
pub struct Model {
    pub flock: Flock,
    pub config: SimulationConfig,
    pub egui: Egui,
    pub ui_state: UiState,
    pub seed: u64,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let window_id = app
        .new_window()
        .title("Boid Flocking Simulation")
        .size(1200, 800)
        .view(renderer::view)
        .raw_event(raw_window_event)
        .build()
        .expect("failed to build viewer window");

    let window = app.window(window_id).expect("viewer window closed during setup");
    let egui = Egui::from_window(&window);

    // Optional JSON config as the first argument
    let config = match std::env::args().nth(1) {
        Some(path) => SimulationConfig::from_json_file(&path).unwrap_or_else(|err| {
            warn!(%path, error = %err, "falling back to default config");
            SimulationConfig::default()
        }),
        None => SimulationConfig::default(),
    };

    let ui_state = UiState::default();
    let seed = 0;
    let flock = populate(&config, &ui_state, seed);
    info!(boids = flock.len(), "viewer started");

    Model {
        flock,
        config,
        egui,
        ui_state,
        seed,
    }
}

fn populate(config: &SimulationConfig, ui_state: &UiState, seed: u64) -> Flock {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut flock = Flock::random(ui_state.num_boids, config, &mut rng);
    if let Some(first) = flock.boids().first().map(|boid| boid.id()) {
        flock.set_debug(first, ui_state.draw_debug);
    }
    flock
}

// Update the model
pub fn update(_app: &App, model: &mut Model, update: Update) {
    model.egui.set_elapsed_time(update.since_start);

    let should_reset = ui::update_ui(
        &mut model.egui,
        &mut model.config,
        &mut model.ui_state,
        model.flock.frame(),
    );

    if should_reset || model.ui_state.num_boids != model.flock.len() {
        model.seed = model.seed.wrapping_add(1);
        model.flock = populate(&model.config, &model.ui_state, model.seed);
    }

    // Only the first boid is inspected by the debug overlay
    if let Some(first) = model.flock.boids().first().map(|boid| boid.id()) {
        model.flock.set_debug(first, model.ui_state.draw_debug);
    }

    if !model.ui_state.paused {
        model.flock.advance(&model.config);
    }
}

pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    // Pass events to egui
    model.egui.handle_raw_event(event);
}
