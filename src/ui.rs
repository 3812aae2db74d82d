/*
 * UI Module
 *
 * This module contains functions for creating and updating the option panel
 * using nannou_egui. Sliders edit the live SimulationConfig; the flock picks
 * the new values up on its next tick.
 */

use nannou_egui::{egui, Egui};

use crate::params::{SimulationConfig, UpdateOrder};

// Viewer-only options that are not part of the simulation config
pub struct UiState {
    pub num_boids: usize,
    pub draw_debug: bool,
    pub paused: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            num_boids: 300,
            draw_debug: false,
            paused: false,
        }
    }
}

// Update the UI and return whether the flock should be respawned
pub fn update_ui(
    egui: &mut Egui,
    config: &mut SimulationConfig,
    state: &mut UiState,
    frame: u64,
) -> bool {
    let mut should_reset = false;

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flock", |ui| {
                ui.add(egui::Slider::new(&mut state.num_boids, SimulationConfig::get_num_boids_range()).text("Number of Boids"));

                if ui.button("Reset Boids").clicked() {
                    should_reset = true;
                }

                ui.add(egui::Slider::new(&mut config.max_speed, SimulationConfig::get_max_speed_range()).text("Max Speed"));
            });

            ui.collapsing("Perception", |ui| {
                ui.add(egui::Slider::new(&mut config.vision_dist, SimulationConfig::get_distance_range()).text("Vision Distance"));
                ui.add(egui::Slider::new(&mut config.field_of_view_deg, SimulationConfig::get_field_of_view_range()).text("Field of View (deg)"));
                ui.add(egui::Slider::new(&mut config.collision_dist, SimulationConfig::get_distance_range()).text("Collision Distance"));
            });

            ui.collapsing("Flocking Behavior", |ui| {
                ui.add(egui::Slider::new(&mut config.collision_avoidance_strength, SimulationConfig::get_strength_range()).text("Collision Avoidance"));
                ui.add(egui::Slider::new(&mut config.velocity_align_strength, SimulationConfig::get_strength_range()).text("Velocity Alignment"));
                ui.add(egui::Slider::new(&mut config.center_of_mass_align_strength, SimulationConfig::get_strength_range()).text("Cohesion"));
            });

            ui.collapsing("Update Order", |ui| {
                ui.radio_value(&mut config.update_order, UpdateOrder::Snapshot, "Snapshot");
                ui.radio_value(&mut config.update_order, UpdateOrder::Immediate, "Immediate");
            });

            ui.separator();
            ui.label(format!("Frame: {}", frame));
            ui.checkbox(&mut state.draw_debug, "Show Debug Overlay");
            ui.checkbox(&mut state.paused, "Pause Simulation");
        });

    should_reset
}

// Draw a short status panel in the top-right corner
pub fn draw_debug_info(
    draw: &nannou::Draw,
    window_rect: nannou::geom::Rect,
    fps: f32,
    boids_len: usize,
    frame: u64,
) {
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 200.0;
    let panel_height = line_height * 3.0 + margin;
    let panel_x = window_rect.right() - panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.right() - panel_width + margin;
    let text_y = window_rect.top() - margin;

    let debug_texts = [
        format!("FPS: {:.1}", fps),
        format!("Boids: {}", boids_len),
        format!("Frame: {}", frame),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
