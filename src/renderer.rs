/*
 * Renderer Module
 *
 * This module draws the flock and, for inspected boids, the perception
 * overlay: collision radius, vision wedge, lines to every seen neighbor
 * (red inside collision distance, green otherwise) and the local center of
 * mass. World coordinates are mapped onto the window with `lerp`; depth only
 * shrinks the triangle.
 */

use std::f32::consts::PI;

use nannou::prelude::*;

use crate::app::Model;
use crate::boid::Boid;
use crate::params::{SimulationConfig, WorldBounds};
use crate::ui;
use crate::vector::{distance, lerp, Vector3};
use crate::BOID_SIZE;

// Map a world position onto the window, y growing downwards like a canvas
fn to_screen(position: Vector3, world: &WorldBounds, window_rect: Rect) -> Point2 {
    pt2(
        lerp(window_rect.left(), window_rect.right(), position.x / world.width),
        lerp(window_rect.top(), window_rect.bottom(), position.y / world.height),
    )
}

const WEDGE_SEGMENTS: usize = 32;

// Outline of the region a boid can see: from the center out to the vision
// radius, along the arc from `heading - half_angle` to `heading + half_angle`,
// and back. A half-angle of π closes into a full disc.
fn fov_wedge(center: Point2, heading: f32, half_angle: f32, radius: f32) -> Vec<Point2> {
    let half_angle = half_angle.clamp(0.0, PI);
    let start = heading - half_angle;
    let step = 2.0 * half_angle / WEDGE_SEGMENTS as f32;

    let mut points = Vec::with_capacity(WEDGE_SEGMENTS + 3);
    points.push(center);
    points.extend((0..=WEDGE_SEGMENTS).map(|i| {
        let a = start + step * i as f32;
        center + vec2(a.cos(), a.sin()) * radius
    }));
    points.push(center);
    points
}

fn screen_scale(world: &WorldBounds, window_rect: Rect) -> f32 {
    f32::min(window_rect.w() / world.width, window_rect.h() / world.height)
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let window_rect = app.window_rect();
    let world = &model.config.world;

    for boid in model.flock.boids() {
        draw_boid(&draw, boid, world, window_rect);
    }

    if model.ui_state.draw_debug {
        for boid in model.flock.boids().iter().filter(|boid| boid.debug_enabled()) {
            draw_perception(&draw, boid, &model.config, window_rect);
        }
        ui::draw_debug_info(&draw, window_rect, app.fps(), model.flock.len(), model.flock.frame());
    }

    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}

fn draw_boid(draw: &Draw, boid: &Boid, world: &WorldBounds, window_rect: Rect) {
    let screen_pos = to_screen(boid.position, world, window_rect);
    // Screen y is flipped, so the heading is mirrored
    let angle = -boid.velocity.y.atan2(boid.velocity.x);
    let size = BOID_SIZE * lerp(1.5, 0.5, boid.position.z / world.depth);

    let points = [
        pt2(size, 0.0),
        pt2(-size, size / 2.0),
        pt2(-size, -size / 2.0),
    ];

    draw.polygon()
        .color(rgb(boid.color.r, boid.color.g, boid.color.b))
        .points(points)
        .xy(screen_pos)
        .rotate(angle);
}

fn draw_perception(draw: &Draw, boid: &Boid, config: &SimulationConfig, window_rect: Rect) {
    let world = &config.world;
    let scale = screen_scale(world, window_rect);
    let screen_pos = to_screen(boid.position, world, window_rect);

    // Collision distance
    draw.ellipse()
        .xy(screen_pos)
        .radius(config.collision_dist * scale)
        .no_fill()
        .stroke(BLUE)
        .stroke_weight(1.0);

    // Vision distance, limited to the field of view around the heading
    let heading = -boid.velocity.y.atan2(boid.velocity.x);
    draw.polyline()
        .weight(1.0)
        .color(rgba(0.12, 0.51, 0.25, 1.0))
        .points(fov_wedge(
            screen_pos,
            heading,
            config.field_of_view_rad(),
            config.vision_dist * scale,
        ));

    // Lines to seen
    for &other in boid.seen_neighbors() {
        let color = if distance(other, boid.position) <= config.collision_dist {
            rgba(1.0, 0.0, 0.0, 1.0)
        } else {
            rgba(0.12, 0.51, 0.25, 1.0)
        };
        draw.line()
            .start(screen_pos)
            .end(to_screen(other, world, window_rect))
            .weight(1.0)
            .color(color);
    }

    // Center of mass
    if !boid.seen_neighbors().is_empty() {
        if let Some(com) = boid.local_center_of_mass() {
            draw.ellipse()
                .xy(to_screen(com, world, window_rect))
                .radius(7.0)
                .color(RED)
                .stroke(BLACK)
                .stroke_weight(1.0);
        }
    }
}
