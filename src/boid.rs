/*
 * Boid Module
 *
 * This module defines the Boid struct and its behavior.
 * Each tick a boid goes through three phases:
 * 1. Perception: find the other boids inside its vision distance and view cone
 * 2. Decision: turn the seen neighbors into a steering force built from
 *    collision avoidance, velocity alignment and cohesion
 * 3. Action: integrate velocity into position and wrap around the world box
 */

use serde::{Deserialize, Serialize};

use crate::debug::Perception;
use crate::params::{SimulationConfig, WorldBounds};
use crate::vector::{angle_between, distance, Vector3, EPSILON};

/// Gain applied to every inverse-square collision push.
pub const COLLISION_GAIN: f32 = 50.0;

/// Display tag carried for the renderer. The simulation never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(220, 220, 220)
    }
}

/// The part of a boid its neighbors can observe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoidState {
    pub id: u64,
    pub position: Vector3,
    pub velocity: Vector3,
}

/// One neighbor that passed the vision-distance and field-of-view tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sighting {
    pub position: Vector3,
    pub velocity: Vector3,
    /// Neighbor position relative to the observer.
    pub offset: Vector3,
    /// Bearing off the observer's heading, in radians.
    pub angle: f32,
    pub distance: f32,
}

#[derive(Debug, Clone)]
pub struct Boid {
    id: u64,
    pub position: Vector3,
    pub velocity: Vector3,
    pub color: Color,
    perception: Option<Perception>,
}

impl Boid {
    pub fn new(id: u64, position: Vector3, velocity: Vector3, color: Color) -> Self {
        Self {
            id,
            position,
            velocity,
            color,
            perception: None,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn state(&self) -> BoidState {
        BoidState {
            id: self.id,
            position: self.position,
            velocity: self.velocity,
        }
    }

    pub fn debug_enabled(&self) -> bool {
        self.perception.is_some()
    }

    /// Switch perception recording on or off. Turning it off drops the record.
    pub fn set_debug(&mut self, enabled: bool) {
        match (enabled, self.perception.is_some()) {
            (true, false) => self.perception = Some(Perception::default()),
            (false, true) => self.perception = None,
            _ => {}
        }
    }

    pub fn perception(&self) -> Option<&Perception> {
        self.perception.as_ref()
    }

    /// Neighbor positions seen in the last tick. Empty unless debugging is on.
    pub fn seen_neighbors(&self) -> &[Vector3] {
        self.perception
            .as_ref()
            .map(|perception| perception.seen_neighbors.as_slice())
            .unwrap_or(&[])
    }

    pub fn local_center_of_mass(&self) -> Option<Vector3> {
        self.perception
            .as_ref()
            .and_then(|perception| perception.local_center_of_mass)
    }

    /// Collect into `seen` every other boid this one can perceive.
    ///
    /// Identity, not position, excludes the boid itself. The view cone test
    /// compares the bearing against the configured angle as-is, so
    /// `field_of_view_deg` acts as a half-angle.
    pub fn perceive(&mut self, flock: &[BoidState], config: &SimulationConfig, seen: &mut Vec<Sighting>) {
        seen.clear();
        if let Some(perception) = self.perception.as_mut() {
            perception.begin_pass();
        }
        let fov = config.field_of_view_rad();

        for other in flock {
            if other.id == self.id {
                continue;
            }

            let d = distance(self.position, other.position);
            if d > config.vision_dist {
                continue;
            }

            let offset = other.position - self.position;
            let angle = angle_between(offset, self.velocity);
            if angle > fov {
                continue;
            }

            seen.push(Sighting {
                position: other.position,
                velocity: other.velocity,
                offset,
                angle,
                distance: d,
            });
            if let Some(perception) = self.perception.as_mut() {
                perception.seen_neighbors.push(other.position);
            }
        }
    }

    /// Apply the steering rules for the neighbors found by [`Boid::perceive`].
    ///
    /// A boid that saw nobody keeps its velocity, apart from the speed cap.
    pub fn steer(&mut self, seen: &[Sighting], config: &SimulationConfig) {
        let mut steering = self.velocity.normalized();

        // Collision avoidance
        let mut f_collision = Vector3::ZERO;
        for sighting in seen {
            // Coincident boids give no direction to push along.
            if sighting.distance > config.collision_dist || sighting.distance < EPSILON {
                continue;
            }
            let mut diff = -sighting.offset;
            diff /= sighting.distance * sighting.distance;
            diff *= COLLISION_GAIN;
            f_collision += diff;
        }
        f_collision *= config.collision_avoidance_strength;
        f_collision -= self.velocity;
        steering += f_collision;

        if !seen.is_empty() {
            let count = seen.len() as f32;
            let mut vel_avg = Vector3::ZERO;
            let mut com = Vector3::ZERO;
            for sighting in seen {
                vel_avg += sighting.velocity;
                com += sighting.position;
            }
            vel_avg /= count;
            com /= count;

            // Velocity alignment
            let f_align = vel_avg * config.velocity_align_strength - self.velocity;
            steering += f_align;

            // Cohesion
            let f_cohesion = (com - self.position).with_magnitude(config.max_speed)
                * config.center_of_mass_align_strength;
            steering += f_cohesion;

            if let Some(perception) = self.perception.as_mut() {
                perception.local_center_of_mass = Some(com);
            }

            self.velocity += steering;
        }

        self.velocity.limit(config.max_speed);
    }

    /// Advance one step along the current velocity and wrap into the world box.
    pub fn integrate(&mut self, world: &WorldBounds) {
        self.position += self.velocity;
        world.wrap(&mut self.position);
    }

    /// Perception, decision and action against `flock` in one call.
    pub fn update(&mut self, flock: &[BoidState], config: &SimulationConfig, seen: &mut Vec<Sighting>) {
        self.perceive(flock, config, seen);
        self.steer(seen, config);
        self.integrate(&config.world);
    }
}
