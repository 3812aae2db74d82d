/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationConfig struct that contains all the
 * adjustable parameters for the flocking simulation: steering strengths,
 * perception distances, the world box and the per-tick update order.
 * The config is read by the core every tick and is never mutated by it;
 * drivers load it from JSON and may adjust it between ticks through the UI.
 */

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::vector::Vector3;

/// Extent of the simulated box. Positions live in `[0, width] x [0, height] x [0, depth]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            depth: 400.0,
        }
    }
}

impl WorldBounds {
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self { width, height, depth }
    }

    pub fn extent(&self) -> Vector3 {
        Vector3::new(self.width, self.height, self.depth)
    }

    /// Wrap each axis independently: past the far face lands at 1,
    /// below zero lands at `dimension - 1`.
    pub fn wrap(&self, position: &mut Vector3) {
        wrap_axis(&mut position.x, self.width);
        wrap_axis(&mut position.y, self.height);
        wrap_axis(&mut position.z, self.depth);
    }
}

#[inline]
fn wrap_axis(value: &mut f32, dimension: f32) {
    if *value > dimension {
        *value = 1.0;
    }
    if *value < 0.0 {
        *value = dimension - 1.0;
    }
}

/// Which state an agent observes when it perceives the others during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateOrder {
    /// Every agent sees the state all agents had before the tick started.
    #[default]
    Snapshot,
    /// Agents see neighbors already advanced earlier in the same tick.
    Immediate,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub max_speed: f32,
    pub vision_dist: f32,
    pub field_of_view_deg: f32,
    pub collision_dist: f32,
    pub collision_avoidance_strength: f32,
    pub velocity_align_strength: f32,
    pub center_of_mass_align_strength: f32,
    pub world: WorldBounds,
    pub update_order: UpdateOrder,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_speed: 4.0,
            vision_dist: 60.0,
            field_of_view_deg: 135.0,
            collision_dist: 15.0,
            collision_avoidance_strength: 0.4,
            velocity_align_strength: 1.0,
            center_of_mass_align_strength: 0.1,
            world: WorldBounds::default(),
            update_order: UpdateOrder::default(),
        }
    }
}

impl SimulationConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        debug!(path = %path.display(), ?config, "loaded simulation config");
        Ok(config)
    }

    /// Check the ranges the core assumes. The core itself never calls this.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("max_speed", self.max_speed),
            ("vision_dist", self.vision_dist),
            ("collision_dist", self.collision_dist),
            ("collision_avoidance_strength", self.collision_avoidance_strength),
            ("velocity_align_strength", self.velocity_align_strength),
            ("center_of_mass_align_strength", self.center_of_mass_align_strength),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if !self.field_of_view_deg.is_finite() {
            return Err(ConfigError::NonFinite { field: "field_of_view_deg" });
        }
        if !(0.0..=360.0).contains(&self.field_of_view_deg) {
            return Err(ConfigError::FieldOfView(self.field_of_view_deg));
        }

        let WorldBounds { width, height, depth } = self.world;
        if !self.world.extent().is_finite() || width <= 0.0 || height <= 0.0 || depth <= 0.0 {
            return Err(ConfigError::EmptyWorld { width, height, depth });
        }
        Ok(())
    }

    /// Field of view as the half-angle compared against each neighbor's bearing.
    #[inline]
    pub fn field_of_view_rad(&self) -> f32 {
        self.field_of_view_deg.to_radians()
    }

    // Get parameter ranges for UI sliders
    pub fn get_num_boids_range() -> std::ops::RangeInclusive<usize> {
        2..=2000
    }

    pub fn get_max_speed_range() -> std::ops::RangeInclusive<f32> {
        0.5..=20.0
    }

    pub fn get_strength_range() -> std::ops::RangeInclusive<f32> {
        0.0..=3.0
    }

    pub fn get_distance_range() -> std::ops::RangeInclusive<f32> {
        0.0..=200.0
    }

    pub fn get_field_of_view_range() -> std::ops::RangeInclusive<f32> {
        0.0..=360.0
    }
}
