/*
 * Boid Flocking Simulation - Module Definitions
 *
 * This file defines the module structure for the flocking simulation.
 * The core (vector, boid, flock, params, debug) has no rendering dependency;
 * the viewer modules are only compiled with the `viewer` feature.
 */

// Re-export key components for easier access
pub use boid::{Boid, BoidState, Color, Sighting};
pub use debug::{AgentDebug, DebugSnapshot, Perception};
pub use error::ConfigError;
pub use flock::Flock;
pub use params::{SimulationConfig, UpdateOrder, WorldBounds};
pub use vector::Vector3;

// Define modules
pub mod boid;
pub mod debug;
pub mod error;
pub mod flock;
pub mod params;
pub mod vector;

#[cfg(feature = "viewer")]
pub mod app;
#[cfg(feature = "viewer")]
pub mod renderer;
#[cfg(feature = "viewer")]
pub mod ui;

// Constants
pub const BOID_SIZE: f32 = 6.0;
