/*
 * Flock Module
 *
 * This module owns the boid collection and drives a simulation tick.
 * Every tick each boid scans all other boids (brute-force O(n²)), steers,
 * and moves. Which state the scan observes is chosen by the config's
 * UpdateOrder: the pre-tick snapshot by default, or the live state with
 * earlier boids already advanced.
 */

use rand::Rng;
use tracing::{debug, trace};

use crate::boid::{Boid, BoidState, Color, Sighting};
use crate::debug::{AgentDebug, DebugSnapshot};
use crate::params::{SimulationConfig, UpdateOrder};
use crate::vector::Vector3;

/// Colors handed out to randomly spawned boids.
pub const PALETTE: [Color; 5] = [
    Color::new(220, 220, 220),
    Color::new(255, 179, 71),
    Color::new(119, 221, 119),
    Color::new(174, 198, 207),
    Color::new(255, 105, 97),
];

#[derive(Debug, Default)]
pub struct Flock {
    boids: Vec<Boid>,
    next_id: u64,
    frame: u64,
    // Reused every tick
    states: Vec<BoidState>,
    seen: Vec<Sighting>,
}

impl Flock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn `count` boids at random positions inside the world, heading in
    /// random directions at half the speed cap.
    pub fn random<R: Rng + ?Sized>(count: usize, config: &SimulationConfig, rng: &mut R) -> Self {
        let mut flock = Self::new();
        flock.boids.reserve(count);
        for _ in 0..count {
            let position = Vector3::random_in(rng, Vector3::ZERO, config.world.extent());
            let velocity = Vector3::random_unit(rng) * (config.max_speed / 2.0);
            let color = PALETTE[rng.gen_range(0..PALETTE.len())];
            flock.spawn(position, velocity, color);
        }
        debug!(count, world = ?config.world, "populated flock");
        flock
    }

    /// Add a boid and return the id assigned to it.
    pub fn spawn(&mut self, position: Vector3, velocity: Vector3, color: Color) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.boids.push(Boid::new(id, position, velocity, color));
        id
    }

    /// Run one tick: every boid perceives, steers and moves.
    pub fn advance(&mut self, config: &SimulationConfig) {
        self.states.clear();
        self.states.extend(self.boids.iter().map(Boid::state));

        let mut sightings = 0;
        for (i, boid) in self.boids.iter_mut().enumerate() {
            boid.update(&self.states, config, &mut self.seen);
            sightings += self.seen.len();

            if config.update_order == UpdateOrder::Immediate {
                self.states[i] = boid.state();
            }
        }

        self.frame += 1;
        trace!(frame = self.frame, boids = self.boids.len(), sightings, "advanced flock");
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn get(&self, id: u64) -> Option<&Boid> {
        self.boids.iter().find(|boid| boid.id() == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut Boid> {
        self.boids.iter_mut().find(|boid| boid.id() == id)
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    /// Number of ticks advanced so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Toggle perception recording for one boid. Returns false for an unknown id.
    pub fn set_debug(&mut self, id: u64, enabled: bool) -> bool {
        match self.get_mut(id) {
            Some(boid) => {
                boid.set_debug(enabled);
                true
            }
            None => false,
        }
    }

    pub fn set_debug_all(&mut self, enabled: bool) {
        for boid in &mut self.boids {
            boid.set_debug(enabled);
        }
    }

    /// Perception records of every boid with debugging switched on.
    pub fn debug_snapshot(&self) -> DebugSnapshot {
        let agents = self
            .boids
            .iter()
            .filter_map(|boid| {
                boid.perception().map(|perception| AgentDebug {
                    id: boid.id(),
                    position: boid.position,
                    velocity: boid.velocity,
                    seen_neighbors: perception.seen_neighbors.clone(),
                    local_center_of_mass: perception.local_center_of_mass,
                })
            })
            .collect();

        DebugSnapshot {
            frame: self.frame,
            agents,
        }
    }
}
