/*
 * Debug Information Module
 *
 * Perception introspection for the renderer's debug overlays. An agent only
 * owns a Perception record while debugging is switched on for it, so agents
 * that are not being inspected carry no per-tick allocation.
 *
 * A DebugSnapshot gathers the records of every inspected agent for one frame
 * and serializes to JSON for external viewers.
 */

use serde::{Deserialize, Serialize};

use crate::vector::Vector3;

/// What one agent perceived during its most recent perception pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Perception {
    /// Positions of the neighbors seen this tick, in scan order.
    pub seen_neighbors: Vec<Vector3>,
    /// Centroid of the neighbors from the last tick that saw any.
    pub local_center_of_mass: Option<Vector3>,
}

impl Perception {
    pub(crate) fn begin_pass(&mut self) {
        self.seen_neighbors.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDebug {
    pub id: u64,
    pub position: Vector3,
    pub velocity: Vector3,
    pub seen_neighbors: Vec<Vector3>,
    pub local_center_of_mass: Option<Vector3>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebugSnapshot {
    pub frame: u64,
    pub agents: Vec<AgentDebug>,
}

impl DebugSnapshot {
    pub fn agent(&self, id: u64) -> Option<&AgentDebug> {
        self.agents.iter().find(|agent| agent.id == id)
    }
}
