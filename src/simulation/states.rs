//! Core state types for the gravity simulation.
//!
//! Defines the 2D body/system structs:
//! - `Body` holds kinematic state plus display metadata
//! - `System` holds the list of bodies
//!
//! Positions and velocities use `NVec2` (nalgebra `Vector2<f64>`).

use nalgebra::Vector2;

use crate::simulation::trajectory::Trail;

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub a: NVec2, // acceleration, rewritten by every solver pass
    pub m: f64, // mass, must be > 0
    pub radius: f64, // display radius, also the hit-box half-extent
    pub name: String, // display label, not required unique
    pub trail: Trail, // past positions, oldest first
}

impl Body {
    pub fn new(m: f64, x: NVec2, v: NVec2, radius: f64, name: impl Into<String>) -> Self {
        Self {
            x,
            v,
            a: NVec2::zeros(),
            m,
            radius,
            name: name.into(),
            trail: Trail::new(),
        }
    }
}

/// Body registry. Bodies are appended at startup or through a validated
/// creation request and are never removed, so indices stay stable.
#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>,
}
