//! Build a fully-initialized runtime simulation from configuration
//!
//! Takes a [`ScenarioConfig`] (YAML-facing) and produces a [`Simulation`]
//! ready to tick: bodies at t = 0, gravity registered in the force set,
//! clock at the configured step size, viewport centered on the screen.
//! Body entries are validated here so the registry never holds a body
//! that would break the solver

use thiserror::Error;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::engine::Simulation;
use crate::simulation::params::{Parameters, MIN_DISTANCE};
use crate::simulation::states::{Body, NVec2, System};
use crate::viewport::view::{Viewport, DEFAULT_SCALE};

/// Display surface size used when the scenario does not specify one
pub const DEFAULT_SCREEN: (f64, f64) = (1300.0, 800.0);

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("body {index} ({name:?}): {reason}")]
    InvalidBody {
        index: usize,
        name: String,
        reason: &'static str,
    },
    #[error("body {index} ({name:?}): field {field:?} needs exactly 2 components")]
    BadVector {
        index: usize,
        name: String,
        field: &'static str,
    },
}

/// Map a `ScenarioConfig` into a runtime [`Simulation`]
pub fn build_scenario(cfg: ScenarioConfig) -> Result<Simulation, ScenarioError> {
    // Bodies: map `BodyConfig` -> runtime `Body`, validating as we go
    let mut bodies = Vec::with_capacity(cfg.bodies.len());
    for (index, bc) in cfg.bodies.iter().enumerate() {
        bodies.push(build_body(index, bc)?);
    }

    let system = System { bodies };

    let p = cfg.parameters;
    let parameters = Parameters {
        g: p.g,
        min_distance: p.min_distance.unwrap_or(MIN_DISTANCE),
        dt0: p.dt0,
    };

    let (screen, scale) = match cfg.view {
        Some(v) => (
            NVec2::new(v.screen_width, v.screen_height),
            v.scale.unwrap_or(DEFAULT_SCALE),
        ),
        None => (
            NVec2::new(DEFAULT_SCREEN.0, DEFAULT_SCREEN.1),
            DEFAULT_SCALE,
        ),
    };

    let mut viewport = Viewport::new(screen);
    viewport.scale = scale;

    Ok(Simulation::new(system, parameters, viewport))
}

fn build_body(index: usize, bc: &BodyConfig) -> Result<Body, ScenarioError> {
    let invalid = |reason| ScenarioError::InvalidBody {
        index,
        name: bc.name.clone(),
        reason,
    };

    if !(bc.m.is_finite() && bc.m > 0.0) {
        return Err(invalid("mass must be positive and finite"));
    }
    if !(bc.radius.is_finite() && bc.radius > 0.0) {
        return Err(invalid("radius must be positive and finite"));
    }

    let x = vec2(index, &bc.name, "x", &bc.x)?;
    let v = vec2(index, &bc.name, "v", &bc.v)?;

    Ok(Body::new(bc.m, x, v, bc.radius, bc.name.clone()))
}

fn vec2(index: usize, name: &str, field: &'static str, v: &[f64]) -> Result<NVec2, ScenarioError> {
    if v.len() != 2 {
        return Err(ScenarioError::BadVector {
            index,
            name: name.to_string(),
            field,
        });
    }
    Ok(NVec2::new(v[0], v[1]))
}
