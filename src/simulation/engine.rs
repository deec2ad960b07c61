//! Simulation context object and per-tick driver
//!
//! [`Simulation`] bundles the body registry, force set, clock, and
//! viewport into the single mutable state the tick loop owns; there are
//! no ambient globals. All external control (tick control, body creation,
//! view commands, toggles) goes through it, and the read side queries it
//! for registry snapshots and equilibrium markers

use log::{debug, warn};
use thiserror::Error;

use crate::simulation::clock::Clock;
use crate::simulation::equilibrium::{locate_markers, BalanceMarker};
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::euler_symplectic;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};
use crate::viewport::view::{PanDirection, Viewport, ZoomMode};

/// Strongly-typed body construction request
///
/// New bodies spawn at `position = (radius, 0)` with
/// `velocity = (0, speed)`; `display_size` becomes the body's display
/// radius. The caller is expected to have already parsed any text input,
/// the core only validates numbers
#[derive(Debug, Clone)]
pub struct BodySpec {
    pub mass: f64, // must be positive and finite
    pub speed: f64, // initial speed along +y
    pub radius: f64, // spawn distance from the origin along +x
    pub display_size: u32, // display radius, must be nonzero
    pub name: String, // must be non-empty
}

#[derive(Debug, Error, PartialEq)]
pub enum BodySpecError {
    #[error("mass must be positive and finite, got {0}")]
    Mass(f64),
    #[error("speed must be finite, got {0}")]
    Speed(f64),
    #[error("spawn radius must be positive and finite, got {0}")]
    Radius(f64),
    #[error("display size must be nonzero")]
    DisplaySize,
    #[error("name must not be empty")]
    Name,
}

impl BodySpec {
    /// All-or-nothing check; a failed request leaves no trace in the registry
    pub fn validate(&self) -> Result<(), BodySpecError> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(BodySpecError::Mass(self.mass));
        }
        if !self.speed.is_finite() {
            return Err(BodySpecError::Speed(self.speed));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(BodySpecError::Radius(self.radius));
        }
        if self.display_size == 0 {
            return Err(BodySpecError::DisplaySize);
        }
        if self.name.trim().is_empty() {
            return Err(BodySpecError::Name);
        }
        Ok(())
    }
}

/// Fully-initialized runtime simulation
#[derive(Debug)]
pub struct Simulation {
    pub system: System,
    pub forces: AccelSet,
    pub parameters: Parameters,
    pub clock: Clock,
    pub viewport: Viewport,
    pub trails_enabled: bool,
    pub indicators_enabled: bool,
}

impl Simulation {
    /// Bundle a system with its parameters and viewport, registering
    /// Newtonian gravity in the force set and starting the clock paused
    /// at the configured step size
    pub fn new(system: System, parameters: Parameters, viewport: Viewport) -> Self {
        let forces = AccelSet::new().with(NewtonianGravity {
            g: parameters.g,
            min_distance: parameters.min_distance,
        });

        let mut clock = Clock::new();
        clock.dt = parameters.dt0;

        Self {
            system,
            forces,
            parameters,
            clock,
            viewport,
            trails_enabled: true,
            indicators_enabled: false,
        }
    }

    /// One full simulation tick
    ///
    /// While unpaused: one self-consistent force pass, the integrator
    /// step, the clock advance, and one trail append per body. The
    /// viewport lock follow runs every tick, paused or not, so the view
    /// stays glued to its target
    pub fn tick(&mut self) {
        if !self.clock.paused {
            euler_symplectic(
                &mut self.system,
                &self.forces,
                self.clock.time,
                self.clock.dt,
            );
            self.clock.advance();

            if self.trails_enabled {
                for b in &mut self.system.bodies {
                    b.trail.push(b.x);
                }
            }
        }

        self.viewport.follow(&self.system);
    }

    /// Append a body from a validated request; a rejected request leaves
    /// all state unchanged
    pub fn create_body(&mut self, spec: BodySpec) -> Result<(), BodySpecError> {
        if let Err(err) = spec.validate() {
            warn!("rejected body spec {:?}: {err}", spec.name);
            return Err(err);
        }

        let body = Body::new(
            spec.mass,
            NVec2::new(spec.radius, 0.0),
            NVec2::new(0.0, spec.speed),
            f64::from(spec.display_size),
            spec.name,
        );
        debug!("created body {:?} (n = {})", body.name, self.system.bodies.len() + 1);
        self.system.bodies.push(body);
        Ok(())
    }

    /// Read-only snapshot of the body registry
    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    // Tick control

    pub fn toggle_pause(&mut self) {
        self.clock.toggle_pause();
    }

    pub fn warp_forward(&mut self) {
        self.clock.warp_forward();
    }

    pub fn warp_backward(&mut self) {
        self.clock.warp_backward();
    }

    pub fn reset_step(&mut self) {
        self.clock.reset_step();
    }

    // View control

    pub fn zoom_in(&mut self, mode: ZoomMode) {
        self.viewport.zoom_in(mode);
    }

    pub fn zoom_out(&mut self, mode: ZoomMode) {
        self.viewport.zoom_out(mode);
    }

    pub fn pan(&mut self, dir: PanDirection) {
        self.viewport.pan(dir);
    }

    pub fn reset_view(&mut self) {
        self.viewport.reset();
    }

    pub fn lock_to(&mut self, body: Option<usize>) {
        self.viewport.lock_to(body, &self.system);
    }

    // Toggles

    /// Enable or disable trajectory recording. Disabling clears every
    /// body's history immediately; histories stay empty until re-enabled
    pub fn set_trajectories_enabled(&mut self, on: bool) {
        self.trails_enabled = on;
        if !on {
            for b in &mut self.system.bodies {
                b.trail.clear();
            }
        }
    }

    pub fn set_equilibrium_indicators_enabled(&mut self, on: bool) {
        self.indicators_enabled = on;
    }

    /// Fresh balance markers for the current positions; empty while the
    /// indicator toggle is off
    pub fn equilibrium_markers(&self) -> Vec<BalanceMarker> {
        if !self.indicators_enabled {
            return Vec::new();
        }
        locate_markers(&self.system, self.parameters.min_distance)
    }
}
