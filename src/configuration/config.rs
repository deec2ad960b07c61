//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constants and the initial step size
//! - [`ViewConfig`]       – display surface size and initial zoom scale
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   g: 6.67e-11            # gravitational constant
//!   dt0: 1800.0            # initial step size, simulated seconds per tick
//!   min_distance: 1.0e-20  # separation floor for the force solver
//!
//! view:
//!   screen_width: 1300.0
//!   screen_height: 800.0
//!   scale: 0.5e-6          # display units per simulation unit
//!
//! bodies:
//!   - x: [ 0.0, 0.0 ]
//!     v: [ 0.0, 0.0 ]
//!     m: 5.97e24
//!     radius: 10.0
//!     name: "Earth"
//!   - x: [ 3.84e8, 0.0 ]
//!     v: [ 0.0, 1022.0 ]
//!     m: 7.35e22
//!     radius: 6.0
//!     name: "Moon"
//! ```
//!
//! The engine maps this configuration into its runtime representation;
//! see `simulation::scenario`.

use serde::Deserialize;

/// Physical constants and the initial step size for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub g: f64, // gravitational constant
    pub dt0: f64, // initial step size, simulated seconds per tick
    pub min_distance: Option<f64>, // separation floor, defaults to 1e-20
}

/// Display surface and initial zoom for the viewport
#[derive(Deserialize, Debug, Clone)]
pub struct ViewConfig {
    pub screen_width: f64, // display surface width
    pub screen_height: f64, // display surface height
    pub scale: Option<f64>, // display units per simulation unit
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>, // initial position in simulation units
    pub v: Vec<f64>, // initial velocity in simulation units per second
    pub m: f64, // mass, must be positive
    pub radius: f64, // display radius, must be positive
    pub name: String, // display label
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // physical constants and step size
    pub view: Option<ViewConfig>, // viewport settings, defaults when absent
    pub bodies: Vec<BodyConfig>, // initial body roster
}
