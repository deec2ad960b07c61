pub mod simulation;
pub mod configuration;
pub mod viewport;
pub mod benchmark;

pub use simulation::states::{Body, NVec2, System};
pub use simulation::params::{Parameters, G, MIN_DISTANCE};
pub use simulation::clock::{Clock, DEFAULT_DT};
pub use simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
pub use simulation::integrator::euler_symplectic;
pub use simulation::trajectory::{Trail, TRAIL_CAPACITY};
pub use simulation::equilibrium::{balance_point, locate_markers, BalanceMarker};
pub use simulation::scenario::{build_scenario, ScenarioError, DEFAULT_SCREEN};
pub use simulation::engine::{BodySpec, BodySpecError, Simulation};

pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig, ViewConfig};

pub use viewport::view::{PanDirection, Viewport, ZoomMode, DEFAULT_SCALE, PAN_STEP, ZOOM_STEP};
pub use viewport::frame::{arrow_geometry, compose_frame, Arrow, BodySprite, Frame};

pub use benchmark::benchmark::{bench_gravity, bench_step_curve};
