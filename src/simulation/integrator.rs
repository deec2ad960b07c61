//! Fixed-step time integration for the gravity system
//!
//! Semi-implicit (symplectic) Euler: the velocity kick happens first and
//! the position drift uses the already-updated velocity, which keeps
//! orbital energy bounded where plain explicit Euler drifts outward

use super::forces::AccelSet;
use super::states::{NVec2, System};

/// Advance the system by one step of size `dt`
/// Accelerations are accumulated in one pass over the current positions
/// and stored on each body, then velocities and positions are updated
/// in-place. `t` is the simulation time at the start of the step
pub fn euler_symplectic(sys: &mut System, forces: &AccelSet, t: f64, dt: f64) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    // accels[i] holds a_n for body i at the current positions x_n
    let mut accels = vec![NVec2::zeros(); n];
    forces.accumulate_accels(t, &*sys, &mut accels);

    // Kick: v_n+1 = v_n + dt * a_n
    for (b, a) in sys.bodies.iter_mut().zip(accels.iter()) {
        b.a = *a;
        b.v += dt * *a;
    }

    // Drift with the already-updated velocity: x_n+1 = x_n + dt * v_n+1
    // The ordering is what makes the scheme symplectic
    for b in sys.bodies.iter_mut() {
        b.x += dt * b.v;
    }
}
