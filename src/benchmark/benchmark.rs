use std::time::Instant;

use crate::simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
use crate::simulation::integrator::euler_symplectic;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// Helper to build a deterministic system of size `n`
fn make_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec2::new((i_f * 0.37).sin() * 5.0e9, (i_f * 0.13).cos() * 5.0e9);

        bodies.push(Body::new(1.0e22, x, NVec2::zeros(), 2.0, format!("b{i}")));
    }

    System { bodies }
}

/// Time a single direct-gravity pass for a range of system sizes
pub fn bench_gravity() {
    let ns = [50, 100, 200, 400, 800, 1600];

    for n in ns {
        let sys = make_system(n);
        let p = Parameters::default();

        let gravity = NewtonianGravity {
            g: p.g,
            min_distance: p.min_distance,
        };

        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        gravity.acceleration(0.0, &sys, &mut out);

        let t0 = Instant::now();
        gravity.acceleration(0.0, &sys, &mut out);
        let dt_solve = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, direct = {dt_solve:8.6} s");
    }
}

/// Time a full tick (force pass + integrator) across a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve() {
    println!("N,step_ms");

    for n in (50..=1600).step_by(50) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 400 { 5 } else { 1 };

        let mut sys = make_system(n);
        let p = Parameters::default();

        let forces = AccelSet::new().with(NewtonianGravity {
            g: p.g,
            min_distance: p.min_distance,
        });

        let t0 = Instant::now();
        for s in 0..steps {
            euler_symplectic(&mut sys, &forces, s as f64 * p.dt0, p.dt0);
        }
        let elapsed = t0.elapsed().as_secs_f64() * 1000.0;
        let ms = elapsed / steps as f64;

        println!("{n},{ms:.6}");
    }
}
