//! Force / acceleration contributors for the gravity engine
//!
//! Defines the 2D acceleration seam: individual force laws implement
//! [`Acceleration`] and an [`AccelSet`] sums their contributions into a
//! single acceleration vector per body

use crate::simulation::states::{NVec2, System};

/// Collection of 2D acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl std::fmt::Debug for AccelSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccelSet")
            .field("terms", &self.terms.len())
            .finish()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for 2D acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec2]);
}

/// 2D Newtonian point-mass gravity, direct n^2 sum
/// Separations are floored at `min_distance` so two coincident bodies
/// produce a large but finite pull instead of NaN/Inf
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
    pub min_distance: f64, // separation floor
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec2]) {
        let n = sys.bodies.len();
        if n == 0 { // No bodies, return
            return;
        }

        // Loop over each unordered pair (i, j) with i < j; both ordered
        // contributions are applied at once, so the pass stays one
        // self-consistent sweep over the current positions
        for i in 0..n {
            let bi = &sys.bodies[i];
            let xi = bi.x; // position of body i
            let mi = bi.m; // mass of body i

            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                // r is the displacement vector from i to j
                // If r points from i to j, then i feels a pull along +r,
                // j feels a pull along -r
                let r = bj.x - xi;

                // Separation |r|, floored to keep coincident bodies finite
                let d = r.norm().max(self.min_distance);

                // 1 / d^3, the distance factor in a = G m r / d^3
                // (that is F/m = (G m_i m_j / d^2) / m_i, along r/d)
                let inv_d = d.recip();
                let inv_d3 = inv_d * inv_d * inv_d;

                // coef = G / d^3
                let coef = self.g * inv_d3;

                // Equal and opposite:
                // a_i +=  G * m_j * r / d^3
                // a_j += -G * m_i * r / d^3
                out[i] += coef * bj.m * r;
                out[j] -= coef * mi * r;
            }
        }
    }
}
