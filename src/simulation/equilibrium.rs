//! Gravitational potential balance points between body pairs
//!
//! For each ordered pair of bodies the locator finds the point on their
//! connecting segment where the two potentials have equal magnitude. The
//! segment from the first body to that point feeds the renderer's
//! directional indicator toward the dominant body; nothing here touches
//! simulation state

use crate::simulation::states::{NVec2, System};

/// Indicator segment for one ordered body pair, in simulation space
#[derive(Debug, Clone, Copy)]
pub struct BalanceMarker {
    pub start: NVec2, // first body's position
    pub end: NVec2, // potential balance point
    pub width: f64, // line width hint from the pair's display radii
}

/// Balance point between two point masses
///
/// With Phi_1 = -G m1 / R1 and Phi_2 = -G m2 / R2 equal in magnitude and
/// R1 + R2 = D, the point sits at R1 = D m1 / (m1 + m2) from `x1` along
/// the unit direction toward `x2` (closer to the lighter body).
/// Requires `x1 != x2`
pub fn balance_point(x1: NVec2, m1: f64, x2: NVec2, m2: f64) -> NVec2 {
    let dir = x2 - x1;
    let dist = dir.norm();
    let r1 = dist * m1 / (m1 + m2);
    x1 + dir / dist * r1
}

/// Markers for every ordered pair (i, j) with i != j, recomputed from the
/// current positions. Pairs separated by less than `min_distance` are
/// skipped so coincident bodies cannot poison the output
pub fn locate_markers(sys: &System, min_distance: f64) -> Vec<BalanceMarker> {
    let n = sys.bodies.len();
    let mut markers = Vec::with_capacity(n.saturating_mul(n.saturating_sub(1)));

    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let bi = &sys.bodies[i];
            let bj = &sys.bodies[j];
            if (bj.x - bi.x).norm() <= min_distance {
                continue;
            }
            markers.push(BalanceMarker {
                start: bi.x,
                end: balance_point(bi.x, bi.m, bj.x, bj.m),
                width: 0.5 * (bi.radius + bj.radius),
            });
        }
    }

    markers
}
