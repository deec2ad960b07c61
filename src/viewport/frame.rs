//! Display-space frame data for an external renderer
//!
//! Assembles everything a renderer needs for one frame: body sprites,
//! trail polylines, equilibrium arrows, and the clock readout. Pure
//! reads; nothing here mutates simulation state or draws anything

use std::f64::consts::FRAC_PI_6;

use crate::simulation::engine::Simulation;
use crate::simulation::states::NVec2;

/// One body resolved to display space
#[derive(Debug, Clone)]
pub struct BodySprite {
    pub position: NVec2, // display-space center
    pub radius: f64, // display radius, independent of zoom
    pub name: String,
}

/// Directional indicator resolved to display space: shaft plus arrowhead
#[derive(Debug, Clone, Copy)]
pub struct Arrow {
    pub start: NVec2,
    pub end: NVec2,
    pub head: [NVec2; 3], // tip plus the two barb points
    pub width: f64,
}

/// Everything the renderer consumes for one frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub sprites: Vec<BodySprite>,
    pub trails: Vec<Vec<NVec2>>, // one display-space polyline per body
    pub arrows: Vec<Arrow>,
    pub clock_label: String,
}

// Barb length multiplier relative to the shaft width
const HEAD_SCALE: f64 = 5.0;

/// Arrowhead triangle for a shaft from `start` to `end`: the two barbs
/// sit `width * HEAD_SCALE` behind the tip, swept 30 degrees off the
/// shaft direction on either side
pub fn arrow_geometry(start: NVec2, end: NVec2, width: f64) -> Arrow {
    let angle = (end.y - start.y).atan2(end.x - start.x);
    let barb = |a: f64| {
        NVec2::new(
            end.x - width * HEAD_SCALE * a.cos(),
            end.y - width * HEAD_SCALE * a.sin(),
        )
    };
    let left = barb(angle - FRAC_PI_6);
    let right = barb(angle + FRAC_PI_6);

    Arrow {
        start,
        end,
        head: [end, left, right],
        width,
    }
}

/// Snapshot the current simulation as display-space frame data
pub fn compose_frame(sim: &Simulation) -> Frame {
    let vp = &sim.viewport;

    let sprites = sim
        .bodies()
        .iter()
        .map(|b| BodySprite {
            position: vp.project(b.x),
            radius: b.radius,
            name: b.name.clone(),
        })
        .collect();

    let trails = sim
        .bodies()
        .iter()
        .map(|b| b.trail.iter().map(|p| vp.project(p)).collect())
        .collect();

    let arrows = sim
        .equilibrium_markers()
        .iter()
        .map(|m| arrow_geometry(vp.project(m.start), vp.project(m.end), m.width))
        .collect();

    Frame {
        sprites,
        trails,
        arrows,
        clock_label: sim.clock.elapsed_label(),
    }
}
