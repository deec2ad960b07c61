//! Simulation-space to display-space transform
//!
//! `display = p * scale + center`, with pan nudges, two selectable zoom
//! policies, and an optional body lock that re-centers the view on a
//! chosen body every tick

use log::warn;

use crate::simulation::states::{NVec2, System};

/// Default display scale, display units per simulation unit
pub const DEFAULT_SCALE: f64 = 0.5e-6;

/// Additive scale change per press in [`ZoomMode::Step`]
pub const ZOOM_STEP: f64 = 0.005e-6;

/// Display units moved per pan nudge
pub const PAN_STEP: f64 = 50.0;

/// Zoom adjustment policy, selected by the caller per press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomMode {
    /// Additive: scale changes by [`ZOOM_STEP`]
    Step,
    /// Multiplicative: scale doubles or halves
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct Viewport {
    pub scale: f64, // display units per simulation unit
    pub center: NVec2, // pan center added after scaling
    pub pan_offset: NVec2, // manual nudge accumulated while locked
    pub locked: Option<usize>, // registry index, validated on every use
    pub screen: NVec2, // display surface size
}

impl Viewport {
    /// Viewport centered on a display surface of the given size
    pub fn new(screen: NVec2) -> Self {
        Self {
            scale: DEFAULT_SCALE,
            center: screen * 0.5,
            pan_offset: NVec2::zeros(),
            locked: None,
            screen,
        }
    }

    /// Simulation space -> display space
    pub fn project(&self, p: NVec2) -> NVec2 {
        p * self.scale + self.center
    }

    /// Display space -> simulation space, inverse of [`Viewport::project`]
    pub fn unproject(&self, q: NVec2) -> NVec2 {
        (q - self.center) / self.scale
    }

    pub fn zoom_in(&mut self, mode: ZoomMode) {
        match mode {
            ZoomMode::Step => self.scale += ZOOM_STEP,
            ZoomMode::Double => self.scale *= 2.0,
        }
    }

    pub fn zoom_out(&mut self, mode: ZoomMode) {
        match mode {
            ZoomMode::Step => self.scale -= ZOOM_STEP,
            ZoomMode::Double => self.scale /= 2.0,
        }
    }

    /// Nudge the view by one pan step. While locked the nudge accumulates
    /// in `pan_offset` so it composes with the per-tick re-centering.
    /// Display y grows downward: `Up` shifts content down, moving the view up
    pub fn pan(&mut self, dir: PanDirection) {
        let delta = match dir {
            PanDirection::Up => NVec2::new(0.0, PAN_STEP),
            PanDirection::Down => NVec2::new(0.0, -PAN_STEP),
            PanDirection::Left => NVec2::new(PAN_STEP, 0.0),
            PanDirection::Right => NVec2::new(-PAN_STEP, 0.0),
        };
        if self.locked.is_some() {
            self.pan_offset += delta;
        } else {
            self.center += delta;
        }
    }

    /// Engage or release the body lock. An index that does not resolve in
    /// `sys` is ignored and the current lock state is left untouched
    pub fn lock_to(&mut self, body: Option<usize>, sys: &System) {
        match body {
            Some(i) if i >= sys.bodies.len() => {
                warn!("lock target {i} out of range (n = {})", sys.bodies.len());
            }
            other => self.locked = other,
        }
    }

    /// Re-center on the locked body's current position; called once per
    /// tick. A lock index that stopped resolving releases the lock and
    /// leaves `center` and `pan_offset` at their last-computed values
    pub fn follow(&mut self, sys: &System) {
        let Some(i) = self.locked else {
            return;
        };
        match sys.bodies.get(i) {
            Some(b) => {
                self.center = -(b.x * self.scale) + self.screen * 0.5 + self.pan_offset;
            }
            None => {
                warn!("locked body {i} no longer exists, releasing lock");
                self.locked = None;
            }
        }
    }

    /// Restore the pan center to the screen midpoint, zero the pan offset,
    /// and release any lock. The zoom scale is left alone
    pub fn reset(&mut self) {
        self.center = self.screen * 0.5;
        self.pan_offset = NVec2::zeros();
        self.locked = None;
    }

    /// First body whose square display-space hit box (side `2 * radius`,
    /// centered on the body) contains the display point `q`
    pub fn body_at(&self, sys: &System, q: NVec2) -> Option<usize> {
        sys.bodies.iter().position(|b| {
            let c = self.project(b.x);
            (q.x - c.x).abs() <= b.radius && (q.y - c.y).abs() <= b.radius
        })
    }
}
