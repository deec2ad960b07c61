//! Simulation clock and time-warp state
//!
//! Tracks elapsed simulation time decoupled from wall-clock time. The
//! step size scales by powers of two ("time warp") and the clock only
//! advances while unpaused

/// Default step size, simulated seconds per tick
pub const DEFAULT_DT: f64 = 1800.0;

#[derive(Debug, Clone)]
pub struct Clock {
    pub time: f64, // elapsed simulation seconds
    pub dt: f64, // simulated seconds advanced per tick
    pub paused: bool,
}

impl Clock {
    /// New clock at t = 0, default step size, paused
    pub fn new() -> Self {
        Self {
            time: 0.0,
            dt: DEFAULT_DT,
            paused: true,
        }
    }

    /// dt <- dt * 2
    pub fn warp_forward(&mut self) {
        self.dt *= 2.0;
    }

    /// dt <- dt / 2
    /// Repeated halving approaches but never reaches zero; no floor is
    /// enforced, and doubling is likewise unbounded
    pub fn warp_backward(&mut self) {
        self.dt /= 2.0;
    }

    /// Restore the default step size
    pub fn reset_step(&mut self) {
        self.dt = DEFAULT_DT;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Advance by one step; paused ticks advance by zero
    pub fn advance(&mut self) {
        if !self.paused {
            self.time += self.dt;
        }
    }

    /// Elapsed readout as whole days and hours, e.g. `T+ 3:Days 7:Hours`
    pub fn elapsed_label(&self) -> String {
        let total = self.time as i64;
        let days = total / 86_400;
        let hours = (total % 86_400) / 3_600;
        format!("T+ {days}:Days {hours}:Hours")
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
