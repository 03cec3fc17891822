//! Physics constants of the debris simulation.

use std::time::Duration;

/// Tunables for the break-apart animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Physics {
    /// Added to every moving piece's vertical velocity each tick.
    pub gravity: f64,
    /// Initial outward speed of every piece, in cells per tick.
    pub burst_speed: f64,
    /// Delay between simulation frames.
    pub tick: Duration,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            gravity: 0.2,
            burst_speed: 1.5,
            tick: Duration::from_millis(50),
        }
    }
}
