//! Core types for the shatterclock demo.
//!
//! Holds the fixed-size glyph grid every frame is drawn into, the settled
//! ground map used by the debris simulation, the particle type, and the
//! spin driver's clock state with its speed schedule.

mod clock;
mod grid;
mod piece;

pub use clock::{ClockState, HOUR_STEP, MINUTE_STEP, Revolution, STEPS_PER_REVOLUTION, SpinSchedule};
pub use grid::{BLANK, CENTER_X, CENTER_Y, Grid, Ground, HEIGHT, WIDTH, in_bounds};
pub use piece::Piece;
