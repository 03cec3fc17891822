//! Spin driver state and its speed schedule.

use std::f64::consts::PI;
use std::time::Duration;

/// Minute hand advance per frame (15 degrees).
pub const MINUTE_STEP: f64 = 15.0 * (PI / 180.0);
/// Hour hand advance per frame (1.25 degrees).
pub const HOUR_STEP: f64 = 1.25 * (PI / 180.0);
/// Frames in one revolution of the minute hand.
pub const STEPS_PER_REVOLUTION: usize = 24;

/// Frame pacing for the spin phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinSchedule {
    /// Delay between frames during the first revolution.
    pub initial_speed: Duration,
    /// Fastest allowed delay between frames.
    pub min_speed: Duration,
    /// Amount the delay shrinks after each revolution.
    pub acceleration: Duration,
    /// Revolutions at `min_speed` to complete before the clock shatters.
    /// The clock shatters once the count strictly exceeds this value.
    pub floor_spins: u32,
}

impl Default for SpinSchedule {
    fn default() -> Self {
        Self {
            initial_speed: Duration::from_millis(100),
            min_speed: Duration::from_millis(20),
            acceleration: Duration::from_millis(20),
            floor_spins: 5,
        }
    }
}

/// What the spin driver should do after a revolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Revolution {
    /// Keep spinning.
    Continue,
    /// Hand the current angles to the break-apart animation.
    Shatter,
}

/// Hand angles and pacing of the spinning clock.
///
/// Angles are in radians, clockwise from twelve o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockState {
    pub minute_angle: f64,
    pub hour_angle: f64,
    /// Current delay between frames.
    pub speed: Duration,
    /// Completed revolutions at the floor speed.
    pub spin_count: u32,
    schedule: SpinSchedule,
}

impl Default for ClockState {
    fn default() -> Self {
        Self::new(SpinSchedule::default())
    }
}

impl ClockState {
    /// Both hands at twelve, speed at the schedule's initial delay.
    pub fn new(schedule: SpinSchedule) -> Self {
        Self {
            minute_angle: 0.0,
            hour_angle: 0.0,
            speed: schedule.initial_speed,
            spin_count: 0,
            schedule,
        }
    }

    /// Move both hands forward by one frame.
    pub fn advance(&mut self) {
        self.minute_angle += MINUTE_STEP;
        self.hour_angle += HOUR_STEP;
    }

    /// Account for a completed revolution: speed up until the floor is
    /// reached, then count floor revolutions until it is time to shatter.
    pub fn finish_revolution(&mut self) -> Revolution {
        if self.speed > self.schedule.min_speed {
            self.speed = self
                .speed
                .saturating_sub(self.schedule.acceleration)
                .max(self.schedule.min_speed);
            return Revolution::Continue;
        }

        self.spin_count += 1;
        if self.spin_count > self.schedule.floor_spins {
            Revolution::Shatter
        } else {
            Revolution::Continue
        }
    }
}
