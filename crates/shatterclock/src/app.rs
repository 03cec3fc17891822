//! The animation driver: spin the clock, then let it fall apart.

use std::io::Write;
use std::thread;
use std::time::Duration;

use crossterm::queue;
use shatter_config::Settings;
use shatter_core::{ClockState, Grid, Revolution, STEPS_PER_REVOLUTION};
use shatter_debris::{Simulation, shatter};
use shatter_face::compose;
use tracing::{debug, info};

use crate::terminal::ClearFrame;

/// Waits between frames.
pub trait Pacer {
    fn sleep(&mut self, duration: Duration);
}

/// Sleeps the current thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// The main application which holds the output, pacing and settings.
#[derive(Debug)]
pub struct App<W: Write, P: Pacer> {
    /// Where frames are written.
    out: W,
    /// Paces the frames.
    pacer: P,
    settings: Settings,
    /// Frames written so far.
    frames: u64,
}

impl<W: Write, P: Pacer> App<W, P> {
    /// Construct a new instance of [`App`].
    pub fn new(out: W, pacer: P, settings: Settings) -> Self {
        Self {
            out,
            pacer,
            settings,
            frames: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (W, P) {
        (self.out, self.pacer)
    }

    /// Run the whole animation: spin until the clock shatters, then play the
    /// debris out until every piece has landed.
    pub fn run(&mut self) -> color_eyre::Result<()> {
        let clock = self.spin()?;
        self.break_apart(clock.minute_angle, clock.hour_angle)?;
        info!(frames = self.frames(), "animation finished");
        Ok(())
    }

    /// Spin the hands, speeding up after every revolution. Returns the clock
    /// as it stood when it was time to shatter.
    pub fn spin(&mut self) -> color_eyre::Result<ClockState> {
        let mut clock = ClockState::new(self.settings.spin.schedule());
        loop {
            for _ in 0..STEPS_PER_REVOLUTION {
                // Hands move before they are drawn, so the first frame is
                // already one step past twelve.
                clock.advance();
                let frame = compose(clock.minute_angle, clock.hour_angle);
                self.write_frame(&frame)?;
                self.pacer.sleep(clock.speed);
            }

            match clock.finish_revolution() {
                Revolution::Continue => debug!(
                    speed_ms = clock.speed.as_millis() as u64,
                    spin_count = clock.spin_count,
                    "revolution complete"
                ),
                Revolution::Shatter => {
                    info!(
                        minute_angle = clock.minute_angle,
                        hour_angle = clock.hour_angle,
                        frames = self.frames,
                        "clock shattering"
                    );
                    return Ok(clock);
                }
            }
        }
    }

    /// Break the clock at the given hand angles into debris and simulate it
    /// until it has settled. The last frame stays on screen.
    pub fn break_apart(
        &mut self,
        minute_angle: f64,
        hour_angle: f64,
    ) -> color_eyre::Result<Simulation> {
        let physics = self.settings.debris.physics();
        let frame = compose(minute_angle, hour_angle);
        let pieces = shatter(&frame, physics.burst_speed);
        info!(pieces = pieces.len(), "clock broke apart");

        let mut sim = Simulation::new(pieces, physics);
        loop {
            let tick = sim.step();
            self.write_frame(&tick.frame)?;
            if tick.all_stopped {
                break;
            }
            self.pacer.sleep(physics.tick);
        }

        info!(
            ticks = sim.ticks(),
            ground = sim.ground().count(),
            "debris settled"
        );
        Ok(sim)
    }

    /// Clear the screen and write `frame`, one line per row.
    pub fn write_frame(&mut self, frame: &Grid) -> color_eyre::Result<()> {
        queue!(self.out, ClearFrame)?;
        for row in frame.rows() {
            writeln!(self.out, "{row}")?;
        }
        self.out.flush()?;
        self.frames += 1;
        Ok(())
    }
}
