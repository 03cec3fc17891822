//! Break-apart animation for the shatterclock demo.
//!
//! Every glyph of the final clock frame becomes a [`Piece`] flung away from
//! the center. The [`Simulation`] then drops the pieces under gravity,
//! bounces them off the side walls and piles them up on the bottom row.
//!
//! [`Piece`]: shatter_core::Piece

mod physics;
mod shatter;
mod simulation;

pub use physics::Physics;
pub use shatter::shatter;
pub use simulation::{Simulation, Tick};
