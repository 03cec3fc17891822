//! Debris particle.

/// A single glyph in flight after the clock breaks apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    /// Horizontal position in cells.
    pub x: f64,
    /// Vertical position in cells, growing downward.
    pub y: f64,
    /// Horizontal velocity in cells per tick.
    pub vx: f64,
    /// Vertical velocity in cells per tick.
    pub vy: f64,
    /// Glyph drawn for this piece.
    pub glyph: char,
    /// Set once the piece lands; never cleared.
    pub stopped: bool,
}

impl Piece {
    /// Create a moving piece.
    pub fn new(x: f64, y: f64, vx: f64, vy: f64, glyph: char) -> Self {
        Self {
            x,
            y,
            vx,
            vy,
            glyph,
            stopped: false,
        }
    }

    /// Cell the piece is drawn in.
    pub fn cell(&self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }
}
