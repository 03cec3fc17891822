//! Turning a clock frame into debris.

use shatter_core::{CENTER_X, CENTER_Y, Grid, Piece};

/// Build one piece per non-blank cell of `frame`, in row-major order.
///
/// Each piece starts on its cell and moves radially away from the center at
/// `burst_speed`. A glyph sitting exactly on the center gets a zero velocity.
pub fn shatter(frame: &Grid, burst_speed: f64) -> Vec<Piece> {
    frame
        .cells()
        .map(|(x, y, glyph)| {
            let dx = (x - CENTER_X) as f64;
            let dy = (y - CENTER_Y) as f64;
            let mut distance = (dx * dx + dy * dy).sqrt();
            if distance == 0.0 {
                distance = 1.0;
            }
            Piece::new(
                x as f64,
                y as f64,
                dx / distance * burst_speed,
                dy / distance * burst_speed,
                glyph,
            )
        })
        .collect()
}
