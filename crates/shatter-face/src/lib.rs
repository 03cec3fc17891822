//! Clock face rendering for shatterclock.
//!
//! Everything here stamps glyphs onto a [`Grid`]. Later calls overwrite
//! earlier ones; there is no other z-order.

use shatter_core::{CENTER_X, CENTER_Y, Grid, HEIGHT, WIDTH};

/// Columns per unit of geometric distance. Terminal cells are about twice
/// as tall as they are wide.
pub const ASPECT: f64 = 2.0;

/// Radius of the circle outline, in rows.
pub const FACE_RADIUS: f64 = (HEIGHT / 2 - 2) as f64;

/// Radius the hour markers sit at, just inside the outline.
pub const MARKER_RADIUS: f64 = (HEIGHT / 2 - 3) as f64;

/// Glyph of the circle outline.
pub const OUTLINE: char = '*';

/// A clock hand: a straight run of one glyph from the center outward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    /// Number of cells, not counting the center.
    pub length: i32,
    pub symbol: char,
}

/// The short hand.
pub const HOUR_HAND: Hand = Hand {
    length: (HEIGHT / 4) as i32,
    symbol: 'h',
};

/// The long hand.
pub const MINUTE_HAND: Hand = Hand {
    length: (HEIGHT / 2 - 4) as i32,
    symbol: 'm',
};

/// Draw the circle outline of the face.
pub fn draw_circle(grid: &mut Grid) {
    for y in 0..HEIGHT as i32 {
        for x in 0..WIDTH as i32 {
            let dx = (x - CENTER_X) as f64 / ASPECT;
            let dy = (y - CENTER_Y) as f64;
            let distance = (dx * dx + dy * dy).sqrt();
            if (distance - FACE_RADIUS).abs() <= 0.5 {
                grid.set(x, y, OUTLINE);
            }
        }
    }
}

/// Draw the hour numerals 1 through 12.
///
/// Two-digit numerals end at the projected column, so the tens digit sits
/// one column to its left.
pub fn draw_markers(grid: &mut Grid) {
    for hour in 1..=12u32 {
        let angle = (hour as f64 * 30.0).to_radians();
        let x = (CENTER_X as f64 + MARKER_RADIUS * angle.sin() * ASPECT).floor() as i32;
        let y = (CENTER_Y as f64 - MARKER_RADIUS * angle.cos()).floor() as i32;

        let units = char::from_digit(hour % 10, 10).unwrap_or('?');
        if hour >= 10 {
            let tens = char::from_digit(hour / 10, 10).unwrap_or('?');
            grid.set(x - 1, y, tens);
        }
        grid.set(x, y, units);
    }
}

/// Draw `hand` pointing at `angle` radians clockwise from twelve.
pub fn draw_hand(grid: &mut Grid, angle: f64, hand: Hand) {
    let (sin, cos) = angle.sin_cos();
    for i in 1..=hand.length {
        let r = i as f64;
        let x = (CENTER_X as f64 + r * sin * ASPECT).round() as i32;
        let y = (CENTER_Y as f64 - r * cos).round() as i32;
        grid.set(x, y, hand.symbol);
    }
}

/// Compose one full clock frame: outline, numerals, hour hand, minute hand.
pub fn compose(minute_angle: f64, hour_angle: f64) -> Grid {
    let mut grid = Grid::new();
    draw_circle(&mut grid);
    draw_markers(&mut grid);
    draw_hand(&mut grid, hour_angle, HOUR_HAND);
    draw_hand(&mut grid, minute_angle, MINUTE_HAND);
    grid
}
