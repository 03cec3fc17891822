//! Debris simulation state.

use shatter_core::{Grid, Ground, HEIGHT, Piece, WIDTH};

use crate::physics::Physics;

/// Result of advancing the simulation by one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Frame to show for this tick.
    pub frame: Grid,
    /// No piece moved during this tick.
    pub all_stopped: bool,
}

/// Falling debris over a fixed grid.
///
/// Pieces fall under gravity and reflect off the left and right walls
/// without losing speed. A piece stops as soon as its next cell is on the
/// bottom row or directly above a settled cell, so the pile grows upward
/// from the floor. Moving pieces pass through each other.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// All pieces, in draw order. Later pieces draw over earlier ones.
    pieces: Vec<Piece>,
    /// Cells claimed by settled pieces.
    ground: Ground,
    physics: Physics,
    /// Ticks simulated so far.
    ticks: u64,
}

impl Simulation {
    /// Start a simulation with nothing settled.
    pub fn new(pieces: Vec<Piece>, physics: Physics) -> Self {
        Self {
            pieces,
            ground: Ground::new(),
            physics,
            ticks: 0,
        }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn ground(&self) -> &Ground {
        &self.ground
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Number of pieces that have come to rest.
    pub fn settled(&self) -> usize {
        self.pieces.iter().filter(|p| p.stopped).count()
    }

    /// Advance every moving piece once and draw the resulting frame.
    ///
    /// A piece that settles during this tick is drawn at the cell it
    /// settled into, but keeps its last in-flight position; from the next
    /// tick on it is drawn from that position.
    pub fn step(&mut self) -> Tick {
        let mut frame = Grid::new();
        let mut all_stopped = true;

        for piece in &mut self.pieces {
            if piece.stopped {
                let (x, y) = piece.cell();
                frame.set(x, y, piece.glyph);
                continue;
            }

            piece.vy += self.physics.gravity;

            let mut new_x = piece.x + piece.vx;
            let new_y = piece.y + piece.vy;

            let wall_hit = new_x.floor() < 0.0 || new_x.floor() >= WIDTH as f64;
            if wall_hit {
                piece.vx = -piece.vx;
                new_x = piece.x + piece.vx;
            }

            let x = new_x.floor() as i32;
            let y = new_y.floor() as i32;

            if y >= HEIGHT as i32 - 1 || self.ground.is_set(x, y + 1) {
                piece.stopped = true;
                if self.ground.mark(x, y) {
                    frame.set(x, y, piece.glyph);
                }
            } else {
                frame.set(x, y, piece.glyph);
                piece.x = new_x;
                piece.y = new_y;
                all_stopped = false;
            }
        }

        self.ticks += 1;
        Tick { frame, all_stopped }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim(pieces: &[Piece]) -> Simulation {
        Simulation::new(pieces.to_vec(), Physics::default())
    }

    #[test]
    fn test_free_fall() {
        let mut sim = sim(&[Piece::new(10.0, 5.0, 0.0, 0.0, 'o')]);

        for n in 1..=12u32 {
            let tick = sim.step();
            assert!(!tick.all_stopped, "stopped early at tick {n}");
            let expected = 5.0 + 0.1 * (n * (n + 1)) as f64;
            assert!((sim.pieces()[0].y - expected).abs() < 1e-9);
            assert_eq!(sim.pieces()[0].x, 10.0);
        }

        // Next candidate row is 23, the floor.
        let tick = sim.step();
        let piece = sim.pieces()[0];
        assert!(tick.all_stopped);
        assert!(piece.stopped);
        assert!(sim.ground().is_set(10, 23));
        assert_eq!(tick.frame.get(10, 23), Some('o'));
        assert!((piece.y - 20.6).abs() < 1e-9);
        assert_eq!(sim.ticks(), 13);
    }

    #[test]
    fn test_settled_piece_redraws_from_last_position() {
        let mut sim = sim(&[Piece::new(10.0, 5.0, 0.0, 0.0, 'o')]);
        while !sim.step().all_stopped {}

        let tick = sim.step();
        assert!(tick.all_stopped);
        assert_eq!(tick.frame.get(10, 20), Some('o'));
        assert_eq!(tick.frame.get(10, 23), Some(' '));
        assert!(sim.ground().is_set(10, 23));
    }

    #[test]
    fn test_left_wall_bounce() {
        let mut sim = sim(&[Piece::new(1.0, 12.0, -2.0, 0.0, 'o')]);
        let tick = sim.step();
        let piece = sim.pieces()[0];

        assert_eq!(piece.vx, 2.0);
        assert_eq!(piece.x, 3.0);
        assert!((piece.y - 12.2).abs() < 1e-12);
        assert!((piece.vy - 0.2).abs() < 1e-12);
        assert_eq!(tick.frame.get(3, 12), Some('o'));
    }

    #[test]
    fn test_right_wall_bounce() {
        let mut sim = sim(&[Piece::new(79.0, 3.0, 1.5, 0.0, 'o')]);
        sim.step();
        let piece = sim.pieces()[0];
        assert_eq!(piece.vx, -1.5);
        assert_eq!(piece.x, 77.5);
    }

    #[test]
    fn test_pile_stacks_upward() {
        let mut sim = sim(&[
            Piece::new(5.0, 22.0, 0.0, 0.0, 'a'),
            Piece::new(5.0, 21.0, 0.0, 0.0, 'b'),
        ]);

        assert!(!sim.step().all_stopped);
        assert!(!sim.step().all_stopped);
        assert_eq!(sim.ground().count(), 0);

        let tick = sim.step();
        assert!(tick.all_stopped);
        assert!(sim.ground().is_set(5, 23));
        assert!(sim.ground().is_set(5, 22));
        assert_eq!(tick.frame.get(5, 23), Some('a'));
        assert_eq!(tick.frame.get(5, 22), Some('b'));
        assert_eq!(sim.settled(), 2);
    }

    #[test]
    fn test_piece_above_screen_is_not_drawn() {
        let mut sim = sim(&[Piece::new(10.0, -5.0, 0.0, 0.0, 'o')]);
        let tick = sim.step();
        assert!(!tick.all_stopped);
        assert_eq!(tick.frame.cells().count(), 0);
        assert!(sim.pieces()[0].y < 0.0);
    }

    #[test]
    fn test_later_pieces_draw_on_top() {
        let mut sim = sim(&[
            Piece::new(10.0, 5.0, 0.0, 0.0, 'a'),
            Piece::new(10.0, 5.0, 0.0, 0.0, 'b'),
        ]);
        let tick = sim.step();
        assert_eq!(tick.frame.get(10, 5), Some('b'));
    }

    #[test]
    fn test_wild_velocity_does_not_panic() {
        let mut sim = sim(&[Piece::new(1.0, 12.0, -200.0, 0.0, 'o')]);
        sim.step();
        assert_eq!(sim.pieces()[0].x, 201.0);
        for _ in 0..100 {
            if sim.step().all_stopped {
                break;
            }
        }
        assert!(sim.pieces()[0].stopped);
    }

    #[test]
    fn test_empty_simulation_stops_at_once() {
        let mut sim = sim(&[]);
        let tick = sim.step();
        assert!(tick.all_stopped);
        assert_eq!(tick.frame, Grid::new());
    }
}
