//! Fixed-size glyph grid and the settled-ground map.

/// Grid width in terminal columns.
pub const WIDTH: usize = 80;
/// Grid height in terminal rows.
pub const HEIGHT: usize = 24;
/// Column of the clock center.
pub const CENTER_X: i32 = (WIDTH / 2) as i32;
/// Row of the clock center.
pub const CENTER_Y: i32 = (HEIGHT / 2) as i32;
/// Glyph of an empty cell.
pub const BLANK: char = ' ';

/// Whether `(x, y)` addresses a cell inside the grid.
pub fn in_bounds(x: i32, y: i32) -> bool {
    x >= 0 && (x as usize) < WIDTH && y >= 0 && (y as usize) < HEIGHT
}

fn index(x: i32, y: i32) -> Option<usize> {
    in_bounds(x, y).then(|| y as usize * WIDTH + x as usize)
}

/// One frame worth of glyphs, `WIDTH` x `HEIGHT`, origin top-left.
///
/// Coordinates are signed so callers can hand in raw projected positions;
/// anything outside the grid is ignored on write and reads as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<char>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create a space-filled grid.
    pub fn new() -> Self {
        Self {
            cells: vec![BLANK; WIDTH * HEIGHT],
        }
    }

    /// Reset every cell to a space.
    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    /// Glyph at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        index(x, y).map(|i| self.cells[i])
    }

    /// Write `glyph` at `(x, y)`. Returns `false` when the cell is out of
    /// bounds and nothing was written.
    pub fn set(&mut self, x: i32, y: i32, glyph: char) -> bool {
        match index(x, y) {
            Some(i) => {
                self.cells[i] = glyph;
                true
            }
            None => false,
        }
    }

    /// Rows top to bottom, each exactly `WIDTH` glyphs long.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.chunks(WIDTH).map(|row| row.iter().collect())
    }

    /// Non-blank cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, char)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, glyph)| **glyph != BLANK)
            .map(|(i, glyph)| ((i % WIDTH) as i32, (i / WIDTH) as i32, *glyph))
    }

    /// Number of cells holding `glyph`.
    pub fn count(&self, glyph: char) -> usize {
        self.cells.iter().filter(|c| **c == glyph).count()
    }
}

/// Cells occupied by settled debris.
///
/// A cell once marked stays marked for the lifetime of the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ground {
    cells: Vec<bool>,
}

impl Default for Ground {
    fn default() -> Self {
        Self::new()
    }
}

impl Ground {
    /// Create an empty ground map.
    pub fn new() -> Self {
        Self {
            cells: vec![false; WIDTH * HEIGHT],
        }
    }

    /// Mark `(x, y)` as settled. Out-of-bounds cells are ignored.
    pub fn mark(&mut self, x: i32, y: i32) -> bool {
        match index(x, y) {
            Some(i) => {
                self.cells[i] = true;
                true
            }
            None => false,
        }
    }

    /// Whether `(x, y)` is settled. Out-of-bounds cells never are.
    pub fn is_set(&self, x: i32, y: i32) -> bool {
        index(x, y).is_some_and(|i| self.cells[i])
    }

    /// Number of settled cells.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_blank() {
        let grid = Grid::new();
        assert_eq!(grid.count(BLANK), WIDTH * HEIGHT);
        assert_eq!(grid.cells().count(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new();
        assert!(grid.set(3, 4, 'x'));
        assert_eq!(grid.get(3, 4), Some('x'));
        assert_eq!(grid.cells().collect::<Vec<_>>(), vec![(3, 4, 'x')]);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut grid = Grid::new();
        assert!(!grid.set(-1, 0, 'x'));
        assert!(!grid.set(WIDTH as i32, 0, 'x'));
        assert!(!grid.set(0, HEIGHT as i32, 'x'));
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid, Grid::new());
    }

    #[test]
    fn test_rows_shape() {
        let mut grid = Grid::new();
        grid.set(0, 0, 'a');
        grid.set(79, 23, 'z');
        let rows: Vec<String> = grid.rows().collect();
        assert_eq!(rows.len(), HEIGHT);
        assert!(rows.iter().all(|r| r.chars().count() == WIDTH));
        assert!(rows[0].starts_with('a'));
        assert!(rows[23].ends_with('z'));
    }

    #[test]
    fn test_clear() {
        let mut grid = Grid::new();
        grid.set(10, 10, '*');
        grid.clear();
        assert_eq!(grid, Grid::new());
    }

    #[test]
    fn test_ground_marks() {
        let mut ground = Ground::new();
        assert!(!ground.is_set(5, 23));
        assert!(ground.mark(5, 23));
        assert!(ground.is_set(5, 23));
        assert!(!ground.mark(5, 24));
        assert!(!ground.is_set(-1, 23));
        assert!(!ground.is_set(80, 23));
        assert_eq!(ground.count(), 1);
    }

    #[test]
    fn test_center() {
        assert_eq!((CENTER_X, CENTER_Y), (40, 12));
    }
}
