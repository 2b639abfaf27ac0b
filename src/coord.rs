//! Grid coordinates, cursor movement and neighbourhoods.

use core::fmt;

use crate::config::BOARD_SIZE;

const SIZE: usize = BOARD_SIZE as usize;

/// A cell on the board, `row` and `col` both in `0..BOARD_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the coordinate lies on the board.
    pub const fn in_bounds(&self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// Checkerboard colour used by hunt-mode search: `(row + col)` even.
    pub const fn is_parity(&self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// Orthogonal in-bounds neighbours, always in the order up, down, left, right.
    pub fn neighbors(&self) -> impl Iterator<Item = Coord> {
        let Coord { row, col } = *self;
        let up = (row > 0).then(|| Coord::new(row - 1, col));
        let down = (row + 1 < SIZE).then(|| Coord::new(row + 1, col));
        let left = (col > 0).then(|| Coord::new(row, col - 1));
        let right = (col + 1 < SIZE).then(|| Coord::new(row, col + 1));
        [up, down, left, right].into_iter().flatten()
    }

    /// Every coordinate of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..SIZE).flat_map(|r| (0..SIZE).map(move |c| Coord::new(r, c)))
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord::new(row, col)
    }
}

impl From<Coord> for (usize, usize) {
    fn from(c: Coord) -> Self {
        (c.row, c.col)
    }
}

impl Default for Coord {
    fn default() -> Self {
        Coord::new(0, 0)
    }
}

/// Row letter followed by the 1-based column, e.g. `A1` or `J10`.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = (b'A' + (self.row % 26) as u8) as char;
        write!(f, "{}{}", row, self.col + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The player's aim on the enemy board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pos: Coord,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Coord {
        self.pos
    }

    /// Move one cell, staying put at the board edge.
    pub fn step(&mut self, dir: Direction) -> Coord {
        let Coord { row, col } = self.pos;
        self.pos = match dir {
            Direction::Up => Coord::new(row.saturating_sub(1), col),
            Direction::Down => Coord::new((row + 1).min(SIZE - 1), col),
            Direction::Left => Coord::new(row, col.saturating_sub(1)),
            Direction::Right => Coord::new(row, (col + 1).min(SIZE - 1)),
        };
        self.pos
    }
}
