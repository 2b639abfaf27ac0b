//! Ship classes from the fleet manifest and ships laid out on a board.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::BoardError;
use crate::config::BOARD_SIZE;
use crate::coord::Coord;

pub(crate) type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One manifest entry: ships of `length` cells, `count` of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    length: usize,
    count: usize,
}

impl ShipClass {
    pub const fn new(length: usize, count: usize) -> Self {
        Self { length, count }
    }

    pub const fn length(&self) -> usize {
        self.length
    }

    pub const fn count(&self) -> usize {
        self.count
    }
}

/// A ship occupying a straight run of cells starting at `origin`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    origin: Coord,
    orientation: Orientation,
    mask: BB,
}

impl Ship {
    /// Lay a ship of `length` cells from `origin`, extending right when
    /// horizontal and down when vertical.
    pub fn new(length: usize, origin: Coord, orientation: Orientation) -> Result<Self, BoardError> {
        if length == 0 {
            return Err(BoardError::EmptyShip);
        }
        let size = BOARD_SIZE as usize;
        let fits = match orientation {
            Orientation::Horizontal => origin.row < size && origin.col + length <= size,
            Orientation::Vertical => origin.col < size && origin.row + length <= size,
        };
        if !fits {
            return Err(BoardError::ShipOutOfBounds);
        }

        let mut mask = BB::new();
        for cell in run(origin, orientation, length) {
            mask.insert(cell.row, cell.col)?;
        }
        Ok(Ship {
            length,
            origin,
            orientation,
            mask,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells covered by the ship, starting from the origin.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        run(self.origin, self.orientation, self.length)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.mask.contains(coord.row, coord.col)
    }

    /// Occupancy of the ship as a cell set.
    pub fn mask(&self) -> BB {
        self.mask
    }
}

fn run(origin: Coord, orientation: Orientation, length: usize) -> impl Iterator<Item = Coord> {
    (0..length).map(move |i| match orientation {
        Orientation::Horizontal => Coord::new(origin.row, origin.col + i),
        Orientation::Vertical => Coord::new(origin.row + i, origin.col),
    })
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ length: {}, origin: {}, orientation: {:?} }}",
            self.length, self.origin, self.orientation,
        )
    }
}
