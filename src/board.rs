//! One side's fleet and the record of shots it has received.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Outcome};
use crate::coord::Coord;
use crate::ship::{Ship, BB};

/// What a renderer should draw for a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    /// Unshot water, or an unshot cell whose contents are hidden.
    Water,
    /// Unshot ship segment on a revealed board.
    Ship,
    Hit,
    Miss,
}

/// Ship layout plus shot overlay. Ships are fixed once the board exists;
/// only the overlay changes, and a shot cell is never cleared.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    ships: Vec<Ship>,
    ship_map: BB,
    hits: BB,
    misses: BB,
}

impl Board {
    /// Board with no ships and no shots.
    pub fn empty() -> Self {
        Board {
            ships: Vec::new(),
            ship_map: BB::new(),
            hits: BB::new(),
            misses: BB::new(),
        }
    }

    /// Build a board from explicit ships, rejecting overlaps.
    pub fn from_ships<I>(ships: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = Ship>,
    {
        let mut board = Board::empty();
        for ship in ships {
            board.add_ship(ship)?;
        }
        Ok(board)
    }

    /// Add a ship if none of its cells is taken.
    pub(crate) fn add_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        if let Some((r, c)) = (self.ship_map & ship.mask()).iter().next() {
            return Err(BoardError::ShipOverlaps(Coord::new(r, c)));
        }
        self.ship_map |= ship.mask();
        self.ships.push(ship);
        Ok(())
    }

    /// Whether `ship` could be added without touching an existing ship.
    pub(crate) fn is_clear(&self, ship: &Ship) -> bool {
        (self.ship_map & ship.mask()).is_empty()
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Occupancy of all ships.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    pub fn ship_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.ship_map.iter().map(Coord::from)
    }

    pub fn hits(&self) -> BB {
        self.hits
    }

    pub fn misses(&self) -> BB {
        self.misses
    }

    /// Cells fired at so far, hit or miss.
    pub fn shots(&self) -> BB {
        self.hits | self.misses
    }

    pub fn shot_count(&self) -> usize {
        self.shots().count_ones()
    }

    /// Outcome recorded at `coord`, `None` if the cell is unshot or off the board.
    pub fn outcome_at(&self, coord: Coord) -> Option<Outcome> {
        if self.hits.contains(coord.row, coord.col) {
            Some(Outcome::Hit)
        } else if self.misses.contains(coord.row, coord.col) {
            Some(Outcome::Miss)
        } else {
            None
        }
    }

    /// Fire at `coord`. A repeated shot reports `AlreadyShot` and changes nothing.
    pub fn apply_shot(&mut self, coord: Coord) -> Result<Outcome, BoardError> {
        if self.shots().get(coord.row, coord.col)? {
            return Ok(Outcome::AlreadyShot);
        }
        if self.ship_map.contains(coord.row, coord.col) {
            self.hits.insert(coord.row, coord.col)?;
            Ok(Outcome::Hit)
        } else {
            self.misses.insert(coord.row, coord.col)?;
            Ok(Outcome::Miss)
        }
    }

    /// `true` once every ship cell has been hit.
    pub fn is_all_sunk(&self) -> bool {
        (self.ship_map & !self.hits).is_empty()
    }

    /// Number of ships with at least one cell not yet hit.
    pub fn ships_afloat(&self) -> usize {
        self.ships
            .iter()
            .filter(|s| !(s.mask() & !self.hits).is_empty())
            .count()
    }

    /// Display symbol for `coord`. Ship segments are only shown when `reveal` is set.
    pub fn cell_view(&self, coord: Coord, reveal: bool) -> CellView {
        match self.outcome_at(coord) {
            Some(Outcome::Hit) => CellView::Hit,
            Some(_) => CellView::Miss,
            None if reveal && self.ship_map.contains(coord.row, coord.col) => CellView::Ship,
            None => CellView::Water,
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  hits: {:?},\n  misses: {:?},\n  ships: {:?}\n}}",
            self.ship_map, self.hits, self.misses, self.ships
        )
    }
}
