//! Random fleet layout by rejection sampling.

use rand::Rng;

use crate::board::Board;
use crate::common::{GameError, PlacementFailure};
use crate::config::{manifest_cells, BOARD_SIZE, FLEET, PLACEMENT_ATTEMPT_LIMIT};
use crate::coord::Coord;
use crate::ship::{Orientation, Ship, ShipClass};

/// Lays out every ship of a manifest on a fresh board.
///
/// Each ship draws an orientation and an in-bounds anchor uniformly at random
/// and is redrawn while it would overlap an earlier ship. Every draw counts
/// against a single budget for the whole fleet, so an unsatisfiable manifest
/// fails with [`GameError::PlacementInfeasible`] instead of spinning.
#[derive(Debug, Clone, Copy)]
pub struct FleetPlacer<'a> {
    manifest: &'a [ShipClass],
    attempt_limit: usize,
}

impl Default for FleetPlacer<'static> {
    fn default() -> Self {
        FleetPlacer::new(&FLEET)
    }
}

impl<'a> FleetPlacer<'a> {
    pub fn new(manifest: &'a [ShipClass]) -> Self {
        Self {
            manifest,
            attempt_limit: PLACEMENT_ATTEMPT_LIMIT,
        }
    }

    /// Override the total number of random draws allowed.
    pub fn with_attempt_limit(mut self, attempt_limit: usize) -> Self {
        self.attempt_limit = attempt_limit;
        self
    }

    pub fn manifest(&self) -> &'a [ShipClass] {
        self.manifest
    }

    /// Produce a board holding the whole manifest with no shots recorded.
    pub fn place<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Board, GameError> {
        self.check_feasible()?;

        let size = BOARD_SIZE as usize;
        let mut board = Board::empty();
        let mut attempts = 0usize;
        let mut placed = 0usize;

        for class in self.manifest {
            let len = class.length();
            for _ in 0..class.count() {
                let ship = loop {
                    if attempts >= self.attempt_limit {
                        log::error!(
                            "fleet placement gave up after {} attempts ({} ships placed)",
                            attempts,
                            placed
                        );
                        return Err(GameError::PlacementInfeasible(
                            PlacementFailure::AttemptsExhausted { attempts, placed },
                        ));
                    }
                    attempts += 1;

                    let orientation = if rng.random() {
                        Orientation::Horizontal
                    } else {
                        Orientation::Vertical
                    };
                    let (max_r, max_c) = match orientation {
                        Orientation::Horizontal => (size - 1, size - len),
                        Orientation::Vertical => (size - len, size - 1),
                    };
                    let origin = Coord::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c));
                    let candidate = Ship::new(len, origin, orientation)?;
                    if board.is_clear(&candidate) {
                        break candidate;
                    }
                };
                board.add_ship(ship)?;
                placed += 1;
            }
        }

        if attempts > self.attempt_limit / 10 {
            log::warn!("fleet placement needed {} draws for {} ships", attempts, placed);
        }
        log::info!("placed {} ships in {} draws", placed, attempts);
        Ok(board)
    }

    fn check_feasible(&self) -> Result<(), GameError> {
        let size = BOARD_SIZE as usize;
        if let Some(class) = self.manifest.iter().find(|c| c.count() > 0 && c.length() == 0) {
            log::error!("manifest asks for {} ships of length 0", class.count());
            return Err(GameError::PlacementInfeasible(PlacementFailure::ZeroLength {
                count: class.count(),
            }));
        }
        if let Some(class) = self
            .manifest
            .iter()
            .find(|c| c.count() > 0 && c.length() > size)
        {
            log::error!("ship of length {} cannot be placed on a {}x{} board", class.length(), size, size);
            return Err(GameError::PlacementInfeasible(PlacementFailure::ShipTooLong {
                length: class.length(),
                board_size: size,
            }));
        }
        let needed = manifest_cells(self.manifest);
        let available = size * size;
        if needed > available {
            log::error!("fleet needs {} cells, board has {}", needed, available);
            return Err(GameError::PlacementInfeasible(PlacementFailure::TooManyCells {
                needed,
                available,
            }));
        }
        Ok(())
    }
}

/// Place the standard fleet.
pub fn place_fleet<R: Rng + ?Sized>(rng: &mut R) -> Result<Board, GameError> {
    FleetPlacer::default().place(rng)
}
