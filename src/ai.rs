// Hunt/target search for the computer opponent.
//
// Hunt mode samples untried checkerboard-parity cells, then any untried cell
// once parity is exhausted. A hit queues its untried orthogonal neighbours and
// the queue is drained first-in first-out before hunting resumes.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;

use crate::common::{GameError, Outcome};
use crate::coord::Coord;
use crate::ship::BB;

/// Which search phase produced (or will produce) the next move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiMode {
    Hunt,
    Target,
}

/// Computer targeting state for one game.
#[derive(Debug, Clone, Default)]
pub struct TargetingAi {
    tried: BB,
    pending: VecDeque<Coord>,
}

impl TargetingAi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cells already fired at.
    pub fn tried(&self) -> BB {
        self.tried
    }

    pub fn has_tried(&self, coord: Coord) -> bool {
        self.tried.contains(coord.row, coord.col)
    }

    /// Queued target-mode candidates in fire order.
    pub fn pending(&self) -> impl Iterator<Item = Coord> + '_ {
        self.pending.iter().copied()
    }

    /// Phase the next call to [`TargetingAi::next_move`] will start in.
    pub fn mode(&self) -> AiMode {
        if self.pending.is_empty() {
            AiMode::Hunt
        } else {
            AiMode::Target
        }
    }

    /// Pick the next cell to fire at. The caller must report the result with
    /// [`TargetingAi::record`] before asking again.
    pub fn next_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Coord, GameError> {
        while let Some(coord) = self.pending.pop_front() {
            if !self.has_tried(coord) {
                log::debug!("ai target: {}", coord);
                return Ok(coord);
            }
        }
        let coord = self.hunt(rng)?;
        log::debug!("ai hunt: {}", coord);
        Ok(coord)
    }

    /// Untried cells a hunt would choose from: parity cells while any remain,
    /// otherwise every untried cell.
    pub fn hunt_candidates(&self) -> Vec<Coord> {
        let parity: Vec<Coord> = self.untried().filter(Coord::is_parity).collect();
        if parity.is_empty() {
            self.untried().collect()
        } else {
            parity
        }
    }

    fn untried(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(move |c| !self.has_tried(*c))
    }

    fn hunt<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Coord, GameError> {
        let candidates = self.hunt_candidates();
        if candidates.is_empty() {
            log::error!("targeting AI asked to move with the whole board tried");
            return Err(GameError::AiExhausted);
        }
        Ok(candidates[rng.random_range(0..candidates.len())])
    }

    /// Record the outcome of a shot at `coord`. Hits flood the untried,
    /// not-yet-queued neighbours onto the back of the queue.
    pub fn record(&mut self, coord: Coord, outcome: Outcome) -> Result<(), GameError> {
        self.tried.insert(coord.row, coord.col)?;
        if outcome == Outcome::Hit {
            for n in coord.neighbors() {
                if !self.has_tried(n) && !self.pending.contains(&n) {
                    self.pending.push_back(n);
                }
            }
        }
        Ok(())
    }
}
