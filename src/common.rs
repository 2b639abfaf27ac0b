//! Shot outcomes and the error types shared by the game core.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::coord::Coord;

/// Result of firing at a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Outcome {
    /// The cell holds a ship segment.
    Hit,
    /// Open water.
    Miss,
    /// The cell was fired at before; nothing changed.
    AlreadyShot,
}

impl Outcome {
    /// `true` for `Hit` and `Miss`, the outcomes that consume a turn.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Outcome::AlreadyShot)
    }
}

/// Why a player shot was ignored. These are never fatal and never cost a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidShot {
    OutOfBounds(Coord),
    AlreadyResolved(Coord),
    /// The game has already been decided.
    GameOver,
}

impl fmt::Display for InvalidShot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidShot::OutOfBounds(c) => {
                write!(f, "cell ({}, {}) is off the board", c.row, c.col)
            }
            InvalidShot::AlreadyResolved(c) => write!(f, "{} was already fired at", c),
            InvalidShot::GameOver => write!(f, "the game is over"),
        }
    }
}

/// Errors raised while building a board from explicit ships.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    BitBoardError(BitBoardError),
    /// Part of a ship falls off the board.
    ShipOutOfBounds,
    /// Two ships claim the same cell.
    ShipOverlaps(Coord),
    /// A ship of length zero.
    EmptyShip,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps(c) => write!(f, "Ship placement overlaps another ship at {}", c),
            BoardError::EmptyShip => write!(f, "Ship has no cells"),
        }
    }
}

/// Why a fleet could not be laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementFailure {
    /// A manifest entry asks for ships with no cells.
    ZeroLength { count: usize },
    /// A ship is longer than the board is wide.
    ShipTooLong { length: usize, board_size: usize },
    /// The manifest needs more cells than the board has.
    TooManyCells { needed: usize, available: usize },
    /// Random placement used its whole draw budget.
    AttemptsExhausted { attempts: usize, placed: usize },
}

/// Fatal conditions: misconfiguration or a broken engine invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    PlacementInfeasible(PlacementFailure),
    /// The targeting AI was asked to move with every cell already tried.
    AiExhausted,
    /// The targeting AI offered a cell the computer had already fired at.
    AiRepeatedShot(Coord),
    Board(BoardError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        GameError::Board(BoardError::BitBoardError(err))
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::PlacementInfeasible(PlacementFailure::ZeroLength { count }) => {
                write!(f, "fleet placement infeasible: {} ships of length 0 requested", count)
            }
            GameError::PlacementInfeasible(PlacementFailure::ShipTooLong { length, board_size }) => {
                write!(
                    f,
                    "fleet placement infeasible: a ship of length {} does not fit a {}x{} board",
                    length, board_size, board_size
                )
            }
            GameError::PlacementInfeasible(PlacementFailure::TooManyCells { needed, available }) => {
                write!(
                    f,
                    "fleet placement infeasible: {} ship cells needed, board has {}",
                    needed, available
                )
            }
            GameError::PlacementInfeasible(PlacementFailure::AttemptsExhausted { attempts, placed }) => {
                write!(
                    f,
                    "fleet placement infeasible: gave up after {} attempts with {} ships placed",
                    attempts, placed
                )
            }
            GameError::AiExhausted => {
                write!(f, "targeting AI has no untried cells left; win detection ran too late")
            }
            GameError::AiRepeatedShot(c) => write!(f, "targeting AI repeated a shot at {}", c),
            GameError::Board(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidShot {}
#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {}
