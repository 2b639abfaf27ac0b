use rand::Rng;

use crate::{
    ai::TargetingAi,
    board::Board,
    common::{GameError, InvalidShot, Outcome},
    coord::{Coord, Cursor, Direction},
    fleet::place_fleet,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameState {
    InProgress,
    PlayerWon,
    ComputerWon,
}

/// One of the two fleets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Side {
    Player,
    Computer,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameState::InProgress)
    }

    /// The side whose fleet was destroyed, once the game is decided.
    pub fn loser(&self) -> Option<Side> {
        match self {
            GameState::InProgress => None,
            GameState::PlayerWon => Some(Side::Computer),
            GameState::ComputerWon => Some(Side::Player),
        }
    }
}

/// A resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Shot {
    pub coord: Coord,
    pub outcome: Outcome,
}

/// The player's shot and, unless it ended the game, the computer's reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Round {
    pub player: Shot,
    pub computer: Option<Shot>,
    pub state: GameState,
}

/// Result of asking the engine to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireResult {
    /// Nothing happened and no turn was used.
    Rejected(InvalidShot),
    Resolved(Round),
}

/// Discrete requests from the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    MoveCursor(Direction),
    FireAtCursor,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentResult {
    CursorMoved(Coord),
    Fired(FireResult),
    Quit,
}

/// Owns both fleets, the computer's targeting state and the player's cursor.
/// All mutation of game state goes through this type; renderers only read.
#[derive(Debug, Clone)]
pub struct GameEngine {
    player_board: Board,
    computer_board: Board,
    ai: TargetingAi,
    cursor: Cursor,
    state: GameState,
    rounds: usize,
}

impl GameEngine {
    /// Start a game with both standard fleets placed at random.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, GameError> {
        let player_board = place_fleet(rng)?;
        let computer_board = place_fleet(rng)?;
        Ok(Self::from_boards(player_board, computer_board))
    }

    /// Start a game from prepared boards.
    pub fn from_boards(player_board: Board, computer_board: Board) -> Self {
        Self {
            player_board,
            computer_board,
            ai: TargetingAi::new(),
            cursor: Cursor::new(),
            state: GameState::InProgress,
            rounds: 0,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn cursor(&self) -> Coord {
        self.cursor.position()
    }

    /// The human's fleet, fired at by the computer.
    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    /// The computer's fleet, fired at by the human.
    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    pub fn ai(&self) -> &TargetingAi {
        &self.ai
    }

    /// Completed rounds, counting a final winning player shot as a round.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Handle one input intent.
    pub fn apply_intent<R: Rng + ?Sized>(
        &mut self,
        intent: Intent,
        rng: &mut R,
    ) -> Result<IntentResult, GameError> {
        match intent {
            Intent::MoveCursor(dir) => Ok(IntentResult::CursorMoved(self.cursor.step(dir))),
            Intent::FireAtCursor => {
                let target = self.cursor.position();
                self.fire_player_shot(target, rng).map(IntentResult::Fired)
            }
            Intent::Quit => {
                log::info!("player quit after {} rounds", self.rounds);
                Ok(IntentResult::Quit)
            }
        }
    }

    /// Play a round: the player's shot at `coord`, then the computer's reply.
    pub fn fire_player_shot<R: Rng + ?Sized>(
        &mut self,
        coord: Coord,
        rng: &mut R,
    ) -> Result<FireResult, GameError> {
        self.fire_player_shot_paced(coord, rng, |_| {})
    }

    /// Like [`GameEngine::fire_player_shot`], calling `on_player_resolved` after
    /// the player's shot has landed and before the computer replies. The hook
    /// is not called for rejected shots or a shot that wins the game.
    pub fn fire_player_shot_paced<R, F>(
        &mut self,
        coord: Coord,
        rng: &mut R,
        on_player_resolved: F,
    ) -> Result<FireResult, GameError>
    where
        R: Rng + ?Sized,
        F: FnOnce(&GameEngine),
    {
        if self.state.is_over() {
            return Ok(FireResult::Rejected(InvalidShot::GameOver));
        }
        if !coord.in_bounds() {
            return Ok(FireResult::Rejected(InvalidShot::OutOfBounds(coord)));
        }
        let outcome = self.computer_board.apply_shot(coord)?;
        if !outcome.is_resolved() {
            return Ok(FireResult::Rejected(InvalidShot::AlreadyResolved(coord)));
        }
        log::debug!("player fires at {}: {:?}", coord, outcome);
        self.rounds += 1;
        let player = Shot { coord, outcome };

        if self.computer_board.is_all_sunk() {
            self.state = GameState::PlayerWon;
            log::info!("player sank the computer fleet in {} rounds", self.rounds);
            return Ok(FireResult::Resolved(Round {
                player,
                computer: None,
                state: self.state,
            }));
        }

        on_player_resolved(&*self);

        let computer = self.computer_turn(rng)?;
        Ok(FireResult::Resolved(Round {
            player,
            computer: Some(computer),
            state: self.state,
        }))
    }

    fn computer_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Shot, GameError> {
        let coord = self.ai.next_move(rng)?;
        let outcome = self.player_board.apply_shot(coord)?;
        if !outcome.is_resolved() {
            log::error!("computer re-fired at {}", coord);
            return Err(GameError::AiRepeatedShot(coord));
        }
        self.ai.record(coord, outcome)?;
        log::debug!("computer fires at {}: {:?}", coord, outcome);

        if self.player_board.is_all_sunk() {
            self.state = GameState::ComputerWon;
            log::info!("computer sank the player fleet in {} rounds", self.rounds);
        }
        Ok(Shot { coord, outcome })
    }
}
