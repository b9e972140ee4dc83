//! Session controller: board history and time travel.

use super::action::Move;
use super::position::Position;
use super::rules::{self, Evaluation};
use super::types::{Board, GameStatus};
use tracing::{debug, info, instrument, warn};

/// One entry in the move list offered to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveLabel {
    /// History index this entry jumps to.
    pub index: usize,
    /// Whether this entry is the board on display.
    pub is_current: bool,
}

impl MoveLabel {
    /// Display text for the move list.
    pub fn text(&self) -> String {
        if self.index == 0 {
            "Game start".to_string()
        } else {
            format!("Move #{}", self.index)
        }
    }
}

/// A game in play: every board reached so far, plus a pointer to the
/// one on display.
///
/// The first history entry is always the empty board, and each later
/// entry is its predecessor with one move applied. Playing from a past
/// entry discards the abandoned future before appending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    history: Vec<Board>,
    current: usize,
}

impl Game {
    /// Creates a new game with an empty board.
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current: 0,
        }
    }

    /// Plays the current player's mark at the given position.
    ///
    /// The player is derived from the displayed history index, never
    /// passed in. Illegal placements (occupied square, decided game)
    /// leave the session untouched and are not surfaced to the user.
    #[instrument(skip(self))]
    pub fn play_at(&mut self, pos: Position) {
        let mov = Move::new(rules::whose_turn(self.current), pos);

        match rules::apply(&self.history[self.current], mov) {
            Ok(board) => {
                self.history.truncate(self.current + 1);
                self.history.push(board);
                self.current = self.history.len() - 1;
                info!(%mov, move_index = self.current, "Move played");
            }
            Err(e) => {
                debug!(%mov, error = %e, "Move ignored");
            }
        }
    }

    /// Shows the board at the given history index.
    ///
    /// The shell only offers indices it got from [`Game::move_labels`],
    /// so an out-of-range index is a caller bug; it is clamped to the
    /// latest entry rather than tearing down the terminal.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_index: usize) {
        let last = self.history.len() - 1;
        if move_index > last {
            warn!(move_index, last, "Jump target out of range, clamping");
        }
        self.current = move_index.min(last);
        debug!(current = self.current, "Jumped to move");
    }

    /// Forgets the session and returns to an empty board.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(moves = self.history.len() - 1, "Restarting game");
        self.history = vec![Board::new()];
        self.current = 0;
    }

    /// The board on display.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current]
    }

    /// History index of the board on display.
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// Every board reached so far, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Display status of the board on show.
    ///
    /// Recomputed on every call; jumping into the past of a decided
    /// game reads as undecided again.
    pub fn status(&self) -> GameStatus {
        match rules::evaluate(self.current_board()) {
            Evaluation::Won { winner, .. } => GameStatus::Won(winner),
            Evaluation::Draw => GameStatus::Draw,
            Evaluation::InProgress => GameStatus::NextToPlay(rules::whose_turn(self.current)),
        }
    }

    /// Move-list entries for the shell, oldest first.
    pub fn move_labels(&self) -> Vec<MoveLabel> {
        (0..self.history.len())
            .map(|index| MoveLabel {
                index,
                is_current: index == self.current,
            })
            .collect()
    }

    /// The winning triple on the displayed board, if it is won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::evaluate(self.current_board()).line()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
