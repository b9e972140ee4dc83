//! Pure rules: turn derivation, board evaluation, move application.
//!
//! Nothing in this module holds state. Every function is a total
//! mapping over board values, so the controller and the shell can call
//! them on every event without coordination.

use super::action::{Move, MoveError};
use super::position::Position;
use super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
///
/// Checked in this order. A board carrying more than one complete line
/// resolves to the first match, so the order is part of the contract.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Outcome of evaluating a single board.
///
/// Always recomputed from the board on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Evaluation {
    /// No complete line and at least one empty square.
    InProgress,
    /// Board is full with no complete line.
    Draw,
    /// A line is fully occupied by one player.
    Won {
        /// The player holding the line.
        winner: Player,
        /// The completed line, in table order.
        line: [Position; 3],
    },
}

impl Evaluation {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Evaluation::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<[Position; 3]> {
        match self {
            Evaluation::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Player to move at the given history index.
///
/// X opens, so even indices belong to X. Turn is a pure function of
/// position in history; storing it separately could drift from the
/// board contents.
pub fn whose_turn(move_index: usize) -> Player {
    if move_index % 2 == 0 {
        Player::X
    } else {
        Player::O
    }
}

/// Evaluates a board for a win or a draw.
pub fn evaluate(board: &Board) -> Evaluation {
    for line in LINES {
        let [a, b, c] = line;
        if let Square::Occupied(player) = board.get(a)
            && board.get(b) == Square::Occupied(player)
            && board.get(c) == Square::Occupied(player)
        {
            return Evaluation::Won {
                winner: player,
                line,
            };
        }
    }

    if board.is_full() {
        Evaluation::Draw
    } else {
        Evaluation::InProgress
    }
}

/// Applies a move to a board, returning the successor board.
///
/// The input board is untouched; the result differs from it only at
/// the move's position.
///
/// # Errors
///
/// Returns [`MoveError::GameOver`] if the board is already decided and
/// [`MoveError::SquareOccupied`] if the target square is taken.
pub fn apply(board: &Board, mov: Move) -> Result<Board, MoveError> {
    if evaluate(board) != Evaluation::InProgress {
        return Err(MoveError::GameOver);
    }
    if !board.is_empty(mov.position) {
        return Err(MoveError::SquareOccupied(mov.position));
    }

    let mut next = board.clone();
    next.set(mov.position, Square::Occupied(mov.player));
    Ok(next)
}
