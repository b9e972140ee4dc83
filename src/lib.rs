//! Two-player tic-tac-toe with a rewindable move history.
//!
//! The crate splits into a pure rules/history core and a terminal
//! shell that owns no game logic:
//!
//! - **Rules**: [`evaluate`], [`whose_turn`], and [`apply`] are pure
//!   functions over [`Board`] values.
//! - **Controller**: [`Game`] owns the board history and the displayed
//!   index, mediating every state transition (play, time travel,
//!   restart).
//! - **Shell**: [`tui`] renders the board, status line, and move list,
//!   and maps key events onto controller calls.
//!
//! # Example
//!
//! ```
//! use tictactoe_rewind::{Game, GameStatus, Player, Position};
//!
//! let mut game = Game::new();
//! game.play_at(Position::Center);
//! assert_eq!(game.status(), GameStatus::NextToPlay(Player::O));
//!
//! // Time travel: jump back to the empty board and branch.
//! game.jump_to(0);
//! game.play_at(Position::TopLeft);
//! assert_eq!(game.history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod game;
pub mod tui;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - Game core
pub use game::{
    Board, Evaluation, Game, GameStatus, LINES, Move, MoveError, MoveLabel, Player, Position,
    Square, apply, evaluate, whose_turn,
};
