//! Shell state and key handling.

use crate::game::{Game, Position};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tracing::debug;

use super::input;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    Board,
    /// Arrow keys travel through the move list.
    Moves,
}

/// Shell state: the game session plus cursor and pane focus.
pub struct App {
    game: Game,
    cursor: Position,
    focus: Focus,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            should_quit: false,
        }
    }

    /// The game session.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Routes one key event to the controller.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        debug!(code = ?key.code, "Key pressed");

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.game.restart(),
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // Digits address squares directly, 1-9 in reading order.
                if let Some(digit) = c.to_digit(10)
                    && digit >= 1
                    && let Some(pos) = Position::from_index(digit as usize - 1)
                {
                    self.game.play_at(pos);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') if self.focus == Focus::Board => {
                self.game.play_at(self.cursor);
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.navigate(key.code);
            }
            KeyCode::Home if self.focus == Focus::Moves => self.game.jump_to(0),
            KeyCode::End if self.focus == Focus::Moves => {
                self.game.jump_to(self.game.history().len() - 1);
            }
            _ => {}
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        };
    }

    fn navigate(&mut self, key: KeyCode) {
        match self.focus {
            Focus::Board => self.cursor = input::move_cursor(self.cursor, key),
            Focus::Moves => match key {
                KeyCode::Up => {
                    let current = self.game.current_move();
                    if current > 0 {
                        self.game.jump_to(current - 1);
                    }
                }
                KeyCode::Down => {
                    let next = self.game.current_move() + 1;
                    if next < self.game.history().len() {
                        self.game.jump_to(next);
                    }
                }
                _ => {}
            },
        }
    }
}
