//! Tests for the session controller and time travel.

use tictactoe_rewind::{Board, Game, GameStatus, Player, Position, Square};

fn play_all(game: &mut Game, positions: &[Position]) {
    for &pos in positions {
        game.play_at(pos);
    }
}

#[test]
fn test_center_opening() {
    let mut game = Game::new();
    game.play_at(Position::Center);

    assert_eq!(
        game.current_board().get(Position::Center),
        Square::Occupied(Player::X)
    );
    for pos in Position::ALL {
        if pos != Position::Center {
            assert_eq!(game.current_board().get(pos), Square::Empty);
        }
    }
    assert_eq!(game.status(), GameStatus::NextToPlay(Player::O));
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_diagonal_win_then_noops() {
    let mut game = Game::new();
    // X: 0, 4, 8 with O: 1, 2 interleaved.
    play_all(
        &mut game,
        &[
            Position::TopLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
            Position::BottomRight,
        ],
    );

    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(
        game.winning_line(),
        Some([Position::TopLeft, Position::Center, Position::BottomRight])
    );

    // Further plays are silently ignored.
    let before = game.clone();
    game.play_at(Position::MiddleLeft);
    assert_eq!(game, before);
}

#[test]
fn test_alternating_fill_without_line_is_draw() {
    let mut game = Game::new();
    // X O X
    // X O O
    // O X X
    play_all(
        &mut game,
        &[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::Center,
            Position::MiddleLeft,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
            Position::BottomRight,
        ],
    );

    assert_eq!(game.history().len(), 10);
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.winning_line(), None);

    let before = game.clone();
    game.play_at(Position::Center);
    assert_eq!(game, before);
}

#[test]
fn test_playing_from_the_past_discards_the_future() {
    let mut game = Game::new();
    game.play_at(Position::TopLeft);
    game.play_at(Position::TopCenter);
    assert_eq!(game.history().len(), 3);

    game.jump_to(0);
    game.play_at(Position::MiddleRight);

    assert_eq!(game.history().len(), 2);
    assert_eq!(game.current_move(), 1);
    // The branch starts over from the empty board, so X moved.
    assert_eq!(
        game.current_board().get(Position::MiddleRight),
        Square::Occupied(Player::X)
    );
    assert_eq!(game.current_board().get(Position::TopLeft), Square::Empty);
    assert_eq!(game.status(), GameStatus::NextToPlay(Player::O));
}

#[test]
fn test_occupied_square_is_ignored() {
    let mut game = Game::new();
    game.play_at(Position::Center);

    let before = game.clone();
    game.play_at(Position::Center);
    assert_eq!(game, before);

    // The ignored move did not consume O's turn.
    game.play_at(Position::TopLeft);
    assert_eq!(
        game.current_board().get(Position::TopLeft),
        Square::Occupied(Player::O)
    );
}

#[test]
fn test_restart_from_anywhere() {
    let mut game = Game::new();
    // X wins the top row.
    play_all(
        &mut game,
        &[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ],
    );
    game.jump_to(2);

    game.restart();

    assert_eq!(game.history().len(), 1);
    assert_eq!(game.current_move(), 0);
    assert_eq!(*game.current_board(), Board::new());
    assert_eq!(game.status(), GameStatus::NextToPlay(Player::X));
}

#[test]
fn test_jump_clamps_out_of_range() {
    let mut game = Game::new();
    game.play_at(Position::Center);

    game.jump_to(99);

    assert_eq!(game.current_move(), 1);
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_jump_rewinds_status() {
    let mut game = Game::new();
    // X wins the top row on move 5.
    play_all(
        &mut game,
        &[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ],
    );
    assert_eq!(game.status(), GameStatus::Won(Player::X));

    game.jump_to(2);
    assert_eq!(game.status(), GameStatus::NextToPlay(Player::X));
    assert_eq!(game.winning_line(), None);

    game.jump_to(5);
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(
        game.winning_line(),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );
}

#[test]
fn test_move_labels_track_current() {
    let mut game = Game::new();
    game.play_at(Position::Center);
    game.play_at(Position::TopLeft);
    game.jump_to(1);

    let labels = game.move_labels();
    assert_eq!(labels.len(), 3);
    assert_eq!(labels[0].text(), "Game start");
    assert_eq!(labels[1].text(), "Move #1");
    assert_eq!(labels[2].text(), "Move #2");
    assert!(labels[1].is_current);
    assert_eq!(labels.iter().filter(|l| l.is_current).count(), 1);
}
