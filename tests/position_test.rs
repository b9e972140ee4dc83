//! Tests for board positions.

use tictactoe_rewind::{Board, Player, Position, Square};

#[test]
fn test_position_round_trips_through_index() {
    for (index, pos) in Position::ALL.iter().enumerate() {
        assert_eq!(pos.to_index(), index);
        assert_eq!(Position::from_index(index), Some(*pos));
    }
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_row_col_are_row_major() {
    assert_eq!((Position::TopRight.row(), Position::TopRight.col()), (0, 2));
    assert_eq!(
        (Position::BottomCenter.row(), Position::BottomCenter.col()),
        (2, 1)
    );
    for pos in Position::ALL {
        assert_eq!(pos.row() * 3 + pos.col(), pos.to_index());
    }
}

#[test]
fn test_from_label_or_number() {
    assert_eq!(Position::from_label_or_number("4"), Some(Position::Center));
    assert_eq!(Position::from_label_or_number("0"), Some(Position::TopLeft));
    assert_eq!(
        Position::from_label_or_number("bottom-right"),
        Some(Position::BottomRight)
    );
    assert_eq!(
        Position::from_label_or_number(" Middle-left "),
        Some(Position::MiddleLeft)
    );
    assert_eq!(Position::from_label_or_number("9"), None);
    assert_eq!(Position::from_label_or_number("nowhere"), None);
}

#[test]
fn test_valid_moves_empty_board() {
    let board = Board::new();
    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 9);
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut board = Board::new();
    board.set(Position::TopLeft, Square::Occupied(Player::X));
    board.set(Position::Center, Square::Occupied(Player::O));

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}
